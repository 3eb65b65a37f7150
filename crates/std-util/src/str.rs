//! String case conversion and pluralization helpers.

use heck::{ToLowerCamelCase, ToSnakeCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// Plural form of a single lowercase word using the `pluralizer` rule set.
pub fn pluralize(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversions() {
        assert_eq!(snake_case("UserProfile"), "user_profile");
        assert_eq!(camel_case("user_profile"), "userProfile");
    }

    #[test]
    fn regular_plurals() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("category"), "categories");
    }
}
