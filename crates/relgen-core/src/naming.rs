//! Identifier naming for projected tables.
//!
//! All lookup tables live in a [`Naming`] value owned by the caller. The
//! word lists are consulted first; anything they do not cover falls back to
//! the general English rules in `std_util::str`.

mod name;
pub use name::Name;

use crate::schema::Model;
use indexmap::{IndexMap, IndexSet};

/// Words that cannot be used as identifiers in generated TypeScript, plus
/// the names the generated relation files import.
const RESERVED: &[&str] = &[
    "any", "as", "boolean", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
    "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "number", "package", "private", "protected", "public", "relations", "return",
    "static", "string", "super", "switch", "symbol", "this", "throw", "true", "try", "type",
    "typeof", "var", "void", "while", "with", "yield",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "metadata",
    "news",
    "series",
    "sheep",
    "species",
];

#[derive(Debug, Clone)]
pub struct Naming {
    /// Singular word to plural word
    irregular: IndexMap<String, String>,

    /// Words whose plural is the word itself
    uncountable: IndexSet<String>,

    /// Identifiers that must not be emitted verbatim
    reserved: IndexSet<String>,

    /// Appended to an identifier that collides with a reserved word
    reserved_suffix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Naming {
            irregular: IRREGULAR
                .iter()
                .map(|(singular, plural)| (singular.to_string(), plural.to_string()))
                .collect(),
            uncountable: UNCOUNTABLE.iter().map(|word| word.to_string()).collect(),
            reserved: RESERVED.iter().map(|word| word.to_string()).collect(),
            reserved_suffix: "Table".to_string(),
        }
    }
}

impl Naming {
    /// A configuration with no word lists at all.
    pub fn empty() -> Self {
        Naming {
            irregular: IndexMap::new(),
            uncountable: IndexSet::new(),
            reserved: IndexSet::new(),
            reserved_suffix: "Table".to_string(),
        }
    }

    pub fn irregular(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.irregular
            .insert(singular.into().to_lowercase(), plural.into().to_lowercase());
        self
    }

    pub fn uncountable(mut self, word: impl Into<String>) -> Self {
        self.uncountable.insert(word.into().to_lowercase());
        self
    }

    pub fn reserved(mut self, word: impl Into<String>) -> Self {
        self.reserved.insert(word.into());
        self
    }

    pub fn reserved_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.reserved_suffix = suffix.into();
        self
    }

    /// Plural form of a single lowercase word.
    pub fn pluralize(&self, word: &str) -> String {
        if let Some(plural) = self.irregular.get(word) {
            return plural.clone();
        }

        if self.uncountable.contains(word) {
            return word.to_string();
        }

        std_util::str::pluralize(word)
    }

    /// Identifier of the generated table constant for `model`.
    ///
    /// An explicit table mapping is used as written (camel-cased); otherwise
    /// the model name is pluralized on its last word.
    pub fn table_ident(&self, model: &Model) -> String {
        self.escape(self.table_base(model).camel_case())
    }

    /// Identifier of the relation map declared for `model`.
    pub fn relations_ident(&self, model: &Model) -> String {
        self.escape(format!("{}Relations", self.table_base(model).camel_case()))
    }

    /// Append the configured suffix if `ident` is reserved.
    pub fn escape(&self, ident: String) -> String {
        if self.reserved.contains(&ident) {
            format!("{ident}{}", self.reserved_suffix)
        } else {
            ident
        }
    }

    fn table_base(&self, model: &Model) -> Name {
        match &model.table_name {
            Some(table_name) => Name::new(table_name),
            None => Name::new(&model.name).map_last(|last| self.pluralize(last)),
        }
    }
}
