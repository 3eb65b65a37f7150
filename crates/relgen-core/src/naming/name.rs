use std_util::str;

/// An identifier split into its lowercase word parts.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn camel_case(&self) -> String {
        str::camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Replace the last word part, e.g. to pluralize a compound name.
    pub fn map_last(mut self, f: impl FnOnce(&str) -> String) -> Self {
        if let Some(last) = self.parts.last_mut() {
            *last = f(last);
        }
        self
    }
}
