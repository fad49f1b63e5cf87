use std::collections::HashMap;

/// Template processor for resolving $VARIABLE references in manifest values
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Parse a string and resolve all $VARIABLE references.
    ///
    /// Longer names are substituted first so `$NAME` never clobbers `$NAMESPACE`.
    pub fn parse(&self, input: &str) -> String {
        let mut keys: Vec<&String> = self.variables.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut result = input.to_string();
        for key in keys {
            let pattern = format!("${}", key);
            result = result.replace(&pattern, &self.variables[key]);
        }

        result
    }

    /// Parse an optional value, falling back to `default` (also parsed)
    pub fn parse_or(&self, input: Option<&str>, default: &str) -> String {
        self.parse(input.unwrap_or(default))
    }
}

impl Default for Tpl {
    fn default() -> Self {
        Self::new()
    }
}
