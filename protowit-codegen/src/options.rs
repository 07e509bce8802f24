//! Generation run configuration.

/// Configuration for one generation run.
///
/// Constructed once before a run begins; the generator never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Package name emitted in the `package <name>;` header line.
    pub package_name: String,
    /// Selects the `.jsonschema.wit` unit identifier suffix instead of
    /// `.schema.wit`. Does not affect generated body text.
    pub use_json_names: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package_name: "generated".to_string(),
            use_json_names: false,
        }
    }
}

impl GeneratorOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the package name.
    #[must_use]
    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Enables JSON-style unit identifiers.
    #[must_use]
    pub fn with_json_names(mut self, use_json_names: bool) -> Self {
        self.use_json_names = use_json_names;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.package_name, "generated");
        assert!(!options.use_json_names);
    }

    #[test]
    fn test_builders() {
        let options = GeneratorOptions::new()
            .with_package_name("acme")
            .with_json_names(true);
        assert_eq!(options.package_name, "acme");
        assert!(options.use_json_names);
    }
}
