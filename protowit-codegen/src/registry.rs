//! Result registry for one generation run.

use protowit_schema::FullName;
use std::collections::HashMap;

/// Output artifact for one entity: an advisory identifier and the
/// generated WIT text.
///
/// The identifier is metadata for a downstream file-writer (e.g.
/// `acme.Point.schema.wit`); it has no effect on the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Unit identifier.
    pub id: String,
    /// Generated WIT text.
    pub content: String,
}

impl GeneratedUnit {
    /// Creates a new generated unit.
    #[must_use]
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Mapping from entity identity to generated unit.
///
/// Created empty at the start of a run, populated incrementally by the
/// generator, and handed back complete; it has no existence outside a
/// single run. Keys are unique. Re-inserting under an existing name
/// replaces the unit in place, so enumeration order stays the order of
/// first emission. The registry also carries the `package <name>;` header
/// line, emitted once per run before any entity text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    header: String,
    units: Vec<(FullName, GeneratedUnit)>,
    index: HashMap<FullName, usize>,
}

impl Registry {
    /// Creates an empty registry with the given header line.
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            units: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the header text.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Inserts a unit, replacing any existing unit for the same entity.
    pub fn insert(&mut self, name: FullName, unit: GeneratedUnit) {
        match self.index.get(&name) {
            Some(&idx) => self.units[idx].1 = unit,
            None => {
                self.index.insert(name.clone(), self.units.len());
                self.units.push((name, unit));
            }
        }
    }

    /// Returns true if a unit exists for the given entity.
    #[must_use]
    pub fn contains(&self, name: &FullName) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a unit by entity name.
    #[must_use]
    pub fn get(&self, name: &FullName) -> Option<&GeneratedUnit> {
        self.index.get(name).map(|&idx| &self.units[idx].1)
    }

    /// Returns the number of units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if the registry holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterates units in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&FullName, &GeneratedUnit)> {
        self.units.iter().map(|(name, unit)| (name, unit))
    }

    /// Concatenates the header and all unit contents in emission order
    /// into one WIT document.
    #[must_use]
    pub fn to_wit(&self) -> String {
        let mut output = String::with_capacity(
            self.header.len() + self.units.iter().map(|(_, u)| u.content.len()).sum::<usize>(),
        );
        output.push_str(&self.header);
        for (_, unit) in &self.units {
            output.push_str(&unit.content);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> FullName {
        s.parse().unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = Registry::new("package generated;\n\n");
        registry.insert(
            name("acme.Point"),
            GeneratedUnit::new("acme.Point.schema.wit", "record Point {\n}\n\n"),
        );

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&name("acme.Point")));
        assert!(!registry.contains(&name("acme.Missing")));
        assert_eq!(
            registry.get(&name("acme.Point")).unwrap().id,
            "acme.Point.schema.wit"
        );
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mut registry = Registry::new("");
        registry.insert(name("a.First"), GeneratedUnit::new("first", "one"));
        registry.insert(name("a.Second"), GeneratedUnit::new("second", "two"));
        registry.insert(name("a.First"), GeneratedUnit::new("first", "updated"));

        assert_eq!(registry.len(), 2);
        let order: Vec<&str> = registry.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["a.First", "a.Second"]);
        assert_eq!(registry.get(&name("a.First")).unwrap().content, "updated");
    }

    #[test]
    fn test_to_wit_concatenation() {
        let mut registry = Registry::new("package acme;\n\n");
        registry.insert(name("a.A"), GeneratedUnit::new("a", "record A {\n}\n\n"));
        registry.insert(name("a.B"), GeneratedUnit::new("b", "record B {\n}\n\n"));

        assert_eq!(
            registry.to_wit(),
            "package acme;\n\nrecord A {\n}\n\nrecord B {\n}\n\n"
        );
    }

    #[test]
    fn test_empty() {
        let registry = Registry::new("package generated;\n\n");
        assert!(registry.is_empty());
        assert_eq!(registry.to_wit(), "package generated;\n\n");
    }
}
