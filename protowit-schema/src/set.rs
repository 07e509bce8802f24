//! Entity pool keyed by fully-qualified name.

use crate::descriptors::{EntityDescriptor, EnumDescriptor, MessageDescriptor};
use crate::names::FullName;
use std::collections::HashMap;

/// Pool of schema entities, resolved by fully-qualified name.
///
/// Field kinds reference their target entities by name; the pool is what
/// turns those names back into descriptors during a generation run. Adding
/// an entity under an existing name replaces the earlier definition in
/// place, so iteration order stays the order of first insertion.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    entities: Vec<EntityDescriptor>,
    index: HashMap<FullName, usize>,
}

impl SchemaSet {
    /// Creates an empty schema set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity, replacing any existing entity with the same name.
    pub fn add(&mut self, entity: EntityDescriptor) {
        let name = entity.full_name().clone();
        match self.index.get(&name) {
            Some(&idx) => self.entities[idx] = entity,
            None => {
                self.index.insert(name, self.entities.len());
                self.entities.push(entity);
            }
        }
    }

    /// Adds a message entity.
    pub fn add_message(&mut self, message: MessageDescriptor) {
        self.add(EntityDescriptor::Message(message));
    }

    /// Adds an enum entity.
    pub fn add_enum(&mut self, enum_desc: EnumDescriptor) {
        self.add(EntityDescriptor::Enum(enum_desc));
    }

    /// Looks up an entity by fully-qualified name.
    #[must_use]
    pub fn get(&self, name: &FullName) -> Option<&EntityDescriptor> {
        self.index.get(name).map(|&idx| &self.entities[idx])
    }

    /// Looks up a message entity by name.
    ///
    /// Returns `None` if the name is absent or resolves to an enum.
    #[must_use]
    pub fn message(&self, name: &FullName) -> Option<&MessageDescriptor> {
        self.get(name).and_then(EntityDescriptor::as_message)
    }

    /// Looks up an enum entity by name.
    ///
    /// Returns `None` if the name is absent or resolves to a message.
    #[must_use]
    pub fn enum_type(&self, name: &FullName) -> Option<&EnumDescriptor> {
        self.get(name).and_then(EntityDescriptor::as_enum)
    }

    /// Returns true if an entity with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &FullName) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the set holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates entities in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::EnumValue;
    use crate::fields::{FieldDescriptor, FieldKind};

    fn point() -> MessageDescriptor {
        let mut msg = MessageDescriptor::new("acme.Point".parse().unwrap());
        msg.add_field(FieldDescriptor::new("x", FieldKind::Float));
        msg
    }

    fn color() -> EnumDescriptor {
        let mut en = EnumDescriptor::new("acme.Color".parse().unwrap());
        en.add_value(EnumValue::new("RED", 0));
        en
    }

    #[test]
    fn test_add_and_get() {
        let mut set = SchemaSet::new();
        set.add_message(point());
        set.add_enum(color());

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"acme.Point".parse().unwrap()));
        assert!(!set.contains(&"acme.Missing".parse().unwrap()));
    }

    #[test]
    fn test_typed_lookup() {
        let mut set = SchemaSet::new();
        set.add_message(point());
        set.add_enum(color());

        let point_name: FullName = "acme.Point".parse().unwrap();
        let color_name: FullName = "acme.Color".parse().unwrap();

        assert!(set.message(&point_name).is_some());
        assert!(set.enum_type(&point_name).is_none());
        assert!(set.enum_type(&color_name).is_some());
        assert!(set.message(&color_name).is_none());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut set = SchemaSet::new();
        set.add_message(point());
        set.add_enum(color());

        let mut updated = point();
        updated.add_field(FieldDescriptor::new("y", FieldKind::Double));
        set.add_message(updated);

        assert_eq!(set.len(), 2);
        let names: Vec<&str> = set.iter().map(|e| e.full_name().as_str()).collect();
        assert_eq!(names, vec!["acme.Point", "acme.Color"]);
        let point_name: FullName = "acme.Point".parse().unwrap();
        assert_eq!(set.message(&point_name).unwrap().fields.len(), 2);
    }

    #[test]
    fn test_iter_insertion_order() {
        let mut set = SchemaSet::new();
        set.add_enum(color());
        set.add_message(point());

        let names: Vec<&str> = set.iter().map(|e| e.full_name().as_str()).collect();
        assert_eq!(names, vec!["acme.Color", "acme.Point"]);
    }

    #[test]
    fn test_empty() {
        let set = SchemaSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
