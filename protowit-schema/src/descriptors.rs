//! Message and enum descriptors.
//!
//! Descriptors are the read-only schema entities a generation run walks.
//! They are supplied whole by the schema source and never mutated after
//! construction.

use crate::fields::FieldDescriptor;
use crate::names::FullName;

/// Message (record) descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// Fully-qualified name.
    pub full_name: FullName,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    /// Creates a new message descriptor with no fields.
    #[must_use]
    pub fn new(full_name: FullName) -> Self {
        Self {
            full_name,
            fields: Vec::new(),
        }
    }

    /// Adds a field, preserving declaration order.
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Adds a field, consuming and returning the descriptor.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the short name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.full_name.short()
    }
}

/// Enumeration descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Fully-qualified name.
    pub full_name: FullName,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumDescriptor {
    /// Creates a new enum descriptor with no values.
    #[must_use]
    pub fn new(full_name: FullName) -> Self {
        Self {
            full_name,
            values: Vec::new(),
        }
    }

    /// Adds a value, preserving declaration order.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Returns the short name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.full_name.short()
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Wire number.
    pub number: i32,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// Entity descriptor variants stored in a [`SchemaSet`](crate::SchemaSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityDescriptor {
    /// Message entity.
    Message(MessageDescriptor),
    /// Enum entity.
    Enum(EnumDescriptor),
}

impl EntityDescriptor {
    /// Returns the fully-qualified name of the entity.
    #[must_use]
    pub fn full_name(&self) -> &FullName {
        match self {
            Self::Message(m) => &m.full_name,
            Self::Enum(e) => &e.full_name,
        }
    }

    /// Returns true if this is a message entity.
    #[must_use]
    pub const fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// Returns true if this is an enum entity.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns the message descriptor, if this is a message entity.
    #[must_use]
    pub const fn as_message(&self) -> Option<&MessageDescriptor> {
        match self {
            Self::Message(m) => Some(m),
            Self::Enum(_) => None,
        }
    }

    /// Returns the enum descriptor, if this is an enum entity.
    #[must_use]
    pub const fn as_enum(&self) -> Option<&EnumDescriptor> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Message(_) => None,
        }
    }
}
