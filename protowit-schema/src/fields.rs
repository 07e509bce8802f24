//! Field descriptors and kind classification.
//!
//! A field's kind decides both the WIT type expression it maps to and
//! whether the graph walker traverses through it. Kind names follow the
//! protobuf kind vocabulary (`int32`, `sint64`, `fixed32`, ...).

use crate::names::FullName;

/// Classification of a field's value type.
///
/// `Enum`, `Message`, and `Group` carry the fully-qualified name of the
/// referenced entity; the target descriptor is resolved through the
/// [`SchemaSet`](crate::SchemaSet). `Map` carries its key and value kinds
/// directly, with no entity reference of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean.
    Bool,
    /// Signed 32-bit integer, varint encoded.
    Int32,
    /// Signed 32-bit integer, zig-zag encoded.
    Sint32,
    /// Signed 32-bit integer, fixed-width encoded.
    Sfixed32,
    /// Signed 64-bit integer, varint encoded.
    Int64,
    /// Signed 64-bit integer, zig-zag encoded.
    Sint64,
    /// Signed 64-bit integer, fixed-width encoded.
    Sfixed64,
    /// Unsigned 32-bit integer, varint encoded.
    Uint32,
    /// Unsigned 32-bit integer, fixed-width encoded.
    Fixed32,
    /// Unsigned 64-bit integer, varint encoded.
    Uint64,
    /// Unsigned 64-bit integer, fixed-width encoded.
    Fixed64,
    /// Single-precision floating point.
    Float,
    /// Double-precision floating point.
    Double,
    /// UTF-8 string.
    String,
    /// Byte sequence.
    Bytes,
    /// Enumeration reference.
    Enum(FullName),
    /// Message reference.
    Message(FullName),
    /// Legacy group reference, treated like a message reference.
    Group(FullName),
    /// Associative map with key and value kinds.
    Map {
        /// Key kind.
        key: Box<FieldKind>,
        /// Value kind.
        value: Box<FieldKind>,
    },
    /// Kind not recognized by this translator.
    Unsupported,
}

impl FieldKind {
    /// Builds a map kind from key and value kinds.
    #[must_use]
    pub fn map(key: FieldKind, value: FieldKind) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Returns the protobuf kind name.
    #[must_use]
    pub const fn proto_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Sint32 => "sint32",
            Self::Sfixed32 => "sfixed32",
            Self::Int64 => "int64",
            Self::Sint64 => "sint64",
            Self::Sfixed64 => "sfixed64",
            Self::Uint32 => "uint32",
            Self::Fixed32 => "fixed32",
            Self::Uint64 => "uint64",
            Self::Fixed64 => "fixed64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Enum(_) => "enum",
            Self::Message(_) => "message",
            Self::Group(_) => "group",
            Self::Map { .. } => "map",
            Self::Unsupported => "unknown",
        }
    }

    /// Returns true if this is a scalar (non-reference, non-map) kind.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(
            self,
            Self::Enum(_) | Self::Message(_) | Self::Group(_) | Self::Map { .. }
        )
    }

    /// Returns true if this is a map kind.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }

    /// Returns the referenced message entity, if this kind traverses into
    /// one. Map kinds carry no entity reference and return `None`.
    #[must_use]
    pub const fn message_ref(&self) -> Option<&FullName> {
        match self {
            Self::Message(name) | Self::Group(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the referenced enum entity, if any.
    #[must_use]
    pub const fn enum_ref(&self) -> Option<&FullName> {
        match self {
            Self::Enum(name) => Some(name),
            _ => None,
        }
    }
}

/// Field of a message descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Short field name as declared in the schema.
    pub name: String,
    /// Kind classification.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Creates a new field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
