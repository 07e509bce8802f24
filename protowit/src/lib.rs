//! # Protowit
//!
//! Protobuf-descriptor to WIT (WebAssembly Interface Type) translation.
//!
//! Protowit walks a graph of protobuf message and enum descriptors,
//! starting from a root message, and renders one WIT declaration per
//! reachable entity. The traversal is cycle-safe: self-referential and
//! diamond-shaped schemas produce exactly one unit per entity.
//!
//! ## Quick Start
//!
//! ```
//! use protowit::prelude::*;
//!
//! let mut schema = SchemaSet::new();
//! let mut node = MessageDescriptor::new("acme.Node".parse().unwrap());
//! node.add_field(FieldDescriptor::new(
//!     "next",
//!     FieldKind::Message("acme.Node".parse().unwrap()),
//! ));
//! schema.add_message(node);
//!
//! let registry = generate(
//!     &schema,
//!     &"acme.Node".parse().unwrap(),
//!     GeneratorOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(registry.len(), 1);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Descriptor model, field kinds, and the entity pool
//! - [`codegen`] - Graph walker, type mapper, emitters, and the registry

pub mod prelude;

/// Descriptor model and entity pool.
pub mod schema {
    pub use protowit_schema::*;
}

/// WIT generation from descriptors.
pub mod codegen {
    pub use protowit_codegen::*;
}

// Re-export commonly used items at the crate root
pub use protowit_codegen::{CodegenError, GeneratedUnit, Generator, GeneratorOptions, Registry, generate};
pub use protowit_schema::{
    EntityDescriptor, EnumDescriptor, EnumValue, FieldDescriptor, FieldKind, FullName,
    MessageDescriptor, NameError, SchemaSet,
};
