//! # Protowit Codegen
//!
//! WIT (WebAssembly Interface Type) generation from protobuf descriptors.
//!
//! This crate provides:
//! - A graph walker over message descriptors with cycle-safe traversal
//! - An exhaustive protobuf-kind to WIT-type mapping
//! - Record and enum declaration emission
//! - A per-run result registry of generated units
//!
//! One call to [`generate`] translates everything reachable from a root
//! message into WIT text, one unit per entity:
//!
//! ```
//! use protowit_codegen::{GeneratorOptions, generate};
//! use protowit_schema::{FieldDescriptor, FieldKind, MessageDescriptor, SchemaSet};
//!
//! let mut schema = SchemaSet::new();
//! let mut point = MessageDescriptor::new("acme.Point".parse().unwrap());
//! point.add_field(FieldDescriptor::new("x", FieldKind::Float));
//! point.add_field(FieldDescriptor::new("y", FieldKind::Double));
//! schema.add_message(point);
//!
//! let registry = generate(
//!     &schema,
//!     &"acme.Point".parse().unwrap(),
//!     GeneratorOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     registry.to_wit(),
//!     "package generated;\n\nrecord Point {\n    x: float32,\n    y: float64,\n}\n\n"
//! );
//! ```

pub mod error;
pub mod generator;
pub mod options;
pub mod registry;

pub use error::CodegenError;
pub use generator::Generator;
pub use options::GeneratorOptions;
pub use registry::{GeneratedUnit, Registry};

use protowit_schema::{FullName, SchemaSet};

/// Generates WIT units for the graph reachable from `root`.
///
/// # Arguments
/// * `schema` - Entity pool resolving typed references
/// * `root` - Fully-qualified name of the root message
/// * `options` - Run configuration
///
/// # Returns
/// The completed registry, one unit per reachable entity.
///
/// # Errors
/// Returns `CodegenError` if `root` cannot serve as a starting record.
pub fn generate(
    schema: &SchemaSet,
    root: &FullName,
    options: GeneratorOptions,
) -> Result<Registry, CodegenError> {
    Generator::new(schema, options).run(root)
}
