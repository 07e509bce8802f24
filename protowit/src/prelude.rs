//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use protowit::prelude::*;
//! ```

// Schema types
pub use protowit_schema::{
    EntityDescriptor, EnumDescriptor, EnumValue, FieldDescriptor, FieldKind, FullName,
    MessageDescriptor, NameError, SchemaSet,
};

// Codegen types
pub use protowit_codegen::{
    CodegenError, GeneratedUnit, Generator, GeneratorOptions, Registry, generate,
};
