//! # Protowit Schema
//!
//! Protobuf descriptor model for WIT generation.
//!
//! This crate provides:
//! - Fully-qualified entity names
//! - Message, enum, and field descriptors
//! - Field kind classification
//! - An entity pool (`SchemaSet`) resolving typed references by name
//!
//! Descriptors are read-only inputs: they are built once by whatever
//! boundary supplies the schema (a plugin transport, a test fixture) and
//! never mutated during a generation run. Message and enum fields refer to
//! their target entities by fully-qualified name, resolved through the
//! [`SchemaSet`], which is what lets a schema graph contain cycles and
//! shared sub-entities while staying plain owned data.

pub mod descriptors;
pub mod error;
pub mod fields;
pub mod names;
pub mod set;

pub use descriptors::{EntityDescriptor, EnumDescriptor, EnumValue, MessageDescriptor};
pub use error::NameError;
pub use fields::{FieldDescriptor, FieldKind};
pub use names::FullName;
pub use set::SchemaSet;
