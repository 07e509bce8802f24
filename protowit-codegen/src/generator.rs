//! WIT generation from a root message descriptor.
//!
//! The generator walks the message graph depth-first starting at the root
//! and emits one WIT declaration per reachable entity. Registry membership
//! doubles as the visited set: the check runs strictly before an entity is
//! expanded, so cyclic and diamond-shaped schemas terminate with exactly
//! one unit per entity.

use crate::error::CodegenError;
use crate::options::GeneratorOptions;
use crate::registry::{GeneratedUnit, Registry};
use protowit_schema::{EnumDescriptor, FieldKind, FullName, MessageDescriptor, SchemaSet};
use std::fmt::Write;
use tracing::{trace, warn};

/// WIT generator for one schema set.
///
/// Borrows the schema set immutably; each [`run`](Self::run) owns a fresh
/// [`Registry`] for its duration and hands it back complete.
pub struct Generator<'a> {
    schema: &'a SchemaSet,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over the given schema set.
    #[must_use]
    pub fn new(schema: &'a SchemaSet, options: GeneratorOptions) -> Self {
        Self { schema, options }
    }

    /// Translates the graph reachable from `root` into WIT units.
    ///
    /// Traversal is depth-first in field declaration order, driven by an
    /// explicit work stack rather than native recursion so that schema
    /// depth cannot overflow the call stack. Map fields are never
    /// traversed; enum fields are emitted inline by the type mapper.
    ///
    /// # Errors
    /// Returns `CodegenError` if `root` is absent from the schema set or
    /// names an enum instead of a message.
    pub fn run(&self, root: &FullName) -> Result<Registry, CodegenError> {
        match self.schema.get(root) {
            None => {
                return Err(CodegenError::UnknownRoot { name: root.clone() });
            }
            Some(entity) if !entity.is_message() => {
                return Err(CodegenError::NotAMessage { name: root.clone() });
            }
            Some(_) => {}
        }

        let mut registry = Registry::new(format!("package {};\n\n", self.options.package_name));
        let mut pending = vec![root.clone()];

        while let Some(name) = pending.pop() {
            if registry.contains(&name) {
                trace!(entity = %name, "already generated, skipping");
                continue;
            }
            let Some(message) = self.schema.message(&name) else {
                warn!(entity = %name, "message reference not found in schema set");
                continue;
            };

            let content = self.record_text(message, &mut registry);
            registry.insert(name.clone(), GeneratedUnit::new(self.unit_id(&name), content));
            trace!(entity = %name, "generated record");

            // Reverse push so the stack pops children in declaration order.
            for field in message.fields.iter().rev() {
                if let Some(target) = field.kind.message_ref() {
                    pending.push(target.clone());
                }
            }
        }

        Ok(registry)
    }

    /// Renders the `record` declaration for one message.
    ///
    /// Field names are lower-cased; field order follows declaration order.
    /// Mapping enum-kind fields registers their declarations as a side
    /// effect, which is why the registry is threaded through.
    fn record_text(&self, message: &MessageDescriptor, registry: &mut Registry) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "record {} {{", message.short_name());
        for field in &message.fields {
            let field_name = field.name.to_lowercase();
            let field_type = self.wit_type(&field.kind, registry);
            let _ = writeln!(out, "    {field_name}: {field_type},");
        }
        out.push_str("}\n\n");
        out
    }

    /// Maps a field kind to its WIT type expression.
    ///
    /// Cardinality is not inspected: a repeated field maps exactly like
    /// its singular counterpart. WIT has no native map primitive, so map
    /// kinds flatten to `list<tuple<K, V>>`. Unrecognized kinds degrade to
    /// the `unknown` sentinel instead of failing the run.
    fn wit_type(&self, kind: &FieldKind, registry: &mut Registry) -> String {
        match kind {
            FieldKind::Bool => "bool".to_string(),
            FieldKind::Int32 | FieldKind::Sint32 | FieldKind::Sfixed32 => "s32".to_string(),
            FieldKind::Int64 | FieldKind::Sint64 | FieldKind::Sfixed64 => "s64".to_string(),
            FieldKind::Uint32 | FieldKind::Fixed32 => "u32".to_string(),
            FieldKind::Uint64 | FieldKind::Fixed64 => "u64".to_string(),
            FieldKind::Float => "float32".to_string(),
            FieldKind::Double => "float64".to_string(),
            FieldKind::String => "string".to_string(),
            FieldKind::Bytes => "list<u8>".to_string(),
            FieldKind::Enum(name) => self.enum_type(name, registry),
            FieldKind::Message(name) | FieldKind::Group(name) => name.short().to_string(),
            FieldKind::Map { key, value } => {
                let key_type = self.wit_type(key, registry);
                let value_type = self.wit_type(value, registry);
                format!("list<tuple<{key_type}, {value_type}>>")
            }
            FieldKind::Unsupported => "unknown".to_string(),
        }
    }

    /// Registers the referenced enum's declaration and returns its short
    /// name as the type expression.
    ///
    /// Re-registration on every reference is deliberate: the declaration
    /// text is a deterministic function of the descriptor, so the last
    /// write for a given identity is byte-identical to the first.
    fn enum_type(&self, name: &FullName, registry: &mut Registry) -> String {
        match self.schema.enum_type(name) {
            Some(enum_desc) => {
                let content = enum_text(enum_desc);
                registry.insert(name.clone(), GeneratedUnit::new(self.unit_id(name), content));
                trace!(entity = %name, "generated enum");
            }
            None => {
                warn!(entity = %name, "enum reference not found in schema set");
            }
        }
        name.short().to_string()
    }

    fn unit_id(&self, name: &FullName) -> String {
        if self.options.use_json_names {
            format!("{name}.jsonschema.wit")
        } else {
            format!("{name}.schema.wit")
        }
    }
}

/// Renders the `enum` declaration for one enum descriptor.
fn enum_text(enum_desc: &EnumDescriptor) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "enum {} {{", enum_desc.short_name());
    for value in &enum_desc.values {
        let _ = writeln!(out, "    {},", value.name);
    }
    out.push_str("}\n\n");
    out
}
