//! Flattening a record into ordered field descriptors.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{NO_DIVE_DIRECTIVE, SKIP_DIRECTIVE};
use crate::{Config, FieldMeta, InspectError, Kind, Record, Reflect, Result, Tags, TypeInfo, Value};

/// One emitted field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Resolved display name; nested fields carry their parents' names as
    /// a prefix.
    pub name: String,
    pub kind: Kind,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
    pub tags: Tags,
    /// Declared field positions from the root record down to this field.
    pub path: Vec<usize>,
    /// Snapshot of the field at inspection time.
    pub value: Value,
    pub is_zero: bool,
}

impl FieldDescriptor {
    /// Locates this field in `root`, which must be the value (or a value
    /// of the same type) the descriptor was produced from.
    pub fn resolve<'a>(&self, root: &'a dyn Reflect) -> Result<&'a dyn Reflect> {
        crate::path::resolve(root, &self.path)
    }

    pub fn resolve_mut<'a>(&self, root: &'a mut dyn Reflect) -> Result<&'a mut dyn Reflect> {
        crate::path::resolve_mut(root, &self.path)
    }
}

/// Walks records with a fixed [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    config: Config,
}

impl Inspector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Produces the descriptors of every emittable field of `value`.
    ///
    /// `value` must be a record. A `Some(record)` is dereferenced once;
    /// anything else fails with [`InspectError::InvalidInputKind`].
    #[tracing::instrument(
        level = "debug",
        name = "reflectz.inspect",
        skip_all,
        fields(ty = value.reflect_type().name)
    )]
    pub fn inspect(&self, value: &dyn Reflect) -> Result<Vec<FieldDescriptor>> {
        let record = root_record(value)?;
        let descriptors = self.inspect_record(record)?;
        debug!(count = descriptors.len(), "inspected record");
        Ok(descriptors)
    }

    fn inspect_record(&self, record: &dyn Record) -> Result<Vec<FieldDescriptor>> {
        let config = &self.config;
        let mut out = Vec::new();

        for meta in record.fields() {
            let directive = meta.tags.get(&config.directive_tag);
            if !meta.exported || !meta.reflected || directive == SKIP_DIRECTIVE {
                trace!(record = record.record_name(), field = meta.ident, "skipping field");
                continue;
            }

            let name = field_name(&meta, config);
            let field = record.field(meta.index).ok_or(InspectError::MissingField {
                record: record.record_name(),
                index: meta.index,
            })?;

            if meta.type_info.kind == Kind::Struct
                && config.recursive
                && directive != NO_DIVE_DIRECTIVE
            {
                if let Some(nested) = field.as_record() {
                    let children = self.inspect_record(nested)?;
                    if !children.is_empty() {
                        trace!(field = %name, children = children.len(), "expanded nested record");
                        out.extend(children.into_iter().map(|mut child| {
                            child.name = format!("{}{}{}", name, config.embedded_sep, child.name);
                            child.path.insert(0, meta.index);
                            child
                        }));
                        continue;
                    }
                }
            }

            let value = field.to_value();
            let is_zero = value == meta.type_info.zero_value();
            out.push(FieldDescriptor {
                name,
                kind: meta.type_info.kind,
                type_info: meta.type_info,
                tags: meta.tags,
                path: vec![meta.index],
                value,
                is_zero,
            });
        }

        Ok(out)
    }
}

/// Inspects `value` with the default [`Config`].
pub fn inspect(value: &dyn Reflect) -> Result<Vec<FieldDescriptor>> {
    Inspector::default().inspect(value)
}

pub fn inspect_with(value: &dyn Reflect, config: &Config) -> Result<Vec<FieldDescriptor>> {
    Inspector::new(config.clone()).inspect(value)
}

/// The naming tag's first comma-separated segment wins over the naming
/// scheme. An empty segment counts as no name.
fn field_name(meta: &FieldMeta, config: &Config) -> String {
    if let Some(tag) = config.naming_tag.as_deref() {
        if let Some(value) = meta.tags.lookup(tag) {
            let name = value.split(',').next().unwrap_or_default();
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }
    config.naming_scheme.apply(meta.ident)
}

/// Unwraps one level of optional reference and requires a record.
pub(crate) fn root_record(value: &dyn Reflect) -> Result<&dyn Record> {
    let value = match value.reflect_type().kind {
        Kind::Option => value.pointee().ok_or_else(|| InspectError::InvalidInputKind {
            found: format!("{} (None)", value.reflect_type().name),
        })?,
        _ => value,
    };
    value.as_record().ok_or_else(|| InspectError::InvalidInputKind {
        found: value.reflect_type().name.to_string(),
    })
}

pub(crate) fn root_record_mut(value: &mut dyn Reflect) -> Result<&mut dyn Record> {
    let info = value.reflect_type();
    let value = match info.kind {
        Kind::Option => value.pointee_mut().ok_or_else(|| InspectError::InvalidInputKind {
            found: format!("{} (None)", info.name),
        })?,
        _ => value,
    };
    let info = value.reflect_type();
    value.as_record_mut().ok_or_else(|| InspectError::InvalidInputKind {
        found: info.name.to_string(),
    })
}
