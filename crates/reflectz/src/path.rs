//! Following descriptor paths back into the value they came from.
//!
//! A path is the list of declared field positions produced by
//! [`inspect`](crate::inspect). The root is dereferenced the same way
//! `inspect` does it, then each position selects a field of the current
//! record.

use std::any::type_name;

use tracing::trace;

use crate::inspect::{root_record, root_record_mut};
use crate::{InspectError, Record, Reflect, Result};

/// Returns the field addressed by `path`.
pub fn resolve<'a>(root: &'a dyn Reflect, path: &[usize]) -> Result<&'a dyn Reflect> {
    let (&last, parents) = path.split_last().ok_or(InspectError::EmptyPath)?;
    let mut record = root_record(root)?;
    for (depth, &index) in parents.iter().enumerate() {
        let field = field_at(record, index)?;
        record = field.as_record().ok_or_else(|| InspectError::NotARecord {
            path: path[..=depth].to_vec(),
            found: field.reflect_type().name,
        })?;
    }
    field_at(record, last)
}

/// Returns a mutable handle to the field addressed by `path`.
pub fn resolve_mut<'a>(root: &'a mut dyn Reflect, path: &[usize]) -> Result<&'a mut dyn Reflect> {
    let (&last, parents) = path.split_last().ok_or(InspectError::EmptyPath)?;
    let mut record = root_record_mut(root)?;
    for (depth, &index) in parents.iter().enumerate() {
        let name = record.record_name();
        let field = record
            .field_mut(index)
            .ok_or(InspectError::MissingField { record: name, index })?;
        let found = field.reflect_type().name;
        record = field.as_record_mut().ok_or_else(|| InspectError::NotARecord {
            path: path[..=depth].to_vec(),
            found,
        })?;
    }
    let name = record.record_name();
    record
        .field_mut(last)
        .ok_or(InspectError::MissingField { record: name, index: last })
}

/// Overwrites the field addressed by `path` with `value`.
///
/// Fails with [`InspectError::TypeMismatch`] when the slot does not hold a
/// `T`. Slots of type `Box<T>` accept either a `Box<T>` or a plain `T`.
#[tracing::instrument(level = "debug", name = "reflectz.set_field", skip(root, value))]
pub fn set_field<T: Reflect>(root: &mut dyn Reflect, path: &[usize], value: T) -> Result<()> {
    let slot = resolve_mut(root, path)?;
    let expected = slot.declared_type_name();
    if slot.assign(Box::new(value)).is_err() {
        return Err(InspectError::TypeMismatch {
            path: path.to_vec(),
            expected,
            found: type_name::<T>(),
        });
    }
    trace!(expected, "field overwritten");
    Ok(())
}

fn field_at(record: &dyn Record, index: usize) -> Result<&dyn Reflect> {
    record.field(index).ok_or(InspectError::MissingField {
        record: record.record_name(),
        index,
    })
}
