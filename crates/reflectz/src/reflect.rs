//! Core traits for runtime field introspection.
//!
//! Rust has no runtime reflection, so every inspectable type describes
//! itself through [`Reflect`]. Struct types also implement [`Record`],
//! which exposes a static table of their fields. `#[derive(Reflect)]`
//! generates both for structs with named fields.
//!
//! # Example
//!
//! ```ignore
//! use reflectz::{FieldMeta, Kind, Record, Reflect, Tags, TypeInfo, Value};
//!
//! struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! impl Record for Point {
//!     fn record_name(&self) -> &'static str { "Point" }
//!
//!     fn fields(&self) -> Vec<FieldMeta> {
//!         vec![
//!             FieldMeta::new(0, "x", i32::type_info()).exported(),
//!             FieldMeta::new(1, "y", i32::type_info()).exported(),
//!         ]
//!     }
//!
//!     fn field(&self, index: usize) -> Option<&dyn Reflect> {
//!         match index {
//!             0 => Some(&self.x),
//!             1 => Some(&self.y),
//!             _ => None,
//!         }
//!     }
//!
//!     fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
//!         match index {
//!             0 => Some(&mut self.x),
//!             1 => Some(&mut self.y),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use std::any::{Any, type_name};
use std::fmt;

use serde::Serialize;

use crate::{Kind, Tags, Value};

/// Static description of a type: its full name, kind and zero value.
#[derive(Clone, Copy, Serialize)]
pub struct TypeInfo {
    /// Full path of the type as reported by [`std::any::type_name`].
    pub name: &'static str,
    pub kind: Kind,
    /// Builds the type's zero value.
    #[serde(skip)]
    pub zero: fn() -> Value,
}

impl TypeInfo {
    pub fn of<T: Reflect>() -> Self {
        T::type_info()
    }

    /// Type info for a field that is not reflected at all.
    ///
    /// Such fields are never emitted or traversed; only the name is real.
    pub fn unreflected<T: ?Sized>() -> Self {
        Self {
            name: type_name::<T>(),
            kind: Kind::Opaque,
            zero: || Value::Unit,
        }
    }

    pub fn zero_value(&self) -> Value {
        (self.zero)()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One entry of a record's field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    /// Declared position, counting every field including private ones.
    pub index: usize,
    /// Declared identifier, without any `r#` prefix.
    pub ident: &'static str,
    pub type_info: TypeInfo,
    pub tags: Tags,
    /// Whether the field is declared `pub`.
    pub exported: bool,
    /// False when the field is not reachable through [`Record::field`].
    pub reflected: bool,
}

impl FieldMeta {
    /// A private, reflected field with no tags.
    pub fn new(index: usize, ident: &'static str, type_info: TypeInfo) -> Self {
        Self {
            index,
            ident,
            type_info,
            tags: Tags::default(),
            exported: false,
            reflected: true,
        }
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn unreflected(mut self) -> Self {
        self.reflected = false;
        self
    }

    pub fn with_tags(mut self, tags: impl Into<Tags>) -> Self {
        self.tags = tags.into();
        self
    }
}

/// A value that can describe its type and copy itself out as a [`Value`].
///
/// The `where Self: Sized` methods describe the type statically and are
/// what field tables are built from. The remaining methods work through
/// `&dyn Reflect`.
pub trait Reflect: Any {
    fn kind() -> Kind
    where
        Self: Sized;

    /// The value a default-initialised field of this type holds.
    fn zero_value() -> Value
    where
        Self: Sized;

    fn type_info() -> TypeInfo
    where
        Self: Sized,
    {
        TypeInfo {
            name: type_name::<Self>(),
            kind: Self::kind(),
            zero: Self::zero_value,
        }
    }

    /// Dynamic counterpart of [`Reflect::type_info`].
    fn reflect_type(&self) -> TypeInfo;

    fn to_value(&self) -> Value;

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    /// The referenced value for reference-like types such as `Option<T>`.
    fn pointee(&self) -> Option<&dyn Reflect> {
        None
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Full name of the implementing type. Unlike [`Reflect::reflect_type`]
    /// this is never forwarded to a wrapped value.
    fn declared_type_name(&self) -> &'static str;

    /// Replaces `self` with `value` when it holds a value of an accepted
    /// type, otherwise hands `value` back untouched.
    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;
}

/// A struct whose fields can be enumerated and addressed by position.
pub trait Record {
    fn record_name(&self) -> &'static str;

    /// Every declared field in declaration order, including private ones.
    fn fields(&self) -> Vec<FieldMeta>;

    /// The field at declared position `index`, if it is reflected.
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Implements the object-safe boilerplate of [`Reflect`] for `Self`.
#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_dyn_methods {
    () => {
        fn reflect_type(&self) -> $crate::TypeInfo {
            <Self as $crate::Reflect>::type_info()
        }

        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
            self
        }

        fn declared_type_name(&self) -> &'static str {
            ::core::any::type_name::<Self>()
        }

        fn assign(
            &mut self,
            value: ::std::boxed::Box<dyn ::core::any::Any>,
        ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::core::any::Any>> {
            *self = *value.downcast::<Self>()?;
            ::core::result::Result::Ok(())
        }
    };
}
