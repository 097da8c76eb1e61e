//! Struct field introspection.
//!
//! `reflectz` walks the fields of a struct and produces a flat, ordered list
//! of [`FieldDescriptor`]s: the resolved name, kind, tags, position path,
//! current value and whether that value is zero. Nested structs are
//! expanded in place by default, with their names joined to the parent's.
//!
//! # Overview
//!
//! - [`Reflect`] / [`Record`] - how a type describes itself, usually via `#[derive(Reflect)]`
//! - [`inspect`] / [`inspect_with`] / [`Inspector`] - produce descriptors
//! - [`Config`] - recursion, separator, naming scheme and naming tag
//! - [`resolve_mut`] / [`set_field`] - follow a descriptor path back to a mutable slot
//!
//! # Example
//!
//! ```ignore
//! use reflectz::{Config, Reflect};
//!
//! #[derive(Reflect)]
//! pub struct User {
//!     #[tags(json = "id")]
//!     pub id: u64,
//!     #[tags(json = "email,omitempty")]
//!     pub email: String,
//!     pub info: Info,
//! }
//!
//! #[derive(Reflect)]
//! pub struct Info {
//!     #[reflectz(skip)]
//!     pub address: String,
//!     pub extra: i32,
//!     #[tags(json = "list")]
//!     pub details: Vec<String>,
//! }
//!
//! let config = Config::builder().naming_tag("json").build();
//! let fields = reflectz::inspect_with(&user, &config)?;
//! // id, email, info_extra, info_list
//! ```

extern crate self as reflectz;

mod config;
mod error;
mod impls;
mod inspect;
mod kind;
pub mod path;
mod reflect;
mod tags;
mod value;

pub use config::{Config, DIRECTIVE_TAG, NO_DIVE_DIRECTIVE, NamingScheme, SKIP_DIRECTIVE};
pub use error::{InspectError, Result};
pub use inspect::{FieldDescriptor, Inspector, inspect, inspect_with};
pub use kind::Kind;
pub use path::{resolve, resolve_mut, set_field};
pub use reflect::{FieldMeta, Record, Reflect, TypeInfo};
pub use tags::{TagIter, Tags};
pub use value::Value;

#[cfg(feature = "derive")]
pub use reflectz_derive::Reflect;
