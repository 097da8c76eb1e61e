use std::fmt;

use serde::Serialize;

/// Primitive classification of a field's declared type.
///
/// `Box<T>` is transparent and reports the kind of `T`. `Option<T>` is
/// always [`Kind::Option`], even when `T` is a record, so optional records
/// are never expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Unit,
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    /// Growable sequences: `Vec<T>`, `VecDeque<T>`.
    Seq,
    /// Fixed-size arrays `[T; N]`.
    Array,
    Tuple,
    Map,
    Set,
    Option,
    /// A type implementing [`Record`](crate::Record).
    Struct,
    /// A value reflected only as its debug representation.
    Opaque,
}

impl Kind {
    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 | Kind::I128 | Kind::Isize
        )
    }

    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 | Kind::U128 | Kind::Usize
        )
    }

    pub fn is_integer(self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    /// True for kinds whose values hold a variable number of elements.
    pub fn is_collection(self) -> bool {
        matches!(self, Kind::Seq | Kind::Array | Kind::Map | Kind::Set)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Unit => "unit",
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Seq => "seq",
            Kind::Array => "array",
            Kind::Tuple => "tuple",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Option => "option",
            Kind::Struct => "struct",
            Kind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
