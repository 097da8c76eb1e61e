// ============================================================================
// Standard library implementations
// ============================================================================

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::time::Duration;

use indexmap::IndexMap;

use crate::{FieldMeta, Kind, Record, Reflect, TypeInfo, Value};

macro_rules! impl_reflect_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind() -> Kind {
                    Kind::$kind
                }

                fn zero_value() -> Value {
                    Value::from(<$ty>::default())
                }

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                crate::__reflect_dyn_methods!();
            }
        )*
    };
}

impl_reflect_primitive!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);

impl Reflect for () {
    fn kind() -> Kind {
        Kind::Unit
    }

    fn zero_value() -> Value {
        Value::Unit
    }

    fn to_value(&self) -> Value {
        Value::Unit
    }

    crate::__reflect_dyn_methods!();
}

impl Reflect for String {
    fn kind() -> Kind {
        Kind::String
    }

    fn zero_value() -> Value {
        Value::String(String::new())
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    crate::__reflect_dyn_methods!();
}

impl Reflect for &'static str {
    fn kind() -> Kind {
        Kind::String
    }

    fn zero_value() -> Value {
        Value::String(String::new())
    }

    fn to_value(&self) -> Value {
        Value::String((*self).to_string())
    }

    crate::__reflect_dyn_methods!();
}

// ============================================================================
// Container implementations
// ============================================================================

impl<T: Reflect> Reflect for Vec<T> {
    fn kind() -> Kind {
        Kind::Seq
    }

    fn zero_value() -> Value {
        Value::Seq(Vec::new())
    }

    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(Reflect::to_value).collect())
    }

    crate::__reflect_dyn_methods!();
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn kind() -> Kind {
        Kind::Seq
    }

    fn zero_value() -> Value {
        Value::Seq(Vec::new())
    }

    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(Reflect::to_value).collect())
    }

    crate::__reflect_dyn_methods!();
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn kind() -> Kind {
        Kind::Array
    }

    fn zero_value() -> Value {
        Value::Seq((0..N).map(|_| T::zero_value()).collect())
    }

    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(Reflect::to_value).collect())
    }

    crate::__reflect_dyn_methods!();
}

impl<T: Reflect> Reflect for Option<T> {
    fn kind() -> Kind {
        Kind::Option
    }

    fn zero_value() -> Value {
        Value::Option(None)
    }

    fn to_value(&self) -> Value {
        Value::Option(self.as_ref().map(|inner| Box::new(inner.to_value())))
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|inner| inner as &dyn Reflect)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|inner| inner as &mut dyn Reflect)
    }

    crate::__reflect_dyn_methods!();
}

/// `Box<T>` is transparent: it reports and exposes `T` in every respect,
/// so a path can be followed through it and a slot holding one accepts a
/// plain `T` on assignment.
impl<T: Reflect> Reflect for Box<T> {
    fn kind() -> Kind {
        T::kind()
    }

    fn zero_value() -> Value {
        T::zero_value()
    }

    fn type_info() -> TypeInfo {
        T::type_info()
    }

    fn reflect_type(&self) -> TypeInfo {
        T::type_info()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        (**self).as_record_mut()
    }

    fn pointee(&self) -> Option<&dyn Reflect> {
        (**self).pointee()
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        (**self).pointee_mut()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        (**self).as_any_mut()
    }

    fn declared_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Accepts a whole `Box<T>` as well as a plain `T`.
    fn assign(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        match value.downcast::<Self>() {
            Ok(boxed) => {
                *self = *boxed;
                Ok(())
            }
            Err(value) => (**self).assign(value),
        }
    }
}

macro_rules! impl_reflect_map {
    ($map:ident, $($bound:path),+) => {
        impl<K, V> Reflect for $map<K, V>
        where
            K: Reflect $(+ $bound)+,
            V: Reflect,
        {
            fn kind() -> Kind {
                Kind::Map
            }

            fn zero_value() -> Value {
                Value::Map(Vec::new())
            }

            fn to_value(&self) -> Value {
                Value::Map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
            }

            crate::__reflect_dyn_methods!();
        }
    };
}

impl_reflect_map!(HashMap, Eq, Hash);
impl_reflect_map!(BTreeMap, Ord);
impl_reflect_map!(IndexMap, Eq, Hash);

macro_rules! impl_reflect_set {
    ($set:ident, $($bound:path),+) => {
        impl<T> Reflect for $set<T>
        where
            T: Reflect $(+ $bound)+,
        {
            fn kind() -> Kind {
                Kind::Set
            }

            fn zero_value() -> Value {
                Value::Seq(Vec::new())
            }

            fn to_value(&self) -> Value {
                Value::Seq(self.iter().map(Reflect::to_value).collect())
            }

            crate::__reflect_dyn_methods!();
        }
    };
}

impl_reflect_set!(HashSet, Eq, Hash);
impl_reflect_set!(BTreeSet, Ord);

macro_rules! impl_reflect_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            fn kind() -> Kind {
                Kind::Tuple
            }

            fn zero_value() -> Value {
                Value::Seq(vec![$($name::zero_value()),+])
            }

            fn to_value(&self) -> Value {
                Value::Seq(vec![$(self.$idx.to_value()),+])
            }

            crate::__reflect_dyn_methods!();
        }
    };
}

impl_reflect_tuple!(A: 0);
impl_reflect_tuple!(A: 0, B: 1);
impl_reflect_tuple!(A: 0, B: 1, C: 2);
impl_reflect_tuple!(A: 0, B: 1, C: 2, D: 3);

// ============================================================================
// Opaque records
// ============================================================================

/// Reflects a struct with no public fields: a record whose field table is
/// empty. Inspecting it directly yields nothing, and as a nested field it
/// always falls back to a single leaf descriptor carrying its debug text.
macro_rules! impl_opaque_record {
    ($ty:ty, $name:literal, $zero:expr, |$v:ident| $repr:expr) => {
        impl Reflect for $ty {
            fn kind() -> Kind {
                Kind::Struct
            }

            fn zero_value() -> Value {
                let $v: $ty = $zero;
                Value::Opaque {
                    type_name: $name,
                    repr: $repr,
                }
            }

            fn to_value(&self) -> Value {
                let $v = self;
                Value::Opaque {
                    type_name: $name,
                    repr: $repr,
                }
            }

            fn as_record(&self) -> Option<&dyn Record> {
                Some(self)
            }

            fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
                Some(self)
            }

            crate::__reflect_dyn_methods!();
        }

        impl Record for $ty {
            fn record_name(&self) -> &'static str {
                $name
            }

            fn fields(&self) -> Vec<FieldMeta> {
                Vec::new()
            }

            fn field(&self, _index: usize) -> Option<&dyn Reflect> {
                None
            }

            fn field_mut(&mut self, _index: usize) -> Option<&mut dyn Reflect> {
                None
            }
        }
    };
}

impl_opaque_record!(Duration, "Duration", Duration::ZERO, |d| format!("{d:?}"));

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    use super::*;

    impl_opaque_record!(
        DateTime<Utc>,
        "DateTime<Utc>",
        DateTime::<Utc>::default(),
        |d| d.to_rfc3339()
    );
    impl_opaque_record!(NaiveDate, "NaiveDate", NaiveDate::default(), |d| d.to_string());
    impl_opaque_record!(
        NaiveDateTime,
        "NaiveDateTime",
        NaiveDateTime::default(),
        |d| d.to_string()
    );
}
