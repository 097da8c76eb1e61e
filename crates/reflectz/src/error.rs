/// Failure from [`inspect`](crate::inspect) or the path resolver.
///
/// Every variant is a programmer error: the input had the wrong shape, a
/// config value could not be parsed, or a path did not lead to a field.
/// Nothing here is transient, so there is nothing to retry.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InspectError {
    /// The top-level value (after one dereference) is not a record.
    #[error("inspect must be passed a record or a reference to one, got {found}")]
    InvalidInputKind { found: String },

    /// A naming scheme name did not match `snake_case`, `camelCase` or `PascalCase`.
    #[error("unknown naming scheme `{0}`; expected snake_case, camelCase or PascalCase")]
    UnknownNamingScheme(String),

    /// A `Record` impl lists a reflected field it cannot hand out.
    #[error("record `{record}` has no reflected field at position {index}")]
    MissingField { record: &'static str, index: usize },

    #[error("field path is empty")]
    EmptyPath,

    /// A path step tried to descend into something that is not a record.
    #[error("value at path {path:?} is `{found}`, not a record")]
    NotARecord { path: Vec<usize>, found: &'static str },

    /// The addressed slot holds a different type than the one being written.
    #[error("field at path {path:?} has type `{expected}`, cannot assign `{found}`")]
    TypeMismatch {
        path: Vec<usize>,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T, E = InspectError> = std::result::Result<T, E>;
