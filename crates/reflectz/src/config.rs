use std::fmt;
use std::str::FromStr;

use bon::Builder;
use convert_case::{Case, Casing};
use serde::Deserialize;

use crate::InspectError;

/// Key of the annotation carrying `reflectz` directives, unless overridden
/// through [`Config::directive_tag`].
pub const DIRECTIVE_TAG: &str = "reflectz";

/// Directive value that hides a field and everything below it.
pub const SKIP_DIRECTIVE: &str = "-";

/// Directive value that emits a record field as a single leaf.
pub const NO_DIVE_DIRECTIVE: &str = "nodive";

/// Case convention used to derive a display name from a field identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum NamingScheme {
    #[default]
    SnakeCase,
    CamelCase,
    PascalCase,
}

impl NamingScheme {
    pub fn apply(self, ident: &str) -> String {
        let case = match self {
            NamingScheme::SnakeCase => Case::Snake,
            NamingScheme::CamelCase => Case::Camel,
            NamingScheme::PascalCase => Case::Pascal,
        };
        ident.to_case(case)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NamingScheme::SnakeCase => "snake_case",
            NamingScheme::CamelCase => "camelCase",
            NamingScheme::PascalCase => "PascalCase",
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingScheme {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snake_case" | "snake" => Ok(NamingScheme::SnakeCase),
            "camelCase" | "camel" => Ok(NamingScheme::CamelCase),
            "PascalCase" | "pascal" => Ok(NamingScheme::PascalCase),
            other => Err(InspectError::UnknownNamingScheme(other.to_string())),
        }
    }
}

impl TryFrom<String> for NamingScheme {
    type Error = InspectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options for a single inspection.
///
/// ```ignore
/// let config = Config::builder()
///     .naming_tag("json")
///     .embedded_sep(".")
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Expand nested record fields in place of the field itself.
    #[builder(default = true)]
    pub recursive: bool,
    /// Joins parent and child names when flattening.
    #[builder(into, default = "_".to_string())]
    pub embedded_sep: String,
    /// Fallback name derivation when no naming tag applies.
    #[builder(default)]
    pub naming_scheme: NamingScheme,
    /// Annotation whose value supplies the field name, e.g. `json`.
    #[builder(into)]
    pub naming_tag: Option<String>,
    /// Annotation key holding the `-` and `nodive` directives.
    #[builder(into, default = DIRECTIVE_TAG.to_string())]
    pub directive_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recursive: true,
            embedded_sep: "_".to_string(),
            naming_scheme: NamingScheme::SnakeCase,
            naming_tag: None,
            directive_tag: DIRECTIVE_TAG.to_string(),
        }
    }
}
