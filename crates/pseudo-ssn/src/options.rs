//! Generation options.
//!
//! Options are pure per-call configuration. Defaults mirror the behaviour
//! hosts expect out of the box: the compact identifier, basic validation, and
//! failures raised rather than returned.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format of the primary identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierFormat {
    /// Digits only, for example `421501901334`.
    #[default]
    #[serde(rename = "standard")]
    Standard12Digit,
    /// Space separated groups, for example `42 150190 13 348`.
    #[serde(rename = "formatted")]
    FormattedWithSpaces,
}

/// How strictly person input is checked before generation.
///
/// Tiers are cumulative: `Strict` applies every `Basic` rule first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// No validation.
    None,
    /// Required fields and date format.
    #[default]
    Basic,
    /// Basic rules plus age limits and name characters.
    Strict,
}

/// Error returned when an option value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {option} '{value}'")]
pub struct UnknownOptionValue {
    /// Name of the option being parsed.
    pub option: &'static str,
    /// The rejected value.
    pub value: String,
}

impl FromStr for IdentifierFormat {
    type Err = UnknownOptionValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "standard12digit" => Ok(Self::Standard12Digit),
            "formatted" | "formattedwithspaces" => Ok(Self::FormattedWithSpaces),
            _ => Err(UnknownOptionValue {
                option: "identifier format",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = UnknownOptionValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "strict" => Ok(Self::Strict),
            _ => Err(UnknownOptionValue {
                option: "validation mode",
                value: s.to_owned(),
            }),
        }
    }
}

/// Per-call generation options.
///
/// # Example
///
/// ```
/// use pseudo_ssn::{GenerationOptions, IdentifierFormat, ValidationMode};
///
/// let options = GenerationOptions {
///     format: IdentifierFormat::FormattedWithSpaces,
///     validation_mode: ValidationMode::Strict,
///     ..GenerationOptions::default()
/// };
///
/// assert!(options.throw_on_failure);
/// assert_eq!(options.message_override(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    /// Format of the primary identifier.
    pub format: IdentifierFormat,
    /// Validation tier applied before generation.
    pub validation_mode: ValidationMode,
    /// Raise failures instead of returning them in the result.
    pub throw_on_failure: bool,
    /// Message that replaces or prefixes the original failure message.
    pub error_message_override: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            format: IdentifierFormat::default(),
            validation_mode: ValidationMode::default(),
            throw_on_failure: true,
            error_message_override: None,
        }
    }
}

impl GenerationOptions {
    /// Returns the override message, treating an empty string as unset.
    #[must_use]
    pub fn message_override(&self) -> Option<&str> {
        self.error_message_override
            .as_deref()
            .filter(|message| !message.is_empty())
    }
}
