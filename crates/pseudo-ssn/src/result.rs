//! Response shape returned by the generation task.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::SsnError;
use crate::generator::{GeneratedSsn, SsnComponents};
use crate::options::IdentifierFormat;

/// Failure details carried by an unsuccessful [`GenerationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetails {
    /// Human-readable message, including any configured override prefix.
    pub message: String,
    /// The original failure.
    #[serde(serialize_with = "serialize_cause")]
    pub cause: SsnError,
}

/// Outcome of a generation call.
///
/// Successful results carry the identifier and its parts with `error` unset.
/// Failed results carry only `error`; the remaining fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Whether generation succeeded.
    pub success: bool,
    /// The identifier in the requested format.
    pub identifier: String,
    /// The identifier with spaces between groups.
    pub formatted_identifier: String,
    /// The individual parts.
    pub components: SsnComponents,
    /// Failure details when `success` is `false`.
    pub error: Option<FailureDetails>,
}

impl GenerationResult {
    pub(crate) fn success(generated: GeneratedSsn, format: IdentifierFormat) -> Self {
        let identifier = match format {
            IdentifierFormat::Standard12Digit => generated.identifier,
            IdentifierFormat::FormattedWithSpaces => generated.formatted_identifier.clone(),
        };
        Self {
            success: true,
            identifier,
            formatted_identifier: generated.formatted_identifier,
            components: generated.components,
            error: None,
        }
    }

    pub(crate) fn failure(details: FailureDetails) -> Self {
        Self {
            success: false,
            identifier: String::new(),
            formatted_identifier: String::new(),
            components: SsnComponents::default(),
            error: Some(details),
        }
    }
}

fn serialize_cause<S>(cause: &SsnError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = serializer.serialize_struct("SsnError", 2)?;
    state.serialize_field("kind", cause.kind())?;
    state.serialize_field("message", &cause.to_string())?;
    state.end()
}
