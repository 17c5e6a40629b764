//! Error types for the pseudo-ssn crate.
//!
//! Validation and generation failures are modelled as separate semantic enums
//! and unified under [`SsnError`]. [`ExecuteError`] is the raised form handed
//! back to callers that asked for failures to propagate.

use std::fmt;

use thiserror::Error;

/// Person input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The person's first name.
    FirstName,
    /// The person's last name (surname).
    LastName,
    /// The person's date of birth.
    DateOfBirth,
}

impl Field {
    /// Returns the field name as it appears in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::DateOfBirth => "DateOfBirth",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while validating person input.
///
/// Every variant names the field it concerns; see [`ValidationError::field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    #[error("{field} cannot be empty.")]
    EmptyField {
        /// The empty field.
        field: Field,
    },

    /// The date of birth could not be parsed as a calendar date.
    #[error("Invalid DateOfBirth format: {value}. Expected format: yyyy-MM-dd")]
    InvalidDateFormat {
        /// The raw date of birth supplied by the caller.
        value: String,
    },

    /// The date of birth lies after the current date.
    #[error("DateOfBirth cannot be in the future.")]
    FutureBirthDate,

    /// The age derived from the date of birth is outside the accepted range.
    #[error("Invalid age calculated from DateOfBirth: {age} years.")]
    AgeOutOfRange {
        /// Age in whole years as of the current date.
        age: i32,
    },

    /// A name contains characters other than letters, spaces, hyphens,
    /// apostrophes, and periods.
    #[error("{field} contains invalid characters: {value}")]
    InvalidCharacters {
        /// The offending name field.
        field: Field,
        /// The rejected name.
        value: String,
    },
}

impl ValidationError {
    /// Returns the input field this failure refers to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::EmptyField { field } | Self::InvalidCharacters { field, .. } => *field,
            Self::InvalidDateFormat { .. }
            | Self::FutureBirthDate
            | Self::AgeOutOfRange { .. } => Field::DateOfBirth,
        }
    }
}

/// Errors raised by the generator when input cannot be interpreted.
///
/// These are only reachable when validation was skipped or too lenient to
/// catch the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The date of birth is not a recognised date.
    #[error("String '{value}' was not recognized as a valid DateOfBirth.")]
    InvalidDate {
        /// The raw date of birth supplied by the caller.
        value: String,
    },

    /// The last name is empty after trimming, so no surname code exists.
    #[error("LastName must contain at least one non-whitespace character to derive the surname code.")]
    EmptySurname,
}

/// Any failure produced while generating an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SsnError {
    /// Input failed the selected validation tier.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Input could not be interpreted by the generator.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Cancellation was requested before any work started.
    #[error("the operation was cancelled")]
    Cancelled,
}

impl SsnError {
    /// Returns a stable label for the failure kind.
    ///
    /// ```
    /// use pseudo_ssn::{ParseError, SsnError};
    ///
    /// assert_eq!(SsnError::Cancelled.kind(), "cancelled");
    /// assert_eq!(SsnError::from(ParseError::EmptySurname).kind(), "parse");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Parse(_) => "parse",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the input field a validation failure refers to.
    ///
    /// ```
    /// use pseudo_ssn::{Field, SsnError, ValidationError};
    ///
    /// let err = SsnError::from(ValidationError::FutureBirthDate);
    /// assert_eq!(err.field(), Some(Field::DateOfBirth));
    /// assert_eq!(SsnError::Cancelled.field(), None);
    /// ```
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Validation(error) => Some(error.field()),
            Self::Parse(_) | Self::Cancelled => None,
        }
    }
}

/// Failure raised to the caller when `throw_on_failure` is set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// The original failure, unchanged.
    #[error(transparent)]
    Failed(#[from] SsnError),

    /// The original failure wrapped under a caller-supplied message.
    #[error("{message}")]
    Overridden {
        /// Override text configured on the generation options.
        message: String,
        /// The original failure.
        #[source]
        source: SsnError,
    },
}

impl ExecuteError {
    /// Returns the original failure, regardless of any message override.
    #[must_use]
    pub const fn cause(&self) -> &SsnError {
        match self {
            Self::Failed(source) | Self::Overridden { source, .. } => source,
        }
    }
}
