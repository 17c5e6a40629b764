//! Deterministic pseudo social security number synthesis.
//!
//! This crate derives an SSN-like identifier from a person's name and date of
//! birth using a fixed positional scheme: area number, birth date, surname
//! code, serial number, and a Luhn-style check digit. Identifiers are
//! reproducible for identical input and are not real or legally valid
//! numbers.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Tiered input validation (`None`, `Basic`, `Strict`)
//! - Deterministic generation with no randomness or stored state
//! - Raising failures or returning them inside the result, with optional
//!   message overrides
//! - Settings loaded from CLI, environment, or file via OrthoConfig
//!
//! # Example
//!
//! ```
//! use pseudo_ssn::{
//!     CancellationFlag, Gender, GenerationOptions, IdentifierFormat, PersonInput, execute,
//! };
//!
//! let person = PersonInput::new("Hans", "Mueller", "1975-12-01", Gender::Male);
//! let options = GenerationOptions {
//!     format: IdentifierFormat::FormattedWithSpaces,
//!     ..GenerationOptions::default()
//! };
//!
//! let result = execute(&person, &options, &CancellationFlag::new()).expect("generated");
//!
//! assert!(result.success);
//! assert_eq!(result.components.birth_date, "011275");
//! assert_eq!(result.identifier.matches(' ').count(), 3);
//! ```

mod birth_date;
mod cancellation;
mod config;
mod error;
mod generator;
mod options;
mod person;
mod result;
mod task;
mod validation;

pub use birth_date::parse_birth_date;
pub use cancellation::CancellationFlag;
pub use config::GenerationSettings;
pub use error::{ExecuteError, Field, ParseError, SsnError, ValidationError};
pub use generator::{GeneratedSsn, SsnComponents, check_digit, generate};
pub use options::{GenerationOptions, IdentifierFormat, UnknownOptionValue, ValidationMode};
pub use person::{Gender, PersonInput};
pub use result::{FailureDetails, GenerationResult};
pub use task::{SsnTask, execute};
pub use validation::{MAX_AGE, MIN_AGE, is_valid_name, validate};
