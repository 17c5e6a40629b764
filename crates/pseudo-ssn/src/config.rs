//! Generation settings loaded via OrthoConfig.
//!
//! Hosts that expose the generator as a configurable task load
//! [`GenerationSettings`] from CLI arguments, `PSEUDO_SSN_*` environment
//! variables, or a configuration file, then convert them into per-call
//! [`GenerationOptions`].

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::options::{GenerationOptions, IdentifierFormat, ValidationMode};

/// Failures are raised unless configured otherwise.
const DEFAULT_THROW_ON_FAILURE: bool = true;

/// Configuration values controlling identifier generation.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PSEUDO_SSN")]
pub struct GenerationSettings {
    /// Output format of the primary identifier.
    pub format: Option<IdentifierFormat>,
    /// Validation tier applied before generation.
    pub validation_mode: Option<ValidationMode>,
    /// Raise failures instead of returning them in the result.
    pub throw_on_failure: Option<bool>,
    /// Message that replaces or prefixes failure messages.
    pub error_message: Option<String>,
}

impl GenerationSettings {
    /// Return the configured format, falling back to the default.
    #[must_use]
    pub fn format(&self) -> IdentifierFormat {
        self.format.unwrap_or_default()
    }

    /// Return the configured validation tier, falling back to the default.
    #[must_use]
    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode.unwrap_or_default()
    }

    /// Return whether failures are raised, falling back to the default.
    #[must_use]
    pub fn throw_on_failure(&self) -> bool {
        self.throw_on_failure.unwrap_or(DEFAULT_THROW_ON_FAILURE)
    }

    /// Build per-call options from these settings.
    #[must_use]
    pub fn to_options(&self) -> GenerationOptions {
        GenerationOptions {
            format: self.format(),
            validation_mode: self.validation_mode(),
            throw_on_failure: self.throw_on_failure(),
            error_message_override: self.error_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for generation settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> GenerationSettings {
        GenerationSettings::load_from_iter([OsString::from("pseudo-ssn")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PSEUDO_SSN_FORMAT", None::<String>),
            ("PSEUDO_SSN_VALIDATION_MODE", None::<String>),
            ("PSEUDO_SSN_THROW_ON_FAILURE", None::<String>),
            ("PSEUDO_SSN_ERROR_MESSAGE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.throw_on_failure.is_none());
        assert!(settings.throw_on_failure());
        assert_eq!(settings.to_options(), GenerationOptions::default());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PSEUDO_SSN_FORMAT", Some("formatted".to_owned())),
            ("PSEUDO_SSN_VALIDATION_MODE", Some("strict".to_owned())),
            ("PSEUDO_SSN_THROW_ON_FAILURE", Some("false".to_owned())),
            ("PSEUDO_SSN_ERROR_MESSAGE", Some("Generation failed".to_owned())),
        ]);

        let options = load_from_empty_args().to_options();
        assert_eq!(options.format, IdentifierFormat::FormattedWithSpaces);
        assert_eq!(options.validation_mode, ValidationMode::Strict);
        assert!(!options.throw_on_failure);
        assert_eq!(options.message_override(), Some("Generation failed"));
    }

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    fn throw_on_failure_reads_explicit_environment_value(
        #[case] raw: &str,
        #[case] expected: bool,
    ) {
        let _guard = lock_env([
            ("PSEUDO_SSN_FORMAT", None::<String>),
            ("PSEUDO_SSN_VALIDATION_MODE", None::<String>),
            ("PSEUDO_SSN_THROW_ON_FAILURE", Some(raw.to_owned())),
            ("PSEUDO_SSN_ERROR_MESSAGE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.throw_on_failure, Some(expected));
        assert_eq!(settings.to_options().throw_on_failure, expected);
    }

    #[test]
    fn settings_convert_to_options() {
        let settings = GenerationSettings {
            format: None,
            validation_mode: Some(ValidationMode::None),
            throw_on_failure: Some(false),
            error_message: Some(String::new()),
        };
        let options = settings.to_options();

        assert_eq!(options.format, IdentifierFormat::Standard12Digit);
        assert_eq!(options.validation_mode, ValidationMode::None);
        assert!(!options.throw_on_failure);
        assert_eq!(options.message_override(), None);
    }
}
