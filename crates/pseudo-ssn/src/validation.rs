//! Tiered person input validation.
//!
//! # Validation Rules
//!
//! `Basic`:
//! - First name, last name, and date of birth must not be empty or
//!   whitespace-only
//! - Date of birth must parse as a calendar date
//!
//! `Strict`, in addition:
//! - Date of birth must not lie in the future
//! - Age must be between [`MIN_AGE`] and [`MAX_AGE`] years inclusive
//! - Names may only contain letters, spaces, hyphens, apostrophes, and periods

use chrono::NaiveDate;

use crate::birth_date::{age_in_years, parse_birth_date};
use crate::error::{Field, ValidationError};
use crate::options::ValidationMode;
use crate::person::PersonInput;

/// Minimum accepted age in strict mode.
pub const MIN_AGE: i32 = 0;

/// Maximum accepted age in strict mode.
pub const MAX_AGE: i32 = 150;

/// Validates person input against the selected tier.
///
/// `today` is only consulted by the strict tier's age and future-date checks.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, checking fields in the
/// order first name, last name, date of birth.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pseudo_ssn::{Gender, PersonInput, ValidationMode, validate};
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 24).expect("valid date");
/// let person = PersonInput::new("Jean-Pierre", "O'Connor", "1990-01-01", Gender::Male);
///
/// assert!(validate(&person, ValidationMode::Strict, today).is_ok());
///
/// let nameless = PersonInput::new("", "", "1990-01-01", Gender::Male);
/// assert!(validate(&nameless, ValidationMode::None, today).is_ok());
/// assert!(validate(&nameless, ValidationMode::Basic, today).is_err());
/// ```
pub fn validate(
    input: &PersonInput,
    mode: ValidationMode,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if mode == ValidationMode::None {
        return Ok(());
    }

    require_present(&input.first_name, Field::FirstName)?;
    require_present(&input.last_name, Field::LastName)?;
    require_present(&input.date_of_birth, Field::DateOfBirth)?;

    let birth_date =
        parse_birth_date(&input.date_of_birth).ok_or_else(|| ValidationError::InvalidDateFormat {
            value: input.date_of_birth.clone(),
        })?;

    if mode == ValidationMode::Strict {
        validate_strict(input, birth_date, today)?;
    }

    Ok(())
}

fn validate_strict(
    input: &PersonInput,
    birth_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    // Future dates are reported as such, never as a negative age.
    if birth_date > today {
        return Err(ValidationError::FutureBirthDate);
    }

    let age = age_in_years(birth_date, today);
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange { age });
    }

    require_valid_name(&input.first_name, Field::FirstName)?;
    require_valid_name(&input.last_name, Field::LastName)
}

fn require_present(value: &str, field: Field) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

fn require_valid_name(value: &str, field: Field) -> Result<(), ValidationError> {
    if is_valid_name(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCharacters {
            field,
            value: value.to_owned(),
        })
    }
}

/// Returns `true` if every character of `name` is allowed in a person name.
///
/// # Examples
///
/// ```
/// use pseudo_ssn::is_valid_name;
///
/// assert!(is_valid_name("Jean-Pierre"));
/// assert!(is_valid_name("Zoë Ångström"));
/// assert!(!is_valid_name("Test123"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(is_valid_name_char)
}

/// Allowed characters are Unicode letters, spaces, hyphens, apostrophes, and
/// periods.
fn is_valid_name_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.')
}

#[cfg(test)]
mod tests {
    //! Covers each validation tier and its failure ordering.

    use rstest::{fixture, rstest};

    use super::*;
    use crate::person::Gender;

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 24).expect("valid fixture date")
    }

    fn person(first: &str, last: &str, date_of_birth: &str) -> PersonInput {
        PersonInput::new(first, last, date_of_birth, Gender::Female)
    }

    #[rstest]
    #[case(person("", "", ""))]
    #[case(person("Test123", "User", "invalid-date"))]
    #[case(person("Test", "User", "2099-01-01"))]
    fn none_mode_accepts_anything(#[case] input: PersonInput, today: NaiveDate) {
        assert_eq!(validate(&input, ValidationMode::None, today), Ok(()));
    }

    #[rstest]
    #[case(person("", "Test", "1990-01-01"), Field::FirstName)]
    #[case(person("   ", "Test", "1990-01-01"), Field::FirstName)]
    #[case(person("Test", "", "1990-01-01"), Field::LastName)]
    #[case(person("Test", "\t", "1990-01-01"), Field::LastName)]
    #[case(person("Test", "User", ""), Field::DateOfBirth)]
    #[case(person("", "", ""), Field::FirstName)]
    fn basic_mode_rejects_empty_fields(
        #[case] input: PersonInput,
        #[case] field: Field,
        today: NaiveDate,
    ) {
        let err = validate(&input, ValidationMode::Basic, today).expect_err("empty field");

        assert_eq!(err, ValidationError::EmptyField { field });
        assert!(err.to_string().contains(field.as_str()));
    }

    #[rstest]
    fn basic_mode_rejects_unparseable_date(today: NaiveDate) {
        let input = person("Test", "User", "invalid-date");
        let err = validate(&input, ValidationMode::Basic, today).expect_err("bad date");

        assert_eq!(
            err,
            ValidationError::InvalidDateFormat {
                value: "invalid-date".to_owned()
            }
        );
        assert!(err.to_string().contains("DateOfBirth"));
    }

    #[rstest]
    #[case(person("Test123", "User", "1990-01-01"))]
    #[case(person("Test", "User", "2099-01-01"))]
    #[case(person("Test", "User", "1700-01-01"))]
    fn basic_mode_ignores_strict_rules(#[case] input: PersonInput, today: NaiveDate) {
        assert_eq!(validate(&input, ValidationMode::Basic, today), Ok(()));
    }

    #[rstest]
    fn strict_mode_applies_basic_rules_first(today: NaiveDate) {
        let input = person("", "User1", "2099-01-01");
        let err = validate(&input, ValidationMode::Strict, today).expect_err("empty name");
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: Field::FirstName
            }
        );
    }

    #[rstest]
    #[case("2026-02-25")]
    #[case("2027-01-01")]
    fn strict_mode_rejects_future_birth_dates(#[case] date_of_birth: &str, today: NaiveDate) {
        let input = person("Test", "User", date_of_birth);
        let err = validate(&input, ValidationMode::Strict, today).expect_err("future date");

        assert_eq!(err, ValidationError::FutureBirthDate);
        assert!(err.to_string().contains("future"));
    }

    #[rstest]
    fn strict_mode_rejects_ages_above_limit(today: NaiveDate) {
        let input = person("Test", "User", "1875-02-24");
        let err = validate(&input, ValidationMode::Strict, today).expect_err("too old");

        assert_eq!(err, ValidationError::AgeOutOfRange { age: 151 });
        assert!(err.to_string().contains("age"));
    }

    #[rstest]
    #[case("1875-02-25")]
    #[case("2026-02-24")]
    fn strict_mode_accepts_age_boundaries(#[case] date_of_birth: &str, today: NaiveDate) {
        let input = person("Test", "User", date_of_birth);
        assert_eq!(validate(&input, ValidationMode::Strict, today), Ok(()));
    }

    #[rstest]
    #[case(person("Test123", "User", "1990-01-01"), Field::FirstName)]
    #[case(person("Test", "User_1", "1990-01-01"), Field::LastName)]
    #[case(person("Ada@", "Lovelace", "1990-01-01"), Field::FirstName)]
    fn strict_mode_rejects_invalid_name_characters(
        #[case] input: PersonInput,
        #[case] field: Field,
        today: NaiveDate,
    ) {
        let err = validate(&input, ValidationMode::Strict, today).expect_err("bad name");

        assert_eq!(err.field(), field);
        assert!(err.to_string().contains("invalid characters"));
    }

    #[rstest]
    #[case(person("Jean-Pierre", "O'Connor", "1990-01-01"))]
    #[case(person("J. R.", "Tolkien", "1990-01-01"))]
    #[case(person("Jürgen", "Müller", "1990-01-01"))]
    #[case(person("Иван", "Петров", "1990-01-01"))]
    fn strict_mode_accepts_valid_names(#[case] input: PersonInput, today: NaiveDate) {
        assert_eq!(validate(&input, ValidationMode::Strict, today), Ok(()));
    }

    #[rstest]
    #[case("Ada Lovelace", true)]
    #[case("Mary-Jane", true)]
    #[case("O'Brien", true)]
    #[case("St. John", true)]
    #[case("", true)]
    #[case("R2D2", false)]
    #[case("under_score", false)]
    #[case("tab\tname", false)]
    fn name_character_rules(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_name(name), expected);
    }
}
