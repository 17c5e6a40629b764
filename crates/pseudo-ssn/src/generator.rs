//! Deterministic identifier generation.
//!
//! The identifier is laid out as `AA DDMMYY SS NN C`:
//!
//! - `AA`: area number derived from the birth year (10-98)
//! - `DDMMYY`: birth date
//! - `SS`: surname code from the first letter of the last name (01-26)
//! - `NN`: serial number hashed from the name and raw birth date (10-99)
//! - `C`: check digit over the preceding digits
//!
//! The same input always produces the same identifier. None of the parts
//! correspond to real regional or personal codes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::birth_date::parse_birth_date;
use crate::error::ParseError;
use crate::person::PersonInput;

/// Divisor spreading birth years over area numbers.
const AREA_SPAN: i32 = 89;

/// Lowest area number.
const AREA_BASE: i32 = 10;

/// Number of distinct serial numbers.
const SERIAL_SPAN: u64 = 90;

/// Lowest serial number.
const SERIAL_BASE: u64 = 10;

/// Number of surname codes.
const SURNAME_SPAN: u32 = 26;

/// Hash bytes folded into the serial number seed.
const HASH_PREFIX_LEN: usize = 8;

/// Individual parts of a generated identifier.
///
/// # Example
///
/// ```
/// use pseudo_ssn::{Gender, PersonInput, generate};
///
/// let person = PersonInput::new("Max", "Mustermann", "1990-01-15", Gender::Male);
/// let generated = generate(&person).expect("valid person");
///
/// assert_eq!(generated.components.area_number, "42");
/// assert_eq!(generated.components.birth_date, "150190");
/// assert_eq!(generated.components.surname_code, "13");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsnComponents {
    /// Area number, two digits.
    pub area_number: String,
    /// Birth date as `DDMMYY`.
    pub birth_date: String,
    /// Surname code, two digits.
    pub surname_code: String,
    /// Serial number, one or two digits.
    pub serial_number: String,
    /// Check digit, one digit.
    pub check_digit: String,
}

impl SsnComponents {
    /// Returns the digits the check digit is computed over.
    #[must_use]
    pub fn base_digits(&self) -> String {
        format!(
            "{}{}{}{}",
            self.area_number, self.birth_date, self.surname_code, self.serial_number
        )
    }
}

/// Output of [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSsn {
    /// Twelve digits without separators or check digit.
    pub identifier: String,
    /// Space separated groups, `AA DDMMYY SS NNC`.
    pub formatted_identifier: String,
    /// The individual parts.
    pub components: SsnComponents,
}

/// Generates the identifier for a person.
///
/// Input is not validated here beyond what generation needs: the date of
/// birth must parse and the last name must contain a non-whitespace
/// character.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] if the date of birth cannot be parsed
/// and [`ParseError::EmptySurname`] if the trimmed last name is empty.
pub fn generate(input: &PersonInput) -> Result<GeneratedSsn, ParseError> {
    let birth_date =
        parse_birth_date(&input.date_of_birth).ok_or_else(|| ParseError::InvalidDate {
            value: input.date_of_birth.clone(),
        })?;

    let area = format!("{:02}", area_number(birth_date));
    let birth = birth_date_part(birth_date);
    let surname = format!("{:02}", surname_code(&input.last_name)?);
    let serial =
        serial_number(&input.first_name, &input.last_name, &input.date_of_birth).to_string();

    let identifier = format!("{area}{birth}{surname}{serial}");
    // Every part is rendered from integers, so the base is all digits.
    let check = check_digit(&identifier).unwrap_or_default().to_string();
    let formatted_identifier = format!("{area} {birth} {surname} {serial}{check}");

    Ok(GeneratedSsn {
        identifier,
        formatted_identifier,
        components: SsnComponents {
            area_number: area,
            birth_date: birth,
            surname_code: surname,
            serial_number: serial,
            check_digit: check,
        },
    })
}

/// Maps the birth year into `10..=98`.
fn area_number(birth_date: NaiveDate) -> i32 {
    birth_date.year().rem_euclid(AREA_SPAN) + AREA_BASE
}

/// Renders the birth date as `DDMMYY`.
fn birth_date_part(birth_date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        birth_date.day(),
        birth_date.month(),
        birth_date.year().rem_euclid(100)
    )
}

/// Maps the first letter of the trimmed surname into `1..=26`.
///
/// `A`-`Z` (either case) map to their alphabet position. Any other character
/// maps through its code point so every surname yields a code.
fn surname_code(last_name: &str) -> Result<u32, ParseError> {
    let first = last_name
        .trim()
        .chars()
        .next()
        .ok_or(ParseError::EmptySurname)?;
    let upper = single_uppercase(first);

    if upper.is_ascii_uppercase() {
        Ok(u32::from(upper) - u32::from('A') + 1)
    } else {
        Ok(u32::from(upper).rem_euclid(SURNAME_SPAN) + 1)
    }
}

/// Uppercases `c` when that yields exactly one character.
fn single_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

/// Hashes the lowercased names and raw birth date into `10..=99`.
fn serial_number(first_name: &str, last_name: &str, date_of_birth: &str) -> u64 {
    let combined = format!(
        "{}{}{date_of_birth}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    stable_hash(&combined).rem_euclid(SERIAL_SPAN) + SERIAL_BASE
}

/// Folds the leading SHA-256 bytes of `value` into an integer.
fn stable_hash(value: &str) -> u64 {
    Sha256::digest(value.as_bytes())
        .iter()
        .take(HASH_PREFIX_LEN)
        .fold(0, |hash, byte| (hash << 8) | u64::from(*byte))
}

/// Computes the Luhn-style check digit for a string of decimal digits.
///
/// Digits are processed right to left. Every second digit, starting with the
/// one left of the rightmost, is doubled, with 9 subtracted from doubled
/// values above 9. The check digit brings the sum to a multiple of ten.
///
/// Returns `None` if `digits` contains anything other than ASCII digits.
///
/// # Examples
///
/// ```
/// use pseudo_ssn::check_digit;
///
/// assert_eq!(check_digit("7992739871"), Some(4));
/// assert_eq!(check_digit("421501901334"), Some(8));
/// assert_eq!(check_digit("42-15"), None);
/// ```
#[must_use]
pub fn check_digit(digits: &str) -> Option<u32> {
    let (sum, _) = digits
        .chars()
        .rev()
        .try_fold((0_u32, false), |(sum, doubled), c| {
            let digit = c.to_digit(10)?;
            let weighted = if doubled { double_digit(digit) } else { digit };
            Some((sum + weighted, !doubled))
        })?;
    Some((10 - sum.rem_euclid(10)).rem_euclid(10))
}

const fn double_digit(digit: u32) -> u32 {
    let doubled = digit * 2;
    if doubled > 9 { doubled - 9 } else { doubled }
}
