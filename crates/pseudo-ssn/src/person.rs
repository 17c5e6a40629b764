//! Person input types.
//!
//! This module defines the request shape consumed by the generation pipeline.
//! Inputs are plain data; nothing here checks well-formedness, which is left
//! to the validation tier selected by the caller.

use serde::{Deserialize, Serialize};

/// Gender of the person the identifier is generated for.
///
/// Carried on the input for completeness; it does not influence the
/// generated identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    #[default]
    Male,
    /// Female.
    Female,
}

/// Person data used to synthesise an identifier.
///
/// # Example
///
/// ```
/// use pseudo_ssn::{Gender, PersonInput};
///
/// let person = PersonInput::new("Max", "Mustermann", "1990-01-15", Gender::Male);
///
/// assert_eq!(person.last_name, "Mustermann");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    /// First name of the person.
    pub first_name: String,
    /// Last name (surname) of the person.
    pub last_name: String,
    /// Date of birth, ideally `yyyy-MM-dd`.
    pub date_of_birth: String,
    /// Gender of the person.
    #[serde(default)]
    pub gender: Gender,
}

impl PersonInput {
    /// Builds a person input from borrowed parts.
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, date_of_birth: &str, gender: Gender) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            date_of_birth: date_of_birth.to_owned(),
            gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_defaults_to_male() {
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn gender_serializes_lowercase() {
        let female = serde_json::to_string(&Gender::Female).expect("serialize");
        assert_eq!(female, "\"female\"");
    }

    #[test]
    fn person_input_deserializes_from_camel_case() {
        let json = r#"{
            "firstName": "Anna",
            "lastName": "Schmidt",
            "dateOfBirth": "1985-05-20",
            "gender": "female"
        }"#;
        let person: PersonInput = serde_json::from_str(json).expect("deserialize");

        assert_eq!(
            person,
            PersonInput::new("Anna", "Schmidt", "1985-05-20", Gender::Female)
        );
    }

    #[test]
    fn person_input_gender_is_optional() {
        let json = r#"{"firstName": "Max", "lastName": "M", "dateOfBirth": "1990-01-01"}"#;
        let person: PersonInput = serde_json::from_str(json).expect("deserialize");
        assert_eq!(person.gender, Gender::Male);
    }
}
