//! Form state and field validation for the edit dialogs.
//!
//! A [`Form`] is an ordered list of labelled fields, each with its own
//! validators and a "touched" flag. Validation messages are only shown for
//! touched fields; a failed submit touches everything.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{VALIDATION_REQUIRED, VALIDATION_ZIP_CHARACTERS};

pub mod address;
pub mod employee;
pub mod input;

pub use address::{AddressField, AddressForm};
pub use employee::{EmployeeField, EmployeeForm};
pub use input::TextInput;

static DIGITS_AND_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\-]+$").expect("valid regex"));

/// Rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    MinLength(usize),
    DigitsAndDashes,
}

/// A failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
    InvalidCharacters,
}

impl FieldError {
    pub fn message(&self) -> String {
        match self {
            FieldError::Required => VALIDATION_REQUIRED.to_string(),
            FieldError::TooShort { min } => format!("Must be at least {} characters", min),
            FieldError::InvalidCharacters => VALIDATION_ZIP_CHARACTERS.to_string(),
        }
    }
}

impl Validator {
    /// Empty values only fail `Required`, so optional fields can stay blank.
    pub fn check(&self, value: &str) -> Option<FieldError> {
        match self {
            Validator::Required if value.trim().is_empty() => Some(FieldError::Required),
            Validator::MinLength(min) if !value.is_empty() && value.chars().count() < *min => {
                Some(FieldError::TooShort { min: *min })
            }
            Validator::DigitsAndDashes if !value.is_empty() && !DIGITS_AND_DASHES.is_match(value) => {
                Some(FieldError::InvalidCharacters)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub input: TextInput,
    pub touched: bool,
    validators: &'static [Validator],
}

impl FormField {
    pub fn new(label: &'static str, value: impl Into<String>, validators: &'static [Validator]) -> Self {
        Self {
            label,
            input: TextInput::new(value),
            touched: false,
            validators,
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// First failing rule, regardless of touched state.
    pub fn error(&self) -> Option<FieldError> {
        self.validators.iter().find_map(|v| v.check(self.input.value()))
    }

    /// Error to render: only once the field has been touched.
    pub fn visible_error(&self) -> Option<FieldError> {
        if self.touched {
            self.error()
        } else {
            None
        }
    }

    pub fn is_required(&self) -> bool {
        self.validators.contains(&Validator::Required)
    }
}

/// Ordered set of fields with a focus cursor.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> &FormField {
        &self.fields[index]
    }

    pub fn field_mut(&mut self, index: usize) -> &mut FormField {
        &mut self.fields[index]
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        &mut self.fields[self.focus].input
    }

    /// Move focus forward, touching the field being left.
    pub fn focus_next(&mut self) {
        self.fields[self.focus].touched = true;
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Move focus backward, touching the field being left.
    pub fn focus_previous(&mut self) {
        self.fields[self.focus].touched = true;
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.error().is_none())
    }

    pub fn mark_all_touched(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    /// Validate for submission; touches every field when invalid.
    pub fn try_submit(&mut self) -> bool {
        if self.is_valid() {
            true
        } else {
            self.mark_all_touched();
            false
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.input.clear();
            field.touched = false;
        }
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_rules_skip_empty_values() {
        assert_eq!(Validator::MinLength(5).check(""), None);
        assert_eq!(Validator::DigitsAndDashes.check(""), None);
        assert_eq!(Validator::Required.check("  "), Some(FieldError::Required));
    }

    #[test]
    fn test_zip_rules() {
        assert_eq!(Validator::MinLength(5).check("1234"), Some(FieldError::TooShort { min: 5 }));
        assert_eq!(Validator::DigitsAndDashes.check("12a45"), Some(FieldError::InvalidCharacters));
        assert_eq!(Validator::DigitsAndDashes.check("12345-6789"), None);
    }
}
