//! Validation of lead form input
//!
//! Every required field must be present and non-blank. The phone number must
//! be a 10 digit mobile number starting with 6, 7, 8 or 9 once formatting
//! characters are stripped.

use super::lead::{Field, FormInput, REQUIRED_FIELDS};

/// Number of digits in a valid mobile number
pub const PHONE_DIGITS: usize = 10;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    /// Field is absent or contains only whitespace
    #[error("{} is required", .0.label())]
    MissingField(Field),
    /// Phone number is not a 10 digit mobile number
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidPhone,
}

/// Error attached to a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub error: LeadError,
}

/// Validation result containing one entry per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: Field, error: LeadError) {
        self.errors.push(FieldError { field, error });
    }

    /// Error for a given field, if it failed
    pub fn error_for(&self, field: Field) -> Option<&LeadError> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.error)
    }

    /// Fields that failed, in form order
    pub fn failed_fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Get all messages as strings
    pub fn all_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.error.to_string()).collect()
    }

    /// Convert a passing result into a [`ValidatedLead`]
    pub fn into_lead(self, input: &FormInput) -> Result<ValidatedLead, ValidationResult> {
        if !self.is_valid() {
            return Err(self);
        }

        let value = |field| input.trimmed(field).unwrap_or_default().to_string();
        Ok(ValidatedLead {
            name: value(Field::Name),
            phone: normalize_phone(input.get(Field::Phone).unwrap_or_default()),
            books: value(Field::Books),
            service: value(Field::Service),
        })
    }
}

/// Lead that passed validation. Values are trimmed and the phone holds digits only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLead {
    pub name: String,
    pub phone: String,
    pub books: String,
    pub service: String,
}

/// Strip everything except ASCII digits
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check a phone number against the mobile number rules
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = normalize_phone(phone);
    digits.len() == PHONE_DIGITS && matches!(digits.as_bytes()[0], b'6'..=b'9')
}

/// Validates every required field and the phone number format
pub fn validate_lead(input: &FormInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    for field in REQUIRED_FIELDS {
        if input.trimmed(field).is_none() {
            result.add_error(field, LeadError::MissingField(field));
        }
    }

    if let Some(phone) = input.trimmed(Field::Phone)
        && !is_valid_phone(phone)
    {
        result.add_error(Field::Phone, LeadError::InvalidPhone);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> FormInput {
        FormInput::new()
            .with(Field::Name, "A")
            .with(Field::Phone, "9876543210")
            .with(Field::Books, "3")
            .with(Field::Service, "Hardcover")
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("6000000000"));
        assert!(is_valid_phone("98765 43210"));
        assert!(is_valid_phone("(987) 654-3210"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("0876543210"));
        assert!(!is_valid_phone("98765432101"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("phone"));
    }

    #[test]
    fn test_country_code_is_not_stripped() {
        // +91 adds two digits, so the number no longer has exactly ten
        assert!(!is_valid_phone("+91 9876543210"));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("98-76 5(4)3210"), "9876543210");
        assert_eq!(normalize_phone("abc"), "");
    }

    #[test]
    fn test_complete_input_is_valid() {
        let result = validate_lead(&complete_input());
        assert!(result.is_valid());
        assert!(result.all_messages().is_empty());
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in REQUIRED_FIELDS {
            let input = complete_input().with(field, "   ");
            let result = validate_lead(&input);

            assert!(!result.is_valid());
            assert_eq!(result.failed_fields(), vec![field]);
            assert_eq!(result.error_for(field), Some(&LeadError::MissingField(field)));
        }
    }

    #[test]
    fn test_empty_form_marks_all_fields() {
        let result = validate_lead(&FormInput::new());
        assert_eq!(result.failed_fields(), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_blank_phone_is_missing_not_invalid() {
        let result = validate_lead(&complete_input().with(Field::Phone, ""));
        assert_eq!(
            result.error_for(Field::Phone),
            Some(&LeadError::MissingField(Field::Phone))
        );
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_bad_phone_is_invalid() {
        let result = validate_lead(&complete_input().with(Field::Phone, "5876543210"));
        assert_eq!(result.failed_fields(), vec![Field::Phone]);
        assert_eq!(result.error_for(Field::Phone), Some(&LeadError::InvalidPhone));
    }

    #[test]
    fn test_into_lead_trims_and_normalizes() {
        let input = complete_input()
            .with(Field::Name, "  Meera Nair ")
            .with(Field::Phone, "98765-43210");
        let lead = validate_lead(&input).into_lead(&input).unwrap();

        assert_eq!(lead.name, "Meera Nair");
        assert_eq!(lead.phone, "9876543210");
        assert_eq!(lead.books, "3");
        assert_eq!(lead.service, "Hardcover");
    }

    #[test]
    fn test_into_lead_rejects_failed_result() {
        let input = FormInput::new();
        let result = validate_lead(&input);
        let rejected = result.clone().into_lead(&input).unwrap_err();
        assert_eq!(rejected, result);
    }

    #[test]
    fn test_lead_error_display() {
        assert_eq!(
            LeadError::MissingField(Field::Name).to_string(),
            "Full name is required"
        );
        assert_eq!(
            LeadError::InvalidPhone.to_string(),
            "Please enter a valid 10-digit mobile number"
        );
    }
}
