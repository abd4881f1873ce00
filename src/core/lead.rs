//! Lead form data model
//!
//! A lead is the set of contact details a visitor leaves in the enquiry form.
//! Values are kept as raw strings until validation turns them into a
//! [`ValidatedLead`](crate::core::ValidatedLead).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fields of the enquiry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Books,
    Service,
}

/// Every field the form must carry before it can be submitted
pub const REQUIRED_FIELDS: [Field; 4] = [Field::Name, Field::Phone, Field::Books, Field::Service];

impl Field {
    /// Input `name` attribute used by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Books => "books",
            Field::Service => "service",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Phone => "Phone number",
            Field::Books => "Number of books",
            Field::Service => "Service",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "phone" => Ok(Field::Phone),
            "books" => Ok(Field::Books),
            "service" => Ok(Field::Service),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Input name that does not belong to the lead form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

/// Raw values read from the form at submission time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    values: BTreeMap<Field, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build input from `(input name, value)` pairs.
    /// Names outside the form are ignored.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut input = Self::new();
        for (key, value) in pairs {
            if let Ok(field) = key.as_ref().parse::<Field>() {
                input.set(field, value);
            }
        }
        input
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Value with surrounding whitespace removed, `None` when absent or blank
    pub fn trimmed(&self, field: Field) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trips_through_name() {
        for field in REQUIRED_FIELDS {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn test_from_pairs_ignores_unknown_inputs() {
        let input = FormInput::from_pairs([("name", "Asha"), ("newsletter", "on")]);

        assert_eq!(input.get(Field::Name), Some("Asha"));
        assert_eq!(input.get(Field::Phone), None);
    }

    #[test]
    fn test_trimmed_treats_blank_as_absent() {
        let input = FormInput::new()
            .with(Field::Name, "  Ravi  ")
            .with(Field::Books, "   ");

        assert_eq!(input.trimmed(Field::Name), Some("Ravi"));
        assert_eq!(input.trimmed(Field::Books), None);
        assert_eq!(input.trimmed(Field::Service), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(FormInput::new().is_empty());
        assert!(FormInput::new().with(Field::Name, " ").is_empty());
        assert!(!FormInput::new().with(Field::Name, "A").is_empty());
    }
}
