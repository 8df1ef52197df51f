use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use crate::errors::AppError;

/// A person's name and phone number. Fields are fixed at creation and only
/// readable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: Uuid,
    first_name: String,
    last_name: String,
    phone_number: String,
    created_at: DateTime<Utc>,
}

/// The fields a contact cannot be created without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::FirstName => "first name",
            RequiredField::LastName => "last name",
            RequiredField::PhoneNumber => "phone number",
        }
    }

    pub fn requirement(&self) -> String {
        format!("{} is required and must not be empty", self.label())
    }
}

impl Contact {
    /// Builds a contact with a fresh id. Callers are expected to have checked
    /// the fields with [`require`] first.
    pub(crate) fn new(first_name: String, last_name: String, phone_number: String) -> Self {
        Contact {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            phone_number,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Returns the value of a required field, or `Err(field)` when it is absent.
/// Blank strings count as absent.
pub fn require(value: Option<&str>, field: RequiredField) -> Result<String, RequiredField> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(field),
    }
}

/// Advisory shape check for phone numbers: optional leading `+` and 7 to 15
/// digits. Not enforced when adding contacts.
pub fn looks_like_phone_number(phone: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^\+?\d{7,15}$")?;
    Ok(re.is_match(phone.trim()))
}
