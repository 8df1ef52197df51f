use super::*;

use tracing::{debug, warn};

/// In-memory owner of contacts. Starts empty, grows only through
/// [`ContactManager::add_contact`] and never removes entries.
#[derive(Debug, Default)]
pub struct ContactManager {
    contacts: Vec<Contact>,
}

impl ContactManager {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Adds a contact built from the three fields.
    ///
    /// Fails with [`AppError::Validation`] when any field is `None` or blank,
    /// checked in order first name, last name, phone number. The manager is
    /// left untouched on failure. The phone number's format is not checked.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Result<(), AppError> {
        let contact = match build_contact(first_name, last_name, phone_number) {
            Ok(contact) => contact,
            Err(field) => {
                warn!(field = field.label(), "rejected contact with missing field");
                return Err(AppError::Validation(field.requirement()));
            }
        };

        debug!(id = %contact.id(), total = self.contacts.len() + 1, "contact added");
        self.contacts.push(contact);
        Ok(())
    }

    /// Every contact added so far, in insertion order.
    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

fn build_contact(
    first_name: Option<&str>,
    last_name: Option<&str>,
    phone_number: Option<&str>,
) -> Result<Contact, RequiredField> {
    let first_name = contact::require(first_name, RequiredField::FirstName)?;
    let last_name = contact::require(last_name, RequiredField::LastName)?;
    let phone_number = contact::require(phone_number, RequiredField::PhoneNumber)?;

    Ok(Contact::new(first_name, last_name, phone_number))
}
