use super::*;

use std::sync::{Arc, RwLock};

/// Cloneable, thread-safe handle over one [`ContactManager`].
///
/// Adds take the write lock so they are applied one at a time; listings take
/// the read lock and return an owned snapshot.
#[derive(Debug, Clone, Default)]
pub struct SharedContactManager {
    inner: Arc<RwLock<ContactManager>>,
}

impl SharedContactManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contact(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Result<(), AppError> {
        let mut manager = self.inner.write()?;
        manager.add_contact(first_name, last_name, phone_number)
    }

    pub fn get_all_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let manager = self.inner.read()?;
        Ok(manager.get_all_contacts().to_vec())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.inner.read()?.len())
    }
}

impl From<ContactManager> for SharedContactManager {
    fn from(manager: ContactManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;

    #[test]
    fn concurrent_adds_are_all_kept() -> Result<(), AppError> {
        let shared = SharedContactManager::new();
        let workers = 8;
        let per_worker = 25;

        thread::scope(|s| {
            for w in 0..workers {
                let shared = shared.clone();
                s.spawn(move || {
                    for i in 0..per_worker {
                        let phone = format!("05{w:02}{i:06}");
                        shared
                            .add_contact(Some("John"), Some("Doe"), Some(&phone))
                            .unwrap();
                    }
                });
            }
        });

        let contacts = shared.get_all_contacts()?;
        assert_eq!(contacts.len(), workers * per_worker);

        let ids: HashSet<_> = contacts.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), workers * per_worker);
        Ok(())
    }

    #[test]
    fn snapshot_is_detached_from_later_adds() -> Result<(), AppError> {
        let shared = SharedContactManager::new();
        shared.add_contact(Some("John"), Some("Doe"), Some("0558887777"))?;

        let snapshot = shared.get_all_contacts()?;
        shared.add_contact(Some("Jane"), Some("Doe"), Some("0231564897"))?;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(shared.len()?, 2);
        Ok(())
    }

    #[test]
    fn validation_errors_pass_through() -> Result<(), AppError> {
        let shared = SharedContactManager::from(ContactManager::new());

        let err = shared.add_contact(Some("John"), Some("Doe"), None).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(shared.len()?, 0);
        Ok(())
    }
}
