pub use crate::cli::{command, run_app, run_session};
pub use crate::config::Settings;
pub use crate::domain::{
    contact::{self, Contact, RequiredField},
    manager::ContactManager,
    shared::SharedContactManager,
};
pub use crate::errors::AppError;
pub use crate::store::{self, load_contacts_csv};
