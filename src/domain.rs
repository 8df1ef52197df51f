pub mod contact;
pub mod manager;
pub mod shared;

use crate::errors::AppError;
use contact::{Contact, RequiredField};
use manager::ContactManager;
