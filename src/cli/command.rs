use std::path::PathBuf;

use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "contact-manager",
    version,
    about = "In-memory contact book. Contacts last for the session only"
)]
pub struct Cli {
    /// CSV file (first_name,last_name,phone_number) to preload into the session
    #[arg(long, env = "CONTACTS_SEED")]
    pub seed: Option<PathBuf>,
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddContact,
    ListContacts,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim() {
            "1" => Ok(MenuCommand::AddContact),
            "2" => Ok(MenuCommand::ListContacts),
            "3" => Ok(MenuCommand::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}
