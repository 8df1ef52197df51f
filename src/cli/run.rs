use crate::{
    config::{self, Settings},
    prelude::{
        AppError,
        command::{Cli, MenuCommand},
        contact::{Contact, looks_like_phone_number},
        ContactManager, load_contacts_csv,
    },
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    config::load_dotenv();

    let settings = Settings::from_cli(Cli::parse());
    config::init_logging(&settings);

    let mut manager = ContactManager::new();

    if let Some(seed) = &settings.seed {
        let added = load_contacts_csv(seed, &mut manager)?;
        info!(added, "session seeded");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut manager, stdin.lock(), stdout.lock())
}

/// Drives the interactive menu against `manager` until the user exits or the
/// input ends.
pub fn run_session<R, W>(
    manager: &mut ContactManager,
    mut input: R,
    mut output: W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n--- Contact BOOK ---")?;

    loop {
        show_menu(&mut output)?;

        let Some(action) = read_input(&mut input)? else {
            break;
        };

        let command = match MenuCommand::parse(&action) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            MenuCommand::AddContact => {
                let Some(first_name) = prompt(&mut input, &mut output, "first name")? else {
                    break;
                };
                let Some(last_name) = prompt(&mut input, &mut output, "last name")? else {
                    break;
                };
                let Some(phone) = prompt(&mut input, &mut output, "phone number")? else {
                    break;
                };

                if !phone.is_empty() && !looks_like_phone_number(&phone)? {
                    writeln!(output, "Note: '{phone}' does not look like a phone number")?;
                }

                match manager.add_contact(
                    non_empty(&first_name),
                    non_empty(&last_name),
                    non_empty(&phone),
                ) {
                    Ok(()) => writeln!(output, "Contact added successfully")?,
                    Err(e @ AppError::Validation(_)) => writeln!(output, "{e}")?,
                    Err(e) => return Err(e),
                }
            }
            MenuCommand::ListContacts => {
                let contacts = manager.get_all_contacts();

                if contacts.is_empty() {
                    writeln!(output, "No contact in contact list")?;
                    continue;
                }

                for (i, contact) in contacts.iter().enumerate() {
                    writeln!(output, "{}", display_contact(i + 1, contact))?;
                }
            }
            MenuCommand::Exit => break,
        }
    }

    writeln!(output, "\nBye!")?;
    output.flush()?;
    Ok(())
}

pub fn display_contact(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:<20} {:15}",
        contact.first_name(),
        contact.last_name(),
        contact.phone_number()
    )
}

fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output)?;
    writeln!(output, "1. Add Contact")?;
    writeln!(output, "2. List Contacts")?;
    writeln!(output, "3. Exit")?;
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &str,
) -> Result<Option<String>, AppError> {
    writeln!(output, "\nEnter {field}:")?;
    output.flush()?;
    read_input(input)
}

/// Next trimmed line, or `None` once the input is exhausted.
fn read_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}
