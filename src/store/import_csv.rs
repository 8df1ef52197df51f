use std::path::Path;

use csv::Reader;
use serde::Deserialize;
use tracing::info;

use crate::prelude::{AppError, ContactManager};

/// One row of a seed file. Empty cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct SeedRecord {
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
}

/// Adds every row of the CSV file at `path` to `manager`, in file order.
///
/// The file needs a `first_name,last_name,phone_number` header. The first row
/// with a missing field stops the load with [`AppError::Validation`]; rows
/// before it stay added. Returns the number of contacts added.
pub fn load_contacts_csv(
    path: impl AsRef<Path>,
    manager: &mut ContactManager,
) -> Result<usize, AppError> {
    let path = path.as_ref();

    if path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("Seed file must be a .csv file".to_string()));
    }

    let mut reader = Reader::from_path(path)?;

    let mut counter: usize = 0;
    for (row, result) in reader.deserialize().enumerate() {
        let record: SeedRecord = result?;

        manager
            .add_contact(
                record.first_name.as_deref(),
                record.last_name.as_deref(),
                record.phone_number.as_deref(),
            )
            .map_err(|err| match err {
                AppError::Validation(msg) => {
                    AppError::Validation(format!("row {}: {}", row + 1, msg))
                }
                other => other,
            })?;
        counter += 1;
    }

    info!(path = %path.display(), added = counter, "seed contacts loaded");
    Ok(counter)
}
