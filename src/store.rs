pub mod import_csv;

pub use import_csv::load_contacts_csv;
