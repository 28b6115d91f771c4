//! Output formatting: CSV files and console tables.

mod csv_file;
mod table;

pub use csv_file::{CSV_HEADERS, ensure_csv_extension, save_to_csv, write_csv};
pub use table::{format_table, print_to_console};

/// Printed when the filter keeps nothing.
pub const NO_MATCHES_MESSAGE: &str = "No papers with non-academic authors found.";
