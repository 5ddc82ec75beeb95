//! Path resolution for tinywiki data files.
//!
//! Resolution order for the data root:
//! 1. `TINYWIKI_DATA_DIR` environment variable
//! 2. System local data directory (e.g., `~/.local/share/tinywiki`)

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
