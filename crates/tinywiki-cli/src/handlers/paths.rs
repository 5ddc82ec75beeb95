//! Paths command handler.

use anyhow::Result;
use tinywiki_core::paths::DATA_DIR_ENV;
use tinywiki_core::{data_root, database_path};

/// Print the resolved data root and database path.
pub fn execute() -> Result<()> {
    let root = data_root()?;
    let db = database_path()?;

    println!("Data root:  {}", root.display());
    println!("Database:   {}", db.display());
    println!();
    println!("Override with {DATA_DIR_ENV}=<dir> or `tinywiki serve --db <file>`.");
    Ok(())
}
