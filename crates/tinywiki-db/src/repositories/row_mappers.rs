//! Row and error mapping helpers shared by the `SQLite` repositories.

use sqlx::Row;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;

use tinywiki_core::{Page, RepositoryError};

/// Map a full `pages` row.
pub fn row_to_page(row: &SqliteRow) -> Page {
    Page {
        id: row.get("id"),
        title: row.get("title"),
        body: row.get("body"),
    }
}

/// Map an `id, title` listing row.
pub fn row_to_summary(row: &SqliteRow) -> Page {
    Page::summary(row.get("id"), row.get::<String, _>("title"))
}

/// Convert an sqlx error into a repository error, prefixing it with the
/// failing operation.
pub fn storage_error(op: &str, err: &sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = err {
        if matches!(
            db_err.kind(),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation | ErrorKind::UniqueViolation
        ) {
            return RepositoryError::Constraint(format!("{op}: {err}"));
        }
    }
    RepositoryError::Storage(format!("{op}: {err}"))
}
