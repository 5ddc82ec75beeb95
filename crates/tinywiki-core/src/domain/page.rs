//! Page domain types.

/// Title pre-filled into the add form before the user types one.
pub const PLACEHOLDER_TITLE: &str = "Title";

/// A wiki page.
///
/// `id` is assigned by the storage backend on creation and never changes.
/// Pages returned from a listing are summaries: `body` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Page {
    /// Build a listing projection carrying only id and title.
    pub fn summary(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: String::new(),
        }
    }

    /// Build an unsaved page for the add form.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            body: String::new(),
        }
    }
}

/// Data for creating a new page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPage {
    pub title: String,
    pub body: String,
}

impl NewPage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_has_empty_body() {
        let page = Page::summary(3, "Rust");
        assert_eq!(page.id, 3);
        assert_eq!(page.title, "Rust");
        assert!(page.body.is_empty());
    }

    #[test]
    fn placeholder_is_unsaved() {
        let page = Page::placeholder(PLACEHOLDER_TITLE);
        assert_eq!(page.id, 0);
        assert_eq!(page.title, "Title");
        assert!(page.body.is_empty());
    }
}
