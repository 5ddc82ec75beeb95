//! Request input parsing and validation.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{HeaderMap, header};
use url::form_urlencoded;

use crate::error::HttpError;

/// Largest form body accepted for a page write.
pub const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Parse a dispatcher parameter as a page id.
///
/// Accepts only ASCII digits that fit an `i64`; signs and whitespace are
/// rejected even though `str::parse` would take a leading `+`.
pub fn parse_page_id(param: &str) -> Result<i64, HttpError> {
    if param.is_empty() || !param.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HttpError::BadRequest("Id must be int".to_string()));
    }
    param
        .parse()
        .map_err(|_| HttpError::BadRequest("Id must be int".to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    UrlEncoded,
    Multipart,
}

/// Classify the request body by its media type, ignoring case and parameters.
fn body_kind(headers: &HeaderMap) -> Option<BodyKind> {
    let value = headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
    let essence = value.split(';').next().unwrap_or_default().trim();

    if essence.eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
        Some(BodyKind::UrlEncoded)
    } else if essence.eq_ignore_ascii_case(MULTIPART_CONTENT_TYPE) {
        Some(BodyKind::Multipart)
    } else {
        None
    }
}

/// The `title` and `body` fields of a page write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageForm {
    pub title: String,
    pub body: String,
}

impl PageForm {
    /// Read fields from an urlencoded or multipart request body, falling
    /// back to the query string. A body value wins over a query value.
    pub async fn from_request(request: Request) -> Result<Self, HttpError> {
        let mut form = Self::default();
        if let Some(query) = request.uri().query() {
            form.merge(query.as_bytes());
        }

        match body_kind(request.headers()) {
            Some(BodyKind::UrlEncoded) => {
                let bytes = axum::body::to_bytes(request.into_body(), MAX_FORM_BYTES)
                    .await
                    .map_err(|e| HttpError::BadRequest(e.to_string()))?;
                form.merge(&bytes);
            }
            Some(BodyKind::Multipart) => {
                let fields = read_multipart(request).await?;
                form.merge_pairs(fields);
            }
            None => {}
        }

        Ok(form)
    }

    /// Parse urlencoded `input`, overwriting fields it carries.
    pub fn merge(&mut self, input: &[u8]) {
        self.merge_pairs(form_urlencoded::parse(input));
    }

    fn merge_pairs<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut seen_title = false;
        let mut seen_body = false;
        for (key, value) in pairs {
            // First occurrence of a key wins within one source
            match key.as_ref() {
                "title" if !seen_title => {
                    self.title = value.into();
                    seen_title = true;
                }
                "body" if !seen_body => {
                    self.body = value.into();
                    seen_body = true;
                }
                _ => {}
            }
        }
    }

    /// Reject the write if either field is empty.
    pub fn validate(&self) -> Result<(), HttpError> {
        if self.title.is_empty() || self.body.is_empty() {
            return Err(HttpError::BadRequest(
                "Content must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Collect the named text parts of a multipart body. File parts are skipped.
async fn read_multipart(request: Request) -> Result<Vec<(String, String)>, HttpError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| HttpError::BadRequest(e.body_text()))?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| HttpError::BadRequest(e.body_text()))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
