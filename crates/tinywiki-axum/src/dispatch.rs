//! Path dispatch.
//!
//! The route set is small and static, so it is an ordered table of
//! `(pattern, extractor)` entries rather than a router tree. For a path `P`:
//!
//! 1. `^/(edit|view|update)/([0-9]+)$` hands the numeric segment to the action.
//! 2. `^/(home|add|insert)/$` hands the placeholder title to the action.
//! 3. `/` redirects to `/home`.
//! 4. `/home`, `/add` and `/insert` redirect to their trailing-slash form.
//! 5. Anything else is a 404.
//!
//! `P` is the percent-decoded request path. The parameter is always a
//! string. Id parsing happens in the handlers, never here.

use std::sync::LazyLock;

use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use regex::{Captures, Regex};
use tinywiki_core::PLACEHOLDER_TITLE;

use crate::handlers::form::PageForm;
use crate::handlers::pages;
use crate::state::AppState;

/// Logical page actions reachable through the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Update,
    Insert,
    Home,
    Add,
}

impl Action {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "view" => Some(Self::View),
            "edit" => Some(Self::Edit),
            "update" => Some(Self::Update),
            "insert" => Some(Self::Insert),
            "home" => Some(Self::Home),
            "add" => Some(Self::Add),
            _ => None,
        }
    }

}

/// Outcome of matching a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Run `action` with its string parameter.
    Handle { action: Action, param: String },
    /// Redirect with `302 Found`.
    Redirect(&'static str),
    /// Redirect with `301 Moved Permanently`.
    MovedPermanently(String),
    NotFound,
}

static ID_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(edit|view|update)/([0-9]+)$").expect("id route pattern is valid")
});

static COLLECTION_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(home|add|insert)/$").expect("collection route pattern is valid")
});

static BARE_COLLECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(home|add|insert)$").expect("bare collection pattern is valid")
});

struct Route {
    pattern: &'static LazyLock<Regex>,
    extract: fn(&Captures<'_>) -> Option<(Action, String)>,
}

fn id_param(caps: &Captures<'_>) -> Option<(Action, String)> {
    let action = Action::from_segment(caps.get(1)?.as_str())?;
    Some((action, caps.get(2)?.as_str().to_string()))
}

fn placeholder_param(caps: &Captures<'_>) -> Option<(Action, String)> {
    let action = Action::from_segment(caps.get(1)?.as_str())?;
    Some((action, PLACEHOLDER_TITLE.to_string()))
}

/// Tried in order; the first match wins.
static ROUTES: [Route; 2] = [
    Route {
        pattern: &ID_ROUTE,
        extract: id_param,
    },
    Route {
        pattern: &COLLECTION_ROUTE,
        extract: placeholder_param,
    },
];

/// Match a request path against the route table.
pub fn resolve(path: &str) -> Dispatch {
    for route in &ROUTES {
        if let Some(caps) = route.pattern.captures(path) {
            if let Some((action, param)) = (route.extract)(&caps) {
                return Dispatch::Handle { action, param };
            }
        }
    }

    if path == "/" {
        return Dispatch::Redirect("/home");
    }

    if BARE_COLLECTION.is_match(path) {
        return Dispatch::MovedPermanently(format!("{path}/"));
    }

    Dispatch::NotFound
}

/// Percent-decode the path of `uri`, or `None` if it is not valid UTF-8.
pub fn decoded_path(uri: &Uri) -> Option<String> {
    urlencoding::decode(uri.path()).ok().map(|path| path.into_owned())
}

/// Build a `302 Found` redirect.
pub fn found(location: &str) -> Response {
    redirect(StatusCode::FOUND, location)
}

fn redirect(status: StatusCode, location: &str) -> Response {
    (status, [(header::LOCATION, location.to_string())]).into_response()
}

/// Fallback handler that owns every path.
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let Some(path) = decoded_path(request.uri()) else {
        return not_found();
    };

    match resolve(&path) {
        Dispatch::Handle { action, param } => {
            tracing::debug!(?action, %param, "Dispatching request");
            let result = match action {
                Action::View => pages::view(&state, &param).await,
                Action::Edit => pages::edit(&state, &param).await,
                Action::Home => pages::home(&state).await,
                Action::Add => pages::add(&state, &param),
                Action::Update => match PageForm::from_request(request).await {
                    Ok(fields) => pages::update(&state, &param, &fields).await,
                    Err(err) => Err(err),
                },
                Action::Insert => match PageForm::from_request(request).await {
                    Ok(fields) => pages::insert(&state, &fields).await,
                    Err(err) => Err(err),
                },
            };
            result.unwrap_or_else(IntoResponse::into_response)
        }
        Dispatch::Redirect(location) => found(location),
        Dispatch::MovedPermanently(location) => {
            redirect(StatusCode::MOVED_PERMANENTLY, &location)
        }
        Dispatch::NotFound => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(action: Action, param: &str) -> Dispatch {
        Dispatch::Handle {
            action,
            param: param.to_string(),
        }
    }

    #[test]
    fn id_routes_pass_numeric_segment() {
        assert_eq!(resolve("/view/1"), handle(Action::View, "1"));
        assert_eq!(resolve("/edit/42"), handle(Action::Edit, "42"));
        assert_eq!(resolve("/update/007"), handle(Action::Update, "007"));
    }

    #[test]
    fn collection_routes_pass_placeholder_title() {
        assert_eq!(resolve("/home/"), handle(Action::Home, "Title"));
        assert_eq!(resolve("/add/"), handle(Action::Add, "Title"));
        assert_eq!(resolve("/insert/"), handle(Action::Insert, "Title"));
    }

    #[test]
    fn root_redirects_home() {
        assert_eq!(resolve("/"), Dispatch::Redirect("/home"));
    }

    #[test]
    fn bare_collection_paths_gain_trailing_slash() {
        assert_eq!(
            resolve("/home"),
            Dispatch::MovedPermanently("/home/".to_string())
        );
        assert_eq!(
            resolve("/add"),
            Dispatch::MovedPermanently("/add/".to_string())
        );
    }

    #[test]
    fn non_numeric_or_malformed_paths_are_not_found() {
        for path in [
            "/view/abc",
            "/view/1abc",
            "/view/",
            "/view/-1",
            "/view/1/",
            "/edit",
            "/update/1/extra",
            "/home/x",
            "/delete/1",
            "/insert/1",
            "/view/1?x",
            "",
        ] {
            assert_eq!(resolve(path), Dispatch::NotFound, "path {path:?}");
        }
    }

    #[test]
    fn path_is_percent_decoded() {
        let uri: Uri = "/view/%31".parse().unwrap();
        let path = decoded_path(&uri).unwrap();
        assert_eq!(path, "/view/1");
        assert_eq!(resolve(&path), handle(Action::View, "1"));

        let uri: Uri = "/home%2F?x=1".parse().unwrap();
        assert_eq!(decoded_path(&uri).unwrap(), "/home/");
    }

    #[test]
    fn invalid_utf8_path_is_rejected() {
        let uri: Uri = "/view/%FF".parse().unwrap();
        assert_eq!(decoded_path(&uri), None);
    }
}
