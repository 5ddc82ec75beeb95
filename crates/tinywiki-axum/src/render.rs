//! HTML renderer built on `maud`.
//!
//! Implements the core `Renderer` port with one compile-time template per
//! view name. All page content is HTML-escaped.

use maud::{DOCTYPE, Markup, html};
use tinywiki_core::{Page, RenderError, Renderer, ViewData, views};

/// Production renderer for the four page views.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, view: &str, data: &ViewData) -> Result<String, RenderError> {
        let markup = match (view, data) {
            (views::VIEW, ViewData::Page(page)) => view_page(page),
            (views::EDIT, ViewData::Page(page)) => edit_page(page),
            (views::ADD, ViewData::Page(page)) => add_page(page),
            (views::HOME, ViewData::Summaries(pages)) => home_page(pages),
            (views::VIEW | views::EDIT | views::ADD, ViewData::Summaries(_)) => {
                return Err(RenderError::DataMismatch {
                    view: view.to_string(),
                    expected: "a page",
                });
            }
            (views::HOME, ViewData::Page(_)) => {
                return Err(RenderError::DataMismatch {
                    view: view.to_string(),
                    expected: "page summaries",
                });
            }
            _ => return Err(RenderError::UnknownView(view.to_string())),
        };
        Ok(markup.into_string())
    }
}

fn layout(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body { (content) }
        }
    }
}

fn view_page(page: &Page) -> Markup {
    let content = html! {
        h1 { (page.title) }
        p {
            a href={ "/edit/" (page.id) } { "edit" }
            " | "
            a href="/home/" { "home" }
        }
        div.body { (page.body) }
    };
    layout(&page.title, &content)
}

fn page_form(action: &str, page: &Page, submit: &str) -> Markup {
    html! {
        form action=(action) method="POST" {
            div { input type="text" name="title" value=(page.title); }
            div { textarea name="body" rows="20" cols="80" { (page.body) } }
            div { input type="submit" value=(submit); }
        }
    }
}

fn edit_page(page: &Page) -> Markup {
    let content = html! {
        h1 { "Editing " (page.title) }
        (page_form(&format!("/update/{}", page.id), page, "Save"))
        p { a href={ "/view/" (page.id) } { "cancel" } }
    };
    layout(&format!("Editing {}", page.title), &content)
}

fn add_page(page: &Page) -> Markup {
    let content = html! {
        h1 { "New page" }
        (page_form("/insert/", page, "Create"))
        p { a href="/home/" { "cancel" } }
    };
    layout("New page", &content)
}

fn home_page(pages: &[Page]) -> Markup {
    let content = html! {
        h1 { "Pages" }
        @if pages.is_empty() {
            p { "No pages yet." }
        } @else {
            ul {
                @for page in pages {
                    li { a href={ "/view/" (page.id) } { (page.title) } }
                }
            }
        }
        p { a href="/add/" { "Add page" } }
    };
    layout("Pages", &content)
}
