//! Page handlers: view, edit, update, insert, home, add.

use axum::response::{Html, IntoResponse, Response};
use tinywiki_core::{Page, ViewData, views};

use super::form::{PageForm, parse_page_id};
use crate::bootstrap::AxumContext;
use crate::dispatch::found;
use crate::error::HttpError;

fn render(ctx: &AxumContext, view: &str, data: &ViewData) -> Result<Response, HttpError> {
    let body = ctx.renderer.render(view, data)?;
    Ok(Html(body).into_response())
}

/// Show one page.
pub async fn view(ctx: &AxumContext, param: &str) -> Result<Response, HttpError> {
    let id = parse_page_id(param)?;
    let page = ctx.pages.load_page(id).await.map_err(HttpError::from_load)?;
    render(ctx, views::VIEW, &ViewData::Page(page))
}

/// Show the edit form for one page.
pub async fn edit(ctx: &AxumContext, param: &str) -> Result<Response, HttpError> {
    let id = parse_page_id(param)?;
    let page = ctx.pages.load_page(id).await.map_err(HttpError::from_load)?;
    render(ctx, views::EDIT, &ViewData::Page(page))
}

/// Persist an edit, then redirect to the page.
pub async fn update(
    ctx: &AxumContext,
    param: &str,
    form: &PageForm,
) -> Result<Response, HttpError> {
    let id = parse_page_id(param)?;
    form.validate()?;
    ctx.pages
        .update(id, &form.title, &form.body)
        .await
        .map_err(HttpError::from_storage)?;
    Ok(found(&format!("/view/{id}")))
}

/// Create a page, then redirect to it.
pub async fn insert(ctx: &AxumContext, form: &PageForm) -> Result<Response, HttpError> {
    form.validate()?;
    let id = ctx
        .pages
        .insert(&form.title, &form.body)
        .await
        .map_err(HttpError::from_storage)?;
    Ok(found(&format!("/view/{id}")))
}

/// List every page.
pub async fn home(ctx: &AxumContext) -> Result<Response, HttpError> {
    let pages = ctx
        .pages
        .load_summaries()
        .await
        .map_err(HttpError::from_storage)?;
    render(ctx, views::HOME, &ViewData::Summaries(pages))
}

/// Show the add form pre-filled with `title`.
pub fn add(ctx: &AxumContext, title: &str) -> Result<Response, HttpError> {
    render(ctx, views::ADD, &ViewData::Page(Page::placeholder(title)))
}
