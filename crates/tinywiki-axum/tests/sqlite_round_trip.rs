//! End-to-end tests: router + HTML renderer + in-memory `SQLite`.

mod common;

use axum::http::StatusCode;

use common::{app, body_text, get, location, post_form, send};
use tinywiki_axum::HtmlRenderer;
use tinywiki_db::TestDb;

#[tokio::test]
async fn create_view_edit_update_cycle() {
    let db = TestDb::new().await.unwrap();
    let router = || app(db.page_repository(), HtmlRenderer::new());

    let response = send(router(), post_form("/insert/", "title=T&body=B")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let target = location(&response).unwrap().to_string();
    assert_eq!(target, "/view/1");

    let response = send(router(), get(&target)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>T</h1>"));
    assert!(html.contains("B"));

    let response = send(router(), get("/edit/1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"action="/update/1""#));

    let response = send(router(), post_form("/update/1", "title=T2&body=B2")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("/view/1"));

    let html = body_text(send(router(), get("/view/1")).await).await;
    assert!(html.contains("<h1>T2</h1>"));
    assert!(html.contains("B2"));
}

#[tokio::test]
async fn home_lists_created_pages() {
    let db = TestDb::new().await.unwrap();
    let router = || app(db.page_repository(), HtmlRenderer::new());

    send(router(), post_form("/insert/", "title=First&body=1")).await;
    send(router(), post_form("/insert/", "title=Second&body=2")).await;

    let response = send(router(), get("/home/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<a href="/view/1">First</a>"#));
    assert!(html.contains(r#"<a href="/view/2">Second</a>"#));
}

#[tokio::test]
async fn viewing_missing_page_is_not_found() {
    let db = TestDb::new().await.unwrap();

    let response = send(app(db.page_repository(), HtmlRenderer::new()), get("/view/99")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "pageId 99: not found");
}

#[tokio::test]
async fn updating_missing_page_is_internal_error() {
    let db = TestDb::new().await.unwrap();

    let response = send(
        app(db.page_repository(), HtmlRenderer::new()),
        post_form("/update/42", "title=t&body=b"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn add_form_is_prefilled() {
    let db = TestDb::new().await.unwrap();

    let response = send(app(db.page_repository(), HtmlRenderer::new()), get("/add/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"value="Title""#));
}
