//! mockall doubles for the core ports.

use async_trait::async_trait;
use mockall::mock;

use tinywiki_core::{NewPage, Page, PageRepository, RenderError, Renderer, RepositoryError, ViewData};

mock! {
    pub PageRepo {}

    #[async_trait]
    impl PageRepository for PageRepo {
        async fn list_summaries(&self) -> Result<Vec<Page>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Page, RepositoryError>;
        async fn create(&self, page: &NewPage) -> Result<i64, RepositoryError>;
        async fn update(&self, page: &Page) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Render {}

    impl Renderer for Render {
        fn render(&self, view: &str, data: &ViewData) -> Result<String, RenderError>;
    }
}

/// A repository that must never be called.
pub fn untouched_repo() -> MockPageRepo {
    let mut repo = MockPageRepo::new();
    repo.expect_list_summaries().never();
    repo.expect_get_by_id().never();
    repo.expect_create().never();
    repo.expect_update().never();
    repo.expect_delete().never();
    repo
}

/// A renderer that must never be called.
pub fn untouched_renderer() -> MockRender {
    let mut renderer = MockRender::new();
    renderer.expect_render().never();
    renderer
}

/// A renderer that echoes the view name.
pub fn echo_renderer() -> MockRender {
    let mut renderer = MockRender::new();
    renderer
        .expect_render()
        .returning(|view, _| Ok(format!("rendered {view}")));
    renderer
}

pub fn sample_page(id: i64) -> Page {
    Page {
        id,
        title: "Title".to_string(),
        body: "Body".to_string(),
    }
}
