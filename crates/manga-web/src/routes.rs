//! Web route handlers.

use crate::error::AppError;
use crate::server::AppState;
use crate::views::MangaListPage;
use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use tracing::debug;

pub const PATH_INDEX: &str = "/";
pub const PATH_SEARCH: &str = "/search";

/// Query parameters accepted by the search route
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub query: Option<String>,
}

impl SearchParams {
    /// Pick `query` out of the raw pairs. The first occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value);

        Self { query }
    }
}

/// `GET /`: the unfiltered catalog listing
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let manga_data = state.client.list_manga().await?;

    render(MangaListPage::new(manga_data, ""))
}

/// `GET /search?query=...`: catalog search
///
/// An absent or empty query renders an empty page without calling the catalog.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let query = SearchParams::from_pairs(pairs).query.unwrap_or_default();

    let manga_data = if query.is_empty() {
        debug!("No search query, skipping catalog request");
        Vec::new()
    } else {
        state.client.search_manga(&query).await?
    };

    render(MangaListPage::new(manga_data, query))
}

fn render(page: MangaListPage) -> Result<Html<String>, AppError> {
    debug!(entries = page.manga_data.len(), "Rendering manga list");
    Ok(Html(page.render()?))
}
