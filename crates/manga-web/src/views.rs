//! HTML page rendering.

use crate::api::MangaEntry;
use askama::Template;

/// The manga list page, shared by the listing and search routes
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct MangaListPage {
    /// Entries in the order the catalog returned them
    pub manga_data: Vec<MangaEntry>,
    /// Current search text, echoed back into the search box
    pub query: String,
}

impl MangaListPage {
    pub fn new(manga_data: Vec<MangaEntry>, query: impl Into<String>) -> Self {
        Self {
            manga_data,
            query: query.into(),
        }
    }
}
