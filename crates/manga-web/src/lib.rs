//! Manga web front end.
//!
//! Serves a manga listing and a manga search page, both backed by the Jikan
//! API v4 and rendered to HTML.

pub mod api;
pub mod error;
pub mod routes;
pub mod server;
pub mod views;

pub use api::{ApiError, JikanClient, MangaEntry};
pub use error::AppError;
pub use server::{router, serve, AppState};
pub use views::MangaListPage;
