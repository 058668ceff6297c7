//! Jikan API v4 client implementation.
//!
//! This module provides the client used by the web routes to fetch manga
//! listings and search results from the Jikan API (MyAnimeList unofficial API).

pub mod client;
pub mod types;

pub use client::{ApiError, JikanClient};
pub use types::*;
