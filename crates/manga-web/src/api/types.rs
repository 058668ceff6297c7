//! Jikan API v4 response types.
//!
//! Manga records are kept as the raw JSON objects the API returns. The
//! accessors below only read from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Simple data wrapper (without pagination)
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

/// One manga record from the catalog, passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MangaEntry(Map<String, Value>);

impl MangaEntry {
    pub fn mal_id(&self) -> Option<u64> {
        self.0.get("mal_id").and_then(Value::as_u64)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn title_english(&self) -> Option<&str> {
        self.str_field("title_english")
    }

    /// Title for display: main title, then English title, then a placeholder
    pub fn display_title(&self) -> &str {
        self.title()
            .or_else(|| self.title_english())
            .unwrap_or("Untitled")
    }

    /// MyAnimeList page for this entry
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    /// Cover image (`images.jpg.image_url`)
    pub fn image_url(&self) -> Option<&str> {
        self.0
            .get("images")
            .and_then(|images| images.get("jpg"))
            .and_then(|jpg| jpg.get("image_url"))
            .and_then(Value::as_str)
    }

    /// Publication type such as "Manga" or "Light Novel"
    pub fn kind(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn score(&self) -> Option<f64> {
        self.0.get("score").and_then(Value::as_f64)
    }

    pub fn synopsis(&self) -> Option<&str> {
        self.str_field("synopsis")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
