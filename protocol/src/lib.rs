//! Wire types and endpoints of the jService-compatible trivia API.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize};

pub type CategoryId = u64;

pub const DEFAULT_API_BASE: &str = "https://jservice.io";

/// One entry of the category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Number of clues the service advertises, when it does.
    #[serde(default)]
    pub clues_count: Option<u32>,
}

/// A category together with its full clue list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
}

// Some mirrors send `null` for text they do not have.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// URL builder for the two endpoints the game reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn categories(&self, count: u16) -> String {
        format!("{}/api/categories?count={}", self.base, count)
    }

    pub fn category(&self, id: CategoryId) -> String {
        format!("{}/api/category?id={}", self.base, id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_strip_trailing_slashes() {
        let endpoints = Endpoints::new("http://localhost:3000/ ");

        assert_eq!(endpoints.base(), "http://localhost:3000");
        assert_eq!(
            endpoints.categories(100),
            "http://localhost:3000/api/categories?count=100"
        );
        assert_eq!(
            endpoints.category(42),
            "http://localhost:3000/api/category?id=42"
        );
    }

    #[test]
    fn category_listing_ignores_unknown_fields() {
        let json = r#"[
            {"id": 11531, "title": "mixed bag", "clues_count": 5},
            {"id": 11532, "title": "let's \"ch\"at", "clues_count": null, "created_at": "2014-02-11"},
            {"id": 5412}
        ]"#;

        let listing: Vec<CategorySummary> = serde_json::from_str(json).unwrap();

        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].clues_count, Some(5));
        assert_eq!(listing[1].title, "let's \"ch\"at");
        assert_eq!(listing[1].clues_count, None);
        assert_eq!(listing[2].title, "");
    }

    #[test]
    fn category_detail_decodes_null_text_as_empty() {
        let json = r#"{
            "id": 21,
            "title": "wine",
            "clues_count": 2,
            "clues": [
                {"id": 1, "answer": "Champagne", "question": "Sparkling wine region", "value": 200, "airdate": "1996-12-06T12:00:00.000Z"},
                {"id": 2, "answer": null, "question": "Mystery clue", "value": null}
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.title, "wine");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].value, Some(200));
        assert_eq!(detail.clues[1].answer, "");
        assert_eq!(detail.clues[1].value, None);
    }

    #[test]
    fn category_detail_without_clues_is_empty() {
        let detail: CategoryDetail = serde_json::from_str(r#"{"id": 3, "title": "x"}"#).unwrap();

        assert!(detail.clues.is_empty());
    }
}
