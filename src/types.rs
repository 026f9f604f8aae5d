//! Core data types for works, ranking snapshots and manga pages.
//!
//! This module defines the wire entities the mobile API returns:
//!
//! - [`Work`] - one published illustration or manga entry
//! - [`Rank`] - a dated ranking snapshot over works
//! - [`Page`] - one image unit of a manga-type work
//!
//! All of them deserialize straight from the API's JSON and are immutable
//! once constructed from server data.

use serde::{Deserialize, Serialize};

/// Image URL set at the resolutions the API serves.
///
/// Which sizes are present depends on the `image_sizes` parameter the
/// request asked for, so every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrls {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// The author a work belongs to (wire object `user`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub account: String,
    pub name: String,
}

/// Aggregate counters sent when `include_stats=true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub scored_count: Option<u64>,
    #[serde(default)]
    pub score: Option<u64>,
    #[serde(default)]
    pub views_count: Option<u64>,
}

/// One image unit of a manga-type work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub image_urls: ImageUrls,
}

/// Extra payload for manga works: the ordered page sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// One published illustration or manga entry.
///
/// `is_manga` decides which image field is authoritative: manga works carry
/// their images in the page sequence behind [`Work::pages`], single-image
/// works in `image_urls` directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_urls: ImageUrls,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default = "default_page_count")]
    pub page_count: u32,
    #[serde(default)]
    pub is_manga: bool,
    pub user: Author,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

fn default_page_count() -> u32 {
    1
}

impl Work {
    /// Ordered manga pages, when this work is manga-typed.
    ///
    /// Returns `None` for single-image works; their one image lives in
    /// `image_urls`.
    pub fn pages(&self) -> Option<&[Page]> {
        if !self.is_manga {
            return None;
        }
        self.metadata.as_ref().map(|m| m.pages.as_slice())
    }
}

/// One entry of a ranking snapshot: a work plus its position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedWork {
    pub rank: u32,
    #[serde(default)]
    pub previous_rank: Option<u32>,
    pub work: Work,
}

/// A dated ranking snapshot.
///
/// The first response page seeds the snapshot fields; later pages only
/// append to `works`, strictly in page order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rank {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub works: Vec<RankedWork>,
}
