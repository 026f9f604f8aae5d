//! # pixiv-parser - async client for the Pixiv mobile API
//!
//! A client library for the mobile-app API of Pixiv. It logs in with a
//! username/password pair via the app's signed OAuth handshake, then exposes
//! the four read operations of the API - work detail, daily ranking, keyword
//! search, works by author - plus background image downloads for the works
//! it returns.
//!
//! The list-producing operations follow the API's pagination protocol:
//! pages are fetched until the server stops supplying a `pagination.next`
//! cursor, and every candidate work runs through a configurable
//! filter/callback/limit pipeline that can cut the traversal short.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pixiv_parser::{ParserParam, PixivClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut client = PixivClient::new();
//!     client.set_username("user");
//!     client.set_password("pass");
//!     if !client.login().await {
//!         return;
//!     }
//!
//!     // Today's ranking, aggregated across all pages.
//!     let rank = client.ranking(None).await.unwrap();
//!     println!("{} ranked works", rank.works.len());
//!
//!     // The first ten manga works tagged "fate".
//!     let works = client
//!         .search_with("fate", &ParserParam::new().filter(|w| w.is_manga).limit(10))
//!         .await
//!         .unwrap();
//!     println!("{} works", works.len());
//! }
//! ```
//!
//! ## Downloading images
//!
//! [`download()`] is fire-and-forget: it schedules the byte fetches on their
//! own tokio task and reports completion through a [`DownloadCallback`].
//! Manga works deliver their pages in order; per-page failures are isolated.
//! See [`mod@download`] for a full example.
//!
//! ## Failure behavior
//!
//! [`PixivClient::login`] returns a plain `bool` and logs the reason for a
//! rejection. Paged traversals that fail mid-way log the failure and return
//! what they have collected so far; everything else surfaces as
//! [`enum@Error`]. The crate logs through the [`log`] facade and never
//! retries - a failed request stays failed.

pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod param;
pub mod types;

mod auth;
mod net;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::client::PixivClient;
    pub use crate::config::Endpoints;
    pub use crate::download::{download, DownloadCallback};
    pub use crate::error::{Error, Result};
    pub use crate::param::ParserParam;
    pub use crate::types::{Author, ImageUrls, Metadata, Page, Rank, RankedWork, Stats, Work};
}

pub use client::PixivClient;
pub use config::Endpoints;
pub use download::{download, DownloadCallback};
pub use error::{Error, Result};
pub use param::{ParserParam, WorkCallback, WorkFilter};
pub use types::{Author, ImageUrls, Page, Rank, RankedWork, Work};
