//! Fire-and-forget image retrieval for fetched works.
//!
//! [`download`] schedules the byte fetches for a work on its own tokio task
//! and returns immediately; completion is reported through a
//! [`DownloadCallback`]. Manga works deliver one payload per page, in page
//! order; single-image works deliver one payload. A failed fetch yields
//! `None` for that item and never aborts its siblings.
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use pixiv_parser::{download, DownloadCallback, Work};
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl DownloadCallback for Printer {
//!     async fn on_illust_finished(&self, work: &Work, data: Option<Bytes>) {
//!         println!("#{}: {} bytes", work.id, data.map_or(0, |b| b.len()));
//!     }
//!
//!     async fn on_manga_finished(&self, work: &Work, pages: Vec<Option<Bytes>>) {
//!         println!("#{}: {} pages", work.id, pages.len());
//!     }
//! }
//!
//! # fn schedule(work: Work) {
//! download(work, Printer);
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header;

use crate::config;
use crate::types::Work;

/// Completion callback for [`download`].
///
/// Exactly one of the two methods fires per scheduled download, decided by
/// the work's manga flag.
#[async_trait]
pub trait DownloadCallback: Send + Sync + 'static {
    /// A single-image work finished. `data` is `None` when the fetch
    /// failed or the work carries no large image URL.
    async fn on_illust_finished(&self, work: &Work, data: Option<Bytes>);

    /// A manga work finished. `pages` holds one entry per page, in page
    /// order; failed fetches are `None`.
    async fn on_manga_finished(&self, work: &Work, pages: Vec<Option<Bytes>>);
}

/// Schedules the image retrieval for `work` and returns immediately.
///
/// The task runs on the ambient tokio runtime with its own transport
/// instance, uncoordinated with the session client and with any other
/// download. There is no handle: no awaiting, no cancellation. Fetch
/// failures are logged and surface only as `None` payloads.
pub fn download<C>(work: Work, callback: C)
where
    C: DownloadCallback,
{
    tokio::spawn(async move {
        let http = reqwest::Client::new();
        if work.is_manga {
            let pages = work.pages().unwrap_or(&[]);
            let mut files = Vec::with_capacity(pages.len());
            for page in pages {
                files.push(fetch_image(&http, page.image_urls.large.as_deref()).await);
            }
            callback.on_manga_finished(&work, files).await;
        } else {
            let data = fetch_image(&http, work.image_urls.large.as_deref()).await;
            callback.on_illust_finished(&work, data).await;
        }
    });
}

/// Fetches one image. Image hosts take no bearer auth, only the fixed
/// referer.
async fn fetch_image(http: &reqwest::Client, url: Option<&str>) -> Option<Bytes> {
    let url = url?;
    let response = match http
        .get(url)
        .header(header::REFERER, config::IMAGE_REFERER)
        .send()
        .await
        .and_then(|response| response.error_for_status())
    {
        Ok(response) => response,
        Err(e) => {
            log::warn!("image fetch failed for {}: {}", url, e);
            return None;
        }
    };

    match response.bytes().await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::warn!("image body read failed for {}: {}", url, e);
            None
        }
    }
}
