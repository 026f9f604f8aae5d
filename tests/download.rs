//! HTTP-mocked tests for the fire-and-forget download dispatcher.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use mockito::Server;
use pixiv_parser::{download, DownloadCallback, Work};
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::timeout;

mod common;
use common::work_json;

const WAIT: Duration = Duration::from_secs(10);

enum Finished {
    Illust(u64, Option<Bytes>),
    Manga(u64, Vec<Option<Bytes>>),
}

/// Bridges the callback into the test via a channel, since the dispatcher
/// hands out no task handle.
struct ChannelCallback {
    tx: mpsc::Sender<Finished>,
}

#[async_trait]
impl DownloadCallback for ChannelCallback {
    async fn on_illust_finished(&self, work: &Work, data: Option<Bytes>) {
        let _ = self.tx.send(Finished::Illust(work.id, data)).await;
    }

    async fn on_manga_finished(&self, work: &Work, pages: Vec<Option<Bytes>>) {
        let _ = self.tx.send(Finished::Manga(work.id, pages)).await;
    }
}

fn manga_work(id: u64, page_urls: &[String]) -> Work {
    let mut value = work_json(id);
    value["is_manga"] = json!(true);
    value["page_count"] = json!(page_urls.len());
    value["metadata"] = json!({
        "pages": page_urls
            .iter()
            .map(|url| json!({"image_urls": {"large": url}}))
            .collect::<Vec<_>>()
    });
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn single_image_download_delivers_one_payload() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img/1.png")
        .match_header("referer", "http://www.pixiv.net")
        .with_body("image-bytes")
        .create_async()
        .await;

    let mut value = work_json(1);
    value["image_urls"]["large"] = json!(format!("{}/img/1.png", server.url()));
    let work: Work = serde_json::from_value(value).unwrap();

    let (tx, mut rx) = mpsc::channel(1);
    download(work, ChannelCallback { tx });

    match timeout(WAIT, rx.recv()).await.unwrap().unwrap() {
        Finished::Illust(id, data) => {
            assert_eq!(id, 1);
            assert_eq!(data.unwrap().as_ref(), b"image-bytes");
        }
        Finished::Manga(..) => panic!("single-image work dispatched as manga"),
    }
}

#[tokio::test]
async fn manga_download_delivers_pages_in_order() {
    let mut server = Server::new_async().await;
    for index in 0..3 {
        server
            .mock("GET", format!("/img/7_p{}.png", index).as_str())
            .match_header("referer", "http://www.pixiv.net")
            .with_body(format!("page-{}", index))
            .create_async()
            .await;
    }

    let urls: Vec<String> = (0..3)
        .map(|index| format!("{}/img/7_p{}.png", server.url(), index))
        .collect();
    let work = manga_work(7, &urls);

    let (tx, mut rx) = mpsc::channel(1);
    download(work, ChannelCallback { tx });

    match timeout(WAIT, rx.recv()).await.unwrap().unwrap() {
        Finished::Manga(id, pages) => {
            assert_eq!(id, 7);
            assert_eq!(pages.len(), 3);
            for (index, page) in pages.iter().enumerate() {
                let expected = format!("page-{}", index);
                assert_eq!(page.as_ref().unwrap().as_ref(), expected.as_bytes());
            }
        }
        Finished::Illust(..) => panic!("manga work dispatched as single image"),
    }
}

#[tokio::test]
async fn failed_page_fetch_is_isolated() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/img/9_p0.png")
        .with_body("page-0")
        .create_async()
        .await;
    server
        .mock("GET", "/img/9_p1.png")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/img/9_p2.png")
        .with_body("page-2")
        .create_async()
        .await;

    let urls: Vec<String> = (0..3)
        .map(|index| format!("{}/img/9_p{}.png", server.url(), index))
        .collect();
    let work = manga_work(9, &urls);

    let (tx, mut rx) = mpsc::channel(1);
    download(work, ChannelCallback { tx });

    match timeout(WAIT, rx.recv()).await.unwrap().unwrap() {
        Finished::Manga(_, pages) => {
            assert_eq!(pages.len(), 3);
            assert_eq!(pages[0].as_ref().unwrap().as_ref(), b"page-0");
            assert!(pages[1].is_none());
            assert_eq!(pages[2].as_ref().unwrap().as_ref(), b"page-2");
        }
        Finished::Illust(..) => panic!("manga work dispatched as single image"),
    }
}

#[tokio::test]
async fn missing_large_url_yields_an_absent_payload() {
    // No server involved: a work without a large image URL completes with
    // an empty payload instead of erroring.
    let mut value = work_json(5);
    value["image_urls"]["large"] = json!(null);
    let work: Work = serde_json::from_value(value).unwrap();

    let (tx, mut rx) = mpsc::channel(1);
    download(work, ChannelCallback { tx });

    match timeout(WAIT, rx.recv()).await.unwrap().unwrap() {
        Finished::Illust(id, data) => {
            assert_eq!(id, 5);
            assert!(data.is_none());
        }
        Finished::Manga(..) => panic!("single-image work dispatched as manga"),
    }
}
