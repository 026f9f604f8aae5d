//! Shared fixtures for the HTTP-mocked test suites.

use mockito::Server;
use pixiv_parser::Endpoints;
use serde_json::{json, Value};

/// Endpoint table pointing every operation at the mock server.
#[allow(dead_code)]
pub fn endpoints(server: &Server) -> Endpoints {
    let base = server.url();
    Endpoints {
        auth: format!("{}/auth/token", base),
        work: format!("{}/v1/works/{{illust_id}}.json", base),
        author_works: format!("{}/v1/users/{{author_id}}/works.json", base),
        ranking: format!("{}/v1/ranking/all", base),
        search: format!("{}/v1/search/works.json", base),
    }
}

/// A minimal single-image work as the API serializes it.
#[allow(dead_code)]
pub fn work_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("work {}", id),
        "tags": ["tag"],
        "image_urls": {
            "small": format!("https://img.example/{}_s.png", id),
            "medium": format!("https://img.example/{}_m.png", id),
            "large": format!("https://img.example/{}.png", id)
        },
        "page_count": 1,
        "is_manga": false,
        "user": {"id": 1, "account": "artist", "name": "Artist"}
    })
}

/// One page of a paged list response.
#[allow(dead_code)]
pub fn page_body(works: &[Value], next: Option<u32>) -> String {
    json!({
        "status": "success",
        "response": works,
        "pagination": {"next": next}
    })
    .to_string()
}

/// One page of a ranking response.
#[allow(dead_code)]
pub fn ranking_body(date: &str, entries: &[Value], next: Option<u32>) -> String {
    json!({
        "status": "success",
        "response": [{
            "content": "all",
            "mode": "daily",
            "date": date,
            "works": entries
        }],
        "pagination": {"next": next}
    })
    .to_string()
}

/// A ranking entry wrapping a work.
#[allow(dead_code)]
pub fn ranked(rank: u32, work: Value) -> Value {
    json!({"rank": rank, "previous_rank": null, "work": work})
}
