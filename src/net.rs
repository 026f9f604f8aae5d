//! Transport plumbing for the mobile API.
//!
//! Thin helpers over the session's [`reqwest::Client`]: an authenticated
//! JSON GET and the two pieces of response-shape knowledge every operation
//! shares, the top-level `response` array and the `pagination.next` cursor.

use reqwest::header;
use serde_json::Value;

use crate::config;
use crate::error::{Error, Result};

/// Issues an API GET and decodes the body as JSON.
///
/// Query strings are sent as built; the one escape applied is replacing
/// literal spaces with `%20` before the request is constructed. The bearer
/// token is attached when the session holds one.
pub(crate) async fn get_json(
    http: &reqwest::Client,
    url: &str,
    token: Option<&str>,
) -> Result<Value> {
    let url = url.replace(' ', "%20");
    let mut request = http.get(&url).header(header::REFERER, config::API_REFERER);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    let response = request.send().await?.error_for_status()?;
    Ok(response.json().await?)
}

/// Extracts the top-level `response` array every read endpoint wraps its
/// payload in.
pub(crate) fn response_array(body: &Value) -> Result<&Vec<Value>> {
    body.get("response")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::malformed("missing top-level `response` array"))
}

/// Reads the `pagination.next` cursor. Absent or null means the server has
/// no further page.
pub(crate) fn next_page(body: &Value) -> Option<u32> {
    body.get("pagination")?.get("next")?.as_u64().map(|p| p as u32)
}
