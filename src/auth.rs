//! Login handshake and request signing.
//!
//! The token endpoint wants two things besides the password-grant form: a
//! client timestamp in ISO-8601 with the local UTC offset, and a signature
//! over it. The signature is the lowercase hex md5 of the timestamp string
//! concatenated with the app's shared secret, sent as `X-Client-Time` /
//! `X-Client-Hash` headers.

use chrono::Local;
use serde_json::Value;

use crate::config;
use crate::error::{Error, Result};

/// Current local time, whole seconds, formatted like
/// `2019-09-02T22:10:52+01:00`.
pub(crate) fn client_time() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Signature for a client timestamp: lowercase hex md5 of the timestamp
/// concatenated with [`config::HASH_SECRET`].
pub(crate) fn client_hash(client_time: &str) -> String {
    format!(
        "{:x}",
        md5::compute(format!("{}{}", client_time, config::HASH_SECRET))
    )
}

/// Performs the password-grant handshake and returns the bearer token.
///
/// Any non-success status is an [`Error::Auth`], as is a 200 response whose
/// body lacks `response.access_token`.
pub(crate) async fn request_token(
    http: &reqwest::Client,
    auth_url: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    let form = [
        ("client_id", config::CLIENT_ID),
        ("client_secret", config::CLIENT_SECRET),
        ("grant_type", "password"),
        ("username", username),
        ("password", password),
        ("get_secure_url", "true"),
    ];

    let time = client_time();
    let hash = client_hash(&time);
    let response = http
        .post(auth_url)
        .header("X-Client-Time", &time)
        .header("X-Client-Hash", &hash)
        .form(&form)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::auth(format!(
            "token request returned HTTP {}",
            response.status()
        )));
    }

    let body: Value = response.json().await?;
    body.get("response")
        .and_then(|r| r.get("access_token"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::auth("token response lacks `response.access_token`"))
}
