//! Fixed protocol constants and the API endpoint table.
//!
//! Everything the mobile API expects verbatim lives here: the client
//! credentials baked into the official app, the shared secret behind the
//! `X-Client-Hash` header, the user agent, and the referer values the API
//! distinguishes requests by.

/// `client_id` form value for the token endpoint.
pub const CLIENT_ID: &str = "MOBrBDS8blbauoSck0ZfDbtuzpyT";

/// `client_secret` form value for the token endpoint.
pub const CLIENT_SECRET: &str = "lsACyCD94FhDUtGTXi3QzcFE2uU1hqtDaKeqrdwj";

/// Shared secret mixed into the `X-Client-Hash` signature.
pub const HASH_SECRET: &str = "28c1fdd170a5204386cb1313c7077b34f83e4aaf4aa829ce78c231e05b0bae2c";

/// User agent of the mobile app this client impersonates.
pub const USER_AGENT: &str = "PixivAndroidApp/5.0.64 (Android 6.0)";

/// Referer attached to API requests.
pub const API_REFERER: &str = "http://spapi.pixiv.net/";

/// Referer attached to image downloads. Image hosts are referer-gated and
/// take no bearer auth.
pub const IMAGE_REFERER: &str = "http://www.pixiv.net";

/// Page number the pagination loops start from.
pub const START_PAGE: u32 = 1;

/// URL templates for every endpoint the client talks to.
///
/// `{illust_id}` and `{author_id}` are substituted at request time. The
/// [`Default`] table points at the production API; tests point it at a mock
/// server instead.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// OAuth token endpoint (POST).
    pub auth: String,
    /// Work detail, `{illust_id}` placeholder.
    pub work: String,
    /// Works of one author, `{author_id}` placeholder.
    pub author_works: String,
    /// Daily ranking.
    pub ranking: String,
    /// Keyword search.
    pub search: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth: "https://oauth.secure.pixiv.net/auth/token".to_string(),
            work: "https://public-api.secure.pixiv.net/v1/works/{illust_id}.json".to_string(),
            author_works: "https://public-api.secure.pixiv.net/v1/users/{author_id}/works.json"
                .to_string(),
            ranking: "https://public-api.secure.pixiv.net/v1/ranking/all".to_string(),
            search: "https://public-api.secure.pixiv.net/v1/search/works.json".to_string(),
        }
    }
}
