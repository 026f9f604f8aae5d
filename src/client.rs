//! The session client and its read operations.
//!
//! [`PixivClient`] owns the credentials, the bearer token and the shared
//! HTTP transport. One instance is meant to be reused across detail,
//! ranking, search and by-author calls; it is not advertised as safe for
//! concurrent use. Downloads run outside the session entirely, see
//! [`crate::download`].

use chrono::NaiveDate;
use serde_json::Value;

use crate::auth;
use crate::config::{self, Endpoints};
use crate::error::{Error, Result};
use crate::net;
use crate::param::ParserParam;
use crate::types::{Rank, RankedWork, Work};

/// Client for the mobile API.
///
/// # Examples
///
/// ```rust,no_run
/// use pixiv_parser::{ParserParam, PixivClient};
///
/// # async fn example() {
/// let mut client = PixivClient::new();
/// client.set_username("user");
/// client.set_password("pass");
///
/// if client.login().await {
///     let works = client
///         .search_with("fate", &ParserParam::new().limit(5))
///         .await
///         .unwrap();
///     for work in &works {
///         println!("#{} {}", work.id, work.title);
///     }
/// }
/// # }
/// ```
pub struct PixivClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    username: Option<String>,
    password: Option<String>,
    access_token: Option<String>,
}

impl PixivClient {
    /// Creates a client against the production API.
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    /// Creates a client against a custom endpoint table. This is how tests
    /// point the client at a mock server.
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(config::USER_AGENT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            endpoints,
            username: None,
            password: None,
            access_token: None,
        }
    }

    /// Sets the account name used by [`login`](Self::login).
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    /// Sets the password used by [`login`](Self::login).
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    /// Whether a login has produced a bearer token. The token is never
    /// expired client-side; only a fresh login replaces it.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Performs the login handshake and stores the bearer token.
    ///
    /// Returns `false` without issuing a request when username or password
    /// is unset. Handshake failures are logged, never raised.
    pub async fn login(&mut self) -> bool {
        let (Some(username), Some(password)) = (self.username.as_deref(), self.password.as_deref())
        else {
            log::error!("username or password is not set");
            return false;
        };

        match auth::request_token(&self.http, &self.endpoints.auth, username, password).await {
            Ok(token) => {
                log::info!("logged in as {}", username);
                self.access_token = Some(token);
                true
            }
            Err(e) => {
                log::error!("login failed: {}", e);
                false
            }
        }
    }

    /// Fetches one work by id.
    pub async fn work(&self, work_id: u64) -> Result<Work> {
        let url = build_detail_url(&self.endpoints, work_id);
        let body = self.get(&url).await?;
        let item = net::response_array(&body)?
            .first()
            .cloned()
            .ok_or_else(|| Error::malformed("empty `response` array in work detail"))?;
        Ok(serde_json::from_value(item)?)
    }

    /// Fetches the ranking snapshot for `date`, or today's when `None`.
    ///
    /// Pages are aggregated until the server stops supplying a next-page
    /// cursor: page one seeds the snapshot, later pages append their works
    /// in page order. A transport failure past the first page logs a
    /// warning and returns the partial snapshot.
    pub async fn ranking(&self, date: Option<NaiveDate>) -> Result<Rank> {
        let mut page = config::START_PAGE;
        let body = self.get(&build_ranking_url(&self.endpoints, date, page)).await?;
        let mut rank: Rank = serde_json::from_value(response_head(&body)?)?;

        let mut next = net::next_page(&body);
        while let Some(next_page) = next {
            page = next_page;
            let body = match self.get(&build_ranking_url(&self.endpoints, date, page)).await {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("ranking page {} failed, returning partial snapshot: {}", page, e);
                    return Ok(rank);
                }
            };
            let head = response_head(&body)?;
            let works: Vec<RankedWork> = head
                .get("works")
                .cloned()
                .map(serde_json::from_value)
                .transpose()?
                .ok_or_else(|| Error::malformed("ranking page without `works`"))?;
            rank.works.extend(works);
            next = net::next_page(&body);
        }
        Ok(rank)
    }

    /// Searches works by keyword with default parameters.
    pub async fn search(&self, word: &str) -> Result<Vec<Work>> {
        self.search_with(word, &ParserParam::new()).await
    }

    /// Searches works by keyword.
    ///
    /// Single-word queries match as exact tags, multi-word queries as full
    /// text. Every candidate runs through the filter/callback/limit
    /// pipeline of `param`; the traversal follows next-page cursors until
    /// the server runs out of pages or the limit is reached.
    pub async fn search_with(&self, word: &str, param: &ParserParam) -> Result<Vec<Work>> {
        self.collect_paged(param, |page| build_search_url(&self.endpoints, word, page))
            .await
    }

    /// Lists an author's works with default parameters.
    pub async fn by_author(&self, author_id: u64) -> Result<Vec<Work>> {
        self.by_author_with(author_id, &ParserParam::new()).await
    }

    /// Lists an author's works, driving `param`'s pipeline like
    /// [`search_with`](Self::search_with).
    pub async fn by_author_with(&self, author_id: u64, param: &ParserParam) -> Result<Vec<Work>> {
        self.collect_paged(param, |page| build_author_url(&self.endpoints, author_id, page))
            .await
    }

    async fn get(&self, url: &str) -> Result<Value> {
        net::get_json(&self.http, url, self.access_token.as_deref()).await
    }

    /// The shared page loop behind search and by-author.
    ///
    /// Termination: the server omitting `pagination.next`, or the limit.
    /// There is no page-count bound; a server that always supplies a cursor
    /// keeps the loop running. A transport failure aborts the traversal:
    /// with nothing accumulated it propagates, otherwise the partial result
    /// is returned and the failure logged.
    async fn collect_paged<F>(&self, param: &ParserParam, build_url: F) -> Result<Vec<Work>>
    where
        F: Fn(u32) -> String,
    {
        let mut works: Vec<Work> = Vec::new();
        let mut page = config::START_PAGE;
        loop {
            let body = match self.get(&build_url(page)).await {
                Ok(body) => body,
                Err(e) if works.is_empty() => return Err(e),
                Err(e) => {
                    log::warn!(
                        "page {} failed, returning {} collected works: {}",
                        page,
                        works.len(),
                        e
                    );
                    return Ok(works);
                }
            };

            for item in net::response_array(&body)? {
                let work: Work = serde_json::from_value(item.clone())?;
                if !param.accepts(&work) {
                    continue;
                }
                param.notify(&work);
                works.push(work);
                if param.limit_reached(works.len()) {
                    return Ok(works);
                }
            }

            match net::next_page(&body) {
                Some(next) => page = next,
                None => return Ok(works),
            }
        }
    }
}

impl Default for PixivClient {
    fn default() -> Self {
        Self::new()
    }
}

/// `response[0]`, the object every non-search endpoint nests its payload in.
fn response_head(body: &Value) -> Result<Value> {
    net::response_array(body)?
        .first()
        .cloned()
        .ok_or_else(|| Error::malformed("empty `response` array"))
}

/// Parameter set shared by all paged read operations.
fn common_params(page: u32) -> Vec<(&'static str, String)> {
    vec![
        ("image_size", "profile_image_sizes".to_string()),
        ("profile_image_sizes", "px_170x170".to_string()),
        ("include_sanity_level", "true".to_string()),
        ("include_stats", "true".to_string()),
        ("period", "all".to_string()),
        ("order", "desc".to_string()),
        ("sort", "date".to_string()),
        ("page", page.to_string()),
    ]
}

/// Joins `key=value` pairs onto a URL. Values are sent as-is; the API
/// accepts this unescaped form, and literal spaces are handled at request
/// time (see [`net`]).
fn join_params(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

fn build_detail_url(endpoints: &Endpoints, work_id: u64) -> String {
    let params = vec![
        ("image_sizes", "small,medium,large".to_string()),
        ("include_stats", "true".to_string()),
    ];
    join_params(
        &endpoints.work.replace("{illust_id}", &work_id.to_string()),
        &params,
    )
}

fn build_ranking_url(endpoints: &Endpoints, date: Option<NaiveDate>, page: u32) -> String {
    let mut params = common_params(page);
    params.push(("mode", "daily".to_string()));
    params.push(("per_page", "50".to_string()));
    if let Some(date) = date {
        params.push(("date", date.format("%Y-%m-%d").to_string()));
    }
    join_params(&endpoints.ranking, &params)
}

fn build_search_url(endpoints: &Endpoints, word: &str, page: u32) -> String {
    let mut params = common_params(page);
    params.push(("q", word.to_string()));
    let mode = if word.split(' ').count() == 1 {
        "exact_tag"
    } else {
        "text"
    };
    params.push(("mode", mode.to_string()));
    params.push(("per_page", "30".to_string()));
    join_params(&endpoints.search, &params)
}

fn build_author_url(endpoints: &Endpoints, author_id: u64, page: u32) -> String {
    let mut params = common_params(page);
    params.push(("mode", "exact_tag".to_string()));
    params.push(("per_page", "30".to_string()));
    join_params(
        &endpoints
            .author_works
            .replace("{author_id}", &author_id.to_string()),
        &params,
    )
}
