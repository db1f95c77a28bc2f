use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::api::error::FetchError;
use crate::api::types::{SearchPage, SearchQuery};
use crate::config::{ApiConfig, SecureString};

/// Longest slice of an unstructured error body kept in the error message.
const ERROR_BODY_LIMIT: usize = 200;

/// Anything that can answer a photo search.
///
/// The fetch orchestrator is generic over this so tests can stand in a
/// scripted source without a network.
pub trait PhotoSearch: Send + Sync + 'static {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchPage, FetchError>> + Send;
}

/// Client for the Unsplash-compatible `GET /search/photos` endpoint.
pub struct UnsplashClient {
    client: Client,
    endpoint: Url,
    access_key: SecureString,
    per_page: Option<u32>,
}

impl UnsplashClient {
    pub fn new(api: &ApiConfig, access_key: SecureString) -> Result<Self, FetchError> {
        let url = endpoint_url(&api.base_url, &api.search_path);
        let endpoint = Url::parse(&url).map_err(|_| FetchError::InvalidEndpoint { url })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            endpoint,
            access_key,
            per_page: api.per_page,
        })
    }

    /// Full request URL for `query`, credential included.
    pub fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("query", &query.query)
                .append_pair("client_id", self.access_key.expose())
                .append_pair("page", &query.page.to_string());
            if let Some(per_page) = self.per_page {
                pairs.append_pair("per_page", &per_page.to_string());
            }
        }
        url
    }

    async fn do_search(&self, query: &SearchQuery) -> Result<SearchPage, FetchError> {
        tracing::debug!(query = %query.query, page = query.page, "Sending search request");

        let response = self
            .client
            .get(self.request_url(query))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Connection)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::Connection)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let page: SearchPage = serde_json::from_str(&body)?;
        tracing::debug!(
            query = %query.query,
            page = query.page,
            results = page.results.len(),
            total_pages = ?page.total_pages,
            "Search request completed"
        );
        Ok(page)
    }
}

impl PhotoSearch for UnsplashClient {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchPage, FetchError>> + Send {
        self.do_search(query)
    }
}

/// `search_path` appended to `base_url`, keeping any path the base already has.
fn endpoint_url(base_url: &str, search_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        search_path.trim_start_matches('/')
    )
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<String>,
}

/// Pull a readable message out of an error body.
///
/// The API reports `{"errors": ["..."]}`; anything else is truncated raw text.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if !parsed.errors.is_empty() {
            return parsed.errors.join("; ");
        }
    }
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
