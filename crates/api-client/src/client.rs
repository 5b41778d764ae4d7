//! HTTP access to the recommendation service.
//!
//! The service exposes two read-only endpoints:
//! - `GET {API_URL}/movies` returns the catalog as a JSON array of titles
//! - `GET {API_URL}/recommend?movie=<title>` returns `[{title, poster}, ...]`

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::error::{ApiError, Result};
use crate::types::{ErrorBody, MovieTitle, Recommendation};

/// Default location of the hosted recommendation service.
pub const DEFAULT_API_URL: &str = "https://movie-recommender-app-185a.onrender.com";

/// Read access to a recommendation backend.
///
/// The frontend only depends on this trait so it can be driven by a fake
/// backend in tests.
#[async_trait]
pub trait RecommenderApi: Send + Sync {
    /// Fetch the list of titles the backend can recommend from.
    async fn fetch_movies(&self) -> Result<Vec<MovieTitle>>;

    /// Fetch recommendations for a single title.
    async fn fetch_recommendations(&self, movie: &str) -> Result<Vec<Recommendation>>;
}

/// `RecommenderApi` over HTTP using reqwest.
#[derive(Clone, Debug)]
pub struct HttpRecommenderClient {
    http: Client,
    base_url: String,
}

impl HttpRecommenderClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// A trailing `/` is stripped so paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Same as [`HttpRecommenderClient::new`] but reuses an existing reqwest client.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let base_url = raw.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl {
                url: raw,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        info!("Using recommendation service at {}", base_url);
        Ok(Self { http, base_url })
    }

    /// Base URL requests are issued against (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.http.get(&url).query(query).send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Flask answers errors with {"error": "..."}; anything else falls
            // back to the status reason.
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            error!("{} returned {}: {}", url, status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Could not decode response from {}: {}", url, e);
            ApiError::Decode(e)
        })
    }
}

#[async_trait]
impl RecommenderApi for HttpRecommenderClient {
    async fn fetch_movies(&self) -> Result<Vec<MovieTitle>> {
        let movies: Vec<MovieTitle> = self.get_json("/movies", &[]).await?;
        debug!("Catalog contains {} titles", movies.len());
        Ok(movies)
    }

    async fn fetch_recommendations(&self, movie: &str) -> Result<Vec<Recommendation>> {
        let recs: Vec<Recommendation> = self.get_json("/recommend", &[("movie", movie)]).await?;
        debug!("Received {} recommendations for '{}'", recs.len(), movie);
        Ok(recs)
    }
}
