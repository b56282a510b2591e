//! Catalog API client.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogConfig, CatalogTrack};
use aria_core::{Track, TrackId};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the third-party catalog API.
///
/// # Example
///
/// ```ignore
/// use aria_catalog::{CatalogClient, CatalogConfig};
///
/// let config = CatalogConfig::new("https://catalog.example.com");
/// let client = CatalogClient::new(config)?;
///
/// let tracks = client.search("aurora").await?;
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Aria/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL of the catalog.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a single track by id.
    ///
    /// A track the catalog does not know is `Ok(None)`, not an error.
    pub async fn get_track(&self, id: &TrackId) -> Result<Option<Track>> {
        let url = format!("{}/tracks/{}", self.base_url, id);
        debug!(url = %url, "fetching track");

        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let track = Self::parse_body::<CatalogTrack>(response).await?;
        Ok(Some(track.into()))
    }

    /// Search the catalog by free-text term.
    ///
    /// No matches is an empty list, never an error.
    pub async fn search(&self, term: &str) -> Result<Vec<Track>> {
        let url = format!("{}/tracks", self.base_url);
        debug!(url = %url, term, "searching catalog");

        let response = self
            .http
            .get(&url)
            .query(&[("search", term)])
            .send()
            .await?;

        let tracks = Self::parse_body::<Vec<CatalogTrack>>(response).await?;
        Ok(tracks.into_iter().map(Track::from).collect())
    }

    /// List all tracks by an artist.
    pub async fn tracks_by_author(&self, author: &str) -> Result<Vec<Track>> {
        let url = format!("{}/tracks", self.base_url);
        debug!(url = %url, author, "listing artist tracks");

        let response = self
            .http
            .get(&url)
            .query(&[("author", author)])
            .send()
            .await?;

        let tracks = Self::parse_body::<Vec<CatalogTrack>>(response).await?;
        Ok(tracks.into_iter().map(Track::from).collect())
    }

    /// Search, degrading any failure to an empty result.
    ///
    /// This is the contract the player-facing glue relies on: a catalog
    /// outage renders as "nothing found", never as a fault.
    pub async fn search_or_empty(&self, term: &str) -> Vec<Track> {
        match self.search(term).await {
            Ok(tracks) => tracks,
            Err(err) => {
                warn!(term, %err, "catalog search failed, returning empty result");
                Vec::new()
            }
        }
    }

    /// List an artist's tracks, degrading any failure to an empty result.
    pub async fn tracks_by_author_or_empty(&self, author: &str) -> Vec<Track> {
        match self.tracks_by_author(author).await {
            Ok(tracks) => tracks,
            Err(err) => {
                warn!(author, %err, "catalog listing failed, returning empty result");
                Vec::new()
            }
        }
    }

    async fn parse_body<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|err| {
                CatalogError::Parse(format!("failed to parse catalog response: {}", err))
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
