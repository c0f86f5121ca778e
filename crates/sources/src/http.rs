//! Network sources.
//!
//! [`HttpSource`] reads one endpoint that already returns complete artists.
//! [`GroupieApiSource`] talks to the public groupie-tracker API, whose
//! artist records are split over three endpoints, and joins them.

use crate::error::{LoadError, Result};
use crate::traits::ArtistSource;
use async_trait::async_trait;
use catalog::{Artist, parser};
use std::time::Duration;

pub const GROUPIE_API_URL: &str = "https://groupietrackers.herokuapp.com/api";
const USER_AGENT: &str = concat!("groupie-browser/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!("Falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        })
}

/// GET `url` and return the body, failing on any non-success status
async fn get_text(client: &reqwest::Client, url: &str) -> Result<String> {
    tracing::debug!("GET {}", url);
    let request_error = |source| LoadError::Request {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(request_error)
}

// =============================================================================
// Single endpoint
// =============================================================================

/// One endpoint returning a JSON array of complete artists.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ArtistSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Artist>> {
        let body = get_text(&self.client, &self.url).await?;
        Ok(parser::parse_artists(&body)?)
    }
}

// =============================================================================
// groupie-tracker API
// =============================================================================

/// The groupie-tracker API: `/artists`, `/locations` and `/relation`.
///
/// The three requests run concurrently; any failure fails the whole load.
#[derive(Debug, Clone)]
pub struct GroupieApiSource {
    client: reqwest::Client,
    base_url: String,
}

impl GroupieApiSource {
    /// # Arguments
    /// * `base_url` - API root, e.g. [`GROUPIE_API_URL`]; a trailing `/` is ignored
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: build_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

impl Default for GroupieApiSource {
    fn default() -> Self {
        Self::new(GROUPIE_API_URL)
    }
}

#[async_trait]
impl ArtistSource for GroupieApiSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Artist>> {
        let (artists_url, locations_url, relation_url) = (
            self.endpoint("artists"),
            self.endpoint("locations"),
            self.endpoint("relation"),
        );

        let (artists, locations, relations) = tokio::try_join!(
            get_text(&self.client, &artists_url),
            get_text(&self.client, &locations_url),
            get_text(&self.client, &relation_url),
        )?;

        let artists = parser::parse_api_artists(&artists)?;
        let locations = parser::parse_location_index(&locations)?;
        let relations = parser::parse_relation_index(&relations)?;
        tracing::debug!(
            "Joining {} artists with {} location and {} relation entries",
            artists.len(),
            locations.index.len(),
            relations.index.len()
        );

        Ok(parser::join_api_indexes(artists, locations, relations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve;

    const QUEEN: &str = r#"[{"id": 1, "name": "Queen", "members": ["Freddie Mercury", "Brian May"],
        "creationDate": 1970, "firstAlbum": "14-12-1973", "locations": ["london-uk"]}]"#;

    #[tokio::test]
    async fn test_http_source_success() {
        let base = serve(vec![("/artists.json", 200, QUEEN.to_string())]).await;
        let source = HttpSource::new(format!("{}/artists.json", base));

        let artists = source.fetch().await.unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Queen");
        assert_eq!(artists[0].first_album_year, 1973);
    }

    #[tokio::test]
    async fn test_http_source_non_success_status() {
        let base = serve(vec![("/artists.json", 500, "boom".to_string())]).await;
        let source = HttpSource::new(format!("{}/artists.json", base));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_http_source_bad_payload() {
        let base = serve(vec![("/artists.json", 200, "{}".to_string())]).await;
        let source = HttpSource::new(format!("{}/artists.json", base));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_http_source_unreachable() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpSource::new(format!("http://{}/artists", addr));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Request { .. }));
    }

    #[tokio::test]
    async fn test_groupie_source_joins_endpoints() {
        let base = serve(vec![
            (
                "/api/artists",
                200,
                r#"[{"id": 1, "image": "q.jpeg", "name": "Queen", "members": ["Freddie Mercury"],
                    "creationDate": 1970, "firstAlbum": "14-12-1973",
                    "locations": "http://x/api/locations/1"}]"#
                    .to_string(),
            ),
            (
                "/api/locations",
                200,
                r#"{"index": [{"id": 1, "locations": ["london-uk"], "dates": "http://x"}]}"#
                    .to_string(),
            ),
            (
                "/api/relation",
                200,
                r#"{"index": [{"id": 1, "datesLocations": {"london-uk": ["01-01-2020"]}}]}"#
                    .to_string(),
            ),
        ])
        .await;

        let source = GroupieApiSource::new(format!("{}/api/", base));
        let artists = source.fetch().await.unwrap();

        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].locations, vec!["london-uk"]);
        assert_eq!(artists[0].dates_locations["london-uk"], vec!["01-01-2020"]);
        assert_eq!(artists[0].first_album_year, 1973);
    }

    #[tokio::test]
    async fn test_groupie_source_fails_when_any_endpoint_fails() {
        let base = serve(vec![
            ("/api/artists", 200, "[]".to_string()),
            ("/api/locations", 200, r#"{"index": []}"#.to_string()),
            ("/api/relation", 503, "unavailable".to_string()),
        ])
        .await;

        let source = GroupieApiSource::new(format!("{}/api", base));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 503, .. }));
    }
}
