// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use tracing::debug;

use crate::error::SourceError;
use crate::http::HttpClient;

use super::model::SourceFeed;

/// Determine if a string is a URL or a file path
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Parse a source feed from its JSON representation
pub fn parse_source(json: &[u8], location: &str) -> Result<SourceFeed, SourceError> {
    serde_json::from_slice(json).map_err(|e| SourceError::ParseFailed {
        location: location.to_string(),
        source: e,
    })
}

/// Read raw source feed bytes from a local file (without parsing)
pub fn read_source_file(path: &Path) -> Result<Vec<u8>, SourceError> {
    std::fs::read(path).map_err(|e| SourceError::FileReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

async fn fetch_source_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>, SourceError> {
    let response = client
        .get(url)
        .await
        .map_err(|e| SourceError::FetchFailed {
            url: url.to_string(),
            source: e,
        })?;

    if response.status >= 400 {
        return Err(SourceError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    Ok(response.body.to_vec())
}

/// Load a source feed from a URL or a local file
pub async fn load_source<C: HttpClient>(
    client: &C,
    location: &str,
) -> Result<SourceFeed, SourceError> {
    let bytes = if is_url(location) {
        debug!(url = location, "fetching source feed");
        fetch_source_bytes(client, location).await?
    } else {
        debug!(path = location, "reading source feed");
        read_source_file(Path::new(location))?
    };

    parse_source(&bytes, location)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::http::HttpResponse;
    use crate::source::{ContentFormat, EpisodeStatus};
    use async_trait::async_trait;
    use bytes::Bytes;
    use tempfile::tempdir;

    const SAMPLE_SOURCE: &str = r#"{
  "id": "tech-talks",
  "title": "Tech Talks",
  "description": "Talks about technology",
  "link": "https://video.example.com/channel/tech-talks",
  "cover_art": "https://video.example.com/tech-talks.jpg",
  "pub_date": "2024-01-15T12:00:00Z",
  "format": "audio",
  "episodes": [
    {
      "id": "ep1",
      "title": "Episode 1",
      "description": "First episode",
      "duration": 1800,
      "size": 1234567,
      "pub_date": "2024-01-01T12:00:00Z",
      "video_url": "https://video.example.com/watch/ep1",
      "status": "downloaded"
    },
    {
      "id": "ep2",
      "title": "Episode 2"
    }
  ]
}"#;

    struct MockHttpClient {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(&self, _url: &str) -> Result<HttpResponse, reqwest::Error> {
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    #[test]
    fn is_url_detects_http() {
        assert!(is_url("http://example.com/feed.json"));
        assert!(is_url("https://example.com/feed.json"));
    }

    #[test]
    fn is_url_rejects_file_paths() {
        assert!(!is_url("/path/to/feed.json"));
        assert!(!is_url("./feed.json"));
        assert!(!is_url("feed.json"));
    }

    #[test]
    fn parse_source_extracts_feed_and_episodes() {
        let feed = parse_source(SAMPLE_SOURCE.as_bytes(), "sample").unwrap();

        assert_eq!(feed.title, "Tech Talks");
        assert_eq!(feed.format, ContentFormat::Audio);
        assert_eq!(feed.episodes.len(), 2);

        let ep1 = &feed.episodes[0];
        assert_eq!(ep1.id, "ep1");
        assert_eq!(ep1.duration, 1800);
        assert_eq!(ep1.size, 1234567);
        assert_eq!(ep1.status, EpisodeStatus::Downloaded);
    }

    #[test]
    fn parse_source_defaults_missing_episode_fields() {
        let feed = parse_source(SAMPLE_SOURCE.as_bytes(), "sample").unwrap();

        let ep2 = &feed.episodes[1];
        assert!(ep2.description.is_empty());
        assert!(ep2.pub_date.is_none());
        assert_eq!(ep2.status, EpisodeStatus::New);
    }

    #[test]
    fn parse_source_reports_location_on_error() {
        let err = parse_source(b"not json", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[tokio::test]
    async fn load_source_reads_local_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("source.json");
        std::fs::write(&path, SAMPLE_SOURCE).unwrap();

        let client = MockHttpClient {
            status: 500,
            body: "",
        };
        let feed = load_source(&client, path.to_str().unwrap()).await.unwrap();

        assert_eq!(feed.id, "tech-talks");
    }

    #[tokio::test]
    async fn load_source_fetches_url() {
        let client = MockHttpClient {
            status: 200,
            body: SAMPLE_SOURCE,
        };
        let feed = load_source(&client, "https://example.com/source.json")
            .await
            .unwrap();

        assert_eq!(feed.episodes.len(), 2);
    }

    #[tokio::test]
    async fn load_source_rejects_http_errors() {
        let client = MockHttpClient {
            status: 404,
            body: "",
        };
        let result = load_source(&client, "https://example.com/source.json").await;

        assert!(matches!(
            result,
            Err(SourceError::HttpStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn load_source_reports_missing_file() {
        let dir = tempdir().unwrap();
        let client = MockHttpClient {
            status: 200,
            body: "",
        };
        let path = dir.path().join("missing.json");
        let result = load_source(&client, path.to_str().unwrap()).await;

        assert!(matches!(result, Err(SourceError::FileReadFailed { .. })));
    }
}
