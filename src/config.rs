// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub podgen: GeneralConfig,
    #[serde(default)]
    pub feed: Vec<FeedConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Public URL under which episode files are served, one directory per feed
    #[serde(default)]
    pub base_url: Option<String>,
    /// Maximum number of enclosure URLs resolved at the same time
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            base_url: None,
            max_concurrent: default_max_concurrent(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_max_concurrent() -> usize {
    4
}

/// A feed to publish
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedConfig {
    /// Identifier used to construct enclosure URLs
    pub id: String,
    /// Path or URL of the source feed JSON
    #[serde(default)]
    pub source: String,
    /// Where to write the rendered feed (stdout when absent)
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub metadata: FeedMetadata,
}

/// User overrides for feed-level metadata; empty strings mean "not set"
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedMetadata {
    pub title: String,
    pub description: String,
    pub subtitle: String,
    pub author: String,
    pub language: String,
    pub cover_art: String,
    pub category: String,
    pub subcategory: String,
    pub admin_name: String,
    pub admin_email: String,
    pub explicit: String,
    pub copyright: String,
    pub allow_indexing: String,
}

/// Parse a configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse the configuration file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

/// Check the configuration for structural problems
///
/// Metadata values are not checked here; category and explicit semantics are
/// reported as diagnostics when the feed is built.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.podgen.max_concurrent == 0 {
        return Err(ConfigError::Validation(
            "max_concurrent must be at least 1".to_string(),
        ));
    }

    if let Some(base_url) = &config.podgen.base_url {
        Url::parse(base_url).map_err(|e| {
            ConfigError::Validation(format!("invalid base_url '{base_url}': {e}"))
        })?;
    }

    let mut seen = HashSet::new();
    for feed in &config.feed {
        if feed.id.trim().is_empty() {
            return Err(ConfigError::Validation("feed id must not be empty".to_string()));
        }
        if !seen.insert(feed.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate feed id '{}'",
                feed.id
            )));
        }
        if feed.source.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "feed '{}' has no source",
                feed.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_CONFIG: &str = r#"
[podgen]
base_url = "https://podcasts.example.com"
max_concurrent = 2

[[feed]]
id = "tech-talks"
source = "data/tech-talks.json"
output = "public/tech-talks.xml"

[feed.metadata]
title = "Tech Talks"
author = "Jane Doe"
category = "Technology"
explicit = "clean"

[[feed]]
id = "news"
source = "https://example.com/news.json"
"#;

    #[test]
    fn parse_config_reads_feeds_and_metadata() {
        let config = parse_config(SAMPLE_CONFIG).unwrap();

        assert_eq!(config.podgen.log_level, "info");
        assert_eq!(config.podgen.max_concurrent, 2);
        assert_eq!(config.feed.len(), 2);

        let feed = &config.feed[0];
        assert_eq!(feed.id, "tech-talks");
        assert_eq!(feed.output, Some(PathBuf::from("public/tech-talks.xml")));
        assert_eq!(feed.metadata.title, "Tech Talks");
        assert_eq!(feed.metadata.explicit, "clean");
        assert!(feed.metadata.subtitle.is_empty());

        assert!(config.feed[1].metadata.title.is_empty());
        assert!(config.feed[1].output.is_none());
        validate_config(&config).unwrap();
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.podgen.max_concurrent, 4);
        assert!(config.podgen.base_url.is_none());
        assert!(config.feed.is_empty());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let config = parse_config(
            r#"
[[feed]]
id = "a"
source = "a.json"

[[feed]]
id = "a"
source = "b.json"
"#,
        )
        .unwrap();

        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Validation(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn validate_rejects_zero_concurrency_and_bad_base_url() {
        let mut config = parse_config("").unwrap();
        config.podgen.max_concurrent = 0;
        assert!(validate_config(&config).is_err());

        config.podgen.max_concurrent = 1;
        config.podgen.base_url = Some("not a url".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("podgen.toml");
        std::fs::write(&path, SAMPLE_CONFIG).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.feed[0].metadata.author, "Jane Doe");
    }

    #[test]
    fn load_config_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_config(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn parse_config_rejects_invalid_toml() {
        assert!(matches!(
            parse_config("[[feed]\nid ="),
            Err(ConfigError::Parse(_))
        ));
    }
}
