// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a source feed
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to fetch source feed from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read source feed file {path}: {source}")]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse source feed from {location}: {source}")]
    ParseFailed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Errors reported by an enclosure URL provider
#[derive(Error, Debug)]
pub enum UrlProviderError {
    #[error("Invalid enclosure URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("No download URL available for {file_name}: {reason}")]
    Unavailable { file_name: String, reason: String },
}

/// Errors that abort a feed build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to obtain download URL for episode {episode_id} ({file_name}): {source}")]
    EnclosureResolution {
        episode_id: String,
        file_name: String,
        #[source]
        source: UrlProviderError,
    },

    #[error("Failed to add item to podcast (id {episode_id:?}): duplicate item identifier")]
    DuplicateItem { episode_id: String },

    #[error("Feed build was cancelled")]
    Cancelled,
}

/// Errors that can occur when encoding a feed as XML
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write RSS document: {0}")]
    Write(#[from] rss::Error),

    #[error("RSS document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
