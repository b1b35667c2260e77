// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed discovered from an upstream platform, with its known episodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceFeed {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Link to the feed on the upstream platform
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub cover_art: String,
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub format: ContentFormat,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// A single media item of a source feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Duration in seconds
    #[serde(default)]
    pub duration: u64,
    /// Size of the downloaded file in bytes
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    /// Playback page of the episode on the upstream platform
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub status: EpisodeStatus,
}

/// `0001-01-01T00:00:00Z`, the zero time written by Go producers
const ZERO_TIME_TIMESTAMP: i64 = -62_135_596_800;

impl Episode {
    /// Whether the publish timestamp is missing (absent, the Unix epoch or year-1 zero time)
    pub fn has_unset_pub_date(&self) -> bool {
        self.pub_date
            .is_none_or(|dt| matches!(dt.timestamp(), 0 | ZERO_TIME_TIMESTAMP))
    }
}

/// Lifecycle status of an episode in the download pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    #[default]
    New,
    Downloading,
    Downloaded,
    Error,
    Cleaned,
    #[serde(other)]
    Unknown,
}

/// Media format of a feed's episodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Audio,
    #[default]
    Video,
}

impl ContentFormat {
    /// File extension of downloaded episode files
    pub fn extension(self) -> &'static str {
        match self {
            ContentFormat::Audio => "mp3",
            ContentFormat::Video => "mp4",
        }
    }

    /// MIME type used for the enclosure of an episode
    pub fn media_type(self) -> &'static str {
        match self {
            ContentFormat::Audio => "audio/mpeg",
            ContentFormat::Video => "video/mp4",
        }
    }
}
