// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use crate::error::BuildError;
use crate::taxonomy::CategoryAssignment;

/// Generator tag written into every feed
pub const GENERATOR: &str = concat!("podgen ", env!("CARGO_PKG_VERSION"));

/// Content advisory marking of a feed or item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitFlag {
    Yes,
    No,
}

impl ExplicitFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            ExplicitFlag::Yes => "yes",
            ExplicitFlag::No => "no",
        }
    }
}

/// Person responsible for the feed, as shown to podcast directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub email: String,
}

/// Downloadable media attached to an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    pub url: String,
    pub media_type: &'static str,
    /// Size in bytes
    pub length: u64,
}

/// A single published episode of the output feed
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub guid: String,
    pub link: String,
    pub title: String,
    pub description: String,
    pub subtitle: String,
    /// 1-based position in the publish order of all source episodes
    pub order: usize,
    pub pub_date: DateTime<Utc>,
    pub image: String,
    /// iTunes duration string
    pub duration: String,
    pub enclosure: Enclosure,
    pub explicit: Option<ExplicitFlag>,
}

/// A podcast feed ready to be encoded
#[derive(Debug, Clone)]
pub struct PodcastFeed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub image: String,
    pub subtitle: String,
    pub author: String,
    pub language: String,
    pub category: Option<CategoryAssignment>,
    pub owner: Option<Owner>,
    pub explicit: Option<ExplicitFlag>,
    pub copyright: String,
    /// Ask podcast directories not to index the feed
    pub block: bool,
    pub generator: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub last_build_date: DateTime<Utc>,
    items: Vec<FeedItem>,
}

impl PodcastFeed {
    /// Create an empty feed stamped with the generator tag and build time
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
        pub_date: Option<DateTime<Utc>>,
        last_build_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            image: String::new(),
            subtitle: String::new(),
            author: String::new(),
            language: String::new(),
            category: None,
            owner: None,
            explicit: None,
            copyright: String::new(),
            block: false,
            generator: GENERATOR.to_string(),
            pub_date,
            last_build_date,
            items: Vec::new(),
        }
    }

    /// Append an item; item identifiers must be unique within a feed
    pub fn add_item(&mut self, item: FeedItem) -> Result<(), BuildError> {
        if self.items.iter().any(|existing| existing.guid == item.guid) {
            return Err(BuildError::DuplicateItem {
                episode_id: item.guid,
            });
        }

        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }
}

/// Format a duration in seconds the way iTunes expects it (`M:SS` or `H:MM:SS`)
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
