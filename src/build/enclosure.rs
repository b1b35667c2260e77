// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::error::{BuildError, UrlProviderError};
use crate::podcast::Enclosure;
use crate::source::{ContentFormat, Episode};

/// Resolves where a downloaded episode file can be fetched from
#[async_trait]
pub trait UrlProvider: Send + Sync {
    /// Return the public URL of `file_name` belonging to feed `feed_id`
    async fn url(&self, feed_id: &str, file_name: &str) -> Result<String, UrlProviderError>;
}

/// URL provider for files served from a web root, one directory per feed
#[derive(Debug, Clone)]
pub struct HostedUrlProvider {
    base_url: Url,
}

impl HostedUrlProvider {
    /// Create a provider serving files below `base_url`
    pub fn new(base_url: &str) -> Result<Self, UrlProviderError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(UrlProviderError::Unavailable {
                file_name: String::new(),
                reason: format!("{base_url} cannot be used as a base URL"),
            });
        }
        Ok(Self { base_url })
    }
}

#[async_trait]
impl UrlProvider for HostedUrlProvider {
    async fn url(&self, feed_id: &str, file_name: &str) -> Result<String, UrlProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UrlProviderError::Unavailable {
                file_name: file_name.to_string(),
                reason: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push(feed_id)
            .push(file_name);

        Ok(url.to_string())
    }
}

/// Name of the downloaded file of an episode: `<id>.mp3` or `<id>.mp4`
pub fn episode_file_name(episode: &Episode, format: ContentFormat) -> String {
    format!("{}.{}", episode.id, format.extension())
}

/// Resolve the enclosure of an episode through the URL provider
///
/// Returns [`BuildError::Cancelled`] as soon as `cancel` fires, even while the
/// provider is still working.
pub async fn resolve_enclosure<P: UrlProvider + ?Sized>(
    cancel: &CancellationToken,
    provider: &P,
    feed_id: &str,
    format: ContentFormat,
    episode: &Episode,
) -> Result<Enclosure, BuildError> {
    let file_name = episode_file_name(episode, format);

    if cancel.is_cancelled() {
        return Err(BuildError::Cancelled);
    }

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(BuildError::Cancelled),
        result = provider.url(feed_id, &file_name) => result,
    };

    let url = result.map_err(|e| BuildError::EnclosureResolution {
        episode_id: episode.id.clone(),
        file_name,
        source: e,
    })?;

    debug!(episode_id = %episode.id, %url, "resolved enclosure");

    Ok(Enclosure {
        url,
        media_type: format.media_type(),
        length: episode.size,
    })
}
