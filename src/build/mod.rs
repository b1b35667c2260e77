// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod enclosure;
mod metadata;
mod sequence;

pub use enclosure::{HostedUrlProvider, UrlProvider, episode_file_name, resolve_enclosure};
pub use metadata::{
    ResolvedMetadata, allows_indexing, parse_explicit, resolve_explicit, resolve_metadata,
    resolve_owner,
};
pub use sequence::{PublishPlan, SequencedEpisode, sequence_episodes};

use chrono::{DateTime, Utc};
use futures::{StreamExt, TryStreamExt, stream};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::FeedConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::BuildError;
use crate::podcast::{Enclosure, FeedItem, PodcastFeed, format_duration};
use crate::source::SourceFeed;
use crate::taxonomy::validate_category;

/// Options for building a feed
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum number of enclosure URLs resolved at the same time
    pub max_concurrent: usize,
    /// Build time; the current time when `None`
    pub now: Option<DateTime<Utc>>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_concurrent: 4,
            now: None,
        }
    }
}

/// A built feed together with the diagnostics collected while building it
#[derive(Debug, Clone)]
pub struct FeedBuild {
    pub feed: PodcastFeed,
    pub diagnostics: Diagnostics,
}

/// Build a publishable podcast feed from a source feed and its configuration
///
/// Configuration problems are recorded as diagnostics and never fail the
/// build. Failing to resolve any enclosure, a duplicate episode identifier,
/// or cancellation aborts the whole build.
pub async fn build_feed<P: UrlProvider + ?Sized>(
    cancel: &CancellationToken,
    source: &SourceFeed,
    config: &FeedConfig,
    provider: &P,
    options: &BuildOptions,
) -> Result<FeedBuild, BuildError> {
    let now = options.now.unwrap_or_else(Utc::now);
    let metadata = &config.metadata;
    let mut diagnostics = Diagnostics::new();

    let resolved = resolve_metadata(source, metadata, &mut diagnostics);

    let mut feed = PodcastFeed::new(
        resolved.title,
        source.link.clone(),
        resolved.description,
        source.pub_date,
        now,
    );
    feed.image = resolved.image;
    feed.subtitle = resolved.subtitle;
    feed.author = resolved.author;
    feed.language = resolved.language;
    feed.copyright = resolved.copyright;

    feed.category = validate_category(&metadata.category, &metadata.subcategory, &mut diagnostics);
    feed.owner = resolve_owner(&metadata.admin_name, &metadata.admin_email, &mut diagnostics);
    feed.explicit = resolve_explicit(&metadata.explicit, &mut diagnostics);

    let has_quality_issues = !diagnostics.is_empty();
    if !allows_indexing(&metadata.allow_indexing) {
        feed.block = true;
        diagnostics.push(Diagnostic::IndexingBlocked);
    }
    if has_quality_issues {
        diagnostics.push(Diagnostic::DirectoryRequirementsUnmet);
    }

    let plan = sequence_episodes(source.episodes.clone(), now);
    info!(
        feed_id = %config.id,
        total = plan.total_episodes,
        publishing = plan.to_publish.len(),
        skipped = plan.skipped,
        "sequenced episodes"
    );

    // Resolution runs on a bounded pool; `buffered` keeps the publish order
    // and the first error drops the resolutions still in flight.
    let format = source.format;
    let resolved: Vec<(SequencedEpisode, Enclosure)> = stream::iter(plan.to_publish)
        .map(|sequenced| async move {
            let enclosure =
                resolve_enclosure(cancel, provider, &config.id, format, &sequenced.episode)
                    .await?;
            Ok::<_, BuildError>((sequenced, enclosure))
        })
        .buffered(options.max_concurrent.max(1))
        .try_collect()
        .await?;

    for (sequenced, enclosure) in resolved {
        let SequencedEpisode {
            order,
            pub_date,
            episode,
        } = sequenced;

        // Serializers reject empty descriptions
        let description = if episode.description.trim().is_empty() {
            " ".to_string()
        } else {
            episode.description
        };

        feed.add_item(FeedItem {
            guid: episode.id,
            link: episode.video_url,
            subtitle: episode.title.clone(),
            title: episode.title,
            description,
            order,
            pub_date,
            image: episode.thumbnail,
            duration: format_duration(episode.duration),
            enclosure,
            explicit: feed.explicit,
        })?;
    }

    info!(
        feed_id = %config.id,
        items = feed.items().len(),
        diagnostics = diagnostics.len(),
        "feed built"
    );

    Ok(FeedBuild { feed, diagnostics })
}
