// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use crate::source::{Episode, EpisodeStatus};

/// An episode selected for publication, with its place in the feed
#[derive(Debug, Clone)]
pub struct SequencedEpisode {
    /// 1-based position among all source episodes, newest first
    pub order: usize,
    pub pub_date: DateTime<Utc>,
    pub episode: Episode,
}

/// Publication order of a feed's episodes
#[derive(Debug, Clone)]
pub struct PublishPlan {
    /// Downloaded episodes, newest first
    pub to_publish: Vec<SequencedEpisode>,
    /// Number of episodes left out because they are not downloaded
    pub skipped: usize,
    /// Total number of episodes in the source feed
    pub total_episodes: usize,
}

/// Order episodes newest first and keep the ones ready for publication
///
/// Episodes without a publish date are stamped with `now`. Ties keep their
/// source order. Order numbers are positions in the full sorted list, so
/// skipped episodes leave gaps rather than renumbering the rest.
pub fn sequence_episodes(episodes: Vec<Episode>, now: DateTime<Utc>) -> PublishPlan {
    let total_episodes = episodes.len();

    let mut dated: Vec<(DateTime<Utc>, Episode)> = episodes
        .into_iter()
        .map(|episode| {
            let pub_date = match episode.pub_date {
                Some(dt) if !episode.has_unset_pub_date() => dt,
                _ => now,
            };
            (pub_date, episode)
        })
        .collect();

    // sort_by is stable, so equal dates keep their source order
    dated.sort_by(|(a, _), (b, _)| b.cmp(a));

    let to_publish: Vec<SequencedEpisode> = dated
        .into_iter()
        .enumerate()
        .filter(|(_, (_, episode))| episode.status == EpisodeStatus::Downloaded)
        .map(|(index, (pub_date, mut episode))| {
            episode.pub_date = Some(pub_date);
            SequencedEpisode {
                order: index + 1,
                pub_date,
                episode,
            }
        })
        .collect();

    PublishPlan {
        skipped: total_episodes - to_publish.len(),
        to_publish,
        total_episodes,
    }
}
