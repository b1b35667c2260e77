// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::FeedMetadata;
use crate::diagnostics::{Diagnostic, Diagnostics, Field};
use crate::podcast::{ExplicitFlag, Owner};
use crate::source::SourceFeed;

/// Feed-level values after applying configuration overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub image: String,
    pub subtitle: String,
    pub author: String,
    pub language: String,
    pub copyright: String,
}

/// Resolve feed-level text fields, preferring configured values
///
/// Title, description and image fall back to the source feed; the other
/// fields are left blank. Each fallback records one diagnostic.
pub fn resolve_metadata(
    source: &SourceFeed,
    metadata: &FeedMetadata,
    diagnostics: &mut Diagnostics,
) -> ResolvedMetadata {
    ResolvedMetadata {
        title: or_source(&metadata.title, &source.title, Field::Title, diagnostics),
        description: or_source(
            &metadata.description,
            &source.description,
            Field::Description,
            diagnostics,
        ),
        image: or_source(
            &metadata.cover_art,
            &source.cover_art,
            Field::CoverArt,
            diagnostics,
        ),
        subtitle: or_blank(&metadata.subtitle, Field::Subtitle, diagnostics),
        author: or_blank(&metadata.author, Field::Author, diagnostics),
        language: or_blank(&metadata.language, Field::Language, diagnostics),
        copyright: or_blank(&metadata.copyright, Field::Copyright, diagnostics),
    }
}

fn or_source(value: &str, fallback: &str, field: Field, diagnostics: &mut Diagnostics) -> String {
    if value.is_empty() {
        diagnostics.push(Diagnostic::SourceFallback(field));
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn or_blank(value: &str, field: Field, diagnostics: &mut Diagnostics) -> String {
    if value.is_empty() {
        diagnostics.push(Diagnostic::LeftBlank(field));
    }
    value.to_string()
}

/// Resolve the feed owner from the configured admin name and email
///
/// Returns `None` only when neither is configured.
pub fn resolve_owner(name: &str, email: &str, diagnostics: &mut Diagnostics) -> Option<Owner> {
    if name.is_empty() {
        diagnostics.push(Diagnostic::LeftBlank(Field::AdminName));
    }
    if email.is_empty() {
        diagnostics.push(Diagnostic::LeftBlank(Field::AdminEmail));
    }

    if name.is_empty() && email.is_empty() {
        return None;
    }

    Some(Owner {
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// Interpret a configured explicit setting (case-insensitive)
pub fn parse_explicit(value: &str) -> Option<ExplicitFlag> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "explicit" => Some(ExplicitFlag::Yes),
        "false" | "no" | "clean" => Some(ExplicitFlag::No),
        _ => None,
    }
}

/// Resolve the explicit flag, recording a diagnostic when it stays unset
pub fn resolve_explicit(value: &str, diagnostics: &mut Diagnostics) -> Option<ExplicitFlag> {
    let flag = parse_explicit(value);
    if flag.is_none() {
        diagnostics.push(Diagnostic::UnresolvedExplicit(value.to_string()));
    }
    flag
}

/// Whether the configured setting allows podcast directories to index the feed
///
/// Anything other than an explicit allow, including no value, disallows indexing.
pub fn allows_indexing(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "allow")
}
