// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use tracing::warn;

/// Feed-level fields that can be overridden by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    CoverArt,
    Subtitle,
    Author,
    Language,
    Copyright,
    AdminName,
    AdminEmail,
    Category,
    Subcategory,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::CoverArt => "image",
            Field::Subtitle => "subtitle",
            Field::Author => "author",
            Field::Language => "language",
            Field::Copyright => "copyright",
            Field::AdminName => "admin name",
            Field::AdminEmail => "admin email",
            Field::Category => "category",
            Field::Subcategory => "subcategory",
        };
        f.write_str(name)
    }
}

/// A non-fatal advisory about the quality of a built feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No value configured; the value from the source feed was used
    SourceFallback(Field),
    /// No value configured and no fallback exists; the field is left blank
    LeftBlank(Field),
    /// Category is not part of the Apple Podcasts vocabulary
    UnknownCategory(String),
    /// Subcategory is not part of the Apple Podcasts vocabulary
    UnknownSubcategory(String),
    /// Subcategory belongs to a different parent category
    CategoryMismatch {
        category: String,
        subcategory: String,
        expected: String,
    },
    /// Subcategory attached without a parent category
    SubcategoryWithoutCategory(String),
    /// Explicit flag is missing or not one of the recognized values
    UnresolvedExplicit(String),
    /// Feed asks directories not to index it
    IndexingBlocked,
    /// Earlier diagnostics may keep the feed out of podcast directories
    DirectoryRequirementsUnmet,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SourceFallback(field) => write!(
                f,
                "No feed {field} specified. Using feed {field} from source."
            ),
            Diagnostic::LeftBlank(field) => {
                write!(f, "No feed {field} specified. Feed {field} left blank.")
            }
            Diagnostic::UnknownCategory(category) => write!(
                f,
                "Category {category:?} does not match list of Apple Podcasts categories"
            ),
            Diagnostic::UnknownSubcategory(subcategory) => write!(
                f,
                "Subcategory {subcategory:?} does not match list of Apple Podcasts categories"
            ),
            Diagnostic::CategoryMismatch {
                category,
                subcategory,
                expected,
            } => write!(
                f,
                "Subcategory {subcategory:?} belongs to {expected:?}, not {category:?}. Subcategory dropped."
            ),
            Diagnostic::SubcategoryWithoutCategory(subcategory) => write!(
                f,
                "Subcategory {subcategory:?} attached without a parent category"
            ),
            Diagnostic::UnresolvedExplicit(value) => {
                write!(f, "No (or invalid) explicit tag specified: {value:?}")
            }
            Diagnostic::IndexingBlocked => {
                f.write_str("Podcast will explicitly disallow Apple Podcasts from indexing it.")
            }
            Diagnostic::DirectoryRequirementsUnmet => f.write_str(
                "Podcast feed does not meet Apple Podcasts specifications and may not appear in Apple Podcasts.",
            ),
        }
    }
}

/// Collects the diagnostics emitted while building a feed
///
/// Every recorded diagnostic is also logged at `warn` level.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.entries.contains(diagnostic)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
