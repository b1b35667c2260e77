// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::diagnostics::{Diagnostic, Diagnostics, Field};

use super::table::{is_category, parent_category};

/// Category (and optional subcategory) attached to a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAssignment {
    /// Top-level category; empty when only a subcategory was configured
    pub category: String,
    pub subcategory: Option<String>,
}

/// Validate a configured category/subcategory pair against the Apple Podcasts vocabulary
///
/// Returns what should be attached to the feed. A subcategory is only kept
/// next to a category when it actually belongs to that category.
pub fn validate_category(
    category: &str,
    subcategory: &str,
    diagnostics: &mut Diagnostics,
) -> Option<CategoryAssignment> {
    if !category.is_empty() && !is_category(category) {
        diagnostics.push(Diagnostic::UnknownCategory(category.to_string()));
    }

    if category.is_empty() {
        diagnostics.push(Diagnostic::LeftBlank(Field::Category));

        if subcategory.is_empty() {
            diagnostics.push(Diagnostic::LeftBlank(Field::Subcategory));
            return None;
        }

        if parent_category(subcategory).is_none() {
            diagnostics.push(Diagnostic::UnknownSubcategory(subcategory.to_string()));
        }
        diagnostics.push(Diagnostic::SubcategoryWithoutCategory(
            subcategory.to_string(),
        ));

        return Some(CategoryAssignment {
            category: String::new(),
            subcategory: Some(subcategory.to_string()),
        });
    }

    if subcategory.is_empty() {
        diagnostics.push(Diagnostic::LeftBlank(Field::Subcategory));
        return Some(CategoryAssignment {
            category: category.to_string(),
            subcategory: None,
        });
    }

    let subcategory = match parent_category(subcategory) {
        Some(parent) if parent == category => Some(subcategory.to_string()),
        Some(parent) => {
            diagnostics.push(Diagnostic::CategoryMismatch {
                category: category.to_string(),
                subcategory: subcategory.to_string(),
                expected: parent.to_string(),
            });
            None
        }
        None => {
            diagnostics.push(Diagnostic::UnknownSubcategory(subcategory.to_string()));
            None
        }
    };

    Some(CategoryAssignment {
        category: category.to_string(),
        subcategory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(category: &str, subcategory: &str) -> (Option<CategoryAssignment>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let assignment = validate_category(category, subcategory, &mut diagnostics);
        (assignment, diagnostics)
    }

    #[test]
    fn valid_pair_attaches_both() {
        let (assignment, diagnostics) = validate("Technology", "");
        assert_eq!(assignment.unwrap().category, "Technology");
        assert!(diagnostics.contains(&Diagnostic::LeftBlank(Field::Subcategory)));

        let (assignment, diagnostics) = validate("News", "Tech News");
        assert_eq!(
            assignment,
            Some(CategoryAssignment {
                category: "News".to_string(),
                subcategory: Some("Tech News".to_string()),
            })
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn mismatched_subcategory_is_dropped() {
        let (assignment, diagnostics) = validate("Technology", "Tech News");

        assert_eq!(
            assignment,
            Some(CategoryAssignment {
                category: "Technology".to_string(),
                subcategory: None,
            })
        );
        assert!(diagnostics.contains(&Diagnostic::CategoryMismatch {
            category: "Technology".to_string(),
            subcategory: "Tech News".to_string(),
            expected: "News".to_string(),
        }));
    }

    #[test]
    fn unknown_subcategory_is_dropped() {
        let (assignment, diagnostics) = validate("News", "Gossip");

        assert_eq!(assignment.unwrap().subcategory, None);
        assert!(diagnostics.contains(&Diagnostic::UnknownSubcategory("Gossip".to_string())));
    }

    #[test]
    fn unknown_category_is_still_attached() {
        let (assignment, diagnostics) = validate("Cooking", "");

        assert_eq!(assignment.unwrap().category, "Cooking");
        assert!(diagnostics.contains(&Diagnostic::UnknownCategory("Cooking".to_string())));
    }

    #[test]
    fn missing_category_keeps_subcategory_alone() {
        let (assignment, diagnostics) = validate("", "Tech News");

        assert_eq!(
            assignment,
            Some(CategoryAssignment {
                category: String::new(),
                subcategory: Some("Tech News".to_string()),
            })
        );
        assert!(diagnostics.contains(&Diagnostic::LeftBlank(Field::Category)));
        assert!(
            diagnostics.contains(&Diagnostic::SubcategoryWithoutCategory(
                "Tech News".to_string()
            ))
        );
    }

    #[test]
    fn missing_category_and_subcategory_attach_nothing() {
        let (assignment, diagnostics) = validate("", "");

        assert_eq!(assignment, None);
        assert!(diagnostics.contains(&Diagnostic::LeftBlank(Field::Category)));
        assert!(diagnostics.contains(&Diagnostic::LeftBlank(Field::Subcategory)));
    }

    fn revalidate(category: &str, subcategory: &str) -> (Vec<Diagnostic>, Vec<Diagnostic>) {
        let (first, first_diagnostics) = validate(category, subcategory);
        let first = first.unwrap();

        let (second, second_diagnostics) = validate(
            &first.category,
            first.subcategory.as_deref().unwrap_or_default(),
        );
        assert_eq!(second, Some(first));

        (
            first_diagnostics.into_iter().collect(),
            second_diagnostics.into_iter().collect(),
        )
    }

    #[test]
    fn revalidating_the_output_adds_no_diagnostics() {
        for (category, subcategory) in [
            ("News", "Tech News"),
            ("Technology", ""),
            ("", "Tech News"),
        ] {
            let (first, second) = revalidate(category, subcategory);
            assert!(
                second.iter().all(|d| first.contains(d)),
                "{category:?}/{subcategory:?}: {first:?} then {second:?}"
            );
        }
    }

    #[test]
    fn revalidating_a_mismatch_reports_the_missing_subcategory() {
        // The dropped subcategory reads as "not configured" on the second pass.
        let (first, second) = revalidate("Technology", "Tech News");

        assert!(
            first
                .iter()
                .all(|d| matches!(d, Diagnostic::CategoryMismatch { .. }))
        );
        assert_eq!(second, vec![Diagnostic::LeftBlank(Field::Subcategory)]);
    }
}
