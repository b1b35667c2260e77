// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Apple Podcasts category vocabulary.

/// Top-level categories
pub const CATEGORIES: &[&str] = &[
    "Arts",
    "Business",
    "Comedy",
    "Education",
    "Fiction",
    "Government",
    "History",
    "Health & Fitness",
    "Kids & Family",
    "Leisure",
    "Music",
    "News",
    "Religion & Spirituality",
    "Science",
    "Society & Culture",
    "Sports",
    "Technology",
    "True Crime",
    "TV & Film",
];

/// Subcategories paired with their parent category
pub const SUBCATEGORIES: &[(&str, &str)] = &[
    ("Books", "Arts"),
    ("Design", "Arts"),
    ("Fashion & Beauty", "Arts"),
    ("Food", "Arts"),
    ("Performing Arts", "Arts"),
    ("Visual Arts", "Arts"),
    ("Careers", "Business"),
    ("Entrepreneurship", "Business"),
    ("Investing", "Business"),
    ("Management", "Business"),
    ("Marketing", "Business"),
    ("Non-Profit", "Business"),
    ("Comedy Interviews", "Comedy"),
    ("Improv", "Comedy"),
    ("Stand-Up", "Comedy"),
    ("Courses", "Education"),
    ("How To", "Education"),
    ("Language Learning", "Education"),
    ("Self-Improvement", "Education"),
    ("Comedy Fiction", "Fiction"),
    ("Drama", "Fiction"),
    ("Science Fiction", "Fiction"),
    ("Alternative Health", "Health & Fitness"),
    ("Fitness", "Health & Fitness"),
    ("Medicine", "Health & Fitness"),
    ("Mental Health", "Health & Fitness"),
    ("Nutrition", "Health & Fitness"),
    ("Sexuality", "Health & Fitness"),
    ("Education for Kids", "Kids & Family"),
    ("Parenting", "Kids & Family"),
    ("Pets & Animals", "Kids & Family"),
    ("Stories for Kids", "Kids & Family"),
    ("Animation & Manga", "Leisure"),
    ("Automotive", "Leisure"),
    ("Aviation", "Leisure"),
    ("Crafts", "Leisure"),
    ("Games", "Leisure"),
    ("Hobbies", "Leisure"),
    ("Home & Garden", "Leisure"),
    ("Video Games", "Leisure"),
    ("Music Commentary", "Music"),
    ("Music History", "Music"),
    ("Music Interviews", "Music"),
    ("Business News", "News"),
    ("Daily News", "News"),
    ("Entertainment News", "News"),
    ("News Commentary", "News"),
    ("Politics", "News"),
    ("Sports News", "News"),
    ("Tech News", "News"),
    ("Buddhism", "Religion & Spirituality"),
    ("Christianity", "Religion & Spirituality"),
    ("Hinduism", "Religion & Spirituality"),
    ("Islam", "Religion & Spirituality"),
    ("Judaism", "Religion & Spirituality"),
    ("Religion", "Religion & Spirituality"),
    ("Spirituality", "Religion & Spirituality"),
    ("Astronomy", "Science"),
    ("Chemistry", "Science"),
    ("Earth Sciences", "Science"),
    ("Life Sciences", "Science"),
    ("Mathematics", "Science"),
    ("Natural Sciences", "Science"),
    ("Nature", "Science"),
    ("Physics", "Science"),
    ("Social Sciences", "Science"),
    ("Documentary", "Society & Culture"),
    ("Personal Journals", "Society & Culture"),
    ("Philosophy", "Society & Culture"),
    ("Places & Travel", "Society & Culture"),
    ("Relationships", "Society & Culture"),
    ("Baseball", "Sports"),
    ("Basketball", "Sports"),
    ("Cricket", "Sports"),
    ("Fantasy Sports", "Sports"),
    ("Football", "Sports"),
    ("Golf", "Sports"),
    ("Hockey", "Sports"),
    ("Rugby", "Sports"),
    ("Running", "Sports"),
    ("Soccer", "Sports"),
    ("Swimming", "Sports"),
    ("Tennis", "Sports"),
    ("Volleyball", "Sports"),
    ("Wilderness", "Sports"),
    ("Wrestling", "Sports"),
    ("After Shows", "TV & Film"),
    ("Film History", "TV & Film"),
    ("Film Interviews", "TV & Film"),
    ("Film Reviews", "TV & Film"),
    ("TV Reviews", "TV & Film"),
];

/// Check whether a name is a top-level category
pub fn is_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

/// Look up the parent category of a subcategory
pub fn parent_category(subcategory: &str) -> Option<&'static str> {
    SUBCATEGORIES
        .iter()
        .find(|(name, _)| *name == subcategory)
        .map(|(_, parent)| *parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcategory_has_a_known_parent() {
        for (subcategory, parent) in SUBCATEGORIES {
            assert!(is_category(parent), "{subcategory} -> {parent}");
        }
    }

    #[test]
    fn subcategory_names_are_unique() {
        for (i, (name, _)) in SUBCATEGORIES.iter().enumerate() {
            assert!(
                SUBCATEGORIES[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate subcategory {name}"
            );
        }
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(is_category("Technology"));
        assert!(!is_category("technology"));
        assert_eq!(parent_category("Tech News"), Some("News"));
        assert_eq!(parent_category("tech news"), None);
    }
}
