// ABOUTME: Keyword classifier mapping free text to categories by substring containment
// ABOUTME: Text and keywords are lower-cased; categories are not mutually exclusive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Keyword classifier.
//!
//! A category matches when any of its keywords occurs anywhere in the text.
//! There is no tokenization, stemming, or word-boundary check: recipe text
//! and keyword lists are curated for plain substring containment.

/// Lower-case text once before running several lookups against it
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Ordered mapping from category to its lower-cased keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable<C> {
    entries: Vec<(C, Vec<String>)>,
}

impl<C> Default for KeywordTable<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C: Clone + PartialEq> KeywordTable<C> {
    /// Build a table, normalizing keywords and dropping empty ones
    pub fn new<I, K, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, K)>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(category, keywords)| {
                    let keywords = keywords
                        .into_iter()
                        .map(|keyword| normalize(keyword.as_ref()))
                        .filter(|keyword| !keyword.is_empty())
                        .collect();
                    (category, keywords)
                })
                .collect(),
        }
    }

    /// Categories in table order
    pub fn categories(&self) -> impl Iterator<Item = &C> {
        self.entries.iter().map(|(category, _)| category)
    }

    /// Normalized keywords of one category
    #[must_use]
    pub fn keywords(&self, category: &C) -> &[String] {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == category)
            .map(|(_, keywords)| keywords.as_slice())
            .unwrap_or_default()
    }

    /// Whether any keyword of `category` occurs in already-normalized text
    #[must_use]
    pub fn category_matches_normalized(&self, category: &C, normalized: &str) -> bool {
        self.keywords(category)
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }

    /// Every category with at least one keyword in `text`, in table order
    #[must_use]
    pub fn matching_categories(&self, text: &str) -> Vec<C> {
        self.matching_categories_where(text, |_| true)
    }

    /// Like [`Self::matching_categories`], evaluating only categories accepted by `enabled`
    pub fn matching_categories_where<F>(&self, text: &str, mut enabled: F) -> Vec<C>
    where
        F: FnMut(&C) -> bool,
    {
        let normalized = normalize(text);
        self.entries
            .iter()
            .filter(|(category, _)| enabled(category))
            .filter(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| normalized.contains(keyword.as_str()))
            })
            .map(|(category, _)| category.clone())
            .collect()
    }

    /// Call `on_match` for every (category, keyword) pair found in
    /// already-normalized text, in table order
    pub fn for_each_match_normalized<F>(&self, normalized: &str, mut on_match: F)
    where
        F: FnMut(&C, &str),
    {
        for (category, keywords) in &self.entries {
            for keyword in keywords {
                if normalized.contains(keyword.as_str()) {
                    on_match(category, keyword);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> KeywordTable<&'static str> {
        KeywordTable::new([
            ("grain", vec!["쌀", "Oat"]),
            ("meat", vec!["소고기", ""]),
        ])
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let table = table();
        assert_eq!(table.matching_categories("OATMEAL 죽"), vec!["grain"]);
        assert_eq!(
            table.matching_categories("다진소고기 20g, 불린쌀 15g"),
            vec!["grain", "meat"]
        );
        assert!(table.matching_categories("사과").is_empty());
    }

    #[test]
    fn test_empty_keywords_never_match() {
        let table = table();
        assert_eq!(table.keywords(&"meat").len(), 1);
        assert!(table.matching_categories("").is_empty());
    }

    #[test]
    fn test_enabled_filter_skips_categories() {
        let table = table();
        let matched = table.matching_categories_where("소고기 쌀", |category| *category == "meat");
        assert_eq!(matched, vec!["meat"]);
    }

    #[test]
    fn test_for_each_match_reports_every_keyword() {
        let table = table();
        let mut hits = Vec::new();
        table.for_each_match_normalized(&normalize("쌀 oat 소고기"), |category, keyword| {
            hits.push((*category, keyword.to_owned()));
        });
        assert_eq!(
            hits,
            vec![
                ("grain", "쌀".to_owned()),
                ("grain", "oat".to_owned()),
                ("meat", "소고기".to_owned())
            ]
        );
    }
}
