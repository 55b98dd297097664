//! Search result list

use serde::Serialize;

use crate::types::EmojiRecord;

use super::card::RenderDescriptor;

/// Notice shown instead of cards when a search matched nothing
pub const NO_RESULTS_MESSAGE: &str = "No emojis matched your search.";

/// Render-ready search results, in API order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub cards: Vec<RenderDescriptor>,
    pub count: usize,
    pub is_empty: bool,
}

impl SearchResults {
    pub fn from_records(records: &[EmojiRecord]) -> Self {
        let cards: Vec<RenderDescriptor> = records.iter().map(RenderDescriptor::from).collect();
        Self {
            count: cards.len(),
            is_empty: cards.is_empty(),
            cards,
        }
    }

    /// Count line shown above the cards
    pub fn summary(&self) -> String {
        format!("Found {} result(s).", self.count)
    }

    /// Notice to show in place of the cards, if there are none
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.is_empty.then_some(NO_RESULTS_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results() {
        let results = SearchResults::from_records(&[]);

        assert!(results.is_empty);
        assert_eq!(results.count, 0);
        assert!(results.cards.is_empty());
        assert_eq!(results.summary(), "Found 0 result(s).");
        assert_eq!(results.empty_notice(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let named = |n: &str| EmojiRecord {
            name: Some(n.to_string()),
            ..Default::default()
        };
        let records = vec![named("cat"), named("cat face"), named("cat")];

        let results = SearchResults::from_records(&records);

        let names: Vec<_> = results.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["cat", "cat face", "cat"]);
        assert_eq!(results.count, 3);
        assert!(!results.is_empty);
        assert_eq!(results.summary(), "Found 3 result(s).");
        assert_eq!(results.empty_notice(), None);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(SearchResults::from_records(&[])).unwrap();
        assert_eq!(json, serde_json::json!({ "cards": [], "count": 0, "isEmpty": true }));
    }
}
