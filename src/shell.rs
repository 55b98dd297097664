//! Mode dispatch for a UI shell
//!
//! `Session` holds the only state a shell needs between user actions: the
//! active mode and, for the category/group modes, the loaded choices. Every
//! outcome, including failures, comes back as a `View` so a shell never has
//! to draw a half-built card.

use serde::Serialize;

use crate::api::EmojiHubClient;
use crate::error::{Error, Result};
use crate::presentation::{RenderDescriptor, SearchResults};
use crate::types::Mode;

/// Hint shown in search mode until a query is entered
pub const SEARCH_PROMPT: &str = "Enter part of a name and press Search.";

/// What the shell should display after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum View {
    /// Nothing requested yet
    Idle,
    /// A selection control over a loaded list
    Choices { options: Vec<String>, selected: String },
    /// One emoji card
    Card(RenderDescriptor),
    /// Search results; when empty, `SearchResults::empty_notice` replaces the cards
    Results(SearchResults),
    /// Informational hint, no request was made
    Prompt(String),
    /// User-visible failure message
    Error(String),
}

/// One user's explorer session
pub struct Session {
    client: EmojiHubClient,
    mode: Mode,
    options: Vec<String>,
    selected: Option<String>,
}

impl Session {
    /// Start a session in `Mode::Random`
    pub fn new(client: EmojiHubClient) -> Self {
        Self {
            client,
            mode: Mode::Random,
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Switch modes, loading the category or group list when the mode needs one
    ///
    /// A failed or empty list leaves the mode without choices; `trigger` will
    /// refuse to act until `enter_mode` is called again.
    pub async fn enter_mode(&mut self, mode: Mode) -> View {
        self.mode = mode;
        self.options.clear();
        self.selected = None;

        let (list, what) = match mode {
            Mode::Random => return View::Idle,
            Mode::SearchByName => return View::Prompt(SEARCH_PROMPT.to_string()),
            Mode::RandomByCategory => (self.client.fetch_categories().await, "category"),
            Mode::RandomByGroup => (self.client.fetch_groups().await, "group"),
        };

        match list {
            Ok(options) if options.is_empty() => {
                tracing::warn!(mode = mode.label(), "empty {what} list");
                View::Error(format!("The {what} list is empty."))
            }
            Ok(options) => {
                let selected = options[0].clone();
                tracing::debug!(mode = mode.label(), count = options.len(), "options loaded");
                self.options = options;
                self.selected = Some(selected.clone());
                View::Choices {
                    options: self.options.clone(),
                    selected,
                }
            }
            Err(e) => View::Error(format!("Failed to load the {what} list: {e}")),
        }
    }

    /// Choose one of the loaded options
    pub fn select(&mut self, value: &str) -> Result<()> {
        if self.options.is_empty() {
            return Err(Error::invalid_state(format!(
                "No options loaded for {}",
                self.mode.label()
            )));
        }
        if !self.options.iter().any(|o| o == value) {
            return Err(Error::invalid_argument(format!("Unknown option: {value}")));
        }
        self.selected = Some(value.to_string());
        Ok(())
    }

    /// Perform the active mode's action
    ///
    /// # Arguments
    /// * `query` - Search text; ignored outside `Mode::SearchByName`
    pub async fn trigger(&mut self, query: &str) -> View {
        let outcome = match self.mode {
            Mode::Random => self.client.fetch_random().await.map(|r| View::Card((&r).into())),
            Mode::RandomByCategory | Mode::RandomByGroup => {
                let Some(selected) = self.selected.as_deref() else {
                    return View::Error(format!(
                        "{} is unavailable until its list loads.",
                        self.mode.label()
                    ));
                };
                let record = if self.mode == Mode::RandomByCategory {
                    self.client.fetch_random_by_category(selected).await
                } else {
                    self.client.fetch_random_by_group(selected).await
                };
                record.map(|r| View::Card((&r).into()))
            }
            Mode::SearchByName => {
                let query = query.trim();
                if query.is_empty() {
                    return View::Prompt(SEARCH_PROMPT.to_string());
                }
                self.client
                    .search_by_name(query)
                    .await
                    .map(|records| View::Results(SearchResults::from_records(&records)))
            }
        };

        outcome.unwrap_or_else(|e| View::Error(format!("API error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::api::transport::stub::StubTransport;
    use crate::config::ClientConfig;
    use crate::error::ErrorCode;

    fn session() -> (Session, StubTransport) {
        let stub = StubTransport::default();
        let client = EmojiHubClient::with_transport(
            ClientConfig::new("http://mock.local/api").unwrap(),
            Arc::new(stub.clone()),
        );
        (Session::new(client), stub)
    }

    #[tokio::test]
    async fn test_random_card() {
        let (mut session, stub) = session();
        stub.push_json(200, json!({ "name": "grinning face", "htmlCode": ["&#128512;"] }));

        assert_eq!(session.enter_mode(Mode::Random).await, View::Idle);
        let View::Card(card) = session.trigger("").await else {
            panic!("expected a card");
        };

        assert_eq!(card.name, "grinning face");
        assert_eq!(card.glyph_markup, "&#128512;");
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_category_flow() {
        let (mut session, stub) = session();
        stub.push_json(200, json!(["smileys and people", "flags"]))
            .push_json(200, json!({ "name": "flag: Japan", "category": "flags" }));

        let view = session.enter_mode(Mode::RandomByCategory).await;
        assert_eq!(
            view,
            View::Choices {
                options: vec!["smileys and people".to_string(), "flags".to_string()],
                selected: "smileys and people".to_string(),
            }
        );

        session.select("flags").unwrap();
        let View::Card(card) = session.trigger("").await else {
            panic!("expected a card");
        };

        assert_eq!(card.category, "flags");
        assert_eq!(stub.requests()[1].path(), "/api/random/category/flags");
    }

    #[tokio::test]
    async fn test_group_list_failure_makes_mode_unusable() {
        let (mut session, stub) = session();
        stub.push_json(502, json!(null));

        let View::Error(message) = session.enter_mode(Mode::RandomByGroup).await else {
            panic!("expected an error view");
        };
        assert!(message.starts_with("Failed to load the group list"));
        assert!(session.options().is_empty());
        assert_eq!(session.selected(), None);

        let err = session.select("face positive").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);

        assert!(matches!(session.trigger("").await, View::Error(_)));
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_is_unusable() {
        let (mut session, stub) = session();
        stub.push_json(200, json!([]));

        assert_eq!(
            session.enter_mode(Mode::RandomByCategory).await,
            View::Error("The category list is empty.".to_string())
        );
        assert!(matches!(session.trigger("").await, View::Error(_)));
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_select_rejects_unknown_option() {
        let (mut session, stub) = session();
        stub.push_json(200, json!(["flags"]));
        session.enter_mode(Mode::RandomByCategory).await;

        let err = session.select("not a category").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(session.selected(), Some("flags"));
    }

    #[tokio::test]
    async fn test_blank_search_sends_nothing() {
        let (mut session, stub) = session();

        assert_eq!(
            session.enter_mode(Mode::SearchByName).await,
            View::Prompt(SEARCH_PROMPT.to_string())
        );
        assert_eq!(
            session.trigger("   ").await,
            View::Prompt(SEARCH_PROMPT.to_string())
        );
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_trims_and_renders() {
        let (mut session, stub) = session();
        stub.push_json(200, json!([{ "name": "cat" }, {}]));
        session.enter_mode(Mode::SearchByName).await;

        let View::Results(results) = session.trigger("  cat ").await else {
            panic!("expected results");
        };

        assert_eq!(results.count, 2);
        assert_eq!(results.cards[1].name, "unknown");
        assert_eq!(stub.requests()[0].query(), Some("q=cat"));
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let (mut session, stub) = session();
        stub.push_json(200, json!([]));
        session.enter_mode(Mode::SearchByName).await;

        let View::Results(results) = session.trigger("cat").await else {
            panic!("expected results");
        };

        assert!(results.is_empty);
        assert!(results.cards.is_empty());
        assert_eq!(results.summary(), "Found 0 result(s).");
        assert_eq!(results.empty_notice(), Some(crate::presentation::NO_RESULTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_transport_failure_shows_error_not_card() {
        let (mut session, _stub) = session();

        let View::Error(message) = session.trigger("").await else {
            panic!("expected an error view");
        };
        assert!(message.starts_with("API error: Transport error"));
    }

    #[tokio::test]
    async fn test_switching_modes_drops_choices() {
        let (mut session, stub) = session();
        stub.push_json(200, json!(["flags"]));
        session.enter_mode(Mode::RandomByCategory).await;
        assert_eq!(session.options().len(), 1);

        session.enter_mode(Mode::Random).await;
        assert!(session.options().is_empty());
        assert_eq!(session.mode(), Mode::Random);
    }

    #[test]
    fn test_view_json() {
        let json = serde_json::to_value(View::Prompt(SEARCH_PROMPT.to_string())).unwrap();
        assert_eq!(json, json!({ "kind": "prompt", "data": SEARCH_PROMPT }));
    }
}
