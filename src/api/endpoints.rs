use crate::error::Result;
use crate::types::EmojiRecord;

use super::client::EmojiHubClient;

impl EmojiHubClient {
    /// Get a random emoji
    pub async fn fetch_random(&self) -> Result<EmojiRecord> {
        let url = self.api_url(&["random"])?;
        self.get_json(url).await
    }

    /// Get the names of all categories
    pub async fn fetch_categories(&self) -> Result<Vec<String>> {
        let url = self.api_url(&["categories"])?;
        self.get_json(url).await
    }

    /// Get the names of all groups
    pub async fn fetch_groups(&self) -> Result<Vec<String>> {
        let url = self.api_url(&["groups"])?;
        self.get_json(url).await
    }

    /// Get a random emoji from a category
    ///
    /// # Arguments
    /// * `category` - A name previously returned by `fetch_categories`; it is
    ///   percent-encoded but not otherwise checked
    pub async fn fetch_random_by_category(&self, category: &str) -> Result<EmojiRecord> {
        let url = self.api_url(&["random", "category", category])?;
        self.get_json(url).await
    }

    /// Get a random emoji from a group
    ///
    /// # Arguments
    /// * `group` - A name previously returned by `fetch_groups`
    pub async fn fetch_random_by_group(&self, group: &str) -> Result<EmojiRecord> {
        let url = self.api_url(&["random", "group", group])?;
        self.get_json(url).await
    }

    /// Search emojis by name
    ///
    /// # Arguments
    /// * `query` - Search text, sent as given (trimming is up to the caller)
    ///
    /// # Returns
    /// Matching records in the order the API returned them; possibly none
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<EmojiRecord>> {
        let mut url = self.api_url(&["search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url).await
    }
}
