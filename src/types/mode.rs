//! Explorer modes offered by a UI shell

use serde::{Deserialize, Serialize};

/// What the user asked the explorer to do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// One random emoji
    #[default]
    Random,
    /// One random emoji from a chosen category
    RandomByCategory,
    /// One random emoji from a chosen group
    RandomByGroup,
    /// Every emoji whose name matches a query
    SearchByName,
}

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 4] = [
        Mode::Random,
        Mode::RandomByCategory,
        Mode::RandomByGroup,
        Mode::SearchByName,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Random => "Random",
            Mode::RandomByCategory => "Random by Category",
            Mode::RandomByGroup => "Random by Group",
            Mode::SearchByName => "Search by Name",
        }
    }

    /// Section heading shown while the mode is active
    pub fn heading(&self) -> &'static str {
        match self {
            Mode::Random => "Random Emoji",
            Mode::RandomByCategory => "Random Emoji by Category",
            Mode::RandomByGroup => "Random Emoji by Group",
            Mode::SearchByName => "Search Emojis by Name",
        }
    }

    /// Label of the button that triggers the mode's request
    pub fn action_label(&self) -> &'static str {
        match self {
            Mode::Random => "Get random emoji",
            Mode::RandomByCategory => "Get random emoji in this category",
            Mode::RandomByGroup => "Get random emoji in this group",
            Mode::SearchByName => "Search",
        }
    }

    /// Whether the mode needs a list loaded before it can act
    pub fn needs_options(&self) -> bool {
        matches!(self, Mode::RandomByCategory | Mode::RandomByGroup)
    }
}
