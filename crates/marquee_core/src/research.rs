//! Research entity state.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Most recently gathered popularity data.
///
/// Both lists are empty until the first gather completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ResearchState {
    trends: Vec<String>,
    actors: Vec<String>,
    popular_movies_markdown: Option<String>,
}

impl ResearchState {
    /// Replace the raw digest the lists were extracted from.
    pub fn set_digest(&mut self, markdown: String) {
        self.popular_movies_markdown = Some(markdown);
    }

    /// Replace both lists.
    pub fn set_lists(&mut self, trends: Vec<String>, actors: Vec<String>) {
        self.trends = trends;
        self.actors = actors;
    }
}
