use serde::Deserialize;

use crate::utils::{deserialize_display_text, deserialize_truthy_text};

/// Shown in place of a missing or empty article description.
pub const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleRecord {
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy_text")]
    pub description: Option<String>,
}

impl ArticleRecord {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn description_text(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }
}
