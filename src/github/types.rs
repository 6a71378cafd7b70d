use serde::Deserialize;

/// A pull request as returned by `gh search prs --json ...`
///
/// Only the fields the picker displays or acts on are kept. The list handed to
/// the picker is never re-sorted: order as returned is display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub number: u64,
    pub repository: Repository,
    pub title: String,
    pub url: String, // HTML URL for browser
    #[serde(rename = "isDraft", default)]
    pub is_draft: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
}

impl Record {
    pub fn new(number: u64, group: &str, title: &str, url: &str) -> Self {
        Self {
            number,
            repository: Repository {
                name: group.to_string(),
            },
            title: title.to_string(),
            url: url.to_string(),
            is_draft: false,
        }
    }

    /// Short collection name shown in brackets in the list
    pub fn group(&self) -> &str {
        &self.repository.name
    }

    /// A record without a URL cannot be opened
    pub fn is_actionable(&self) -> bool {
        !self.url.trim().is_empty()
    }
}
