use super::Issue;
use serde::{Deserialize, Serialize};

/// Query string of the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub jql: String,

    #[serde(rename = "startAt")]
    pub start_at: u32,

    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "startAt")]
    pub start_at: u32,

    #[serde(rename = "maxResults")]
    pub max_results: u32,

    pub total: u32,

    pub issues: Vec<Issue>,
}

impl SearchParams {
    pub fn new(jql: impl Into<String>, start_at: u32, max_results: u32) -> Self {
        Self {
            jql: jql.into(),
            start_at,
            max_results,
        }
    }
}
