use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{IssueType, Priority, Resolution, Status, UserRef};

/// Timestamp layout Jira uses for `created`/`updated`, e.g.
/// `2020-12-03T14:05:20.974+0100`.
pub const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFields {
    pub summary: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(rename = "issuetype")]
    pub issue_type: IssueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<UserRef>,
    #[serde(default)]
    pub watches: Watches,
    pub status: Status,
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watches {
    #[serde(rename = "isWatching")]
    pub is_watching: bool,
    #[serde(rename = "watchCount")]
    pub watch_count: u32,
}

impl IssueFields {
    pub fn created_at(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        parse_jira_timestamp(&self.created)
    }

    pub fn updated_at(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        parse_jira_timestamp(&self.updated)
    }
}

pub fn parse_jira_timestamp(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(s, JIRA_TIMESTAMP_FORMAT)
}
