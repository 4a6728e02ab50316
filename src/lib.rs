//! Client for the Jira REST search API.
//!
//! ```no_run
//! # async fn run() -> jira_client::Result<()> {
//! use jira_client::{Auth, JiraClient, JiraConfig};
//! use std::time::Duration;
//!
//! let config = JiraConfig::new("https://example.atlassian.net")?
//!     .with_auth(Auth::Basic {
//!         username: "me@example.com".to_string(),
//!         api_token: "token".to_string(),
//!     })
//!     .with_timeout(Duration::from_secs(15));
//! let client = JiraClient::new(config)?;
//!
//! let result = client.search("project = TEST ORDER BY created DESC", 0, 50).await?;
//! for issue in &result.issues {
//!     println!("{} {}", issue.key, issue.fields.summary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiVersion, Auth, JiraClient, JiraConfig};
pub use error::{Error, Result};
pub use models::*;
