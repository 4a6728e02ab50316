/// JQL検索の使用例
///
/// 実行前に環境変数（または .env）を設定してください：
/// export JIRA_URL=https://your-instance.atlassian.net
/// export JIRA_USER=your-email@example.com
/// export JIRA_API_TOKEN=your-api-token
///
/// 実行方法：
/// RUST_LOG=jira_client=debug cargo run --example search -- "project = TEST ORDER BY created DESC"
use dotenv::dotenv;
use jira_client::{JiraClient, JiraConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let jql = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ORDER BY created DESC".to_string());

    let config = JiraConfig::from_env()?;
    let client = JiraClient::new(config)?;

    let result = client.search(&jql, 0, 20).await?;
    println!("{} of {} issues", result.issues.len(), result.total);

    for issue in &result.issues {
        let assignee = issue
            .fields
            .assignee
            .as_ref()
            .map(|a| a.display_name.as_str())
            .unwrap_or("Unassigned");
        let priority = issue
            .fields
            .priority
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("-");

        println!(
            "{:<10} [{}] {} ({}, {}, labels: {})",
            issue.key,
            issue.fields.status.name,
            issue.fields.summary,
            assignee,
            priority,
            issue.fields.labels.join(",")
        );
    }

    Ok(())
}
