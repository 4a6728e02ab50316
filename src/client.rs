use crate::error::{Error, Result};
use crate::models::{Myself, Project, SearchParams, SearchResult};
use base64::Engine;
use reqwest::{Client, RequestBuilder, header};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

#[derive(Debug, Clone)]
pub enum Auth {
    Basic { username: String, api_token: String },
    Bearer { token: String },
}

impl Auth {
    fn header_value(&self) -> String {
        match self {
            Auth::Basic { username, api_token } => {
                let auth_value = format!("{}:{}", username, api_token);
                let encoded = base64::engine::general_purpose::STANDARD.encode(auth_value.as_bytes());
                format!("Basic {}", encoded)
            }
            Auth::Bearer { token } => format!("Bearer {}", token),
        }
    }
}

/// REST API generation used by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V2,
    V3,
}

impl ApiVersion {
    pub fn search_path(self) -> &'static str {
        match self {
            ApiVersion::V2 => "/rest/api/2/search",
            ApiVersion::V3 => "/rest/api/3/search",
        }
    }
}

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub auth: Option<Auth>,
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// Extra static headers sent with every request.
    pub headers: Vec<(String, String)>,
}

impl JiraConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();

        let url = Url::parse(&base_url)
            .map_err(|_| Error::InvalidConfiguration("Invalid base URL".to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfiguration(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        Ok(Self {
            base_url,
            auth: None,
            timeout: None,
            headers: Vec::new(),
        })
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Reads `JIRA_URL`, the optional `JIRA_USER`/`JIRA_API_TOKEN` pair and
    /// the optional `JIRA_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        use std::env;

        let base_url = env::var("JIRA_URL")
            .map_err(|_| Error::ConfigurationMissing("JIRA_URL not found in environment".to_string()))?;

        let mut config = Self::new(base_url)?;

        match (env::var("JIRA_USER").ok(), env::var("JIRA_API_TOKEN").ok()) {
            (Some(username), Some(api_token)) => {
                config = config.with_auth(Auth::Basic { username, api_token });
            }
            (Some(_), None) => {
                return Err(Error::ConfigurationMissing(
                    "JIRA_API_TOKEN not found in environment".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(Error::ConfigurationMissing(
                    "JIRA_USER not found in environment".to_string(),
                ));
            }
            (None, None) => {}
        }

        if let Ok(raw) = env::var("JIRA_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::InvalidConfiguration(format!("JIRA_TIMEOUT_SECS is not a number of seconds: {}", raw))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct JiraClient {
    pub(crate) client: Client,
    pub(crate) config: Arc<JiraConfig>,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        // 認証ヘッダーを追加
        if let Some(auth) = &config.auth {
            let mut value = header::HeaderValue::from_str(&auth.header_value())
                .map_err(|_| Error::InvalidConfiguration("Invalid auth header".to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        for (name, value) in &config.headers {
            let header_name = header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidConfiguration(format!("Invalid header name: {}", name)))?;
            let header_value = header::HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidConfiguration(format!("Invalid value for header {}", name)))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Searches issues with JQL through the v3 API.
    #[instrument(skip(self))]
    pub async fn search(&self, jql: &str, start_at: u32, max_results: u32) -> Result<SearchResult> {
        self.search_with_version(ApiVersion::V3, jql, start_at, max_results)
            .await
    }

    /// Same as [`JiraClient::search`] against the v2 API, for servers
    /// (Jira Server / Data Center) that don't expose v3.
    #[instrument(skip(self))]
    pub async fn search_v2(&self, jql: &str, start_at: u32, max_results: u32) -> Result<SearchResult> {
        self.search_with_version(ApiVersion::V2, jql, start_at, max_results)
            .await
    }

    async fn search_with_version(
        &self,
        version: ApiVersion,
        jql: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<SearchResult> {
        let params = SearchParams::new(jql, start_at, max_results);
        let request = self.request(version.search_path()).query(&params);

        let result: SearchResult = self.execute(request).await?;
        debug!("Found {} issues (total: {})", result.issues.len(), result.total);
        Ok(result)
    }

    /// The user the credentials belong to.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<Myself> {
        self.get("/rest/api/3/myself").await
    }

    #[instrument(skip(self))]
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.get("/rest/api/3/project").await?;
        debug!("Fetched {} projects", projects.len());
        Ok(projects)
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    fn request(&self, endpoint: &str) -> RequestBuilder {
        let url = self.endpoint_url(endpoint);
        debug!("GET {}", url);
        self.client.get(url)
    }

    pub(crate) async fn get<T>(&self, endpoint: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute(self.request(endpoint)).await
    }

    async fn execute<T>(&self, request: RequestBuilder) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), %url, "Unexpected response");
            return Err(Error::UnexpectedResponse {
                status: status.as_u16(),
                message,
            });
        }

        // bytes first so a bad body surfaces as JsonParsing, not as a transport error
        let body = response.bytes().await?;
        let data = serde_json::from_slice(&body)?;
        Ok(data)
    }
}
