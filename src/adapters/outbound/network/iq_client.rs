use super::raw_report::parse_raw_report;
use crate::license_report::domain::Report;
use crate::ports::outbound::ReportRepository;
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Username and password for IQ Server basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct IqCredentials {
    username: String,
    password: String,
}

impl IqCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// Keep the password out of debug logs.
impl std::fmt::Debug for IqCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IqCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl std::str::FromStr for IqCredentials {
    type Err = String;

    /// Parses `username:password`. The password may itself contain colons.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((username, password)) if !username.is_empty() => {
                Ok(Self::new(username, password))
            }
            _ => Err("Invalid credentials: expected 'username:password'".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApplicationsResponse {
    #[serde(default)]
    applications: Vec<Application>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Application {
    id: String,
    public_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportInfo {
    stage: String,
    #[serde(default)]
    report_html_url: Option<String>,
    #[serde(default)]
    report_data_url: Option<String>,
}

impl ReportInfo {
    /// The report id is the last path segment of the report URLs, e.g.
    /// `ui/links/application/my-app/report/0a1b2c`.
    fn report_id(&self) -> Option<&str> {
        self.report_html_url
            .as_deref()
            .or(self.report_data_url.as_deref())
            .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
            .filter(|id| !id.is_empty())
    }
}

/// IqServerClient adapter for fetching raw reports from Nexus IQ Server
///
/// Fetching a report takes three calls: resolve the application's public ID
/// to its internal ID, list the application's reports, then download the raw
/// report of the one evaluated at the requested stage. Failures are not
/// retried.
pub struct IqServerClient {
    client: reqwest::Client,
    base_url: String,
    credentials: IqCredentials,
}

impl IqServerClient {
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new(base_url: &str, credentials: IqCredentials) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("iq-license-report/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        tracing::debug!(%url, user = self.credentials.username(), "GET");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("IQ Server returned status code {} for {}", response.status(), url);
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(self.get(path).await?.json().await?)
    }

    async fn application_id(&self, public_id: &str) -> Result<String> {
        let path = format!(
            "api/v2/applications?publicId={}",
            urlencoding::encode(public_id)
        );
        let response: ApplicationsResponse = self.get_json(&path).await?;

        response
            .applications
            .into_iter()
            .find(|app| app.public_id == public_id)
            .map(|app| app.id)
            .ok_or_else(|| anyhow::anyhow!("No application with public ID '{}'", public_id))
    }

    async fn report_infos(&self, application_id: &str) -> Result<Vec<ReportInfo>> {
        let path = format!(
            "api/v2/reports/applications/{}",
            urlencoding::encode(application_id)
        );
        self.get_json(&path).await
    }

    async fn raw_report(&self, public_id: &str, report_id: &str) -> Result<Report> {
        let path = format!(
            "api/v2/applications/{}/reports/{}/raw",
            urlencoding::encode(public_id),
            urlencoding::encode(report_id)
        );
        let body = self.get(&path).await?.text().await?;
        Ok(parse_raw_report(&body)?)
    }

    async fn fetch(&self, app_id: &str, stage: &str) -> Result<Report> {
        let application_id = self.application_id(app_id).await?;
        let infos = self.report_infos(&application_id).await?;
        let report_id = select_report_id(&infos, stage)?;
        tracing::debug!(app_id, stage, %report_id, "found report");

        self.raw_report(app_id, &report_id).await
    }
}

fn select_report_id(infos: &[ReportInfo], stage: &str) -> Result<String> {
    let info = infos
        .iter()
        .find(|info| info.stage == stage)
        .ok_or_else(|| {
            let stages: Vec<&str> = infos.iter().map(|info| info.stage.as_str()).collect();
            anyhow::anyhow!(
                "No report for stage '{}' (available stages: {})",
                stage,
                if stages.is_empty() {
                    "none".to_string()
                } else {
                    stages.join(", ")
                }
            )
        })?;

    info.report_id()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Report for stage '{}' has no report URL", stage))
}

#[async_trait]
impl ReportRepository for IqServerClient {
    async fn fetch_report(&self, app_id: &str, stage: &str) -> Result<Report> {
        self.fetch(app_id, stage).await.map_err(|e| {
            ReportError::Backend {
                app_id: app_id.to_string(),
                stage: stage.to_string(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
