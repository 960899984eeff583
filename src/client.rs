use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DashError, Result};
use crate::types::{DashboardStats, FilterOptions, IssuePage, Project, TimelineData};

/// Client for the dashboard backend REST API.
///
/// The backend owns all Jira access, server-side filtering, and statistics
/// computation; this client is plain request/response glue.
pub struct DashClient {
    http: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl DashClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| DashError::InvalidUrl {
            url: base_url.to_string(),
            source: e,
        })?;

        // Url::join drops the last path segment without this.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(String, String)]) -> Result<T> {
        let url = self.join(path)?;
        let response = self.http.get(url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(DashError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        Ok(response.json().await?)
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| DashError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            source: e,
        })
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.get("jira/projects", &[]).await
    }

    /// One page of issues under the given server-side filters. Pass
    /// `fetch_all` to get the unpaginated variant.
    pub async fn issues(
        &self,
        mut params: Vec<(String, String)>,
        page: u32,
        fetch_all: bool,
    ) -> Result<IssuePage> {
        if fetch_all {
            params.push(("fetch_all".to_string(), "true".to_string()));
        } else {
            params.push(("page".to_string(), page.to_string()));
        }
        self.get("jira/issues", &params).await
    }

    pub async fn dashboard_stats(&self, params: &[(String, String)]) -> Result<DashboardStats> {
        self.get("jira/dashboard/stats", params).await
    }

    pub async fn timeline(
        &self,
        mut params: Vec<(String, String)>,
        days: u32,
    ) -> Result<TimelineData> {
        params.push(("days".to_string(), days.to_string()));
        self.get("jira/dashboard/timeline", &params).await
    }

    pub async fn filter_options(&self, project_key: &str) -> Result<FilterOptions> {
        let params = [("project_key".to_string(), project_key.to_string())];
        self.get("jira/filters/options", &params).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let url = self.join("auth/login")?;
        let response = self
            .http
            .post(url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        let body: LoginResponse = response.json().await.map_err(DashError::Http)?;

        if !body.success {
            return Err(DashError::LoginFailed(
                body.error
                    .unwrap_or_else(|| format!("status {}", status.as_u16())),
            ));
        }

        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        let url = self.join("auth/logout")?;
        // Best effort: the local session flag is cleared regardless.
        let _ = self.http.post(url).send().await;
        Ok(())
    }
}
