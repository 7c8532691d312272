pub mod error;

pub use error::{GithubError, Result};

use std::time::Duration;

use serde::Deserialize;

const BASE_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub html_url: String,
}

pub struct GithubClient {
    client: reqwest::Client,
    token: String,
}

impl GithubClient {
    pub fn new(token: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            token: token.to_string(),
        }
    }

    /// Create an issue in `repo` (`owner/name` form) and return its URL.
    pub async fn create_issue(&self, repo: &str, title: &str, body: &str) -> Result<CreatedIssue> {
        let url = format!("{BASE_URL}/repos/{repo}/issues");
        let payload = serde_json::json!({ "title": title, "body": body });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            // The GitHub API rejects requests without a User-Agent
            .header("User-Agent", "birdscout")
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let issue: CreatedIssue = resp.json().await?;
        tracing::info!(url = issue.html_url.as_str(), "Issue created");
        Ok(issue)
    }
}
