use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::github::SourceFile;

const DEFAULT_BASE_URL: &str = "https://huggingface.co";

#[derive(Debug, Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    private: bool,
    license: &'a str,
}

#[derive(Debug, Serialize)]
struct CommitRequest<'a> {
    files: Vec<CommitFile<'a>>,
    title: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct CommitFile<'a> {
    path: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateMetadataRequest<'a> {
    description: &'a str,
}

pub struct HfClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HfClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    pub async fn token_is_valid(&self) -> Result<bool> {
        let url = format!("{}/api/whoami", self.base_url);
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;

        Ok(response.status().is_success())
    }

    /// 404 from the repository endpoint means the name is still free.
    pub async fn repo_exists(&self, name: &str) -> Result<bool> {
        let url = format!("{}/api/repos/{}", self.base_url, name);
        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;

        Ok(response.status() != StatusCode::NOT_FOUND)
    }

    /// Provisions a new public Space under the apache license. A name
    /// conflict is still possible here despite the earlier availability
    /// check; it surfaces as `Conflict` and is not mitigated.
    pub async fn create_repo(&self, name: &str) -> Result<()> {
        let url = format!("{}/api/repos/create", self.base_url);
        let body = CreateRepoRequest {
            name,
            kind: "space",
            private: false,
            license: "apache",
        };

        debug!(name, "creating destination repository");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(Error::Conflict(
                "Repository name already taken on Hugging Face".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(Error::Create(status));
        }

        Ok(())
    }

    /// Commits one file into the destination repository.
    pub async fn upload_file(&self, name: &str, file: &SourceFile) -> Result<()> {
        let url = format!("{}/api/repos/{}/commit", self.base_url, name);
        let body = CommitRequest {
            files: vec![CommitFile {
                path: &file.path,
                content: &file.content,
            }],
            title: format!("Upload {}", file.path),
            description: format!("Transferring {} from GitHub", file.path),
        };

        debug!(name, path = file.path.as_str(), "uploading file");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upload {
                path: file.path.clone(),
                status,
            });
        }

        Ok(())
    }

    pub async fn update_description(&self, name: &str, description: &str) -> Result<()> {
        let url = format!("{}/api/repos/{}", self.base_url, name);
        let body = UpdateMetadataRequest { description };

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Metadata(status));
        }

        Ok(())
    }
}
