use futures::future;
use regex::Regex;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_WEB_BASE: &str = "https://github.com";
const APP_USER_AGENT: &str = concat!("gh-to-hf/", env!("CARGO_PKG_VERSION"));

/// One file pulled out of the source tree, fully decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

/// A blob listed in the source tree together with its content handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlobEntry {
    pub path: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BlobResponse {
    content: String,
}

pub fn parse_source_url(url: &str) -> Result<(String, String)> {
    let pattern = Regex::new(r"^https://github\.com/([\w-]+)/([\w-]+)$").unwrap();
    let captures = pattern
        .captures(url)
        .ok_or_else(|| Error::InvalidInput("Invalid GitHub URL format".to_string()))?;

    Ok((captures[1].to_string(), captures[2].to_string()))
}

pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    web_base: String,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_API_BASE.to_string(), DEFAULT_WEB_BASE.to_string())
    }

    pub fn with_base_urls(api_base: String, web_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            web_base,
        }
    }

    /// Unauthenticated read of the repository page. 2xx confirms the
    /// repository exists and is publicly visible.
    pub async fn repo_is_public(&self, owner: &str, name: &str) -> Result<bool> {
        let url = format!(
            "{web_base}/{owner}/{name}",
            web_base = self.web_base,
            owner = owner,
            name = name
        );

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, APP_USER_AGENT)
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    /// Lists every blob in the repository's main tree, in native tree order.
    pub async fn list_blobs(&self, owner: &str, name: &str) -> Result<Vec<BlobEntry>> {
        let url = format!(
            "{api_base}/repos/{owner}/{name}/git/trees/main?recursive=1",
            api_base = self.api_base,
            owner = owner,
            name = name
        );

        debug!(owner, name, "listing repository tree");

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, APP_USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Fetch(
                "Failed to fetch repository structure".to_string(),
            ));
        }

        let listing: TreeResponse = response.json().await?;

        let blobs = listing
            .tree
            .into_iter()
            .filter(|entry| entry.kind == "blob")
            .filter_map(|entry| {
                entry.url.map(|url| BlobEntry {
                    path: entry.path,
                    url,
                })
            })
            .collect();

        Ok(blobs)
    }

    pub async fn fetch_file(&self, entry: &BlobEntry) -> Result<SourceFile> {
        debug!(path = entry.path.as_str(), "fetching blob content");

        let response = self
            .http
            .get(&entry.url)
            .header(USER_AGENT, APP_USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "Failed to fetch content for {}",
                entry.path
            )));
        }

        let blob: BlobResponse = response.json().await?;
        let content = decode_blob(&entry.path, &blob.content)?;

        Ok(SourceFile {
            path: entry.path.clone(),
            content,
        })
    }

    /// Fetches every listed blob as one concurrent batch, joined before any
    /// upload begins. Output order matches the listing order.
    pub async fn fetch_files(&self, entries: &[BlobEntry]) -> Result<Vec<SourceFile>> {
        future::try_join_all(entries.iter().map(|entry| self.fetch_file(entry))).await
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

// The API wraps base64 content at 60 columns, so strip whitespace first.
fn decode_blob(path: &str, encoded: &str) -> Result<String> {
    let cleaned: String = encoded.split_whitespace().collect();

    let bytes = base64::decode(&cleaned)
        .map_err(|_| Error::Fetch(format!("Failed to decode content for {}", path)))?;

    String::from_utf8(bytes)
        .map_err(|_| Error::Fetch(format!("Failed to decode content for {}", path)))
}
