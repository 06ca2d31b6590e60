//! Remote source of tsconfig bases (GitHub contents API)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::FetchError;

/// One entry of the directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFileEntry {
    pub name: String,
    pub sha: String,
}

/// Body of a single file, still transport-encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFileContent {
    pub content: String,
    pub encoding: String,
}

/// Somewhere bases can be listed and fetched from.
///
/// Each call is a single attempt: no retries, no caching.
#[async_trait]
pub trait BaseSource: Send + Sync {
    async fn list_files(&self) -> Result<Vec<RemoteFileEntry>, FetchError>;

    async fn get_file(&self, name: &str) -> Result<RemoteFileContent, FetchError>;
}

/// `BaseSource` backed by the GitHub REST API
pub struct GithubBases {
    client: reqwest::Client,
    settings: Settings,
}

impl GithubBases {
    pub fn new(settings: Settings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, settings })
    }

    async fn json_get<R>(&self, url: &str) -> Result<R, FetchError>
    where
        R: serde::de::DeserializeOwned,
    {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let response = Self::validate_response(response).await?;

        Ok(response.json().await?)
    }

    async fn validate_response(response: Response) -> Result<Response, FetchError> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "response");

        if !status.is_success() {
            let body = response.text().await?;

            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl BaseSource for GithubBases {
    async fn list_files(&self) -> Result<Vec<RemoteFileEntry>, FetchError> {
        self.json_get(&self.settings.listing_url()).await
    }

    async fn get_file(&self, name: &str) -> Result<RemoteFileContent, FetchError> {
        self.json_get(&self.settings.file_url(name)).await
    }
}
