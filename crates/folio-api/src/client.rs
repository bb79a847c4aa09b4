//! The content API contract and its HTTP implementation.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{Block, BlockId, Version, VersionId, Work};

/// Base URL used when neither the project config nor the environment sets one.
pub const DEFAULT_API_URL: &str = "https://api.folio.dev";

/// Errors returned by the content API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("Could not find {0}")]
    NotFound(String),

    #[error("Block with name \"{name}\" has no versions, do you need to save the draft?")]
    NoVersions { name: String },
}

/// Options when fetching a version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionQuery {
    /// Content format to request, e.g. `markdown`
    pub format: Option<String>,
}

/// Operations the content service offers.
#[allow(async_fn_in_trait)]
pub trait ContentApi {
    /// Fetch a block's metadata.
    async fn get_block(&self, id: &BlockId) -> Result<Block, ApiError>;

    /// Fetch one version of a block.
    async fn get_version(&self, id: &VersionId, query: &VersionQuery) -> Result<Version, ApiError>;

    /// List the works of the authenticated user.
    async fn list_works(&self) -> Result<Vec<Work>, ApiError>;
}

#[derive(Deserialize)]
struct Items<T> {
    items: Vec<T>,
}

/// [`ContentApi`] over HTTPS with an optional bearer token.
#[derive(Debug, Clone)]
pub struct HttpContentApi {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpContentApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn block_url(&self, id: &BlockId) -> String {
        format!("{}/blocks/{}/{}", self.base_url, id.project, id.block)
    }

    fn version_url(&self, id: &VersionId) -> String {
        format!(
            "{}/blocks/{}/{}/versions/{}",
            self.base_url, id.project, id.block, id.version
        )
    }

    fn works_url(&self) -> String {
        format!("{}/my/works", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

impl ContentApi for HttpContentApi {
    async fn get_block(&self, id: &BlockId) -> Result<Block, ApiError> {
        self.get_json(self.block_url(id), &[]).await
    }

    async fn get_version(&self, id: &VersionId, query: &VersionQuery) -> Result<Version, ApiError> {
        let params: Vec<(&str, &str)> = query
            .format
            .as_deref()
            .map(|format| ("format", format))
            .into_iter()
            .collect();
        self.get_json(self.version_url(id), &params).await
    }

    async fn list_works(&self) -> Result<Vec<Work>, ApiError> {
        let works: Items<Work> = self.get_json(self.works_url(), &[]).await?;
        Ok(works.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls() {
        let api = HttpContentApi::new("https://api.example.org/", None);
        let id = BlockId::new("proj", "blk");

        assert_eq!(api.base_url(), "https://api.example.org");
        assert_eq!(api.block_url(&id), "https://api.example.org/blocks/proj/blk");
        assert_eq!(
            api.version_url(&id.version(2)),
            "https://api.example.org/blocks/proj/blk/versions/2"
        );
        assert_eq!(api.works_url(), "https://api.example.org/my/works");
    }

    #[test]
    fn no_versions_message_names_block() {
        let err = ApiError::NoVersions {
            name: "my-notes".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Block with name \"my-notes\" has no versions, do you need to save the draft?"
        );
    }
}
