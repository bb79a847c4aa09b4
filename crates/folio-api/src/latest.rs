//! Fetching the most recent saved version of a block.

use crate::client::{ApiError, ContentApi, VersionQuery};
use crate::models::{Block, BlockId, Version};

/// A block together with its latest saved version.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestVersion {
    pub block: Block,
    pub version: Version,
}

/// Fetch `block_id` and then its latest saved version.
///
/// Fails with [`ApiError::NoVersions`] when the block has never been saved.
/// The two requests run one after the other; errors from either are returned
/// as is.
pub async fn get_latest_version<A: ContentApi>(
    api: &A,
    block_id: &BlockId,
    query: &VersionQuery,
) -> Result<LatestVersion, ApiError> {
    tracing::debug!("get_latest_version({})", block_id);

    let block = api.get_block(block_id).await?;
    let Some(latest) = block.latest_version else {
        return Err(ApiError::NoVersions {
            name: block.name.clone(),
        });
    };

    let version_id = block.id.version(latest);
    tracing::debug!("Fetching latest version of block: {}", version_id);
    let version = api.get_version(&version_id, query).await?;

    Ok(LatestVersion { block, version })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{VersionId, Work};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryApi {
        blocks: HashMap<BlockId, Block>,
        versions: HashMap<VersionId, Version>,
        requested: Mutex<Vec<String>>,
    }

    impl MemoryApi {
        fn with_block(mut self, name: &str, latest: Option<u32>) -> Self {
            let id = BlockId::new("proj", name);
            self.blocks.insert(
                id.clone(),
                Block {
                    id,
                    name: name.to_string(),
                    title: name.to_uppercase(),
                    kind: "Article".to_string(),
                    latest_version: latest,
                    date_modified: None,
                },
            );
            self
        }

        fn with_version(mut self, name: &str, version: u32) -> Self {
            let id = BlockId::new("proj", name).version(version);
            self.versions.insert(
                id.clone(),
                Version {
                    id,
                    kind: "Article".to_string(),
                    title: format!("{name} v{version}"),
                    date_created: None,
                    data: serde_json::Value::Null,
                },
            );
            self
        }
    }

    impl ContentApi for MemoryApi {
        async fn get_block(&self, id: &BlockId) -> Result<Block, ApiError> {
            self.requested.lock().unwrap().push(id.to_string());
            self.blocks
                .get(id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(id.to_string()))
        }

        async fn get_version(
            &self,
            id: &VersionId,
            _query: &VersionQuery,
        ) -> Result<Version, ApiError> {
            self.requested.lock().unwrap().push(id.to_string());
            self.versions
                .get(id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(id.to_string()))
        }

        async fn list_works(&self) -> Result<Vec<Work>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn fetches_latest_version() {
        let api = MemoryApi::default()
            .with_block("notes", Some(3))
            .with_version("notes", 3);

        let latest = get_latest_version(&api, &BlockId::new("proj", "notes"), &VersionQuery::default())
            .await
            .unwrap();

        assert_eq!(latest.block.name, "notes");
        assert_eq!(latest.version.id.version, 3);
        assert_eq!(
            *api.requested.lock().unwrap(),
            vec!["proj/notes".to_string(), "proj/notes.3".to_string()]
        );
    }

    #[tokio::test]
    async fn block_without_versions_fails_naming_block() {
        let api = MemoryApi::default().with_block("draft", None);

        let err = get_latest_version(&api, &BlockId::new("proj", "draft"), &VersionQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NoVersions { ref name } if name == "draft"));
        assert!(err.to_string().contains("\"draft\""));
        assert_eq!(api.requested.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_version_propagates() {
        let api = MemoryApi::default().with_block("notes", Some(2));

        let err = get_latest_version(&api, &BlockId::new("proj", "notes"), &VersionQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(ref id) if id == "proj/notes.2"));
    }

    #[tokio::test]
    async fn missing_block_propagates() {
        let api = MemoryApi::default();

        let err = get_latest_version(&api, &BlockId::new("proj", "ghost"), &VersionQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
