//! Content service data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a block within a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId {
    pub project: String,
    pub block: String,
}

impl BlockId {
    pub fn new(project: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            block: block.into(),
        }
    }

    /// The id of a particular version of this block.
    pub fn version(&self, version: u32) -> VersionId {
        VersionId {
            project: self.project.clone(),
            block: self.block.clone(),
            version,
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project, self.block)
    }
}

/// Error parsing a `project/block` id.
#[derive(Debug, thiserror::Error)]
#[error("Invalid block id \"{0}\", expected \"project/block\"")]
pub struct IdError(String);

impl FromStr for BlockId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((project, block))
                if !project.is_empty() && !block.is_empty() && !block.contains('/') =>
            {
                Ok(BlockId::new(project, block))
            }
            _ => Err(IdError(s.to_string())),
        }
    }
}

/// Identifies one saved version of a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId {
    pub project: String,
    pub block: String,
    pub version: u32,
}

impl VersionId {
    pub fn block_id(&self) -> BlockId {
        BlockId::new(self.project.clone(), self.block.clone())
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}.{}", self.project, self.block, self.version)
    }
}

/// Block metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub kind: String,
    /// Most recent saved version; `None` for a block that only has a draft
    #[serde(default)]
    pub latest_version: Option<u32>,
    #[serde(default)]
    pub date_modified: Option<String>,
}

/// A saved version of a block with its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: VersionId,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date_created: Option<String>,
    /// Kind-specific payload
    #[serde(default)]
    pub data: serde_json::Value,
}

/// A published work belonging to the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version_count: u32,
    #[serde(default)]
    pub date_created: Option<String>,
}
