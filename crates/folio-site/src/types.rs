//! Types serialized into `config.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::session::Action;

/// One navigable entry in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,

    /// Logical file name; absent for synthetic part headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Nesting depth, starting at 1
    pub level: u32,
}

/// All pages of one validated section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFolder {
    pub title: String,
    /// Root page of the section's table of contents
    pub index: String,
    pub pages: Vec<Page>,
}

/// A validated section as exposed to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub title: String,
    /// Folder basename, unique across sections
    pub folder: String,
    /// Folder path as declared in the project config
    pub path: String,
}

/// Site-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: String,
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_text: Option<String>,
    pub sections: Vec<SectionInfo>,
}

/// The document written to `config.json`.
///
/// Regenerated wholesale on every build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub folders: BTreeMap<String, SiteFolder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_header_omits_slug() {
        let page = Page {
            title: "Part 1".to_string(),
            slug: None,
            level: 1,
        };

        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json, serde_json::json!({ "title": "Part 1", "level": 1 }));
    }

    #[test]
    fn site_info_uses_camel_case() {
        let site = SiteInfo {
            name: "Docs".to_string(),
            actions: vec![],
            logo: Some("/logo.png".to_string()),
            logo_text: Some("Docs".to_string()),
            sections: vec![],
        };

        let json = serde_json::to_value(&site).unwrap();

        assert_eq!(json["logoText"], "Docs");
        assert_eq!(json["logo"], "/logo.png");
    }
}
