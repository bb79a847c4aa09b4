//! Parsing `oxa:` links that point at blocks in the content service.

use std::sync::LazyLock;

use regex::Regex;

static OXA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^oxa:([A-Za-z0-9_-]+)/([A-Za-z0-9_-]+)(?:\.(\d+))?(?:#([A-Za-z0-9_.:-]+))?$")
        .expect("valid oxa link pattern")
});

/// The parts of `oxa:<project>/<block>[.<version>][#<id>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OxaLink {
    pub project: String,
    pub block: String,
    pub version: Option<u32>,
    /// Id of an element inside the block
    pub id: Option<String>,
}

impl OxaLink {
    /// Bookmark name used for cross-references: the element id, or the first
    /// eight characters of the block id.
    pub fn reference_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => self.block.chars().take(8).collect(),
        }
    }
}

/// Parse an `oxa:` link; anything else yields `None`.
pub fn oxa_link_to_id(link: &str) -> Option<OxaLink> {
    let caps = OXA_LINK.captures(link.trim())?;
    Some(OxaLink {
        project: caps[1].to_string(),
        block: caps[2].to_string(),
        version: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        id: caps.get(4).map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_link() {
        let link = oxa_link_to_id("oxa:proj/abcdefghij.3#fig-1").unwrap();

        assert_eq!(link.project, "proj");
        assert_eq!(link.block, "abcdefghij");
        assert_eq!(link.version, Some(3));
        assert_eq!(link.id.as_deref(), Some("fig-1"));
        assert_eq!(link.reference_id(), "fig-1");
    }

    #[test]
    fn falls_back_to_block_prefix() {
        let link = oxa_link_to_id("oxa:proj/abcdefghij").unwrap();

        assert_eq!(link.version, None);
        assert_eq!(link.reference_id(), "abcdefgh");
    }

    #[test]
    fn rejects_other_links() {
        assert!(oxa_link_to_id("https://example.org").is_none());
        assert!(oxa_link_to_id("oxa:only-project").is_none());
        assert!(oxa_link_to_id("").is_none());
    }
}
