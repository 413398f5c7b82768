use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use lumo_shared::types::{Error, Result};

/// A stylesheet address. Identity is plain string equality; no
/// normalization happens beyond what the document already did.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRef(String);

impl StyleRef {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if a stylesheet applied at `loaded` already satisfies this
    /// reference. Documents carry absolute hrefs while the critical list is
    /// rooted at the site, so this matches on the address suffix.
    pub fn satisfied_by(&self, loaded: &StyleRef) -> bool {
        loaded.0.ends_with(&self.0)
    }

    /// True if this reference points at the same resource as `other`,
    /// with `other` given as a site-rooted address.
    pub fn overlaps(&self, other: &StyleRef) -> bool {
        self.0.contains(&other.0)
    }
}

impl From<&str> for StyleRef {
    fn from(href: &str) -> Self {
        Self(href.to_string())
    }
}

impl From<String> for StyleRef {
    fn from(href: String) -> Self {
        Self(href)
    }
}

impl Display for StyleRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the sequencer needs from the document, captured once when the
/// structural content has been parsed. The sequencer never queries the live
/// document itself; the environment adapter snapshots it and applies the
/// resulting reveals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Hrefs of stylesheet links already applied to the document
    #[serde(default)]
    pub satisfied: Vec<StyleRef>,

    /// Hrefs of style links preloaded but not yet applied
    #[serde(default)]
    pub candidates: Vec<StyleRef>,

    /// Ids of chrome elements (header, nav) revealed before any stylesheet work
    #[serde(default)]
    pub chrome: Vec<String>,

    /// Ids of the content sections
    #[serde(default)]
    pub sections: Vec<String>,
}

impl PageSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Snapshot(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfied_by_matches_suffix() {
        let critical = StyleRef::from("/static/css/base.css");

        assert!(critical.satisfied_by(&StyleRef::from("https://example.org/static/css/base.css")));
        assert!(!critical.satisfied_by(&StyleRef::from("https://example.org/static/css/home.css")));
    }

    #[test]
    fn test_overlaps_matches_substring() {
        let candidate = StyleRef::from("https://example.org/static/css/base.css?v=2");

        assert!(candidate.overlaps(&StyleRef::from("/static/css/base.css")));
        assert!(!candidate.overlaps(&StyleRef::from("/static/css/landing/landing.css")));
    }

    #[test]
    fn test_snapshot_from_json() {
        let snapshot = PageSnapshot::from_json(
            r#"{
                "satisfied": ["https://example.org/static/css/base.css"],
                "candidates": ["/static/css/home/home.css"],
                "chrome": ["site-header", "site-nav"],
                "sections": ["hero-section", "about-section"]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.satisfied.len(), 1);
        assert_eq!(snapshot.candidates[0].as_str(), "/static/css/home/home.css");
        assert_eq!(snapshot.sections.len(), 2);

        let err = PageSnapshot::from_json("not json").unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Snapshot(_))));
    }
}
