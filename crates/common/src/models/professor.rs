//! Professor roster entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One faculty member. Professors are keyed by their full name across
/// every document in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub name: String,

    pub email: String,

    /// Faculty directory page
    pub profile_url: Option<String>,

    /// Bibliography page (publication index)
    pub bibliography_url: Option<String>,

    /// Personal website
    pub website_url: Option<String>,

    pub biography: String,

    /// All-time citation count, when known
    pub citations: Option<u64>,

    /// Total publication count, when known
    pub publications_count: Option<u32>,

    /// Publications at top-ranked conferences, when known
    pub top_conference_count: Option<u32>,

    /// Research keywords this professor is associated with
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One row of the keyword lookup table: a keyword and every professor
/// associated with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub names: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_profile_fields() {
        let raw = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.edu",
            "profile_url": "https://faculty.example.edu/ada",
            "bibliography_url": null,
            "website_url": null,
            "biography": "Works on analytical engines.",
            "citations": 1024,
            "publications_count": null,
            "top_conference_count": null,
            "keywords": ["computing"]
        }"#;

        let prof: Professor = serde_json::from_str(raw).unwrap();
        assert_eq!(prof.name, "Ada Lovelace");
        assert_eq!(prof.citations, Some(1024));
        assert!(prof.bibliography_url.is_none());
        assert!(prof.publications_count.is_none());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        // No email: the record is malformed, not silently defaulted
        let raw = r#"{"name": "Ada Lovelace", "biography": ""}"#;
        assert!(serde_json::from_str::<Professor>(raw).is_err());
    }
}
