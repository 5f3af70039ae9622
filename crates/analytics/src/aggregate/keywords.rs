//! Keyword filtering and keyword/area aggregations

use facdash_common::errors::Result;
use facdash_common::models::KeywordEntry;
use facdash_common::store::FacultyStore;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Professors associated with any of the given keywords.
///
/// An empty keyword selection selects nobody, not everybody.
pub fn professors_matching(entries: &[KeywordEntry], keywords: &[String]) -> BTreeSet<String> {
    if keywords.is_empty() {
        return BTreeSet::new();
    }

    entries
        .iter()
        .filter(|entry| keywords.contains(&entry.keyword))
        .flat_map(|entry| entry.names.iter().cloned())
        .collect()
}

/// Store-backed variant of [`professors_matching`]: the page-level
/// filter, re-reading the keyword table per render.
pub async fn professors_for_keywords(
    store: &dyn FacultyStore,
    keywords: &[String],
) -> Result<BTreeSet<String>> {
    if keywords.is_empty() {
        return Ok(BTreeSet::new());
    }

    let entries = store.keyword_entries().await?;
    Ok(professors_matching(&entries, keywords))
}

/// One keyword with the number of professors researching it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub professors: usize,
}

/// Professor counts per keyword, most popular first (ties by name).
/// A keyword listed in several table rows counts distinct names once.
pub fn keyword_counts(entries: &[KeywordEntry]) -> Vec<KeywordCount> {
    let mut merged: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for entry in entries {
        merged
            .entry(entry.keyword.as_str())
            .or_default()
            .extend(entry.names.iter().map(String::as_str));
    }

    let mut counts: Vec<KeywordCount> = merged
        .into_iter()
        .map(|(keyword, names)| KeywordCount {
            keyword: keyword.to_string(),
            professors: names.len(),
        })
        .collect();

    counts.sort_by(|a, b| {
        b.professors
            .cmp(&a.professors)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    counts
}

/// The `limit` most popular keywords
pub fn top_keywords(entries: &[KeywordEntry], limit: usize) -> Vec<KeywordCount> {
    let mut counts = keyword_counts(entries);
    counts.truncate(limit);
    counts
}

/// One broader research area with its distinct professor count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaShare {
    pub area: String,
    pub professors: usize,
}

/// Distinct professor counts per broader research area, largest first.
///
/// A professor active in several keywords of the same area counts once
/// for that area; professors may count toward multiple areas.
pub fn area_distribution(
    taxonomy: &BTreeMap<String, Vec<String>>,
    entries: &[KeywordEntry],
) -> Vec<AreaShare> {
    let mut shares: Vec<AreaShare> = taxonomy
        .iter()
        .map(|(area, specifics)| {
            let names: BTreeSet<&str> = entries
                .iter()
                .filter(|entry| specifics.contains(&entry.keyword))
                .flat_map(|entry| entry.names.iter().map(String::as_str))
                .collect();
            AreaShare {
                area: area.clone(),
                professors: names.len(),
            }
        })
        .collect();

    shares.sort_by(|a, b| {
        b.professors
            .cmp(&a.professors)
            .then_with(|| a.area.cmp(&b.area))
    });
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(keyword: &str, names: &[&str]) -> KeywordEntry {
        KeywordEntry {
            keyword: keyword.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn table() -> Vec<KeywordEntry> {
        vec![
            entry("graphs", &["Ada", "Charles"]),
            entry("databases", &["Charles", "Edgar"]),
            entry("logic", &["Kurt"]),
        ]
    }

    #[test]
    fn test_empty_selection_selects_nobody() {
        assert!(professors_matching(&table(), &[]).is_empty());
    }

    #[test]
    fn test_union_semantics() {
        let names = professors_matching(
            &table(),
            &["graphs".to_string(), "databases".to_string()],
        );
        let expected: BTreeSet<String> =
            ["Ada", "Charles", "Edgar"].iter().map(|s| s.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_union_distributes_over_selection_union() {
        let k1 = vec!["graphs".to_string()];
        let k2 = vec!["logic".to_string()];
        let both = vec!["graphs".to_string(), "logic".to_string()];

        let entries = table();
        let mut unioned = professors_matching(&entries, &k1);
        unioned.extend(professors_matching(&entries, &k2));
        assert_eq!(unioned, professors_matching(&entries, &both));
    }

    #[test]
    fn test_unknown_keyword_matches_nothing() {
        assert!(professors_matching(&table(), &["quantum".to_string()]).is_empty());
    }

    #[test]
    fn test_keyword_counts_order_and_dedup() {
        let mut entries = table();
        // Second row for an existing keyword with an overlapping name
        entries.push(entry("graphs", &["Ada", "Grace"]));

        let counts = keyword_counts(&entries);
        assert_eq!(counts[0].keyword, "graphs");
        assert_eq!(counts[0].professors, 3); // Ada, Charles, Grace
        assert_eq!(counts[1].keyword, "databases");

        let top = top_keywords(&entries, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].keyword, "graphs");
    }

    #[tokio::test]
    async fn test_store_backed_filter_empty_short_circuits() {
        // An empty selection returns before the store is ever read, so
        // even an unreachable warehouse cannot fail it
        let store = facdash_common::store::JsonWarehouse::at("/definitely/not/a/real/dir");
        let names = professors_for_keywords(&store, &[]).await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_store_backed_filter_reads_keyword_table() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("keywords.json"),
            r#"[
                {"keyword": "graphs", "names": ["Ada", "Charles"]},
                {"keyword": "logic", "names": ["Kurt"]}
            ]"#,
        )
        .unwrap();

        let store = facdash_common::store::JsonWarehouse::at(dir.path());
        let names = professors_for_keywords(&store, &["graphs".to_string()])
            .await
            .unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("Ada"));
    }

    #[test]
    fn test_area_distribution_counts_distinct_professors() {
        let mut taxonomy = BTreeMap::new();
        taxonomy.insert(
            "Data Management".to_string(),
            vec!["graphs".to_string(), "databases".to_string()],
        );
        taxonomy.insert("Foundations".to_string(), vec!["logic".to_string()]);

        let shares = area_distribution(&taxonomy, &table());
        assert_eq!(shares[0].area, "Data Management");
        // Charles appears under both keywords but counts once
        assert_eq!(shares[0].professors, 3);
        assert_eq!(shares[1].area, "Foundations");
        assert_eq!(shares[1].professors, 1);
    }
}
