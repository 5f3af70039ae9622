//! Publication list shaping
//!
//! Year-range filtering, category-major regrouping, and the flattened
//! row lists behind the publication charts.

use facdash_common::models::{
    CoauthorEntry, CoauthorRecord, ConferenceCounts, ContributionSummary, Paper,
    PublicationRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keep only the year buckets inside `[min_year, max_year]` inclusive.
///
/// Bucket order, category order, and paper order are preserved from the
/// source record.
pub fn filter_years(record: &PublicationRecord, min_year: i32, max_year: i32) -> PublicationRecord {
    PublicationRecord {
        name: record.name.clone(),
        years: record
            .years
            .iter()
            .filter(|bucket| bucket.year >= min_year && bucket.year <= max_year)
            .cloned()
            .collect(),
    }
}

/// Papers of one category in one year, most recent paper first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryYear {
    pub year: i32,
    pub papers: Vec<Paper>,
}

/// All of one category's papers across the years, most recent year first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub years: Vec<CategoryYear>,
}

/// Invert the year-major record into category-major groups.
///
/// Years run most-recent-first within each category; papers within a
/// year are reversed from the chronological-ascending source order so
/// the newest sits on top. Categories appear in order of first
/// appearance during that scan. Every source paper appears exactly
/// once.
pub fn group_by_category(record: &PublicationRecord) -> Vec<CategoryGroup> {
    let mut buckets: Vec<_> = record.years.iter().collect();
    buckets.sort_by(|a, b| b.year.cmp(&a.year));

    let mut groups: Vec<CategoryGroup> = Vec::new();
    for bucket in buckets {
        for category in &bucket.categories {
            let idx = match groups.iter().position(|g| g.category == category.category) {
                Some(idx) => idx,
                None => {
                    groups.push(CategoryGroup {
                        category: category.category.clone(),
                        years: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            groups[idx].years.push(CategoryYear {
                year: bucket.year,
                papers: category.papers.iter().rev().cloned().collect(),
            });
        }
    }
    groups
}

/// All non-null paper titles inside the inclusive year range, joined
/// into one string. Feeds the word cloud; word order carries no
/// meaning beyond determinism.
pub fn title_text(record: &PublicationRecord, min_year: i32, max_year: i32) -> String {
    let titles: Vec<&str> = record
        .years
        .iter()
        .filter(|bucket| bucket.year >= min_year && bucket.year <= max_year)
        .flat_map(|bucket| bucket.categories.iter())
        .flat_map(|category| category.papers.iter())
        .filter_map(|paper| paper.title.as_deref())
        .collect();

    titles.join(" ")
}

/// The first `limit` coauthors of a record. Records store coauthors
/// ranked by collaboration count descending, so no re-sort happens
/// here.
pub fn top_coauthors(record: &CoauthorRecord, limit: usize) -> Vec<CoauthorEntry> {
    record.coauthors.iter().take(limit).cloned().collect()
}

/// One chart row: a year with its per-category (or per-tier) counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRow {
    pub year: i32,
    pub counts: BTreeMap<String, u32>,
}

/// Flatten a contribution summary into rows ordered by ascending year
/// (stacked bar chart input)
pub fn contribution_rows(summary: &ContributionSummary) -> Vec<ContributionRow> {
    summary
        .num_contributions
        .iter()
        .map(|(&year, counts)| ContributionRow {
            year,
            counts: counts.clone(),
        })
        .collect()
}

/// Flatten conference tier counts into rows ordered by ascending year
/// (stacked area chart input)
pub fn conference_rows(counts: &ConferenceCounts) -> Vec<ContributionRow> {
    counts
        .counts
        .iter()
        .map(|(&year, tiers)| ContributionRow {
            year,
            counts: tiers.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use facdash_common::models::{CategoryBucket, YearBucket};

    fn paper(title: &str) -> Paper {
        Paper {
            title: Some(title.to_string()),
            coauthors: vec![],
            venue: "VENUE".to_string(),
            url: format!("https://example.org/{title}"),
        }
    }

    fn untitled() -> Paper {
        Paper {
            title: None,
            coauthors: vec![],
            venue: "VENUE".to_string(),
            url: "https://example.org/untitled".to_string(),
        }
    }

    fn record() -> PublicationRecord {
        PublicationRecord {
            name: "Ada".to_string(),
            years: vec![
                YearBucket {
                    year: 2019,
                    categories: vec![
                        CategoryBucket {
                            category: "Journal Articles".to_string(),
                            papers: vec![paper("older"), paper("newer")],
                        },
                        CategoryBucket {
                            category: "Editorship".to_string(),
                            papers: vec![paper("volume")],
                        },
                    ],
                },
                YearBucket {
                    year: 2021,
                    categories: vec![CategoryBucket {
                        category: "Journal Articles".to_string(),
                        papers: vec![paper("latest"), untitled()],
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_year_filter_is_inclusive() {
        let filtered = filter_years(&record(), 2019, 2021);
        assert_eq!(filtered.years.len(), 2);

        let filtered = filter_years(&record(), 2020, 2021);
        assert_eq!(filtered.years.len(), 1);
        assert_eq!(filtered.years[0].year, 2021);

        let filtered = filter_years(&record(), 2015, 2018);
        assert!(filtered.years.is_empty());
    }

    #[test]
    fn test_single_year_range_returns_exactly_that_bucket() {
        let filtered = filter_years(&record(), 2019, 2019);
        assert_eq!(filtered.years.len(), 1);
        assert_eq!(filtered.years[0].year, 2019);
        // Category and paper order untouched
        assert_eq!(filtered.years[0].categories[0].papers[0].title.as_deref(), Some("older"));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let filtered = filter_years(&record(), 2021, 2019);
        assert!(filtered.years.is_empty());
    }

    #[test]
    fn test_group_by_category_orders_and_reverses() {
        let groups = group_by_category(&record());

        // First appearance while scanning 2021 -> 2019
        assert_eq!(groups[0].category, "Journal Articles");
        assert_eq!(groups[1].category, "Editorship");

        let journal = &groups[0];
        assert_eq!(journal.years[0].year, 2021);
        assert_eq!(journal.years[1].year, 2019);

        // Papers reversed within each year: newest on top
        assert!(journal.years[0].papers[0].title.is_none());
        assert_eq!(journal.years[0].papers[1].title.as_deref(), Some("latest"));
        assert_eq!(journal.years[1].papers[0].title.as_deref(), Some("newer"));
        assert_eq!(journal.years[1].papers[1].title.as_deref(), Some("older"));
    }

    #[test]
    fn test_group_by_category_preserves_every_paper_once() {
        let source = record();
        let groups = group_by_category(&source);

        let grouped_count: usize = groups
            .iter()
            .flat_map(|g| g.years.iter())
            .map(|y| y.papers.len())
            .sum();
        assert_eq!(grouped_count, source.paper_count());
    }

    #[test]
    fn test_title_text_skips_null_titles() {
        let text = title_text(&record(), 2019, 2021);
        assert_eq!(text, "older newer volume latest");

        let text = title_text(&record(), 2021, 2021);
        assert_eq!(text, "latest");
    }

    #[test]
    fn test_top_coauthors_slices_stored_ranking() {
        let record = CoauthorRecord {
            name: "Ada".to_string(),
            coauthors: vec![
                CoauthorEntry { name: "Charles".to_string(), times: 7 },
                CoauthorEntry { name: "Mary".to_string(), times: 2 },
                CoauthorEntry { name: "Luigi".to_string(), times: 1 },
            ],
        };

        let top = top_coauthors(&record, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Charles");
        assert_eq!(top[1].name, "Mary");

        assert_eq!(top_coauthors(&record, 10).len(), 3);
    }

    #[test]
    fn test_contribution_rows_ascend_by_year() {
        let mut by_year = BTreeMap::new();
        by_year.insert(2021, BTreeMap::from([("Journal Articles".to_string(), 3u32)]));
        by_year.insert(2019, BTreeMap::from([("Editorship".to_string(), 1u32)]));

        let summary = ContributionSummary {
            name: "Ada".to_string(),
            num_contributions: by_year,
        };

        let rows = contribution_rows(&summary);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2019);
        assert_eq!(rows[1].year, 2021);
        assert_eq!(rows[1].counts["Journal Articles"], 3);
    }

    #[test]
    fn test_conference_rows_share_row_shape() {
        let mut by_year = BTreeMap::new();
        by_year.insert(
            2020,
            BTreeMap::from([("A*".to_string(), 2u32), ("B".to_string(), 1u32)]),
        );

        let counts = ConferenceCounts { name: "Ada".to_string(), counts: by_year };
        let rows = conference_rows(&counts);
        assert_eq!(rows[0].year, 2020);
        assert_eq!(rows[0].counts["A*"], 2);
    }
}
