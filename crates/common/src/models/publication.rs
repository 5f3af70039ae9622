//! Publication record entities
//!
//! A professor's publication history is year-major: an ordered list of
//! year buckets, each holding ordered category buckets, each holding
//! papers in chronological-ascending source order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single paper. Titles are nullable in the upstream bibliography data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: Option<String>,

    /// Coauthor names as they appear in the bibliography
    #[serde(default)]
    pub coauthors: Vec<String>,

    /// Conference or venue name
    pub venue: String,

    pub url: String,
}

/// Papers of one category within a year
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub category: String,
    pub papers: Vec<Paper>,
}

/// All papers of one year, grouped by category in source order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBucket {
    pub year: i32,
    pub categories: Vec<CategoryBucket>,
}

/// A professor's full publication history. Owned by exactly one
/// professor, keyed by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub name: String,
    pub years: Vec<YearBucket>,
}

impl PublicationRecord {
    /// Earliest and latest year present, if any
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.years.iter().map(|b| b.year).min()?;
        let max = self.years.iter().map(|b| b.year).max()?;
        Some((min, max))
    }

    /// Total number of papers across all years and categories
    pub fn paper_count(&self) -> usize {
        self.years
            .iter()
            .flat_map(|y| y.categories.iter())
            .map(|c| c.papers.len())
            .sum()
    }
}

/// Per-year, per-category publication counts for one professor.
/// Feeds the stacked bar chart only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionSummary {
    pub name: String,
    pub num_contributions: BTreeMap<i32, BTreeMap<String, u32>>,
}

/// Per-year, per-tier conference publication counts for one professor.
/// Feeds the stacked area chart only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceCounts {
    pub name: String,
    pub counts: BTreeMap<i32, BTreeMap<String, u32>>,
}
