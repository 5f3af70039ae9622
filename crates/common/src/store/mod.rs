//! Faculty lookup store
//!
//! The read-only data provider behind every dashboard render. Keyed by
//! professor name or keyword; no writes, no caching — callers re-read
//! per render so the page always reflects the documents on disk.
//!
//! The store is constructed once at startup and passed around in app
//! state; nothing in this crate holds it as module-level global state.

mod warehouse;

pub use warehouse::JsonWarehouse;

use crate::errors::Result;
use crate::models::{
    CoauthorRecord, ConferenceCounts, ContributionSummary, KeywordEntry, Professor,
    PublicationRecord,
};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Read-only lookup service over the faculty roster, keyword table,
/// publication records, and co-authorship records.
#[async_trait]
pub trait FacultyStore: Send + Sync {
    /// Cheap reachability check for readiness probes
    async fn probe(&self) -> Result<()>;

    /// Every distinct research keyword, sorted
    async fn list_keywords(&self) -> Result<Vec<String>>;

    /// The full keyword -> professors lookup table
    async fn keyword_entries(&self) -> Result<Vec<KeywordEntry>>;

    /// Roster entry for one professor; `ProfessorNotFound` if unknown
    async fn professor_profile(&self, name: &str) -> Result<Professor>;

    /// Research keywords of one professor; `ProfessorNotFound` if unknown
    async fn keywords_for_professor(&self, name: &str) -> Result<Vec<String>>;

    /// Full publication history; `NoPublicationData` if there is no record
    async fn publications_detail(&self, name: &str) -> Result<PublicationRecord>;

    /// Per-year/category publication counts; `NoPublicationData` if absent
    async fn contributions_summary(&self, name: &str) -> Result<ContributionSummary>;

    /// Every professor's coauthor list
    async fn coauthor_records(&self) -> Result<Vec<CoauthorRecord>>;

    /// Per-year/tier conference counts; `NoPublicationData` if absent
    async fn conference_counts(&self, name: &str) -> Result<ConferenceCounts>;

    /// Broader research area -> specific keywords
    async fn research_area_taxonomy(&self) -> Result<BTreeMap<String, Vec<String>>>;
}
