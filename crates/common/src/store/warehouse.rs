//! JSON document warehouse
//!
//! `FacultyStore` backed by a directory of JSON documents. Every call
//! re-reads the relevant document, so each render observes the data as
//! it currently is on disk. I/O failures surface as `LookupUnavailable`,
//! parse failures as `MalformedRecord`, missing keys as the matching
//! not-found variant.

use super::FacultyStore;
use crate::config::StoreConfig;
use crate::errors::{AppError, Result};
use crate::metrics;
use crate::models::{
    CoauthorRecord, ConferenceCounts, ContributionSummary, KeywordEntry, Professor,
    PublicationRecord,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Roster document: list of `Professor`
pub const PROFESSORS_DOC: &str = "professors.json";
/// Keyword lookup table: list of `KeywordEntry`
pub const KEYWORDS_DOC: &str = "keywords.json";
/// Publication histories: list of `PublicationRecord`
pub const PUBLICATIONS_DOC: &str = "publications.json";
/// Contribution counts: list of `ContributionSummary`
pub const CONTRIBUTIONS_DOC: &str = "contributions.json";
/// Coauthor lists: list of `CoauthorRecord`
pub const COAUTHORS_DOC: &str = "coauthors.json";
/// Conference tier counts: list of `ConferenceCounts`
pub const CONFERENCE_COUNTS_DOC: &str = "conference_counts.json";
/// Research area taxonomy: broader area -> specific keywords
pub const RESEARCH_AREAS_DOC: &str = "research_areas.json";

/// File-backed faculty store
#[derive(Clone)]
pub struct JsonWarehouse {
    data_dir: PathBuf,
}

impl JsonWarehouse {
    /// Open the warehouse, verifying the data directory exists
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let data_dir = config.data_dir.clone();

        let meta = std::fs::metadata(&data_dir).map_err(|e| AppError::LookupUnavailable {
            message: format!("data directory {}: {}", data_dir.display(), e),
        })?;
        if !meta.is_dir() {
            return Err(AppError::LookupUnavailable {
                message: format!("{} is not a directory", data_dir.display()),
            });
        }

        info!(data_dir = %data_dir.display(), "Opened faculty warehouse");
        Ok(Self { data_dir })
    }

    /// Open without validation; the first read reports any problem
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// Read and deserialize one document from the data directory
    async fn read_document<T: DeserializeOwned>(&self, document: &str) -> Result<T> {
        let path = self.data_dir.join(document);
        let start = Instant::now();

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                metrics::record_store_read(document, start, false);
                return Err(AppError::LookupUnavailable {
                    message: format!("reading {}: {}", path.display(), e),
                });
            }
        };

        let value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                metrics::record_store_read(document, start, false);
                return Err(AppError::MalformedRecord {
                    message: format!("parsing {}: {}", path.display(), e),
                });
            }
        };

        metrics::record_store_read(document, start, true);
        debug!(
            document,
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Document read"
        );

        Ok(value)
    }
}

#[async_trait]
impl FacultyStore for JsonWarehouse {
    async fn probe(&self) -> Result<()> {
        let meta = tokio::fs::metadata(&self.data_dir)
            .await
            .map_err(|e| AppError::LookupUnavailable {
                message: format!("data directory {}: {}", self.data_dir.display(), e),
            })?;

        if !meta.is_dir() {
            return Err(AppError::LookupUnavailable {
                message: format!("{} is not a directory", self.data_dir.display()),
            });
        }
        Ok(())
    }

    async fn list_keywords(&self) -> Result<Vec<String>> {
        let entries: Vec<KeywordEntry> = self.read_document(KEYWORDS_DOC).await?;

        // Distinct, sorted — the table may list a keyword more than once
        let keywords: BTreeSet<String> = entries.into_iter().map(|e| e.keyword).collect();
        Ok(keywords.into_iter().collect())
    }

    async fn keyword_entries(&self) -> Result<Vec<KeywordEntry>> {
        self.read_document(KEYWORDS_DOC).await
    }

    async fn professor_profile(&self, name: &str) -> Result<Professor> {
        let roster: Vec<Professor> = self.read_document(PROFESSORS_DOC).await?;

        roster
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AppError::ProfessorNotFound { name: name.to_string() })
    }

    async fn keywords_for_professor(&self, name: &str) -> Result<Vec<String>> {
        let profile = self.professor_profile(name).await?;
        Ok(profile.keywords)
    }

    async fn publications_detail(&self, name: &str) -> Result<PublicationRecord> {
        let records: Vec<PublicationRecord> = self.read_document(PUBLICATIONS_DOC).await?;

        records
            .into_iter()
            .find(|r| r.name == name)
            .ok_or_else(|| AppError::NoPublicationData { name: name.to_string() })
    }

    async fn contributions_summary(&self, name: &str) -> Result<ContributionSummary> {
        let summaries: Vec<ContributionSummary> = self.read_document(CONTRIBUTIONS_DOC).await?;

        summaries
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::NoPublicationData { name: name.to_string() })
    }

    async fn coauthor_records(&self) -> Result<Vec<CoauthorRecord>> {
        self.read_document(COAUTHORS_DOC).await
    }

    async fn conference_counts(&self, name: &str) -> Result<ConferenceCounts> {
        let counts: Vec<ConferenceCounts> = self.read_document(CONFERENCE_COUNTS_DOC).await?;

        counts
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AppError::NoPublicationData { name: name.to_string() })
    }

    async fn research_area_taxonomy(&self) -> Result<BTreeMap<String, Vec<String>>> {
        self.read_document(RESEARCH_AREAS_DOC).await
    }
}
