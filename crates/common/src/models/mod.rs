//! Faculty data model
//!
//! Explicit typed records for everything the lookup store serves. The
//! source documents are open-ended nested JSON; deserializing into these
//! structs surfaces missing or misshapen fields at load time instead of
//! at render time.

mod coauthor;
mod professor;
mod publication;

pub use coauthor::{CoauthorEntry, CoauthorRecord};
pub use professor::{KeywordEntry, Professor};
pub use publication::{
    CategoryBucket, ConferenceCounts, ContributionSummary, Paper, PublicationRecord, YearBucket,
};
