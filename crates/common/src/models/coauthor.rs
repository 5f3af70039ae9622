//! Co-authorship entities

use serde::{Deserialize, Serialize};

/// One coauthor of a professor with the number of joint publications.
/// Stored entries are ranked by collaboration count descending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoauthorEntry {
    #[serde(rename = "coauthor_name")]
    pub name: String,

    /// Number of joint publications
    pub times: u32,
}

/// A professor's full coauthor list as mined from the bibliography.
/// Directional: this is the owner's view; the reverse direction lives
/// in the coauthor's own record, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoauthorRecord {
    pub name: String,
    pub coauthors: Vec<CoauthorEntry>,
}
