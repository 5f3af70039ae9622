//! FacDash Analytics
//!
//! The derivation layer between the faculty lookup store and the
//! dashboard views:
//! - Co-authorship graph construction (global network and per-professor
//!   neighborhood subgraphs)
//! - Keyword filtering and keyword/area aggregations
//! - Publication list shaping (year ranges, category regrouping,
//!   chart row flattening)
//!
//! Everything here is a pure function of its inputs; nothing caches or
//! mutates shared state between renders.

pub mod aggregate;
pub mod collab;

pub use collab::{CoauthorAdjacency, CollabEdge, CollabGraph};
