//! Aggregation and filtering layer
//!
//! Shapes store data into the ordered row lists and filtered
//! substructures the dashboard views render from.

mod keywords;
mod publications;

pub use keywords::{
    area_distribution, keyword_counts, professors_for_keywords, professors_matching,
    top_keywords, AreaShare, KeywordCount,
};
pub use publications::{
    conference_rows, contribution_rows, filter_years, group_by_category, title_text,
    top_coauthors, CategoryGroup, CategoryYear, ContributionRow,
};
