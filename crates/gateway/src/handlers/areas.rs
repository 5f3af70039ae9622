//! Research area handlers

use axum::{extract::State, Json};
use std::collections::BTreeMap;

use crate::AppState;
use facdash_analytics::aggregate::{self, AreaShare};
use facdash_common::{errors::Result, store::FacultyStore};

/// Broader research areas with their specific keywords
pub async fn taxonomy(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<String>>>> {
    let taxonomy = state.store.research_area_taxonomy().await?;
    Ok(Json(taxonomy))
}

/// Distinct professor counts per broader research area (pie chart rows)
pub async fn distribution(State(state): State<AppState>) -> Result<Json<Vec<AreaShare>>> {
    let taxonomy = state.store.research_area_taxonomy().await?;
    let entries = state.store.keyword_entries().await?;

    Ok(Json(aggregate::area_distribution(&taxonomy, &entries)))
}
