//! Keyword handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::AppState;
use facdash_analytics::aggregate::{self, KeywordCount};
use facdash_common::{
    errors::{AppError, Result},
    store::FacultyStore,
};

/// Every distinct research keyword, for the topic selector
pub async fn list_keywords(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let keywords = state.store.list_keywords().await?;
    Ok(Json(keywords))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TopKeywordsQuery {
    /// How many keywords to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: usize,
}

fn default_limit() -> usize { 10 }

/// Keywords ranked by the number of professors researching them
pub async fn top_keywords(
    State(state): State<AppState>,
    Query(query): Query<TopKeywordsQuery>,
) -> Result<Json<Vec<KeywordCount>>> {
    query.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: Some("limit".to_string()),
    })?;

    let entries = state.store.keyword_entries().await?;
    Ok(Json(aggregate::top_keywords(&entries, query.limit)))
}
