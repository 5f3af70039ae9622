//! Professor roster handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use facdash_analytics::aggregate;
use facdash_common::{
    errors::{AppError, Result},
    store::FacultyStore,
};

/// Request to filter the roster by research keywords
#[derive(Debug, Deserialize, Validate)]
pub struct FilterProfessorsRequest {
    /// Selected keywords; an empty selection matches nobody
    #[validate(length(max = 50))]
    pub keywords: Vec<String>,
}

#[derive(Serialize)]
pub struct FilterProfessorsResponse {
    pub professors: Vec<String>,
    pub total: usize,
}

/// Professors associated with any of the selected keywords
pub async fn filter_professors(
    State(state): State<AppState>,
    Json(request): Json<FilterProfessorsRequest>,
) -> Result<Json<FilterProfessorsResponse>> {
    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: Some("keywords".to_string()),
    })?;

    let names = aggregate::professors_for_keywords(state.store.as_ref(), &request.keywords).await?;

    let professors: Vec<String> = names.into_iter().collect();
    let total = professors.len();

    tracing::info!(
        keywords = request.keywords.len(),
        matched = total,
        "Roster filtered"
    );

    Ok(Json(FilterProfessorsResponse { professors, total }))
}

/// Profile card for one professor
#[derive(Serialize)]
pub struct ProfessorResponse {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibliography_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub biography: String,
    pub citations: Option<u64>,
    pub publications_count: Option<u32>,
    pub top_conference_count: Option<u32>,
    pub keywords: Vec<String>,
}

/// Get a professor's profile by name
pub async fn get_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProfessorResponse>> {
    let professor = state.store.professor_profile(&name).await?;

    Ok(Json(ProfessorResponse {
        name: professor.name,
        email: professor.email,
        profile_url: professor.profile_url,
        bibliography_url: professor.bibliography_url,
        website_url: professor.website_url,
        biography: professor.biography,
        citations: professor.citations,
        publications_count: professor.publications_count,
        top_conference_count: professor.top_conference_count,
        keywords: professor.keywords,
    }))
}

/// Research keywords of one professor
pub async fn get_keywords(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>> {
    let keywords = state.store.keywords_for_professor(&name).await?;
    Ok(Json(keywords))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TopCoauthorsQuery {
    /// How many coauthors to return
    #[serde(default = "default_coauthor_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: usize,
}

fn default_coauthor_limit() -> usize { 5 }

#[derive(Serialize)]
pub struct CoauthorRow {
    pub name: String,
    pub collaborations: u32,
}

#[derive(Serialize)]
pub struct TopCoauthorsResponse {
    pub name: String,
    pub coauthors: Vec<CoauthorRow>,
}

/// A professor's most frequent coauthors.
///
/// A professor without a coauthor record gets an empty list, not an
/// error — the coauthor panel renders as an empty state.
pub async fn top_coauthors(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<TopCoauthorsQuery>,
) -> Result<Json<TopCoauthorsResponse>> {
    query.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: Some("limit".to_string()),
    })?;

    let records = state.store.coauthor_records().await?;

    let coauthors = records
        .iter()
        .find(|record| record.name == name)
        .map(|record| aggregate::top_coauthors(record, query.limit))
        .unwrap_or_default()
        .into_iter()
        .map(|entry| CoauthorRow {
            name: entry.name,
            collaborations: entry.times,
        })
        .collect();

    Ok(Json(TopCoauthorsResponse { name, coauthors }))
}
