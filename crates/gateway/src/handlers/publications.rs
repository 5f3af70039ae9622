//! Publication list and chart-row handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use facdash_analytics::aggregate::{self, CategoryGroup, ContributionRow};
use facdash_common::{
    errors::Result,
    models::{PublicationRecord, YearBucket},
    store::FacultyStore,
};

/// Optional inclusive year range; bounds default to the record's own span
#[derive(Debug, Default, Deserialize)]
pub struct YearRangeQuery {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

impl YearRangeQuery {
    /// Resolve against a record's year span. `None` when the record has
    /// no years at all.
    fn resolve(&self, record: &PublicationRecord) -> Option<(i32, i32)> {
        let (earliest, latest) = record.year_span()?;
        Some((
            self.min_year.unwrap_or(earliest),
            self.max_year.unwrap_or(latest),
        ))
    }
}

#[derive(Serialize)]
pub struct PublicationsByYearResponse {
    pub name: String,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub years: Vec<YearBucket>,
}

/// Publication list, year-major, most recent year first
pub async fn by_year(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<YearRangeQuery>,
) -> Result<Json<PublicationsByYearResponse>> {
    let record = state.store.publications_detail(&name).await?;

    let (filtered, range) = match query.resolve(&record) {
        Some((min_year, max_year)) => (
            aggregate::filter_years(&record, min_year, max_year),
            Some((min_year, max_year)),
        ),
        None => (record, None),
    };

    let mut years = filtered.years;
    years.sort_by(|a, b| b.year.cmp(&a.year));

    Ok(Json(PublicationsByYearResponse {
        name: filtered.name,
        min_year: range.map(|(min, _)| min),
        max_year: range.map(|(_, max)| max),
        years,
    }))
}

#[derive(Serialize)]
pub struct PublicationsByCategoryResponse {
    pub name: String,
    pub categories: Vec<CategoryGroup>,
}

/// Publication list regrouped category-major
pub async fn by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PublicationsByCategoryResponse>> {
    let record = state.store.publications_detail(&name).await?;
    let categories = aggregate::group_by_category(&record);

    Ok(Json(PublicationsByCategoryResponse {
        name: record.name,
        categories,
    }))
}

#[derive(Serialize)]
pub struct TitleTextResponse {
    pub name: String,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub text: String,
}

/// Joined paper titles for the word cloud
pub async fn titles(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<YearRangeQuery>,
) -> Result<Json<TitleTextResponse>> {
    let record = state.store.publications_detail(&name).await?;

    let (text, range) = match query.resolve(&record) {
        Some((min_year, max_year)) => (
            aggregate::title_text(&record, min_year, max_year),
            Some((min_year, max_year)),
        ),
        None => (String::new(), None),
    };

    Ok(Json(TitleTextResponse {
        name: record.name,
        min_year: range.map(|(min, _)| min),
        max_year: range.map(|(_, max)| max),
        text,
    }))
}

#[derive(Serialize)]
pub struct ChartRowsResponse {
    pub name: String,
    pub rows: Vec<ContributionRow>,
}

/// Per-year contribution counts (stacked bar chart rows)
pub async fn contributions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ChartRowsResponse>> {
    let summary = state.store.contributions_summary(&name).await?;
    let rows = aggregate::contribution_rows(&summary);

    Ok(Json(ChartRowsResponse { name: summary.name, rows }))
}

/// Per-year conference tier counts (stacked area chart rows)
pub async fn conference_counts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ChartRowsResponse>> {
    let counts = state.store.conference_counts(&name).await?;
    let rows = aggregate::conference_rows(&counts);

    Ok(Json(ChartRowsResponse { name: counts.name, rows }))
}
