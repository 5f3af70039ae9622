//! Co-authorship graph handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::AppState;
use facdash_analytics::collab::{CoauthorAdjacency, CollabEdge};
use facdash_common::{errors::Result, metrics, store::FacultyStore};

#[derive(Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// The whole-faculty co-authorship network
#[derive(Serialize)]
pub struct GlobalGraphResponse {
    pub nodes: Vec<String>,
    pub edges: Vec<CollabEdge>,
    pub stats: GraphStats,
}

/// One professor's collaborator neighborhood
#[derive(Serialize)]
pub struct NeighborhoodGraphResponse {
    pub center: String,
    pub nodes: Vec<String>,
    pub edges: Vec<CollabEdge>,
    pub stats: GraphStats,
}

/// Weighted co-authorship graph over the full roster
pub async fn global_graph(State(state): State<AppState>) -> Result<Json<GlobalGraphResponse>> {
    let records = state.store.coauthor_records().await?;
    let graph = CoauthorAdjacency::from_records(&records).global_graph();

    metrics::record_graph_build("global", graph.edge_count());
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Global collaboration graph derived"
    );

    let stats = GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
    };

    Ok(Json(GlobalGraphResponse {
        nodes: graph.nodes,
        edges: graph.edges,
        stats,
    }))
}

/// Induced subgraph around one professor: their direct collaborators
/// plus the collaboration strength among those collaborators. Always
/// contains the center, even with zero recorded collaborators.
pub async fn neighborhood_graph(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<NeighborhoodGraphResponse>> {
    let records = state.store.coauthor_records().await?;
    let graph = CoauthorAdjacency::from_records(&records).neighborhood_graph(&name);

    metrics::record_graph_build("neighborhood", graph.edge_count());
    tracing::debug!(
        center = %name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Neighborhood collaboration graph derived"
    );

    let stats = GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
    };

    Ok(Json(NeighborhoodGraphResponse {
        center: name,
        nodes: graph.nodes,
        edges: graph.edges,
        stats,
    }))
}
