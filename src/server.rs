//! HTTP adapter
//!
//! Thin marshaling layer over [`HierarchyService`]: route wiring, request
//! body shapes and the domain-error → status mapping. No hierarchy logic
//! lives here.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::application::HierarchyService;
use crate::domain::{DomainError, HierarchyId, Node, NodeId, NodeRequest};

/// Shared state behind the router.
///
/// A single reader-writer lock is the mutual-exclusion boundary required
/// by the store: writers are exclusive, readers never observe a partially
/// applied insertion.
#[derive(Clone, Default)]
pub struct AppState {
    service: Arc<RwLock<HierarchyService>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/hierarchies", post(create_hierarchy))
        .route("/hierarchies/:hierarchy_id/nodes", post(add_node))
        .route("/nodes/:node_id/stores", get(list_stores))
        .with_state(state)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err {
                DomainError::HierarchyNotFound
                | DomainError::ParentNotFound
                | DomainError::NodeNotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "orgtree",
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateHierarchyResponse {
    hierarchy_id: HierarchyId,
    root_id: NodeId,
}

async fn create_hierarchy(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateHierarchyResponse>) {
    let (hierarchy_id, root_id) = state.service.write().await.create_hierarchy();
    (
        StatusCode::CREATED,
        Json(CreateHierarchyResponse {
            hierarchy_id,
            root_id,
        }),
    )
}

/// Body of `POST /hierarchies/:hierarchy_id/nodes`.
///
/// All fields default so that a missing field surfaces as the matching
/// validation message rather than a framework-worded decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AddNodeBody {
    parent_id: String,
    #[serde(rename = "type")]
    node_type: String,
    name: String,
    number: String,
    address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddNodeResponse {
    node_id: NodeId,
}

async fn add_node(
    Path(hierarchy_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<AddNodeBody>,
) -> Result<(StatusCode, Json<AddNodeResponse>), ApiError> {
    // A malformed id cannot name any existing record
    let hierarchy_id: HierarchyId = hierarchy_id
        .parse()
        .map_err(|_| DomainError::HierarchyNotFound)?;
    let parent_id: NodeId = body
        .parent_id
        .parse()
        .map_err(|_| DomainError::ParentNotFound)?;

    let request = NodeRequest {
        node_type: body.node_type,
        name: body.name,
        number: body.number,
        address: body.address,
    };

    let node_id = state
        .service
        .write()
        .await
        .add_node(hierarchy_id, parent_id, &request)?;
    Ok((StatusCode::CREATED, Json(AddNodeResponse { node_id })))
}

async fn list_stores(
    Path(node_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Node>>, ApiError> {
    let node_id: NodeId = node_id.parse().map_err(|_| DomainError::NodeNotFound)?;
    let stores = state.service.read().await.list_stores_from(node_id)?;
    Ok(Json(stores))
}
