//! Polytope storage handlers (save, list, get, delete).

use axum::extract::{Path, State};
use axum::Json;

use toric_core::{sanitize_name, Polytope};

use crate::error::ApiError;
use crate::schema::polytopes::{
    DeletePolytopeResponse, PolytopeListResponse, SavePolytopeRequest, SavePolytopeResponse,
};
use crate::state::AppState;

/// Saves (upserts) a polytope.
///
/// `POST /api/polytopes`
pub async fn save_polytope(
    State(state): State<AppState>,
    Json(req): Json<SavePolytopeRequest>,
) -> Result<Json<SavePolytopeResponse>, ApiError> {
    if sanitize_name(&req.name).is_empty() {
        return Err(ApiError::Validation(format!(
            "polytope name '{}' has no filesystem-safe characters",
            req.name
        )));
    }
    let mut store = state.store.lock().await;
    let polytope = store.put_polytope(&req.name, req.lattice_type, req.points)?;
    Ok(Json(SavePolytopeResponse {
        status: "success".to_string(),
        polytope,
    }))
}

/// Lists summaries of all stored polytopes, sorted by name.
///
/// `GET /api/polytopes`
pub async fn list_polytopes(
    State(state): State<AppState>,
) -> Result<Json<PolytopeListResponse>, ApiError> {
    let store = state.store.lock().await;
    let polytopes = store.list_polytopes()?;
    Ok(Json(PolytopeListResponse { polytopes }))
}

/// Returns the full stored record for one polytope.
///
/// `GET /api/polytopes/{name}`
pub async fn get_polytope(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Polytope>, ApiError> {
    let store = state.store.lock().await;
    match store.get_polytope(&name)? {
        Some(polytope) => Ok(Json(polytope)),
        None => Err(ApiError::NotFound(format!("Polytope '{}' not found", name))),
    }
}

/// Deletes one polytope.
///
/// `DELETE /api/polytopes/{name}`
pub async fn delete_polytope(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeletePolytopeResponse>, ApiError> {
    let mut store = state.store.lock().await;
    if !store.delete_polytope(&name)? {
        return Err(ApiError::NotFound(format!("Polytope '{}' not found", name)));
    }
    Ok(Json(DeletePolytopeResponse {
        status: "success".to_string(),
        message: format!("Polytope '{}' deleted", name),
    }))
}
