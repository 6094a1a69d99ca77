//! Mode-text registry handlers (get, update, list-all).

use axum::extract::{Path, State};
use axum::Json;

use toric_core::Mode;

use crate::error::ApiError;
use crate::schema::texts::{
    AllTextsResponse, TextContentResponse, UpdateTextRequest, UpdateTextResponse,
};
use crate::state::AppState;

/// Returns the stored text for one mode, defaulting to `""`.
///
/// `GET /api/text/{mode}`
pub async fn get_text(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Json<TextContentResponse>, ApiError> {
    let mode: Mode = mode.parse()?;
    let store = state.store.lock().await;
    let texts = store.load_texts()?;
    Ok(Json(TextContentResponse {
        content: texts.get(mode).to_string(),
    }))
}

/// Overwrites the stored text for one mode unconditionally.
///
/// The registry is read-modify-written as a whole document; only the
/// addressed key changes.
///
/// `PUT /api/text/{mode}`
pub async fn update_text(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(req): Json<UpdateTextRequest>,
) -> Result<Json<UpdateTextResponse>, ApiError> {
    let mode: Mode = mode.parse()?;
    let mut store = state.store.lock().await;
    let mut texts = store.load_texts()?;
    texts.set(mode, req.content);
    store.save_texts(&texts)?;
    Ok(Json(UpdateTextResponse {
        status: "success".to_string(),
        mode,
    }))
}

/// Returns all four modes' current content in one object.
///
/// `GET /api/texts`
pub async fn all_texts(
    State(state): State<AppState>,
) -> Result<Json<AllTextsResponse>, ApiError> {
    let store = state.store.lock().await;
    let texts = store.load_texts()?;
    Ok(Json(AllTextsResponse::from_texts(&texts)))
}
