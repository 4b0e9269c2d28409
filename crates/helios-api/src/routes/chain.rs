//! Chain head endpoints
//!
//! The frontend polls its wallet provider for the latest block and reports
//! it here. Handlers that need a current block read it from [`AppState`].

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::dto::{ApiError, ApiFailure, ChainHeadResponse, SetChainHeadRequest};
use crate::AppState;

/// Create chain routes
pub fn router() -> Router<AppState> {
    Router::new().route("/head", get(get_head).post(set_head))
}

/// GET /chain/head - Last reported block
pub async fn get_head(State(state): State<AppState>) -> Json<ChainHeadResponse> {
    Json(ChainHeadResponse {
        current_block: state.chain_head().await,
    })
}

/// POST /chain/head - Report a new block
pub async fn set_head(
    State(state): State<AppState>,
    Json(request): Json<SetChainHeadRequest>,
) -> Result<Json<ChainHeadResponse>, ApiFailure> {
    let height = state
        .set_chain_head(request.current_block)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(e.to_string()))))?;

    Ok(Json(ChainHeadResponse {
        current_block: Some(height),
    }))
}
