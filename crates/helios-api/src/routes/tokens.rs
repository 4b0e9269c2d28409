//! ERC20 token factory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use erc20::{build_create_token_args, CreateTokenRequest, DeployedToken, PreparedTokenDeployment};
use helios_core::parse_address;

use crate::dto::{ApiError, ApiFailure};
use crate::AppState;

/// Create token routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tokens).post(record_token))
        .route("/create", post(create_token))
        .route("/:address", get(get_token))
}

/// POST /tokens/create - Prepared createErc20 call
pub async fn create_token(
    State(state): State<AppState>,
    Json(request): Json<CreateTokenRequest>,
) -> Result<Json<PreparedTokenDeployment>, ApiFailure> {
    let config = state.config().await;
    let prepared = build_create_token_args(&request, &config.erc20).map_err(|e| {
        tracing::warn!(symbol = %request.symbol, error = %e, "Rejected token request");
        ApiError::from_protocol(e)
    })?;
    Ok(Json(prepared))
}

/// GET /tokens - Tokens deployed through this service
pub async fn list_tokens(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeployedToken>>, ApiFailure> {
    let tokens = state.tokens().list().map_err(ApiError::from_protocol)?;
    Ok(Json(tokens))
}

/// POST /tokens - Record a mined deployment
pub async fn record_token(
    State(state): State<AppState>,
    Json(token): Json<DeployedToken>,
) -> Result<(StatusCode, Json<DeployedToken>), ApiFailure> {
    state
        .tokens()
        .record(token.clone())
        .map_err(ApiError::from_protocol)?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// GET /tokens/:address - Single token by contract address
pub async fn get_token(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<DeployedToken>, ApiFailure> {
    let address = parse_address(&address).map_err(ApiError::from_protocol)?;
    let token = state
        .tokens()
        .get(&address)
        .map_err(ApiError::from_protocol)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::not_found(format!("No token recorded at {}", address))),
            )
        })?;
    Ok(Json(token))
}
