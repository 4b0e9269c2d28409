//! Chronos cron scheduler endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use chronos::{
    deposit_preview, duration_options, estimate_cost_per_execution, expiration_from_deposit,
    frequency_options, prepare_cancel_job, prepare_create_job, prepare_update_job,
    summarize_job, BlockClock, CallPayload, CreateJobRequest, CronDepositPreview, CronJobInfo,
    CronJobSummary, GasParams, UpdateJobRequest,
};
use helios_core::constants::NATIVE_DECIMALS;
use helios_core::{parse_units, ChronosConfig};

use crate::dto::{
    ApiError, ApiFailure, CancelJobRequest, ChronosOptionsResponse, CreateJobResponse,
    EstimateRequest, ExpirationRequest, ExpirationResponse,
};
use crate::AppState;

/// Create Chronos routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(get_config))
        .route("/options", get(get_options))
        .route("/estimate", post(estimate))
        .route("/expiration", post(expiration))
        .route("/create", post(create_job))
        .route("/update", post(update_job))
        .route("/cancel", post(cancel_job))
        .route("/jobs/summary", post(job_summary))
}

/// GET /chronos/config - Effective scheduler configuration
pub async fn get_config(State(state): State<AppState>) -> Json<ChronosConfig> {
    Json(state.chronos_config().await)
}

/// GET /chronos/options - Frequency and duration presets in blocks
pub async fn get_options(State(state): State<AppState>) -> Json<ChronosOptionsResponse> {
    let config = state.chronos_config().await;
    Json(ChronosOptionsResponse {
        frequency: frequency_options(&config),
        duration: duration_options(&config),
    })
}

/// POST /chronos/estimate - Gas cost and deposit preview
pub async fn estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Json<CronDepositPreview> {
    let config = state.chronos_config().await;
    Json(deposit_preview(
        request.method_name.as_deref(),
        request.gas_price_wei,
        request.frequency,
        request.duration,
        &config,
    ))
}

/// POST /chronos/expiration - Expiration block funded by a deposit
pub async fn expiration(
    State(state): State<AppState>,
    Json(request): Json<ExpirationRequest>,
) -> Result<Json<ExpirationResponse>, ApiFailure> {
    let config = state.chronos_config().await;
    let deposit = parse_units(&request.deposit, NATIVE_DECIMALS).map_err(ApiError::from_protocol)?;

    // A preview without a known head counts from block 0
    let current_block = state.chain_head().await.unwrap_or(0);
    let cost = estimate_cost_per_execution(
        request.method_name.as_deref(),
        request.gas_price_wei,
        &GasParams::from_config(&config),
    );
    let estimate = expiration_from_deposit(
        deposit,
        request.frequency,
        cost,
        current_block,
        config.max_horizon_blocks,
    );

    Ok(Json(ExpirationResponse {
        duration_label: BlockClock::scheduler(&config).label_for(estimate.blocks),
        estimate,
        current_block,
        per_execution_cost: cost,
    }))
}

/// POST /chronos/create - Prepared createCron call
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<CreateJobResponse>, ApiFailure> {
    let config = state.chronos_config().await;
    let current_block = state.chain_head().await;

    let prepared = prepare_create_job(&request, current_block, &config).map_err(|e| {
        tracing::warn!(error = %e, "Rejected createCron request");
        ApiError::from_protocol(e)
    })?;

    Ok(Json(CreateJobResponse {
        payload: CallPayload::new(prepared.args.into(), &config),
        estimate: prepared.estimate,
        current_block: current_block.unwrap_or_default(),
    }))
}

/// POST /chronos/update - Prepared updateCron call
pub async fn update_job(
    State(state): State<AppState>,
    Json(request): Json<UpdateJobRequest>,
) -> Result<Json<CallPayload>, ApiFailure> {
    let config = state.chronos_config().await;
    let current_block = state.chain_head().await;

    let args = prepare_update_job(&request, current_block, &config).map_err(|e| {
        tracing::warn!(cron_id = request.cron_id, error = %e, "Rejected updateCron request");
        ApiError::from_protocol(e)
    })?;

    Ok(Json(CallPayload::new(args.into(), &config)))
}

/// POST /chronos/cancel - Prepared cancelCron call
pub async fn cancel_job(
    State(state): State<AppState>,
    Json(request): Json<CancelJobRequest>,
) -> Result<Json<CallPayload>, ApiFailure> {
    let config = state.chronos_config().await;
    let args = prepare_cancel_job(request.cron_id).map_err(ApiError::from_protocol)?;
    Ok(Json(CallPayload::new(args.into(), &config)))
}

/// POST /chronos/jobs/summary - Remaining lifetime and funding of a job
pub async fn job_summary(
    State(state): State<AppState>,
    Json(job): Json<CronJobInfo>,
) -> Json<CronJobSummary> {
    let config = state.chronos_config().await;
    let current_block = state.chain_head().await.unwrap_or(0);
    Json(summarize_job(&job, current_block, &config))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{create_app, AppState};

    const TARGET: &str = "0x1111111111111111111111111111111111111111";

    async fn call(state: AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = create_app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_estimate_reference_schedule() {
        // mint every 60 blocks for 7200 blocks at the base cost
        let (status, body) = call(
            AppState::new(),
            "POST",
            "/chronos/estimate",
            Some(json!({"methodName": "mint", "frequency": 60, "duration": 7200})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["executions"], 120);
        assert_eq!(body["costPerExecutionWei"], "150000000000000");
        assert_eq!(body["totalCostWei"], "18000000000000000");
        assert_eq!(body["depositWei"], "21600000000000000");
        assert_eq!(body["depositHls"], "0.0216");
    }

    #[tokio::test]
    async fn test_options() {
        let (status, body) = call(AppState::new(), "GET", "/chronos/options", None).await;
        assert_eq!(status, StatusCode::OK);
        // 1 minute on the 15 s selector clock
        assert_eq!(body["frequency"][0]["blocks"], 4);
        // 1 hour on the 3 s scheduler clock
        assert_eq!(body["duration"][0]["blocks"], 1_200);
    }

    #[tokio::test]
    async fn test_create_requires_chain_head() {
        let (status, body) = call(
            AppState::new(),
            "POST",
            "/chronos/create",
            Some(json!({
                "targetAddress": TARGET,
                "abiJson": "[]",
                "methodName": "ping",
                "frequency": 5,
                "expirationOffset": 1000,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "missing_prerequisite");
    }

    #[tokio::test]
    async fn test_create_job() {
        let state = AppState::new();
        state.set_chain_head(1_000).await.unwrap();

        let (status, body) = call(
            state,
            "POST",
            "/chronos/create",
            Some(json!({
                "targetAddress": TARGET,
                "abiJson": "[]",
                "methodName": "mint",
                "tokenAmount": "100",
                "frequency": 10,
                "expirationOffset": 10000,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["call"], "createCron");
        assert_eq!(body["method"], "createCron");
        assert_eq!(body["currentBlock"], 1_000);
        assert_eq!(body["args"]["expirationBlock"], 11_000);
        assert_eq!(body["args"]["methodArgs"], json!(["100000000000000000000"]));
        assert_eq!(body["positional"].as_array().unwrap().len(), 9);
        assert_eq!(body["estimate"]["executions"], 1_000);
    }

    #[tokio::test]
    async fn test_create_job_validation_failure() {
        let state = AppState::new();
        state.set_chain_head(1_000).await.unwrap();

        let (status, body) = call(
            state,
            "POST",
            "/chronos/create",
            Some(json!({
                "targetAddress": TARGET,
                "abiJson": "[]",
                "methodName": "ping",
                "frequency": 0,
                "expirationOffset": 20000,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "input_out_of_range");
        let reasons = body["reasons"].as_array().unwrap();
        assert!(reasons.contains(&json!("frequency must be >= 1")));
        assert!(reasons.contains(&json!("expiration offset exceeds maximum")));
    }

    #[tokio::test]
    async fn test_update_and_cancel() {
        let state = AppState::new();
        state.set_chain_head(500).await.unwrap();

        let (status, body) = call(
            state.clone(),
            "POST",
            "/chronos/update",
            Some(json!({
                "cronId": 7,
                "frequency": 240,
                "expirationOffset": 7200,
                "source": "preset",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["call"], "updateCron");
        assert_eq!(body["args"]["newExpirationBlock"], 7_700);

        let (status, body) = call(
            state.clone(),
            "POST",
            "/chronos/cancel",
            Some(json!({"cronId": 7})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["positional"], json!(["7"]));

        let (status, body) = call(state, "POST", "/chronos/cancel", Some(json!({"cronId": -1}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["reasons"], json!(["invalid cron id"]));
    }

    #[tokio::test]
    async fn test_expiration_preview() {
        let state = AppState::new();
        state.set_chain_head(100).await.unwrap();

        // 0.0216 HLS at 1.5e14 per mint covers 144 executions
        let (status, body) = call(
            state,
            "POST",
            "/chronos/expiration",
            Some(json!({"deposit": "0.0216", "frequency": 60, "methodName": "mint"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["possibleExecutions"], 144);
        assert_eq!(body["blocks"], 8_640);
        assert_eq!(body["expirationBlock"], 8_740);
        assert_eq!(body["durationLabel"], "7 hours");
    }

    #[tokio::test]
    async fn test_expiration_bad_deposit() {
        let (status, body) = call(
            AppState::new(),
            "POST",
            "/chronos/expiration",
            Some(json!({"deposit": "1.2.3", "frequency": 60})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_amount");
    }

    #[tokio::test]
    async fn test_job_summary() {
        let state = AppState::new();
        state.set_chain_head(1_000).await.unwrap();

        let (status, body) = call(
            state,
            "POST",
            "/chronos/jobs/summary",
            Some(json!({
                "cronId": 3,
                "method": "ping",
                "frequency": 10,
                "expirationBlock": 2_000,
                "walletBalanceWei": "500000000000000",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headKnown"], true);
        assert_eq!(body["isExpired"], false);
        assert_eq!(body["blocksRemaining"], 1_000);
        assert_eq!(body["scheduledExecutions"], 100);
        assert_eq!(body["fundableExecutions"], 5);
        assert_eq!(body["underfunded"], true);
    }

    #[tokio::test]
    async fn test_job_summary_before_chain_head() {
        let (status, body) = call(
            AppState::new(),
            "POST",
            "/chronos/jobs/summary",
            Some(json!({
                "cronId": 3,
                "method": "ping",
                "frequency": 10,
                "expirationBlock": 2_000,
                "walletBalanceWei": "500000000000000",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headKnown"], false);
        assert_eq!(body["isExpired"], false);
        assert_eq!(body["blocksRemaining"], 0);
        assert_eq!(body["scheduledExecutions"], 0);
        assert_eq!(body["underfunded"], false);
    }
}
