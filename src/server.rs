//! HTTP endpoints for authoritative meal ledger calculation and plan generation.
//!
//! `POST /calculate-calories` accepts `{ meals, calories_burned? }` and answers
//! with the daily ledger, or `{ error }` with a non-2xx status.
//! `POST /generate-workout-plan` takes preferences plus an exercise catalogue
//! and returns the weekly plan.

use std::net::SocketAddr;

use axum::{
    Router,
    body::Bytes,
    http::{HeaderName, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{FitError, Result};
use crate::ledger::{aggregate_request, parse_request};
use crate::plan::{generate_plan, parse_plan_request};

/// Default port for `serve`.
pub const DEFAULT_PORT: u16 = 8787;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for FitError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// CORS policy for browser clients calling the endpoint directly.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("content-type"),
        ])
}

/// Creates the application router.
pub fn create_router() -> Router {
    Router::new()
        .route("/calculate-calories", post(calculate_calories))
        .route("/generate-workout-plan", post(generate_workout_plan))
        .route("/health", get(health))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Runs the web server until the process is stopped.
pub async fn run_server(port: u16) -> Result<()> {
    let app = create_router();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("ledger endpoint listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

// === Handlers ===

/// POST /calculate-calories
async fn calculate_calories(body: Bytes) -> std::result::Result<Response, FitError> {
    let request = parse_request(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected ledger request");
    })?;
    let ledger = aggregate_request(&request).inspect_err(|e| {
        tracing::warn!(error = %e, "ledger aggregation failed");
    })?;

    tracing::debug!(
        meals = ledger.meals.len(),
        total = ledger.total_calories,
        balance = ledger.balance,
        "ledger calculated"
    );

    Ok(Json(ledger).into_response())
}

/// POST /generate-workout-plan
async fn generate_workout_plan(body: Bytes) -> std::result::Result<Response, FitError> {
    let request = parse_plan_request(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected plan request");
    })?;
    let plan = generate_plan(&request);

    tracing::debug!(
        workouts = plan.workouts.len(),
        exercises = plan.exercise_count,
        "plan generated"
    );

    Ok(Json(plan).into_response())
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
