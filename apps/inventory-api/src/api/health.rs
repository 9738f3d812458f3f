//! Application-specific health check handlers with a real database check.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http_common::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Readiness check endpoint that actually pings the database.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| format!("Database ping failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
