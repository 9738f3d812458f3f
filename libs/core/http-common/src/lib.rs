//! Shared HTTP plumbing for the inventory workspace.
//!
//! Domain crates build their own routers; this crate supplies the pieces
//! that are the same everywhere:
//!
//! - [`errors::AppError`] and the JSON [`errors::ErrorResponse`] body
//! - [`extractors::ValidatedJson`] for validated request bodies
//! - router assembly with OpenAPI docs, tracing, security headers and CORS
//! - server startup with graceful shutdown and a cleanup hook
//! - `/health` and readiness-check helpers
//!
//! # Example
//!
//! ```ignore
//! use app_config::{app_info, server::ServerConfig};
//! use http_common::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes)
//!     .await?
//!     .merge(health_router(app_info!()));
//! create_production_app(router, &server_config, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::ValidatedJson;
pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    HealthCheckFuture, ShutdownCoordinator,
};
