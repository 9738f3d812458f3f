//! Server assembly and lifecycle.
//!
//! ```ignore
//! use http_common::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes)
//!     .await?
//!     .merge(health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

mod app;
mod health;
mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{health_router, run_health_checks, HealthCheckFuture, HealthResponse};
pub use shutdown::{coordinated_shutdown, shutdown_signal, ShutdownCoordinator};
