//! Utilities and middleware shared by the Axum applications in this
//! workspace.
//!
//! - [`errors`]: structured error responses ([`AppError`], [`ErrorResponse`])
//! - [`extractors`]: UUID path parameters and validated JSON bodies
//! - [`server`]: router assembly, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{UuidPath, ValidatedJson};
pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};
