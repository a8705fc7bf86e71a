//! Liveness and history endpoints.
//!
//! The web surface is intentionally thin: a liveness check used by process
//! supervisors and a read-only posting-history passthrough. Correctness of
//! the automation lives in the reconciler, not here.

mod routes;

pub use routes::{AppState, create_router, serve};
