//! Library surface of the reelquery server, exposed for integration tests.

pub mod config;
pub mod errors;
pub mod query_handlers;
pub mod routes;
pub mod state;

pub use state::AppState;
