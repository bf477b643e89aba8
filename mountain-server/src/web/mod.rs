//! Web layer for the mountain info server.
//!
//! Provides the `/mountain-info` endpoint and a health check.

mod dto;
mod error;
mod routes;
mod state;


pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
