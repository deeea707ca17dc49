//! Web layer for the freight quote service.
//!
//! Provides HTTP endpoints for inspecting requests, building candidate
//! routes and running the pricing engine.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
