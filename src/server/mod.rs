//! HTTP server: state, routes and the fluent builder

pub mod builder;
pub mod routes;
pub mod state;

pub use builder::ServerBuilder;
pub use state::AppState;
