pub mod config;
pub mod handlers;
pub mod libraries;
pub mod middleware;
pub mod models;
pub mod routes;

pub use config::Config;
pub use routes::build_router;
