pub mod assets;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;
pub mod view;

pub use routes::AppState;
