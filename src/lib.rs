pub mod api;
pub mod config;
pub mod engine;
pub mod join;
pub mod metrics;
pub mod protocol;
pub mod session;
