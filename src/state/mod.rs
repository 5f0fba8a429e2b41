//! Persisted application state.

pub mod config;

pub use config::AppConfig;
