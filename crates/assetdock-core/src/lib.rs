//! Assetdock core library
//!
//! Shared configuration, error types, and domain models used by the
//! intake service and the upload client.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, LogLevel};
