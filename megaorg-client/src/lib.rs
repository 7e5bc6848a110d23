//! # MegaOrg API Client
//!
//! HTTP access to the MegaOrg backend. One thin wrapper owns the base URL
//! and the envelope unwrapping; per-entity stores map CRUD intents onto it.
//! Every operation is exactly one round trip: no retries, no local fallback,
//! failures surface unchanged to the caller.
//!
//! ## Modules
//!
//! - `config`: Base URL configuration from the environment
//! - `error`: The client error type
//! - `http`: The envelope-aware request wrapper
//! - `tasks`: `TaskStore` trait and its HTTP implementation
//! - `users`: `UserStore` trait and its HTTP implementation

pub mod config;
pub mod error;
pub mod http;
pub mod tasks;
pub mod users;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::ApiClient;
pub use tasks::{ApiTaskStore, TaskStore};
pub use users::{ApiUserStore, UserStore};
