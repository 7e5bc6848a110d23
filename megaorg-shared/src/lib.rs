//! # MegaOrg Shared Library
//!
//! This crate contains the data model shared between the MegaOrg API client
//! and the console front-end. It is pure data: no I/O happens here.
//!
//! ## Module Organization
//!
//! - `models`: Task and User entities plus their create/update payloads
//! - `envelope`: The `{success, data, message?}` wrapper used by the API
//! - `labels`: Badge label translation for status/priority/role values
//! - `validate`: Field-scoped validation error collection

pub mod envelope;
pub mod labels;
pub mod models;
pub mod validate;

/// Current version of the MegaOrg shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
