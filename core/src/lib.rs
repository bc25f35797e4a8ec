//! Core components for submitting signed log records.
//!
//! This crate provides the foundational types and traits for the logsign
//! ecosystem. Service crates build on it to sign and send requests.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading ([`ProvideCredential`]) and validation ([`SigningCredential`])
//! - **Error**: A single [`Error`] type whose [`ErrorKind`] tells local validation failures apart from transport failures
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests, blocking
//! - [`Env`]: For environment variable access
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA256 and base64 helpers
//! - [`time`]: Clock and date formatting
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
