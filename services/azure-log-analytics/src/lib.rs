//! Azure Log Analytics Data Collector API client
//!
//! This crate submits JSON records to a Log Analytics workspace, signing
//! every request with the workspace's shared key.
//!
//! - [Data Collector API](https://learn.microsoft.com/en-us/azure/azure-monitor/logs/data-collector-api)
//!
//! # Example
//!
//! ```rust,no_run
//! use logsign_azure_log_analytics::{Client, Config};
//! use logsign_core::{Context, OsEnv, Result};
//! use logsign_http_send_reqwest::ReqwestHttpSend;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Reads AZURE_LOG_ANALYTICS_WORKSPACE_ID, AZURE_LOG_ANALYTICS_SHARED_KEY
//!     // and optionally AZURE_LOG_ANALYTICS_ENDPOINT.
//!     let config = Config::default().from_env(&ctx);
//!     let client = Client::from_config(ctx, config)?;
//!
//!     let resp = client.submit("MyTestLog", &json!([{"field1": "value1"}]), "")?;
//!     println!("Response: {}", resp.status());
//!
//!     Ok(())
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{API_VERSION, DEFAULT_ENDPOINT, MAX_LOG_TYPE_LEN};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod log_type;
pub use log_type::LogType;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner, Signature};

mod client;
pub use client::Client;

mod provide_credential;
pub use provide_credential::*;
