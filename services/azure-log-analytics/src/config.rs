use crate::constants::*;
use logsign_core::utils::Redact;
use logsign_core::Context;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for the Data Collector API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `workspace_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_LOG_ANALYTICS_WORKSPACE_ID`
    pub workspace_id: Option<String>,
    /// `shared_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_LOG_ANALYTICS_SHARED_KEY`
    pub shared_key: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_LOG_ANALYTICS_ENDPOINT`
    ///
    /// If still unset, [`DEFAULT_ENDPOINT`] is used.
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("workspace_id", &Redact::from(&self.workspace_id))
            .field("shared_key", &Redact::from(&self.shared_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Load unset fields from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.workspace_id.is_none() {
            self.workspace_id = ctx.env_var(AZURE_LOG_ANALYTICS_WORKSPACE_ID);
        }

        if self.shared_key.is_none() {
            self.shared_key = ctx.env_var(AZURE_LOG_ANALYTICS_SHARED_KEY);
        }

        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(AZURE_LOG_ANALYTICS_ENDPOINT);
        }

        self
    }

    /// Get the endpoint, falling back to [`DEFAULT_ENDPOINT`].
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}
