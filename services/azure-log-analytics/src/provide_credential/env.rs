use logsign_core::{Context, ProvideCredential, Result};

use crate::constants::*;
use crate::credential::Credential;

/// EnvCredentialProvider loads the credential from
/// `AZURE_LOG_ANALYTICS_WORKSPACE_ID` and `AZURE_LOG_ANALYTICS_SHARED_KEY`.
///
/// Both must be set, otherwise nothing is provided.
#[derive(Clone, Debug, Default)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self {}
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(workspace_id), Some(shared_key)) = (
            ctx.env_var(AZURE_LOG_ANALYTICS_WORKSPACE_ID),
            ctx.env_var(AZURE_LOG_ANALYTICS_SHARED_KEY),
        ) else {
            return Ok(None);
        };

        Ok(Some(Credential::with_shared_key(workspace_id, shared_key)))
    }
}
