use logsign_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider loads the credential from a [`Config`].
///
/// Call [`Config::from_env`] first if env values should be honored.
#[derive(Clone, Debug)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.workspace_id, &self.config.shared_key) {
            (Some(workspace_id), Some(shared_key)) => Ok(Some(Credential::with_shared_key(
                workspace_id,
                shared_key,
            ))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_credential_provider() {
        let provider = ConfigCredentialProvider::new(Config {
            workspace_id: Some("abc123".to_string()),
            shared_key: Some("dGVzdGtleQ==".to_string()),
            endpoint: None,
        });

        let cred = provider.provide_credential(&Context::new()).unwrap();
        assert_eq!(
            cred,
            Some(Credential::with_shared_key("abc123", "dGVzdGtleQ=="))
        );
    }

    #[test]
    fn test_config_credential_provider_incomplete() {
        let provider = ConfigCredentialProvider::new(Config {
            workspace_id: Some("abc123".to_string()),
            ..Default::default()
        });

        assert!(provider
            .provide_credential(&Context::new())
            .unwrap()
            .is_none());
    }
}
