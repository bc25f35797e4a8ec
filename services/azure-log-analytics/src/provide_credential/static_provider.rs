use logsign_core::{Context, ProvideCredential, Result};

use crate::credential::Credential;

/// StaticCredentialProvider always returns the credential it was built with.
#[derive(Clone, Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider from a workspace id and its shared key.
    pub fn new(workspace_id: &str, shared_key: &str) -> Self {
        Self {
            credential: Credential::with_shared_key(workspace_id, shared_key),
        }
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credential_provider() {
        let provider = StaticCredentialProvider::new("abc123", "dGVzdGtleQ==");
        let cred = provider.provide_credential(&Context::new()).unwrap();

        assert_eq!(
            cred,
            Some(Credential::with_shared_key("abc123", "dGVzdGtleQ=="))
        );
    }
}
