use logsign_core::utils::Redact;
use logsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the workspace id and its shared key.
///
/// The shared key is kept as the base64 text handed out by the portal. It is
/// decoded on every signing, so a malformed key is only reported when a
/// request is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Log Analytics workspace id, also called customer id.
    pub workspace_id: String,
    /// Primary or secondary shared key of the workspace, base64 encoded.
    pub shared_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("workspace_id", &Redact::from(&self.workspace_id))
            .field("shared_key", &Redact::from(&self.shared_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.workspace_id.is_empty() && !self.shared_key.is_empty()
    }
}

impl Credential {
    /// Create a new credential with shared key authentication.
    pub fn with_shared_key(workspace_id: impl Into<String>, shared_key: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            shared_key: shared_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::with_shared_key(
            "0b3c8f9e-5d1a-4b7e-9f2c-6a1d2e3f4a5b",
            "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+Pw==",
        );

        let s = format!("{cred:?}");
        assert_eq!(
            s,
            r#"Credential { workspace_id: 0b3***a5b, shared_key: AAE***w== }"#
        );
    }

    #[test]
    fn test_is_valid() {
        assert!(Credential::with_shared_key("abc123", "dGVzdGtleQ==").is_valid());
        assert!(!Credential::with_shared_key("", "dGVzdGtleQ==").is_valid());
        assert!(!Credential::with_shared_key("abc123", "").is_valid());
        // Validity doesn't decode the key.
        assert!(Credential::with_shared_key("abc123", "not-valid-base64!").is_valid());
    }
}
