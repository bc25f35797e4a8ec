use crate::constants::*;
use crate::Credential;
use log::debug;
use logsign_core::hash::{base64_decode, base64_hmac_sha256};
use logsign_core::time::{format_http_date, now, DateTime};
use logsign_core::Result;

/// RequestSigner that implements the Data Collector API Shared Key authorization.
///
/// - [Authorization](https://learn.microsoft.com/en-us/azure/azure-monitor/logs/data-collector-api#authorization)
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

/// The date and authorization produced by one signing.
///
/// `date` is exactly the value signed over and must be sent as `x-ms-date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// RFC 1123 date, e.g. `Fri, 01 Jan 2021 00:00:00 GMT`.
    pub date: String,
    /// `SharedKey {workspace_id}:{signature}`.
    pub authorization: String,
}

impl RequestSigner {
    /// Create a new signer that reads the clock on every signing.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign a JSON body of `content_length` bytes.
    ///
    /// Reads the clock once, so the returned date and the date inside the
    /// authorization never differ.
    pub fn sign(&self, cred: &Credential, content_length: usize) -> Result<Signature> {
        let date = format_http_date(self.time.unwrap_or_else(now));
        let string_to_sign = string_to_sign(content_length, &date);

        let key = base64_decode(&cred.shared_key)?;
        let signature = base64_hmac_sha256(&key, string_to_sign.as_bytes());

        Ok(Signature {
            date,
            authorization: format!("SharedKey {}:{signature}", cred.workspace_id),
        })
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// "POST" + "\n" +
/// Content-Length + "\n" +
/// "application/json" + "\n" +
/// "x-ms-date:" + Date + "\n" +
/// "/api/logs"
/// ```
///
/// There is no trailing newline.
pub fn string_to_sign(content_length: usize, date: &str) -> String {
    let s = format!("POST\n{content_length}\n{CONTENT_TYPE_JSON}\n{X_MS_DATE}:{date}\n{RESOURCE}");
    debug!("string to sign: {}", &s);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use logsign_core::ErrorKind;
    use pretty_assertions::assert_eq;

    const TEST_KEY: &str =
        "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+Pw==";

    fn test_signer() -> RequestSigner {
        RequestSigner::new().with_time(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_string_to_sign() {
        assert_eq!(
            string_to_sign(21, "Fri, 01 Jan 2021 00:00:00 GMT"),
            "POST\n21\napplication/json\nx-ms-date:Fri, 01 Jan 2021 00:00:00 GMT\n/api/logs"
        );
    }

    #[test]
    fn test_sign_known_vector() {
        let _ = env_logger::builder().is_test(true).try_init();

        let cred = Credential::with_shared_key("abc123", TEST_KEY);
        let signature = test_signer().sign(&cred, 21).unwrap();

        assert_eq!(signature.date, "Fri, 01 Jan 2021 00:00:00 GMT");
        assert_eq!(
            signature.authorization,
            "SharedKey abc123:GNZiRDaIRlIK68hlUBfVFY1+A/9y0qCEETp8EwCAyWQ="
        );
    }

    #[test]
    fn test_sign_empty_batch() {
        let cred = Credential::with_shared_key("abc123", TEST_KEY);
        let signature = test_signer().sign(&cred, 2).unwrap();

        assert_eq!(
            signature.authorization,
            "SharedKey abc123:cJpddQIHixdwEYqK+MXAYrZQibL6mYIscnXylVAFZIo="
        );
    }

    #[test]
    fn test_sign_depends_on_content_length() {
        let cred = Credential::with_shared_key("abc123", TEST_KEY);
        let signer = test_signer();

        let a = signer.sign(&cred, 21).unwrap();
        let b = signer.sign(&cred, 22).unwrap();

        assert_eq!(a.date, b.date);
        assert_ne!(a.authorization, b.authorization);
        assert_eq!(
            b.authorization,
            "SharedKey abc123:L89zRLYuNFkzTfHJ8+e9EQoX59ONC+vrdl8pHqb8Z/Q="
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let cred = Credential::with_shared_key("abc123", TEST_KEY);
        let signer = test_signer();

        assert_eq!(signer.sign(&cred, 21).unwrap(), signer.sign(&cred, 21).unwrap());
    }

    #[test]
    fn test_sign_malformed_key() {
        for key in ["not-valid-base64!", "4EXAMPLE0f6BNJDqoVH3VHrQQ=="] {
            let cred = Credential::with_shared_key("abc123", key);
            let err = test_signer().sign(&cred, 2).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedKey, "key: {key}");
        }
    }
}
