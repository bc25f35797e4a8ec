use crate::constants::MAX_LOG_TYPE_LEN;
use logsign_core::{Error, Result};
use std::fmt::{Display, Formatter};

/// A validated log type, the name of the custom table records land in.
///
/// Matches `^[A-Za-z0-9_]+$` and is at most [`MAX_LOG_TYPE_LEN`] characters
/// long, which is what the ingestion endpoint accepts in `Log-Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogType<'a>(&'a str);

impl<'a> LogType<'a> {
    /// Validate the input as a log type.
    ///
    /// Returns an [`InvalidLogType`](logsign_core::ErrorKind::InvalidLogType)
    /// error carrying the offending value.
    pub fn parse(s: &'a str) -> Result<Self> {
        let valid = !s.is_empty()
            && s.len() <= MAX_LOG_TYPE_LEN
            && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');

        if !valid {
            return Err(Error::invalid_log_type(format!(
                "log type must only contain alpha numeric and _, and not exceed {MAX_LOG_TYPE_LEN} chars: {s:?}"
            )));
        }

        Ok(Self(s))
    }

    /// Get the log type as str.
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl<'a> TryFrom<&'a str> for LogType<'a> {
    type Error = Error;

    fn try_from(s: &'a str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for LogType<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
