//! Blocking [`HttpSend`] implementation backed by [`reqwest::blocking`].
//!
//! `reqwest::blocking::Client` spins up its own runtime, so it must not be
//! created or dropped from inside an async context.

use bytes::Bytes;
use log::debug;
use logsign_core::{Error, HttpSend, Result};
use reqwest::blocking::Client;

/// HttpSend implementation that uses a blocking reqwest client.
///
/// Timeouts, proxies and TLS settings are configured on the client passed to
/// [`ReqwestHttpSend::new`]; this type adds none of its own.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::blocking::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl HttpSend for ReqwestHttpSend {
    fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        debug!("sending {} {}", parts.method, parts.uri);

        let resp = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body.to_vec())
            .send()
            .map_err(|e| Error::unexpected("failed to send request").with_source(e))?;

        let status = resp.status();
        let version = resp.version();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .map_err(|e| Error::unexpected("failed to read response body").with_source(e))?;
        debug!("got response {status} with {} bytes", body.len());

        let mut http_resp = http::Response::builder()
            .status(status)
            .version(version)
            .body(body)?;
        *http_resp.headers_mut() = headers;

        Ok(http_resp)
    }
}
