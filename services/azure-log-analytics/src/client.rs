use crate::constants::*;
use crate::provide_credential::ConfigCredentialProvider;
use crate::{Config, Credential, LogType, RequestSigner};
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderValue;
use log::debug;
use logsign_core::{Context, Error, ProvideCredential, Result, SigningCredential};
use serde::Serialize;

/// Client submits JSON records to the Data Collector API.
///
/// Every call to [`Client::submit`] validates the log type, serializes the
/// records, signs the request and sends it exactly once. Nothing is buffered
/// or retried, and the client holds no state besides its credential and
/// endpoint, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    endpoint: String,
    signer: RequestSigner,
}

impl Client {
    /// Create a new client against the public cloud endpoint.
    ///
    /// The credential is stored as is. A shared key that is not valid base64
    /// is reported by the first [`Client::submit`].
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            signer: RequestSigner::new(),
        }
    }

    /// Create a new client with a credential loaded once from `provider`.
    pub fn from_provider(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let Some(credential) = provider.provide_credential(&ctx)? else {
            return Err(Error::config_invalid(
                "no credential found for log analytics workspace",
            ));
        };
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "workspace id and shared key must not be empty",
            ));
        }

        Ok(Self::new(ctx, credential))
    }

    /// Create a new client from config, using its endpoint if set.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let endpoint = config.endpoint_or_default().to_string();
        let client = Self::from_provider(ctx, ConfigCredentialProvider::new(config))?;

        Ok(client.with_endpoint(endpoint))
    }

    /// Set the ingestion endpoint, e.g. `ods.opinsights.azure.us`.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the request signer.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Get the endpoint this client submits to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the uri that records are posted to.
    pub fn uri(&self) -> String {
        format!(
            "https://{}.{}{RESOURCE}?api-version={API_VERSION}",
            self.credential.workspace_id, self.endpoint
        )
    }

    /// Build a signed request without sending it.
    ///
    /// `time_generated_field` names the record field holding the event time
    /// as `YYYY-MM-DDThh:mm:ssZ`. Pass an empty string to use ingestion time.
    ///
    /// Non-finite floats (`NaN`, `±inf`) have no JSON form and are sent as
    /// `null`.
    ///
    /// # Errors
    ///
    /// - `InvalidLogType` if `log_type` is not `[A-Za-z0-9_]{1,100}`.
    /// - `SerializationError` if `records` can't be represented as JSON.
    /// - `MalformedKey` if the shared key is not valid base64.
    /// - `RequestInvalid` if the uri or a header value can't be built.
    pub fn build_request<T>(
        &self,
        log_type: &str,
        records: &T,
        time_generated_field: &str,
    ) -> Result<http::Request<Bytes>>
    where
        T: Serialize + ?Sized,
    {
        let log_type = LogType::parse(log_type)?;
        let body = serde_json::to_vec(records)
            .map_err(|e| Error::serialization("failed to serialize records").with_source(e))?;

        let signature = self.signer.sign(&self.credential, body.len())?;
        let uri = self.uri();
        debug!(
            "build request to {uri} with log type {log_type} and {} bytes",
            body.len()
        );

        let mut authorization = HeaderValue::from_str(&signature.authorization)?;
        authorization.set_sensitive(true);

        let req = http::Request::post(uri)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(AUTHORIZATION, authorization)
            .header(LOG_TYPE, log_type.as_str())
            .header(X_MS_DATE, signature.date)
            .header(TIME_GENERATED_FIELD, time_generated_field)
            .body(Bytes::from(body))?;

        Ok(req)
    }

    /// Submit records under `log_type`.
    ///
    /// Returns the raw response, including non-2xx statuses, which callers
    /// must inspect themselves. Transport failures are returned unmodified
    /// as the error source.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logsign_azure_log_analytics::{Client, Credential};
    /// use logsign_core::Context;
    /// use logsign_http_send_reqwest::ReqwestHttpSend;
    /// use serde_json::json;
    ///
    /// # fn main() -> logsign_core::Result<()> {
    /// let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    /// let client = Client::new(ctx, Credential::with_shared_key("abc123", "dGVzdGtleQ=="));
    ///
    /// let resp = client.submit("MyTestLog", &json!([{"field1": "value1"}]), "")?;
    /// println!("resp got status: {}", resp.status());
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit<T>(
        &self,
        log_type: &str,
        records: &T,
        time_generated_field: &str,
    ) -> Result<http::Response<Bytes>>
    where
        T: Serialize + ?Sized,
    {
        let req = self.build_request(log_type, records, time_generated_field)?;
        self.ctx.http_send(req)
    }
}
