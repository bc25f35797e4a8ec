/// Data Collector API version sent with every request.
pub const API_VERSION: &str = "2016-04-01";
/// Public cloud ingestion domain.
pub const DEFAULT_ENDPOINT: &str = "ods.opinsights.azure.com";
/// Longest log type accepted by the ingestion endpoint.
pub const MAX_LOG_TYPE_LEN: usize = 100;

pub(crate) const RESOURCE: &str = "/api/logs";
pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";

// Headers used by the Data Collector API.
pub(crate) const LOG_TYPE: &str = "Log-Type";
pub(crate) const X_MS_DATE: &str = "x-ms-date";
pub(crate) const TIME_GENERATED_FIELD: &str = "time-generated-field";

// Env values used by the Data Collector API.
pub(crate) const AZURE_LOG_ANALYTICS_WORKSPACE_ID: &str = "AZURE_LOG_ANALYTICS_WORKSPACE_ID";
pub(crate) const AZURE_LOG_ANALYTICS_SHARED_KEY: &str = "AZURE_LOG_ANALYTICS_SHARED_KEY";
pub(crate) const AZURE_LOG_ANALYTICS_ENDPOINT: &str = "AZURE_LOG_ANALYTICS_ENDPOINT";
