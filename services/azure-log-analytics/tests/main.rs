use std::env;

use http::StatusCode;
use log::{debug, warn};
use logsign_azure_log_analytics::{Client, Credential};
use logsign_core::time::{format_iso8601, now};
use logsign_core::{Context, ErrorKind, Result};
use logsign_http_send_reqwest::ReqwestHttpSend;
use serde_json::json;

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("LOGSIGN_AZURE_LOG_ANALYTICS_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let credential = Credential::with_shared_key(
        env::var("LOGSIGN_AZURE_LOG_ANALYTICS_WORKSPACE_ID")
            .expect("env LOGSIGN_AZURE_LOG_ANALYTICS_WORKSPACE_ID must set"),
        env::var("LOGSIGN_AZURE_LOG_ANALYTICS_SHARED_KEY")
            .expect("env LOGSIGN_AZURE_LOG_ANALYTICS_SHARED_KEY must set"),
    );

    let mut client = Client::new(ctx, credential);
    if let Ok(endpoint) = env::var("LOGSIGN_AZURE_LOG_ANALYTICS_ENDPOINT") {
        client = client.with_endpoint(endpoint);
    }

    Some(client)
}

#[test]
fn test_submit_records() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("LOGSIGN_AZURE_LOG_ANALYTICS_TEST is not set, skipped");
        return Ok(());
    };

    let records = json!([
        {"field1": "value1", "count": 1, "ok": true, "extra": null},
        {"field1": "value2", "count": 2, "ok": false, "tags": ["a", "b"]},
    ]);

    let resp = client.submit("LogsignTest", &records, "")?;
    debug!("got response: {:?}", resp);

    assert_eq!(StatusCode::OK, resp.status());
    Ok(())
}

#[test]
fn test_submit_with_time_generated_field() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("LOGSIGN_AZURE_LOG_ANALYTICS_TEST is not set, skipped");
        return Ok(());
    };

    let records = json!([{"message": "hello", "EventTime": format_iso8601(now())}]);

    let resp = client.submit("LogsignTest", &records, "EventTime")?;
    debug!("got response: {:?}", resp);

    assert_eq!(StatusCode::OK, resp.status());
    Ok(())
}

#[test]
fn test_submit_with_wrong_key() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("LOGSIGN_AZURE_LOG_ANALYTICS_TEST is not set, skipped");
        return Ok(());
    };

    let workspace_id = env::var("LOGSIGN_AZURE_LOG_ANALYTICS_WORKSPACE_ID")
        .expect("env LOGSIGN_AZURE_LOG_ANALYTICS_WORKSPACE_ID must set");
    let client = Client::new(
        Context::new().with_http_send(ReqwestHttpSend::default()),
        Credential::with_shared_key(workspace_id, "dGVzdGtleQ=="),
    )
    .with_endpoint(client.endpoint());

    // The service rejects the signature, we hand the status back untouched.
    let resp = client.submit("LogsignTest", &json!([]), "")?;
    debug!("got response: {:?}", resp);

    assert_eq!(StatusCode::FORBIDDEN, resp.status());
    Ok(())
}

#[test]
fn test_local_errors_skip_network() {
    // Runs without credentials: nothing here reaches the transport.
    let client = Client::new(
        Context::new().with_http_send(ReqwestHttpSend::default()),
        Credential::with_shared_key("abc123", "not-valid-base64!"),
    );

    let err = client.submit("Bad-Type", &json!([]), "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLogType);
    assert!(err.is_local());

    let err = client.submit("MyTestLog", &json!([]), "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedKey);
    assert!(err.is_local());
}
