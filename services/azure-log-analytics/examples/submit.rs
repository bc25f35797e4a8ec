use logsign_azure_log_analytics::{Client, Config};
use logsign_core::time::{format_iso8601, now};
use logsign_core::{Context, OsEnv, Result};
use logsign_http_send_reqwest::ReqwestHttpSend;
use serde::Serialize;

#[derive(Serialize)]
struct LoginEvent<'a> {
    user: &'a str,
    succeeded: bool,
    #[serde(rename = "EventTime")]
    event_time: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let config = Config::default().from_env(&ctx);
    println!("Using config: {config:?}");

    let client = Client::from_config(ctx, config)?;

    let records = [
        LoginEvent {
            user: "alice",
            succeeded: true,
            event_time: format_iso8601(now()),
        },
        LoginEvent {
            user: "bob",
            succeeded: false,
            event_time: format_iso8601(now()),
        },
    ];

    let resp = client
        .submit("LoginEvents", &records, "EventTime")
        .map_err(|err| {
            if err.is_local() {
                eprintln!("Records were rejected before sending: {err}");
            }
            err
        })?;
    println!("Response status: {}", resp.status());
    if !resp.status().is_success() {
        println!("Response body: {}", String::from_utf8_lossy(resp.body()));
    }

    Ok(())
}
