use bytes::Bytes;
use logsign_core::{Context, Result};
use logsign_http_send_reqwest::ReqwestHttpSend;
use reqwest::blocking::Client;
use std::time::Duration;

fn main() -> Result<()> {
    // Timeouts live on the transport, the submitter imposes none.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("logsign-example/1.0")
        .build()
        .map_err(|e| logsign_core::Error::config_invalid("invalid client").with_source(e))?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let req = http::Request::builder()
        .method("POST")
        .uri("https://httpbin.org/post")
        .header("content-type", "application/json")
        .body(Bytes::from(r#"[{"message":"Hello from logsign!"}]"#))?;

    match ctx.http_send(req) {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            for (name, value) in resp.headers() {
                println!("  {name}: {value:?}");
            }
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
