/*!
submit.rs - deliver a command batch to the registration endpoint.

Outcomes:
  - dry run        : pretty JSON on stdout, exit 0, no network I/O
  - 2xx            : "Status: <code>" + raw body on stdout, exit 0
  - non-2xx        : "HTTP <code>: <body>" on stderr, exit 1
  - transport fail : "Network error: <detail>" on stderr, exit 1

Single attempt. No retries, no explicit timeout (client defaults apply).
*/

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use thiserror::Error;

use super::payload::CommandPayload;
use crate::{log_debug, log_info};

/* ---- Data Structures ---- */

/// Successful (2xx) response from the endpoint.
#[derive(Debug)]
pub struct Registered {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to create Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/* ---- Transport ---- */

/// Synchronous wrapper: builds a throwaway Tokio runtime and blocks on the PUT.
pub fn send_command(
    url: &str,
    token: &str,
    batch: &[CommandPayload],
) -> Result<Registered, SubmitError> {
    let rt = tokio::runtime::Runtime::new().map_err(SubmitError::Runtime)?;
    rt.block_on(send_command_async(url, token, batch))
}

/// Async variant of the registration request.
pub async fn send_command_async(
    url: &str,
    token: &str,
    batch: &[CommandPayload],
) -> Result<Registered, SubmitError> {
    let body = serde_json::to_vec(batch).map_err(SubmitError::Encode)?;
    log_debug!("PUT {} ({} bytes)", url, body.len());

    let started = Instant::now();
    let response = http_client(url)?
        .put(url)
        .header(AUTHORIZATION, format!("Bot {token}"))
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(SubmitError::Network)?;

    let status = response.status();
    let text = response.text().await.map_err(SubmitError::Network)?;
    log_debug!(
        "response {} in {} ms",
        status.as_u16(),
        started.elapsed().as_millis()
    );

    if status.is_success() {
        Ok(Registered {
            status: status.as_u16(),
            body: text,
        })
    } else {
        Err(SubmitError::Http {
            status: status.as_u16(),
            body: text,
        })
    }
}

/// Loopback targets (local stubs) bypass any system proxy.
fn http_client(url: &str) -> Result<reqwest::Client, SubmitError> {
    let loopback = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .is_some_and(|h| matches!(h.as_str(), "localhost" | "127.0.0.1" | "[::1]"));

    let mut builder = reqwest::Client::builder();
    if loopback {
        builder = builder.no_proxy();
    }
    builder.build().map_err(SubmitError::Network)
}

/* ---- Reporting ---- */

/// Run the registration (or dry run) and report on the given writers.
///
/// Returns the process exit code: 0 on success, 1 on HTTP / network failure.
pub fn register_command<O: Write, E: Write>(
    url: &str,
    token: &str,
    batch: &[CommandPayload],
    dry_run: bool,
    out: &mut O,
    err: &mut E,
) -> Result<i32> {
    if dry_run {
        writeln!(out, "Dry run; skipping API call.")?;
        writeln!(out, "{}", serde_json::to_string_pretty(batch)?)?;
        return Ok(0);
    }

    match send_command(url, token, batch) {
        Ok(registered) => {
            writeln!(out, "Status: {}", registered.status)?;
            writeln!(out, "{}", registered.body)?;
            if let Some(summary) = summarize_registered(&registered.body) {
                log_info!("{}", summary);
            }
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(1)
        }
    }
}

/// "Registered N command(s): /a, /b" when the body is a JSON array of commands.
pub fn summarize_registered(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let arr = value.as_array()?;
    let names: Vec<String> = arr
        .iter()
        .filter_map(|c| c.get("name").and_then(|n| n.as_str()))
        .map(|n| format!("/{n}"))
        .collect();
    Some(format!(
        "Registered {} command(s): {}",
        arr.len(),
        names.join(", ")
    ))
}

/* --------------------------------- Tests ---------------------------------- */
