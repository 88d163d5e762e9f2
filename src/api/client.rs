use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use yansi::Paint;

use crate::error::ActionError;

// Off by default: a listing body carries every droplet on the account.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// curl-equivalent line for a GET of `url`, if verbose output is enabled.
pub fn request_echo(url: &str) -> Option<String> {
    if !is_verbose() {
        return None;
    }
    let parts = [
        Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
        format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()),
        format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)),
        format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Authorization: Bearer ***'").fg(yansi::Color::Magenta)
        ),
    ];
    Some(format!("Request:\n{}", parts.join(" ")))
}

/// Response body echo, if verbose output is enabled.
pub fn response_echo(body: &str) -> Option<String> {
    if !is_verbose() {
        return None;
    }
    // Grayed out color (dimmed/dark gray)
    Some(format!("Response:\n{}", Paint::new(body).rgb(100, 100, 100)))
}

fn log_output(msg: Option<String>) {
    if let Some(msg) = msg {
        println!("{}", msg);
    }
}

/// Error body returned by the DigitalOcean API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Authenticated client for the provider REST API.
pub struct ApiClient {
    base_url: String,
    api_token: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, api_token: &str) -> Result<Self, ActionError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("droplet-ips/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ActionError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            client,
        })
    }

    /// GET `endpoint` with the bearer token and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ActionError> {
        let url = format!("{}{}", self.base_url, endpoint);

        // --- Curl Logging ---
        let mut url_for_log = url.clone();
        if !params.is_empty() {
            let query_string = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<String>>()
                .join("&");
            url_for_log = format!("{}?{}", url_for_log, query_string);
        }
        log_output(request_echo(&url_for_log));
        // --------------------

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(params)
            .send()
            .await
            .map_err(|e| ActionError::Provider(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ActionError::Provider(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            if is_verbose() {
                println!(
                    "Response:\n{}",
                    Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red)
                );
            }
            tracing::error!(%status, endpoint, "API request failed");
            let detail = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(ApiErrorBody { message: Some(message), id }) => match id {
                    Some(id) => format!("{} ({})", message, id),
                    None => message,
                },
                _ => text,
            };
            return Err(ActionError::Provider(format!("HTTP {}: {}", status, detail)));
        }

        tracing::trace!(endpoint, body = %text, "API response body");
        log_output(response_echo(&text));

        serde_json::from_str(&text)
            .map_err(|e| ActionError::Provider(format!("Failed to parse response: {}", e)))
    }
}
