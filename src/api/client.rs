use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::Method;
use yansi::Paint;

use super::error::FetchError;
use crate::utils::{build_query_string, endpoint_url};

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// `timeout` of `None` lets a request wait as long as the backend takes.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("Nutriview/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and return the raw body text.
    ///
    /// The HTTP status is not inspected: the backend reports failures inside
    /// the JSON envelope, sometimes alongside a 4xx code.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        form: Option<&[(&str, String)]>,
    ) -> Result<String, FetchError> {
        let url = endpoint_url(&self.base_url, endpoint);

        // --- Curl Logging ---
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url).fg(yansi::Color::Cyan)));
        if let Some(fields) = form {
            parts.push(format!("{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/x-www-form-urlencoded'").fg(yansi::Color::Magenta)
            ));
            let escaped = build_query_string(fields).replace('\'', "'\\''");
            parts.push(format!("{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped)).fg(yansi::Color::White)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        let mut req = self.client.request(method.clone(), &url);
        if let Some(fields) = form {
            req = req.form(fields);
        }

        let resp = req.send().await?;
        let status = resp.status();
        tracing::debug!(%method, %url, %status, "feed response received");
        let text = resp.text().await?;

        // Grayed out color (dimmed/dark gray)
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));

        Ok(text)
    }
}
