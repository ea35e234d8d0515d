//! Best-effort webhook notifications with internal failure containment.
//!
//! Payloads are Slack-style block documents posted once to a configured
//! webhook. A transport failure is caught at this boundary and escalates
//! exactly once to a secondary report on the error channel; a failure of
//! that secondary attempt is logged and dropped. Nothing here ever returns
//! an error to the caller.

use chrono::Utc;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

/// Transport-level notification failure. Internal only: every instance is
/// contained inside [`Notifier`] and at most logged.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Best-effort webhook dispatcher.
///
/// Holds the process configuration (toggles, hook URLs, environment name)
/// and a shared HTTP client. All dispatch methods return `()`; the no-throw
/// contract is part of the signature.
pub struct Notifier {
    config: Config,
    client: reqwest::Client,
}

impl Notifier {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Runtime environment name, for diagnostic context in payloads.
    pub fn environment(&self) -> &str {
        &self.config.environment
    }

    /// Dispatch `payload` to `hook_url` once.
    ///
    /// No-op when notifications are disabled. On transport failure, a
    /// secondary report carrying the failure detail is sent to the error
    /// hook; if that fails too, the failure is logged and dropped.
    pub async fn notify(&self, hook_url: &str, payload: &Value) {
        if !self.config.notifications_enabled {
            return;
        }

        match self.post(hook_url, payload).await {
            Ok(()) => info!("Notification delivered to {}", hook_url),
            Err(e) => {
                warn!("Failed to deliver notification to {}: {}", hook_url, e);
                self.report_failure(&e.to_string()).await;
            }
        }
    }

    /// Dispatch `payload` to the configured error hook.
    pub async fn notify_error(&self, payload: &Value) {
        let hook_url = self.config.error_hook_url.clone();
        self.notify(&hook_url, payload).await;
    }

    /// Dispatch `payload` to the configured log hook.
    ///
    /// Gated by its own flag in addition to the master toggle.
    pub async fn notify_log(&self, payload: &Value) {
        if !self.config.log_notifications_enabled {
            return;
        }
        let hook_url = self.config.log_hook_url.clone();
        self.notify(&hook_url, payload).await;
    }

    async fn post(&self, url: &str, payload: &Value) -> Result<(), NotifyError> {
        let response = self.client.post(url).json(payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status { status, body });
        }

        Ok(())
    }

    // Secondary attempt posts directly rather than through notify(), so a
    // failing error hook cannot escalate again. Terminal on failure.
    async fn report_failure(&self, detail: &str) {
        let payload = failure_blocks(&self.config.environment, detail);

        if let Err(e) = self.post(&self.config.error_hook_url, &payload).await {
            warn!("Failed to report notification failure: {}", e);
        }
    }
}

/// Build the block payload for a server-error notification.
pub fn error_blocks(environment: &str, detail: &str) -> Value {
    json!({
        "blocks": [
            {
                "type": "header",
                "text": {
                    "type": "plain_text",
                    "text": ":rotating_light: API Error",
                    "emoji": true
                }
            },
            {
                "type": "section",
                "fields": [
                    {
                        "type": "mrkdwn",
                        "text": format!("*Environment:*\n{}", environment)
                    },
                    {
                        "type": "mrkdwn",
                        "text": format!("*When:*\n{}", Utc::now().format("%Y-%m-%d %H:%M UTC"))
                    }
                ]
            },
            {
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": format!("```{}```", detail)
                }
            }
        ]
    })
}

/// Build the block payload for an operational log notification.
pub fn log_blocks(environment: &str, text: &str) -> Value {
    json!({
        "blocks": [
            {
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": format!("[{}] {}", environment, text)
                }
            }
        ]
    })
}

/// Payload for the secondary report sent when a notification fails.
fn failure_blocks(environment: &str, detail: &str) -> Value {
    json!({
        "blocks": [
            {
                "type": "header",
                "text": {
                    "type": "plain_text",
                    "text": ":warning: Notification delivery failed",
                    "emoji": true
                }
            },
            {
                "type": "section",
                "fields": [
                    {
                        "type": "mrkdwn",
                        "text": format!("*Environment:*\n{}", environment)
                    },
                    {
                        "type": "mrkdwn",
                        "text": format!("*When:*\n{}", Utc::now().format("%Y-%m-%d %H:%M UTC"))
                    }
                ]
            },
            {
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": format!("```{}```", detail)
                }
            }
        ]
    })
}
