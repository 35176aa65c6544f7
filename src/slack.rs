use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use http::header::{CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::notification::Attachment;

/// Body of one webhook post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub channel: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("failed to serialize slack payload - {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("slack webhook request failed - {0}")]
    Request(#[from] reqwest::Error),
    #[error("slack webhook responded with {status}: {body}")]
    Status { status: u16, body: String },
}

#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, payload: &Payload) -> Result<SlackResponse, SendError>;
}

pub type DynMessageSender = Arc<dyn MessageSender>;

/// Posts payloads to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    webhook_url: Url,
}

impl SlackClient {
    pub fn new(webhook_url: Url, timeout: Duration) -> Result<Self, SendError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(SlackClient { http, webhook_url })
    }
}

#[async_trait]
impl MessageSender for SlackClient {
    async fn send(&self, payload: &Payload) -> Result<SlackResponse, SendError> {
        let body = serde_json::to_vec(payload)?;
        let bytes = body.len();
        debug!(bytes, attachments = payload.attachments.len(), "posting slack payload");

        let start = Instant::now();
        let response = self
            .http
            .post(self.webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        info!(
            status = %status,
            bytes,
            elapsed_ms = start.elapsed().as_millis(),
            "slack HTTP request completed"
        );

        if !status.is_success() {
            return Err(SendError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(SlackResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}

pub fn set_up_slack_client(
    webhook_url: Url,
    timeout: Duration,
) -> Result<DynMessageSender, SendError> {
    Ok(Arc::new(SlackClient::new(webhook_url, timeout)?))
}
