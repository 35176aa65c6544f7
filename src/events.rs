use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// Event bus source identifier of EMR cluster notifications.
pub const EMR_SOURCE: &str = "aws.emr";

/// The envelope of a single event bus notification, with the source specific
/// detail kept as raw bytes until it is decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    pub source: String,
    pub detail_type: String,
    pub account_id: String,
    pub region: String,
    pub time: DateTime<Utc>,
    pub detail: Vec<u8>,
}

impl InboundEvent {
    pub fn is_emr(&self) -> bool {
        self.source == EMR_SOURCE
    }
}

impl From<CloudWatchEvent> for InboundEvent {
    fn from(event: CloudWatchEvent) -> Self {
        let detail = match event.detail {
            // relayed events sometimes carry the detail as an encoded json string
            Some(Value::String(raw)) => raw.into_bytes(),
            // an absent detail is left empty so decoding rejects it
            Some(Value::Null) | None => Vec::new(),
            Some(value) => value.to_string().into_bytes(),
        };
        debug!(detail_bytes = detail.len(), "converted event envelope");

        InboundEvent {
            source: event.source.unwrap_or_default(),
            detail_type: event.detail_type.unwrap_or_default(),
            account_id: event.account_id.unwrap_or_default(),
            region: event.region.unwrap_or_default(),
            time: event.time,
            detail,
        }
    }
}
