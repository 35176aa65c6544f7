use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::detail::{self, DecodeError, EmrEventDetail};
use crate::events::InboundEvent;

pub const DEFAULT_FOOTER_ICON: &str =
    "https://d1d05r7k0qlw4w.cloudfront.net/dist-cbe91c5a8477701757ff6752aae4c6f892018972/img/favicon.ico";

const ERROR_SEVERITY: &str = "ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Good,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl Field {
    fn short(title: &str, value: impl Into<String>) -> Self {
        Field {
            title: title.to_string(),
            value: value.into(),
            short: true,
        }
    }
}

/// A single Slack message attachment describing one EMR event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: Color,
    pub title: String,
    pub text: String,
    pub footer: String,
    pub footer_icon: String,
    pub ts: i64,
    pub fields: Vec<Field>,
}

/// Builds the attachment for an EMR event, stamped with the current time.
pub fn build(
    event: &InboundEvent,
    detail: &EmrEventDetail,
    footer: &str,
    footer_icon: &str,
) -> Attachment {
    build_at(event, detail, footer, footer_icon, Utc::now())
}

pub fn build_at(
    event: &InboundEvent,
    detail: &EmrEventDetail,
    footer: &str,
    footer_icon: &str,
    now: DateTime<Utc>,
) -> Attachment {
    let color = if detail.severity == ERROR_SEVERITY {
        Color::Danger
    } else {
        Color::Good
    };

    // ts is when the notification was created, not when the event happened
    Attachment {
        color,
        title: event.detail_type.clone(),
        text: detail.message.clone(),
        footer: footer.to_string(),
        footer_icon: footer_icon.to_string(),
        ts: now.timestamp(),
        fields: vec![
            Field::short("AccountID", event.account_id.as_str()),
            Field::short("Region", event.region.as_str()),
            Field::short("State", detail.state.as_str()),
            Field::short("Time", format_event_time(&event.time)),
        ],
    }
}

/// Renders the event time as `2018-05-01 12:00:00.25 +0000 UTC`. Fractional
/// seconds are trimmed of trailing zeros and left out entirely when zero.
fn format_event_time(time: &DateTime<Utc>) -> String {
    let mut rendered = time.format("%Y-%m-%d %H:%M:%S").to_string();
    let nanos = time.timestamp_subsec_nanos();
    if nanos > 0 {
        rendered.push('.');
        rendered.push_str(format!("{:09}", nanos).trim_end_matches('0'));
    }
    rendered.push_str(" +0000 UTC");
    rendered
}

/// Filters, decodes and builds the attachments for one inbound event. Events
/// from any source other than EMR yield an empty list.
pub fn notifications_for(
    event: &InboundEvent,
    footer: &str,
    footer_icon: &str,
) -> Result<Vec<Attachment>, DecodeError> {
    if !event.is_emr() {
        debug!(source = %event.source, "ignoring event from unrecognized source");
        return Ok(Vec::new());
    }

    let detail = detail::decode(&event.detail)?;
    info!(
        severity = %detail.severity,
        state = %detail.state,
        "EMR EVENT Detected"
    );
    Ok(vec![build(event, &detail, footer, footer_icon)])
}
