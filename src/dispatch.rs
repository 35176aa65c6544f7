use tracing::{error, info, warn};

use crate::notification::Attachment;
use crate::slack::{MessageSender, Payload};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub sent: usize,
    pub failed: usize,
}

/// Sends the attachments in order, at most `chunk_size` per post. Every chunk
/// gets exactly one attempt; a failed chunk is logged and the next one is
/// still sent.
pub async fn dispatch(
    sender: &dyn MessageSender,
    attachments: &[Attachment],
    channel: &str,
    chunk_size: usize,
) -> DispatchSummary {
    let mut summary = DispatchSummary::default();
    if attachments.is_empty() {
        warn!("No Slack message sent");
        return summary;
    }

    let chunks = attachments.chunks(chunk_size.max(1));
    let total = chunks.len();
    info!(
        attachments = attachments.len(),
        chunks = total,
        "Will send {} attachments in {} chunks",
        attachments.len(),
        total
    );

    for (index, chunk) in chunks.enumerate() {
        let payload = Payload {
            channel: channel.to_string(),
            attachments: chunk.to_vec(),
        };

        match sender.send(&payload).await {
            Ok(response) => {
                summary.sent += 1;
                info!(
                    chunk = index,
                    attachments = chunk.len(),
                    status = response.status,
                    response = %response.body,
                    "Slack message sent"
                );
            }
            Err(err) => {
                summary.failed += 1;
                error!(
                    chunk = index,
                    attachments = chunk.len(),
                    error = %err,
                    "Failed to send Slack message"
                );
            }
        }
    }

    summary
}
