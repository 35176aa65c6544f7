use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use lambda_runtime::{Error, LambdaEvent};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::events::InboundEvent;
use crate::slack::MessageSender;

pub mod config;
pub mod detail;
pub mod dispatch;
pub mod events;
pub mod notification;
pub mod slack;

pub fn set_up_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

// lambda handler
pub async fn function_handler(
    sender: &dyn MessageSender,
    config: &Config,
    evt: LambdaEvent<CloudWatchEvent>,
) -> Result<(), Error> {
    info!("Handling lambda invocation");
    debug!("Handling event payload: {:?}", evt.payload);

    let event = InboundEvent::from(evt.payload);
    handle_event(sender, config, &event).await;

    Ok(())
}

/// Runs one event through filter, decode, build and dispatch. Decode and send
/// failures are logged and never surface to the caller.
pub async fn handle_event(
    sender: &dyn MessageSender,
    config: &Config,
    event: &InboundEvent,
) -> dispatch::DispatchSummary {
    let attachments =
        match notification::notifications_for(event, &config.footer, &config.footer_icon) {
            Ok(attachments) => attachments,
            Err(err) => {
                error!(error = %err, source = %event.source, "Failed to decode event detail");
                return dispatch::DispatchSummary::default();
            }
        };

    dispatch::dispatch(sender, &attachments, &config.channel, config.chunk_size).await
}
