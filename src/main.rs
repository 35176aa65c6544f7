use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use emr_slack_notifier::config::Config;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    emr_slack_notifier::set_up_logging();

    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::load_from_env()?;
    let sender =
        emr_slack_notifier::slack::set_up_slack_client(config.webhook_url.clone(), config.timeout)?;

    run(service_fn(|request: LambdaEvent<CloudWatchEvent>| {
        emr_slack_notifier::function_handler(sender.as_ref(), &config, request)
    }))
    .await
}
