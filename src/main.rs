use std::process;

use dotenv::dotenv;
use reqwest::Client;
use tracing::debug;

use slack_notifier::telemetry::{get_subscriber, init_subscriber};
use slack_notifier::{notify, NotifyError, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    let subscriber = get_subscriber(
        "slack_notifier".into(),
        "warn".into(),
        std::io::stderr,
    );
    init_subscriber(subscriber);
    debug!("environment loaded");

    match run().await {
        Ok(status) => println!("{}", status),
        Err(err) => {
            debug!(kind = %err.kind(), "notification failed");
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    }
}

async fn run() -> Result<reqwest::StatusCode, NotifyError> {
    let settings = Settings::from_env()?;
    notify(&Client::new(), &settings).await
}
