pub mod configuration;
pub mod model;
pub mod payload;
pub mod telemetry;
pub mod util;

pub use configuration::Settings;
pub use model::{ErrorKind, Message, NotifyError};
pub use payload::build_message;
pub use util::slack::send_message;

/// Builds the message from `settings` and delivers it with a single POST.
pub async fn notify(
    client: &reqwest::Client,
    settings: &Settings,
) -> Result<reqwest::StatusCode, NotifyError> {
    let message = build_message(settings)?;
    send_message(client, &settings.webhook, &message).await
}
