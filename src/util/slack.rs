use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::model::{Message, NotifyError};

/// POSTs the message to the webhook once. Any status >= 299 is a delivery failure.
pub async fn send_message(
    client: &Client,
    webhook_url: &str,
    message: &Message,
) -> Result<StatusCode, NotifyError> {
    let payload = serde_json::to_string(message)?;

    let res = client
        .post(webhook_url)
        .header(CONTENT_TYPE, "application/json")
        .body(payload.clone())
        .send()
        .await?;

    let status = res.status();
    if status.as_u16() >= 299 {
        debug!(%status, "webhook rejected message");
        return Err(NotifyError::Delivery { status, payload });
    }

    info!(%status, blocks = message.blocks.len(), "message delivered");
    Ok(status)
}
