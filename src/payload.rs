use tracing::debug;

use crate::configuration::Settings;
use crate::model::{Block, Button, Link, LinkNames, Message, NotifyError, TextObject};

const MESSAGE_LINK_LABEL: &str = "view";

/// Builds the webhook payload from validated settings.
///
/// Block order is fixed: the primary section, then `divider` + footer `context`
/// when a footer is set, then `divider` + `actions` when links are set.
/// Malformed `SLACK_LINKS` fails the whole build.
pub fn build_message(settings: &Settings) -> Result<Message, NotifyError> {
    let accessory = settings
        .message_link
        .as_ref()
        .map(|url| Button::new(MESSAGE_LINK_LABEL, url.clone()));

    let mut blocks = vec![Block::Section {
        text: TextObject::mrkdwn(settings.message.clone()),
        accessory,
    }];

    if let Some(footer) = &settings.footer {
        blocks.push(Block::Divider);
        blocks.push(Block::context(footer.clone()));
    }

    if let Some(raw) = &settings.links {
        let links = parse_links(raw)?;
        if !links.is_empty() {
            blocks.push(Block::Divider);
            blocks.push(Block::Actions {
                elements: links.into_iter().map(Button::from).collect(),
            });
        }
    }

    let link_names = settings.link_names.as_deref().map(LinkNames::parse);

    debug!(blocks = blocks.len(), "payload built");

    Ok(Message {
        as_user: false,
        unfurl_links: false,
        text: settings.message.clone(),
        blocks,
        channel: settings.channel.clone(),
        username: settings.username.clone(),
        icon_emoji: settings.icon_emoji.clone(),
        icon_url: settings.icon_url.clone(),
        link_names,
    })
}

pub fn parse_links(raw: &str) -> Result<Vec<Link>, NotifyError> {
    serde_json::from_str(raw).map_err(|source| NotifyError::InvalidLinks {
        source,
        raw: raw.to_string(),
    })
}
