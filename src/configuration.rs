use std::env;

use crate::model::NotifyError;

pub const ENV_SLACK_WEBHOOK: &str = "SLACK_WEBHOOK";
pub const ENV_SLACK_MESSAGE: &str = "SLACK_MESSAGE";
pub const ENV_SLACK_CHANNEL: &str = "SLACK_CHANNEL";
pub const ENV_SLACK_USERNAME: &str = "SLACK_USERNAME";
pub const ENV_SLACK_ICON_EMOJI: &str = "SLACK_ICON_EMOJI";
pub const ENV_SLACK_ICON: &str = "SLACK_ICON";
pub const ENV_SLACK_LINK_NAMES: &str = "SLACK_LINK_NAMES";
pub const ENV_SLACK_FOOTER: &str = "SLACK_FOOTER";
pub const ENV_SLACK_MESSAGE_LINK: &str = "SLACK_MESSAGE_LINK";
pub const ENV_SLACK_LINKS: &str = "SLACK_LINKS";

/// Validated notifier configuration. Optional values are `None` when unset or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub webhook: String,
    pub message: String,
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub icon_url: Option<String>,
    /// Raw `SLACK_LINK_NAMES`; interpreted by the payload builder.
    pub link_names: Option<String>,
    pub footer: Option<String>,
    pub message_link: Option<String>,
    /// Raw `SLACK_LINKS` JSON; parsed by the payload builder.
    pub links: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let webhook = get(ENV_SLACK_WEBHOOK).ok_or(NotifyError::MissingWebhook)?;
        let message = get(ENV_SLACK_MESSAGE).ok_or(NotifyError::MissingMessage)?;

        Ok(Self {
            webhook,
            message,
            channel: get(ENV_SLACK_CHANNEL),
            username: get(ENV_SLACK_USERNAME),
            icon_emoji: get(ENV_SLACK_ICON_EMOJI),
            icon_url: get(ENV_SLACK_ICON),
            link_names: get(ENV_SLACK_LINK_NAMES),
            footer: get(ENV_SLACK_FOOTER),
            message_link: get(ENV_SLACK_MESSAGE_LINK),
            links: get(ENV_SLACK_LINKS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_webhook_is_reported_first() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, NotifyError::MissingWebhook));
    }

    #[test]
    fn empty_message_counts_as_missing() {
        let err = Settings::from_lookup(lookup(&[
            (ENV_SLACK_WEBHOOK, "https://hooks.example.com/T/B/X"),
            (ENV_SLACK_MESSAGE, ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, NotifyError::MissingMessage));
    }

    #[test]
    fn reads_required_values_only() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_SLACK_WEBHOOK, "https://hooks.example.com/T/B/X"),
            (ENV_SLACK_MESSAGE, "Deploy finished"),
        ]))
        .unwrap();

        assert_eq!(settings.webhook, "https://hooks.example.com/T/B/X");
        assert_eq!(settings.message, "Deploy finished");
        assert_eq!(settings.channel, None);
        assert_eq!(settings.footer, None);
        assert_eq!(settings.links, None);
    }

    #[test]
    fn reads_optional_values_and_drops_empty_ones() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_SLACK_WEBHOOK, "https://hooks.example.com/T/B/X"),
            (ENV_SLACK_MESSAGE, "Deploy finished"),
            (ENV_SLACK_CHANNEL, "#ops"),
            (ENV_SLACK_USERNAME, "deploy-bot"),
            (ENV_SLACK_ICON_EMOJI, ":rocket:"),
            (ENV_SLACK_ICON, ""),
            (ENV_SLACK_LINK_NAMES, "true"),
            (ENV_SLACK_FOOTER, "via CI"),
            (ENV_SLACK_MESSAGE_LINK, "https://ci.example.com/run/1"),
            (ENV_SLACK_LINKS, ""),
        ]))
        .unwrap();

        assert_eq!(settings.channel.as_deref(), Some("#ops"));
        assert_eq!(settings.username.as_deref(), Some("deploy-bot"));
        assert_eq!(settings.icon_emoji.as_deref(), Some(":rocket:"));
        assert_eq!(settings.icon_url, None);
        assert_eq!(settings.link_names.as_deref(), Some("true"));
        assert_eq!(settings.footer.as_deref(), Some("via CI"));
        assert_eq!(settings.message_link.as_deref(), Some("https://ci.example.com/run/1"));
        assert_eq!(settings.links, None);
    }
}
