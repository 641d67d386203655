use serde::{Deserialize, Serialize};

/// Incoming-webhook payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Message {
    pub as_user: bool,
    pub unfurl_links: bool,
    pub text: String,
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_names: Option<LinkNames>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Button>,
    },
    Divider,
    Context {
        elements: Vec<TextObject>,
    },
    Actions {
        elements: Vec<Button>,
    },
}

impl Block {
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section { text: TextObject::mrkdwn(text), accessory: None }
    }

    pub fn context(text: impl Into<String>) -> Self {
        Block::Context { elements: vec![TextObject::mrkdwn(text)] }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Section { .. } => "section",
            Block::Divider => "divider",
            Block::Context { .. } => "context",
            Block::Actions { .. } => "actions",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    Mrkdwn,
    PlainText,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub text_type: TextType,
    pub text: String,
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self { text_type: TextType::Mrkdwn, text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self { text_type: TextType::PlainText, text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename = "button")]
pub struct Button {
    pub text: TextObject,
    pub url: String,
}

impl Button {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: TextObject::plain(text), url: url.into() }
    }
}

/// `link_names` as sent: recognised flag spellings become a bool, anything else is forwarded verbatim.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LinkNames {
    Flag(bool),
    Raw(String),
}

impl LinkNames {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => LinkNames::Flag(true),
            "false" | "0" | "no" => LinkNames::Flag(false),
            _ => LinkNames::Raw(raw.to_string()),
        }
    }
}

/// One entry of the `SLACK_LINKS` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl From<Link> for Button {
    fn from(link: Link) -> Self {
        Button::new(link.text, link.url)
    }
}
