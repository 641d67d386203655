use reqwest::StatusCode;
use thiserror::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // exit 1
    MissingConfig,

    // exit 2
    InvalidInput,
    Delivery,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::MissingConfig => "required configuration is missing",
            ErrorKind::InvalidInput => "message could not be built",
            ErrorKind::Delivery => "message could not be delivered",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::MissingConfig => 1,

            ErrorKind::InvalidInput |
            ErrorKind::Delivery => 2,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("URL is required (set SLACK_WEBHOOK)")]
    MissingWebhook,

    #[error("Message is required (set SLACK_MESSAGE)")]
    MissingMessage,

    #[error("Invalid SLACK_LINKS: {source}\nraw input: {raw}")]
    InvalidLinks {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("Error encoding message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Error on message: {status}\n{payload}")]
    Delivery {
        status: StatusCode,
        payload: String,
    },

    #[error("Error sending message: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NotifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotifyError::MissingWebhook |
            NotifyError::MissingMessage => ErrorKind::MissingConfig,

            NotifyError::InvalidLinks { .. } |
            NotifyError::Serialize(_) => ErrorKind::InvalidInput,

            NotifyError::Delivery { .. } |
            NotifyError::Transport(_) => ErrorKind::Delivery,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}
