use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Status,
}

#[derive(Debug)]
pub struct ClientError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ClientError {
    pub fn transport(err: impl std::error::Error) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: err.to_string(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            kind: ErrorKind::Status,
            message: format!("unexpected status {code}"),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Transport => "transport",
            ErrorKind::Decode => "decode",
            ErrorKind::Status => "status",
        };
        write!(f, "{kind} error: {}", self.message)
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn invalid_url(value: &str, err: impl std::error::Error) -> Self {
        Self {
            message: format!("invalid base url '{value}': {err}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}
