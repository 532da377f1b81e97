use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Transport { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Timeout,
    Connect,
    Request,
    Configuration,
    Io,
    Other,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::Http(e) if e.is_timeout() => ErrorCategory::Timeout,
            ProbeError::Http(e) if e.is_connect() => ErrorCategory::Connect,
            ProbeError::Http(e) if e.is_builder() => ErrorCategory::Configuration,
            ProbeError::Http(e) if e.is_request() || e.is_redirect() => ErrorCategory::Request,
            ProbeError::Http(_) | ProbeError::Transport { .. } => ErrorCategory::Other,
            ProbeError::Io(_) => ErrorCategory::Io,
            ProbeError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    /// One-line text printed in place of the status line when the probe fails.
    pub fn user_friendly_message(&self) -> String {
        describe_error(self)
    }
}

/// Renders an error followed by its source chain, joined with `": "`, on a single line.
///
/// Sources whose text is already contained in the rendered message are skipped,
/// since some errors repeat their cause in their own `Display`.
pub fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message.replace(['\r', '\n'], " ")
}

pub type Result<T> = std::result::Result<T, ProbeError>;
