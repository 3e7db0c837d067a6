use std::fmt;
use thiserror::Error;

/// The workflow step an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Auth,
    Login,
    Submit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Auth => "access code",
            Stage::Login => "login",
            Stage::Submit => "step submission",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("{stage}: request failed: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    #[error("build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{stage}: build request: {source}")]
    Request {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    #[error("access code: no redirect in response (status {status})")]
    MissingRedirect { status: u16 },

    #[error("access code: no access parameter in redirect {location}")]
    MissingAccessCode { location: String },

    #[error("{stage}: json deserialize: {source}; body: {body}")]
    Decode {
        stage: Stage,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{stage}: missing field {field}")]
    MissingField { stage: Stage, field: &'static str },

    #[error("step submission rejected: code {code}, message {message:?}; body: {body}")]
    Rejected {
        code: i64,
        message: String,
        body: String,
    },

    #[error("step payload is not valid utf-8 after unescaping: {0}")]
    Template(#[from] std::string::FromUtf8Error),
}

impl WalkError {
    /// `None` when the failure happened before any request was made.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            WalkError::Client(_) => None,
            WalkError::Transport { stage, .. }
            | WalkError::Request { stage, .. }
            | WalkError::Decode { stage, .. }
            | WalkError::MissingField { stage, .. } => Some(*stage),
            WalkError::MissingRedirect { .. } | WalkError::MissingAccessCode { .. } => {
                Some(Stage::Auth)
            }
            WalkError::Rejected { .. } | WalkError::Template(_) => Some(Stage::Submit),
        }
    }
}
