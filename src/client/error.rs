use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("form incomplete: {0}")]
    Validation(String),

    #[error("no employee with id {0} in the list")]
    UnknownEmployee(Uuid),
}
