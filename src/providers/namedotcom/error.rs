use thiserror::Error;

use crate::error::Error;
use crate::providers::namedotcom::types::ApiErrorResponse;

#[derive(Error, Debug)]
pub enum NameComError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid server url {0:?}, expecting https://<host>.com")]
    InvalidServerUrl(String),

    #[error("invalid record id {0:?}, expecting a decimal integer")]
    InvalidRecordId(String),

    #[error("record has no id")]
    MissingRecordId,

    /// Non-200 response with the structured `{message, details}` body.
    #[error("{0}")]
    Api(ApiErrorResponse),

    /// Non-200 response whose body is not the structured error shape.
    #[error("api returned unexpected response: {0}")]
    UnexpectedResponse(serde_json::Error),

    /// 200 response with a body that failed to decode.
    #[error("decoding response body: {0}")]
    Decode(serde_json::Error),

    /// The registrar refuses to update a record into an exact duplicate of
    /// an existing one.
    #[error("updating {host:?} would duplicate an existing record: {message}")]
    DuplicateRecord { host: String, message: String },

    #[error("record listing exceeded {0} pages")]
    PaginationOverflow(u32),
}

pub fn map_error(err: NameComError) -> Error {
    match &err {
        NameComError::InvalidServerUrl(_) => Error::Config(err.to_string()),
        NameComError::InvalidRecordId(_) | NameComError::MissingRecordId => {
            Error::InvalidInput(err.to_string())
        }
        _ => Error::Provider(err.to_string()),
    }
}
