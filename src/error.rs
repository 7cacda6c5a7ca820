use thiserror::Error;

/// Errors surfaced through the [`RecordProvider`](crate::RecordProvider)
/// trait.
#[derive(Error, Debug)]
pub enum Error {
    /// The provider backend rejected or failed the operation.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider is misconfigured; nothing was sent over the network.
    #[error("configuration error: {0}")]
    Config(String),

    /// A caller-supplied record is not usable for the requested operation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
