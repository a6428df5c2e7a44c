use thiserror::Error;

/// Errors produced by the client and the dispatch loop.
#[derive(Error, Debug)]
pub enum BotError {
    /// Network-level failure performing the HTTP call. Retried by the loop.
    #[error("transport error: {0}")]
    Transport(String),

    /// The platform answered `ok:false`; carries the description verbatim.
    #[error("telegram api error: {0}")]
    Api(String),

    /// The response body did not match the expected envelope shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A handler rejected an update. Scoped to that update; never stops the loop.
    #[error("handler error: {0}")]
    Handler(#[from] HandlerError),

    /// The configured retry ceiling was reached while polling.
    #[error("retry limit reached after {attempts} attempts: {last}")]
    RetryExhausted { attempts: u32, last: String },
}

/// Failure reported by a user handler.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
