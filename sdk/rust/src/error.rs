//! SDK error taxonomy.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by the relay client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// One attempt exceeded its deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The relay answered with a non-success status. The message is the
    /// decoded `error` field when the body carried one.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(reqwest::Error),

    /// A success response carried a body that did not decode.
    #[error("response could not be decoded: {0}")]
    Decode(reqwest::Error),

    /// Every allowed attempt failed; carries the final attempt's message.
    #[error("Failed after {attempts} attempts: {message}")]
    Exhausted { attempts: u32, message: String },
}
