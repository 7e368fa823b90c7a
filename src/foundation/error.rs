/// Convenience result type used across linocut.
pub type LinocutResult<T> = Result<T, LinocutError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Every error is terminal for the invocation that produced it: the pipeline
/// fails before emitting any partial output and never retries internally.
#[derive(thiserror::Error, Debug)]
pub enum LinocutError {
    /// The source bytes could not be interpreted as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// An out-of-range size, shade count, grid size, radius, or turn count.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An unsupported output format or a failed serialization.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LinocutError {
    /// Build a [`LinocutError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`LinocutError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`LinocutError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
