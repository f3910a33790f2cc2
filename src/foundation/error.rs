/// Convenience result type used across Pixface.
pub type PixfaceResult<T> = Result<T, PixfaceError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PixfaceError {
    /// Schema or type violation while parsing a canvas document.
    /// Fatal to `setup`; no partial engine state is retained.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Errors while probing or decoding an embedded frame image.
    #[error("image decode error: {0}")]
    Decode(String),

    /// Errors while constructing sprite state from a loop entry.
    #[error("sprite error: {0}")]
    Sprite(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixfaceError {
    /// Build a [`PixfaceError::MalformedDocument`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    /// Build a [`PixfaceError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PixfaceError::Sprite`] value.
    pub fn sprite(msg: impl Into<String>) -> Self {
        Self::Sprite(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
