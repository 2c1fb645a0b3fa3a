/// Convenience result type used across annolayout.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// A coordinated span violates `start <= end` or carries a negative coordinate.
    #[error("invalid span: {0}")]
    InvalidSpan(String),

    /// A target span does not start and end on word boundaries.
    #[error("misaligned target: {0}")]
    MisalignedTarget(String),

    /// Tokenizer input was empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid configuration or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Discriminant of a [`LayoutError`], for callers that branch on the failure class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`LayoutError::InvalidSpan`].
    InvalidSpan,
    /// See [`LayoutError::MisalignedTarget`].
    MisalignedTarget,
    /// See [`LayoutError::EmptyInput`].
    EmptyInput,
    /// See [`LayoutError::Validation`].
    Validation,
    /// See [`LayoutError::Serde`].
    Serde,
    /// See [`LayoutError::Other`].
    Other,
}

impl LayoutError {
    /// Build a [`LayoutError::InvalidSpan`] value.
    pub fn invalid_span(msg: impl Into<String>) -> Self {
        Self::InvalidSpan(msg.into())
    }

    /// Build a [`LayoutError::MisalignedTarget`] value.
    pub fn misaligned_target(msg: impl Into<String>) -> Self {
        Self::MisalignedTarget(msg.into())
    }

    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSpan(_) => ErrorKind::InvalidSpan,
            Self::MisalignedTarget(_) => ErrorKind::MisalignedTarget,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Serde(_) => ErrorKind::Serde,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
