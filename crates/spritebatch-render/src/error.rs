//! Error types for the sprite batch.

use thiserror::Error;

/// Broad category of a [`BatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call is not valid in the current begin/end state.
    InvalidOperation,
    /// An argument was rejected before any state was touched.
    InvalidArgument,
}

/// Errors reported by [`SpriteBatch`](crate::SpriteBatch).
///
/// All of these indicate a programming error in the caller. The batch is
/// left exactly as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("begin cannot be called again until end has been successfully called")]
    BeginWithoutEnd,

    #[error("begin must be called before calling draw")]
    DrawWithoutBegin,

    #[error("begin must be called before calling end")]
    EndWithoutBegin,

    #[error("texture handle is null")]
    NullTexture,

    #[error("texture {width}x{height} has no texels to sample")]
    EmptyTexture { width: u32, height: u32 },

    #[error("effect '{name}' has no passes")]
    EffectWithoutPasses { name: String },
}

impl BatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BatchError::BeginWithoutEnd
            | BatchError::DrawWithoutBegin
            | BatchError::EndWithoutBegin => ErrorKind::InvalidOperation,
            BatchError::NullTexture
            | BatchError::EmptyTexture { .. }
            | BatchError::EffectWithoutPasses { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type for sprite batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(BatchError::BeginWithoutEnd.kind(), ErrorKind::InvalidOperation);
        assert_eq!(BatchError::DrawWithoutBegin.kind(), ErrorKind::InvalidOperation);
        assert_eq!(BatchError::EndWithoutBegin.kind(), ErrorKind::InvalidOperation);
        assert_eq!(BatchError::NullTexture.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            BatchError::EmptyTexture {
                width: 0,
                height: 4
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BatchError::BeginWithoutEnd.to_string(),
            "begin cannot be called again until end has been successfully called"
        );
        assert_eq!(
            BatchError::EmptyTexture {
                width: 0,
                height: 4
            }
            .to_string(),
            "texture 0x4 has no texels to sample"
        );
    }
}
