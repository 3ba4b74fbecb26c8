//! Error type for icon generation.
//!
//! Source failures (missing or unparsable SVG) abort the whole run, see
//! [`IconError::is_fatal`]. The rest are normally scoped to a single size.

use std::path::PathBuf;

/// Failure modes of icon generation.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The SVG source does not exist.
    #[error("SVG file not found: {}", path.display())]
    SourceMissing {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The SVG source exists but could not be parsed.
    #[error("Failed to parse SVG {}: {message}", path.display())]
    Parse {
        /// Path of the source file.
        path: PathBuf,
        /// Parser error description.
        message: String,
    },

    /// A requested size is zero or above [`MAX_ICON_SIZE`](crate::MAX_ICON_SIZE).
    #[error("Invalid icon size {size}x{size}")]
    InvalidSize {
        /// The offending edge length in pixels.
        size: u32,
    },

    /// Drawing the built-in artwork failed.
    #[error("Failed to draw icon: {0}")]
    Draw(String),

    /// PNG encoding of a rendered pixmap failed.
    #[error("Failed to encode PNG: {0}")]
    Encode(String),

    /// A filesystem operation failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// The path being read, written or created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    /// Construct an [`IconError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the SVG source itself is unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SourceMissing { .. } | Self::Parse { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_missing_is_fatal() {
        let err = IconError::SourceMissing {
            path: PathBuf::from("icons/icon.svg"),
        };
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "SVG file not found: icons/icon.svg");
    }

    #[test]
    fn per_size_errors_are_not_fatal() {
        assert!(!IconError::InvalidSize { size: 0 }.is_fatal());
        assert!(!IconError::Encode("boom".into()).is_fatal());
        assert!(!IconError::Draw("empty path".into()).is_fatal());
        let io = IconError::io(
            "icons/icon-16x16.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!io.is_fatal());
        assert!(io.to_string().contains("icon-16x16.png"));
    }
}
