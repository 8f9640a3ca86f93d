//! Result and error types for Animar.

use thiserror::Error;

/// Result type for Animar operations
pub type AnimarResult<T> = Result<T, AnimarError>;

/// Errors that can occur in Animar
#[derive(Debug, Error)]
pub enum AnimarError {
    /// Frame count too small for a meaningful fraction denominator
    #[error("Invalid frame count {frames}: an animation needs at least 2 frames")]
    InvalidFrameCount {
        /// Frame count that was rejected
        frames: u32,
    },

    /// Vertex counts differ between blend endpoints
    #[error("Vertex count mismatch: expected {expected} vertices, got {actual}")]
    VertexCountMismatch {
        /// Vertex count of the first endpoint
        expected: usize,
        /// Vertex count of the second endpoint
        actual: usize,
    },

    /// Frame sink error (encoder rejected a frame or a call out of session order)
    #[error("Frame sink error: {message}")]
    Sink {
        /// Error message
        message: String,
    },

    /// I/O error from a sink implementation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_frame_count_message() {
        let err = AnimarError::InvalidFrameCount { frames: 1 };
        assert!(err.to_string().contains("at least 2 frames"));
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_vertex_count_mismatch_reports_both_counts() {
        let err = AnimarError::VertexCountMismatch {
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: AnimarError = io.into();
        assert!(matches!(err, AnimarError::Io(_)));
    }
}
