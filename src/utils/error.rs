use thiserror::Error;

/// Whether a failure was caused by the uploaded document or by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    Server,
}

/// Failure of the text recognizer on one image or region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RecognitionError(pub String);

/// Failure of the translator. Never fatal for a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TranslationError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid region {name}: {reason}")]
    InvalidRegion { name: String, reason: String },

    #[error("Invalid canonical geometry: {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },
}

/// Everything `extract` can fail with.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Unrecognized document: header {expected:?} not found")]
    UnrecognizedDocument { expected: String },

    #[error("Recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExtractionError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ExtractionError::Decode(_) | ExtractionError::UnrecognizedDocument { .. } => {
                ErrorClass::Client
            }
            ExtractionError::Recognition(_) | ExtractionError::Internal(_) => ErrorClass::Server,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert_eq!(ExtractionError::Decode("bad".into()).class(), ErrorClass::Client);
        let wrong = ExtractionError::UnrecognizedDocument {
            expected: "ROYAUME DU MAROC".into(),
        };
        assert_eq!(wrong.class(), ErrorClass::Client);
        let ocr: ExtractionError = RecognitionError("engine down".into()).into();
        assert_eq!(ocr.class(), ErrorClass::Server);
        assert_eq!(ExtractionError::Internal("io".into()).class(), ErrorClass::Server);
    }

    #[test]
    fn test_error_messages() {
        let err: ExtractionError = RecognitionError("no tessdata".into()).into();
        assert_eq!(err.to_string(), "Recognition error: no tessdata");
    }
}
