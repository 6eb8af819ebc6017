pub mod error;

pub use error::{ConfigError, ErrorClass, ExtractionError, RecognitionError, TranslationError};
