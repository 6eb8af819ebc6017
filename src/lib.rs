pub mod card_extractor;
pub mod config;
pub mod models;
pub mod parsing;
pub mod processing;
pub mod utils;

pub use card_extractor::CardExtractor;
pub use config::ExtractionConfig;
pub use models::DocumentRecord;
pub use parsing::Strategy;
pub use utils::{ErrorClass, ExtractionError};
