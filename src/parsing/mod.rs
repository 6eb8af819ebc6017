pub mod heuristic;
pub mod patterns;
pub mod region;

use image::DynamicImage;

use crate::models::DocumentRecord;
use crate::processing::TextRecognizer;
use crate::utils::ExtractionError;

pub use heuristic::HeuristicParser;
pub use region::RegionParser;

/// Turns a decoded card image into a record. The two strategies share
/// this contract; callers pick one explicitly.
pub trait FieldParser {
    fn parse<R: TextRecognizer>(
        &self,
        image: &DynamicImage,
        recognizer: &R,
    ) -> Result<DocumentRecord, ExtractionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// OCR the whole card and assign lines to fields.
    #[default]
    Heuristic,
    /// OCR fixed regions of the resized card one by one.
    Region,
}
