use image::DynamicImage;
use log::{debug, info};

use super::patterns;
use super::FieldParser;
use crate::config::ExtractionConfig;
use crate::models::{set_once, DocumentRecord};
use crate::processing::{ImageProcessor, TextRecognizer};
use crate::utils::ExtractionError;

/// Whole-document strategy: OCR the binarized card once, then assign
/// lines to fields.
///
/// Every field keeps the first line that qualifies for it. Names rely on
/// the surname line coming before the given-name line in OCR order; a
/// card read out of order swaps them.
pub struct HeuristicParser<'a> {
    config: &'a ExtractionConfig,
}

impl<'a> HeuristicParser<'a> {
    pub fn new(config: &'a ExtractionConfig) -> Self {
        HeuristicParser { config }
    }

    pub fn parse_text(&self, text: &str) -> Result<DocumentRecord, ExtractionError> {
        if !text.contains(&self.config.document_header) {
            info!("Header {:?} not found, rejecting document", self.config.document_header);
            return Err(ExtractionError::UnrecognizedDocument {
                expected: self.config.document_header.clone(),
            });
        }

        let mut record = DocumentRecord::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            self.scan_line(line, &mut record);
        }
        debug!("Heuristic parse found {} fields", record.populated_fields());
        Ok(record)
    }

    // Rules are independent: one line may feed several fields.
    fn scan_line(&self, line: &str, record: &mut DocumentRecord) {
        if patterns::is_name_line(line) && !line.contains(&self.config.document_header) {
            if record.last_name.is_none() {
                record.last_name = Some(line.to_string());
            } else {
                set_once(&mut record.first_name, line);
            }
        }

        if record.date_of_birth.is_none() {
            if let Some(date) = patterns::find_date(line) {
                record.date_of_birth = Some(date.to_string());
            }
        }

        if record.place_of_birth.is_none() && line.contains('à') {
            record.place_of_birth = patterns::find_birth_place(line);
        }

        if record.id_code.is_none() {
            if let Some(code) = patterns::find_id_code(line) {
                record.id_code = Some(code.to_string());
            }
        }

        if record.expiration_date.is_none() && patterns::is_expiry_line(line) {
            record.expiration_date = patterns::find_date(line).map(str::to_string);
        }

        if record.director.is_none() {
            record.director = patterns::find_director(line);
        }
    }
}

impl FieldParser for HeuristicParser<'_> {
    fn parse<R: TextRecognizer>(
        &self,
        image: &DynamicImage,
        recognizer: &R,
    ) -> Result<DocumentRecord, ExtractionError> {
        let binary = ImageProcessor::binarize(image, self.config.binarize_threshold);
        let text = recognizer.recognize(&binary, &self.config.whole_document_language, None)?;
        self.parse_text(&text)
    }
}
