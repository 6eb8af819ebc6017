use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::ExtractionConfig;
use crate::models::DocumentRecord;
use crate::parsing::{FieldParser, HeuristicParser, RegionParser, Strategy};
use crate::processing::{ImageProcessor, StoredUpload, TextRecognizer, Translator};
use crate::utils::ExtractionError;

/// Entry point of the pipeline: image in, record out.
pub struct CardExtractor<R: TextRecognizer, T: Translator> {
    config: ExtractionConfig,
    recognizer: R,
    translator: Option<T>,
    upload_dir: PathBuf,
}

impl<R: TextRecognizer, T: Translator> CardExtractor<R, T> {
    pub fn new(config: ExtractionConfig, recognizer: R, translator: Option<T>) -> Self {
        CardExtractor {
            config,
            recognizer,
            translator,
            upload_dir: std::env::temp_dir(),
        }
    }

    /// Directory where uploads are parked while they are processed.
    pub fn with_upload_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.upload_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn extract(&self, image_bytes: &[u8], strategy: Strategy) -> Result<DocumentRecord, ExtractionError> {
        let image = ImageProcessor::decode(image_bytes)?;
        let record = match strategy {
            Strategy::Heuristic => HeuristicParser::new(&self.config).parse(&image, &self.recognizer),
            Strategy::Region => RegionParser::new(&self.config, self.translator.as_ref())
                .parse(&image, &self.recognizer),
        }?;
        info!(
            "Extracted {} fields with {:?} strategy",
            record.populated_fields(),
            strategy
        );
        Ok(record)
    }

    /// Stores the upload, extracts from it and deletes it again, on success
    /// and on failure alike.
    pub fn extract_upload(
        &self,
        file_name: &str,
        bytes: &[u8],
        strategy: Strategy,
    ) -> Result<DocumentRecord, ExtractionError> {
        let upload = StoredUpload::save(&self.upload_dir, file_name, bytes)?;
        let result = upload.read().and_then(|data| self.extract(&data, strategy));
        if let Err(e) = upload.delete() {
            warn!("Upload cleanup failed: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::stubs::{Failing, FixedText, TaggingTranslator};
    use image::{GrayImage, Luma};

    const CARD: &str = "ROYAUME DU MAROC\nBENALI\nYOUSSEF\n12.05.1990\nné à Casablanca\nAB123456\nValable jusqu'au 01.01.2030";

    fn png_card() -> Vec<u8> {
        ImageProcessor::encode_png(&GrayImage::from_pixel(60, 40, Luma([180u8]))).unwrap()
    }

    fn extractor(recognizer: FixedText) -> CardExtractor<FixedText, TaggingTranslator> {
        CardExtractor::new(ExtractionConfig::default(), recognizer, None)
    }

    #[test]
    fn test_heuristic_end_to_end() {
        let record = extractor(FixedText::new(CARD))
            .extract(&png_card(), Strategy::Heuristic)
            .unwrap();
        assert_eq!(record.last_name.as_deref(), Some("BENALI"));
        assert_eq!(record.first_name.as_deref(), Some("YOUSSEF"));
        assert_eq!(record.place_of_birth.as_deref(), Some("Casablanca"));
        assert_eq!(record.expiration_date.as_deref(), Some("01.01.2030"));
        assert_eq!(record.populated_fields(), 6);
    }

    #[test]
    fn test_wrong_document_has_no_partial_record() {
        let text = CARD.replace("ROYAUME DU MAROC", "");
        let result = extractor(FixedText::new(&text)).extract(&png_card(), Strategy::Heuristic);
        assert!(matches!(result, Err(ExtractionError::UnrecognizedDocument { .. })));
    }

    #[test]
    fn test_undecodable_upload() {
        let result = extractor(FixedText::new(CARD)).extract(b"\x00\x01garbage", Strategy::Region);
        assert!(matches!(result, Err(ExtractionError::Decode(_))));
    }

    #[test]
    fn test_region_strategy_survives_translator_absence() {
        let record = extractor(FixedText::new("AB123456"))
            .extract(&png_card(), Strategy::Region)
            .unwrap();
        assert_eq!(record.id_code.as_deref(), Some("AB123456"));
        assert!(record.first_name_translated_ar.is_none());
    }

    #[test]
    fn test_region_strategy_with_translator() {
        let extractor = CardExtractor::new(
            ExtractionConfig::default(),
            FixedText::new("BENALI"),
            Some(TaggingTranslator { fail_on: None }),
        );
        let record = extractor.extract(&png_card(), Strategy::Region).unwrap();
        assert_eq!(record.last_name_translated_ar.as_deref(), Some("ar:BENALI"));
    }

    #[test]
    fn test_upload_removed_after_success_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        let ok = extractor(FixedText::new(CARD)).with_upload_dir(dir.path());
        assert!(ok.extract_upload("card.png", &png_card(), Strategy::Heuristic).is_ok());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        let failing: CardExtractor<Failing, TaggingTranslator> =
            CardExtractor::new(ExtractionConfig::default(), Failing, None).with_upload_dir(dir.path());
        let result = failing.extract_upload("card.jpg", &png_card(), Strategy::Heuristic);
        assert!(matches!(result, Err(ExtractionError::Recognition(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_upload_with_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let result = extractor(FixedText::new(CARD))
            .with_upload_dir(dir.path())
            .extract_upload("card.tiff", &png_card(), Strategy::Heuristic);
        assert!(matches!(result, Err(ExtractionError::Decode(_))));
    }
}
