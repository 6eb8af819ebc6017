use image::{DynamicImage, GrayImage};
use log::{debug, warn};

use super::patterns;
use super::FieldParser;
use crate::config::ExtractionConfig;
use crate::models::{DocumentRecord, Region, RegionField};
use crate::processing::{
    clean_text, ImageProcessor, PageSegmentation, RegionSegmenter, TextRecognizer, Translator,
};
use crate::utils::ExtractionError;

/// Region strategy: resize the card to the canonical geometry and read each
/// configured region separately.
///
/// A failing region or translation only marks its own field; the rest of
/// the record is still returned.
pub struct RegionParser<'a, T: Translator> {
    config: &'a ExtractionConfig,
    translator: Option<&'a T>,
}

impl<'a, T: Translator> RegionParser<'a, T> {
    pub fn new(config: &'a ExtractionConfig, translator: Option<&'a T>) -> Self {
        RegionParser { config, translator }
    }

    fn read_region<R: TextRecognizer>(
        &self,
        canonical: &GrayImage,
        region: &Region,
        recognizer: &R,
        record: &mut DocumentRecord,
    ) {
        let field = region.field;
        if slot(record, field).is_some() {
            debug!("Region {} already read, skipping duplicate", field.name());
            return;
        }

        let crop = RegionSegmenter::crop(canonical, region);
        let language = self.config.language_for(field.script());
        let text = match recognizer.recognize(&crop, language, Some(PageSegmentation::SingleBlock)) {
            Ok(text) => text,
            Err(e) => {
                warn!("Region {} failed: {}", field.name(), e);
                *slot(record, field) = Some(format!("Error: {}", e));
                return;
            }
        };

        let cleaned = clean_text(&text, field.field_class());
        debug!("Region {} [{}]: {:?} -> {:?}", field.name(), language, text.trim(), cleaned);
        if cleaned.is_empty() {
            return;
        }
        if field == RegionField::CardId && !patterns::is_id_code(&cleaned) {
            warn!("Region {} read {:?}, not a card number", field.name(), cleaned);
            return;
        }

        if field.is_translated() {
            if let (Some(translator), Some(mirror)) = (self.translator, mirror_slot(record, field)) {
                *mirror = Some(
                    match translator.translate(
                        &cleaned,
                        &self.config.translation_source,
                        &self.config.translation_target,
                    ) {
                        Ok(translated) => translated,
                        Err(e) => {
                            warn!("Translation of {} failed: {}", field.name(), e);
                            format!("Translation error: {}", e)
                        }
                    },
                );
            }
        }
        *slot(record, field) = Some(cleaned);
    }
}

impl<T: Translator> FieldParser for RegionParser<'_, T> {
    fn parse<R: TextRecognizer>(
        &self,
        image: &DynamicImage,
        recognizer: &R,
    ) -> Result<DocumentRecord, ExtractionError> {
        let canonical = ImageProcessor::canonicalize(
            image,
            self.config.canonical_width,
            self.config.canonical_height,
        );
        let mut record = DocumentRecord::new();
        for region in &self.config.regions {
            self.read_region(&canonical, region, recognizer, &mut record);
        }
        debug!("Region parse found {} fields", record.populated_fields());
        Ok(record)
    }
}

fn slot(record: &mut DocumentRecord, field: RegionField) -> &mut Option<String> {
    match field {
        RegionField::LastNameLatin => &mut record.last_name,
        RegionField::FirstNameLatin => &mut record.first_name,
        RegionField::LastNameArabic => &mut record.last_name_ar,
        RegionField::FirstNameArabic => &mut record.first_name_ar,
        RegionField::BirthDate => &mut record.date_of_birth,
        RegionField::BirthPlace => &mut record.place_of_birth,
        RegionField::CardId => &mut record.id_code,
        RegionField::ExpiryDate => &mut record.expiration_date,
    }
}

fn mirror_slot(record: &mut DocumentRecord, field: RegionField) -> Option<&mut Option<String>> {
    match field {
        RegionField::LastNameLatin => Some(&mut record.last_name_translated_ar),
        RegionField::FirstNameLatin => Some(&mut record.first_name_translated_ar),
        _ => None,
    }
}
