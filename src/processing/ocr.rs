use std::io::Write;

use image::GrayImage;
use log::debug;
use tesseract::{PageSegMode, Tesseract};

use crate::processing::ImageProcessor;
use crate::utils::RecognitionError;

/// Page layout assumption passed to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSegmentation {
    Auto,
    /// A single uniform block of text (tesseract psm 6).
    SingleBlock,
}

impl PageSegmentation {
    fn to_tesseract(self) -> PageSegMode {
        match self {
            PageSegmentation::Auto => PageSegMode::PsmAuto,
            PageSegmentation::SingleBlock => PageSegMode::PsmSingleBlock,
        }
    }
}

/// Turns an image into text. `language` is the engine's model selector,
/// e.g. `"fra"`, `"ara"` or `"ara+fra"`.
pub trait TextRecognizer {
    fn recognize(
        &self,
        image: &GrayImage,
        language: &str,
        mode: Option<PageSegmentation>,
    ) -> Result<String, RecognitionError>;
}

/// Recognizer backed by the tesseract engine.
pub struct TesseractRecognizer {
    /// Directory holding `*.traineddata`. `None` lets tesseract fall back
    /// to `TESSDATA_PREFIX`.
    tessdata_path: Option<String>,
}

impl TesseractRecognizer {
    pub fn new(tessdata_path: Option<String>) -> Self {
        TesseractRecognizer { tessdata_path }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(
        &self,
        image: &GrayImage,
        language: &str,
        mode: Option<PageSegmentation>,
    ) -> Result<String, RecognitionError> {
        let png = ImageProcessor::encode_png(image)
            .map_err(|e| RecognitionError(format!("Failed to encode image: {}", e)))?;

        let mut temp_file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| RecognitionError(format!("Failed to create temp file: {}", e)))?;
        temp_file
            .write_all(&png)
            .map_err(|e| RecognitionError(format!("Failed to write to temp file: {}", e)))?;
        let path_str = temp_file
            .path()
            .to_str()
            .ok_or_else(|| RecognitionError("Failed to convert path to string".to_string()))?;

        let mut tess = Tesseract::new(self.tessdata_path.as_deref(), Some(language))
            .map_err(|e| RecognitionError(format!("Tesseract init error ({}): {}", language, e)))?;
        if let Some(mode) = mode {
            tess.set_page_seg_mode(mode.to_tesseract());
        }
        let text = tess
            .set_image(path_str)
            .map_err(|e| RecognitionError(format!("Tesseract set image error: {}", e)))?
            .get_text()
            .map_err(|e| RecognitionError(format!("Tesseract error: {}", e)))?;

        debug!("OCR [{}] {}x{}:\n{}", language, image.width(), image.height(), text);
        Ok(text)
    }
}
