pub mod cleaning;
pub mod image;
pub mod ocr;
pub mod segmentation;
pub mod translation;
pub mod upload;

pub use cleaning::{clean_text, FieldClass};
pub use self::image::ImageProcessor;
pub use ocr::{PageSegmentation, TesseractRecognizer, TextRecognizer};
pub use segmentation::{PixelBounds, RegionSegmenter};
pub use translation::{HttpTranslator, Translator};
pub use upload::StoredUpload;
