use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::models::{default_regions, Region, Script};
use crate::utils::ConfigError;

/// Tunables for both extraction strategies.
///
/// The threshold and canonical geometry are empirical values kept as
/// overridable defaults. Every field has a default so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Luminance below this becomes black in whole-document mode.
    pub binarize_threshold: u8,
    pub canonical_width: u32,
    pub canonical_height: u32,
    /// Text that must appear in the OCR output for the card to be accepted.
    pub document_header: String,
    pub whole_document_language: String,
    pub latin_language: String,
    pub arabic_language: String,
    /// Language pair for mirroring Latin names into Arabic.
    pub translation_source: String,
    pub translation_target: String,
    pub tessdata_path: Option<String>,
    pub regions: Vec<Region>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            binarize_threshold: 128,
            canonical_width: 515,
            canonical_height: 321,
            document_header: "ROYAUME DU MAROC".to_string(),
            whole_document_language: "ara+fra".to_string(),
            latin_language: "fra".to_string(),
            arabic_language: "ara".to_string(),
            translation_source: "fr".to_string(),
            translation_target: "ar".to_string(),
            tessdata_path: None,
            regions: default_regions(),
        }
    }
}

impl ExtractionConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        info!("Loaded extraction config from {} ({} regions)", path.display(), config.regions.len());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ExtractionConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canonical_width == 0 || self.canonical_height == 0 {
            return Err(ConfigError::InvalidGeometry {
                width: self.canonical_width,
                height: self.canonical_height,
            });
        }
        for region in &self.regions {
            region.validate()?;
        }
        Ok(())
    }

    pub fn language_for(&self, script: Script) -> &str {
        match script {
            Script::Latin => &self.latin_language,
            Script::Arabic => &self.arabic_language,
        }
    }
}
