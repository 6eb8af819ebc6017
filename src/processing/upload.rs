use std::io::Write;
use std::path::Path;

use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::utils::ExtractionError;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// An uploaded image parked on disk for the duration of one request.
/// The file is removed when the guard is dropped, whatever the outcome.
pub struct StoredUpload {
    file: NamedTempFile,
}

impl StoredUpload {
    /// Returns the lowercase extension if the file name is acceptable.
    pub fn check_file_name(file_name: &str) -> Result<String, ExtractionError> {
        if file_name.trim().is_empty() {
            return Err(ExtractionError::Decode("No file selected".to_string()));
        }
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            Ok(extension)
        } else {
            Err(ExtractionError::Decode(format!(
                "Unsupported file format {:?}, use PNG, JPG or JPEG",
                file_name
            )))
        }
    }

    pub fn save<P: AsRef<Path>>(dir: P, file_name: &str, bytes: &[u8]) -> Result<Self, ExtractionError> {
        let extension = Self::check_file_name(file_name)?;
        let suffix = format!(".{}", extension);
        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&suffix)
            .tempfile_in(dir.as_ref())
            .map_err(|e| ExtractionError::Internal(format!("Failed to create upload file: {}", e)))?;
        file.write_all(bytes)
            .map_err(|e| ExtractionError::Internal(format!("Failed to write upload file: {}", e)))?;
        debug!("Stored upload {:?} at {}", file_name, file.path().display());
        Ok(StoredUpload { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn read(&self) -> Result<Vec<u8>, ExtractionError> {
        std::fs::read(self.path())
            .map_err(|e| ExtractionError::Internal(format!("Failed to read upload file: {}", e)))
    }

    /// Deletes the file now and reports failures instead of ignoring them.
    pub fn delete(self) -> Result<(), ExtractionError> {
        let path = self.path().to_path_buf();
        self.file.close().map_err(|e| {
            warn!("Failed to delete upload {}: {}", path.display(), e);
            ExtractionError::Internal(format!("Failed to delete upload file: {}", e))
        })
    }
}
