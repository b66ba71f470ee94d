//! Selected-file handle and the document payload encoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest document accepted for translation (20 MB)
pub const MAX_FILE_BYTES: u64 = 20 * 1024 * 1024;

/// Media type sent with PDF documents
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Reasons a document cannot be selected or read
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("File is too large ({}).\nMaximum allowed size is 20 MB.", size_label(.size))]
    TooLarge { size: u64 },

    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Only PDF files are supported: {0}")]
    Unsupported(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format a byte count as megabytes with two decimals
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Handle to the currently selected document
///
/// Only metadata is captured on selection; the contents are read when a
/// translation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    path: PathBuf,
    name: String,
    size: u64,
    media_type: Option<&'static str>,
}

impl DocumentFile {
    /// Stat a file and apply the size guard
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(DocumentError::NotAFile(path.to_path_buf()));
        }

        Self::from_parts(path, metadata.len())
    }

    /// Build a handle from a known size, applying the size guard
    pub fn from_parts(path: impl AsRef<Path>, size: u64) -> Result<Self, DocumentError> {
        if size > MAX_FILE_BYTES {
            return Err(DocumentError::TooLarge { size });
        }

        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            media_type: media_type_for(&path),
            path,
            name,
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown in the UI
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Size label, e.g. `"1.50 MB"`
    pub fn size_label(&self) -> String {
        format_megabytes(self.size)
    }

    /// Detected media type, if recognised
    pub fn media_type(&self) -> Option<&'static str> {
        self.media_type
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == Some(PDF_MEDIA_TYPE)
    }

    /// Read the whole file and encode it as standard padded base64
    ///
    /// The size guard is applied again here since the file may have changed
    /// after it was selected. At most `MAX_FILE_BYTES + 1` bytes are read.
    pub fn read_base64(&self) -> Result<String, DocumentError> {
        let read_error = |source| DocumentError::Read {
            path: self.path.clone(),
            source,
        };

        let file = File::open(&self.path).map_err(read_error)?;
        let size = file.metadata().map_err(read_error)?.len();
        if size > MAX_FILE_BYTES {
            return Err(DocumentError::TooLarge { size });
        }

        let mut bytes = Vec::with_capacity(size as usize);
        file.take(MAX_FILE_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(read_error)?;
        if bytes.len() as u64 > MAX_FILE_BYTES {
            return Err(DocumentError::TooLarge {
                size: bytes.len() as u64,
            });
        }
        Ok(encode_base64(&bytes))
    }
}

/// Encode bytes as standard padded base64
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

fn size_label(size: &u64) -> String {
    format_megabytes(*size)
}

/// Media type implied by a path's extension
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "pdf" => Some(PDF_MEDIA_TYPE),
        _ => None,
    }
}
