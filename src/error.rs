//! Structured error types for xlcloud.
//!
//! Every failure returns control to "waiting for the next file"; none of
//! these are fatal. Colour collisions and render races are not errors at all.

/// All errors that can occur while loading words or reading rendered pixels.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// The first column held no usable words.
    #[error("No words found in the first column.")]
    NoWords,

    /// The file could not be read at all.
    #[error("Failed to read file.")]
    Read,

    /// XML parsing error from quick-xml.
    #[error("Failed to parse file: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP archive error.
    #[error("Failed to parse file: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// General parse error.
    #[error("Failed to parse file: {0}")]
    Parse(String),

    /// Malformed pixel buffer or undecodable image.
    #[error("Raster error: {0}")]
    Raster(String),

    /// The external renderer could not be invoked.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CloudError>;

impl From<String> for CloudError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for CloudError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<CloudError> for wasm_bindgen::JsValue {
    fn from(e: CloudError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
