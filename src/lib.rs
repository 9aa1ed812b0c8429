//! xlcloud - word clouds with hover tooltips, from a spreadsheet
//!
//! Loads (word, explanation) pairs from the first two columns of an XLSX or
//! CSV file, hands them to wordcloud2.js for layout, then recovers where each
//! word landed by scanning the rendered canvas:
//! - every word is drawn in its own palette color
//! - the canvas pixels are clustered by exact color into bounding boxes
//! - each box is matched back to a word within a small color tolerance
//!
//! Hovering a box shows the word's explanation in a tooltip.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { WordCloudView } from 'xlcloud';
//! await init();
//! const view = new WordCloudView(container, canvas, tooltip, { tolerance: 25 });
//! view.attachFileInput(document.getElementById('file'));
//! ```

// Input
pub mod cell_ref;
pub mod csv;
pub mod error;
pub mod parser;
pub mod types;
pub mod words;

// Coloring and layout
pub mod catalog;
pub mod color;
pub mod config;
pub mod layout;
pub mod palette;

pub mod raster;
pub mod resolve;
pub mod scan;
pub mod session;
pub mod tooltip;

pub mod logging;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::WordCloudView;

pub use catalog::WordCatalog;
pub use config::CloudConfig;
pub use error::{CloudError, Result};
pub use session::Session;
pub use types::*;

/// Read a file and return its word entries as a JS array
///
/// # Arguments
/// * `data` - The raw bytes of the file
/// * `file_name` - Used only to pick the reader by extension
///
/// # Errors
/// Returns an error if the file cannot be parsed or holds no words.
#[wasm_bindgen(js_name = "parseWords")]
pub fn parse_words(data: &[u8], file_name: &str) -> std::result::Result<JsValue, JsValue> {
    let rows = parser::read_rows(data, parser::InputFormat::from_file_name(file_name))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let entries = words::extract_entries(&rows).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&entries)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
