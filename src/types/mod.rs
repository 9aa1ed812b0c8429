//! Data types for the word cloud.

mod geometry;
mod table;
mod word;

pub use geometry::*;
pub use table::*;
pub use word::*;
