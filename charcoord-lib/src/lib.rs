//! Export per-character atlas metrics from a font JSON file as `CharCoord` literals
pub mod error;
pub mod export;
pub mod number;
pub mod structs;

pub use error::ExportError;
pub use export::{export, export_path, read_document};
pub use number::MetricValue;
pub use structs::{AtlasInfo, CharacterMetric, FontDocument};
