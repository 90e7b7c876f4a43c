//! # ocrion-rs
//!
//! Reconstructs human reading order from spatially unordered OCR detections and assembles
//! them into a single multi-line text stream for downstream extraction.
//!
//! ## Pipeline
//!
//! - **Normalization**: pixel boxes are rescaled into a 1000×1000 virtual canvas
//! - **Row clustering**: detections are grouped into rows using half the median line height
//! - **Sorting**: rows top-to-bottom, detections within a row left-to-right
//! - **Line assembly**: blocks are joined into lines, breaking on large vertical jumps
//!
//! Ordering and assembly are best-effort: apart from invalid image dimensions, failures
//! degrade to detection order or a naive join and are logged as warnings.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ocrion_rs::prelude::*;
//!
//! let regions = vec![
//!     DetectedRegion::new("World", BoundingBox::new(110.0, 10.0, 200.0, 30.0), 0.9)?,
//!     DetectedRegion::new("Hello", BoundingBox::new(10.0, 10.0, 100.0, 30.0), 0.9)?,
//! ];
//! let config = LayoutConfig::default();
//! let blocks = order_blocks(&regions, 800, 600, &config)?;
//! assert_eq!(combine_text(&blocks, &config), "Hello World");
//! ```

pub mod block;
pub mod config;
pub mod document;
pub mod error;
pub mod line_assembler;
pub mod normalizer;
pub mod reading_order;
pub mod row_clusterer;
pub mod row_sorter;

// Re-export commonly used types at the root level
pub use block::{median_height, BlockType, NormalizedRegion, OrderedBlock};
pub use config::LayoutConfig;
pub use document::{DocumentMetadata, DocumentOptions, DocumentProcessor, ProcessedDocument};
pub use error::LayoutError;
pub use line_assembler::{assemble_lines, combine_text, AssembledText};
pub use normalizer::normalize_regions;
pub use reading_order::{order_blocks, order_blocks_with_report, OrderedLayout};
pub use row_clusterer::{cluster_rows, Row};
pub use row_sorter::{into_blocks, sort_rows};

pub use ocrion_ocr::{BoundingBox, DetectedRegion};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```ignore
/// use ocrion_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        assemble_lines, cluster_rows, combine_text, normalize_regions, order_blocks,
        order_blocks_with_report, sort_rows, AssembledText, BlockType, BoundingBox, DetectedRegion,
        DocumentOptions, DocumentProcessor, LayoutConfig, LayoutError, OrderedBlock, OrderedLayout,
        ProcessedDocument, Row,
    };
}
