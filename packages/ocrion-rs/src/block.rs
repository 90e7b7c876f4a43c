//! Region and block types shared by the layout stages.
use ocrion_ocr::{BoundingBox, DetectedRegion};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A detection whose box has been rescaled into the virtual canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRegion {
    pub text: String,
    pub bbox: BoundingBox,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Text,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Text => f.write_str("text"),
        }
    }
}

/// A block in reading order.
///
/// `bbox` is in the coordinate space of the region that produced it: normalized canvas units
/// on the normal path, source pixels when ordering fell back to detection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedBlock {
    pub text: String,
    pub bbox: BoundingBox,
    pub page_num: u32,
    pub block_type: BlockType,
}

impl OrderedBlock {
    /// Single-page text block.
    pub fn text(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox,
            page_num: 1,
            block_type: BlockType::Text,
        }
    }
}

impl From<NormalizedRegion> for OrderedBlock {
    fn from(region: NormalizedRegion) -> Self {
        OrderedBlock::text(region.text, region.bbox)
    }
}

impl From<&DetectedRegion> for OrderedBlock {
    fn from(region: &DetectedRegion) -> Self {
        OrderedBlock::text(region.text.clone(), region.bbox)
    }
}

/// Median of the given box heights, or `default` when there are none.
///
/// An even count averages the two middle values.
pub fn median_height<I>(heights: I, default: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut heights: Vec<f64> = heights.into_iter().collect();
    if heights.is_empty() {
        return default;
    }
    heights.sort_by(|a, b| a.total_cmp(b));
    let mid = heights.len() / 2;
    if heights.len() % 2 == 0 {
        (heights[mid - 1] + heights[mid]) / 2.0
    } else {
        heights[mid]
    }
}
