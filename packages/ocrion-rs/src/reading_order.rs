//! Reading-order pipeline: normalize, cluster into rows, sort.
//!
//! Ordering is best-effort. Only invalid image dimensions are reported to the caller; any
//! failure inside clustering or sorting degrades to the detections in their original order.
//! An empty detection list orders to an empty block list without looking at the dimensions.
use ocrion_ocr::DetectedRegion;
use tracing::{info, warn};

use crate::block::OrderedBlock;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::normalizer::normalize_regions;
use crate::row_clusterer::cluster_rows;
use crate::row_sorter::{into_blocks, sort_rows};

/// Result of ordering a set of detections
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedLayout {
    pub blocks: Vec<OrderedBlock>,
    /// Number of rows discovered; 0 when ordering fell back
    pub row_count: usize,
    /// True when blocks are in detection order with their original pixel boxes
    pub degraded: bool,
}

/// Orders detections top-to-bottom by row and left-to-right within a row.
pub fn order_blocks(
    regions: &[DetectedRegion],
    image_width: u32,
    image_height: u32,
    config: &LayoutConfig,
) -> Result<Vec<OrderedBlock>, LayoutError> {
    order_blocks_with_report(regions, image_width, image_height, config).map(|layout| layout.blocks)
}

/// Same as [`order_blocks`], also reporting the row count and whether the fallback was used.
pub fn order_blocks_with_report(
    regions: &[DetectedRegion],
    image_width: u32,
    image_height: u32,
    config: &LayoutConfig,
) -> Result<OrderedLayout, LayoutError> {
    if regions.is_empty() {
        return Ok(OrderedLayout {
            blocks: Vec::new(),
            row_count: 0,
            degraded: false,
        });
    }

    let normalized = normalize_regions(regions, image_width, image_height, config)?;

    let ordered = cluster_rows(normalized, config).and_then(|rows| {
        let row_count = rows.len();
        sort_rows(rows).map(|regions| (regions, row_count))
    });

    match ordered {
        Ok((ordered, row_count)) => {
            let blocks = into_blocks(ordered);
            info!("Ordered {} blocks into {} rows", blocks.len(), row_count);
            Ok(OrderedLayout {
                blocks,
                row_count,
                degraded: false,
            })
        }
        Err(e) => {
            warn!("Layout analysis failed, keeping detection order: {}", e);
            Ok(OrderedLayout {
                blocks: regions.iter().map(OrderedBlock::from).collect(),
                row_count: 0,
                degraded: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocrion_ocr::BoundingBox;

    fn region(text: &str, bbox: [f64; 4]) -> DetectedRegion {
        DetectedRegion::new(text, bbox.into(), 0.95).unwrap()
    }

    fn texts(blocks: &[OrderedBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_empty_regions() {
        let layout = order_blocks_with_report(&[], 800, 600, &LayoutConfig::default()).unwrap();
        assert!(layout.blocks.is_empty());
        assert_eq!(layout.row_count, 0);
        assert!(!layout.degraded);
    }

    #[test]
    fn test_single_region_is_normalized() {
        let regions = [region("Hello", [10.0, 10.0, 100.0, 30.0])];
        let blocks = order_blocks(&regions, 800, 600, &LayoutConfig::default()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "Hello");
        assert!((blocks[0].bbox.x1 - 12.5).abs() < 1e-4);
        assert!((blocks[0].bbox.y2 - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_reports_row_count() {
        let regions = [
            region("Right", [200.0, 10.0, 300.0, 30.0]),
            region("Below", [10.0, 100.0, 100.0, 120.0]),
            region("Left", [10.0, 10.0, 100.0, 30.0]),
        ];
        let config = LayoutConfig::default();
        let layout = order_blocks_with_report(&regions, 800, 600, &config).unwrap();
        assert_eq!(layout.row_count, 2);
        assert_eq!(texts(&layout.blocks), ["Left", "Right", "Below"]);
    }

    #[test]
    fn test_malformed_region_falls_back_to_detection_order() {
        let regions = [
            region("Bottom", [10.0, 100.0, 100.0, 120.0]),
            DetectedRegion {
                text: "Broken".to_string(),
                bbox: BoundingBox::new(f64::NAN, 10.0, 100.0, 30.0),
                confidence: 0.5,
            },
            region("Top", [10.0, 10.0, 100.0, 30.0]),
        ];
        let config = LayoutConfig::default();
        let layout = order_blocks_with_report(&regions, 800, 600, &config).unwrap();
        assert!(layout.degraded);
        assert_eq!(texts(&layout.blocks), ["Bottom", "Broken", "Top"]);
        // fallback keeps the input pixel boxes
        assert_eq!(layout.blocks[0].bbox, BoundingBox::new(10.0, 100.0, 100.0, 120.0));
    }

    #[test]
    fn test_empty_regions_ignore_dimensions() {
        let blocks = order_blocks(&[], 0, 600, &LayoutConfig::default()).unwrap();
        assert!(blocks.is_empty());
        let layout = order_blocks_with_report(&[], 800, 0, &LayoutConfig::default()).unwrap();
        assert!(layout.blocks.is_empty());
        assert!(!layout.degraded);
    }

    #[test]
    fn test_center_gap_equal_to_tolerance_shares_row() {
        // Heights 4px and centers 16px/18px: the 2px gap is exactly half the median height.
        let regions = [
            region("a", [10.0, 14.0, 100.0, 18.0]),
            region("b", [110.0, 16.0, 200.0, 20.0]),
        ];
        let config = LayoutConfig::default();
        let layout = order_blocks_with_report(&regions, 800, 600, &config).unwrap();
        assert_eq!(layout.row_count, 1);
        assert_eq!(texts(&layout.blocks), ["a", "b"]);
    }

    #[test]
    fn test_invalid_dimensions_are_an_error() {
        let regions = [region("Top", [10.0, 10.0, 100.0, 30.0])];
        let err = order_blocks(&regions, 800, 0, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidImageDimensions { .. }));
    }
}
