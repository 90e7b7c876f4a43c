use ocrion_ocr::{BoundingBox, DetectedRegion};

use crate::block::NormalizedRegion;
use crate::config::LayoutConfig;
use crate::error::LayoutError;

/// Rescales pixel boxes into the `canvas_size` square so spatial thresholds do not depend on
/// the source resolution. Order, text and confidence are carried through unchanged.
pub fn normalize_regions(
    regions: &[DetectedRegion],
    image_width: u32,
    image_height: u32,
    config: &LayoutConfig,
) -> Result<Vec<NormalizedRegion>, LayoutError> {
    if image_width == 0 || image_height == 0 {
        return Err(LayoutError::InvalidImageDimensions {
            width: image_width,
            height: image_height,
        });
    }

    let width = image_width as f64;
    let height = image_height as f64;
    let canvas = config.canvas_size;

    Ok(regions
        .iter()
        .map(|region| {
            let b = region.bbox;
            NormalizedRegion {
                text: region.text.clone(),
                bbox: BoundingBox::new(
                    b.x1 / width * canvas,
                    b.y1 / height * canvas,
                    b.x2 / width * canvas,
                    b.y2 / height * canvas,
                ),
                confidence: region.confidence,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(text: &str, bbox: [f64; 4]) -> DetectedRegion {
        DetectedRegion::new(text, bbox.into(), 0.9).unwrap()
    }

    #[test]
    fn test_normalizes_into_canvas() {
        let regions = vec![region("Hello", [80.0, 60.0, 800.0, 600.0])];
        let normalized = normalize_regions(&regions, 800, 600, &LayoutConfig::default()).unwrap();
        assert_eq!(normalized[0].bbox, BoundingBox::new(100.0, 100.0, 1000.0, 1000.0));
        assert_eq!(normalized[0].text, "Hello");
        assert_eq!(normalized[0].confidence, 0.9);
    }

    #[test]
    fn test_preserves_order_and_count() {
        let regions = vec![
            region("b", [0.0, 100.0, 10.0, 110.0]),
            region("a", [0.0, 0.0, 10.0, 10.0]),
        ];
        let normalized = normalize_regions(&regions, 100, 200, &LayoutConfig::default()).unwrap();
        let texts: Vec<_> = normalized.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["b", "a"]);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let regions = vec![region("a", [0.0, 0.0, 10.0, 10.0])];
        let err = normalize_regions(&regions, 0, 600, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidImageDimensions { width: 0, height: 600 }));
        assert!(normalize_regions(&[], 800, 0, &LayoutConfig::default()).is_err());
    }
}
