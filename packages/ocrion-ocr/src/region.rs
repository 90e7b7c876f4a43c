use serde::{Deserialize, Serialize};

use crate::engine::OcrError;

/// Axis-aligned box given by its top-left `(x1, y1)` and bottom-right `(x2, y2)` corners.
///
/// Serialized as a flat `[x1, y1, x2, y2]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Smallest axis-aligned box enclosing a detector polygon.
    ///
    /// Returns `None` for an empty point list.
    pub fn from_points(points: &[[f64; 2]]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first[0], first[1], first[0], first[1]);
        Some(points.iter().skip(1).fold(init, |acc, [x, y]| Self {
            x1: acc.x1.min(*x),
            y1: acc.y1.min(*y),
            x2: acc.x2.max(*x),
            y2: acc.y2.max(*y),
        }))
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn y_center(&self) -> f64 {
        (self.y1 + self.y2) / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    /// True when the corners are ordered (`x1 <= x2`, `y1 <= y2`). NaN corners are never ordered.
    pub fn is_ordered(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// One text region reported by a detector, in source-image pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedRegion {
    pub text: String,
    pub bbox: BoundingBox,
    pub confidence: f64,
}

impl DetectedRegion {
    /// Builds a region, trimming the text and checking the box and confidence invariants.
    pub fn new(
        text: impl Into<String>,
        bbox: BoundingBox,
        confidence: f64,
    ) -> Result<Self, OcrError> {
        if !bbox.is_ordered() {
            return Err(OcrError::InvalidInput(format!(
                "bounding box corners out of order: {:?}",
                <[f64; 4]>::from(bbox)
            )));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(OcrError::InvalidInput(format!(
                "confidence {confidence} outside [0, 1]"
            )));
        }
        let text: String = text.into();
        Ok(Self {
            text: text.trim().to_string(),
            bbox,
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_takes_hull() {
        let quad = [[10.0, 20.0], [200.0, 22.0], [198.0, 40.0], [12.0, 38.0]];
        let bbox = BoundingBox::from_points(&quad).unwrap();
        assert_eq!(bbox, BoundingBox::new(10.0, 20.0, 200.0, 40.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_bbox_serializes_as_array() {
        let json = serde_json::to_string(&BoundingBox::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");
    }

    #[test]
    fn test_region_trims_text() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let region = DetectedRegion::new("  Sample Text \n", bbox, 0.95).unwrap();
        assert_eq!(region.text, "Sample Text");
    }

    #[test]
    fn test_region_confidence_bounds() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(DetectedRegion::new("A", bbox, 0.0).is_ok());
        assert!(DetectedRegion::new("A", bbox, 1.0).is_ok());
        assert!(DetectedRegion::new("A", bbox, -0.1).is_err());
        assert!(DetectedRegion::new("A", bbox, 1.1).is_err());
    }

    #[test]
    fn test_region_rejects_inverted_box() {
        let result = DetectedRegion::new("A", BoundingBox::new(10.0, 0.0, 5.0, 1.0), 0.5);
        assert!(matches!(result, Err(OcrError::InvalidInput(_))));
    }
}
