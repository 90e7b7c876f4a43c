//! Engine that replays detections produced earlier by an external detector.
//!
//! Input is a JSON document of the form
//!
//! ```json
//! { "image_width": 800, "image_height": 600,
//!   "regions": [ { "text": "Total", "bbox": [10, 20, 200, 40], "confidence": 0.95 } ] }
//! ```
//!
//! where each `bbox` is either a flat `[x1, y1, x2, y2]` rectangle or a polygon given as a
//! list of `[x, y]` points (the detector's native quad form).
use async_trait::async_trait;
use serde::Deserialize;

use crate::engine::{OcrEngine, OcrError, OcrInput, OcrOutput};
use crate::region::{BoundingBox, DetectedRegion};

#[derive(Debug, Deserialize)]
struct DetectionFile {
    image_width: u32,
    image_height: u32,
    #[serde(default)]
    regions: Vec<RawRegion>,
}

#[derive(Debug, Deserialize)]
struct RawRegion {
    text: String,
    bbox: RawBox,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBox {
    Rect([f64; 4]),
    Polygon(Vec<[f64; 2]>),
}

impl RawBox {
    fn into_bbox(self) -> Option<BoundingBox> {
        match self {
            RawBox::Rect(r) => Some(r.into()),
            RawBox::Polygon(points) => BoundingBox::from_points(&points),
        }
    }
}

pub struct PrecomputedDetections;

impl PrecomputedDetections {
    pub fn new() -> Self {
        Self
    }

    /// Parses a detection document into validated regions, keeping detection order.
    pub fn parse(data: &[u8]) -> Result<OcrOutput, OcrError> {
        let file: DetectionFile = serde_json::from_slice(data)
            .map_err(|e| OcrError::InvalidInput(format!("malformed detection file: {e}")))?;

        let regions = file
            .regions
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| {
                let bbox = raw
                    .bbox
                    .into_bbox()
                    .ok_or_else(|| OcrError::InvalidInput(format!("region {idx}: empty polygon")))?;
                DetectedRegion::new(raw.text, bbox, raw.confidence).map_err(|e| match e {
                    OcrError::InvalidInput(msg) => {
                        OcrError::InvalidInput(format!("region {idx}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OcrOutput {
            image_width: file.image_width,
            image_height: file.image_height,
            regions,
        })
    }
}

impl Default for PrecomputedDetections {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for PrecomputedDetections {
    async fn recognize(&self, input: &OcrInput) -> Result<OcrOutput, OcrError> {
        match input {
            OcrInput::FilePath(path) => {
                let data = tokio::fs::read(path).await?;
                Self::parse(&data)
            }
            OcrInput::Bytes(data) => Self::parse(data),
        }
    }
}
