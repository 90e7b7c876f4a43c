pub mod detections;
pub mod engine;
pub mod region;

pub use detections::PrecomputedDetections;
pub use engine::{OcrEngine, OcrError, OcrInput, OcrOutput};
pub use region::{BoundingBox, DetectedRegion};
