use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::region::DetectedRegion;

#[derive(Debug, Clone)]
pub enum OcrInput {
    FilePath(PathBuf),
    Bytes(Vec<u8>),
}

/// Detector output: regions in detection order plus the source image size in pixels.
#[derive(Debug, Clone)]
pub struct OcrOutput {
    pub image_width: u32,
    pub image_height: u32,
    pub regions: Vec<DetectedRegion>,
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("engine error: {0}")]
    EngineError(String),
}

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, input: &OcrInput) -> Result<OcrOutput, OcrError>;
}
