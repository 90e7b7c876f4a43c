//! Runs a detector through the layout pipeline and collects processing metadata.
use anyhow::{Context, Result};
use ocrion_ocr::{OcrEngine, OcrInput};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

use crate::block::OrderedBlock;
use crate::config::LayoutConfig;
use crate::line_assembler::assemble_lines;
use crate::reading_order::order_blocks_with_report;

/// Metadata about one processed document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentMetadata {
    pub regions_detected: usize,
    pub layout_blocks: usize,
    pub rows: usize,
    pub lines: usize,
    /// True when either ordering or line assembly had to fall back
    pub degraded: bool,
    pub image_width: u32,
    pub image_height: u32,
    pub detection_time_seconds: f64,
    pub layout_time_seconds: f64,
    pub processing_time_seconds: f64,
}

/// Ordered text and blocks for one document
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedDocument {
    pub text: String,
    pub blocks: Vec<OrderedBlock>,
    pub metadata: DocumentMetadata,
}

/// Options for document processing
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub layout: LayoutConfig,
    /// Overrides the image width reported by the detector
    pub image_width: Option<u32>,
    /// Overrides the image height reported by the detector
    pub image_height: Option<u32>,
}

/// Drives a detector and the layout stages for each document.
///
/// The engine is built once by the caller and borrowed here, so one handle can serve any
/// number of processors.
pub struct DocumentProcessor<'a> {
    engine: &'a dyn OcrEngine,
    options: DocumentOptions,
}

impl<'a> DocumentProcessor<'a> {
    pub fn new(engine: &'a dyn OcrEngine, options: DocumentOptions) -> Self {
        Self { engine, options }
    }

    pub async fn process(&self, input: &OcrInput) -> Result<ProcessedDocument> {
        let pipeline_start = Instant::now();

        let detection = self
            .engine
            .recognize(input)
            .await
            .context("Text detection failed")?;
        let detection_time = pipeline_start.elapsed();

        let image_width = self.options.image_width.unwrap_or(detection.image_width);
        let image_height = self.options.image_height.unwrap_or(detection.image_height);

        let layout_start = Instant::now();
        let layout = order_blocks_with_report(
            &detection.regions,
            image_width,
            image_height,
            &self.options.layout,
        )
        .context("Layout analysis failed")?;
        let assembled = assemble_lines(&layout.blocks, &self.options.layout);
        let layout_time = layout_start.elapsed();

        let metadata = DocumentMetadata {
            regions_detected: detection.regions.len(),
            layout_blocks: layout.blocks.len(),
            rows: layout.row_count,
            lines: assembled.line_count,
            degraded: layout.degraded || assembled.degraded,
            image_width,
            image_height,
            detection_time_seconds: round_ms(detection_time.as_secs_f64()),
            layout_time_seconds: round_ms(layout_time.as_secs_f64()),
            processing_time_seconds: round_ms(pipeline_start.elapsed().as_secs_f64()),
        };

        info!(
            "Processed {} regions into {} lines in {:.3}s",
            metadata.regions_detected, metadata.lines, metadata.processing_time_seconds
        );

        Ok(ProcessedDocument {
            text: assembled.text,
            blocks: layout.blocks,
            metadata,
        })
    }
}

fn round_ms(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}
