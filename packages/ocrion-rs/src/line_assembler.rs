//! Rebuilds line breaks from block geometry.
//!
//! The assembler only looks at the blocks it is given, so it can run on any sequence that is
//! already in reading order, not just the output of [`crate::reading_order`].
use tracing::{info, warn};

use crate::block::{median_height, OrderedBlock};
use crate::config::LayoutConfig;
use crate::error::LayoutError;

/// Text assembled from ordered blocks
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledText {
    pub text: String,
    pub line_count: usize,
    /// True when geometry could not be used and texts were joined naively
    pub degraded: bool,
}

/// Joins blocks into lines, breaking whenever `y1` jumps by more than
/// `median_height * line_break_factor` from the previous block.
///
/// Never fails: unusable geometry degrades to a single space-joined line.
pub fn assemble_lines(blocks: &[OrderedBlock], config: &LayoutConfig) -> AssembledText {
    match try_assemble(blocks, config) {
        Ok(lines) => {
            info!("Combined {} blocks into {} lines", blocks.len(), lines.len());
            AssembledText {
                text: lines.join("\n"),
                line_count: lines.len(),
                degraded: false,
            }
        }
        Err(e) => {
            warn!("Text combination failed, joining blocks in order: {}", e);
            AssembledText {
                text: blocks
                    .iter()
                    .map(|b| b.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                line_count: usize::from(!blocks.is_empty()),
                degraded: true,
            }
        }
    }
}

/// Convenience wrapper returning only the assembled string.
pub fn combine_text(blocks: &[OrderedBlock], config: &LayoutConfig) -> String {
    assemble_lines(blocks, config).text
}

fn try_assemble(
    blocks: &[OrderedBlock],
    config: &LayoutConfig,
) -> Result<Vec<String>, LayoutError> {
    if let Some(index) = blocks.iter().position(|b| !b.bbox.is_finite()) {
        return Err(LayoutError::MalformedBlock {
            index,
            reason: "non-finite bounding box coordinate".to_string(),
        });
    }

    let median = median_height(
        blocks.iter().map(|b| b.bbox.height()),
        config.default_median_height,
    );
    let break_distance = median * config.line_break_factor;

    let mut lines = Vec::new();
    let mut current_line: Vec<&str> = Vec::new();
    let mut last_y1: Option<f64> = None;

    for block in blocks {
        let y1 = block.bbox.y1;

        if last_y1.is_some_and(|prev| y1 - prev > break_distance) && !current_line.is_empty() {
            lines.push(current_line.join(" "));
            current_line.clear();
        }

        current_line.push(&block.text);
        last_y1 = Some(y1);
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    Ok(lines)
}
