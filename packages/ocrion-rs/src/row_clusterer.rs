//! Greedy single-pass grouping of normalized regions into text rows.
//!
//! A row's reference center is the y-center of its first member and is never moved as
//! later members join. Assignment is to the first row (in creation order) within tolerance,
//! not the nearest one, so the result depends on detection order.
use crate::block::{median_height, NormalizedRegion};
use crate::config::LayoutConfig;
use crate::error::LayoutError;

/// A cluster of regions judged to lie on the same text line.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub center_y: f64,
    pub members: Vec<NormalizedRegion>,
}

/// Groups regions into rows using `median_height * row_tolerance_factor` as the tolerance.
///
/// Rows are returned in creation order.
pub fn cluster_rows(
    regions: Vec<NormalizedRegion>,
    config: &LayoutConfig,
) -> Result<Vec<Row>, LayoutError> {
    if let Some(index) = regions.iter().position(|r| !r.bbox.is_finite()) {
        return Err(LayoutError::MalformedRegion {
            index,
            reason: "non-finite bounding box coordinate".to_string(),
        });
    }

    let median = median_height(
        regions.iter().map(|r| r.bbox.height()),
        config.default_median_height,
    );
    let tolerance = median * config.row_tolerance_factor;

    let mut rows: Vec<Row> = Vec::new();
    for region in regions {
        let y_center = region.bbox.y_center();
        match rows
            .iter()
            .position(|row| (y_center - row.center_y).abs() <= tolerance)
        {
            Some(idx) => rows[idx].members.push(region),
            None => rows.push(Row {
                center_y: y_center,
                members: vec![region],
            }),
        }
    }

    Ok(rows)
}
