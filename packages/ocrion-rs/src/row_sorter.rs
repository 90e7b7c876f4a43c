use std::cmp::Ordering;

use crate::block::{NormalizedRegion, OrderedBlock};
use crate::error::LayoutError;
use crate::row_clusterer::Row;

/// Flattens rows into reading order: rows top-to-bottom by center, members left-to-right by
/// `x1`. Both sorts are stable, so ties keep creation and detection order.
pub fn sort_rows(mut rows: Vec<Row>) -> Result<Vec<NormalizedRegion>, LayoutError> {
    rows.sort_by(|a, b| compare(a.center_y, b.center_y));

    let total = rows.iter().map(|r| r.members.len()).sum();
    let mut ordered: Vec<NormalizedRegion> = Vec::with_capacity(total);
    for mut row in rows {
        if let Some(pos) = row.members.iter().position(|m| !m.bbox.is_finite()) {
            return Err(LayoutError::MalformedRegion {
                index: ordered.len() + pos,
                reason: format!("non-finite bounding box in row at y={}", row.center_y),
            });
        }
        row.members.sort_by(|a, b| compare(a.bbox.x1, b.bbox.x1));
        ordered.extend(row.members);
    }

    Ok(ordered)
}

/// Maps regions in reading order onto page-1 text blocks, keeping their normalized boxes.
pub fn into_blocks(regions: Vec<NormalizedRegion>) -> Vec<OrderedBlock> {
    regions.into_iter().map(OrderedBlock::from).collect()
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
