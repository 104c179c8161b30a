//! Lower-triangular aspect table.

use crate::chart::Aspect;
use crate::dms::{degree_to_dms, Dms};
use crate::layout::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectCell {
    pub row: usize,
    pub col: usize,
    /// Top-left corner
    pub origin: Point,
    pub aspect: Aspect,
    pub symbol: String,
    pub orb: Dms,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AspectGrid {
    /// Row and column headings, in order of first appearance
    pub bodies: Vec<String>,
    pub cells: Vec<AspectCell>,
    pub cell: f64,
    pub width: f64,
    pub height: f64,
}

/// Glyph of an exact aspect angle.
pub fn aspect_symbol(value: f64) -> String {
    match value.round() as i64 {
        0 => "☌".to_string(),
        30 => "⚺".to_string(),
        45 => "∠".to_string(),
        60 => "⚹".to_string(),
        90 => "□".to_string(),
        120 => "△".to_string(),
        135 => "⚼".to_string(),
        150 => "⚻".to_string(),
        180 => "☍".to_string(),
        other => other.to_string(),
    }
}

fn index_of(bodies: &mut Vec<String>, name: &str) -> usize {
    match bodies.iter().position(|b| b == name) {
        Some(index) => index,
        None => {
            bodies.push(name.to_string());
            bodies.len() - 1
        }
    }
}

/// Place every aspect in a square cell of side `cell`; the later body of a
/// pair picks the row and the earlier one the column.
pub fn layout_aspect_grid(aspects: &[Aspect], cell: f64) -> AspectGrid {
    if aspects.is_empty() {
        return AspectGrid {
            cell,
            ..Default::default()
        };
    }

    let mut bodies = Vec::new();
    let mut cells = Vec::with_capacity(aspects.len());
    for aspect in aspects {
        let a = index_of(&mut bodies, &aspect.p0);
        let b = index_of(&mut bodies, &aspect.p1);
        let (row, col) = (a.max(b), a.min(b));
        cells.push(AspectCell {
            row,
            col,
            origin: Point::new(col as f64 * cell, row as f64 * cell),
            aspect: aspect.clone(),
            symbol: aspect_symbol(aspect.aspect_value),
            orb: degree_to_dms(aspect.d),
        });
    }

    let side = bodies.len() as f64 * cell;
    AspectGrid {
        bodies,
        cells,
        cell,
        width: side,
        height: side,
    }
}
