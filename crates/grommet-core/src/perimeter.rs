// File: crates/grommet-core/src/perimeter.rs
// Summary: Maps a clockwise perimeter offset to panel coordinates and the side it lands on.
// Notes:
// - Origin is the top-left corner, x grows right, y grows down (drawing space).
// - Corner offsets belong to the earlier side in walking order.

use serde::Serialize;

use crate::types::Rectangle;

/// Panel side, in clockwise walking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// Edge a marking distance on this side is measured from.
    pub fn reference_edge(&self) -> ReferenceEdge {
        match self {
            Side::Top => ReferenceEdge::Left,
            Side::Right => ReferenceEdge::Top,
            Side::Bottom => ReferenceEdge::Right,
            Side::Left => ReferenceEdge::Bottom,
        }
    }

    /// Arrow glyph pointing in the walking direction along this side.
    pub fn arrow(&self) -> char {
        match self {
            Side::Top => '⭢',
            Side::Right => '⭣',
            Side::Bottom => '⭠',
            Side::Left => '⭡',
        }
    }
}

/// Panel edge used as the zero mark when measuring along a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl ReferenceEdge {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceEdge::Left => "left",
            ReferenceEdge::Top => "top",
            ReferenceEdge::Right => "right",
            ReferenceEdge::Bottom => "bottom",
        }
    }
}

/// A grommet location on the panel outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPoint {
    pub x: f64,
    pub y: f64,
    pub side: Side,
}

impl PlacedPoint {
    /// Distance from the side's reference edge, for marking out with a tape.
    pub fn reference_distance(&self, rect: &Rectangle) -> f64 {
        match self.side {
            Side::Top => self.x,
            Side::Right => self.y,
            Side::Bottom => rect.width() - self.x,
            Side::Left => rect.height() - self.y,
        }
    }

    pub fn reference_edge(&self) -> ReferenceEdge { self.side.reference_edge() }
}

/// Locate the point `distance` millimeters clockwise from the top-left corner.
/// Offsets outside `[0, perimeter)` wrap around.
pub fn locate(rect: &Rectangle, distance: f64) -> PlacedPoint {
    let (w, h) = (rect.width(), rect.height());
    let d = if (0.0..rect.perimeter()).contains(&distance) {
        distance
    } else {
        distance.rem_euclid(rect.perimeter())
    };

    if d <= w {
        PlacedPoint { x: d, y: 0.0, side: Side::Top }
    } else if d <= w + h {
        PlacedPoint { x: w, y: d - w, side: Side::Right }
    } else if d <= 2.0 * w + h {
        PlacedPoint { x: w - (d - w - h), y: h, side: Side::Bottom }
    } else {
        PlacedPoint { x: 0.0, y: h - (d - 2.0 * w - h), side: Side::Left }
    }
}

/// Locate every offset in order.
pub fn locate_all(rect: &Rectangle, positions: &[f64]) -> Vec<PlacedPoint> {
    positions.iter().map(|&d| locate(rect, d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_resolve_to_earlier_side() {
        let r = Rectangle::new(100.0, 50.0).unwrap();
        assert_eq!(locate(&r, 0.0).side, Side::Top);
        assert_eq!(locate(&r, 100.0).side, Side::Top);
        assert_eq!(locate(&r, 150.0).side, Side::Right);
        assert_eq!(locate(&r, 250.0).side, Side::Bottom);
    }

    #[test]
    fn wraps_out_of_range_offsets() {
        let r = Rectangle::new(100.0, 50.0).unwrap();
        assert_eq!(locate(&r, 310.0), locate(&r, 10.0));
        assert_eq!(locate(&r, -10.0), locate(&r, 290.0));
    }
}
