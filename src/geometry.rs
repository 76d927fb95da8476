//! Rectangle and split primitives shared by every layout system.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The side of a region a split is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SplitEdge {
    pub fn orientation(self) -> Orientation {
        match self {
            SplitEdge::Left | SplitEdge::Right => Orientation::Horizontal,
            SplitEdge::Top | SplitEdge::Bottom => Orientation::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn max_x(&self) -> f64 { self.x + self.width }

    pub fn max_y(&self) -> f64 { self.y + self.height }

    pub fn area(&self) -> f64 { self.width * self.height }

    pub fn extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Divide this region into two adjoining regions along `edge`.
    ///
    /// The first result is carved from the named edge with extent `size`
    /// along the split axis; a negative `size` is measured from the far edge.
    /// The carved extent is clamped so both parts stay at least one unit
    /// whenever the region can hold two, so oversized requests never panic.
    /// The two results always cover this region exactly.
    pub fn split(&self, size: f64, edge: SplitEdge) -> (Rect, Rect) {
        let extent = self.extent(edge.orientation());
        let requested = if size < 0.0 { extent + size } else { size };
        let limit = (extent - 1.0).max(0.0);
        let carve = requested.clamp(limit.min(1.0), limit);
        let rest = extent - carve;
        match edge {
            SplitEdge::Left => (
                Rect::new(self.x, self.y, carve, self.height),
                Rect::new(self.x + carve, self.y, rest, self.height),
            ),
            SplitEdge::Right => (
                Rect::new(self.max_x() - carve, self.y, carve, self.height),
                Rect::new(self.x, self.y, rest, self.height),
            ),
            SplitEdge::Top => (
                Rect::new(self.x, self.y, self.width, carve),
                Rect::new(self.x, self.y + carve, self.width, rest),
            ),
            SplitEdge::Bottom => (
                Rect::new(self.x, self.max_y() - carve, self.width, carve),
                Rect::new(self.x, self.y, self.width, rest),
            ),
        }
    }
}

pub trait Round {
    fn round(&self) -> Self;
}

impl Round for Rect {
    fn round(&self) -> Self {
        let x = self.x.round();
        let y = self.y.round();
        Rect::new(x, y, self.max_x().round() - x, self.max_y().round() - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Rect { Rect::new(10.0, 20.0, 100.0, 80.0) }

    #[test]
    fn split_left_partitions_exactly() {
        let (a, b) = region().split(55.0, SplitEdge::Left);
        assert_eq!(a, Rect::new(10.0, 20.0, 55.0, 80.0));
        assert_eq!(b, Rect::new(65.0, 20.0, 45.0, 80.0));
    }

    #[test]
    fn split_top_partitions_exactly() {
        let (a, b) = region().split(30.0, SplitEdge::Top);
        assert_eq!(a, Rect::new(10.0, 20.0, 100.0, 30.0));
        assert_eq!(b, Rect::new(10.0, 50.0, 100.0, 50.0));
    }

    #[test]
    fn negative_size_measures_from_far_edge() {
        let (a, b) = region().split(-45.0, SplitEdge::Left);
        assert_eq!(a.width, 55.0);
        assert_eq!(b.width, 45.0);
    }

    #[test]
    fn oversized_request_is_clamped() {
        let (a, b) = region().split(500.0, SplitEdge::Left);
        assert_eq!(a.width, 99.0);
        assert_eq!(b.width, 1.0);
        assert_eq!(a.width + b.width, region().width);
    }

    #[test]
    fn undersized_request_is_clamped() {
        let (a, b) = region().split(-500.0, SplitEdge::Top);
        assert_eq!(a.height, 1.0);
        assert_eq!(b.height, 79.0);
    }

    #[test]
    fn right_and_bottom_edges_carve_from_the_far_side() {
        let (a, _) = region().split(25.0, SplitEdge::Right);
        assert_eq!(a.x, 85.0);
        assert_eq!(a.width, 25.0);

        let (a, _) = region().split(25.0, SplitEdge::Bottom);
        assert_eq!(a.y, 75.0);
        assert_eq!(a.height, 25.0);
    }

    #[test]
    fn round_snaps_opposite_corners() {
        let r = Rect::new(0.4, 0.6, 10.2, 9.8).round();
        assert_eq!(r, Rect::new(0.0, 1.0, 11.0, 9.0));
    }
}
