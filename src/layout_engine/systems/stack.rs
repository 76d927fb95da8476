use serde::{Deserialize, Serialize};

use crate::common::config::LayoutSettings;
use crate::geometry::{Rect, SplitEdge};
use crate::layout_engine::host::PaneId;
use crate::layout_engine::systems::LayoutSystem;

/// Arranges panes into full-width rows of equal height. Row height is
/// `ceil(extent / n)`; the final row absorbs the rounding remainder so the
/// partition is exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackLayoutSystem {}

impl LayoutSystem for StackLayoutSystem {
    fn calculate_layout(
        &self,
        panes: &[PaneId],
        frame: Rect,
        _settings: &LayoutSettings,
    ) -> Vec<(PaneId, Rect)> {
        stack_rows(panes, frame)
    }
}

pub(crate) fn stack_rows(panes: &[PaneId], frame: Rect) -> Vec<(PaneId, Rect)> {
    let mut regions = Vec::with_capacity(panes.len());
    let Some((&last, rest)) = panes.split_last() else {
        return regions;
    };

    let row = (frame.height / panes.len() as f64).ceil();
    let mut remainder = frame;
    for &pane in rest {
        let (strip, rest_area) = remainder.split(row, SplitEdge::Top);
        regions.push((pane, strip));
        remainder = rest_area;
    }
    regions.push((last, remainder));
    regions
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn panes(n: u32) -> Vec<PaneId> { (1..=n).map(PaneId::new).collect() }

    #[test]
    fn single_pane_fills_the_region() {
        let frame = Rect::new(0.0, 0.0, 80.0, 24.0);
        let regions = stack_rows(&panes(1), frame);
        assert_eq!(regions, vec![(PaneId::new(1), frame)]);
    }

    #[test]
    fn rows_are_even_and_the_last_absorbs_the_remainder() {
        let frame = Rect::new(0.0, 0.0, 80.0, 100.0);
        let regions = stack_rows(&panes(3), frame);

        let heights: Vec<f64> = regions.iter().map(|(_, r)| r.height).collect();
        assert_eq!(heights, vec![34.0, 34.0, 32.0]);
        assert_eq!(heights.iter().sum::<f64>(), frame.height);
    }

    #[test]
    fn rows_adjoin_in_list_order() {
        let frame = Rect::new(5.0, 7.0, 80.0, 90.0);
        let regions = stack_rows(&panes(4), frame);

        let mut y = frame.y;
        for (_, region) in &regions {
            assert_eq!(region.x, frame.x);
            assert_eq!(region.width, frame.width);
            assert_eq!(region.y, y);
            y = region.max_y();
        }
        assert_eq!(y, frame.max_y());
    }
}
