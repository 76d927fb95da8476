use serde::{Deserialize, Serialize};

use crate::common::config::LayoutSettings;
use crate::geometry::{Rect, SplitEdge};
use crate::layout_engine::host::PaneId;
use crate::layout_engine::systems::{
    LayoutSystem, LayoutSystemKind, MasteredLayoutSystem, StackLayoutSystem,
};

/// The default policy: wide frames put the master area beside the stack,
/// narrow frames put it on top. The threshold is `settings.wide_threshold`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallLayoutSystem {}

impl LayoutSystem for TallLayoutSystem {
    fn calculate_layout(
        &self,
        panes: &[PaneId],
        frame: Rect,
        settings: &LayoutSettings,
    ) -> Vec<(PaneId, Rect)> {
        let edge = if frame.width >= settings.wide_threshold {
            SplitEdge::Left
        } else {
            SplitEdge::Top
        };
        MasteredLayoutSystem::new(edge, LayoutSystemKind::Stack(StackLayoutSystem::default()))
            .calculate_layout(panes, frame, settings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn panes(n: u32) -> Vec<PaneId> { (1..=n).map(PaneId::new).collect() }

    #[test]
    fn wide_frames_put_the_master_beside_the_stack() {
        let settings = LayoutSettings::default();
        let frame = Rect::new(0.0, 0.0, 200.0, 100.0);
        let regions = TallLayoutSystem::default().calculate_layout(&panes(3), frame, &settings);

        assert_eq!(regions[0].1, Rect::new(0.0, 0.0, 110.0, 100.0));
        assert_eq!(regions[1].1.x, 110.0);
        assert_eq!(regions[1].1.y, 0.0);
        assert_eq!(regions[2].1.y, 50.0);
    }

    #[test]
    fn narrow_frames_put_the_master_on_top() {
        let settings = LayoutSettings::default();
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        let regions = TallLayoutSystem::default().calculate_layout(&panes(3), frame, &settings);

        assert_eq!(regions[0].1, Rect::new(0.0, 0.0, 100.0, 55.0));
        assert_eq!(regions[1].1, Rect::new(0.0, 55.0, 100.0, 23.0));
        assert_eq!(regions[2].1, Rect::new(0.0, 78.0, 100.0, 22.0));
    }

    #[test]
    fn threshold_is_read_from_settings() {
        let settings = LayoutSettings { wide_threshold: 300.0, ..LayoutSettings::default() };
        let frame = Rect::new(0.0, 0.0, 200.0, 100.0);
        let regions = TallLayoutSystem::default().calculate_layout(&panes(2), frame, &settings);

        // 200 is now below the threshold, so the master sits on top
        assert_eq!(regions[0].1.height, 55.0);
        assert_eq!(regions[0].1.width, 200.0);
    }
}
