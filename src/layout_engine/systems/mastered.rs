use serde::{Deserialize, Serialize};

use crate::common::config::LayoutSettings;
use crate::geometry::{Rect, SplitEdge};
use crate::layout_engine::host::PaneId;
use crate::layout_engine::systems::stack::stack_rows;
use crate::layout_engine::systems::{LayoutSystem, LayoutSystemKind};

/// Carves a master area from one edge of the frame, fills it with the first
/// `master_count` panes as a stack, and delegates the remainder to the inner
/// layout. When either side is empty the other owns the whole frame.
///
/// `master_count` and `master_ratio` are read from the settings on every
/// call, so live adjustments take effect on the next pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MasteredLayoutSystem {
    edge: SplitEdge,
    inner: Box<LayoutSystemKind>,
}

impl MasteredLayoutSystem {
    /// Callers are expected to carve from `Left` or `Top`; `Right` and
    /// `Bottom` pass through to the split primitive but no shipped policy
    /// uses them.
    pub fn new(edge: SplitEdge, inner: LayoutSystemKind) -> Self {
        Self { edge, inner: Box::new(inner) }
    }

    pub fn edge(&self) -> SplitEdge { self.edge }
}

impl LayoutSystem for MasteredLayoutSystem {
    fn calculate_layout(
        &self,
        panes: &[PaneId],
        frame: Rect,
        settings: &LayoutSettings,
    ) -> Vec<(PaneId, Rect)> {
        let cut = settings.master_count.min(panes.len());
        let (master, stack) = panes.split_at(cut);

        if master.is_empty() {
            return self.inner.calculate_layout(stack, frame, settings);
        }
        if stack.is_empty() {
            return stack_rows(master, frame);
        }

        let extent = frame.extent(self.edge.orientation());
        let master_size = (settings.master_ratio * extent).round();
        let (master_area, stack_area) = frame.split(master_size, self.edge);

        let mut regions = stack_rows(master, master_area);
        regions.extend(self.inner.calculate_layout(stack, stack_area, settings));
        regions
    }
}
