use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::common::config::LayoutSettings;
use crate::geometry::Rect;
use crate::layout_engine::host::PaneId;

/// A layout policy: a pure mapping from an ordered pane list and a frame to
/// one region per pane. Parameters are read from `settings` at call time.
///
/// Implementations must assign every pane exactly one region, partition the
/// frame without gaps or overlaps, and keep the output in pane-list order.
#[enum_dispatch]
pub trait LayoutSystem {
    fn calculate_layout(
        &self,
        panes: &[PaneId],
        frame: Rect,
        settings: &LayoutSettings,
    ) -> Vec<(PaneId, Rect)>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[enum_dispatch(LayoutSystem)]
pub enum LayoutSystemKind {
    Stack(StackLayoutSystem),
    Mastered(MasteredLayoutSystem),
    Tall(TallLayoutSystem),
}

mod mastered;
mod stack;
mod tall;

pub use mastered::MasteredLayoutSystem;
pub use stack::StackLayoutSystem;
pub use tall::TallLayoutSystem;
