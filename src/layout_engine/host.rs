//! The collaborator contract between the engine and its embedding host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Identity of a pane. Assigned and owned by the host; the engine only
/// compares and forwards it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaneId(u32);

impl PaneId {
    pub fn new(id: u32) -> Self { Self(id) }

    pub fn as_u32(self) -> u32 { self.0 }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "pane#{}", self.0) }
}

/// Operations the embedding host must provide. The engine holds a host
/// reference only for the duration of a single call.
///
/// `list_panes` must return panes in layout order, and that order must be
/// stable across `collapse_to` and `apply` within one arrangement pass.
pub trait Host {
    /// The rectangular area being tiled.
    fn frame(&self) -> Rect;

    /// Current panes in layout order.
    fn list_panes(&self) -> Vec<PaneId>;

    /// The pane holding focus, expected to be a member of `list_panes`.
    fn focused_pane(&self) -> Option<PaneId>;

    /// Collapse all regions of the frame into one, keeping `keep` as the
    /// seed for the rebuild.
    fn collapse_to(&mut self, keep: PaneId) -> anyhow::Result<()>;

    /// Realize a computed partition, binding each pane to its region.
    fn apply(&mut self, regions: &[(PaneId, Rect)]) -> anyhow::Result<()>;

    /// Exchange the panes bound to two regions, leaving geometry untouched.
    fn swap(&mut self, a: PaneId, b: PaneId) -> anyhow::Result<()>;

    /// Move focus to `pane`.
    fn focus(&mut self, pane: PaneId) -> anyhow::Result<()>;
}
