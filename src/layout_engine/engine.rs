use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::config::{Config, LayoutMode, LayoutSettings};
use crate::geometry::Rect;
use crate::layout_engine::error::EngineError;
use crate::layout_engine::host::{Host, PaneId};
use crate::layout_engine::systems::{
    LayoutSystem, LayoutSystemKind, StackLayoutSystem, TallLayoutSystem,
};

/// Host-facing commands, one per key binding a host would offer. Hosts can
/// deserialize these straight out of their own keymap config.
#[non_exhaustive]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutCommand {
    NextPane,
    PrevPane,
    SwapNext,
    SwapPrev,
    IncMaster,
    DecMaster,
    GrowMaster,
    ShrinkMaster,
    Retile,
}

/// Orchestrates arrangement passes over a host frame: snapshot panes and
/// focus, tear down, compute with the active layout, apply, refocus.
///
/// Owns the active layout and the live parameters, so hosts wanting
/// independent parameters per frame run one engine per frame. Single
/// threaded; every operation runs to completion or fails outright.
pub struct LayoutEngine {
    active: LayoutSystemKind,
    settings: LayoutSettings,
}

impl Default for LayoutEngine {
    fn default() -> Self { Self::new(&Config::default()) }
}

impl LayoutEngine {
    pub fn new(config: &Config) -> Self {
        let active = match config.mode {
            LayoutMode::Tall => LayoutSystemKind::Tall(TallLayoutSystem::default()),
            LayoutMode::Stack => LayoutSystemKind::Stack(StackLayoutSystem::default()),
        };
        LayoutEngine { active, settings: config.layout.clone() }
    }

    pub fn settings(&self) -> &LayoutSettings { &self.settings }

    /// Direct parameter access. Values set here bypass the clamped
    /// adjustment operations and are validated on the next pass.
    pub fn settings_mut(&mut self) -> &mut LayoutSettings { &mut self.settings }

    pub fn set_active_layout(&mut self, layout: LayoutSystemKind) { self.active = layout; }

    pub fn active_layout_mode(&self) -> &'static str {
        match &self.active {
            LayoutSystemKind::Stack(_) => "stack",
            LayoutSystemKind::Mastered(_) => "mastered",
            LayoutSystemKind::Tall(_) => "tall",
        }
    }

    /// Compute the partition for `panes` over `frame` without touching any
    /// host state.
    pub fn compute(&self, panes: &[PaneId], frame: Rect) -> Vec<(PaneId, Rect)> {
        self.active.calculate_layout(panes, frame, &self.settings)
    }

    /// Run one full arrangement pass and return the applied partition.
    pub fn arrange(&mut self, host: &mut dyn Host) -> Result<Vec<(PaneId, Rect)>, EngineError> {
        self.ensure_valid_settings()?;

        let panes = host.list_panes();
        if panes.is_empty() {
            return Err(EngineError::EmptyPaneList);
        }
        warn_on_duplicates(&panes);

        let focused = host.focused_pane();
        let recorded = focused.filter(|pane| panes.contains(pane));
        if let Some(pane) = focused
            && recorded.is_none()
        {
            warn!(%pane, "focused pane is not in the pane list");
        }

        debug!(
            panes = panes.len(),
            focused = ?recorded,
            mode = self.active_layout_mode(),
            "arranging"
        );

        host.collapse_to(recorded.unwrap_or(panes[0]))?;
        let regions = self.compute(&panes, host.frame());
        host.apply(&regions)?;
        self.refocus(host, recorded, &regions)?;
        Ok(regions)
    }

    /// Restore focus onto the pane recorded before teardown. Identity based:
    /// if the pane is gone from the host's list, the first region is focused
    /// and the loss is reported rather than silently focusing something else.
    fn refocus(
        &self,
        host: &mut dyn Host,
        recorded: Option<PaneId>,
        regions: &[(PaneId, Rect)],
    ) -> Result<(), EngineError> {
        match recorded {
            Some(pane) if host.list_panes().contains(&pane) => {
                host.focus(pane)?;
                Ok(())
            }
            Some(pane) => {
                if let Some(&(first, _)) = regions.first() {
                    host.focus(first)?;
                }
                Err(EngineError::FocusResolution(pane))
            }
            None => {
                if let Some(&(first, _)) = regions.first() {
                    host.focus(first)?;
                }
                Ok(())
            }
        }
    }

    /// Move focus to the cyclically next pane in layout order.
    pub fn focus_next(&mut self, host: &mut dyn Host) -> Result<(), EngineError> {
        self.cycle_focus(host, 1)
    }

    /// Move focus to the cyclically previous pane in layout order.
    pub fn focus_prev(&mut self, host: &mut dyn Host) -> Result<(), EngineError> {
        self.cycle_focus(host, -1)
    }

    fn cycle_focus(&mut self, host: &mut dyn Host, step: isize) -> Result<(), EngineError> {
        let panes = host.list_panes();
        if panes.is_empty() {
            return Err(EngineError::EmptyPaneList);
        }
        if panes.len() == 1 {
            return Ok(());
        }
        let here = self.focused_index(host, &panes)?;
        host.focus(panes[cyclic_step(here, panes.len(), step)])?;
        Ok(())
    }

    /// Exchange the focused pane with its cyclic neighbor. Geometry is not
    /// recomputed; focus follows the originally focused pane into its new
    /// region.
    pub fn swap_next(&mut self, host: &mut dyn Host) -> Result<(), EngineError> {
        self.swap_neighbor(host, 1)
    }

    /// Like `swap_next`, toward the previous pane.
    pub fn swap_prev(&mut self, host: &mut dyn Host) -> Result<(), EngineError> {
        self.swap_neighbor(host, -1)
    }

    fn swap_neighbor(&mut self, host: &mut dyn Host, step: isize) -> Result<(), EngineError> {
        let panes = host.list_panes();
        if panes.is_empty() {
            return Err(EngineError::EmptyPaneList);
        }
        if panes.len() == 1 {
            return Ok(());
        }
        let here = self.focused_index(host, &panes)?;
        let there = cyclic_step(here, panes.len(), step);
        let (focused, neighbor) = (panes[here], panes[there]);

        debug!(%focused, %neighbor, "swapping panes");
        host.swap(focused, neighbor)?;
        host.focus(focused)?;
        Ok(())
    }

    /// Route one more pane to the master area, then re-arrange.
    pub fn inc_master(
        &mut self,
        host: &mut dyn Host,
    ) -> Result<Vec<(PaneId, Rect)>, EngineError> {
        self.ensure_valid_settings()?;
        let count = self.settings.bump_master_count(1);
        debug!(count, "master count raised");
        self.arrange(host)
    }

    /// Route one fewer pane to the master area (stopping at zero), then
    /// re-arrange.
    pub fn dec_master(
        &mut self,
        host: &mut dyn Host,
    ) -> Result<Vec<(PaneId, Rect)>, EngineError> {
        self.ensure_valid_settings()?;
        let count = self.settings.bump_master_count(-1);
        debug!(count, "master count lowered");
        self.arrange(host)
    }

    /// Grow the master area by one ratio step, then re-arrange.
    pub fn grow_master(
        &mut self,
        host: &mut dyn Host,
    ) -> Result<Vec<(PaneId, Rect)>, EngineError> {
        self.ensure_valid_settings()?;
        let step = self.settings.ratio_step;
        let ratio = self.settings.bump_master_ratio(step);
        debug!(ratio, "master ratio raised");
        self.arrange(host)
    }

    /// Shrink the master area by one ratio step, then re-arrange.
    pub fn shrink_master(
        &mut self,
        host: &mut dyn Host,
    ) -> Result<Vec<(PaneId, Rect)>, EngineError> {
        self.ensure_valid_settings()?;
        let step = self.settings.ratio_step;
        let ratio = self.settings.bump_master_ratio(-step);
        debug!(ratio, "master ratio lowered");
        self.arrange(host)
    }

    /// Dispatch a host keymap command. Commands that re-arrange return the
    /// applied partition; pure focus/swap commands return an empty one.
    pub fn handle_command(
        &mut self,
        host: &mut dyn Host,
        command: LayoutCommand,
    ) -> Result<Vec<(PaneId, Rect)>, EngineError> {
        debug!(?command);
        match command {
            LayoutCommand::NextPane => self.focus_next(host).map(|_| Vec::new()),
            LayoutCommand::PrevPane => self.focus_prev(host).map(|_| Vec::new()),
            LayoutCommand::SwapNext => self.swap_next(host).map(|_| Vec::new()),
            LayoutCommand::SwapPrev => self.swap_prev(host).map(|_| Vec::new()),
            LayoutCommand::IncMaster => self.inc_master(host),
            LayoutCommand::DecMaster => self.dec_master(host),
            LayoutCommand::GrowMaster => self.grow_master(host),
            LayoutCommand::ShrinkMaster => self.shrink_master(host),
            LayoutCommand::Retile => self.arrange(host),
        }
    }

    fn focused_index(&self, host: &mut dyn Host, panes: &[PaneId]) -> Result<usize, EngineError> {
        match host.focused_pane() {
            Some(pane) => match panes.iter().position(|p| *p == pane) {
                Some(index) => Ok(index),
                None => {
                    warn!(%pane, "focused pane is not in the pane list");
                    Err(EngineError::FocusResolution(pane))
                }
            },
            // No focus to anchor on; anchor at the first pane.
            None => Ok(0),
        }
    }

    fn ensure_valid_settings(&self) -> Result<(), EngineError> {
        let issues = self.settings.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(EngineError::Config(issues.join("; ")))
        }
    }
}

fn cyclic_step(index: usize, len: usize, step: isize) -> usize {
    (index as isize + step).rem_euclid(len as isize) as usize
}

fn warn_on_duplicates(panes: &[PaneId]) {
    for (i, pane) in panes.iter().enumerate() {
        if panes[..i].contains(pane) {
            warn!(%pane, "duplicate pane in layout order");
        }
    }
}
