//! Dynamic tiling layout engine.
//!
//! Hosts hand the engine an ordered pane list and a frame; the engine
//! computes a non-overlapping partition (one region per pane) under the
//! active layout policy and keeps focus on the same pane across every
//! re-arrangement. See [`layout_engine::Host`] for the collaborator
//! contract and [`layout_engine::LayoutEngine`] for the pass itself.

pub mod common;
pub mod geometry;
pub mod layout_engine;

pub use common::config::{Config, LayoutMode, LayoutSettings};
pub use geometry::{Orientation, Rect, Round, SplitEdge};
pub use layout_engine::{
    EngineError, Host, LayoutCommand, LayoutEngine, LayoutSystem, LayoutSystemKind,
    MasteredLayoutSystem, PaneId, StackLayoutSystem, TallLayoutSystem,
};
