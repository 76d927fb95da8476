pub mod engine;
pub mod error;
pub mod host;
pub mod systems;

pub use engine::{LayoutCommand, LayoutEngine};
pub use error::EngineError;
pub use host::{Host, PaneId};
pub use systems::{
    LayoutSystem, LayoutSystemKind, MasteredLayoutSystem, StackLayoutSystem, TallLayoutSystem,
};
