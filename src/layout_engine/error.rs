use thiserror::Error;

use crate::layout_engine::host::PaneId;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Parameter values set directly on the engine failed validation.
    /// Arrangement is aborted before any teardown.
    #[error("invalid layout configuration: {0}")]
    Config(String),
    /// `arrange` was invoked with zero panes; nothing was torn down.
    #[error("no panes to arrange")]
    EmptyPaneList,
    /// The focused pane vanished between snapshot and refocus. The first
    /// region has been focused as a fallback.
    #[error("focused pane {0} disappeared during arrangement")]
    FocusResolution(PaneId),
    /// A host operation failed; the pass is abandoned without retry.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
