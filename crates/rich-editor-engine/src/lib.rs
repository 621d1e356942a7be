pub mod bridge;
pub mod dom;
pub mod editing;
pub mod rendering;

// Re-export key types for easier usage
pub use bridge::{BridgeQueue, EditorEvent};
pub use dom::{Document, DocumentError, DomPoint, NodeId, Selection};
pub use editing::{
    CommandBackend, Editor, NativeCommand, RecordingBackend, SurfaceStyle, TickOutcome,
};
pub use rendering::{
    AbsoluteSelection, HighlightConfig, Highlighter, RenderCoordinator, RenderOutcome,
    SelectionError,
};
