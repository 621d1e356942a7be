//! # Selection-preserving re-render engine
//!
//! Re-rendering replaces every node below the root, so the selection cannot
//! be carried over by node identity. Instead it is translated to absolute
//! character indices before the rewrite and back afterwards:
//!
//! ```text
//! tree → flatten → capture (node, offset) as indices
//!      → highlight markup → replace tree
//!      → flatten → restore indices as (node, offset)
//! ```
//!
//! - **`flatten`**: document → ordered [`TextRun`]s
//! - **`index_map`**: (node, offset) ↔ absolute index
//! - **`highlight`**: idempotent markup → markup highlighting
//! - **`coordinator`**: orchestrates one render cycle and coalesces requests

pub mod coordinator;
pub mod flatten;
pub mod highlight;
pub mod index_map;

pub use coordinator::{RenderCoordinator, RenderOutcome, RenderState};
pub use flatten::{TextRun, flatten};
pub use highlight::{HighlightConfig, Highlighter};
pub use index_map::{AbsoluteSelection, SelectionError};
