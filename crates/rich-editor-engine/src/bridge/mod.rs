//! # Host bridge
//!
//! Editor events travel to the host as opaque strings through a FIFO. The
//! host is poked with a payload-free trigger at most once per empty →
//! non-empty transition and pulls the whole batch in one call.

pub mod events;
pub mod queue;

pub use events::EditorEvent;
pub use queue::BridgeQueue;
