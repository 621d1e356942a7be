//! # Editable document model
//!
//! The editable region is an arena of typed nodes ([`Document`]) addressed by
//! generation-stamped [`NodeId`]s, so "same node" is a plain id comparison and
//! ids from before a content rewrite can never alias the nodes after it.
//!
//! - **`document`**: the arena, selection endpoints and tree queries
//! - **`markup`**: Logos-based lexer, fragment parser and serializer

pub mod document;
pub mod markup;

pub use document::{Document, DocumentError, DomPoint, Element, Node, NodeId, NodeKind, Selection};
