//! imgsize DOM
//!
//! The slice of the page the overlay engine needs: image elements in
//! document order, viewport geometry, page events, and a body to attach
//! one overlay node to.

mod document;
mod element;
mod events;
mod geometry;
mod node;

pub use document::{Document, DocumentImageSource, OverlayHost};
pub use element::ImageElement;
pub use events::PageEvent;
pub use geometry::{DOMRect, Viewport};
pub use node::OverlayNode;

/// Node identifier for nodes attached to the document body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
}
