//! Page Events
//!
//! The page-wide and overlay-local events the overlay reacts to.

use crate::NodeId;

/// Page event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// `click` anywhere in the document
    Click,
    /// `scroll` on the window
    Scroll,
    /// `mouseenter` on a node
    PointerEnter(NodeId),
    /// `mouseleave` on a node
    PointerLeave(NodeId),
}

impl PageEvent {
    /// Whether this event dismisses any visible overlay
    pub fn is_global_dismiss(&self) -> bool {
        matches!(self, PageEvent::Click | PageEvent::Scroll)
    }
}
