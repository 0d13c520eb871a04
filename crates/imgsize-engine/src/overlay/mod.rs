//! Overlay Controller
//!
//! Owns the one overlay a page may show. Rendering always removes the
//! previous overlay first, so at most one node is ever attached.
//!
//! ```text
//! Absent --render--> Visible(armed)
//! Visible(*) --pointer enter--> Visible(disarmed)
//! Visible(*) --pointer leave--> Visible(armed, fresh countdown)
//! Visible(armed) --deadline--> Absent
//! Visible(*) --click / scroll--> Absent
//! ```

mod content;
mod position;
mod timer;

use std::time::{Duration, Instant};

use imgsize_dom::{DOMRect, NodeId, OverlayHost, PageEvent, Viewport};

use crate::lookup::ResolvedImageInfo;

pub use content::{OVERLAY_ELEMENT_ID, build_overlay_node, escape_html, render_html};
pub use position::{OVERLAY_FLIP_OFFSET, OVERLAY_GAP, OVERLAY_MAX_WIDTH, overlay_position};
pub use timer::AutoHideTimer;

/// How long an overlay stays up without hover
pub const AUTO_HIDE_DELAY: Duration = Duration::from_secs(6);

/// Observable overlay state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Absent,
    Visible { timer_armed: bool },
}

#[derive(Debug)]
struct ActiveOverlay {
    node: NodeId,
    timer: AutoHideTimer,
}

/// Single-overlay owner
#[derive(Debug, Default)]
pub struct OverlayController {
    active: Option<ActiveOverlay>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        match &self.active {
            None => OverlayState::Absent,
            Some(active) => OverlayState::Visible {
                timer_armed: active.timer.is_armed(),
            },
        }
    }

    /// Node of the visible overlay
    pub fn node(&self) -> Option<NodeId> {
        self.active.as_ref().map(|active| active.node)
    }

    /// When the visible overlay will hide itself, if counting down
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.as_ref().and_then(|active| active.timer.deadline())
    }

    /// Show `info` next to `anchor`, replacing any visible overlay
    pub fn render<H: OverlayHost>(
        &mut self,
        host: &mut H,
        info: ResolvedImageInfo,
        anchor: &DOMRect,
        viewport: &Viewport,
        now: Instant,
    ) -> NodeId {
        self.dismiss(host);

        let mut node = build_overlay_node(&info);
        let (left, top) = overlay_position(anchor, viewport);
        node.set_position(left, top);

        let id = host.append_overlay(node);
        let mut timer = AutoHideTimer::new(AUTO_HIDE_DELAY);
        timer.arm(now);
        self.active = Some(ActiveOverlay { node: id, timer });

        tracing::debug!("Overlay {} shown at ({}, {})", id, left, top);
        id
    }

    /// Hover started on `node`: stop the countdown
    pub fn pointer_enter(&mut self, node: NodeId) -> bool {
        match self.active_for(node) {
            Some(active) => {
                active.timer.disarm();
                true
            }
            None => false,
        }
    }

    /// Hover ended on `node`: restart the countdown from `now`
    pub fn pointer_leave(&mut self, node: NodeId, now: Instant) -> bool {
        match self.active_for(node) {
            Some(active) => {
                active.timer.arm(now);
                true
            }
            None => false,
        }
    }

    /// Remove the visible overlay, if any
    pub fn dismiss<H: OverlayHost>(&mut self, host: &mut H) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };

        if let Err(e) = host.remove_overlay(active.node) {
            // The page removed it already.
            tracing::debug!("Overlay {} already detached: {}", active.node, e);
        }
        true
    }

    /// Fire the countdown if it has run out at `now`
    pub fn poll_timer<H: OverlayHost>(&mut self, host: &mut H, now: Instant) -> bool {
        let due = self
            .active
            .as_ref()
            .is_some_and(|active| active.timer.is_due(now));

        if due {
            tracing::debug!("Overlay auto-hide elapsed");
            self.dismiss(host);
        }
        due
    }

    /// Route a page event
    pub fn handle_event<H: OverlayHost>(&mut self, host: &mut H, event: PageEvent, now: Instant) {
        if event.is_global_dismiss() {
            self.dismiss(host);
            return;
        }

        match event {
            PageEvent::PointerEnter(node) => {
                self.pointer_enter(node);
            }
            PageEvent::PointerLeave(node) => {
                self.pointer_leave(node, now);
            }
            PageEvent::Click | PageEvent::Scroll => {}
        }
    }

    fn active_for(&mut self, node: NodeId) -> Option<&mut ActiveOverlay> {
        self.active.as_mut().filter(|active| active.node == node)
    }
}
