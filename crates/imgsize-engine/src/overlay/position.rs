//! Overlay placement next to the anchor image

use imgsize_dom::{DOMRect, Viewport};

/// Overlay max-width in px
pub const OVERLAY_MAX_WIDTH: f64 = 320.0;

/// Gap between the anchor's right edge and the overlay
pub const OVERLAY_GAP: f64 = 10.0;

/// Offset from the anchor's left edge when flipped to the left side
pub const OVERLAY_FLIP_OFFSET: f64 = OVERLAY_MAX_WIDTH + OVERLAY_GAP;

/// Document coordinates of the overlay's top-left corner
///
/// Right of the anchor when the full max width fits in the viewport,
/// otherwise left of it. Top edges align.
pub fn overlay_position(anchor: &DOMRect, viewport: &Viewport) -> (f64, f64) {
    let right_side = anchor.right() + viewport.scroll_x + OVERLAY_GAP;
    let top = anchor.top() + viewport.scroll_y;

    let left = if right_side + OVERLAY_MAX_WIDTH > viewport.right_edge() {
        anchor.left() + viewport.scroll_x - OVERLAY_FLIP_OFFSET
    } else {
        right_side
    };

    (left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_right_when_room() {
        let anchor = DOMRect::from_xywh(100.0, 50.0, 200.0, 150.0);
        let viewport = Viewport::new(1280.0, 720.0);
        assert_eq!(overlay_position(&anchor, &viewport), (310.0, 50.0));
    }

    #[test]
    fn test_flips_left_on_overflow() {
        let anchor = DOMRect::from_xywh(700.0, 20.0, 200.0, 150.0);
        let viewport = Viewport::new(1024.0, 768.0);
        // 910 + 320 > 1024
        assert_eq!(overlay_position(&anchor, &viewport), (370.0, 20.0));
    }

    #[test]
    fn test_includes_scroll_offsets() {
        let anchor = DOMRect::from_xywh(100.0, 50.0, 200.0, 150.0);
        let viewport = Viewport::new(1280.0, 720.0).scrolled_to(30.0, 400.0);
        assert_eq!(overlay_position(&anchor, &viewport), (340.0, 450.0));
    }

    #[test]
    fn test_exact_fit_stays_right() {
        // 300 + 10 + 320 == 630
        let anchor = DOMRect::from_xywh(0.0, 0.0, 300.0, 100.0);
        let viewport = Viewport::new(630.0, 400.0);
        assert_eq!(overlay_position(&anchor, &viewport).0, 310.0);
    }

    #[test]
    fn test_flip_may_go_negative() {
        let anchor = DOMRect::from_xywh(10.0, 0.0, 600.0, 100.0);
        let viewport = Viewport::new(640.0, 400.0);
        assert_eq!(overlay_position(&anchor, &viewport).0, -320.0);
    }
}
