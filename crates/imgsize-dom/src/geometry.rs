//! Geometry APIs
//!
//! DOMRect for getBoundingClientRect and the window viewport.

/// `getBoundingClientRect()` of an element: viewport coordinates, so
/// add the scroll offsets to get document coordinates. All zero for an
/// element that is not laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    /// `left + width`, where an overlay placed to the right starts
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Window viewport: scroll offsets and inner size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll offset (pageXOffset)
    pub scroll_x: f64,
    /// Vertical scroll offset (pageYOffset)
    pub scroll_y: f64,
    /// innerWidth
    pub inner_width: f64,
    /// innerHeight
    pub inner_height: f64,
}

impl Viewport {
    /// Unscrolled viewport of the given size
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            inner_width,
            inner_height,
        }
    }

    /// Same viewport scrolled to a position
    pub fn scrolled_to(mut self, x: f64, y: f64) -> Self {
        self.scroll_x = x.max(0.0);
        self.scroll_y = y.max(0.0);
        self
    }

    /// Right edge of the visible area in document coordinates
    pub fn right_edge(&self) -> f64 {
        self.inner_width + self.scroll_x
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = DOMRect::from_xywh(10.0, 20.0, 100.0, 50.0);

        assert_eq!((rect.left(), rect.top()), (10.0, 20.0));
        assert_eq!(rect.right(), 110.0);
        assert_eq!(DOMRect::default().right(), 0.0);
    }

    #[test]
    fn test_viewport_right_edge() {
        let viewport = Viewport::new(1024.0, 768.0).scrolled_to(200.0, 50.0);
        assert_eq!(viewport.right_edge(), 1224.0);
        assert_eq!(viewport.scroll_y, 50.0);
    }

    #[test]
    fn test_negative_scroll_clamped() {
        let viewport = Viewport::new(800.0, 600.0).scrolled_to(-10.0, -5.0);
        assert_eq!(viewport.scroll_x, 0.0);
        assert_eq!(viewport.scroll_y, 0.0);
    }
}
