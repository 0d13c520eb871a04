//! HTMLImageElement
//!
//! Snapshot of the properties read from an `<img>`.

use crate::DOMRect;

/// An `<img>` element as seen by script
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageElement {
    /// The `src` attribute
    pub src: String,
    /// The source the browser selected (srcset/picture), `currentSrc`
    pub current_src: String,
    /// Rendered padding-box width, 0 if not laid out
    pub offset_width: u32,
    /// Rendered padding-box height, 0 if not laid out
    pub offset_height: u32,
    /// getBoundingClientRect()
    pub bounding_rect: DOMRect,
}

impl ImageElement {
    /// Image whose `src` and `currentSrc` agree
    pub fn new(src: &str) -> Self {
        Self {
            src: src.to_string(),
            current_src: src.to_string(),
            ..Default::default()
        }
    }

    /// Set the browser-selected source
    pub fn with_current_src(mut self, current_src: &str) -> Self {
        self.current_src = current_src.to_string();
        self
    }

    /// Lay the element out at a viewport-relative position
    pub fn with_layout(mut self, x: f64, y: f64, width: u32, height: u32) -> Self {
        self.offset_width = width;
        self.offset_height = height;
        self.bounding_rect = DOMRect::from_xywh(x, y, width as f64, height as f64);
        self
    }

    /// Whether this element displays `url`, via either `src` or `currentSrc`
    pub fn matches_source(&self, url: &str) -> bool {
        self.src == url || self.current_src == url
    }
}
