//! Overlay Node
//!
//! A detached `<div>` built by script and appended to `<body>`.

/// Absolutely positioned `<div>` with inline style and markup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayNode {
    /// The `id` attribute
    pub element_id: String,
    /// Inline style declarations, in insertion order
    pub style: Vec<(String, String)>,
    /// innerHTML
    pub inner_html: String,
    /// style.left in document pixels
    pub left: f64,
    /// style.top in document pixels
    pub top: f64,
}

impl OverlayNode {
    /// Create an empty node with an id
    pub fn new(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
            ..Default::default()
        }
    }

    /// Set one style property, replacing an earlier value
    pub fn set_style(&mut self, property: &str, value: &str) {
        if let Some(entry) = self.style.iter_mut().find(|(k, _)| k == property) {
            entry.1 = value.to_string();
        } else {
            self.style.push((property.to_string(), value.to_string()));
        }
    }

    /// Get one style property
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Place the node in document coordinates
    pub fn set_position(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
    }
}
