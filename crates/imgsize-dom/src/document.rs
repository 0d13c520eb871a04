//! Document - High-level document API

use crate::{DomError, ImageElement, NodeId, OverlayNode, Viewport};

/// Read access to the images of a document
pub trait DocumentImageSource {
    /// All `<img>` elements, in document order
    fn images(&self) -> Vec<ImageElement>;

    /// Current window viewport
    fn viewport(&self) -> Viewport;

    /// First image displaying `url` via `src` or `currentSrc`
    fn find_image(&self, url: &str) -> Option<ImageElement> {
        self.images().into_iter().find(|img| img.matches_source(url))
    }
}

/// Write access to `<body>` for overlay nodes
pub trait OverlayHost {
    /// appendChild on `<body>`
    fn append_overlay(&mut self, node: OverlayNode) -> NodeId;

    /// Remove a previously appended node
    fn remove_overlay(&mut self, id: NodeId) -> Result<(), DomError>;
}

/// In-memory document
#[derive(Debug, Clone)]
pub struct Document {
    /// Document URL
    url: String,
    /// `<img>` elements in document order
    images: Vec<ImageElement>,
    /// Window viewport
    viewport: Viewport,
    /// Nodes appended to `<body>`
    body: Vec<(NodeId, OverlayNode)>,
    /// Next node id to hand out
    next_id: u32,
}

impl Document {
    /// Create a new empty document
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            images: Vec::new(),
            viewport: Viewport::default(),
            body: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an `<img>` after the existing ones
    pub fn add_image(&mut self, image: ImageElement) {
        self.images.push(image);
    }

    /// Replace the viewport (resize or scroll)
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Nodes currently attached to `<body>`
    pub fn overlays(&self) -> impl Iterator<Item = (NodeId, &OverlayNode)> {
        self.body.iter().map(|(id, node)| (*id, node))
    }

    /// Number of nodes attached to `<body>`
    pub fn overlay_count(&self) -> usize {
        self.body.len()
    }

    /// Look up an attached node
    pub fn overlay(&self, id: NodeId) -> Option<&OverlayNode> {
        self.body.iter().find(|(n, _)| *n == id).map(|(_, node)| node)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

impl DocumentImageSource for Document {
    fn images(&self) -> Vec<ImageElement> {
        self.images.clone()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn find_image(&self, url: &str) -> Option<ImageElement> {
        self.images.iter().find(|img| img.matches_source(url)).cloned()
    }
}

impl OverlayHost for Document {
    fn append_overlay(&mut self, node: OverlayNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        tracing::trace!("Appending {} ({}) to body of {}", id, node.element_id, self.url);
        self.body.push((id, node));
        id
    }

    fn remove_overlay(&mut self, id: NodeId) -> Result<(), DomError> {
        let index = self
            .body
            .iter()
            .position(|(n, _)| *n == id)
            .ok_or(DomError::NodeNotFound(id))?;
        self.body.remove(index);
        Ok(())
    }
}
