//! Edge case tests for the page model

use imgsize_dom::{DOMRect, Document, DocumentImageSource, DomError, ImageElement, OverlayHost, OverlayNode, PageEvent, Viewport};

// ============================================================================
// IMAGE LOOKUP
// ============================================================================

#[test]
fn test_find_image_in_empty_document() {
    let doc = Document::default();
    assert!(doc.find_image("https://a.test/x.png").is_none());
    assert!(doc.images().is_empty());
}

#[test]
fn test_find_image_by_current_src_only() {
    let mut doc = Document::new("https://page.test/");
    doc.add_image(
        ImageElement::new("https://a.test/full.jpg")
            .with_current_src("https://a.test/640w.jpg"),
    );

    let found = doc.find_image("https://a.test/640w.jpg").unwrap();
    assert_eq!(found.src, "https://a.test/full.jpg");
}

#[test]
fn test_find_image_returns_document_order_first() {
    let mut doc = Document::new("https://page.test/");
    doc.add_image(ImageElement::new("https://a.test/x.png").with_layout(0.0, 0.0, 10, 10));
    doc.add_image(ImageElement::new("https://a.test/x.png").with_layout(0.0, 500.0, 99, 99));

    let found = doc.find_image("https://a.test/x.png").unwrap();
    assert_eq!(found.offset_width, 10);
}

#[test]
fn test_empty_url_matches_only_empty_sources() {
    let mut doc = Document::default();
    doc.add_image(ImageElement::new("https://a.test/x.png"));
    assert!(doc.find_image("").is_none());
}

#[test]
fn test_unlaid_out_image_has_zero_box() {
    let img = ImageElement::new("https://a.test/x.png");
    assert_eq!(img.offset_width, 0);
    assert_eq!(img.offset_height, 0);
    assert_eq!(img.bounding_rect, DOMRect::default());
}

// ============================================================================
// BODY NODES
// ============================================================================

#[test]
fn test_remove_twice_errors() {
    let mut doc = Document::default();
    let id = doc.append_overlay(OverlayNode::new("tip"));

    assert!(doc.remove_overlay(id).is_ok());
    assert_eq!(doc.remove_overlay(id), Err(DomError::NodeNotFound(id)));
}

#[test]
fn test_node_ids_not_reused() {
    let mut doc = Document::default();
    let a = doc.append_overlay(OverlayNode::new("tip"));
    doc.remove_overlay(a).unwrap();
    let b = doc.append_overlay(OverlayNode::new("tip"));

    assert_ne!(a, b);
    assert!(doc.overlay(a).is_none());
    assert!(doc.overlay(b).is_some());
}

#[test]
fn test_overlays_listed_in_append_order() {
    let mut doc = Document::default();
    let a = doc.append_overlay(OverlayNode::new("first"));
    let b = doc.append_overlay(OverlayNode::new("second"));
    doc.remove_overlay(a).unwrap();

    let ids: Vec<_> = doc.overlays().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![b]);
}

#[test]
fn test_style_replaces_and_positions() {
    let mut node = OverlayNode::new("tip");
    node.set_style("color", "white");
    node.set_style("color", "black");
    node.set_position(12.5, 40.0);

    assert_eq!(node.style_value("color"), Some("black"));
    assert_eq!(node.style_value("left"), None);
    assert_eq!((node.left, node.top), (12.5, 40.0));
}

// ============================================================================
// GEOMETRY AND EVENTS
// ============================================================================

#[test]
fn test_negative_scroll_clamped() {
    let viewport = Viewport::new(800.0, 600.0).scrolled_to(-20.0, -5.0);
    assert_eq!(viewport.scroll_x, 0.0);
    assert_eq!(viewport.scroll_y, 0.0);
    assert_eq!(viewport.right_edge(), 800.0);
}

#[test]
fn test_viewport_update_visible_to_lookups() {
    let mut doc = Document::default();
    doc.set_viewport(Viewport::new(375.0, 812.0).scrolled_to(0.0, 1200.0));
    assert_eq!(doc.viewport().inner_width, 375.0);
    assert_eq!(doc.viewport().scroll_y, 1200.0);
}

#[test]
fn test_pointer_events_are_not_global() {
    let mut doc = Document::default();
    let id = doc.append_overlay(OverlayNode::new("tip"));

    assert!(!PageEvent::PointerEnter(id).is_global_dismiss());
    assert!(!PageEvent::PointerLeave(id).is_global_dismiss());
    assert!(PageEvent::Scroll.is_global_dismiss());
}
