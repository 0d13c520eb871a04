//! Overlay markup and fixed panel style

use imgsize_dom::OverlayNode;

use crate::aspect::simplify;
use crate::lookup::ResolvedImageInfo;

/// `id` of the overlay element
pub const OVERLAY_ELEMENT_ID: &str = "image-size-tooltip";

const PANEL_STYLE: [(&str, &str); 13] = [
    ("position", "absolute"),
    ("background", "rgba(0, 0, 0, 0.95)"),
    ("color", "white"),
    ("padding", "12px"),
    ("border-radius", "6px"),
    ("font-size", "12px"),
    ("font-family", "system-ui, -apple-system, sans-serif"),
    ("z-index", "10000"),
    ("pointer-events", "auto"),
    ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.4)"),
    ("max-width", "320px"),
    ("line-height", "1.4"),
    ("border", "1px solid #333"),
];

const HEADING_STYLE: &str =
    "margin-bottom: 8px; font-weight: bold; color: #fff; border-bottom: 1px solid #444; padding-bottom: 4px;";
const ROW_STYLE: &str = "margin-bottom: 4px;";
const RULE_STYLE: &str = "margin: 8px 0; border-top: 1px solid #444; padding-top: 4px;";
const SOURCE_STYLE: &str = "font-size: 11px; color: #ccc; word-break: break-all;";

/// Unpositioned overlay node for `info`
pub fn build_overlay_node(info: &ResolvedImageInfo) -> OverlayNode {
    let mut node = OverlayNode::new(OVERLAY_ELEMENT_ID);
    for (property, value) in PANEL_STYLE {
        node.set_style(property, value);
    }
    node.inner_html = render_html(info);
    node
}

/// innerHTML of the overlay; all interpolated text is escaped
pub fn render_html(info: &ResolvedImageInfo) -> String {
    let rendered_ratio = simplify(info.rendered.width, info.rendered.height);
    let intrinsic_ratio = simplify(info.intrinsic.width, info.intrinsic.height);

    let mut html = String::new();
    html.push_str(&format!(r#"<div style="{HEADING_STYLE}">Image Details</div>"#));

    row(&mut html, "Rendered size", &info.rendered.to_string());
    row(&mut html, "Rendered aspect ratio", rendered_ratio.as_str());
    html.push_str(&format!(r#"<div style="{RULE_STYLE}"></div>"#));

    row(&mut html, "Intrinsic size", &info.intrinsic.to_string());
    row(&mut html, "Intrinsic aspect ratio", intrinsic_ratio.as_str());
    row(&mut html, "File size", &info.file_size);
    html.push_str(&format!(r#"<div style="{RULE_STYLE}"></div>"#));

    match &info.original_source {
        Some(original) => {
            source(&mut html, "Current source", &info.current_source, true);
            source(&mut html, "Original source", original, false);
        }
        None => source(&mut html, "Current source", &info.current_source, false),
    }

    html
}

fn row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        r#"<div style="{ROW_STYLE}"><strong>{label}:</strong> {}</div>"#,
        escape_html(value)
    ));
}

fn source(html: &mut String, label: &str, url: &str, spaced: bool) {
    let spacing = if spaced { " margin-bottom: 6px;" } else { "" };
    html.push_str(&format!(
        r#"<div style="{SOURCE_STYLE}{spacing}"><strong>{label}:</strong><br>{}</div>"#,
        escape_html(url)
    ));
}

/// Escape text for an HTML text or attribute context
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
