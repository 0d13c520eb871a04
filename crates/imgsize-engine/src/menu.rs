//! Context menu (background side)
//!
//! The menu entry registered for images and the routing of its clicks to
//! the tab's page script.

use serde::{Deserialize, Serialize};

use crate::message::{ContentMessage, SHOW_IMAGE_SIZE};

/// Context menu entry descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextMenuItem {
    pub id: &'static str,
    pub title: &'static str,
    pub contexts: &'static [&'static str],
}

/// The image entry registered on install
pub const SHOW_IMAGE_SIZE_MENU: ContextMenuItem = ContextMenuItem {
    id: SHOW_IMAGE_SIZE,
    title: "Show Image Dimensions",
    contexts: &["image"],
};

/// What the host reports about a menu click
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuClickInfo {
    pub menu_item_id: String,
    #[serde(default)]
    pub src_url: Option<String>,
}

/// A message addressed to one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabMessage {
    pub tab_id: u32,
    pub message: ContentMessage,
}

/// Message to send for a click on `tab_id`, if the click is ours
pub fn route_menu_click(click: &MenuClickInfo, tab_id: u32) -> Option<TabMessage> {
    if click.menu_item_id != SHOW_IMAGE_SIZE_MENU.id {
        return None;
    }

    let Some(src) = click.src_url.as_deref() else {
        tracing::debug!("Menu click on tab {} without an image source", tab_id);
        return None;
    };

    Some(TabMessage {
        tab_id,
        message: ContentMessage::show_image_size(src),
    })
}
