//! Extension messages
//!
//! JSON messages between the background side and the page script.

use serde::{Deserialize, Serialize};

/// Action name of the lookup request
pub const SHOW_IMAGE_SIZE: &str = "showImageSize";

/// Message delivered to the page script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ContentMessage {
    /// Show the overlay for the image displaying `image_src`
    #[serde(rename_all = "camelCase")]
    ShowImageSize { image_src: String },

    /// Any action this script does not handle
    #[serde(other)]
    Unsupported,
}

impl ContentMessage {
    pub fn show_image_size(image_src: &str) -> Self {
        ContentMessage::ShowImageSize {
            image_src: image_src.to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, MessageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, MessageError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Message error
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_image_size() {
        let msg = ContentMessage::from_json(
            r#"{"action": "showImageSize", "imageSrc": "https://a.test/x.png"}"#,
        )
        .unwrap();
        assert_eq!(msg, ContentMessage::show_image_size("https://a.test/x.png"));
    }

    #[test]
    fn test_serialize_wire_names() {
        let json = ContentMessage::show_image_size("https://a.test/x.png").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["action"], SHOW_IMAGE_SIZE);
        assert_eq!(value["imageSrc"], "https://a.test/x.png");
    }

    #[test]
    fn test_unknown_action() {
        let msg = ContentMessage::from_json(r#"{"action": "ping"}"#).unwrap();
        assert_eq!(msg, ContentMessage::Unsupported);
    }

    #[test]
    fn test_malformed() {
        assert!(ContentMessage::from_json("{not json").is_err());
        assert!(ContentMessage::from_json(r#"{"action": "showImageSize"}"#).is_err());
        assert!(ContentMessage::from_json(r#"{"imageSrc": "x"}"#).is_err());
    }
}
