//! imgsize Engine
//!
//! On-demand image details for a web page: rendered and intrinsic size,
//! aspect ratio and file size, shown in a transient overlay next to the
//! image.
//!
//! # Example
//! ```rust,ignore
//! use imgsize_engine::{Config, ContentMessage, ContentScript};
//!
//! let mut script = ContentScript::from_config(document, Config::default())?;
//! script.handle_message(ContentMessage::show_image_size("https://example.com/a.jpg"));
//! smol::block_on(script.settle());
//! ```

pub mod aspect;
pub mod config;
pub mod content_script;
pub mod lookup;
pub mod menu;
pub mod message;
pub mod overlay;
pub mod probe;
pub mod source;

pub use aspect::{AspectRatioLabel, RatioTable, simplify};
pub use config::{Config, StalePolicy};
pub use content_script::{ContentScript, Inbound};
pub use lookup::{CompletedLookup, Generation, LookupError, LookupOrchestrator, PendingLookup, ResolvedImageInfo};
pub use menu::{ContextMenuItem, MenuClickInfo, SHOW_IMAGE_SIZE_MENU, TabMessage, route_menu_click};
pub use message::{ContentMessage, MessageError};
pub use overlay::{AUTO_HIDE_DELAY, OverlayController, OverlayState};
pub use probe::{DimensionProbe, ImageDimensions, format_file_size};

// Re-export sub-crates for advanced usage
pub use imgsize_dom as dom;
pub use imgsize_net as net;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
