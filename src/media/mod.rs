//! Media module for image descriptors, extraction and URL classification.

pub mod item;
pub mod parser;
pub mod resolve;

pub use item::{Extension, ImageDescriptor, ResolvedTarget};
pub use parser::{extract_images, gallery_item_url};
pub use resolve::resolve_url;
