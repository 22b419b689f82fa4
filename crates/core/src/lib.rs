//! Template-to-layout extraction for slide decks.
//!
//! Turns a slide's template identifier and props into absolutely
//! positioned, independently movable items on a 1200x675 canvas, so a
//! free-form editor can move elements that came from a fixed layout.

pub mod convert;
pub mod error;
pub mod fallback;
pub mod items;
pub mod layout;
pub mod props;
pub mod templates;
pub mod types;

pub use convert::{
    convert_deck, convert_slide_to_positioning, extract_items_from_slide, revert_to_template,
    LayoutExtractor,
};
pub use error::{Error, PropError, Result};
pub use items::ItemFactory;
pub use props::Props;
pub use templates::{get_extractor, ExtractFn, TemplateKind};
pub use types::{
    CanvasConfig, Extraction, ItemContent, ItemType, PositionableItem, PositioningMode, Rect,
    Slide, SlideMetadata,
};
