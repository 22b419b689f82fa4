//! Conversion of template slides into positioned slides.

use crate::fallback::extract_generic;
use crate::items::{current_timestamp, ItemFactory};
use crate::templates::get_extractor;
use crate::types::{CanvasConfig, Extraction, PositioningMode, Slide};

/// Converts template slides into hybrid, freely positionable slides.
///
/// Holds the editor-facing canvas settings. Item geometry is always
/// computed against the 1200x675 reference canvas.
#[derive(Debug, Clone, Default)]
pub struct LayoutExtractor {
    background_color: Option<String>,
    grid_size: Option<i32>,
    snap_to_grid: Option<bool>,
    show_grid: Option<bool>,
    /// Fixed item timestamp; the system clock is read when unset.
    timestamp: Option<u64>,
}

impl LayoutExtractor {
    /// Create an extractor with the default canvas settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the snapping grid size in pixels (at least 1).
    pub fn with_grid_size(mut self, size: i32) -> Self {
        self.grid_size = Some(size.max(1));
        self
    }

    pub fn with_snap_to_grid(mut self, snap: bool) -> Self {
        self.snap_to_grid = Some(snap);
        self
    }

    pub fn with_show_grid(mut self, show: bool) -> Self {
        self.show_grid = Some(show);
        self
    }

    /// Stamp items with a fixed time (ms since the Unix epoch).
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Extract positionable items from a slide.
    ///
    /// Unknown template identifiers use the generic title/content
    /// extraction. Never fails.
    pub fn extract(&self, slide: &Slide) -> Extraction {
        self.extract_with(slide, &self.factory())
    }

    /// Convert a slide to hybrid positioning mode.
    ///
    /// Returns a copy of the slide carrying the extracted items and canvas;
    /// the input is left untouched.
    pub fn convert(&self, slide: &Slide) -> Slide {
        self.convert_with(slide, &self.factory())
    }

    /// Convert every slide of a deck, stamping all items with one time.
    pub fn convert_deck(&self, slides: &[Slide]) -> Vec<Slide> {
        let factory = self.factory();
        slides
            .iter()
            .map(|slide| self.convert_with(slide, &factory))
            .collect()
    }

    fn factory(&self) -> ItemFactory {
        ItemFactory::at(self.timestamp.unwrap_or_else(current_timestamp))
    }

    fn extract_with(&self, slide: &Slide, factory: &ItemFactory) -> Extraction {
        let mut extraction = match get_extractor(&slide.template_id) {
            Some(extract) => {
                log::debug!("Extracting items for template '{}'", slide.template_id);
                extract(&slide.props, factory)
            }
            None => {
                log::debug!(
                    "No extractor for template '{}', using generic extraction",
                    slide.template_id
                );
                extract_generic(&slide.props, factory)
            }
        };
        self.apply_canvas_settings(&mut extraction.canvas_config);
        log::debug!(
            "Extracted {} items from template '{}'",
            extraction.items.len(),
            slide.template_id
        );
        extraction
    }

    fn convert_with(&self, slide: &Slide, factory: &ItemFactory) -> Slide {
        let extraction = self.extract_with(slide, factory);

        let mut converted = slide.clone();
        converted.items = Some(extraction.items);
        converted.canvas_config = Some(extraction.canvas_config);
        converted.positioning_mode = PositioningMode::Hybrid;
        converted.metadata.has_custom_positioning = true;
        converted.metadata.original_template_id = Some(slide.template_id.clone());
        converted
    }

    fn apply_canvas_settings(&self, canvas: &mut CanvasConfig) {
        if let Some(color) = &self.background_color {
            canvas.background_color = color.clone();
        }
        if let Some(size) = self.grid_size {
            canvas.grid_size = size;
        }
        if let Some(snap) = self.snap_to_grid {
            canvas.snap_to_grid = snap;
        }
        if let Some(show) = self.show_grid {
            canvas.show_grid = show;
        }
    }
}

/// Extract items from a slide with the default settings.
pub fn extract_items_from_slide(slide: &Slide) -> Extraction {
    LayoutExtractor::new().extract(slide)
}

/// Convert a slide to hybrid positioning with the default settings.
pub fn convert_slide_to_positioning(slide: &Slide) -> Slide {
    LayoutExtractor::new().convert(slide)
}

/// Convert every slide of a deck with the default settings.
pub fn convert_deck(slides: &[Slide]) -> Vec<Slide> {
    LayoutExtractor::new().convert_deck(slides)
}

/// Switch a slide back to its template's own layout.
///
/// Drops the extracted items and canvas. `originalTemplateId` stays so
/// the slide's history remains traceable.
pub fn revert_to_template(slide: &Slide) -> Slide {
    let mut reverted = slide.clone();
    reverted.items = None;
    reverted.canvas_config = None;
    reverted.positioning_mode = PositioningMode::Template;
    reverted.metadata.has_custom_positioning = false;
    reverted
}
