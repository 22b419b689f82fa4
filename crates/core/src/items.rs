//! Factories for positionable items.
//!
//! Every extractor builds its output through an [`ItemFactory`], which
//! stamps one timestamp on all items of a slide and attaches the default
//! constraints for each item type.

use crate::props::Props;
use crate::types::{
    BulletListContent, BulletMarker, Constraints, ContainerContent, ContainerKind, ImageContent,
    ItemContent, ItemMetadata, PositionableItem, Rect, ShapeContent, TemplateOrigin,
    TextContent, TextStyle,
};
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Builds items for one extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFactory {
    timestamp: u64,
}

impl ItemFactory {
    /// Factory stamping items with the given time (ms since the Unix epoch).
    pub fn at(timestamp: u64) -> Self {
        Self { timestamp }
    }

    /// Factory stamping items with the current system time.
    pub fn now() -> Self {
        Self::at(current_timestamp())
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Assemble an item around any payload.
    pub fn item(
        &self,
        id: impl Into<String>,
        content: ItemContent,
        position: Rect,
    ) -> PositionableItem {
        let item_type = content.item_type();
        PositionableItem {
            id: id.into(),
            item_type,
            content,
            position,
            default_position: position,
            constraints: Constraints::for_type(item_type),
            metadata: ItemMetadata {
                template_origin: TemplateOrigin::Extracted,
                is_user_created: false,
                last_modified: self.timestamp,
            },
        }
    }

    pub fn text_item(
        &self,
        id: impl Into<String>,
        text: impl Into<String>,
        style: TextStyle,
        position: Rect,
    ) -> PositionableItem {
        let content = ItemContent::Text(TextContent {
            text: text.into(),
            style,
        });
        self.item(id, content, position)
    }

    pub fn image_item(
        &self,
        id: impl Into<String>,
        image: ImageContent,
        position: Rect,
    ) -> PositionableItem {
        self.item(id, ItemContent::Image(image), position)
    }

    pub fn bullet_list_item(
        &self,
        id: impl Into<String>,
        bullets: Vec<String>,
        marker: BulletMarker,
        position: Rect,
    ) -> PositionableItem {
        let content = ItemContent::BulletList(BulletListContent { bullets, marker });
        self.item(id, content, position)
    }

    pub fn shape_item(
        &self,
        id: impl Into<String>,
        shape: ShapeContent,
        position: Rect,
    ) -> PositionableItem {
        self.item(id, ItemContent::Shape(shape), position)
    }

    /// A composite item holding an arbitrary record.
    ///
    /// `kind` is reserved for the container kind; a record's own `kind`
    /// is kept as `sourceKind`.
    pub fn container_item(
        &self,
        id: impl Into<String>,
        kind: ContainerKind,
        mut fields: Map<String, Value>,
        position: Rect,
    ) -> PositionableItem {
        if let Some(source_kind) = fields.remove("kind") {
            fields.insert("sourceKind".to_string(), source_kind);
        }
        let content = ItemContent::Container(ContainerContent { kind, fields });
        self.item(id, content, position)
    }

    /// A numbered process step.
    pub fn step_item(
        &self,
        id: impl Into<String>,
        number: usize,
        step: &Props,
        position: Rect,
    ) -> PositionableItem {
        let fields = with_field(step, "number", number);
        self.container_item(id, ContainerKind::Step, fields, position)
    }

    /// A headline figure with its label.
    pub fn big_number_item(
        &self,
        id: impl Into<String>,
        number: &Props,
        position: Rect,
    ) -> PositionableItem {
        let fields = number.as_map().clone();
        self.container_item(id, ContainerKind::BigNumber, fields, position)
    }

    /// One level of a pyramid, level 1 at the top.
    pub fn pyramid_item(
        &self,
        id: impl Into<String>,
        level: usize,
        entry: &Props,
        position: Rect,
    ) -> PositionableItem {
        let fields = with_field(entry, "level", level);
        self.container_item(id, ContainerKind::PyramidLevel, fields, position)
    }

    /// A timeline entry placed above or below the axis.
    pub fn timeline_item(
        &self,
        id: impl Into<String>,
        entry: &Props,
        above: bool,
        position: Rect,
    ) -> PositionableItem {
        let placement = if above { "above" } else { "below" };
        let fields = with_field(entry, "placement", placement);
        self.container_item(id, ContainerKind::TimelineEntry, fields, position)
    }
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self::now()
    }
}

/// Milliseconds since the Unix epoch, or zero if the clock is before it.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Copy a record and add one computed field to it.
pub(crate) fn with_field(record: &Props, key: &str, value: impl Into<Value>) -> Map<String, Value> {
    let mut fields = record.as_map().clone();
    fields.insert(key.to_string(), value.into());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemType, ShapeKind};
    use serde_json::json;

    const RECT: Rect = Rect::new(60, 40, 1080, 80);

    #[test]
    fn test_text_item_defaults() {
        let factory = ItemFactory::at(1_700_000_000_000);
        let item = factory.text_item("title", "Hello", TextStyle::Title, RECT);

        assert_eq!(item.id, "title");
        assert_eq!(item.item_type, ItemType::Text);
        assert_eq!(item.content.text(), Some("Hello"));
        assert_eq!(item.position, item.default_position);
        assert_eq!(item.constraints.min_width, 50);
        assert!(!item.metadata.is_user_created);
        assert_eq!(item.metadata.template_origin, TemplateOrigin::Extracted);
        assert_eq!(item.metadata.last_modified, 1_700_000_000_000);
    }

    #[test]
    fn test_image_item_keeps_aspect_ratio() {
        let factory = ItemFactory::at(0);
        let image = ImageContent {
            src: "/img/a.png".to_string(),
            alt: "A".to_string(),
            prompt: None,
        };
        let item = factory.image_item("image", image, RECT);

        assert_eq!(item.item_type, ItemType::Image);
        assert!(item.constraints.maintain_aspect_ratio);
    }

    #[test]
    fn test_shape_and_bullets() {
        let factory = ItemFactory::at(0);
        let shape = factory.shape_item("line", ShapeContent::new(ShapeKind::Line), RECT);
        let list = factory.bullet_list_item(
            "list",
            vec!["a".to_string(), "b".to_string()],
            BulletMarker::Disc,
            RECT,
        );

        assert_eq!(shape.item_type, ItemType::Shape);
        assert_eq!(list.item_type, ItemType::BulletList);
        assert_eq!(list.content.bullets().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_step_item_adds_number() {
        let factory = ItemFactory::at(0);
        let step = Props::from_value(json!({"heading": "Plan", "description": "Scope it"}));
        let item = factory.step_item("step-2", 2, &step, RECT);

        let container = item.content.as_container().unwrap();
        assert_eq!(container.kind, ContainerKind::Step);
        assert_eq!(container.field_text("heading"), Some("Plan"));
        assert_eq!(container.fields.get("number"), Some(&json!(2)));
    }

    #[test]
    fn test_container_keeps_record_kind_aside() {
        let factory = ItemFactory::at(0);
        let step = Props::from_value(json!({"heading": "a", "kind": "manual"}));
        let item = factory.step_item("step-1", 1, &step, RECT);

        let container = item.content.as_container().unwrap();
        assert_eq!(container.kind, ContainerKind::Step);
        assert_eq!(container.field_text("sourceKind"), Some("manual"));
        assert!(container.fields.get("kind").is_none());

        let encoded = serde_json::to_string(&item.content).unwrap();
        assert_eq!(encoded.matches("\"kind\"").count(), 1);
    }

    #[test]
    fn test_timeline_item_placement() {
        let factory = ItemFactory::at(0);
        let entry = Props::from_value(json!({"year": "2020"}));

        let above = factory.timeline_item("t1", &entry, true, RECT);
        let below = factory.timeline_item("t2", &entry, false, RECT);

        assert_eq!(
            above.content.as_container().unwrap().field_text("placement"),
            Some("above")
        );
        assert_eq!(
            below.content.as_container().unwrap().field_text("placement"),
            Some("below")
        );
    }

    #[test]
    fn test_reset_position() {
        let factory = ItemFactory::at(0);
        let mut item = factory.text_item("t", "x", TextStyle::Body, RECT);
        item.position.x += 25;
        assert!(!item.is_at_default());

        item.reset_position();
        assert!(item.is_at_default());
    }
}
