//! Domain types for slides and the positionable items extracted from them.

use crate::error::{Error, Result};
use crate::props::Props;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Reference canvas width in CSS pixels.
pub const CANVAS_WIDTH: i32 = 1200;

/// Reference canvas height in CSS pixels (16:9 with the width).
pub const CANVAS_HEIGHT: i32 = 675;

/// An axis-aligned box in canvas pixel space.
///
/// Fractional coordinates from the editor are rounded on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRect")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when both dimensions are strictly positive.
    pub fn has_positive_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// True when the box lies entirely inside a `width` x `height` canvas.
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= width && self.bottom() <= height
    }
}

#[derive(Deserialize)]
struct RawRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl From<RawRect> for Rect {
    fn from(raw: RawRect) -> Self {
        Self::new(
            raw.x.round() as i32,
            raw.y.round() as i32,
            raw.width.round() as i32,
            raw.height.round() as i32,
        )
    }
}

/// The kind of a positionable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Text,
    Image,
    BulletList,
    Shape,
    Container,
}

/// Typographic role of a text item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    Title,
    Subtitle,
    Heading,
    Body,
    Caption,
    Quote,
    Label,
    Display,
    Tag,
}

/// Marker drawn in front of each bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulletMarker {
    Disc,
    Number,
    Check,
}

/// Geometry of a shape item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Circle,
    Triangle,
    Line,
    Arrow,
}

/// What a composite container item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    Step,
    BigNumber,
    PyramidLevel,
    TimelineEntry,
    GridBox,
    Metric,
    ChartSegment,
    TeamMember,
    ChecklistItem,
    Callout,
    CycleStage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    /// Image path or URL; empty while the image only exists as a prompt.
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletListContent {
    pub bullets: Vec<String>,
    pub marker: BulletMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeContent {
    pub shape: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ShapeContent {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            fill: None,
            label: None,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Payload of a composite item: the source record plus computed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerContent {
    pub kind: ContainerKind,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContainerContent {
    /// Look up a text field of the container record.
    pub fn field_text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Type-specific payload of a positionable item.
///
/// Untagged on the wire; the item's `type` field names the variant.
/// Container comes first because it is the only payload with `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemContent {
    Container(ContainerContent),
    Text(TextContent),
    Image(ImageContent),
    BulletList(BulletListContent),
    Shape(ShapeContent),
}

impl ItemContent {
    /// The item type this payload belongs to.
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Container(_) => ItemType::Container,
            Self::Text(_) => ItemType::Text,
            Self::Image(_) => ItemType::Image,
            Self::BulletList(_) => ItemType::BulletList,
            Self::Shape(_) => ItemType::Shape,
        }
    }

    /// Text of a text item.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(&t.text),
            _ => None,
        }
    }

    /// Bullets of a bullet-list item.
    pub fn bullets(&self) -> Option<&[String]> {
        match self {
            Self::BulletList(b) => Some(&b.bullets),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerContent> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageContent> {
        match self {
            Self::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeContent> {
        match self {
            Self::Shape(s) => Some(s),
            _ => None,
        }
    }
}

/// Editing limits attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    pub min_width: i32,
    pub min_height: i32,
    pub maintain_aspect_ratio: bool,
    pub snap_to_grid: bool,
}

impl Constraints {
    /// Default constraints for an item type.
    pub fn for_type(item_type: ItemType) -> Self {
        let (min_width, min_height, maintain_aspect_ratio) = match item_type {
            ItemType::Text => (50, 20, false),
            ItemType::Image => (40, 40, true),
            ItemType::BulletList => (100, 40, false),
            ItemType::Shape => (2, 1, false),
            ItemType::Container => (80, 40, false),
        };
        Self {
            min_width,
            min_height,
            maintain_aspect_ratio,
            snap_to_grid: true,
        }
    }
}

/// Where an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateOrigin {
    /// Derived from a template's props by the extractor.
    Extracted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    pub template_origin: TemplateOrigin,
    pub is_user_created: bool,
    /// Milliseconds since the Unix epoch.
    pub last_modified: u64,
}

/// A single draggable, resizable element of a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionableItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub content: ItemContent,
    /// Current placement; the editor moves this one.
    pub position: Rect,
    /// Placement at extraction time, used to reset.
    pub default_position: Rect,
    pub constraints: Constraints,
    pub metadata: ItemMetadata,
}

impl PositionableItem {
    /// Move the item back to where extraction placed it.
    pub fn reset_position(&mut self) {
        self.position = self.default_position;
    }

    pub fn is_at_default(&self) -> bool {
        self.position == self.default_position
    }

    /// True when the current box leaves the canvas.
    pub fn overflows(&self, canvas: &CanvasConfig) -> bool {
        !self.position.fits_within(canvas.width, canvas.height)
    }
}

/// Canvas settings shared by every item of a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    pub width: i32,
    pub height: i32,
    pub grid_size: i32,
    pub snap_to_grid: bool,
    pub show_grid: bool,
    pub background_color: String,
    pub padding: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            grid_size: 20,
            snap_to_grid: true,
            show_grid: false,
            background_color: "#ffffff".to_string(),
            padding: 40,
        }
    }
}

/// Output of one extraction: the items plus their canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub items: Vec<PositionableItem>,
    pub canvas_config: CanvasConfig,
}

impl Extraction {
    /// Wrap items with the default canvas.
    pub fn from_items(items: Vec<PositionableItem>) -> Self {
        Self {
            items,
            canvas_config: CanvasConfig::default(),
        }
    }

    /// Find an item by id.
    pub fn item(&self, id: &str) -> Option<&PositionableItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Item ids in emission order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    /// Items whose box leaves the canvas. Reported, never clamped.
    pub fn overflowing_items(&self) -> Vec<&PositionableItem> {
        self.items
            .iter()
            .filter(|item| item.overflows(&self.canvas_config))
            .collect()
    }
}

/// How a slide is laid out by the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositioningMode {
    /// The template renders its own fixed layout.
    #[default]
    Template,
    /// Template semantics kept in metadata, items drive rendering.
    Hybrid,
    /// Fully free-form.
    Free,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub has_custom_positioning: bool,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_template_id: Option<String>,
    /// Metadata keys owned by other parts of the editor.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decode a slide field the extractor does not depend on.
///
/// Null or a value of the wrong shape becomes the default, so one bad
/// field never rejects the whole slide.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        log::warn!("ignoring malformed slide field: {}", e);
        T::default()
    }))
}

/// A slide as exchanged with the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Editor-assigned identifier; strings and numbers are both in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub template_id: String,
    #[serde(default)]
    pub props: Props,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Vec<PositionableItem>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub canvas_config: Option<CanvasConfig>,
    #[serde(default, deserialize_with = "lenient")]
    pub positioning_mode: PositioningMode,
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: SlideMetadata,
    /// Slide fields this crate does not interpret, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Slide {
    /// Create a template-mode slide.
    pub fn new(template_id: impl Into<String>, props: Props) -> Self {
        Self {
            id: None,
            template_id: template_id.into(),
            props,
            items: None,
            canvas_config: None,
            positioning_mode: PositioningMode::Template,
            metadata: SlideMetadata::default(),
            extra: Map::new(),
        }
    }

    /// Decode a slide from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decode a slide from a JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Object(map) if map.contains_key("templateId") => {
                Ok(serde_json::from_value(value)?)
            }
            Value::Object(_) => Err(Error::InvalidSlide("missing `templateId`".to_string())),
            _ => Err(Error::InvalidSlide("expected a JSON object".to_string())),
        }
    }

    /// Encode the slide as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
