//! Generic extraction for templates outside the registry.

use crate::items::ItemFactory;
use crate::layout::{CONTENT_WIDTH, MARGIN};
use crate::props::Props;
use crate::types::{Extraction, Rect, TextStyle};

const TITLE_RECT: Rect = Rect::new(MARGIN, 60, CONTENT_WIDTH, 100);
const CONTENT_RECT: Rect = Rect::new(MARGIN, 200, CONTENT_WIDTH, 400);

/// Extract at most a title and a content block at fixed positions.
pub fn extract_generic(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(title) = props.text("title") {
        items.push(f.text_item("title", title, TextStyle::Title, TITLE_RECT));
    }
    if let Some(content) = props.text_or_lines("content") {
        items.push(f.text_item("content", content, TextStyle::Body, CONTENT_RECT));
    }

    Extraction::from_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_and_content() {
        let props = Props::from_value(json!({"title": "T", "content": "C", "bullets": ["x"]}));
        let out = extract_generic(&props, &ItemFactory::at(0));

        assert_eq!(out.ids(), vec!["title", "content"]);
        assert_eq!(out.items[0].position, Rect::new(60, 60, 1080, 100));
        assert_eq!(out.items[1].position, Rect::new(60, 200, 1080, 400));
    }

    #[test]
    fn test_content_lines_are_joined() {
        let props = Props::from_value(json!({"content": ["one", "two"]}));
        let out = extract_generic(&props, &ItemFactory::at(0));

        assert_eq!(out.items.len(), 1);
        assert_eq!(out.items[0].content.text(), Some("one\ntwo"));
    }

    #[test]
    fn test_number_title_and_object_content() {
        let props = Props::from_value(json!({"title": 7.0e0, "content": {"nested": true}}));
        let out = extract_generic(&props, &ItemFactory::at(0));

        // Numbers are still text; objects are not.
        assert_eq!(out.ids(), vec!["title"]);
    }
}
