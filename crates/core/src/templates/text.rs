//! Text-led templates: titles, lists, quotes and single-image layouts.

use super::{primary_image, title_band};
use crate::items::ItemFactory;
use crate::layout::{bullet_list_height, Grid, CONTENT_WIDTH, MARGIN};
use crate::props::Props;
use crate::types::{
    BulletMarker, ContainerKind, Extraction, Rect, ShapeContent, ShapeKind, TextStyle,
    CANVAS_HEIGHT, CANVAS_WIDTH,
};

pub(super) fn title_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(title) = props.text("title") {
        let rect = Rect::new(MARGIN, 200, CONTENT_WIDTH, 120);
        items.push(f.text_item("title", title, TextStyle::Title, rect));
    }
    if let Some(subtitle) = props.text("subtitle") {
        let rect = Rect::new(MARGIN, 340, CONTENT_WIDTH, 60);
        items.push(f.text_item("subtitle", subtitle, TextStyle::Subtitle, rect));
    }
    if let Some(author) = props.text("author") {
        let rect = Rect::new(MARGIN, 420, CONTENT_WIDTH, 40);
        items.push(f.text_item("author", author, TextStyle::Caption, rect));
    }
    if let Some(image) = primary_image(props) {
        let rect = Rect::new(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT);
        items.push(f.image_item("background-image", image, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn bullet_points(props: &Props, f: &ItemFactory) -> Extraction {
    titled_list(props, f, "bullets", "bullet-list", BulletMarker::Disc)
}

pub(super) fn learning_objectives(props: &Props, f: &ItemFactory) -> Extraction {
    titled_list(props, f, "objectives", "objectives-list", BulletMarker::Number)
}

pub(super) fn agenda_slide(props: &Props, f: &ItemFactory) -> Extraction {
    titled_list(props, f, "agendaItems", "agenda-list", BulletMarker::Number)
}

/// Title, optional image on the right, and one list that narrows to
/// make room for the image.
fn titled_list(
    props: &Props,
    f: &ItemFactory,
    list_key: &str,
    list_id: &str,
    marker: BulletMarker,
) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let mut list_width = CONTENT_WIDTH;
    if let Some(image) = primary_image(props) {
        items.push(f.image_item("image", image, Rect::new(740, y, 400, 400)));
        list_width = 640;
    }
    if let Some(bullets) = props.string_list(list_key) {
        let rect = Rect::new(MARGIN, y, list_width, bullet_list_height(bullets.len()));
        items.push(f.bullet_list_item(list_id, bullets, marker, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn summary_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let mut y = title_band(props, f, "title", &mut items);

    if let Some(summary) = props.text("summary") {
        let rect = Rect::new(MARGIN, y, CONTENT_WIDTH, 120);
        items.push(f.text_item("summary", summary, TextStyle::Body, rect));
        y += 140;
    }
    if let Some(points) = props.string_list("keyPoints") {
        let rect = Rect::new(MARGIN, y, CONTENT_WIDTH, bullet_list_height(points.len()));
        items.push(f.bullet_list_item("key-points", points, BulletMarker::Check, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn quote_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(quote) = props.text("quote") {
        let rect = Rect::new(160, 180, 880, 200);
        items.push(f.text_item("quote", quote, TextStyle::Quote, rect));
    }
    if let Some(author) = props.text("author") {
        let rect = Rect::new(160, 400, 880, 40);
        items.push(f.text_item("author", author, TextStyle::Subtitle, rect));
    }
    if let Some(role) = props.text("authorTitle") {
        let rect = Rect::new(160, 440, 880, 30);
        items.push(f.text_item("author-title", role, TextStyle::Caption, rect));
    }
    let alt = props.text("author").unwrap_or_else(|| "Author".to_string());
    if let Some(image) = props.image("authorImage", "authorImagePrompt", &alt) {
        items.push(f.image_item("author-image", image, Rect::new(MARGIN, 180, 80, 80)));
    }

    Extraction::from_items(items)
}

pub(super) fn section_divider(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(number) = props.text("sectionNumber") {
        let rect = Rect::new(MARGIN, 200, CONTENT_WIDTH, 80);
        items.push(f.text_item("section-number", number, TextStyle::Label, rect));
    }
    if let Some(title) = props.text("title") {
        let rect = Rect::new(MARGIN, 290, CONTENT_WIDTH, 100);
        items.push(f.text_item("title", title, TextStyle::Title, rect));
    }
    if let Some(subtitle) = props.text("subtitle") {
        let rect = Rect::new(MARGIN, 400, CONTENT_WIDTH, 50);
        items.push(f.text_item("subtitle", subtitle, TextStyle::Subtitle, rect));
    }
    if let Some(color) = props.text("accentColor") {
        let bar = ShapeContent::new(ShapeKind::Rectangle).with_fill(color);
        items.push(f.shape_item("accent-bar", bar, Rect::new(MARGIN, 180, 120, 8)));
    }

    Extraction::from_items(items)
}

pub(super) fn definition_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(term) = props.text("term") {
        let rect = Rect::new(MARGIN, 160, CONTENT_WIDTH, 100);
        items.push(f.text_item("term", term, TextStyle::Title, rect));
    }
    if let Some(definition) = props.text("definition") {
        let rect = Rect::new(MARGIN, 280, CONTENT_WIDTH, 160);
        items.push(f.text_item("definition", definition, TextStyle::Body, rect));
    }
    if let Some(example) = props.text("example") {
        let rect = Rect::new(MARGIN, 460, CONTENT_WIDTH, 80);
        items.push(f.text_item("example", example, TextStyle::Caption, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn statistic_highlight(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(value) = props.text("value") {
        let rect = Rect::new(MARGIN, 160, CONTENT_WIDTH, 200);
        items.push(f.text_item("statistic", value, TextStyle::Display, rect));
    }
    if let Some(label) = props.text("label") {
        let rect = Rect::new(MARGIN, 380, CONTENT_WIDTH, 60);
        items.push(f.text_item("label", label, TextStyle::Subtitle, rect));
    }
    if let Some(description) = props.text("description") {
        let rect = Rect::new(MARGIN, 460, CONTENT_WIDTH, 80);
        items.push(f.text_item("description", description, TextStyle::Body, rect));
    }
    if let Some(source) = props.text("source") {
        let rect = Rect::new(MARGIN, 600, CONTENT_WIDTH, 30);
        items.push(f.text_item("source", source, TextStyle::Caption, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn thank_you_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(title) = props.text("title") {
        let rect = Rect::new(MARGIN, 100, CONTENT_WIDTH, 100);
        items.push(f.text_item("title", title, TextStyle::Title, rect));
    }
    if let Some(subtitle) = props.text("subtitle") {
        let rect = Rect::new(MARGIN, 220, CONTENT_WIDTH, 60);
        items.push(f.text_item("subtitle", subtitle, TextStyle::Subtitle, rect));
    }
    if let Some(logo) = primary_image(props) {
        items.push(f.image_item("logo", logo, Rect::new(500, 300, 200, 100)));
    }
    // Runs past the bottom edge of the canvas.
    if let Some(contact) = props.text_or_lines("contactInfo") {
        let rect = Rect::new(MARGIN, 420, CONTENT_WIDTH, 300);
        items.push(f.text_item("contact-info", contact, TextStyle::Body, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn closing_cta(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(title) = props.text("title") {
        let rect = Rect::new(MARGIN, 140, CONTENT_WIDTH, 100);
        items.push(f.text_item("title", title, TextStyle::Title, rect));
    }
    if let Some(description) = props.text("description") {
        let rect = Rect::new(MARGIN, 260, CONTENT_WIDTH, 80);
        items.push(f.text_item("description", description, TextStyle::Body, rect));
    }
    if let Some(cta) = props.text("ctaText") {
        let button = ShapeContent::new(ShapeKind::RoundedRectangle).with_label(cta);
        items.push(f.shape_item("cta-button", button, Rect::new(450, 380, 300, 70)));
    }
    if let Some(contact) = props.text_or_lines("contactInfo") {
        let rect = Rect::new(MARGIN, 490, CONTENT_WIDTH, 60);
        items.push(f.text_item("contact-info", contact, TextStyle::Caption, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn faq_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let mut y = title_band(props, f, "title", &mut items);

    let questions = props.records("questions", "question").unwrap_or_default();
    let answered = questions
        .iter()
        .filter_map(|record| Some((record.text("question")?, record.text("answer"))));
    for (i, (question, answer)) in answered.enumerate() {
        let n = i + 1;
        let rect = Rect::new(MARGIN, y, CONTENT_WIDTH, 40);
        items.push(f.text_item(format!("question-{}", n), question, TextStyle::Heading, rect));
        if let Some(answer) = answer {
            let rect = Rect::new(MARGIN, y + 45, CONTENT_WIDTH, 60);
            items.push(f.text_item(format!("answer-{}", n), answer, TextStyle::Body, rect));
        }
        y += 120;
    }

    Extraction::from_items(items)
}

pub(super) fn checklist(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let entries = props.records("items", "text").unwrap_or_default();
    for (i, entry) in entries.iter().enumerate() {
        let rect = Rect::new(MARGIN, y + i as i32 * 70, CONTENT_WIDTH, 60);
        items.push(f.container_item(
            format!("check-item-{}", i + 1),
            ContainerKind::ChecklistItem,
            entry.as_map().clone(),
            rect,
        ));
    }

    Extraction::from_items(items)
}

pub(super) fn text_with_image(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let image_left = props.text("imagePosition").as_deref() == Some("left");
    let (text_x, image_x) = if image_left { (600, MARGIN) } else { (MARGIN, 640) };

    if let Some(title) = props.text("title") {
        let rect = Rect::new(text_x, 140, 540, 80);
        items.push(f.text_item("title", title, TextStyle::Title, rect));
    }
    if let Some(content) = props.text_or_lines("content") {
        let rect = Rect::new(text_x, 240, 540, 300);
        items.push(f.text_item("content", content, TextStyle::Body, rect));
    }
    if let Some(image) = primary_image(props) {
        items.push(f.image_item("image", image, Rect::new(image_x, 140, 500, 400)));
    }

    Extraction::from_items(items)
}

pub(super) fn image_focus(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let mut y = title_band(props, f, "title", &mut items);

    if let Some(image) = primary_image(props) {
        items.push(f.image_item("image", image, Rect::new(MARGIN, y, CONTENT_WIDTH, 440)));
        y += 460;
    }
    if let Some(caption) = props.text("caption") {
        let rect = Rect::new(MARGIN, y, CONTENT_WIDTH, 50);
        items.push(f.text_item("caption", caption, TextStyle::Caption, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn image_gallery(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let grid = Grid::across_content(y, 3, 200, 30, 20);
    let records = props.records("images", "imagePath").unwrap_or_default();
    let images = records.iter().filter_map(|record| {
        let image = record.image("imagePath", "imagePrompt", "")?;
        Some((image, record.text("caption").or_else(|| record.text("alt"))))
    });
    for (i, (mut image, alt)) in images.enumerate() {
        let n = i + 1;
        image.alt = alt.unwrap_or_else(|| format!("Gallery image {}", n));
        items.push(f.image_item(format!("gallery-image-{}", n), image, grid.cell(i)));
    }

    Extraction::from_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemType;
    use serde_json::json;

    fn run(extract: fn(&Props, &ItemFactory) -> Extraction, value: serde_json::Value) -> Extraction {
        extract(&Props::from_value(value), &ItemFactory::at(0))
    }

    #[test]
    fn test_bullet_points_title_and_list_only() {
        let out = run(bullet_points, json!({"title": "T", "bullets": ["a", "b"]}));

        assert_eq!(out.items.len(), 2);
        let title = out.item("title").unwrap();
        assert_eq!(title.item_type, ItemType::Text);
        assert_eq!(title.content.text(), Some("T"));

        let list = out.item("bullet-list").unwrap();
        assert_eq!(list.content.bullets().unwrap().len(), 2);
        assert_eq!(list.position, Rect::new(60, 140, 1080, 100));
        assert!(out.items.iter().all(|item| item.item_type != ItemType::Image));
    }

    #[test]
    fn test_bullet_points_image_narrows_list() {
        let out = run(
            bullet_points,
            json!({"title": "T", "bullets": ["a"], "imagePrompt": "a robot"}),
        );

        assert_eq!(out.ids(), vec!["title", "image", "bullet-list"]);
        assert_eq!(out.item("image").unwrap().position, Rect::new(740, 140, 400, 400));
        assert_eq!(out.item("bullet-list").unwrap().position.width, 640);
    }

    #[test]
    fn test_list_without_title_starts_at_top() {
        let out = run(learning_objectives, json!({"objectives": ["a", "b", "c"]}));

        assert_eq!(out.ids(), vec!["objectives-list"]);
        assert_eq!(out.items[0].position, Rect::new(60, 40, 1080, 150));
    }

    #[test]
    fn test_summary_advances_cursor() {
        let out = run(
            summary_slide,
            json!({"title": "T", "summary": "S", "keyPoints": ["a"]}),
        );

        assert_eq!(out.item("summary").unwrap().position.y, 140);
        assert_eq!(out.item("key-points").unwrap().position.y, 280);
    }

    #[test]
    fn test_thank_you_contact_info_overflows() {
        let out = run(thank_you_slide, json!({"title": "Thanks", "contactInfo": ["a", "b"]}));

        let contact = out.item("contact-info").unwrap();
        assert_eq!(contact.content.text(), Some("a\nb"));
        assert_eq!(contact.position, Rect::new(60, 420, 1080, 300));
        assert_eq!(out.overflowing_items().len(), 1);
    }

    #[test]
    fn test_faq_skips_records_without_question() {
        let out = run(
            faq_slide,
            json!({
                "questions": [
                    {"question": "Why?", "answer": "Because"},
                    {"answer": "orphan"},
                    "How?"
                ]
            }),
        );

        assert_eq!(out.ids(), vec!["question-1", "answer-1", "question-2"]);
        assert_eq!(out.item("answer-1").unwrap().position.y, 85);
        assert_eq!(out.item("question-2").unwrap().position.y, 160);
    }

    #[test]
    fn test_text_with_image_mirrors() {
        let props = json!({"title": "T", "content": "C", "imagePath": "/a.png"});
        let right = run(text_with_image, props.clone());
        assert_eq!(right.item("title").unwrap().position.x, 60);
        assert_eq!(right.item("image").unwrap().position.x, 640);

        let mut left_props = props;
        left_props["imagePosition"] = json!("left");
        let left = run(text_with_image, left_props);
        assert_eq!(left.item("title").unwrap().position.x, 600);
        assert_eq!(left.item("image").unwrap().position.x, 60);
    }

    #[test]
    fn test_gallery_wraps_three_per_row() {
        let out = run(
            image_gallery,
            json!({"images": ["/1.png", "/2.png", {"caption": "no source"}, "/3.png", "/4.png"]}),
        );

        assert_eq!(out.items.len(), 4);
        assert_eq!(out.items[3].id, "gallery-image-4");
        assert_eq!(out.items[3].position, Rect::new(60, 260, 340, 200));
    }

    #[test]
    fn test_gallery_alt_text_follows_kept_images() {
        let out = run(
            image_gallery,
            json!({"images": ["/1.png", {"caption": "no source"}, "/2.png", {"imagePath": "/3.png", "alt": "Three"}]}),
        );

        assert_eq!(out.ids(), vec!["gallery-image-1", "gallery-image-2", "gallery-image-3"]);
        let alts: Vec<&str> = out
            .items
            .iter()
            .map(|item| item.content.as_image().unwrap().alt.as_str())
            .collect();
        assert_eq!(alts, vec!["Gallery image 1", "Gallery image 2", "Three"]);
    }

    #[test]
    fn test_section_divider_accent_bar_fill() {
        let out = run(section_divider, json!({"title": "Part 2", "accentColor": "#123456"}));

        let bar = out.item("accent-bar").unwrap();
        assert_eq!(bar.content.as_shape().unwrap().fill.as_deref(), Some("#123456"));
        assert_eq!(out.ids(), vec!["title", "accent-bar"]);
    }
}
