//! Templates built around a presenter avatar.

use super::{avatar_image, avatar_name, title_band};
use crate::items::ItemFactory;
use crate::layout::{bullet_list_height, MARGIN};
use crate::props::Props;
use crate::types::{BulletMarker, Extraction, Rect, TextStyle};

pub(super) fn avatar_intro(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(title) = props.text("title") {
        let rect = Rect::new(MARGIN, 180, 600, 100);
        items.push(f.text_item("title", title, TextStyle::Title, rect));
    }
    if let Some(subtitle) = props.text("subtitle") {
        let rect = Rect::new(MARGIN, 300, 600, 60);
        items.push(f.text_item("subtitle", subtitle, TextStyle::Subtitle, rect));
    }
    if let Some(description) = props.text("description") {
        let rect = Rect::new(MARGIN, 380, 600, 160);
        items.push(f.text_item("description", description, TextStyle::Body, rect));
    }
    if let Some(avatar) = avatar_image(props) {
        items.push(f.image_item("avatar", avatar, Rect::new(700, 60, 440, 560)));
    }
    if let Some(name) = avatar_name(props) {
        let rect = Rect::new(700, 630, 440, 30);
        items.push(f.text_item("avatar-name", name, TextStyle::Caption, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn avatar_steps(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(title) = props.text("title") {
        let rect = Rect::new(460, 40, 680, 80);
        items.push(f.text_item("title", title, TextStyle::Title, rect));
    }
    if let Some(avatar) = avatar_image(props) {
        items.push(f.image_item("avatar", avatar, Rect::new(MARGIN, 140, 360, 460)));
    }
    let steps = props.records("steps", "heading").unwrap_or_default();
    for (i, step) in steps.iter().enumerate() {
        let rect = Rect::new(460, 140 + i as i32 * 110, 680, 90);
        items.push(f.step_item(format!("step-{}", i + 1), i + 1, step, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn avatar_checklist(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    if let Some(entries) = props.string_list("checklist") {
        let rect = Rect::new(MARGIN, y, 740, bullet_list_height(entries.len()));
        items.push(f.bullet_list_item("checklist", entries, BulletMarker::Check, rect));
    }
    if let Some(avatar) = avatar_image(props) {
        items.push(f.image_item("avatar", avatar, Rect::new(840, 140, 300, 460)));
    }

    Extraction::from_items(items)
}

pub(super) fn avatar_quote(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();

    if let Some(quote) = props.text("quote") {
        let rect = Rect::new(460, 180, 680, 220);
        items.push(f.text_item("quote", quote, TextStyle::Quote, rect));
    }
    if let Some(author) = props.text("author") {
        let rect = Rect::new(460, 420, 680, 40);
        items.push(f.text_item("author", author, TextStyle::Subtitle, rect));
    }
    if let Some(avatar) = avatar_image(props) {
        items.push(f.image_item("avatar", avatar, Rect::new(MARGIN, 140, 360, 460)));
    }

    Extraction::from_items(items)
}
