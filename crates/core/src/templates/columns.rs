//! Side-by-side templates. Each column keeps its own vertical cursor
//! because left and right content heights differ.

use super::title_band;
use crate::items::ItemFactory;
use crate::layout::{bullet_list_height, row_cell, CONTENT_WIDTH, MARGIN};
use crate::props::Props;
use crate::types::{
    BulletMarker, ContainerKind, Extraction, PositionableItem, Rect, ShapeContent, ShapeKind,
    TextStyle,
};
use serde_json::{Map, Value};

const COLUMN_WIDTH: i32 = 520;
const COLUMN_GAP: i32 = 40;
const RIGHT_COLUMN_X: i32 = MARGIN + COLUMN_WIDTH + COLUMN_GAP;

pub(super) fn two_column(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "main-title", &mut items);

    for (side, x) in [("left", MARGIN), ("right", RIGHT_COLUMN_X)] {
        let mut cy = y;
        let heading = props.text(&format!("{}Title", side));

        if let Some(title) = &heading {
            let rect = Rect::new(x, cy, COLUMN_WIDTH, 50);
            items.push(f.text_item(format!("{}-title", side), title, TextStyle::Heading, rect));
            cy += 60;
        }
        if let Some(content) = props.text_or_lines(&format!("{}Content", side)) {
            let rect = Rect::new(x, cy, COLUMN_WIDTH, 200);
            items.push(f.text_item(format!("{}-content", side), content, TextStyle::Body, rect));
            cy += 220;
        }
        if let Some(bullets) = props.string_list(&format!("{}Bullets", side)) {
            let height = bullet_list_height(bullets.len());
            let rect = Rect::new(x, cy, COLUMN_WIDTH, height);
            items.push(f.bullet_list_item(
                format!("{}-bullets", side),
                bullets,
                BulletMarker::Disc,
                rect,
            ));
            cy += height + 20;
        }
        let alt = heading.unwrap_or_else(|| format!("{} column image", side));
        let image = props.image(
            &format!("{}ImagePath", side),
            &format!("{}ImagePrompt", side),
            &alt,
        );
        if let Some(image) = image {
            let rect = Rect::new(x, cy, COLUMN_WIDTH, 200);
            items.push(f.image_item(format!("{}-image", side), image, rect));
        }
    }

    Extraction::from_items(items)
}

pub(super) fn comparison_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    for (side, x) in [("left", MARGIN), ("right", 640)] {
        let mut cy = y;
        if let Some(heading) = props.text(&format!("{}Heading", side)) {
            let rect = Rect::new(x, cy, 500, 60);
            items.push(f.text_item(format!("{}-heading", side), heading, TextStyle::Heading, rect));
            cy += 70;
        }
        if let Some(entries) = props.string_list(&format!("{}Items", side)) {
            let rect = Rect::new(x, cy, 500, bullet_list_height(entries.len()));
            items.push(f.bullet_list_item(
                format!("{}-items", side),
                entries,
                BulletMarker::Disc,
                rect,
            ));
        }
    }
    if let Some(label) = props.text("vsLabel") {
        let rect = Rect::new(570, y + 150, 60, 40);
        items.push(f.text_item("vs-label", label, TextStyle::Label, rect));
    }

    Extraction::from_items(items)
}

/// One column of a heading-plus-list layout.
struct ListColumn<'a> {
    heading_key: &'a str,
    list_key: &'a str,
    id: &'a str,
    marker: BulletMarker,
}

pub(super) fn challenges_solutions(props: &Props, f: &ItemFactory) -> Extraction {
    list_columns(
        props,
        f,
        ListColumn {
            heading_key: "challengesTitle",
            list_key: "challenges",
            id: "challenges",
            marker: BulletMarker::Disc,
        },
        ListColumn {
            heading_key: "solutionsTitle",
            list_key: "solutions",
            id: "solutions",
            marker: BulletMarker::Check,
        },
    )
}

pub(super) fn contraindications_indications(props: &Props, f: &ItemFactory) -> Extraction {
    list_columns(
        props,
        f,
        ListColumn {
            heading_key: "contraindicationsTitle",
            list_key: "contraindications",
            id: "contraindications",
            marker: BulletMarker::Disc,
        },
        ListColumn {
            heading_key: "indicationsTitle",
            list_key: "indications",
            id: "indications",
            marker: BulletMarker::Check,
        },
    )
}

pub(super) fn pros_cons(props: &Props, f: &ItemFactory) -> Extraction {
    list_columns(
        props,
        f,
        ListColumn {
            heading_key: "prosTitle",
            list_key: "pros",
            id: "pros",
            marker: BulletMarker::Check,
        },
        ListColumn {
            heading_key: "consTitle",
            list_key: "cons",
            id: "cons",
            marker: BulletMarker::Disc,
        },
    )
}

fn list_columns(
    props: &Props,
    f: &ItemFactory,
    left: ListColumn<'_>,
    right: ListColumn<'_>,
) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    for (column, x) in [(left, MARGIN), (right, RIGHT_COLUMN_X)] {
        let mut cy = y;
        if let Some(heading) = props.text(column.heading_key) {
            let rect = Rect::new(x, cy, COLUMN_WIDTH, 50);
            items.push(f.text_item(
                format!("{}-title", column.id),
                heading,
                TextStyle::Heading,
                rect,
            ));
            cy += 60;
        }
        if let Some(entries) = props.string_list(column.list_key) {
            let rect = Rect::new(x, cy, COLUMN_WIDTH, bullet_list_height(entries.len()));
            items.push(f.bullet_list_item(
                format!("{}-list", column.id),
                entries,
                column.marker,
                rect,
            ));
        }
    }

    Extraction::from_items(items)
}

pub(super) fn problem_solution(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let problem = props.text("problem");
    let solution = props.text("solution");

    if let Some(text) = &problem {
        let heading = props.text("problemTitle");
        let rect = Rect::new(MARGIN, y, 480, 320);
        items.push(callout(f, "problem", heading, text, rect));
    }
    if let Some(text) = &solution {
        let heading = props.text("solutionTitle");
        let rect = Rect::new(660, y, 480, 320);
        items.push(callout(f, "solution", heading, text, rect));
    }
    if problem.is_some() && solution.is_some() {
        let arrow = ShapeContent::new(ShapeKind::Arrow);
        items.push(f.shape_item("arrow", arrow, Rect::new(570, y + 130, 60, 60)));
    }

    Extraction::from_items(items)
}

pub(super) fn case_study(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let mut y = title_band(props, f, "title", &mut items);

    if let Some(client) = props.text("clientName") {
        let rect = Rect::new(MARGIN, y, CONTENT_WIDTH, 40);
        items.push(f.text_item("client", client, TextStyle::Caption, rect));
        y += 60;
    }
    // Sections keep their slot even when a neighbour is missing.
    for (slot, role) in ["challenge", "approach", "result"].into_iter().enumerate() {
        if let Some(text) = props.text(role) {
            let heading = props.text(&format!("{}Title", role));
            let rect = row_cell(slot, 3, 30, y, 360);
            items.push(callout(f, role, heading, &text, rect));
        }
    }

    Extraction::from_items(items)
}

fn callout(
    f: &ItemFactory,
    role: &str,
    heading: Option<String>,
    text: &str,
    rect: Rect,
) -> PositionableItem {
    let mut fields = Map::new();
    fields.insert("role".to_string(), Value::from(role));
    if let Some(heading) = heading {
        fields.insert("heading".to_string(), Value::from(heading));
    }
    fields.insert("text".to_string(), Value::from(text));
    f.container_item(role, ContainerKind::Callout, fields, rect)
}
