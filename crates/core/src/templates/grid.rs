//! Card grids and figure rows.

use super::title_band;
use crate::items::{with_field, ItemFactory};
use crate::layout::{row_cell, Grid, CONTENT_WIDTH, MARGIN};
use crate::props::Props;
use crate::types::{ContainerKind, Extraction, PositionableItem, Rect, TextStyle};

pub(super) fn big_numbers(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let numbers: Vec<Props> = props
        .records("numbers", "value")
        .unwrap_or_default()
        .into_iter()
        .filter(|record| record.text("value").is_some())
        .collect();
    for (i, number) in numbers.iter().enumerate() {
        let rect = row_cell(i, numbers.len(), 30, y + 60, 240);
        items.push(f.big_number_item(format!("big-number-{}", i + 1), number, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn metrics_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let grid = Grid::across_content(y, 4, 160, 20, 20);
    let metrics = props.records("metrics", "value").unwrap_or_default();
    for (i, metric) in metrics.iter().enumerate() {
        items.push(f.container_item(
            format!("metric-{}", i + 1),
            ContainerKind::Metric,
            metric.as_map().clone(),
            grid.cell(i),
        ));
    }

    Extraction::from_items(items)
}

pub(super) fn four_box_grid(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let grid = Grid::across_content(y, 2, 200, 40, 30);
    let boxes = props.records("boxes", "heading").unwrap_or_default();
    items.extend(grid_boxes(f, "box", &boxes, 4, &grid));

    Extraction::from_items(items)
}

pub(super) fn six_ideas(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let grid = Grid::across_content(y, 3, 180, 30, 30);
    let ideas = props.records("ideas", "heading").unwrap_or_default();
    items.extend(grid_boxes(f, "idea", &ideas, 6, &grid));

    Extraction::from_items(items)
}

pub(super) fn key_takeaways(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let grid = Grid::across_content(y, 2, 140, 40, 20);
    let takeaways = props.records("takeaways", "text").unwrap_or_default();
    items.extend(grid_boxes(f, "takeaway", &takeaways, usize::MAX, &grid));

    Extraction::from_items(items)
}

/// Numbered grid boxes, capped at `limit`.
fn grid_boxes(
    f: &ItemFactory,
    prefix: &str,
    records: &[Props],
    limit: usize,
    grid: &Grid,
) -> Vec<PositionableItem> {
    if records.len() > limit {
        log::debug!(
            "{} grid has {} entries, keeping the first {}",
            prefix,
            records.len(),
            limit
        );
    }
    records
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, record)| {
            f.container_item(
                format!("{}-{}", prefix, i + 1),
                ContainerKind::GridBox,
                with_field(record, "number", i + 1),
                grid.cell(i),
            )
        })
        .collect()
}

pub(super) fn tags_slide(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let mut y = title_band(props, f, "title", &mut items);

    if let Some(description) = props.text("description") {
        let rect = Rect::new(MARGIN, y, CONTENT_WIDTH, 50);
        items.push(f.text_item("description", description, TextStyle::Body, rect));
        y += 70;
    }

    let grid = Grid::across_content(y, 3, 60, 20, 20);
    let tags = props.string_list("tags").unwrap_or_default();
    for (i, tag) in tags.into_iter().enumerate() {
        items.push(f.text_item(format!("tag-{}", i + 1), tag, TextStyle::Tag, grid.cell(i)));
    }

    Extraction::from_items(items)
}

pub(super) fn team_members(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let members = props.records("members", "name").unwrap_or_default();
    let grid = Grid::across_content(y, members.len().min(4), 260, 30, 30);
    for (i, member) in members.iter().enumerate() {
        items.push(f.container_item(
            format!("member-{}", i + 1),
            ContainerKind::TeamMember,
            member.as_map().clone(),
            grid.cell(i),
        ));
    }

    Extraction::from_items(items)
}
