//! Ordered-sequence templates: steps, timelines, pyramids and cycles.

use super::title_band;
use crate::items::{with_field, ItemFactory};
use crate::layout::{row_cell, CONTENT_WIDTH, MARGIN};
use crate::props::Props;
use crate::types::{ContainerKind, Extraction, Rect, ShapeContent, ShapeKind, TextStyle};

/// Top-left corners of the pyramid's text slots, apex first.
const PYRAMID_SLOTS: [(i32, i32); 3] = [(600, 220), (600, 340), (600, 460)];

/// Top-left corners of the cycle stages: top, right, bottom, left.
const CYCLE_SLOTS: [(i32, i32); 4] = [(480, 150), (760, 320), (480, 490), (200, 320)];

pub(super) fn process_steps(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let mut y = title_band(props, f, "title", &mut items);

    if let Some(description) = props.text("description") {
        let rect = Rect::new(MARGIN, y, CONTENT_WIDTH, 50);
        items.push(f.text_item("description", description, TextStyle::Body, rect));
        y += 70;
    }

    let steps = props.records("steps", "heading").unwrap_or_default();
    for (i, step) in steps.iter().enumerate() {
        let rect = row_cell(i, steps.len(), 20, y, 300);
        items.push(f.step_item(format!("step-{}", i + 1), i + 1, step, rect));
    }

    Extraction::from_items(items)
}

/// Entries alternate above and below a horizontal axis.
pub(super) fn timeline(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    title_band(props, f, "title", &mut items);

    let events = props.records("events", "title").unwrap_or_default();
    for (i, event) in events.iter().enumerate() {
        let above = i % 2 == 0;
        let y = if above { 200 } else { 380 };
        let rect = row_cell(i, events.len(), 20, y, 140);
        items.push(f.timeline_item(format!("timeline-item-{}", i + 1), event, above, rect));
    }
    if !events.is_empty() {
        let line = ShapeContent::new(ShapeKind::Line);
        items.push(f.shape_item("timeline-line", line, Rect::new(MARGIN, 360, CONTENT_WIDTH, 4)));
    }

    Extraction::from_items(items)
}

pub(super) fn pyramid(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    title_band(props, f, "title", &mut items);

    let levels = props.records("steps", "heading").unwrap_or_default();
    if levels.len() > PYRAMID_SLOTS.len() {
        log::debug!(
            "pyramid has {} levels, keeping the first {}",
            levels.len(),
            PYRAMID_SLOTS.len()
        );
    }
    if !levels.is_empty() {
        let shape = ShapeContent::new(ShapeKind::Triangle);
        items.push(f.shape_item("pyramid-shape", shape, Rect::new(100, 180, 440, 400)));
    }
    for (i, (level, (x, y))) in levels.iter().zip(PYRAMID_SLOTS).enumerate() {
        let rect = Rect::new(x, y, 540, 100);
        items.push(f.pyramid_item(format!("pyramid-item-{}", i + 1), i + 1, level, rect));
    }

    Extraction::from_items(items)
}

pub(super) fn cycle_diagram(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    title_band(props, f, "title", &mut items);

    if let Some(label) = props.text("centerLabel") {
        let center = ShapeContent::new(ShapeKind::Circle).with_label(label);
        items.push(f.shape_item("cycle-center", center, Rect::new(500, 260, 200, 200)));
    }

    let stages = props.records("stages", "label").unwrap_or_default();
    if stages.len() > CYCLE_SLOTS.len() {
        log::debug!(
            "cycle has {} stages, keeping the first {}",
            stages.len(),
            CYCLE_SLOTS.len()
        );
    }
    for (i, (stage, (x, y))) in stages.iter().zip(CYCLE_SLOTS).enumerate() {
        items.push(f.container_item(
            format!("cycle-stage-{}", i + 1),
            ContainerKind::CycleStage,
            with_field(stage, "number", i + 1),
            Rect::new(x, y, 240, 80),
        ));
    }

    Extraction::from_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn run(extract: fn(&Props, &ItemFactory) -> Extraction, value: Value) -> Extraction {
        extract(&Props::from_value(value), &ItemFactory::at(0))
    }

    #[test]
    fn test_process_steps_even_split_without_title() {
        let out = run(
            process_steps,
            json!({"steps": [
                {"heading": "s1"},
                {"heading": "s2"},
                {"heading": "s3"},
                {"heading": "s4"}
            ]}),
        );

        assert_eq!(out.ids(), vec!["step-1", "step-2", "step-3", "step-4"]);
        for (i, item) in out.items.iter().enumerate() {
            assert_eq!(item.position.width, 255);
            assert_eq!(item.position.x, 60 + i as i32 * (255 + 20));
        }
        assert!(out.item("title").is_none());
    }

    #[test]
    fn test_process_steps_description_pushes_steps_down() {
        let out = run(
            process_steps,
            json!({"title": "T", "description": "D", "steps": ["only"]}),
        );

        let step = out.item("step-1").unwrap();
        assert_eq!(step.position, Rect::new(60, 210, 1080, 300));
        assert_eq!(
            step.content.as_container().unwrap().field_text("heading"),
            Some("only")
        );
    }

    #[test]
    fn test_timeline_alternates() {
        let out = run(timeline, json!({"events": ["a", "b", "c"]}));

        assert_eq!(
            out.ids(),
            vec!["timeline-item-1", "timeline-item-2", "timeline-item-3", "timeline-line"]
        );
        assert_eq!(out.items[0].position.y, 200);
        assert_eq!(out.items[1].position.y, 380);
        assert_eq!(out.items[2].position.y, 200);
        assert_eq!(out.items[1].position.x, 60 + 346 + 20);
    }

    #[test]
    fn test_pyramid_single_level() {
        let out = run(
            pyramid,
            json!({"title": "T", "steps": [{"heading": "a", "description": "x"}]}),
        );

        assert_eq!(out.ids(), vec!["title", "pyramid-shape", "pyramid-item-1"]);
        let level = out.item("pyramid-item-1").unwrap();
        assert_eq!((level.position.x, level.position.y), (600, 220));
        assert_eq!(
            level.content.as_container().unwrap().fields.get("level"),
            Some(&json!(1))
        );
    }

    #[test]
    fn test_pyramid_drops_extra_levels() {
        let out = run(pyramid, json!({"steps": ["a", "b", "c", "d"]}));

        assert_eq!(out.items.len(), 4);
        assert_eq!(out.item("pyramid-item-3").unwrap().position.y, 460);
        assert!(out.item("pyramid-item-4").is_none());
    }

    #[test]
    fn test_cycle_stage_slots() {
        let out = run(cycle_diagram, json!({"stages": ["plan", "do", "check", "act", "extra"]}));

        assert_eq!(out.items.len(), 4);
        assert_eq!(out.items[1].position, Rect::new(760, 320, 240, 80));
        assert_eq!(out.items[3].position, Rect::new(200, 320, 240, 80));
    }
}
