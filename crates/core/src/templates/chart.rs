//! Chart templates. Segments become containers so the editor can move
//! legend entries and bars independently.

use super::title_band;
use crate::items::{with_field, ItemFactory};
use crate::layout::{row_cell, CONTENT_WIDTH, MARGIN};
use crate::props::Props;
use crate::types::{ContainerKind, Extraction, Rect, ShapeContent, ShapeKind};

/// Bottom edge shared by every bar.
const BAR_BASELINE: i32 = 580;
const MAX_BAR_HEIGHT: i32 = 380;
const MIN_BAR_HEIGHT: i32 = 4;

/// Records of `chartData` that carry a label or a value.
fn chart_segments(props: &Props) -> Vec<Props> {
    props
        .records("chartData", "label")
        .unwrap_or_default()
        .into_iter()
        .filter(|segment| segment.text("label").is_some() || segment.number("value").is_some())
        .collect()
}

/// Positive part of a segment's value.
fn segment_value(segment: &Props) -> f64 {
    segment.number("value").unwrap_or(0.0).max(0.0)
}

pub(super) fn pie_chart(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    let y = title_band(props, f, "title", &mut items);

    let segments = chart_segments(props);
    if !segments.is_empty() {
        let chart = ShapeContent::new(ShapeKind::Circle);
        items.push(f.shape_item("chart", chart, Rect::new(MARGIN, y, 440, 440)));
    }

    let total: f64 = segments.iter().map(segment_value).sum();
    for (i, segment) in segments.iter().enumerate() {
        let fields = if total > 0.0 {
            let percentage = (segment_value(segment) * 100.0 / total).floor() as i64;
            with_field(segment, "percentage", percentage)
        } else {
            segment.as_map().clone()
        };
        let rect = Rect::new(560, y + 20 + i as i32 * 60, 580, 50);
        items.push(f.container_item(
            format!("legend-{}", i + 1),
            ContainerKind::ChartSegment,
            fields,
            rect,
        ));
    }

    Extraction::from_items(items)
}

pub(super) fn bar_chart(props: &Props, f: &ItemFactory) -> Extraction {
    let mut items = Vec::new();
    title_band(props, f, "title", &mut items);

    let bars = chart_segments(props);
    let max = bars.iter().map(segment_value).fold(0.0, f64::max);
    for (i, bar) in bars.iter().enumerate() {
        let scaled = if max > 0.0 {
            (segment_value(bar) / max * MAX_BAR_HEIGHT as f64).floor() as i32
        } else {
            0
        };
        let height = scaled.max(MIN_BAR_HEIGHT);
        let rect = row_cell(i, bars.len(), 30, BAR_BASELINE - height, height);
        items.push(f.container_item(
            format!("bar-{}", i + 1),
            ContainerKind::ChartSegment,
            bar.as_map().clone(),
            rect,
        ));
    }
    if !bars.is_empty() {
        let axis = ShapeContent::new(ShapeKind::Line);
        let rect = Rect::new(MARGIN, BAR_BASELINE, CONTENT_WIDTH, 2);
        items.push(f.shape_item("axis", axis, rect));
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
    fn test_pie_chart_legend_percentages() {
        let out = run(
            pie_chart,
            json!({
                "title": "Share",
                "chartData": [
                    {"label": "A", "value": 1, "color": "#f00"},
                    {"label": "B", "value": 2},
                    {"color": "#0f0"}
                ]
            }),
        );

        assert_eq!(out.ids(), vec!["title", "chart", "legend-1", "legend-2"]);
        let first = out.item("legend-1").unwrap().content.as_container().unwrap();
        assert_eq!(first.fields.get("percentage"), Some(&json!(33)));
        assert_eq!(first.field_text("color"), Some("#f00"));
        assert_eq!(out.item("legend-2").unwrap().position, Rect::new(560, 220, 580, 50));
    }

    #[test]
    fn test_pie_chart_zero_total_has_no_percentages() {
        let out = run(pie_chart, json!({"chartData": [{"label": "A", "value": 0}]}));

        let legend = out.item("legend-1").unwrap().content.as_container().unwrap();
        assert!(legend.fields.get("percentage").is_none());
    }

    #[test]
    fn test_bar_heights_scale_to_max() {
        let out = run(
            bar_chart,
            json!({"chartData": [
                {"label": "Q1", "value": 50},
                {"label": "Q2", "value": 100},
                {"label": "Q3", "value": 0}
            ]}),
        );

        assert_eq!(out.ids(), vec!["bar-1", "bar-2", "bar-3", "axis"]);
        assert_eq!(out.items[0].position, Rect::new(60, 390, 340, 190));
        assert_eq!(out.items[1].position, Rect::new(430, 200, 340, 380));
        assert_eq!(out.items[2].position.height, 4);
        assert_eq!(out.items[2].position.bottom(), 580);
    }
}
