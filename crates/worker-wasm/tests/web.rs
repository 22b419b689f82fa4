//! Tests for the JavaScript-facing exports. Run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use serde::Serialize;
use serde_json::{json, Value};
use slide_layout_wasm::{convert_slide, extract_items, list_templates};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn to_js(value: &Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn from_js(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_convert_slide_through_js() {
    let slide = json!({
        "id": 3,
        "templateId": "bullet-points",
        "props": {"title": "T", "bullets": ["a", "b"]}
    });

    let converted = from_js(convert_slide(to_js(&slide)).unwrap());

    assert_eq!(converted["positioningMode"], "hybrid");
    assert_eq!(converted["id"].as_f64(), Some(3.0));
    assert_eq!(converted["items"][1]["type"], "bullet-list");
    assert!(converted["items"][0]["metadata"]["lastModified"].as_f64().unwrap() > 0.0);
}

#[wasm_bindgen_test]
fn test_extract_items_through_js() {
    let slide = json!({"templateId": "unknown-xyz", "props": null});

    let result = from_js(extract_items(to_js(&slide)).unwrap());

    assert_eq!(result["items"], json!([]));
    assert_eq!(result["canvasConfig"]["height"].as_f64(), Some(675.0));
}

#[wasm_bindgen_test]
fn test_invalid_slide_throws() {
    assert!(convert_slide(JsValue::from_str("title-slide")).is_err());
}

#[wasm_bindgen_test]
fn test_list_templates_through_js() {
    let ids = from_js(list_templates().unwrap());
    assert_eq!(ids.as_array().map(Vec::len), Some(40));
}
