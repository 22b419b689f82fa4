//! WASM-compatible wrapper for slide layout extraction.
//!
//! This crate exposes template-to-positioning conversion to JavaScript
//! for use in the browser editor and Cloudflare Workers. Slides cross the
//! boundary as plain JS objects in the editor's camelCase shape.

use serde::Serialize;
use serde_json::Value;
use slide_layout_core::{revert_to_template, LayoutExtractor, Slide, TemplateKind};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert a template slide to hybrid positioning.
///
/// # Arguments
/// * `slide` - A slide object with at least a `templateId`
///
/// # Returns
/// A copy of the slide carrying `items` and `canvasConfig`, or throws if
/// the input is not a slide.
#[wasm_bindgen]
pub fn convert_slide(slide: JsValue) -> Result<JsValue, JsValue> {
    let slide = from_js(slide)?;
    let result = convert_slide_impl(slide, now()).map_err(|e| JsValue::from_str(&e))?;
    to_js(&result)
}

/// Extract positionable items without touching the slide.
///
/// # Returns
/// An object `{ items, canvasConfig }`.
#[wasm_bindgen]
pub fn extract_items(slide: JsValue) -> Result<JsValue, JsValue> {
    let slide = from_js(slide)?;
    let result = extract_items_impl(slide, now()).map_err(|e| JsValue::from_str(&e))?;
    to_js(&result)
}

/// Switch a converted slide back to its template layout.
#[wasm_bindgen]
pub fn revert_slide(slide: JsValue) -> Result<JsValue, JsValue> {
    let slide = from_js(slide)?;
    let result = revert_slide_impl(slide).map_err(|e| JsValue::from_str(&e))?;
    to_js(&result)
}

/// Identifiers of every template with a dedicated extractor.
#[wasm_bindgen]
pub fn list_templates() -> Result<JsValue, JsValue> {
    to_js(&list_templates_impl())
}

/// Milliseconds since the Unix epoch, from the JS clock.
fn now() -> u64 {
    js_sys::Date::now() as u64
}

fn from_js(value: JsValue) -> Result<Value, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid slide object: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects instead of Maps, so the editor can spread them.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_slide(value: Value) -> Result<Slide, String> {
    Slide::from_value(value).map_err(|e| e.to_string())
}

fn convert_slide_impl(value: Value, timestamp: u64) -> Result<Slide, String> {
    let slide = parse_slide(value)?;
    log::debug!("Converting slide with template '{}'", slide.template_id);
    Ok(LayoutExtractor::new()
        .with_timestamp(timestamp)
        .convert(&slide))
}

fn extract_items_impl(value: Value, timestamp: u64) -> Result<Value, String> {
    let slide = parse_slide(value)?;
    let extraction = LayoutExtractor::new()
        .with_timestamp(timestamp)
        .extract(&slide);
    serde_json::to_value(&extraction).map_err(|e| e.to_string())
}

fn revert_slide_impl(value: Value) -> Result<Slide, String> {
    let slide = parse_slide(value)?;
    Ok(revert_to_template(&slide))
}

fn list_templates_impl() -> Vec<&'static str> {
    TemplateKind::ALL.iter().map(|kind| kind.as_str()).collect()
}
