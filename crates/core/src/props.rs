//! Tolerant access to a template's property bag.
//!
//! Every field of a template's props may be absent or hold an unexpected
//! JSON type. Accessors return `None` for both cases, so each one doubles
//! as the presence test for the item it feeds. A wrong type is logged as
//! a [`PropError`] and otherwise treated as missing.

use crate::error::PropError;
use crate::types::ImageContent;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A template's property bag (or one record nested inside it).
///
/// Decodes from any JSON value; anything but an object yields empty props.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
    /// Create an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build props from any JSON value. Non-objects yield empty props.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            Value::Null => Self::default(),
            other => {
                log::warn!("props should be an object, found {}", type_name(&other));
                Self::default()
            }
        }
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Raw access to a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, returning the props for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// True when no field carries a usable value.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(is_blank_value)
    }

    /// Read a non-empty text field. Numbers are rendered as text.
    pub fn text(&self, key: &str) -> Option<String> {
        self.read(key, try_text)
    }

    /// Read a text field, also accepting an array of strings joined by newlines.
    pub fn text_or_lines(&self, key: &str) -> Option<String> {
        self.read(key, |key, value| match value {
            Value::Array(_) => Ok(try_string_list(key, value)?.map(|lines| lines.join("\n"))),
            _ => try_text(key, value),
        })
    }

    /// Read a list of strings, dropping empty and non-text entries.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        self.read(key, try_string_list)
    }

    /// Read a list of records.
    ///
    /// Object entries become records; bare strings become a record with
    /// the string stored under `text_key`. Blank records and entries of
    /// any other type are skipped.
    pub fn records(&self, key: &str, text_key: &str) -> Option<Vec<Props>> {
        self.read(key, |key, value| {
            let Value::Array(entries) = value else {
                return Err(wrong_type(key, "an array", value));
            };
            let records: Vec<Props> = entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::Object(map) => Some(Props(map.clone())),
                    Value::String(s) if !s.is_empty() => {
                        Some(Props::new().with(text_key, s.clone()))
                    }
                    Value::Null => None,
                    other => {
                        log::debug!(
                            "skipping {} entry in `{}`",
                            type_name(other),
                            key
                        );
                        None
                    }
                })
                .filter(|record| !record.is_blank())
                .collect();
            Ok((!records.is_empty()).then_some(records))
        })
    }

    /// Read a nested record.
    pub fn record(&self, key: &str) -> Option<Props> {
        self.read(key, |key, value| match value {
            Value::Object(map) => {
                let record = Props(map.clone());
                Ok((!record.is_blank()).then_some(record))
            }
            _ => Err(wrong_type(key, "an object", value)),
        })
    }

    /// Read a number, accepting numeric strings.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.read(key, |key, value| match value {
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(n) => Ok(Some(n)),
                Err(_) if s.trim().is_empty() => Ok(None),
                Err(_) => Err(wrong_type(key, "a number", value)),
            },
            _ => Err(wrong_type(key, "a number", value)),
        })
    }

    /// Read an image reference from a path field and a prompt field.
    ///
    /// Present when either field is non-empty; `src` stays empty when the
    /// image has only a generation prompt.
    pub fn image(&self, path_key: &str, prompt_key: &str, alt: &str) -> Option<ImageContent> {
        let src = self.text(path_key);
        let prompt = self.text(prompt_key);
        if src.is_none() && prompt.is_none() {
            return None;
        }
        Some(ImageContent {
            src: src.unwrap_or_default(),
            alt: alt.to_string(),
            prompt,
        })
    }

    fn read<T>(
        &self,
        key: &str,
        parse: impl FnOnce(&str, &Value) -> Result<Option<T>, PropError>,
    ) -> Option<T> {
        let value = self.0.get(key)?;
        if value.is_null() {
            return None;
        }
        match parse(key, value) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("ignoring malformed prop: {}", e);
                None
            }
        }
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn try_text(key: &str, value: &Value) -> Result<Option<String>, PropError> {
    match value {
        Value::String(s) => Ok((!s.is_empty()).then(|| s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(wrong_type(key, "text", value)),
    }
}

fn try_string_list(key: &str, value: &Value) -> Result<Option<Vec<String>>, PropError> {
    let Value::Array(entries) = value else {
        return Err(wrong_type(key, "an array", value));
    };
    let list: Vec<String> = entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect();
    Ok((!list.is_empty()).then_some(list))
}

fn is_blank_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.values().all(is_blank_value),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn wrong_type(key: &str, expected: &'static str, found: &Value) -> PropError {
    PropError::WrongType {
        key: key.to_string(),
        expected,
        found: type_name(found),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        Props::from_value(value)
    }

    #[test]
    fn test_text_present_and_missing() {
        let p = props(json!({"title": "Hello", "empty": "", "nothing": null}));

        assert_eq!(p.text("title"), Some("Hello".to_string()));
        assert_eq!(p.text("empty"), None);
        assert_eq!(p.text("nothing"), None);
        assert_eq!(p.text("absent"), None);
    }

    #[test]
    fn test_text_renders_numbers() {
        let p = props(json!({"value": 85, "ratio": 2.5}));

        assert_eq!(p.text("value"), Some("85".to_string()));
        assert_eq!(p.text("ratio"), Some("2.5".to_string()));
    }

    #[test]
    fn test_text_wrong_type_is_missing() {
        let p = props(json!({"title": ["not", "text"], "flag": true}));

        assert_eq!(p.text("title"), None);
        assert_eq!(p.text("flag"), None);
    }

    #[test]
    fn test_string_list_filters_entries() {
        let p = props(json!({"bullets": ["a", "", 3, null, {"x": 1}, "b"]}));

        assert_eq!(
            p.string_list("bullets"),
            Some(vec!["a".to_string(), "3".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_string_list_not_an_array() {
        let p = props(json!({"bullets": "a, b", "none": []}));

        assert_eq!(p.string_list("bullets"), None);
        assert_eq!(p.string_list("none"), None);
    }

    #[test]
    fn test_text_or_lines_joins_arrays() {
        let p = props(json!({"content": ["one", "two"], "plain": "body"}));

        assert_eq!(p.text_or_lines("content"), Some("one\ntwo".to_string()));
        assert_eq!(p.text_or_lines("plain"), Some("body".to_string()));
    }

    #[test]
    fn test_records_mixes_objects_and_strings() {
        let p = props(json!({
            "steps": [
                {"heading": "First"},
                "Second",
                {},
                {"heading": ""},
                42,
                null
            ]
        }));

        let steps = p.records("steps", "heading").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].text("heading"), Some("First".to_string()));
        assert_eq!(steps[1].text("heading"), Some("Second".to_string()));
    }

    #[test]
    fn test_records_wrong_type_is_missing() {
        let p = props(json!({"steps": {"heading": "not a list"}}));

        assert!(p.records("steps", "heading").is_none());
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let p = props(json!({"a": 12, "b": "7.5", "c": "seven", "d": ""}));

        assert_eq!(p.number("a"), Some(12.0));
        assert_eq!(p.number("b"), Some(7.5));
        assert_eq!(p.number("c"), None);
        assert_eq!(p.number("d"), None);
    }

    #[test]
    fn test_record_reads_nested_object() {
        let p = props(json!({"avatar": {"name": "Ada"}, "blank": {"name": ""}}));

        assert_eq!(
            p.record("avatar").and_then(|a| a.text("name")),
            Some("Ada".to_string())
        );
        assert!(p.record("blank").is_none());
    }

    #[test]
    fn test_image_from_path_or_prompt() {
        let p = props(json!({"imagePrompt": "a lighthouse"}));
        let image = p.image("imagePath", "imagePrompt", "Slide image").unwrap();

        assert_eq!(image.src, "");
        assert_eq!(image.prompt.as_deref(), Some("a lighthouse"));
        assert_eq!(image.alt, "Slide image");

        assert!(props(json!({})).image("imagePath", "imagePrompt", "x").is_none());
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Props::from_value(json!([1, 2])).as_map().is_empty());
        assert!(Props::from_value(Value::Null).as_map().is_empty());
    }

    #[test]
    fn test_deserialize_tolerates_non_objects() {
        let null: Props = serde_json::from_value(Value::Null).unwrap();
        let text: Props = serde_json::from_value(json!("title")).unwrap();
        let object: Props = serde_json::from_value(json!({"title": "T"})).unwrap();

        assert!(null.as_map().is_empty());
        assert!(text.as_map().is_empty());
        assert_eq!(object.text("title"), Some("T".to_string()));
    }
}
