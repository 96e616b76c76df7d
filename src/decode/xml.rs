// SPDX-License-Identifier: MIT

//! XML-to-mapping decoder.
//!
//! Converts an XML document into a nested `serde_json::Value` keyed by tag
//! name, with namespace prefixes stripped:
//!
//! - A leaf element with no attributes and no children collapses to its
//!   trimmed text (or `null` when there is none).
//! - An element with attributes and/or children becomes an object keyed by
//!   child tag names; attributes are merged into the same object; a non-empty
//!   text node is stored under the reserved `"text"` key.
//! - Repeated child tags collapse into an array in document order.

use crate::error::AppError;
use serde_json::{Map, Value};

/// Decode an XML document string into `{ root_tag: value }`.
///
/// Malformed XML fails with a decode error; the raw payload is logged so the
/// offending response can be inspected. Never retried.
pub fn decode(xml: &str) -> Result<Value, AppError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| {
        tracing::error!(raw = %xml, error = %e, "Failed to parse XML response");
        AppError::Decode(format!("malformed XML: {}", e))
    })?;

    let root = doc.root_element();
    let mut map = Map::new();
    map.insert(root.tag_name().name().to_string(), element_value(root));
    Ok(Value::Object(map))
}

/// Convert one element into its value form.
fn element_value(element: roxmltree::Node) -> Value {
    let children: Vec<roxmltree::Node> =
        element.children().filter(|n| n.is_element()).collect();
    let has_attrs = element.attributes().next().is_some();
    // First non-empty text node directly inside the element; it may come
    // before or after child elements.
    let text = element
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .map(str::trim)
        .find(|t| !t.is_empty());

    if children.is_empty() && !has_attrs {
        // Leaf: collapse to text, or stay structurally empty.
        return match text {
            Some(t) => Value::String(t.to_string()),
            None => Value::Null,
        };
    }

    let mut map = Map::new();

    for child in &children {
        // tag_name().name() is the local name, so `ns:Foo` lands under `Foo`.
        let key = child.tag_name().name().to_string();
        let value = element_value(*child);
        match map.get_mut(&key) {
            None => {
                map.insert(key, value);
            }
            Some(existing) => {
                // Repeated sibling tag: promote to an array, keep order.
                if let Value::Array(items) = existing {
                    items.push(value);
                } else {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            }
        }
    }

    for attr in element.attributes() {
        map.insert(attr.name().to_string(), Value::String(attr.value().to_string()));
    }

    if let Some(t) = text {
        map.insert("text".to_string(), Value::String(t.to_string()));
    }

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_collapses_to_text() {
        let value = decode("<name> Whitman College </name>").unwrap();
        assert_eq!(value["name"], Value::String("Whitman College".to_string()));
    }

    #[test]
    fn empty_leaf_is_null() {
        let value = decode("<name/>").unwrap();
        assert_eq!(value["name"], Value::Null);
    }

    #[test]
    fn attributes_merge_into_object() {
        let value = decode(r#"<geoloc lat="40.34" long="-74.65"/>"#).unwrap();
        assert_eq!(value["geoloc"]["lat"], "40.34");
        assert_eq!(value["geoloc"]["long"], "-74.65");
    }

    #[test]
    fn text_key_reserved_when_element_has_attributes() {
        let value = decode(r#"<amenity name="Kosher">open late</amenity>"#).unwrap();
        assert_eq!(value["amenity"]["name"], "Kosher");
        assert_eq!(value["amenity"]["text"], "open late");
    }

    #[test]
    fn malformed_xml_is_a_decode_error() {
        let err = decode("<locations><location></locations>").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
