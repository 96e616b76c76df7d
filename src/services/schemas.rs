// SPDX-License-Identifier: MIT

//! Vendor schema fetching and XML pre-validation.
//!
//! The upstream publishes XSD/JSD documents for its own payloads under
//! `/{domain}/xsd` and `/{domain}/jsd`. Before decoding dining XML we gate it
//! against the dining XSD. There is no maintained pure-Rust XSD validator, so
//! validation is structural: every element and attribute in the instance
//! document must be declared somewhere in the schema, and the root must be a
//! top-level declaration. That catches the realistic failure mode (the
//! upstream reshaping or renaming its payload) without a full XSD engine.
//!
//! `validate_xml` returns a boolean; violation detail is logged, not
//! returned. A failed validation short-circuits decoding in the caller.

use crate::error::AppError;
use crate::services::{StudentApiClient, WireFormat};
use std::collections::HashSet;

const DINING_XSD: &str = "/dining/xsd";
const PLACES_JSD: &str = "/places/jsd";

/// Fetches vendor schemas and validates payloads against them.
#[derive(Clone)]
pub struct SchemaService {
    client: StudentApiClient,
}

impl SchemaService {
    pub fn new(client: StudentApiClient) -> Self {
        Self { client }
    }

    /// Fetch the XSD schema for dining payloads.
    pub async fn get_dining_xsd(&self) -> Result<String, AppError> {
        self.client.get(DINING_XSD, &[], WireFormat::Xml).await
    }

    /// Fetch the JSON schema for places payloads.
    pub async fn get_places_jsd(&self) -> Result<String, AppError> {
        self.client.get(PLACES_JSD, &[], WireFormat::Json).await
    }
}

/// Validate an XML payload against an XSD schema document.
///
/// Returns `true` on success, `false` on any validation error; error detail
/// is logged only. Callers must not decode a payload that failed validation.
pub fn validate_xml(xml: &str, xsd: &str) -> bool {
    match check(xml, xsd) {
        Ok(()) => {
            tracing::info!("XML validation successful");
            true
        }
        Err(detail) => {
            tracing::error!(error = %detail, "XML validation error");
            false
        }
    }
}

fn check(xml: &str, xsd: &str) -> Result<(), String> {
    let schema = roxmltree::Document::parse(xsd)
        .map_err(|e| format!("schema document is not well-formed: {}", e))?;
    let instance = roxmltree::Document::parse(xml)
        .map_err(|e| format!("instance document is not well-formed: {}", e))?;

    let declarations = SchemaDeclarations::collect(&schema);
    if declarations.elements.is_empty() {
        return Err("schema declares no elements".to_string());
    }

    let root = instance.root_element();
    let root_name = root.tag_name().name();
    if !declarations.top_level.contains(root_name) {
        return Err(format!("root element '{}' is not declared top-level", root_name));
    }

    for node in instance.root().descendants().filter(|n| n.is_element()) {
        let name = node.tag_name().name();
        if !declarations.elements.contains(name) {
            return Err(format!("element '{}' is not declared in the schema", name));
        }
        for attr in node.attributes() {
            if !declarations.attributes.contains(attr.name()) {
                return Err(format!(
                    "attribute '{}' on '{}' is not declared in the schema",
                    attr.name(),
                    name
                ));
            }
        }
    }

    Ok(())
}

/// Element/attribute names declared anywhere in an XSD document.
struct SchemaDeclarations {
    top_level: HashSet<String>,
    elements: HashSet<String>,
    attributes: HashSet<String>,
}

impl SchemaDeclarations {
    fn collect(schema: &roxmltree::Document) -> Self {
        let mut top_level = HashSet::new();
        let mut elements = HashSet::new();
        let mut attributes = HashSet::new();

        let root = schema.root_element();
        for node in schema.root().descendants().filter(|n| n.is_element()) {
            let local = node.tag_name().name();
            if local == "element" {
                // `name` declares, `ref` points at another declaration.
                if let Some(name) = node.attribute("name").or_else(|| node.attribute("ref")) {
                    elements.insert(local_part(name).to_string());
                    if node.parent_element() == Some(root) {
                        top_level.insert(local_part(name).to_string());
                    }
                }
            } else if local == "attribute" {
                if let Some(name) = node.attribute("name").or_else(|| node.attribute("ref")) {
                    attributes.insert(local_part(name).to_string());
                }
            }
        }

        Self {
            top_level,
            elements,
            attributes,
        }
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}
