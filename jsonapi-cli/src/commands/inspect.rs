use anyhow::{Context, Result};
use colored::*;
use jsonapi_core::{
    decoder::decode_document,
    types::{DataShape, Document},
    LinkValue,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use super::read_input;

/// Shape and member counts of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub shape: String,
    pub primary: usize,
    pub included: usize,
    pub errors: usize,
    pub has_meta: bool,
    pub version: Option<String>,
    /// Primary and included resource counts per type
    pub types: BTreeMap<String, usize>,
    pub self_link: Option<String>,
}

fn link_href(value: &LinkValue) -> String {
    match value {
        LinkValue::Href(href) => href.clone(),
        LinkValue::Object(object) => object.href.clone(),
        LinkValue::Other(other) => other.to_string(),
    }
}

pub fn summarize(document: &Document) -> DocumentSummary {
    let shape = match document.shape() {
        DataShape::None => "none",
        DataShape::One => "one",
        DataShape::Many => "many",
    };

    let mut types = BTreeMap::new();
    for resource in document.primary_resources().iter().chain(&document.included) {
        *types.entry(resource.resource_type.clone()).or_insert(0) += 1;
    }

    DocumentSummary {
        shape: shape.to_string(),
        primary: document.primary_resources().len(),
        included: document.included.len(),
        errors: document.errors.len(),
        has_meta: document.meta.is_some(),
        version: document.jsonapi.as_ref().map(|j| j.version.clone()),
        types,
        self_link: document
            .links
            .as_ref()
            .and_then(|l| l.self_link.as_ref())
            .map(link_href),
    }
}

pub fn execute(input: &str, json: bool) -> Result<()> {
    info!("Inspecting document: {}", input);

    let data = read_input(input)?;
    let document = decode_document(&data)
        .with_context(|| format!("Failed to decode document: {}", input))?;

    let summary = summarize(&document);

    if json {
        let rendered = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize document summary")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("\n=== Document ===");
    println!("Primary data:       {}", summary.shape.cyan());
    println!("Primary resources:  {}", summary.primary);
    println!("Included resources: {}", summary.included);
    if summary.errors > 0 {
        println!("Errors:             {}", summary.errors.to_string().red());
    } else {
        println!("Errors:             {}", summary.errors);
    }
    println!("Meta:               {}", if summary.has_meta { "yes" } else { "no" });
    if let Some(version) = &summary.version {
        println!("JSON:API version:   {}", version);
    }
    if let Some(self_link) = &summary.self_link {
        println!("Self link:          {}", self_link);
    }

    if !summary.types.is_empty() {
        println!("\n=== Resource Types ===");
        for (resource_type, count) in &summary.types {
            println!("{:<20}{}", resource_type, count);
        }
    }

    Ok(())
}
