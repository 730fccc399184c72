use anyhow::{Context, Result};
use jsonapi_core::{
    decoder::decode_document,
    encoder::{encode_document, encode_document_pretty},
    types::JsonApiObject,
};
use tracing::info;

use super::{read_input, write_output};
use crate::OutputFormat;

pub fn execute(
    input: &str,
    output: &str,
    alias: bool,
    format: OutputFormat,
    stamp_version: bool,
) -> Result<()> {
    info!("Normalizing document from {} to {}", input, output);

    let data = read_input(input)?;
    let mut document = decode_document(&data)
        .with_context(|| format!("Failed to decode document: {}", input))?;

    document
        .check()
        .with_context(|| format!("Invalid meta or links in {}", input))?;

    if alias {
        document
            .verify_full_linkage(true)
            .with_context(|| format!("Cannot alias relationships in {}", input))?;
        info!("Aliased included resources into relationships");
    }

    if stamp_version && document.jsonapi.is_none() {
        document.jsonapi = Some(JsonApiObject::current());
    }

    let encoded = match format {
        OutputFormat::Compact => encode_document(&document),
        OutputFormat::Pretty => encode_document_pretty(&document),
    }
    .with_context(|| format!("Failed to encode document from {}", input))?;

    write_output(output, &encoded)?;

    info!(
        "Successfully normalized document ({} bytes)",
        encoded.len()
    );

    Ok(())
}
