//! Decode command handler

use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use crate::file_io;

pub fn handle(input: Option<&Path>, json: bool, max_depth: Option<usize>) -> Result<()> {
    let data = file_io::read_input(input)?;
    let options = super::decode_options(max_depth);
    let (values, consumed) = binfab::decode_with(&data, &options)
        .context("Failed to decode prefab object array")?;
    let fields = binfab::damage_fields(&values);

    if json {
        let doc = json!({
            "values": &values,
            "fields": &fields,
            "consumed": consumed,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Decoded object ({} elements, {} bytes):", values.len(), consumed);
    for (i, value) in values.iter().enumerate() {
        println!("  [{:2}] {}", i, value);
    }

    println!();
    println!("Damage data:");
    if fields.is_empty() {
        println!("  (none of the mapped indices are present)");
    } else {
        for field in &fields {
            println!("  {} = {}", field.name, field.value);
        }
    }

    Ok(())
}
