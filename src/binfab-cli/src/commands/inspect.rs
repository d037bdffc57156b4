//! Inspect command handler

use anyhow::{Context, Result};
use std::path::Path;

use crate::file_io;

pub fn handle(input: Option<&Path>) -> Result<()> {
    let data = file_io::read_input(input)?;

    println!("Bytes: {} total", data.len());
    for (i, chunk) in data.chunks(16).enumerate() {
        println!("  {:06x}  {}", i * 16, hex::encode(chunk));
    }

    let (values, consumed) =
        binfab::decode(&data).context("Failed to decode prefab object array")?;

    println!();
    println!(
        "Elements: {} ({} of {} bytes consumed)",
        values.len(),
        consumed,
        data.len()
    );
    for (i, value) in values.iter().enumerate() {
        println!("  [{:2}] {:7} {}", i, value.type_name(), value);
    }

    Ok(())
}
