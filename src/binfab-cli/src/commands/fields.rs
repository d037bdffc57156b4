//! Damage-field extraction command handler

use anyhow::{Context, Result};
use std::path::Path;

use crate::file_io;

pub fn handle(input: Option<&Path>, json: bool) -> Result<()> {
    let data = file_io::read_input(input)?;
    let (values, _) = binfab::decode(&data).context("Failed to decode prefab object array")?;
    let fields = binfab::damage_fields(&values);

    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    if fields.is_empty() {
        println!("(none of the mapped indices are present)");
    } else {
        for field in &fields {
            println!("{} = {}", field.name, field.value);
        }
    }

    Ok(())
}
