use crate::parser::error::ParseError;
use crate::parser::models::QuantityFile;
use crate::quantity::markup::Quantity;
use std::fs;
use std::path::Path;

/// Parse a TOML quantity file into markup, one quantity per `[[quantity]]`
/// table, preserving file order.
pub fn load_quantities_from_str(content: &str) -> Result<Vec<Quantity>, ParseError> {
    let file: QuantityFile =
        toml::from_str(content).map_err(|e| ParseError::InvalidFile(e.to_string()))?;
    file.quantities
        .iter()
        .map(|entry| entry.to_quantity())
        .collect()
}

pub fn load_quantities_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Quantity>, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()).into());
    }
    let content = fs::read_to_string(path)?;
    Ok(load_quantities_from_str(&content)?)
}
