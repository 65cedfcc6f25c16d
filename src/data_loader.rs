use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::path::Path;
use tracing::warn;

use crate::recipe_model::{CanonicalRecipe, InventoryItem};

// Expected inventory CSV headers
const ID_COL: &str = "id";
const NAME_COL: &str = "name";
const QUANTITY_COL: &str = "quantity";
const UNIT_COL: &str = "unit";
const CATEGORY_COL: &str = "category";
const EXPIRY_COL: &str = "expiry_date";

const EXPIRY_FORMAT: &str = "%Y-%m-%d";

fn parse_optional_date(s: &str) -> Result<Option<NaiveDate>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, EXPIRY_FORMAT)
        .map(Some)
        .with_context(|| format!("Invalid expiry date '{}', expected YYYY-MM-DD", trimmed))
}

/// Parses an inventory snapshot from CSV text. The expiry column is optional.
pub fn parse_inventory_csv(content: &str) -> Result<Vec<InventoryItem>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", name))
    };
    let id_idx = column(ID_COL)?;
    let name_idx = column(NAME_COL)?;
    let quantity_idx = column(QUANTITY_COL)?;
    let unit_idx = column(UNIT_COL)?;
    let category_idx = column(CATEGORY_COL)?;
    let expiry_idx = column(EXPIRY_COL).ok();

    let mut inventory = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read inventory record at row index {}", row_index))?;

        let name = record.get(name_idx).unwrap_or("").to_string();
        if name.is_empty() {
            warn!(row_index, "skipping inventory row with empty name");
            continue;
        }

        let raw_quantity = record.get(quantity_idx).unwrap_or("");
        let quantity = raw_quantity
            .parse::<f64>()
            .with_context(|| format!("Invalid quantity '{}' for '{}' at row {}", raw_quantity, name, row_index))?;

        let expiry_date = match expiry_idx.and_then(|idx| record.get(idx)) {
            Some(raw) => parse_optional_date(raw).with_context(|| format!("Row {} ('{}')", row_index, name))?,
            None => None,
        };

        inventory.push(InventoryItem {
            id: record.get(id_idx).unwrap_or("").to_string(),
            name,
            quantity,
            unit: record.get(unit_idx).unwrap_or("").to_string(),
            category: record.get(category_idx).unwrap_or("").to_string(),
            expiry_date,
        });
    }

    Ok(inventory)
}

pub fn load_inventory_csv(csv_path: &Path) -> Result<Vec<InventoryItem>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Inventory CSV file not found at: {:?}", csv_path));
    }
    let content = std::fs::read_to_string(csv_path)
        .with_context(|| format!("Failed to read inventory CSV file at {:?}", csv_path))?;
    parse_inventory_csv(&content).with_context(|| format!("Failed to parse inventory CSV at {:?}", csv_path))
}

/// Accepts either a single recipe object or an array of recipes.
pub fn parse_recipes_json(content: &str) -> Result<Vec<CanonicalRecipe>> {
    let value: serde_json::Value = serde_json::from_str(content).context("Recipe file is not valid JSON")?;
    if value.is_array() {
        serde_json::from_value(value).context("Failed to deserialize recipe list")
    } else {
        let recipe: CanonicalRecipe = serde_json::from_value(value).context("Failed to deserialize recipe")?;
        Ok(vec![recipe])
    }
}
