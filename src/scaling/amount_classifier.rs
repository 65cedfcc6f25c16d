use serde::{Deserialize, Serialize};

use crate::recipe_model::CanonicalIngredient;

/// Measurement family of a unit keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    Volume,
    Weight,
    Count,
    Unitless,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AmountKind {
    Numeric {
        value: f64,
        unit: Option<String>,
        unit_kind: UnitKind,
    },
    Descriptive {
        text: String,
    },
}

const VOLUME_UNITS: &[&str] = &[
    "cup", "cups", "c", "tbsp", "tbs", "tablespoon", "tablespoons", "tsp", "teaspoon",
    "teaspoons", "ml", "milliliter", "milliliters", "millilitre", "millilitres", "l", "liter",
    "liters", "litre", "litres", "fl oz", "fluid ounce", "fluid ounces", "pint", "pints",
    "quart", "quarts", "gallon", "gallons",
];

const WEIGHT_UNITS: &[&str] = &[
    "g", "gram", "grams", "kg", "kilogram", "kilograms", "mg", "oz", "ounce", "ounces", "lb",
    "lbs", "pound", "pounds",
];

/// Unit words not found in either table above are also treated as counts.
const COUNT_UNITS: &[&str] = &[
    "whole", "clove", "cloves", "large", "medium", "small", "piece", "pieces", "slice",
    "slices", "can", "cans", "pinch", "dash", "bunch", "sprig", "sprigs", "stalk", "stalks",
];

/// Display text when an ingredient has neither an amount, original text, nor a name.
const UNSPECIFIED_AMOUNT_TEXT: &str = "as needed";

pub fn classify_unit(unit: Option<&str>) -> UnitKind {
    let key = match unit {
        Some(raw) => raw.trim().trim_end_matches('.').to_lowercase(),
        None => return UnitKind::Unitless,
    };
    if key.is_empty() {
        UnitKind::Unitless
    } else if VOLUME_UNITS.contains(&key.as_str()) {
        UnitKind::Volume
    } else if WEIGHT_UNITS.contains(&key.as_str()) {
        UnitKind::Weight
    } else {
        if !COUNT_UNITS.contains(&key.as_str()) {
            tracing::trace!(unit = %key, "unrecognised unit treated as count");
        }
        UnitKind::Count
    }
}

pub fn classify_amount(ingredient: &CanonicalIngredient) -> AmountKind {
    match ingredient.amount {
        Some(value) if value.is_finite() && value >= 0.0 => {
            let unit = ingredient
                .unit
                .as_ref()
                .map(|u| u.trim())
                .filter(|u| !u.is_empty())
                .map(str::to_string);
            let unit_kind = classify_unit(unit.as_deref());
            AmountKind::Numeric { value, unit, unit_kind }
        }
        _ => {
            let text = [ingredient.original.as_deref(), Some(ingredient.name.as_str())]
                .into_iter()
                .flatten()
                .map(str::trim)
                .find(|t| !t.is_empty())
                .unwrap_or(UNSPECIFIED_AMOUNT_TEXT)
                .to_string();
            AmountKind::Descriptive { text }
        }
    }
}
