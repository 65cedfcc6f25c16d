use serde::{Deserialize, Serialize};

use crate::recipe_model::CanonicalIngredient;
use crate::scaling::amount_classifier::{classify_amount, AmountKind};
use crate::scaling::fraction_formatter::format_amount;
use crate::scaling::ScaleFactor;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScaledIngredient {
    #[serde(flatten)]
    pub ingredient: CanonicalIngredient,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaled_amount: Option<f64>,
    pub display_amount: String,
    pub is_scaled: bool,
}

impl ScaledIngredient {
    pub fn is_descriptive(&self) -> bool {
        self.scaled_amount.is_none()
    }
}

pub fn scale_ingredient(ingredient: &CanonicalIngredient, factor: ScaleFactor) -> ScaledIngredient {
    let is_scaled = !factor.is_identity();
    let (scaled_amount, display_amount) = match classify_amount(ingredient) {
        AmountKind::Numeric { value, .. } => {
            let scaled = value * factor.value();
            (Some(scaled), format_amount(scaled))
        }
        AmountKind::Descriptive { text } => (None, text),
    };

    ScaledIngredient {
        ingredient: ingredient.clone(),
        scaled_amount,
        display_amount,
        is_scaled,
    }
}

pub fn scale_ingredients(ingredients: &[CanonicalIngredient], factor: ScaleFactor) -> Vec<ScaledIngredient> {
    ingredients
        .iter()
        .map(|ingredient| scale_ingredient(ingredient, factor))
        .collect()
}

/// One renderable line, e.g. `"1 ½ cups flour"` or `"to taste pepper (optional)"`.
pub fn format_ingredient_display(scaled: &ScaledIngredient) -> String {
    let name = scaled.ingredient.name.trim();
    let mut parts: Vec<&str> = Vec::with_capacity(3);

    if scaled.is_descriptive() {
        if !scaled.display_amount.eq_ignore_ascii_case(name) {
            parts.push(scaled.display_amount.as_str());
        }
    } else {
        parts.push(scaled.display_amount.as_str());
        if let Some(unit) = scaled.ingredient.unit.as_deref().map(str::trim) {
            if !unit.is_empty() {
                parts.push(unit);
            }
        }
    }
    if !name.is_empty() {
        parts.push(name);
    }

    let mut line = parts.join(" ");
    if scaled.ingredient.optional {
        line.push_str(" (optional)");
    }
    line
}
