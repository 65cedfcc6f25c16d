use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recipe ingredient as handed over by the ingestion layer.
///
/// `amount` is meaningful when present and finite; otherwise `original` (the
/// as-authored text such as "to taste") is used for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CanonicalIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl CanonicalIngredient {
    pub fn numeric(name: &str, amount: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: Some(amount),
            unit: if unit.trim().is_empty() { None } else { Some(unit.to_string()) },
            ..Default::default()
        }
    }

    pub fn descriptive(name: &str, original: &str) -> Self {
        Self {
            name: name.to_string(),
            original: Some(original.to_string()),
            ..Default::default()
        }
    }

    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Per-serving nutrition. Calories in kcal, everything else in grams.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NutritionPerServing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CanonicalRecipe {
    pub id: String,
    pub title: String,
    pub servings: f64,
    pub ingredients: Vec<CanonicalIngredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionPerServing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
}

impl CanonicalRecipe {
    /// Prep plus cook time; a missing component counts as zero.
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes
            .unwrap_or(0)
            .saturating_add(self.cook_time_minutes.unwrap_or(0))
    }
}

/// A pantry entry from the inventory store snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeAvailability {
    pub availability_percentage: f64,
    pub missing_ingredients: Vec<CanonicalIngredient>,
    pub expiring_ingredients: Vec<InventoryItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeWithAvailability {
    pub recipe: CanonicalRecipe,
    pub availability: RecipeAvailability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_time_treats_missing_as_zero() {
        let recipe = CanonicalRecipe {
            id: "r1".to_string(),
            title: "Toast".to_string(),
            servings: 1.0,
            ingredients: vec![],
            nutrition: None,
            prep_time_minutes: Some(5),
            cook_time_minutes: None,
        };
        assert_eq!(recipe.total_time_minutes(), 5);
    }

    #[test]
    fn test_total_time_saturates_instead_of_overflowing() {
        let recipe = CanonicalRecipe {
            id: "r2".to_string(),
            title: "Sourdough starter".to_string(),
            servings: 1.0,
            ingredients: vec![],
            nutrition: None,
            prep_time_minutes: Some(u32::MAX),
            cook_time_minutes: Some(1),
        };
        assert_eq!(recipe.total_time_minutes(), u32::MAX);
    }

    #[test]
    fn test_ingredient_deserializes_without_optional_fields() {
        let ingredient: CanonicalIngredient =
            serde_json::from_str(r#"{"name":"pepper","original":"to taste"}"#).unwrap();
        assert_eq!(ingredient.amount, None);
        assert!(!ingredient.optional);
        assert_eq!(ingredient.original.as_deref(), Some("to taste"));
    }

    #[test]
    fn test_nutrition_skips_absent_fields_when_serialized() {
        let nutrition = NutritionPerServing {
            calories: Some(250.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&nutrition).unwrap();
        assert_eq!(json, r#"{"calories":250.0}"#);
    }

    #[test]
    fn test_inventory_item_parses_expiry_date() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":"1","name":"Milk","quantity":1.0,"unit":"l","category":"dairy","expiry_date":"2026-10-18"}"#,
        )
        .unwrap();
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2026, 10, 18));
    }
}
