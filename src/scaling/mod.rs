pub mod amount_classifier;
pub mod fraction_formatter;
pub mod ingredient_scaler;
pub mod nutrition_scaler;

pub use amount_classifier::{classify_amount, classify_unit, AmountKind, UnitKind};
pub use fraction_formatter::{format_amount, KitchenFraction, FRACTION_TOLERANCE, KITCHEN_FRACTIONS};
pub use ingredient_scaler::{format_ingredient_display, scale_ingredient, scale_ingredients, ScaledIngredient};
pub use nutrition_scaler::scale_nutrition;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ServingBounds;
use crate::error::ScaleError;
use crate::recipe_model::{CanonicalRecipe, NutritionPerServing};
use crate::servings::validator::validate_serving_size;

/// Ratio `target_servings / original_servings`; always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    pub fn new(value: f64) -> Result<Self, ScaleError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ScaleError::InvalidFactor(value))
        }
    }

    pub fn from_servings(original: f64, target: f64) -> Result<Self, ScaleError> {
        if !(original.is_finite() && original > 0.0) {
            return Err(ScaleError::InvalidRecipeServings(original));
        }
        Self::new(target / original)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Exact comparison; a factor of 0.9999999 still counts as scaled.
    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScaledRecipe {
    pub recipe_id: String,
    pub title: String,
    pub original_servings: f64,
    pub target_servings: f64,
    pub factor: f64,
    pub ingredients: Vec<ScaledIngredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionPerServing>,
}

impl ScaledRecipe {
    pub fn display_lines(&self) -> Vec<String> {
        self.ingredients.iter().map(format_ingredient_display).collect()
    }
}

/// Validates `target_servings` against `bounds`, then scales ingredients and nutrition.
pub fn scale_recipe(
    recipe: &CanonicalRecipe,
    target_servings: f64,
    bounds: &ServingBounds,
) -> Result<ScaledRecipe, ScaleError> {
    let validation = validate_serving_size(target_servings, bounds.min, bounds.max);
    if let Some(error) = validation.error {
        return Err(ScaleError::InvalidServings(error));
    }

    let factor = ScaleFactor::from_servings(recipe.servings, target_servings)?;
    debug!(
        recipe_id = %recipe.id,
        from = recipe.servings,
        to = target_servings,
        factor = factor.value(),
        "scaling recipe"
    );

    Ok(ScaledRecipe {
        recipe_id: recipe.id.clone(),
        title: recipe.title.clone(),
        original_servings: recipe.servings,
        target_servings,
        factor: factor.value(),
        ingredients: scale_ingredients(&recipe.ingredients, factor),
        nutrition: scale_nutrition(recipe.nutrition.as_ref(), factor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::CanonicalIngredient;

    fn pancakes() -> CanonicalRecipe {
        CanonicalRecipe {
            id: "pancakes".to_string(),
            title: "Pancakes".to_string(),
            servings: 4.0,
            ingredients: vec![
                CanonicalIngredient::numeric("flour", 2.0, "cups"),
                CanonicalIngredient::numeric("eggs", 2.0, ""),
                CanonicalIngredient::descriptive("salt", "a pinch"),
            ],
            nutrition: Some(NutritionPerServing {
                calories: Some(220.0),
                protein: Some(6.0),
                ..Default::default()
            }),
            prep_time_minutes: Some(10),
            cook_time_minutes: Some(15),
        }
    }

    #[test]
    fn test_scale_factor_rejects_non_positive() {
        assert_eq!(ScaleFactor::new(0.0), Err(ScaleError::InvalidFactor(0.0)));
        assert_eq!(ScaleFactor::new(-2.0), Err(ScaleError::InvalidFactor(-2.0)));
        assert!(ScaleFactor::new(f64::NAN).is_err());
        assert!(ScaleFactor::new(f64::INFINITY).is_err());
        assert!(ScaleFactor::new(0.01).is_ok());
    }

    #[test]
    fn test_scale_factor_from_servings() {
        assert_eq!(ScaleFactor::from_servings(4.0, 6.0).unwrap().value(), 1.5);
        assert_eq!(
            ScaleFactor::from_servings(0.0, 6.0),
            Err(ScaleError::InvalidRecipeServings(0.0))
        );
        assert!(ScaleFactor::from_servings(4.0, 4.0).unwrap().is_identity());
    }

    #[test]
    fn test_scale_recipe_to_six_servings() {
        let scaled = scale_recipe(&pancakes(), 6.0, &ServingBounds::default()).unwrap();
        assert_eq!(scaled.factor, 1.5);
        assert_eq!(
            scaled.display_lines(),
            vec!["3 cups flour", "3 eggs", "a pinch salt"]
        );
        let nutrition = scaled.nutrition.unwrap();
        assert_eq!(nutrition.calories, Some(330.0));
        assert_eq!(nutrition.protein, Some(9.0));
        assert_eq!(nutrition.carbs, None);
    }

    #[test]
    fn test_scale_recipe_rejects_out_of_bounds_target() {
        let result = scale_recipe(&pancakes(), 100.0, &ServingBounds::default());
        assert_eq!(
            result,
            Err(ScaleError::InvalidServings("Maximum serving size is 50".to_string()))
        );
    }

    #[test]
    fn test_scale_recipe_rejects_bad_recipe_servings() {
        let mut recipe = pancakes();
        recipe.servings = f64::NAN;
        assert!(matches!(
            scale_recipe(&recipe, 2.0, &ServingBounds::default()),
            Err(ScaleError::InvalidRecipeServings(_))
        ));
    }
}
