use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

use crate::availability::matcher::{IngredientMatcher, InventoryIndex};
use crate::availability::name_normalizer::normalize_name;
use crate::config::AvailabilityConfig;
use crate::recipe_model::{
    CanonicalIngredient, CanonicalRecipe, InventoryItem, RecipeAvailability, RecipeWithAvailability,
};

pub fn calculate_recipe_availability<M>(
    recipe: &CanonicalRecipe,
    matcher: &M,
    today: NaiveDate,
) -> RecipeAvailability
where
    M: IngredientMatcher + ?Sized,
{
    let mut required = 0usize;
    let mut missing_ingredients: Vec<CanonicalIngredient> = Vec::new();
    let mut expiring_ingredients: Vec<InventoryItem> = Vec::new();
    let mut seen_expiring: HashSet<String> = HashSet::new();

    for ingredient in recipe.ingredients.iter().filter(|i| !i.optional) {
        required += 1;
        let matched = matcher.match_ingredient(ingredient, today);

        if !matched.satisfied {
            missing_ingredients.push(ingredient.clone());
            continue;
        }
        if matched.is_expiring {
            if let Some(item) = matched.covering_item {
                if seen_expiring.insert(item.id.clone()) {
                    expiring_ingredients.push(item);
                }
            }
        }
    }

    let availability_percentage = if required == 0 {
        100.0
    } else {
        100.0 * (required - missing_ingredients.len()) as f64 / required as f64
    };

    debug!(
        recipe_id = %recipe.id,
        required,
        missing = missing_ingredients.len(),
        expiring = expiring_ingredients.len(),
        availability_percentage,
        "computed recipe availability"
    );

    RecipeAvailability {
        availability_percentage,
        missing_ingredients,
        expiring_ingredients,
    }
}

/// Availability for every recipe against one shared inventory index.
/// Output order matches `recipes`.
pub fn calculate_multiple_recipe_availability(
    recipes: &[CanonicalRecipe],
    inventory: &[InventoryItem],
    today: NaiveDate,
    config: &AvailabilityConfig,
) -> Vec<RecipeWithAvailability> {
    let index = InventoryIndex::new(inventory, *config);
    debug!(
        recipes = recipes.len(),
        indexed_items = index.len(),
        "calculating availability for recipe batch"
    );

    recipes
        .par_iter()
        .map(|recipe| RecipeWithAvailability {
            recipe: recipe.clone(),
            availability: calculate_recipe_availability(recipe, &index, today),
        })
        .collect()
}

/// Descending availability, then ascending prep + cook time. Stable.
pub fn rank_by_availability(results: &mut [RecipeWithAvailability]) {
    results.sort_by(|a, b| {
        b.availability
            .availability_percentage
            .total_cmp(&a.availability.availability_percentage)
            .then(a.recipe.total_time_minutes().cmp(&b.recipe.total_time_minutes()))
    });
}

pub fn filter_by_min_availability(
    results: Vec<RecipeWithAvailability>,
    min_percentage: f64,
) -> Vec<RecipeWithAvailability> {
    results
        .into_iter()
        .filter(|r| r.availability.availability_percentage >= min_percentage)
        .collect()
}

/// Shopping list across recipes: missing ingredients deduped by normalized name,
/// in first-seen order.
pub fn collect_missing_ingredients(results: &[RecipeWithAvailability]) -> Vec<CanonicalIngredient> {
    let mut seen: HashSet<String> = HashSet::new();
    results
        .iter()
        .flat_map(|r| r.availability.missing_ingredients.iter())
        .filter(|ingredient| seen.insert(normalize_name(&ingredient.name)))
        .cloned()
        .collect()
}
