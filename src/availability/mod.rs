pub mod aggregator;
pub mod matcher;
pub mod name_normalizer;

pub use aggregator::{
    calculate_multiple_recipe_availability, calculate_recipe_availability, collect_missing_ingredients,
    filter_by_min_availability, rank_by_availability,
};
pub use matcher::{match_ingredient, IngredientMatch, IngredientMatcher, InventoryIndex};
pub use name_normalizer::normalize_name;

use chrono::NaiveDate;

/// The local calendar date, for callers that do not pin "today" themselves.
pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}
