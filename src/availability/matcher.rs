use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::availability::name_normalizer::normalize_name;
use crate::config::AvailabilityConfig;
use crate::recipe_model::{CanonicalIngredient, InventoryItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientMatch {
    pub satisfied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covering_item: Option<InventoryItem>,
    pub is_expiring: bool,
}

/// Decides whether a recipe ingredient is covered by the pantry.
///
/// The aggregator only talks to this trait, so a stricter matcher (token sets,
/// synonyms) can replace the loose containment match below.
pub trait IngredientMatcher {
    fn match_ingredient(&self, ingredient: &CanonicalIngredient, today: NaiveDate) -> IngredientMatch;
}

/// Inventory snapshot indexed by normalized name.
///
/// Exact name hits are a hash lookup; only misses fall back to the containment
/// scan ("tomato" vs "tomatoes, diced").
pub struct InventoryIndex<'a> {
    items: Vec<&'a InventoryItem>,
    normalized: Vec<String>,
    by_name: HashMap<String, Vec<usize>>,
    config: AvailabilityConfig,
}

impl<'a> InventoryIndex<'a> {
    pub fn new(inventory: &'a [InventoryItem], config: AvailabilityConfig) -> Self {
        let mut items = Vec::with_capacity(inventory.len());
        let mut normalized = Vec::with_capacity(inventory.len());
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();

        for item in inventory.iter().filter(|item| item.quantity > 0.0) {
            let key = normalize_name(&item.name);
            if key.is_empty() {
                continue;
            }
            by_name.entry(key.clone()).or_default().push(items.len());
            items.push(item);
            normalized.push(key);
        }

        Self { items, normalized, by_name, config }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_expiring(&self, item: &InventoryItem, today: NaiveDate) -> bool {
        item.expiry_date
            .map(|expiry| (0..=self.config.expiry_window_days).contains(&(expiry - today).num_days()))
            .unwrap_or(false)
    }

    fn candidates(&self, key: &str) -> Vec<usize> {
        if let Some(exact) = self.by_name.get(key) {
            return exact.clone();
        }
        self.normalized
            .iter()
            .enumerate()
            .filter(|(_, name)| name.contains(key) || key.contains(name.as_str()))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Among candidates, the one to use up first: earliest expiry, then inventory order.
    fn pick_covering(&self, candidates: &[usize]) -> Option<&'a InventoryItem> {
        candidates
            .iter()
            .map(|&idx| self.items[idx])
            .min_by_key(|item| item.expiry_date.unwrap_or(NaiveDate::MAX))
    }
}

impl IngredientMatcher for InventoryIndex<'_> {
    fn match_ingredient(&self, ingredient: &CanonicalIngredient, today: NaiveDate) -> IngredientMatch {
        let key = normalize_name(&ingredient.name);
        let covering = if key.is_empty() {
            None
        } else {
            self.pick_covering(&self.candidates(&key))
        };

        IngredientMatch {
            satisfied: covering.is_some() || ingredient.optional,
            is_expiring: covering.map(|item| self.is_expiring(item, today)).unwrap_or(false),
            covering_item: covering.cloned(),
        }
    }
}

/// One-off match against a raw inventory slice. Batch callers should build an
/// [`InventoryIndex`] once instead.
pub fn match_ingredient(
    ingredient: &CanonicalIngredient,
    inventory: &[InventoryItem],
    today: NaiveDate,
) -> IngredientMatch {
    InventoryIndex::new(inventory, AvailabilityConfig::default()).match_ingredient(ingredient, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(id: &str, name: &str, expiry: Option<NaiveDate>) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: name.to_string(),
            quantity: 1.0,
            unit: "whole".to_string(),
            category: "produce".to_string(),
            expiry_date: expiry,
        }
    }

    fn today() -> NaiveDate {
        date(2026, 10, 16)
    }

    #[test]
    fn test_exact_match_after_normalization() {
        let inventory = vec![item("1", "Tomatoes", None)];
        let result = match_ingredient(&CanonicalIngredient::numeric("tomato", 2.0, ""), &inventory, today());
        assert!(result.satisfied);
        assert_eq!(result.covering_item.unwrap().id, "1");
        assert!(!result.is_expiring);
    }

    #[test]
    fn test_containment_match_both_directions() {
        let inventory = vec![item("1", "tomatoes, diced", None)];
        assert!(match_ingredient(&CanonicalIngredient::numeric("tomato", 1.0, ""), &inventory, today()).satisfied);

        let inventory = vec![item("2", "milk", None)];
        let ingredient = CanonicalIngredient::numeric("whole milk", 1.0, "cup");
        assert!(match_ingredient(&ingredient, &inventory, today()).satisfied);
    }

    #[test]
    fn test_missing_ingredient() {
        let inventory = vec![item("1", "rice", None)];
        let result = match_ingredient(&CanonicalIngredient::numeric("saffron", 1.0, "pinch"), &inventory, today());
        assert!(!result.satisfied);
        assert!(result.covering_item.is_none());
        assert!(!result.is_expiring);
    }

    #[test]
    fn test_optional_is_always_satisfied() {
        let result = match_ingredient(
            &CanonicalIngredient::numeric("parsley", 1.0, "tbsp").as_optional(),
            &[],
            today(),
        );
        assert!(result.satisfied);
        assert!(result.covering_item.is_none());
    }

    #[test]
    fn test_expiry_window() {
        let inventory = vec![
            item("soon", "spinach", Some(date(2026, 10, 19))),
            item("later", "kale", Some(date(2026, 10, 20))),
            item("gone", "cream", Some(date(2026, 10, 10))),
        ];
        let index = InventoryIndex::new(&inventory, AvailabilityConfig::default());
        assert!(index.match_ingredient(&CanonicalIngredient::numeric("spinach", 1.0, "cup"), today()).is_expiring);
        assert!(!index.match_ingredient(&CanonicalIngredient::numeric("kale", 1.0, "cup"), today()).is_expiring);
        assert!(!index.match_ingredient(&CanonicalIngredient::numeric("cream", 1.0, "cup"), today()).is_expiring);
    }

    #[test]
    fn test_expiry_window_edges() {
        let inventory = vec![
            item("today", "yogurt", Some(today())),
            item("edge", "spinach", Some(date(2026, 10, 19))),
            item("stale", "milk", Some(date(2025, 1, 1))),
            item("yesterday", "cream", Some(date(2026, 10, 15))),
        ];
        let index = InventoryIndex::new(&inventory, AvailabilityConfig::default());
        assert!(index.is_expiring(&inventory[0], today()));
        assert!(index.is_expiring(&inventory[1], today()));
        assert!(!index.is_expiring(&inventory[2], today()));
        assert!(!index.is_expiring(&inventory[3], today()));

        let stale = index.match_ingredient(&CanonicalIngredient::numeric("milk", 1.0, "cup"), today());
        assert!(stale.satisfied);
        assert!(!stale.is_expiring);
    }

    #[test]
    fn test_ie_plural_in_pantry_matches_singular_ingredient() {
        let inventory = vec![item("1", "Cookies", None), item("2", "pies", None)];
        let cookie = match_ingredient(&CanonicalIngredient::numeric("cookie", 6.0, ""), &inventory, today());
        assert!(cookie.satisfied);
        assert_eq!(cookie.covering_item.unwrap().id, "1");

        let pie = match_ingredient(&CanonicalIngredient::numeric("pie", 1.0, ""), &inventory, today());
        assert_eq!(pie.covering_item.unwrap().id, "2");
    }

    #[test]
    fn test_exact_match_beats_containment() {
        let inventory = vec![
            item("butter", "buttermilk", Some(date(2026, 10, 17))),
            item("plain", "milk", None),
        ];
        let result = match_ingredient(&CanonicalIngredient::numeric("milk", 1.0, "cup"), &inventory, today());
        assert_eq!(result.covering_item.unwrap().id, "plain");
        assert!(!result.is_expiring);
    }

    #[test]
    fn test_soonest_expiring_item_covers() {
        let inventory = vec![
            item("fresh", "eggs", Some(date(2026, 11, 1))),
            item("old", "Eggs", Some(date(2026, 10, 18))),
        ];
        let result = match_ingredient(&CanonicalIngredient::numeric("egg", 2.0, ""), &inventory, today());
        assert_eq!(result.covering_item.unwrap().id, "old");
        assert!(result.is_expiring);
    }

    #[test]
    fn test_empty_stock_does_not_cover() {
        let mut empty = item("1", "flour", None);
        empty.quantity = 0.0;
        let inventory = vec![empty];
        let index = InventoryIndex::new(&inventory, AvailabilityConfig::default());
        assert!(index.is_empty());
        assert!(!index.match_ingredient(&CanonicalIngredient::numeric("flour", 1.0, "cup"), today()).satisfied);
    }
}
