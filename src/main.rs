use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tokio::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pantry_scale::availability::{
    calculate_multiple_recipe_availability, collect_missing_ingredients, filter_by_min_availability,
    rank_by_availability, today_local,
};
use pantry_scale::cli::{parse_args, Command};
use pantry_scale::config::EngineConfig;
use pantry_scale::data_loader::{load_inventory_csv, parse_recipes_json};
use pantry_scale::recipe_model::{CanonicalRecipe, NutritionPerServing};
use pantry_scale::scaling::scale_recipe;
use pantry_scale::servings::get_serving_suggestions;

async fn read_recipes(path: &str) -> Result<Vec<CanonicalRecipe>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read recipe file '{}'", path))?;
    parse_recipes_json(&content).with_context(|| format!("Failed to parse recipe file '{}'", path))
}

fn print_nutrition(nutrition: &NutritionPerServing) {
    let fields = [
        ("calories", nutrition.calories, "kcal"),
        ("protein", nutrition.protein, "g"),
        ("carbs", nutrition.carbs, "g"),
        ("fats", nutrition.fats, "g"),
        ("fiber", nutrition.fiber, "g"),
        ("sugar", nutrition.sugar, "g"),
        ("sodium", nutrition.sodium, "g"),
    ];
    for (label, value, unit) in fields {
        if let Some(value) = value {
            println!("  {:<9}{} {}", label, value, unit);
        }
    }
}

async fn run_scale(
    config: &EngineConfig,
    recipe_file: &str,
    servings: f64,
    recipe_id: Option<String>,
    json: bool,
) -> Result<()> {
    let recipes = read_recipes(recipe_file).await?;
    let recipe = match recipe_id {
        Some(id) => recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| anyhow::anyhow!("No recipe with id '{}' in '{}'", id, recipe_file))?,
        None => recipes
            .first()
            .ok_or_else(|| anyhow::anyhow!("Recipe file '{}' contains no recipes", recipe_file))?,
    };

    let scaled = scale_recipe(recipe, servings, &config.serving_bounds)?;
    info!(recipe_id = %scaled.recipe_id, factor = scaled.factor, "recipe scaled");

    if json {
        println!("{}", serde_json::to_string_pretty(&scaled)?);
        return Ok(());
    }

    println!(
        "{} ({} → {} servings)",
        scaled.title, scaled.original_servings, scaled.target_servings
    );
    for line in scaled.display_lines() {
        println!("  - {}", line);
    }
    if let Some(nutrition) = &scaled.nutrition {
        println!("Per serving:");
        print_nutrition(nutrition);
    }
    Ok(())
}

async fn run_availability(
    config: &EngineConfig,
    recipes_file: &str,
    inventory_file: &str,
    min_percentage: f64,
    today: Option<String>,
    json: bool,
) -> Result<()> {
    let today = match today {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid --today '{}', expected YYYY-MM-DD", raw))?,
        None => today_local(),
    };

    let recipes = read_recipes(recipes_file).await?;
    let inventory = load_inventory_csv(Path::new(inventory_file))?;
    info!(recipes = recipes.len(), inventory_items = inventory.len(), %today, "checking availability");

    let mut results = calculate_multiple_recipe_availability(&recipes, &inventory, today, &config.availability);
    rank_by_availability(&mut results);
    let results = filter_by_min_availability(results, min_percentage);
    let shopping_list = collect_missing_ingredients(&results);

    if json {
        let payload = serde_json::json!({
            "today": today,
            "recipes": results,
            "shopping_list": shopping_list,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for entry in &results {
        println!(
            "{:>5.1}%  {} ({} min)",
            entry.availability.availability_percentage,
            entry.recipe.title,
            entry.recipe.total_time_minutes()
        );
        for missing in &entry.availability.missing_ingredients {
            println!("        missing: {}", missing.name);
        }
        for expiring in &entry.availability.expiring_ingredients {
            match expiring.expiry_date {
                Some(date) => println!("        use soon: {} (expires {})", expiring.name, date),
                None => println!("        use soon: {}", expiring.name),
            }
        }
    }
    if !shopping_list.is_empty() {
        println!("\nShopping list:");
        for ingredient in &shopping_list {
            println!("  - {}", ingredient.name);
        }
    }
    Ok(())
}

fn run_suggest(servings: f64, json: bool) -> Result<()> {
    let suggestions = get_serving_suggestions(servings);
    if json {
        println!("{}", serde_json::to_string(&suggestions)?);
    } else if suggestions.is_empty() {
        println!("No suggestions for {} servings", servings);
    } else {
        let rendered: Vec<String> = suggestions.iter().map(|s| s.to_string()).collect();
        println!("Try: {}", rendered.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::from_env().context("Failed to load configuration")?;
    let cli = parse_args();

    match cli.command {
        Command::Scale { recipe_file, servings, recipe_id } => {
            run_scale(&config, &recipe_file, servings, recipe_id, cli.json).await
        }
        Command::Availability {
            recipes_file,
            inventory_file,
            min_percentage,
            today,
        } => run_availability(&config, &recipes_file, &inventory_file, min_percentage, today, cli.json).await,
        Command::Suggest { servings } => run_suggest(servings, cli.json),
    }
}
