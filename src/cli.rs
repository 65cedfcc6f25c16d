use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scale recipes and check them against your pantry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rescale a recipe to a new serving count
    Scale {
        /// Path to a recipe JSON file (a single recipe, or a list whose first entry is used)
        #[arg(short, long)]
        recipe_file: String,

        /// Target number of servings
        #[arg(short, long)]
        servings: f64,

        /// Recipe id to pick when the file holds several recipes
        #[arg(long)]
        recipe_id: Option<String>,
    },
    /// Rank recipes by how much of each is covered by the pantry
    Availability {
        /// Path to a JSON file with one recipe or a list of recipes
        #[arg(short, long)]
        recipes_file: String,

        /// Path to the inventory CSV snapshot
        #[arg(short, long)]
        inventory_file: String,

        /// Only show recipes at or above this availability percentage
        #[arg(long, default_value_t = 0.0)]
        min_percentage: f64,

        /// Date to evaluate expiry against (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<String>,
    },
    /// Suggest alternative serving counts
    Suggest {
        /// Current number of servings
        #[arg(short, long)]
        servings: f64,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale_command() {
        let cli = Cli::try_parse_from(["pantry-scale", "scale", "-r", "pancakes.json", "-s", "6"]).unwrap();
        match cli.command {
            Command::Scale { recipe_file, servings, recipe_id } => {
                assert_eq!(recipe_file, "pancakes.json");
                assert_eq!(servings, 6.0);
                assert_eq!(recipe_id, None);
            }
            other => panic!("Expected Scale, got {:?}", other),
        }
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_availability_command() {
        let cli = Cli::try_parse_from([
            "pantry-scale",
            "availability",
            "--recipes-file",
            "recipes.json",
            "--inventory-file",
            "pantry.csv",
            "--min-percentage",
            "50",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Availability { min_percentage, today, .. } => {
                assert_eq!(min_percentage, 50.0);
                assert_eq!(today, None);
            }
            other => panic!("Expected Availability, got {:?}", other),
        }
    }

    #[test]
    fn test_scale_requires_servings() {
        assert!(Cli::try_parse_from(["pantry-scale", "scale", "-r", "pancakes.json"]).is_err());
    }
}
