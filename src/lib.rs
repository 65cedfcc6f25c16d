pub mod availability;
pub mod cli;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod recipe_model;
pub mod scaling;
pub mod servings;
