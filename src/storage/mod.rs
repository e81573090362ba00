pub mod recipes;

pub use recipes::{Ingredient, LoadSource, Recipe, RecipeId, RecipeStore};
