//! Recipe search over the TheMealDB directory: ingredient, cuisine and
//! dietary filters combined client-side into one ordered result list.

pub mod builder;
pub mod compose;
pub mod config;
pub mod criteria;
pub mod error;
pub mod finder;
pub mod model;
pub mod source;

pub use crate::builder::{RecipeSearch, RecipeSearchBuilder};
pub use crate::compose::SearchOutcome;
pub use crate::config::Settings;
pub use crate::criteria::{CookingTime, Cuisine, DietaryPreference, SearchCriteria};
pub use crate::error::SearchError;
pub use crate::finder::RecipeFinder;
pub use crate::model::{Recipe, RecipeStub};
pub use crate::source::{MealDb, RecipeSource};

/// Search the public directory with default settings.
///
/// Convenience wrapper for callers that do not need a reusable
/// [`RecipeFinder`] or custom configuration.
pub async fn search_recipes(criteria: &SearchCriteria) -> Result<SearchOutcome, SearchError> {
    RecipeFinder::new()?.search(criteria).await
}
