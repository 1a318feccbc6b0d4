mod mealdb;

pub use mealdb::MealDb;

use async_trait::async_trait;

use crate::criteria::Cuisine;
use crate::error::SearchError;
use crate::model::RecipeStub;

/// A recipe directory queried one filter at a time.
///
/// `Ok(None)` is the directory's explicit no-results marker and is not an
/// error; `Err` is reserved for transport failures. Each lookup is
/// independent of the others.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Recipes containing at least the given ingredients.
    async fn by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Option<Vec<RecipeStub>>, SearchError>;

    /// Recipes tagged with the given cuisine/area. Never called with
    /// `Cuisine::Any`.
    async fn by_cuisine(&self, cuisine: Cuisine) -> Result<Option<Vec<RecipeStub>>, SearchError>;

    /// Recipes in the directory's vegetarian category.
    async fn vegetarian(&self) -> Result<Option<Vec<RecipeStub>>, SearchError>;
}
