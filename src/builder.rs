use std::time::Duration;

use crate::compose::SearchOutcome;
use crate::config::Settings;
use crate::criteria::{CookingTime, Cuisine, DietaryPreference, SearchCriteria};
use crate::error::SearchError;
use crate::finder::RecipeFinder;
use crate::source::MealDb;

/// Builder for configuring and executing recipe searches
#[derive(Debug, Default)]
pub struct RecipeSearchBuilder {
    criteria: SearchCriteria,
    settings: Option<Settings>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeSearchBuilder {
    /// Add one ingredient token to the search
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("chicken")
    ///     .ingredient("rice");
    /// ```
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.criteria.ingredients.push(ingredient.into());
        self
    }

    /// Set all ingredient tokens at once, replacing any added so far
    pub fn ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.criteria.ingredients = ingredients;
        self
    }

    /// Restrict results to one cuisine
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{Cuisine, RecipeSearch};
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("tomato")
    ///     .cuisine(Cuisine::Italian);
    /// ```
    pub fn cuisine(mut self, cuisine: Cuisine) -> Self {
        self.criteria.cuisine = cuisine;
        self
    }

    /// Set the dietary preference
    ///
    /// Only [`DietaryPreference::Vegetarian`] narrows the results; the
    /// other values are accepted without effect.
    pub fn dietary(mut self, dietary: DietaryPreference) -> Self {
        self.criteria.dietary = dietary;
        self
    }

    /// Set the requested cooking time shown on every result
    pub fn cooking_time(mut self, cooking_time: CookingTime) -> Self {
        self.criteria.cooking_time = cooking_time;
        self
    }

    /// Replace the whole criteria value, e.g. one assembled from CLI input
    pub fn criteria(mut self, criteria: SearchCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Use previously loaded settings instead of the defaults
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Point the search at a different directory root
    ///
    /// Overrides the settings' base URL. Used by tests to target a local
    /// mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout applied to each directory lookup
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("chicken")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute the search
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - Neither ingredients nor a cuisine were supplied
    /// - Any directory lookup fails at the transport level
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::{Cuisine, RecipeSearch};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let outcome = RecipeSearch::builder()
    ///     .ingredient("chicken")
    ///     .cuisine(Cuisine::Indian)
    ///     .search()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(self) -> Result<SearchOutcome, SearchError> {
        let mut settings = self.settings.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout.as_secs();
        }

        let finder = RecipeFinder::with_source(MealDb::from_settings(&settings)?);
        finder.search(&self.criteria).await
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for configuring a search
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
