use serde::{Deserialize, Serialize};

/// Where the directory hosts per-recipe detail pages.
const DETAIL_PAGE_BASE: &str = "https://www.themealdb.com/meal";

/// Minimal recipe record as returned by a single directory lookup.
///
/// The `id` is assigned by the directory and unique per recipe; it is the
/// only field consulted when combining candidate sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStub {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
}

/// A recipe ready for display.
///
/// `cooking_time_minutes` and `servings` are synthetic display fields,
/// regenerated on every search and never read back from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub cooking_time_minutes: u32,
    pub servings: u32,
}

impl Recipe {
    /// URL of the external detail page for this recipe.
    pub fn detail_url(&self) -> String {
        format!("{}/{}", DETAIL_PAGE_BASE, self.id)
    }
}
