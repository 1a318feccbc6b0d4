//! Combines per-filter candidate sets into one ordered, decorated result
//! list.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::criteria::{CookingTime, Cuisine, DietaryPreference, SearchCriteria};
use crate::error::SearchError;
use crate::model::{Recipe, RecipeStub};
use crate::source::RecipeSource;

/// Displayed cooking time range when the caller has no time preference.
const COOKING_TIME_MINUTES: std::ops::Range<u32> = 20..80;
/// Displayed serving count range.
const SERVINGS: std::ops::RangeInclusive<u32> = 1..=4;

/// Outcome of a valid search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Recipes matching every supplied criterion, in directory order.
    Found(Vec<Recipe>),
    /// The query was valid but matched nothing.
    Empty,
}

/// Run one search against `source`, combining the lookups `criteria` calls
/// for into a single decorated result list.
///
/// The randomness behind the synthetic display fields is injected so
/// callers can pass a seeded generator and get reproducible decorations.
///
/// The first failing lookup aborts the whole composition; partial results
/// are never returned.
pub async fn search_with<S, R>(
    source: &S,
    criteria: &SearchCriteria,
    rng: &mut R,
) -> Result<SearchOutcome, SearchError>
where
    S: RecipeSource + ?Sized,
    R: Rng,
{
    if !criteria.has_constraint() {
        return Err(SearchError::InvalidCriteria(
            "enter ingredients or choose a cuisine".to_string(),
        ));
    }

    // "No ingredient lookup ran" and "the lookup matched nothing" stay
    // distinct here; the cuisine step treats them the same way.
    let mut working: Option<Vec<RecipeStub>> = None;
    let mut ingredients_defined = false;

    if !criteria.ingredients.is_empty() {
        working = source.by_ingredients(&criteria.ingredients).await?;
        ingredients_defined = working.is_some();
    }

    if criteria.cuisine != Cuisine::Any {
        let cuisine_set = source.by_cuisine(criteria.cuisine).await?;
        if ingredients_defined {
            working = working.map(|stubs| intersect(stubs, cuisine_set.unwrap_or_default()));
        } else {
            // Replacement, not intersection: without a defined ingredient
            // result the cuisine set becomes the working set.
            working = cuisine_set;
        }
    }

    // No dietary lookup for a working set that is already empty.
    let stubs = match working {
        Some(stubs) if !stubs.is_empty() => stubs,
        _ => return Ok(SearchOutcome::Empty),
    };

    let stubs = if criteria.dietary == DietaryPreference::Vegetarian {
        let vegetarian = source.vegetarian().await?.unwrap_or_default();
        intersect(stubs, vegetarian)
    } else {
        stubs
    };

    debug!("composed {} recipes", stubs.len());
    Ok(SearchOutcome::Found(decorate(
        stubs,
        criteria.cooking_time,
        rng,
    )))
}

/// Records of `left` whose ids also appear in `right`, in `left`'s order.
fn intersect(left: Vec<RecipeStub>, right: Vec<RecipeStub>) -> Vec<RecipeStub> {
    let ids: HashSet<&str> = right.iter().map(|stub| stub.id.as_str()).collect();
    left.into_iter()
        .filter(|stub| ids.contains(stub.id.as_str()))
        .collect()
}

/// Attach the synthetic display fields to each surviving record.
fn decorate<R: Rng>(stubs: Vec<RecipeStub>, cooking_time: CookingTime, rng: &mut R) -> Vec<Recipe> {
    stubs
        .into_iter()
        .map(|stub| Recipe {
            id: stub.id,
            name: stub.name,
            thumbnail: stub.thumbnail,
            cooking_time_minutes: match cooking_time {
                CookingTime::Minutes(minutes) => minutes,
                CookingTime::Any => rng.gen_range(COOKING_TIME_MINUTES),
            },
            servings: rng.gen_range(SERVINGS),
        })
        .collect()
}
