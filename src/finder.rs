use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compose::{self, SearchOutcome};
use crate::criteria::SearchCriteria;
use crate::error::SearchError;
use crate::source::{MealDb, RecipeSource};

/// Runs searches against a recipe source.
///
/// The finder numbers its searches so that when calls overlap, only the
/// newest one may deliver a result; earlier ones come back as
/// [`SearchError::Superseded`] instead of overwriting fresher data.
pub struct RecipeFinder<S: RecipeSource = MealDb> {
    source: S,
    generation: AtomicU64,
}

impl RecipeFinder<MealDb> {
    /// Finder over the public directory with default settings.
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self::with_source(MealDb::new()?))
    }
}

impl<S: RecipeSource> RecipeFinder<S> {
    /// Finder over a custom source implementation.
    pub fn with_source(source: S) -> Self {
        RecipeFinder {
            source,
            generation: AtomicU64::new(0),
        }
    }

    /// Run one search.
    ///
    /// Dropping the returned future cancels any lookups still in flight.
    /// If another `search` call starts on this finder before this one
    /// finishes, the stale result is discarded and
    /// [`SearchError::Superseded`] is returned in its place.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome, SearchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut rng = StdRng::from_entropy();

        let outcome = compose::search_with(&self.source, criteria, &mut rng).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(SearchError::Superseded);
        }
        outcome
    }
}
