use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Cuisines the directory's area filter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cuisine {
    /// No cuisine constraint.
    #[default]
    Any,
    Indian,
    Italian,
    Mexican,
    Chinese,
    Thai,
    French,
}

impl Cuisine {
    /// Cuisines a caller can actually pick, in menu order.
    pub const SELECTABLE: [Cuisine; 6] = [
        Cuisine::Indian,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Chinese,
        Cuisine::Thai,
        Cuisine::French,
    ];

    /// The area name the directory expects as a query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Any => "any",
            Cuisine::Indian => "Indian",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Chinese => "Chinese",
            Cuisine::Thai => "Thai",
            Cuisine::French => "French",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("any") {
            return Ok(Cuisine::Any);
        }
        Cuisine::SELECTABLE
            .iter()
            .find(|cuisine| cuisine.as_str().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| {
                SearchError::InvalidCriteria(format!(
                    "unknown cuisine '{}'; expected one of: any, Indian, Italian, Mexican, Chinese, Thai, French",
                    s
                ))
            })
    }
}

/// Dietary preference selector.
///
/// Only `Vegetarian` has a filtering effect; the remaining values are
/// accepted but currently leave the result set untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietaryPreference {
    #[default]
    Any,
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl DietaryPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Any => "any",
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::GlutenFree => "gluten-free",
            DietaryPreference::DairyFree => "dairy-free",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryPreference {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        [
            DietaryPreference::Any,
            DietaryPreference::Vegetarian,
            DietaryPreference::Vegan,
            DietaryPreference::GlutenFree,
            DietaryPreference::DairyFree,
        ]
        .iter()
        .find(|preference| preference.as_str().eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| {
            SearchError::InvalidCriteria(format!(
                "unknown dietary preference '{}'; expected one of: any, vegetarian, vegan, gluten-free, dairy-free",
                s
            ))
        })
    }
}

/// Requested cooking time, or no preference.
///
/// The value is presentational only: it becomes the displayed
/// `cooking_time_minutes` of every result instead of filtering them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CookingTime {
    #[default]
    Any,
    Minutes(u32),
}

impl CookingTime {
    /// Durations offered by the presentation layer's time menu.
    pub const MENU_MINUTES: [u32; 4] = [15, 30, 45, 60];
}

impl fmt::Display for CookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookingTime::Any => f.write_str("any"),
            CookingTime::Minutes(minutes) => write!(f, "{}", minutes),
        }
    }
}

impl FromStr for CookingTime {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("any") {
            return Ok(CookingTime::Any);
        }
        match wanted.parse::<u32>() {
            Ok(minutes) if minutes > 0 => Ok(CookingTime::Minutes(minutes)),
            _ => Err(SearchError::InvalidCriteria(format!(
                "cooking time must be 'any' or a positive number of minutes, got '{}'",
                s
            ))),
        }
    }
}

/// Immutable search input assembled by the caller.
///
/// Empty `ingredients` means "no ingredient constraint"; the query is only
/// valid when at least one of `ingredients` and `cuisine` constrains it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub ingredients: Vec<String>,
    pub cuisine: Cuisine,
    pub dietary: DietaryPreference,
    pub cooking_time: CookingTime,
}

impl SearchCriteria {
    /// Whether the query constrains the result set at all.
    pub fn has_constraint(&self) -> bool {
        !self.ingredients.is_empty() || self.cuisine != Cuisine::Any
    }

    /// Splits a free-text ingredient field (e.g. "chicken, rice") into
    /// tokens, dropping empty entries.
    pub fn parse_ingredients(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}
