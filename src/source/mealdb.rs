use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::Settings;
use crate::criteria::Cuisine;
use crate::error::SearchError;
use crate::model::RecipeStub;
use crate::source::RecipeSource;

/// Category name the directory uses for vegetarian recipes.
const VEGETARIAN_CATEGORY: &str = "Vegetarian";

/// Response envelope shared by every filter endpoint. A `null` meals field
/// is the directory's way of saying the filter matched nothing.
#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Option<Vec<RecipeStub>>,
}

/// Client for the TheMealDB filter endpoints.
pub struct MealDb {
    client: Client,
    base_url: String,
}

impl MealDb {
    /// Create a client for the public directory with default settings.
    pub fn new() -> Result<Self, SearchError> {
        Self::from_settings(&Settings::default())
    }

    /// Create a client from configuration on disk and in the environment.
    pub fn from_env() -> Result<Self, SearchError> {
        let settings = Settings::load()?;
        Self::from_settings(&settings)
    }

    /// Create a client from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(MealDb {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Point the client at a different directory root, e.g. a local mock
    /// server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let settings = Settings {
            base_url: base_url.into(),
            ..Settings::default()
        };
        Self::from_settings(&settings)
    }

    async fn filter(
        &self,
        param: &str,
        value: &str,
    ) -> Result<Option<Vec<RecipeStub>>, SearchError> {
        let response = self
            .client
            .get(format!("{}/filter.php", self.base_url))
            .query(&[(param, value)])
            .send()
            .await?
            .error_for_status()?;

        let body: MealsResponse = response.json().await?;
        debug!(
            "filter.php?{}={} returned {} recipes",
            param,
            value,
            body.meals.as_ref().map_or(0, Vec::len)
        );

        Ok(body.meals)
    }
}

#[async_trait]
impl RecipeSource for MealDb {
    async fn by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Option<Vec<RecipeStub>>, SearchError> {
        // The directory's native query syntax is a comma-joined token list.
        self.filter("i", &ingredients.join(",")).await
    }

    async fn by_cuisine(&self, cuisine: Cuisine) -> Result<Option<Vec<RecipeStub>>, SearchError> {
        self.filter("a", cuisine.as_str()).await
    }

    async fn vegetarian(&self) -> Result<Option<Vec<RecipeStub>>, SearchError> {
        self.filter("c", VEGETARIAN_CATEGORY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const TWO_MEALS: &str = r#"{
        "meals": [
            {"idMeal": "1", "strMeal": "Chicken Fried Rice", "strMealThumb": "https://example.com/1.jpg"},
            {"idMeal": "2", "strMeal": "Chicken Congee", "strMealThumb": "https://example.com/2.jpg"}
        ]
    }"#;

    #[tokio::test]
    async fn test_by_ingredients_joins_tokens() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "chicken,rice".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TWO_MEALS)
            .create();

        let source = MealDb::with_base_url(server.url()).unwrap();
        let ingredients = vec!["chicken".to_string(), "rice".to_string()];

        let meals = source.by_ingredients(&ingredients).await.unwrap().unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].id, "1");
        assert_eq!(meals[1].name, "Chicken Congee");
        mock.assert();
    }

    #[tokio::test]
    async fn test_null_meals_is_no_results_not_an_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "unobtainium".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create();

        let source = MealDb::with_base_url(server.url()).unwrap();
        let ingredients = vec!["unobtainium".to_string()];

        let meals = source.by_ingredients(&ingredients).await.unwrap();
        assert!(meals.is_none());
        mock.assert();
    }

    #[tokio::test]
    async fn test_by_cuisine_queries_area() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("a".into(), "Italian".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TWO_MEALS)
            .create();

        let source = MealDb::with_base_url(server.url()).unwrap();

        let meals = source.by_cuisine(Cuisine::Italian).await.unwrap().unwrap();
        assert_eq!(meals.len(), 2);
        mock.assert();
    }

    #[tokio::test]
    async fn test_vegetarian_queries_fixed_category() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("c".into(), "Vegetarian".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TWO_MEALS)
            .create();

        let source = MealDb::with_base_url(server.url()).unwrap();

        let meals = source.vegetarian().await.unwrap().unwrap();
        assert_eq!(meals.len(), 2);
        mock.assert();
    }

    #[tokio::test]
    async fn test_server_error_is_transport() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(500)
            .create();

        let source = MealDb::with_base_url(server.url()).unwrap();

        let result = source.vegetarian().await;
        assert!(matches!(result, Err(SearchError::Transport(_))));
        mock.assert();
    }
}
