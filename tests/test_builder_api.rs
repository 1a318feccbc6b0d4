use std::time::Duration;

use mockito::{Matcher, Server};
use recipe_finder::{
    CookingTime, Cuisine, DietaryPreference, RecipeSearch, SearchError, SearchOutcome,
};

const TWO_MEALS: &str = r#"{
    "meals": [
        {"idMeal": "1", "strMeal": "Chicken Handi", "strMealThumb": "https://example.com/1.jpg"},
        {"idMeal": "2", "strMeal": "Chicken Karahi", "strMealThumb": "https://example.com/2.jpg"}
    ]
}"#;

#[tokio::test]
async fn test_builder_without_criteria_is_rejected() {
    let result = RecipeSearch::builder().search().await;

    assert!(matches!(result, Err(SearchError::InvalidCriteria(_))));
}

#[tokio::test]
async fn test_builder_accumulates_ingredients_into_one_lookup() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "chicken,rice".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TWO_MEALS)
        .create();

    let outcome = RecipeSearch::builder()
        .ingredient("chicken")
        .ingredient("rice")
        .base_url(server.url())
        .search()
        .await
        .unwrap();

    match outcome {
        SearchOutcome::Found(recipes) => assert_eq!(recipes.len(), 2),
        SearchOutcome::Empty => panic!("expected a Found outcome"),
    }
    mock.assert();
}

#[tokio::test]
async fn test_builder_full_search() {
    let mut server = Server::new_async().await;
    let ingredient_mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "chicken".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TWO_MEALS)
        .create();
    let cuisine_mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("a".into(), "Indian".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meals": [
                {"idMeal": "2", "strMeal": "Chicken Karahi", "strMealThumb": "https://example.com/2.jpg"}
            ]}"#,
        )
        .create();

    let outcome = RecipeSearch::builder()
        .ingredient("chicken")
        .cuisine(Cuisine::Indian)
        .dietary(DietaryPreference::DairyFree)
        .cooking_time(CookingTime::Minutes(45))
        .timeout(Duration::from_secs(5))
        .base_url(server.url())
        .search()
        .await
        .unwrap();

    match outcome {
        SearchOutcome::Found(recipes) => {
            assert_eq!(recipes.len(), 1);
            assert_eq!(recipes[0].id, "2");
            assert_eq!(recipes[0].cooking_time_minutes, 45);
            assert_eq!(recipes[0].detail_url(), "https://www.themealdb.com/meal/2");
        }
        SearchOutcome::Empty => panic!("expected a Found outcome"),
    }
    ingredient_mock.assert();
    cuisine_mock.assert();
}

#[tokio::test]
async fn test_builder_ingredients_replaces_previous_tokens() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "beef".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TWO_MEALS)
        .create();

    let outcome = RecipeSearch::builder()
        .ingredient("chicken")
        .ingredients(vec!["beef".to_string()])
        .base_url(server.url())
        .search()
        .await
        .unwrap();

    assert!(matches!(outcome, SearchOutcome::Found(_)));
    mock.assert();
}
