use std::env;
use std::process;

use log::debug;

use recipe_finder::{
    CookingTime, Cuisine, DietaryPreference, RecipeSearch, SearchCriteria, SearchOutcome, Settings,
};

fn print_usage() {
    eprintln!("Usage: recipe-finder [INGREDIENTS] [OPTIONS]");
    eprintln!();
    eprintln!("  INGREDIENTS       comma-separated list, e.g. chicken,rice");
    eprintln!("  --cuisine NAME    any, Indian, Italian, Mexican, Chinese, Thai, French");
    eprintln!("  --diet NAME       any, vegetarian, vegan, gluten-free, dairy-free");
    eprintln!(
        "  --time MINUTES    shown on every result; e.g. {}",
        CookingTime::MENU_MINUTES
            .map(|m| m.to_string())
            .join(", ")
    );
    eprintln!("  --json            print results as JSON");
}

fn parse_args(args: &[String]) -> Result<(SearchCriteria, bool), Box<dyn std::error::Error>> {
    let mut criteria = SearchCriteria::default();
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cuisine" => {
                let value = iter.next().ok_or("--cuisine requires a value")?;
                criteria.cuisine = value.parse::<Cuisine>()?;
            }
            "--diet" => {
                let value = iter.next().ok_or("--diet requires a value")?;
                criteria.dietary = value.parse::<DietaryPreference>()?;
            }
            "--time" => {
                let value = iter.next().ok_or("--time requires a value")?;
                criteria.cooking_time = value.parse::<CookingTime>()?;
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other).into());
            }
            ingredients => {
                criteria.ingredients = SearchCriteria::parse_ingredients(ingredients);
            }
        }
    }

    Ok((criteria, json))
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    if let Err(err) = run(&args).await {
        eprintln!("{}", err);
        process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let (criteria, json) = parse_args(args)?;
    debug!("{:#?}", criteria);

    let settings = Settings::load()?;
    let outcome = RecipeSearch::builder()
        .criteria(criteria)
        .settings(settings)
        .search()
        .await?;

    match outcome {
        SearchOutcome::Found(recipes) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
                return Ok(());
            }
            for recipe in &recipes {
                println!("{}", recipe.name);
                println!("  cooking time: {} mins", recipe.cooking_time_minutes);
                println!("  servings: {}", recipe.servings);
                println!("  {}", recipe.detail_url());
                println!();
            }
            println!("{} recipe(s) found", recipes.len());
        }
        SearchOutcome::Empty => println!("No recipes found. Try different filters."),
    }

    Ok(())
}
