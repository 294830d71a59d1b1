//! Random recipe source (TheMealDB-compatible API).
//!
//! One record per `GET {base}/random.php`, with ingredient/measure
//! pairs spread across numbered `strIngredient1..20` / `strMeasure1..20`
//! fields. Blank slots are skipped; a blank measure becomes `None`.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::CollaboratorError;
use crate::integrations::traits::RandomRecipeSource;
use crate::types::{ExternalIngredient, ExternalRecipe};

const SERVICE: &str = "mealdb";

/// The API schema caps each meal at this many ingredient slots.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

fn required_str<'a>(meal: &'a serde_json::Value, field: &str) -> Result<&'a str, CollaboratorError> {
    meal[field]
        .as_str()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| CollaboratorError::Malformed {
            service: SERVICE,
            message: format!("missing field '{field}'"),
        })
}

fn optional_str(meal: &serde_json::Value, field: &str) -> Option<String> {
    meal[field]
        .as_str()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

fn parse_meal(meal: &serde_json::Value) -> Result<ExternalRecipe, CollaboratorError> {
    let mut ingredients = Vec::new();
    for slot in 1..=MAX_INGREDIENT_SLOTS {
        let Some(name) = optional_str(meal, &format!("strIngredient{slot}")) else {
            continue;
        };
        let measure = optional_str(meal, &format!("strMeasure{slot}"));
        ingredients.push(ExternalIngredient { name, measure });
    }

    Ok(ExternalRecipe {
        name: required_str(meal, "strMeal")?.to_string(),
        category: required_str(meal, "strCategory")?.to_string(),
        area: required_str(meal, "strArea")?.to_string(),
        instructions: required_str(meal, "strInstructions")?.to_string(),
        ingredients,
        image_url: optional_str(meal, "strMealThumb"),
    })
}

#[async_trait]
impl RandomRecipeSource for MealDbClient {
    async fn fetch_random(&self) -> Result<ExternalRecipe, CollaboratorError> {
        let response = self
            .client
            .get(format!("{}/random.php", self.base_url))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        let payload: serde_json::Value = response.json().await?;
        let meal = payload["meals"]
            .get(0)
            .ok_or_else(|| CollaboratorError::Malformed {
                service: SERVICE,
                message: "no meals in response".to_string(),
            })?;
        parse_meal(meal)
    }
}
