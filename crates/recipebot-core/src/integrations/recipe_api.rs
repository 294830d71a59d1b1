//! HTTP client for the recipe storage service.
//!
//! Authenticated by a static `X-API-Key` header on every call.
//! Non-success statuses surface as `CollaboratorError::Status`.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::CollaboratorError;
use crate::integrations::traits::RecipeService;
use crate::types::{Recipe, RecipeSummary};

const SERVICE: &str = "recipe-service";
const API_KEY_HEADER: &str = "X-API-Key";

pub struct HttpRecipeService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpRecipeService {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CollaboratorError> {
        let response = self
            .client
            .get(format!("{}/{path}", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl RecipeService for HttpRecipeService {
    async fn search_by_title(&self, title: &str) -> Result<Vec<Recipe>, CollaboratorError> {
        self.get_json("recipes", &[("title", title)]).await
    }

    async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, CollaboratorError> {
        self.get_json("recipes/search_by_ingredient", &[("ingredient", ingredient)])
            .await
    }

    async fn create(&self, recipe: &Recipe) -> Result<Recipe, CollaboratorError> {
        let response = self
            .client
            .post(format!("{}/recipes", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .json(recipe)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_by_title_sends_api_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes")
            .match_header("x-api-key", "secret")
            .match_query(Matcher::UrlEncoded("title".into(), "Суп".into()))
            .with_body(r#"[{"title": "Суп", "ingredients": []}]"#)
            .create_async()
            .await;

        let service = HttpRecipeService::new(server.url(), "secret");
        let recipes = service.search_by_title("Суп").await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Суп");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_by_ingredient_returns_summaries() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/search_by_ingredient")
            .match_header("x-api-key", "secret")
            .match_query(Matcher::UrlEncoded("ingredient".into(), "сахар".into()))
            .with_body(r#"[{"title": "Пирог"}, {"title": "Компот"}]"#)
            .create_async()
            .await;

        let service = HttpRecipeService::new(server.url(), "secret");
        let summaries = service.search_by_ingredient("сахар").await.unwrap();
        assert_eq!(
            summaries,
            vec![
                RecipeSummary {
                    title: "Пирог".into()
                },
                RecipeSummary {
                    title: "Компот".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_create_posts_recipe_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/recipes")
            .match_header("x-api-key", "secret")
            .match_body(Matcher::PartialJson(json!({
                "title": "Суп",
                "description": null,
                "prep_time_minutes": 30,
                "ingredients": [{"name": "Вода", "quantity": "1л"}],
            })))
            .with_body(r#"{"title": "Суп", "ingredients": [{"name": "Вода", "quantity": "1л"}]}"#)
            .create_async()
            .await;

        let recipe = Recipe {
            title: "Суп".into(),
            description: None,
            cuisine_type: Some("Русская".into()),
            meal_type: Some("Обед".into()),
            prep_time_minutes: Some(30),
            ingredients: vec![Ingredient {
                name: "Вода".into(),
                quantity: "1л".into(),
            }],
        };
        let service = HttpRecipeService::new(server.url(), "secret");
        let created = service.create(&recipe).await.unwrap();
        assert_eq!(created.title, "Суп");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let service = HttpRecipeService::new(server.url(), "secret");
        let err = service.search_by_title("Суп").await.unwrap_err();
        assert!(matches!(
            err,
            CollaboratorError::Status {
                service: "recipe-service",
                status: 500
            }
        ));
    }
}
