//! Recipe data model.
//!
//! `Recipe` and `Ingredient` mirror the storage service's JSON wire
//! format (snake_case field names). `RecipeDraft` is the mutable
//! accumulator the form flow fills one slot per turn; it converts to a
//! `Recipe` only when the required slots are present.

use serde::{Deserialize, Serialize};

/// One ingredient of a stored recipe. `quantity` is unit-agnostic
/// free text ("200г", "1л", "по вкусу").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

/// A stored recipe as the storage service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Listing subset returned by ingredient search. Only used to build
/// the selection keyboard -- the full recipe is re-fetched by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub title: String,
}

/// A recipe under construction, one slot per conversation turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub meal_type: Option<String>,
    pub prep_time_minutes: Option<u32>,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDraft {
    /// Finish the draft. Returns `None` while the title is missing or
    /// the ingredient list is empty -- both are required to submit.
    pub fn into_recipe(self) -> Option<Recipe> {
        let title = self.title?;
        if self.ingredients.is_empty() {
            return None;
        }
        Some(Recipe {
            title,
            description: self.description,
            cuisine_type: self.cuisine_type,
            meal_type: self.meal_type,
            prep_time_minutes: self.prep_time_minutes,
            ingredients: self.ingredients,
        })
    }
}

/// One ingredient/measure pair of an externally sourced recipe.
/// The measure is free text and frequently absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIngredient {
    pub name: String,
    pub measure: Option<String>,
}

/// A random recipe record from the external source, English-language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRecipe {
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub ingredients: Vec<ExternalIngredient>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(title: Option<&str>, ingredients: Vec<Ingredient>) -> RecipeDraft {
        RecipeDraft {
            title: title.map(String::from),
            ingredients,
            ..RecipeDraft::default()
        }
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = draft_with(
            None,
            vec![Ingredient {
                name: "Вода".into(),
                quantity: "1л".into(),
            }],
        );
        assert!(draft.into_recipe().is_none());
    }

    #[test]
    fn test_draft_requires_ingredients() {
        let draft = draft_with(Some("Суп"), vec![]);
        assert!(draft.into_recipe().is_none());
    }

    #[test]
    fn test_draft_converts_when_complete() {
        let draft = draft_with(
            Some("Суп"),
            vec![Ingredient {
                name: "Вода".into(),
                quantity: "1л".into(),
            }],
        );
        let recipe = draft.into_recipe().unwrap();
        assert_eq!(recipe.title, "Суп");
        assert_eq!(recipe.ingredients.len(), 1);
        assert!(recipe.description.is_none());
    }

    #[test]
    fn test_recipe_wire_format() {
        let json = r#"{
            "title": "Суп",
            "description": null,
            "cuisine_type": "Русская",
            "prep_time_minutes": 30,
            "ingredients": [{"name": "Вода", "quantity": "1л"}]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Суп");
        assert_eq!(recipe.cuisine_type.as_deref(), Some("Русская"));
        assert!(recipe.meal_type.is_none());
        assert_eq!(recipe.prep_time_minutes, Some(30));
        assert_eq!(recipe.ingredients[0].name, "Вода");
    }
}
