//! Search flows: by title, by ingredient with selection.
//!
//! Selection deliberately re-resolves the chosen title through the
//! title-lookup operation; `pending_results` is only a rendering aid
//! for the keyboard, never an authoritative source of recipe fields.

use tracing::warn;

use crate::error::CollaboratorError;
use crate::flows::main_menu;
use crate::fsm::ChatState;
use crate::integrations::traits::{ChatTransport, OutgoingMessage, RecipeService};
use crate::session::Session;
use crate::types::Recipe;

/// Full HTML card for one recipe, absent optional fields rendered as
/// "нет", ingredients one per line.
pub(crate) fn recipe_card(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("- {}: {}", ingredient.name, ingredient.quantity))
        .collect::<Vec<_>>()
        .join("\n");
    let prep_time = recipe
        .prep_time_minutes
        .map(|minutes| minutes.to_string())
        .unwrap_or_else(|| "нет".to_string());
    format!(
        "🍽️ <b>{}</b>\n\
         Описание: {}\n\
         Тип кухни: {}\n\
         Прием пищи: {}\n\
         Время приготовления: {} мин.\n\
         Ингредиенты:\n{}",
        recipe.title,
        recipe.description.as_deref().unwrap_or("нет"),
        recipe.cuisine_type.as_deref().unwrap_or("нет"),
        recipe.meal_type.as_deref().unwrap_or("нет"),
        prep_time,
        ingredients,
    )
}

pub(crate) async fn begin_title_search(
    chat_id: i64,
    session: &mut Session,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    session.reset();
    session.state = ChatState::AwaitingSearchTitle;
    transport
        .send(
            chat_id,
            OutgoingMessage::text("Введите название рецепта для поиска:").remove_keyboard(),
        )
        .await
}

pub(crate) async fn handle_title_query(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
    recipes: &dyn RecipeService,
) -> Result<(), CollaboratorError> {
    let result = recipes.search_by_title(text.trim()).await;
    session.reset();
    match result {
        Err(err) => {
            warn!(chat_id, error = %err, "title search failed");
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("Ошибка при запросе. Попробуйте позже.")
                        .with_keyboard(main_menu()),
                )
                .await
        }
        Ok(found) if found.is_empty() => {
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("❌ Рецепты не найдены.").with_keyboard(main_menu()),
                )
                .await
        }
        Ok(found) => {
            for recipe in &found {
                transport
                    .send(chat_id, OutgoingMessage::html(recipe_card(recipe)))
                    .await?;
            }
            Ok(())
        }
    }
}

pub(crate) async fn begin_ingredient_search(
    chat_id: i64,
    session: &mut Session,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    session.reset();
    session.state = ChatState::AwaitingIngredientQuery;
    transport
        .send(
            chat_id,
            OutgoingMessage::text("Введите ингредиент для поиска рецептов:").remove_keyboard(),
        )
        .await
}

pub(crate) async fn handle_ingredient_query(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
    recipes: &dyn RecipeService,
) -> Result<(), CollaboratorError> {
    let result = recipes.search_by_ingredient(text.trim()).await;
    match result {
        Err(err) => {
            warn!(chat_id, error = %err, "ingredient search failed");
            session.reset();
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("Ошибка при запросе. Попробуйте позже.")
                        .with_keyboard(main_menu()),
                )
                .await
        }
        Ok(found) if found.is_empty() => {
            session.reset();
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("❌ Рецепты не найдены по такому ингредиенту.")
                        .with_keyboard(main_menu()),
                )
                .await
        }
        Ok(found) => {
            let rows = found
                .iter()
                .map(|summary| vec![summary.title.clone()])
                .collect();
            session.pending_results = found;
            session.state = ChatState::ChoosingFromIngredientResults;
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("Выберите рецепт из найденных:").with_keyboard(rows),
                )
                .await
        }
    }
}

pub(crate) async fn handle_selection(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
    recipes: &dyn RecipeService,
) -> Result<(), CollaboratorError> {
    let result = recipes.search_by_title(text.trim()).await;
    session.reset();
    match result {
        Err(err) => {
            warn!(chat_id, error = %err, "selection lookup failed");
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("❌ Ошибка при получении рецепта.")
                        .with_keyboard(main_menu()),
                )
                .await
        }
        Ok(found) if found.is_empty() => {
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("❌ Рецепты не найдены.").with_keyboard(main_menu()),
                )
                .await
        }
        Ok(found) => {
            let cards = found
                .iter()
                .map(recipe_card)
                .collect::<Vec<_>>()
                .join("\n\n");
            transport
                .send(
                    chat_id,
                    OutgoingMessage::html(cards).with_keyboard(main_menu()),
                )
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;

    #[test]
    fn test_recipe_card_full() {
        let recipe = Recipe {
            title: "Суп".into(),
            description: Some("Лёгкий".into()),
            cuisine_type: Some("Русская".into()),
            meal_type: Some("Обед".into()),
            prep_time_minutes: Some(30),
            ingredients: vec![
                Ingredient {
                    name: "Вода".into(),
                    quantity: "1л".into(),
                },
                Ingredient {
                    name: "Соль".into(),
                    quantity: "10г".into(),
                },
            ],
        };
        let card = recipe_card(&recipe);
        assert!(card.starts_with("🍽️ <b>Суп</b>"));
        assert!(card.contains("Описание: Лёгкий"));
        assert!(card.contains("Время приготовления: 30 мин."));
        assert!(card.contains("- Вода: 1л\n- Соль: 10г"));
    }

    #[test]
    fn test_recipe_card_placeholders() {
        let recipe = Recipe {
            title: "Суп".into(),
            description: None,
            cuisine_type: None,
            meal_type: None,
            prep_time_minutes: None,
            ingredients: vec![],
        };
        let card = recipe_card(&recipe);
        assert!(card.contains("Описание: нет"));
        assert!(card.contains("Тип кухни: нет"));
        assert!(card.contains("Прием пищи: нет"));
        assert!(card.contains("Время приготовления: нет мин."));
    }
}
