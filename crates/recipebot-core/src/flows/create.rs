//! Recipe form flow.
//!
//! Fills a draft slot by slot: title -> description -> cuisine ->
//! meal -> prep time -> ingredients -> submit. Invalid input
//! re-prompts in the same state without touching the draft.

use tracing::warn;

use crate::error::CollaboratorError;
use crate::flows::main_menu;
use crate::fsm::ChatState;
use crate::integrations::traits::{ChatTransport, OutgoingMessage, RecipeService};
use crate::session::Session;
use crate::types::RecipeDraft;
use crate::validate;

pub(crate) const CUISINE_OPTIONS: &[&str] = &[
    "Итальянская",
    "Русская",
    "Французская",
    "Японская",
    "Мексиканская",
    "Другое",
];

pub(crate) const MEAL_OPTIONS: &[&str] = &["Завтрак", "Обед", "Ужин", "Перекус", "Другое"];

/// The option that stores absence instead of its own label.
const OTHER_OPTION: &str = "Другое";

const DONE_LABEL: &str = "Готово";

fn options_keyboard(options: &[&str]) -> Vec<Vec<String>> {
    options.iter().map(|label| vec![label.to_string()]).collect()
}

fn draft_mut(session: &mut Session) -> &mut RecipeDraft {
    session.draft.get_or_insert_with(RecipeDraft::default)
}

pub(crate) async fn begin(
    chat_id: i64,
    session: &mut Session,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    session.begin_draft();
    transport
        .send(
            chat_id,
            OutgoingMessage::text("Введите название рецепта:").remove_keyboard(),
        )
        .await
}

pub(crate) async fn handle_title(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    if validate::contains_forbidden_content(text) {
        return transport
            .send(
                chat_id,
                OutgoingMessage::text(
                    "Название содержит недопустимые слова. Введите другое название:",
                ),
            )
            .await;
    }
    draft_mut(session).title = Some(text.trim().to_string());
    session.state = ChatState::CreatingDescription;
    transport
        .send(
            chat_id,
            OutgoingMessage::text("Введите описание рецепта (или 'нет'):"),
        )
        .await
}

pub(crate) async fn handle_description(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    let description = if text.trim().to_lowercase() == validate::NONE_TOKEN {
        None
    } else {
        Some(text.to_string())
    };
    draft_mut(session).description = description;
    session.state = ChatState::CreatingCuisine;
    transport
        .send(
            chat_id,
            OutgoingMessage::text("Выберите тип кухни:")
                .with_keyboard(options_keyboard(CUISINE_OPTIONS)),
        )
        .await
}

pub(crate) async fn handle_cuisine(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    // The keyboard is a convenience, not a validator: any text other
    // than the literal "Другое" is stored verbatim.
    let value = text.trim();
    draft_mut(session).cuisine_type =
        (value != OTHER_OPTION).then(|| value.to_string());
    session.state = ChatState::CreatingMeal;
    transport
        .send(
            chat_id,
            OutgoingMessage::text("Выберите тип приема пищи:")
                .with_keyboard(options_keyboard(MEAL_OPTIONS)),
        )
        .await
}

pub(crate) async fn handle_meal(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    let value = text.trim();
    draft_mut(session).meal_type = (value != OTHER_OPTION).then(|| value.to_string());
    session.state = ChatState::CreatingPrepTime;
    transport
        .send(
            chat_id,
            OutgoingMessage::text("Введите время приготовления в минутах или 'нет':")
                .remove_keyboard(),
        )
        .await
}

pub(crate) async fn handle_prep_time(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
) -> Result<(), CollaboratorError> {
    let minutes = match validate::parse_optional_int(text) {
        Ok(minutes) => minutes,
        Err(_) => {
            return transport
                .send(chat_id, OutgoingMessage::text("Введите число или 'нет':"))
                .await;
        }
    };
    draft_mut(session).prep_time_minutes = minutes;
    session.state = ChatState::CreatingIngredients;
    transport
        .send(
            chat_id,
            OutgoingMessage::text(
                "Введите ингредиенты в формате 'Название Количество', по одному в сообщении.\n\
                 Когда закончите, отправьте 'готово'.",
            ),
        )
        .await
}

pub(crate) async fn handle_ingredients(
    chat_id: i64,
    session: &mut Session,
    text: &str,
    transport: &dyn ChatTransport,
    recipes: &dyn RecipeService,
) -> Result<(), CollaboratorError> {
    if text.trim().to_lowercase() == validate::DONE_TOKEN {
        return submit(chat_id, session, transport, recipes).await;
    }

    let ingredient = match validate::parse_ingredient_line(text) {
        Ok(ingredient) => ingredient,
        Err(_) => {
            return transport
                .send(
                    chat_id,
                    OutgoingMessage::text(
                        "Неправильный формат. Введите название и количество через пробел.\n\
                         Например:\nМука 200г",
                    ),
                )
                .await;
        }
    };

    let name = ingredient.name.clone();
    draft_mut(session).ingredients.push(ingredient);
    transport
        .send(
            chat_id,
            OutgoingMessage::text(format!(
                "✅ Ингредиент '{name}' добавлен.\nДобавьте следующий или нажмите '{DONE_LABEL}'."
            ))
            .with_keyboard(vec![vec![DONE_LABEL.to_string()]]),
        )
        .await
}

async fn submit(
    chat_id: i64,
    session: &mut Session,
    transport: &dyn ChatTransport,
    recipes: &dyn RecipeService,
) -> Result<(), CollaboratorError> {
    let has_ingredients = session
        .draft
        .as_ref()
        .is_some_and(|draft| !draft.ingredients.is_empty());
    if !has_ingredients {
        return transport
            .send(
                chat_id,
                OutgoingMessage::text("Добавьте хотя бы один ингредиент."),
            )
            .await;
    }

    let recipe = session.draft.take().and_then(RecipeDraft::into_recipe);
    session.reset();
    let Some(recipe) = recipe else {
        return transport
            .send(
                chat_id,
                OutgoingMessage::text("Не удалось собрать рецепт. Начните заново.")
                    .with_keyboard(main_menu()),
            )
            .await;
    };

    // The draft is gone either way: a failed create is reported and
    // dropped, not kept for resubmission.
    match recipes.create(&recipe).await {
        Ok(created) => {
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text(format!(
                        "✅ Рецепт '{}' успешно создан!",
                        created.title
                    ))
                    .with_keyboard(main_menu()),
                )
                .await
        }
        Err(err) => {
            warn!(chat_id, error = %err, "recipe create failed");
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text("Ошибка при сохранении рецепта. Попробуйте позже.")
                        .with_keyboard(main_menu()),
                )
                .await
        }
    }
}
