//! Event dispatcher: the only component with outward dependencies.
//!
//! One `handle()` call per inbound event. The session cell's lock is
//! held for the whole read-validate-mutate-write cycle, so events from
//! the same user are processed in arrival order with mutual exclusion
//! while other users' events proceed concurrently.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::error::CollaboratorError;
use crate::flows;
use crate::fsm::{classify, route, IncomingEvent, Route};
use crate::integrations::traits::{
    ChatTransport, OutgoingMessage, RandomRecipeSource, RecipeService, Translator,
};
use crate::session::SessionStore;

const GREETING: &str = "👋 Привет! Я бот для создания и поиска рецептов.\n\nИспользуй кнопки внизу👇";

const HELP: &str = "ℹ️ <b>Доступные действия:</b>\n\n\
    🍳 Создать рецепт — введи данные по шагам\n\
    🔍 Найти рецепт — ищи по названию\n\
    🧂 Поиск по ингредиенту — подбор рецептов по продукту\n\
    🎲 Случайный рецепт — случайный рецепт с переводом\n\n\
    Воспользуйся кнопками внизу.";

const NOT_UNDERSTOOD: &str = "Я вас не понял.\n\nИспользуйте кнопки меню или вызовите /help.";

pub struct Dispatcher {
    pub(crate) store: SessionStore,
    transport: Arc<dyn ChatTransport>,
    recipes: Arc<dyn RecipeService>,
    translator: Arc<dyn Translator>,
    random: Arc<dyn RandomRecipeSource>,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        recipes: Arc<dyn RecipeService>,
        translator: Arc<dyn Translator>,
        random: Arc<dyn RandomRecipeSource>,
    ) -> Self {
        Self {
            store: SessionStore::new(),
            transport,
            recipes,
            translator,
            random,
        }
    }

    /// Handle one inbound event to completion: classify, route, run
    /// the flow handler, settle the next state. Only transport send
    /// failures propagate; collaborator failures are already answered
    /// to the user inside the flows.
    pub async fn handle(&self, event: IncomingEvent) -> Result<(), CollaboratorError> {
        let cell = self.store.entry(event.chat_id).await;
        let mut session = cell.lock().await;
        session.last_event_at = Utc::now();

        let kind = classify(&event.text);
        let selected = route(session.state, kind);
        debug!(chat_id = event.chat_id, state = ?session.state, route = ?selected, "dispatching");

        let chat_id = event.chat_id;
        let text = event.text.as_str();
        let transport = self.transport.as_ref();
        let recipes = self.recipes.as_ref();
        match selected {
            Route::Greet => {
                session.reset();
                transport
                    .send(
                        chat_id,
                        OutgoingMessage::text(GREETING).with_keyboard(flows::main_menu()),
                    )
                    .await
            }
            Route::Help => {
                transport
                    .send(
                        chat_id,
                        OutgoingMessage::html(HELP).with_keyboard(flows::main_menu()),
                    )
                    .await
            }
            Route::BeginCreate => flows::create::begin(chat_id, &mut session, transport).await,
            Route::BeginTitleSearch => {
                flows::search::begin_title_search(chat_id, &mut session, transport).await
            }
            Route::BeginIngredientSearch => {
                flows::search::begin_ingredient_search(chat_id, &mut session, transport).await
            }
            Route::RandomRecipe => {
                session.reset();
                flows::random::run(
                    chat_id,
                    transport,
                    self.random.as_ref(),
                    self.translator.as_ref(),
                )
                .await
            }
            Route::SearchTitle => {
                flows::search::handle_title_query(chat_id, &mut session, text, transport, recipes)
                    .await
            }
            Route::CreateTitle => {
                flows::create::handle_title(chat_id, &mut session, text, transport).await
            }
            Route::CreateDescription => {
                flows::create::handle_description(chat_id, &mut session, text, transport).await
            }
            Route::CreateCuisine => {
                flows::create::handle_cuisine(chat_id, &mut session, text, transport).await
            }
            Route::CreateMeal => {
                flows::create::handle_meal(chat_id, &mut session, text, transport).await
            }
            Route::CreatePrepTime => {
                flows::create::handle_prep_time(chat_id, &mut session, text, transport).await
            }
            Route::CreateIngredient => {
                flows::create::handle_ingredients(
                    chat_id,
                    &mut session,
                    text,
                    transport,
                    recipes,
                )
                .await
            }
            Route::IngredientQuery => {
                flows::search::handle_ingredient_query(
                    chat_id,
                    &mut session,
                    text,
                    transport,
                    recipes,
                )
                .await
            }
            Route::ChooseRecipe => {
                flows::search::handle_selection(chat_id, &mut session, text, transport, recipes)
                    .await
            }
            Route::Fallback => {
                transport
                    .send(
                        chat_id,
                        OutgoingMessage::text(NOT_UNDERSTOOD).with_keyboard(flows::main_menu()),
                    )
                    .await
            }
        }
    }
}
