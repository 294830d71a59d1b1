//! Transition lookup.
//!
//! Purely a table: `(state, event kind) -> route`. No I/O happens
//! here; the dispatcher runs the flow handler the route names.
//!
//! ```text
//! global:  /start, /find, menu buttons  ->  reset + flow entry
//!          /help                        ->  answer in place
//! by state: free text                   ->  the state's handler
//! fallback: anything unmatched          ->  "not understood"
//! ```

use super::event::EventKind;
use super::state::ChatState;

/// The handler a routed event resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Reset, greet, show the main menu.
    Greet,
    /// Answer the help text; state untouched.
    Help,
    /// Reset, prompt for a title query.
    BeginTitleSearch,
    /// Reset, open a fresh draft, prompt for the title.
    BeginCreate,
    /// Reset, prompt for an ingredient query.
    BeginIngredientSearch,
    /// Reset, fetch + translate + render one random recipe.
    RandomRecipe,
    /// Free text in `AwaitingSearchTitle`.
    SearchTitle,
    CreateTitle,
    CreateDescription,
    CreateCuisine,
    CreateMeal,
    CreatePrepTime,
    CreateIngredient,
    /// Free text in `AwaitingIngredientQuery`.
    IngredientQuery,
    /// Free text in `ChoosingFromIngredientResults`.
    ChooseRecipe,
    /// Nothing matched; generic notice, state untouched.
    Fallback,
}

/// Resolve an event against the current state. Global transitions win
/// over state-keyed ones; free text in `Idle` has no handler.
pub fn route(state: ChatState, kind: EventKind) -> Route {
    match kind {
        EventKind::Start => Route::Greet,
        EventKind::Help => Route::Help,
        EventKind::Find | EventKind::MenuFindTitle => Route::BeginTitleSearch,
        EventKind::MenuCreate => Route::BeginCreate,
        EventKind::MenuFindIngredient => Route::BeginIngredientSearch,
        EventKind::Random | EventKind::MenuRandom => Route::RandomRecipe,
        EventKind::Text => match state {
            ChatState::AwaitingSearchTitle => Route::SearchTitle,
            ChatState::CreatingTitle => Route::CreateTitle,
            ChatState::CreatingDescription => Route::CreateDescription,
            ChatState::CreatingCuisine => Route::CreateCuisine,
            ChatState::CreatingMeal => Route::CreateMeal,
            ChatState::CreatingPrepTime => Route::CreatePrepTime,
            ChatState::CreatingIngredients => Route::CreateIngredient,
            ChatState::AwaitingIngredientQuery => Route::IngredientQuery,
            ChatState::ChoosingFromIngredientResults => Route::ChooseRecipe,
            ChatState::Idle => Route::Fallback,
        },
    }
}
