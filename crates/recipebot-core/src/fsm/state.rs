//! Conversational states.

use serde::{Deserialize, Serialize};

/// Where a session currently is in its multi-step interaction.
///
/// One closed enumeration for every flow; no ad hoc string states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    Idle,
    /// Waiting for a title-search query.
    AwaitingSearchTitle,
    CreatingTitle,
    CreatingDescription,
    CreatingCuisine,
    CreatingMeal,
    CreatingPrepTime,
    CreatingIngredients,
    /// Waiting for an ingredient-search query.
    AwaitingIngredientQuery,
    /// Waiting for the user to pick one of the presented titles.
    ChoosingFromIngredientResults,
}

impl ChatState {
    /// States of the recipe form flow. A session carries a draft
    /// exactly while it is in one of these.
    pub fn in_create_flow(self) -> bool {
        matches!(
            self,
            ChatState::CreatingTitle
                | ChatState::CreatingDescription
                | ChatState::CreatingCuisine
                | ChatState::CreatingMeal
                | ChatState::CreatingPrepTime
                | ChatState::CreatingIngredients
        )
    }

    /// Every state, for exhaustive transition tests.
    pub const ALL: [ChatState; 10] = [
        ChatState::Idle,
        ChatState::AwaitingSearchTitle,
        ChatState::CreatingTitle,
        ChatState::CreatingDescription,
        ChatState::CreatingCuisine,
        ChatState::CreatingMeal,
        ChatState::CreatingPrepTime,
        ChatState::CreatingIngredients,
        ChatState::AwaitingIngredientQuery,
        ChatState::ChoosingFromIngredientResults,
    ];
}
