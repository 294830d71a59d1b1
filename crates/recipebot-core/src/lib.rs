//! # Recipebot Core Library
//!
//! Core business logic for Recipebot, a conversational front end for
//! creating, searching and browsing cooking recipes over a chat
//! transport. The CLI binary is a thin wiring layer over this crate.
//!
//! ## Architecture
//!
//! - **Session Store**: one in-memory session per user, each behind
//!   its own lock so a user's events are handled strictly in order
//!   while different users proceed concurrently
//! - **State Machine Engine**: a pure `(state, event kind) -> route`
//!   lookup; flows perform the side effects the route names
//! - **Flows**: recipe form, title/ingredient search, translated
//!   random recipe
//! - **Integrations**: narrow async traits over the chat transport,
//!   the recipe storage service, the translation service and the
//!   random-recipe source, with reqwest implementations
//!
//! ## Key Components
//!
//! - [`Dispatcher`]: entry point for inbound events
//! - [`SessionStore`]: per-user conversational state
//! - [`ChatState`]: the closed set of conversational states
//! - [`Config`]: process configuration loaded at startup

pub mod config;
pub mod dispatcher;
pub mod error;
mod flows;
pub mod fsm;
pub mod integrations;
pub mod session;
pub mod types;
pub mod validate;


pub use config::Config;
pub use dispatcher::Dispatcher;
pub use error::{CollaboratorError, ConfigError, CoreError, ValidationError};
pub use fsm::{ChatState, EventKind, IncomingEvent};
pub use integrations::{
    ChatTransport, HttpRecipeService, MealDbClient, MyMemoryTranslator, OutgoingMessage,
    RandomRecipeSource, RecipeService, TelegramTransport, Translator,
};
pub use session::{Session, SessionStore};
pub use types::{ExternalRecipe, Ingredient, Recipe, RecipeDraft, RecipeSummary};
