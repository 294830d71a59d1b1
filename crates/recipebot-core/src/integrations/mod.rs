//! External collaborators: one module per service, one narrow trait
//! per concern.

pub mod mealdb;
pub mod recipe_api;
pub mod telegram;
pub mod traits;
pub mod translate;

pub use mealdb::MealDbClient;
pub use recipe_api::HttpRecipeService;
pub use telegram::{TelegramTransport, Update};
pub use traits::{
    ChatTransport, Keyboard, OutgoingMessage, RandomRecipeSource, RecipeService, Translator,
};
pub use translate::MyMemoryTranslator;
