//! Collaborator contracts.
//!
//! Every external service the core talks to sits behind one narrow
//! async trait, so flows can be exercised against in-memory doubles
//! and the HTTP clients tested against a local mock server.

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::types::{ExternalRecipe, Recipe, RecipeSummary};

/// Quick-reply keyboard attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Rows of button labels.
    Reply(Vec<Vec<String>>),
    /// Remove the currently shown keyboard.
    Remove,
}

/// One outbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    /// Render the text as rich (HTML) markup.
    pub html: bool,
    pub keyboard: Option<Keyboard>,
    /// When set, the message is sent as an image with `text` as its
    /// caption.
    pub photo_url: Option<String>,
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
            keyboard: None,
            photo_url: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            html: true,
            ..Self::text(text)
        }
    }

    pub fn with_keyboard(mut self, rows: Vec<Vec<String>>) -> Self {
        self.keyboard = Some(Keyboard::Reply(rows));
        self
    }

    pub fn remove_keyboard(mut self) -> Self {
        self.keyboard = Some(Keyboard::Remove);
        self
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}

/// Outbound side of the chat transport.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<(), CollaboratorError>;
}

/// The recipe storage service.
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn search_by_title(&self, title: &str) -> Result<Vec<Recipe>, CollaboratorError>;

    async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, CollaboratorError>;

    async fn create(&self, recipe: &Recipe) -> Result<Recipe, CollaboratorError>;
}

/// The translation service. Supports concurrent independent calls.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        dest: &str,
    ) -> Result<String, CollaboratorError>;
}

/// Source of one externally-curated random recipe.
#[async_trait]
pub trait RandomRecipeSource: Send + Sync {
    async fn fetch_random(&self) -> Result<ExternalRecipe, CollaboratorError>;
}
