//! Incoming event classification.
//!
//! The chat transport delivers one text event with sender identity;
//! classification decides whether it is a named command, a known menu
//! button, or free text for the current state's handler.

/// One inbound text event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingEvent {
    pub chat_id: i64,
    pub text: String,
}

/// Main-menu button labels, as rendered on the reply keyboard.
pub const BTN_CREATE: &str = "🍳 Создать рецепт";
pub const BTN_FIND: &str = "🔍 Найти рецепт";
pub const BTN_BY_INGREDIENT: &str = "🧂 Поиск по ингредиенту";
pub const BTN_RANDOM: &str = "🎲 Случайный рецепт";

/// What kind of input an event is, before any state is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/find`
    Find,
    /// `/random`
    Random,
    MenuCreate,
    MenuFindTitle,
    MenuFindIngredient,
    MenuRandom,
    /// Anything else; meaning depends on the session state.
    Text,
}

/// Classify one inbound text. Commands are matched on their first
/// token (a `@botname` suffix is tolerated); button labels are matched
/// case-insensitively, like the original keyboard handlers.
pub fn classify(text: &str) -> EventKind {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix('/') {
        let command = rest
            .split_whitespace()
            .next()
            .unwrap_or("")
            .split('@')
            .next()
            .unwrap_or("");
        return match command {
            "start" => EventKind::Start,
            "help" => EventKind::Help,
            "find" => EventKind::Find,
            "random" => EventKind::Random,
            _ => EventKind::Text,
        };
    }

    let lower = trimmed.to_lowercase();
    if lower == BTN_CREATE.to_lowercase() {
        EventKind::MenuCreate
    } else if lower == BTN_FIND.to_lowercase() {
        EventKind::MenuFindTitle
    } else if lower == BTN_BY_INGREDIENT.to_lowercase() {
        EventKind::MenuFindIngredient
    } else if lower == BTN_RANDOM.to_lowercase() {
        EventKind::MenuRandom
    } else {
        EventKind::Text
    }
}
