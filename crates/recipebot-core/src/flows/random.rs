//! Random recipe flow.
//!
//! Fetches one externally-sourced recipe, translates every text field
//! concurrently (all-succeed barrier, no partial rendering), and sends
//! the composed card -- as a photo caption when an image is available.
//! Long instructions are split into a primary part and one follow-up.

use futures::future::try_join_all;
use tracing::warn;

use crate::error::CollaboratorError;
use crate::flows::main_menu;
use crate::integrations::traits::{
    ChatTransport, OutgoingMessage, RandomRecipeSource, Translator,
};

/// Instructions longer than this are split after the last sentence
/// period at or before the threshold.
const INSTRUCTIONS_LIMIT: usize = 300;

const NO_MEASURE_PLACEHOLDER: &str = "по вкусу";

const SOURCE_LANG: &str = "en";
const DEST_LANG: &str = "ru";

pub(crate) async fn run(
    chat_id: i64,
    transport: &dyn ChatTransport,
    source: &dyn RandomRecipeSource,
    translator: &dyn Translator,
) -> Result<(), CollaboratorError> {
    match fetch_and_render(source, translator).await {
        Ok((primary, follow_up)) => {
            transport.send(chat_id, primary).await?;
            if let Some(message) = follow_up {
                transport.send(chat_id, message).await?;
            }
            Ok(())
        }
        Err(err) => {
            warn!(chat_id, error = %err, "random recipe flow failed");
            transport
                .send(
                    chat_id,
                    OutgoingMessage::text(
                        "Не удалось получить случайный рецепт. Попробуйте позже.",
                    )
                    .with_keyboard(main_menu()),
                )
                .await
        }
    }
}

async fn fetch_and_render(
    source: &dyn RandomRecipeSource,
    translator: &dyn Translator,
) -> Result<(OutgoingMessage, Option<OutgoingMessage>), CollaboratorError> {
    let recipe = source.fetch_random().await?;

    // Fan out every translatable field as an independent request and
    // wait for all of them; one failure fails the whole flow.
    let mut texts: Vec<&str> = vec![
        &recipe.name,
        &recipe.category,
        &recipe.area,
        &recipe.instructions,
    ];
    texts.extend(recipe.ingredients.iter().map(|i| i.name.as_str()));
    let translated = try_join_all(
        texts
            .iter()
            .map(|text| translator.translate(text, SOURCE_LANG, DEST_LANG)),
    )
    .await?;

    let mut body = format!(
        "🎲 <b>{}</b> ({})\nКухня: {}\nКатегория: {}\n\nИнгредиенты:\n",
        translated[0], recipe.name, translated[2], translated[1],
    );
    for (ingredient, translated_name) in recipe.ingredients.iter().zip(&translated[4..]) {
        let measure = ingredient
            .measure
            .as_deref()
            .unwrap_or(NO_MEASURE_PLACEHOLDER);
        body.push_str(&format!(
            "- {} ({}): {}\n",
            translated_name, ingredient.name, measure
        ));
    }

    let (head, tail) = split_instructions(&translated[3], INSTRUCTIONS_LIMIT);
    body.push_str("\nПриготовление:\n");
    body.push_str(&head);

    let mut primary = OutgoingMessage::html(body).with_keyboard(main_menu());
    if let Some(url) = &recipe.image_url {
        primary = primary.with_photo(url);
    }
    Ok((primary, tail.map(OutgoingMessage::text)))
}

/// Split `text` for the two-message rendering. Character-based so
/// Cyrillic output never splits inside a code point; the cut is
/// inclusive of the period.
fn split_instructions(text: &str, limit: usize) -> (String, Option<String>) {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= limit {
        return (text.to_string(), None);
    }
    let cut = chars[..limit]
        .iter()
        .rposition(|&c| c == '.')
        .map(|index| index + 1)
        .unwrap_or(limit);
    let head: String = chars[..cut].iter().collect();
    let tail: String = chars[cut..].iter().collect();
    (head, Some(tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_instructions_stay_whole() {
        let (head, tail) = split_instructions("Варить 10 минут.", 300);
        assert_eq!(head, "Варить 10 минут.");
        assert_eq!(tail, None);
    }

    #[test]
    fn test_split_at_last_period_before_limit() {
        // 450 chars, period at position 280: primary is the first 281
        // chars, follow-up the remaining 169.
        let text = format!("{}.{}", "а".repeat(280), "б".repeat(169));
        assert_eq!(text.chars().count(), 450);
        let (head, tail) = split_instructions(&text, 300);
        assert_eq!(head.chars().count(), 281);
        assert!(head.ends_with('.'));
        let tail = tail.unwrap();
        assert_eq!(tail.chars().count(), 169);
        assert!(!tail.contains('.'));
    }

    #[test]
    fn test_hard_cut_without_period() {
        let text = "б".repeat(450);
        let (head, tail) = split_instructions(&text, 300);
        assert_eq!(head.chars().count(), 300);
        assert_eq!(tail.unwrap().chars().count(), 150);
    }

    #[test]
    fn test_exact_limit_is_not_split() {
        let text = "в".repeat(300);
        let (head, tail) = split_instructions(&text, 300);
        assert_eq!(head.chars().count(), 300);
        assert_eq!(tail, None);
    }
}
