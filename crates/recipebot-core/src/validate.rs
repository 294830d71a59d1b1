//! Free-text input validation and content filtering.
//!
//! Pure functions only. Every rejection maps to a corrective re-prompt
//! in the calling flow; nothing here touches session state.

use crate::error::ValidationError;
use crate::types::Ingredient;

/// Literal token the user sends for "no value" in optional slots.
pub const NONE_TOKEN: &str = "нет";

/// Literal token that finishes ingredient accumulation.
pub const DONE_TOKEN: &str = "готово";

/// Denylisted roots for the title filter. Matched case-insensitively
/// as substrings.
const FORBIDDEN_TERMS: &[&str] = &["хуй", "пизд", "ебан", "ебат", "бляд", "мудак", "сука"];

/// Split an ingredient line on the first whitespace run into
/// `(name, quantity)`. The quantity keeps its interior spaces
/// ("Мука 200 г" -> name "Мука", quantity "200 г").
pub fn parse_ingredient_line(text: &str) -> Result<Ingredient, ValidationError> {
    let trimmed = text.trim();
    let split_at = trimmed
        .find(char::is_whitespace)
        .ok_or(ValidationError::InvalidFormat)?;
    let name = &trimmed[..split_at];
    let quantity = trimmed[split_at..].trim_start();
    if quantity.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(Ingredient {
        name: name.to_string(),
        quantity: quantity.to_string(),
    })
}

/// Parse an optional non-negative integer slot.
///
/// The literal "нет" (any case) means "no value". All-digit text
/// parses as the value; anything else is rejected.
pub fn parse_optional_int(text: &str) -> Result<Option<u32>, ValidationError> {
    let trimmed = text.trim();
    if trimmed.to_lowercase() == NONE_TOKEN {
        return Ok(None);
    }
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidNumber);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber)
}

/// Case-insensitive substring match against the denylist. Gates the
/// title slot during recipe creation.
pub fn contains_forbidden_content(text: &str) -> bool {
    let lower = text.to_lowercase();
    FORBIDDEN_TERMS.iter().any(|term| lower.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ingredient_line_basic() {
        let ing = parse_ingredient_line("Вода 1л").unwrap();
        assert_eq!(ing.name, "Вода");
        assert_eq!(ing.quantity, "1л");
    }

    #[test]
    fn test_ingredient_line_quantity_keeps_spaces() {
        let ing = parse_ingredient_line("Мука 200 г").unwrap();
        assert_eq!(ing.name, "Мука");
        assert_eq!(ing.quantity, "200 г");
    }

    #[test]
    fn test_ingredient_line_single_token_rejected() {
        assert_eq!(
            parse_ingredient_line("Мука"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            parse_ingredient_line("  Мука  "),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            parse_ingredient_line(""),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_optional_int_none_token() {
        assert_eq!(parse_optional_int("нет"), Ok(None));
        assert_eq!(parse_optional_int("НЕТ"), Ok(None));
        assert_eq!(parse_optional_int("  Нет "), Ok(None));
    }

    #[test]
    fn test_optional_int_digits() {
        assert_eq!(parse_optional_int("45"), Ok(Some(45)));
        assert_eq!(parse_optional_int("0"), Ok(Some(0)));
    }

    #[test]
    fn test_optional_int_rejects_non_digits() {
        assert_eq!(parse_optional_int("abc"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_optional_int("-5"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_optional_int("4.5"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_optional_int(""), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn test_optional_int_rejects_overflow() {
        assert_eq!(
            parse_optional_int("99999999999999999999"),
            Err(ValidationError::InvalidNumber)
        );
    }

    #[test]
    fn test_forbidden_content_case_insensitive() {
        assert!(contains_forbidden_content("СУКА какая"));
        assert!(contains_forbidden_content("недосука"));
        assert!(!contains_forbidden_content("Борщ украинский"));
        assert!(!contains_forbidden_content(""));
    }

    proptest! {
        // Any name without whitespace plus any non-blank quantity must
        // round-trip through the line parser.
        #[test]
        fn prop_ingredient_line_roundtrip(
            name in "[а-яА-Яa-zA-Z]{1,12}",
            quantity in "[0-9]{1,4}(г| мл| шт)?",
        ) {
            let ing = parse_ingredient_line(&format!("{name} {quantity}")).unwrap();
            prop_assert_eq!(ing.name, name);
            prop_assert_eq!(ing.quantity, quantity);
        }

        #[test]
        fn prop_optional_int_never_panics(s in ".{0,24}") {
            let _ = parse_optional_int(&s);
        }
    }
}
