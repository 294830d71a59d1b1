//! Flow handlers: one module per user goal. Handlers run under the
//! session lock held by the dispatcher and perform all collaborator
//! calls for their step.

pub(crate) mod create;
pub(crate) mod random;
pub(crate) mod search;

use crate::fsm::{BTN_BY_INGREDIENT, BTN_CREATE, BTN_FIND, BTN_RANDOM};

/// The persistent main-menu keyboard.
pub(crate) fn main_menu() -> Vec<Vec<String>> {
    vec![
        vec![BTN_CREATE.to_string(), BTN_FIND.to_string()],
        vec![BTN_BY_INGREDIENT.to_string()],
        vec![BTN_RANDOM.to_string()],
    ]
}
