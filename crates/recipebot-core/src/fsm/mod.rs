mod engine;
mod event;
mod state;

pub use engine::{route, Route};
pub use event::{
    classify, EventKind, IncomingEvent, BTN_BY_INGREDIENT, BTN_CREATE, BTN_FIND, BTN_RANDOM,
};
pub use state::ChatState;
