//! Input normalization and command interpretation.

mod command;
mod normalize;

pub use command::{Action, Trigger, parse_command};
pub use normalize::{contains_keyword, contains_word, normalize};
