//! The terminal storefront: cards, chat transcript and the REPL tying them
//! together.

pub mod card;
mod one_shot;
mod repl;
pub mod transcript;

pub use card::CardIntent;
pub use one_shot::ask_once;
pub use repl::{ReplCommand, StorefrontRepl};
