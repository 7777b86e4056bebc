//! Доменная модель игры: карты, колода, жетоны, игроки, реестр.

pub mod card;
pub mod deck;
pub mod ledger;
pub mod player;
pub mod tokens;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use ledger::*;
pub use player::*;
pub use tokens::*;
