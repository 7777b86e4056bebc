//! Игровой движок: раунды, контроль сессии, рассадка.
//!
//! Высокоуровневый объект: `Session`
//! Основные операции:
//!   - `select_player_count` – выбрать размер игры (2–4)
//!   - `register_player` – добавить игрока
//!   - `request_start` / `request_next_round` – запустить раунд
//!   - `tick` – продвинуть игровое время на один тик

pub mod errors;
pub mod round;
pub mod seating;
pub mod session;

pub use errors::EngineError;
pub use round::{RoundEngine, RoundPhase, RoundStatus, RoundSummary};
pub use seating::{seat_positions, SeatingLayout};
pub use session::{Session, SessionConfig};

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
