// src/time_ctrl/mod.rs
//! Контроль игрового времени: тики вместо wall-clock.
//!
//! Здесь собираем:
//! - правила (`TimingRules`, `TimingProfile`);
//! - таймер фазы (`PhaseClock`).
//!
//! Движок считает время исключительно в тиках: как часто дергать `tick()`,
//! решает вызывающая сторона (UI-цикл, CLI, тест).

pub mod clock;
pub mod time_rules;

pub use clock::PhaseClock;
pub use time_rules::{TimingProfile, TimingRules};
