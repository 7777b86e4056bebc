// src/time_ctrl/clock.rs
//! Счётчик тиков текущей фазы раунда.

use serde::{Deserialize, Serialize};

use super::TimingRules;

/// Таймер фазы: монотонный счётчик тиков с момента входа в фазу.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseClock {
    /// Сколько тиков прошло в текущей фазе.
    pub elapsed_ticks: u64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self { elapsed_ticks: 0 }
    }

    /// Засчитать один тик.
    pub fn tick(&mut self) {
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
    }

    /// Сбросить счётчик (вызывается при входе в новую фазу).
    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
    }

    /// Истекла ли выдержка фазы.
    ///
    /// Переход разрешён строго ПОСЛЕ порога: на пороговом тике фаза ещё
    /// держится, на следующем — переключается.
    pub fn is_elapsed(&self, rules: &TimingRules) -> bool {
        self.elapsed_ticks > rules.phase_dwell_ticks()
    }
}
