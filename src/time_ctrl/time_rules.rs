// src/time_ctrl/time_rules.rs
//! Конфигурация тайминга фаз раунда.
//!
//! Здесь описываем только "правила", без состояния и без привязки к wall-clock.

use serde::{Deserialize, Serialize};

/// Профиль тайминга.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimingProfile {
    /// Стандартный темп UI: 2 секунды на фазу при 60 тиках в секунду.
    Standard,
    /// Мгновенные переходы: фаза завершается уже на следующем тике.
    /// Удобно для CLI-прогонов и тестов.
    Instant,
}

/// Правила тайминга: как долго каждая фаза раунда остаётся на экране.
///
/// Время меряем тиками; у вызывающей стороны один тик обычно равен
/// одному кадру отрисовки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingRules {
    /// Выдержка каждой фазы в секундах.
    pub dwell_secs: u64,
    /// Сколько тиков укладывается в одну секунду.
    pub ticks_per_sec: u64,
}

impl TimingRules {
    /// Строгий конструктор.
    pub const fn new(dwell_secs: u64, ticks_per_sec: u64) -> Self {
        Self {
            dwell_secs,
            ticks_per_sec,
        }
    }

    /// Стандартный профиль: 2 секунды на фазу, 60 тиков в секунду.
    pub const fn standard() -> Self {
        Self {
            dwell_secs: 2,
            ticks_per_sec: 60,
        }
    }

    /// Получить правила по профилю.
    pub const fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Standard => Self::standard(),
            TimingProfile::Instant => Self::new(0, 60),
        }
    }

    /// Порог выдержки фазы в тиках.
    pub const fn phase_dwell_ticks(&self) -> u64 {
        self.dwell_secs * self.ticks_per_sec
    }
}
