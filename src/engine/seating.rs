// src/engine/seating.rs
//! Радиальная рассадка игроков вокруг банка.
//!
//! Движок геометрию не использует, но отдаёт её UI-слою через api,
//! чтобы раскладка была одинаковой у всех клиентов.

use serde::{Deserialize, Serialize};

/// Геометрия рассадки: банк в центре, игроки на окружности.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatingLayout {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

impl SeatingLayout {
    pub const fn new(center_x: i32, center_y: i32, radius: i32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Стандартная раскладка под окно 720×600.
    pub const fn standard() -> Self {
        Self {
            center_x: 270,
            center_y: 260,
            radius: 150,
        }
    }
}

impl Default for SeatingLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Углы мест в градусах по количеству игроков.
/// Первый зарегистрированный всегда сверху (270°).
fn seat_angles(count: usize) -> &'static [u32] {
    match count {
        1 => &[270],
        2 => &[270, 180],
        3 => &[270, 180, 90],
        4 => &[270, 180, 90, 0],
        _ => &[],
    }
}

/// Экранные позиции игроков вокруг банка, в порядке регистрации.
///
/// Ноль игроков — пустой список; счётчики больше 4 тоже дают пустой
/// список, таких в игре не бывает.
pub fn seat_positions(count: usize, layout: &SeatingLayout) -> Vec<(i32, i32)> {
    let mut positions = Vec::with_capacity(count);
    for &deg in seat_angles(count) {
        let rad = (deg as f64).to_radians();
        let x = layout.center_x + (layout.radius as f64 * rad.cos()) as i32;
        let y = layout.center_y + (layout.radius as f64 * rad.sin()) as i32;
        positions.push((x, y));
    }
    positions
}
