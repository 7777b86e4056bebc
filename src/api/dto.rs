use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::tokens::Tokens;
use crate::engine::RoundPhase;

/// DTO игрока в сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub name: String,
    pub balance: Tokens,
    /// Вытянутая карта текущего раунда, формат "Ah". None до раздачи.
    pub card: Option<String>,
    /// Она же с юникод-мастью, "A♥" — для отрисовки.
    pub card_pretty: Option<String>,
}

/// DTO всей сессии — то, что фронт рисует каждый кадр.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub target_count: Option<u8>,
    /// Фаза текущего (или последнего завершённого) раунда.
    pub phase: Option<RoundPhase>,
    pub round_running: bool,
    pub pot: Tokens,
    pub players: Vec<PlayerViewDto>,
    pub round_winner: Option<String>,
    /// Кто вылетел по итогам последнего раунда.
    pub last_eliminated: Vec<String>,
    pub game_over: bool,
    /// Победитель всей игры (когда game_over).
    pub final_winner: Option<String>,
    /// Состояния кнопок Start/Next, чтобы фронт их не пересчитывал.
    pub start_enabled: bool,
    pub next_round_enabled: bool,
}

/// Экранная позиция игрока вокруг банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPositionDto {
    pub x: i32,
    pub y: i32,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп. данных.
    Ok,

    /// Принята ли команда запуска первого раунда.
    StartAccepted(bool),

    /// Принята ли команда следующего раунда.
    NextRoundAccepted(bool),

    /// Обновлённое состояние сессии.
    SessionState(SessionViewDto),
}

/// Текст карты с юникод-символом масти: "Ah" → "A♥".
pub fn card_text_pretty(card: &Card) -> String {
    format!("{}{}", card.rank, card.suit.symbol())
}
