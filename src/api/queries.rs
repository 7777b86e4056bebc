use serde::{Deserialize, Serialize};

use crate::engine::{seat_positions, SeatingLayout, Session};

use super::dto::{card_text_pretty, PlayerViewDto, SeatPositionDto, SessionViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Снимок состояния сессии.
    GetSession,

    /// Экранные позиции игроков вокруг банка (стандартная раскладка).
    GetSeatPositions,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Session(SessionViewDto),
    SeatPositions(Vec<SeatPositionDto>),
}

/// Обработать запрос к сессии.
pub fn handle_query(session: &Session, query: Query) -> QueryResponse {
    match query {
        Query::GetSession => QueryResponse::Session(build_session_view(session)),

        Query::GetSeatPositions => {
            let layout = SeatingLayout::standard();
            let positions = seat_positions(session.ledger.player_count(), &layout)
                .into_iter()
                .map(|(x, y)| SeatPositionDto { x, y })
                .collect();
            QueryResponse::SeatPositions(positions)
        }
    }
}

/// Сформировать DTO сессии на основе `Session`.
pub fn build_session_view(session: &Session) -> SessionViewDto {
    let draws = session.draws();

    let players = session
        .ledger
        .players
        .iter()
        .map(|p| {
            let card = draws
                .iter()
                .find(|(name, _)| name == &p.name)
                .map(|(_, card)| card);

            PlayerViewDto {
                name: p.name.to_string(),
                balance: p.balance,
                card: card.map(|c| c.to_string()),
                card_pretty: card.map(card_text_pretty),
            }
        })
        .collect();

    SessionViewDto {
        target_count: session.target_count,
        phase: session.current_phase(),
        round_running: session.is_round_running(),
        pot: session.pot(),
        players,
        round_winner: session.round_winner().map(|w| w.to_string()),
        last_eliminated: session
            .last_eliminated
            .iter()
            .map(|n| n.to_string())
            .collect(),
        game_over: session.game_over,
        final_winner: session.final_winner().map(|w| w.to_string()),
        start_enabled: session.can_start(),
        next_round_enabled: session.can_request_next_round(),
    }
}
