//! Движок карточной игры "high card draw": игроки вносят анте в общий
//! банк, каждый тянет одну карту, старшая карта забирает банк; банкроты
//! выбывают, пока не останется один.
//!
//! Библиотека ничего не знает про рендеринг и ввод: UI-слой работает
//! через `api::Command` / `api::Query`, а игровое время продвигает
//! тиками (`Command::Tick`), без wall-clock внутри движка.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod time_ctrl;

pub use api::{apply_command, handle_query, Command, Query, QueryResponse};
pub use engine::{EngineError, RandomSource, Session, SessionConfig};
