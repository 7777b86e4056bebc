use thiserror::Error;

use crate::domain::ledger::LedgerError;

/// Ошибки движка.
///
/// Это нарушения контракта, а не игровые отказы: отказ регистрации идёт
/// отдельным типом (`RegistrationError`), а «нельзя стартовать сейчас»
/// выражается булевым ответом, как кнопка в UI.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Колода закончилась раньше времени")]
    EmptyDeck,

    #[error("Недопустимое количество игроков: {0} (ожидаем 2–4)")]
    InvalidPlayerCount(u8),

    #[error("Ошибка реестра: {0}")]
    Ledger(#[from] LedgerError),
}
