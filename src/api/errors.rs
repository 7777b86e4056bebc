use serde::{Deserialize, Serialize};

use crate::domain::player::RegistrationError;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Отказ регистрации: формат имени, дубликат или нет мест.
    /// Состояние сессии при этом не изменилось.
    Registration(RegistrationError),

    /// Ошибка движка (нарушение контракта вызова).
    Engine(String),
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        ApiError::Registration(err)
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err.to_string())
    }
}
