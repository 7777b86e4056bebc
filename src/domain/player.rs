use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::tokens::Tokens;

/// Отказы регистрации. Возвращаются вызывающему как значение,
/// состояние реестра при отказе не меняется.
#[derive(Clone, Copy, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Player name failed validation")]
    InvalidFormat,

    #[error("Player with this name is already registered")]
    DuplicateName,

    #[error("No free seats left")]
    CapacityReached,
}

/// Имя игрока — одновременно его идентификатор в реестре.
///
/// Снаружи приходит произвольная строка, внутрь пускаем только то,
/// что прошло `PlayerName::parse`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerName(String);

impl PlayerName {
    /// Валидация и нормализация имени:
    /// - пробелы по краям срезаются;
    /// - после обрезки длина не меньше 2 символов;
    /// - имя не состоит из одних цифр;
    /// - есть хотя бы одна буква;
    /// - допустимы только латинские буквы, пробел, дефис и апостроф.
    pub fn parse(raw: &str) -> Result<Self, RegistrationError> {
        let name = raw.trim();

        if name.chars().count() < 2 {
            return Err(RegistrationError::InvalidFormat);
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return Err(RegistrationError::InvalidFormat);
        }
        if !name.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(RegistrationError::InvalidFormat);
        }

        let allowed =
            |c: char| c.is_ascii_alphabetic() || c == ' ' || c == '-' || c == '\'';
        if !name.chars().all(allowed) {
            return Err(RegistrationError::InvalidFormat);
        }

        Ok(PlayerName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayerName {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerName::parse(s)
    }
}

/// Игрок в реестре: имя и текущий баланс жетонов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: PlayerName,
    pub balance: Tokens,
}

impl Player {
    pub fn new(name: PlayerName, balance: Tokens) -> Self {
        Self { name, balance }
    }

    pub fn is_bankrupt(&self) -> bool {
        self.balance.is_zero()
    }
}
