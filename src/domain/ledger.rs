use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::player::{Player, PlayerName, RegistrationError};
use crate::domain::tokens::Tokens;

/// Ошибки реестра. Возникают только при нарушении контракта вызова
/// (движок спрашивает про игрока, которого в реестре нет).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Player '{0}' is not registered")]
    UnknownPlayer(PlayerName),
}

/// Реестр игроков и общий банк.
///
/// Порядок в `players` = порядок регистрации; он же порядок раздачи карт
/// и порядок удаления банкротов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    pub players: Vec<Player>,
    pub pot: Tokens,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            pot: Tokens::ZERO,
        }
    }

    /// Зарегистрировать игрока со стартовым балансом.
    ///
    /// Порядок проверок: дубликат → вместимость. Формат имени проверяет
    /// `PlayerName::parse` до вызова. При отказе реестр не меняется.
    pub fn register(
        &mut self,
        name: PlayerName,
        starting_balance: Tokens,
        capacity: usize,
    ) -> Result<(), RegistrationError> {
        if self.players.iter().any(|p| p.name == name) {
            return Err(RegistrationError::DuplicateName);
        }
        if self.players.len() >= capacity {
            return Err(RegistrationError::CapacityReached);
        }

        self.players.push(Player::new(name, starting_balance));
        Ok(())
    }

    /// Собрать анте со всех, кому хватает жетонов.
    ///
    /// Игроков с балансом меньше анте пропускаем молча — это единственное
    /// намеренно «тихое» поведение во всём движке: ни принудительного
    /// олл-ина, ни выбывания на анте нет.
    pub fn take_antes(&mut self, ante: Tokens) {
        for player in &mut self.players {
            if player.balance >= ante {
                player.balance -= ante;
                self.pot += ante;
            }
        }
    }

    /// Отдать весь банк победителю, банк обнуляется.
    pub fn award_pot(&mut self, winner: &PlayerName) -> Result<(), LedgerError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| &p.name == winner)
            .ok_or_else(|| LedgerError::UnknownPlayer(winner.clone()))?;

        player.balance += self.pot;
        self.pot = Tokens::ZERO;
        Ok(())
    }

    /// Убрать банкротов в порядке регистрации.
    /// Возвращает имена удалённых (возможно, пустой список).
    pub fn remove_bankrupt(&mut self) -> Vec<PlayerName> {
        let mut removed = Vec::new();
        self.players.retain(|p| {
            if p.is_bankrupt() {
                removed.push(p.name.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn reset_pot(&mut self) {
        self.pot = Tokens::ZERO;
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_registered(&self, name: &PlayerName) -> bool {
        self.players.iter().any(|p| &p.name == name)
    }

    /// Имена игроков в порядке регистрации.
    pub fn player_names(&self) -> Vec<PlayerName> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn balance_of(&self, name: &PlayerName) -> Option<Tokens> {
        self.players
            .iter()
            .find(|p| &p.name == name)
            .map(|p| p.balance)
    }

    /// Суммарное количество жетонов в системе (балансы + банк).
    /// Анте и выплата банка эту сумму не меняют.
    pub fn total_tokens(&self) -> Tokens {
        let mut total = self.pot;
        for player in &self.players {
            total += player.balance;
        }
        total
    }
}
