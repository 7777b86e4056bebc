// src/engine/session.rs

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::ledger::Ledger;
use crate::domain::player::{PlayerName, RegistrationError};
use crate::domain::tokens::Tokens;
use crate::engine::errors::EngineError;
use crate::engine::round::{RoundEngine, RoundPhase, RoundStatus};
use crate::engine::RandomSource;
use crate::time_ctrl::TimingRules;

/// Конфигурация сессии: стартовый баланс, анте, тайминг фаз.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    pub starting_balance: Tokens,
    pub ante: Tokens,
    pub timing: TimingRules,
}

impl SessionConfig {
    /// Стандартные правила: 20 жетонов на старте, анте 5, фаза 2 секунды.
    pub const fn standard() -> Self {
        Self {
            starting_balance: Tokens(20),
            ante: Tokens(5),
            timing: TimingRules::standard(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Контроллер игровой сессии:
/// - выбор количества игроков и регистрация;
/// - запуск раундов (первый и последующие);
/// - выбывание банкротов и фиксация конца игры.
///
/// Завершённый `RoundEngine` остаётся внутри до следующего раунда,
/// чтобы снаружи можно было читать карты и победителя.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub config: SessionConfig,
    /// Выбранное количество игроков (2–4). None, пока не выбрано.
    pub target_count: Option<u8>,
    pub ledger: Ledger,
    /// Текущий или последний завершённый раунд.
    pub round: Option<RoundEngine>,
    /// Кто вылетел по итогам последнего раунда.
    pub last_eliminated: Vec<PlayerName>,
    pub game_over: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            target_count: None,
            ledger: Ledger::new(),
            round: None,
            last_eliminated: Vec::new(),
            game_over: false,
        }
    }

    /// Выбрать количество игроков (2–4).
    ///
    /// Выбор — в том числе повторный — полностью сбрасывает регистрацию,
    /// банк, раунд, список выбывших и флаг конца игры.
    pub fn select_player_count(&mut self, count: u8) -> Result<(), EngineError> {
        if !(2..=4).contains(&count) {
            return Err(EngineError::InvalidPlayerCount(count));
        }

        self.target_count = Some(count);
        self.ledger = Ledger::new();
        self.round = None;
        self.last_eliminated.clear();
        self.game_over = false;
        Ok(())
    }

    /// Зарегистрировать игрока по «сырому» имени.
    ///
    /// Порядок проверок: формат → дубликат → вместимость.
    /// Пока количество игроков не выбрано, мест нет — CapacityReached.
    pub fn register_player(&mut self, raw_name: &str) -> Result<(), RegistrationError> {
        let name = PlayerName::parse(raw_name)?;
        let capacity = self.target_count.unwrap_or(0) as usize;
        self.ledger
            .register(name, self.config.starting_balance, capacity)
    }

    /// Доступна ли сейчас кнопка Start.
    ///
    /// Start запускает только первый раунд игры: как только раунд был,
    /// дальше работает Next (до reset или повторного выбора размера).
    /// Для игры на двоих нужно ровно два зарегистрированных; для игры
    /// на троих/четверых достаточно самого выбора.
    pub fn can_start(&self) -> bool {
        if self.game_over || self.round.is_some() {
            return false;
        }
        match self.target_count {
            Some(2) => self.ledger.player_count() == 2,
            Some(3) | Some(4) => true,
            _ => false,
        }
    }

    /// Запустить раунд. Возвращает, была ли команда принята.
    pub fn request_start<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        if !self.can_start() {
            return false;
        }
        self.begin_round(rng);
        true
    }

    /// Доступна ли кнопка Next (следующий раунд).
    pub fn can_request_next_round(&self) -> bool {
        if self.game_over {
            return false;
        }
        match &self.round {
            Some(round) => !round.running && round.phase == RoundPhase::Complete,
            None => false,
        }
    }

    /// Запустить следующий раунд после завершённого.
    /// Возвращает, была ли команда принята.
    pub fn request_next_round<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        if !self.can_request_next_round() {
            return false;
        }
        self.begin_round(rng);
        true
    }

    /// Один тик игрового времени.
    ///
    /// Вне раунда (и после конца игры) tick — пустая операция.
    /// После расчёта раунда запоминаем выбывших; если игрок остался
    /// один, сессия замораживается до reset/select.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        if self.game_over {
            return Ok(());
        }

        let round = match self.round.as_mut() {
            Some(r) if r.running => r,
            _ => return Ok(()),
        };

        let status = round.tick(&mut self.ledger, &self.config.timing, self.config.ante)?;

        if let RoundStatus::Settled(summary) = status {
            self.last_eliminated = summary.eliminated;
            if self.ledger.player_count() == 1 {
                self.game_over = true;
            }
        }

        Ok(())
    }

    /// Полный сброс к свежесозданной сессии. Конфигурация сохраняется,
    /// выбор количества игроков — нет.
    pub fn reset(&mut self) {
        *self = Session::new(self.config);
    }

    // ------------------------------------------------------------------
    // Запросы (read-only).
    // ------------------------------------------------------------------

    pub fn is_round_running(&self) -> bool {
        self.round.as_ref().map(|r| r.running).unwrap_or(false)
    }

    /// Фаза текущего (или последнего завершённого) раунда.
    pub fn current_phase(&self) -> Option<RoundPhase> {
        self.round.as_ref().map(|r| r.phase)
    }

    pub fn pot(&self) -> Tokens {
        self.ledger.pot
    }

    /// Вытянутые карты текущего раунда в порядке регистрации.
    pub fn draws(&self) -> &[(PlayerName, Card)] {
        match &self.round {
            Some(round) => &round.draws,
            None => &[],
        }
    }

    /// Победитель текущего раунда (известен после Resolve).
    pub fn round_winner(&self) -> Option<&PlayerName> {
        self.round.as_ref().and_then(|r| r.winner.as_ref())
    }

    /// Победитель всей игры — единственный оставшийся игрок.
    pub fn final_winner(&self) -> Option<&PlayerName> {
        if !self.game_over {
            return None;
        }
        self.ledger.players.first().map(|p| &p.name)
    }

    fn begin_round<R: RandomSource>(&mut self, rng: &mut R) {
        self.ledger.reset_pot();
        self.round = Some(RoundEngine::start(rng));
    }
}
