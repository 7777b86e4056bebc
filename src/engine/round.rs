use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::ledger::Ledger;
use crate::domain::player::PlayerName;
use crate::domain::tokens::Tokens;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::time_ctrl::{PhaseClock, TimingRules};

/// Фаза раунда. Последовательность линейная, без ветвлений:
/// Shuffle → Ante → Draw → Resolve → Settle → Complete.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    Shuffle,
    Ante,
    Draw,
    Resolve,
    Settle,
    /// Раунд завершён: банк выплачен, банкроты убраны.
    /// Карты и победитель остаются читаемыми до следующего раунда.
    Complete,
}

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    Settled(RoundSummary),
}

/// Итог раунда: кто выиграл, сколько забрал, кто вылетел.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    /// None возможен только для раунда без единого вытянувшего карту.
    pub winner: Option<PlayerName>,
    pub pot_awarded: Tokens,
    pub eliminated: Vec<PlayerName>,
}

/// Состояние одного раунда "high card draw".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundEngine {
    pub deck: Deck,
    pub phase: RoundPhase,
    pub clock: PhaseClock,
    /// Вытянутые карты в порядке регистрации игроков.
    pub draws: Vec<(PlayerName, Card)>,
    pub winner: Option<PlayerName>,
    /// true, пока раунд не дошёл до Complete.
    pub running: bool,
}

impl RoundEngine {
    /// Старт нового раунда: свежая перемешанная колода, фаза Shuffle.
    pub fn start<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);

        Self {
            deck,
            phase: RoundPhase::Shuffle,
            clock: PhaseClock::new(),
            draws: Vec::new(),
            winner: None,
            running: true,
        }
    }

    /// Один тик игрового времени.
    ///
    /// Пока выдержка фазы не истекла — просто копим тики. По истечении
    /// выполняем действие выхода из фазы и переходим к следующей.
    /// На Settle раунд останавливается и возвращает `RoundStatus::Settled`.
    pub fn tick(
        &mut self,
        ledger: &mut Ledger,
        rules: &TimingRules,
        ante: Tokens,
    ) -> Result<RoundStatus, EngineError> {
        if !self.running {
            return Ok(RoundStatus::Ongoing);
        }

        self.clock.tick();
        if !self.clock.is_elapsed(rules) {
            return Ok(RoundStatus::Ongoing);
        }

        match self.phase {
            RoundPhase::Shuffle => {
                // Колода уже перемешана на старте, здесь только выдержка.
                self.advance(RoundPhase::Ante);
                Ok(RoundStatus::Ongoing)
            }

            RoundPhase::Ante => {
                ledger.reset_pot();
                ledger.take_antes(ante);
                self.advance(RoundPhase::Draw);
                Ok(RoundStatus::Ongoing)
            }

            RoundPhase::Draw => {
                self.draws.clear();
                for name in ledger.player_names() {
                    let card = self.deck.draw_one().ok_or(EngineError::EmptyDeck)?;
                    self.draws.push((name, card));
                }
                self.advance(RoundPhase::Resolve);
                Ok(RoundStatus::Ongoing)
            }

            RoundPhase::Resolve => {
                // Старшая карта побеждает; ничьих не бывает, т.к. карты
                // тянутся без возврата из одной колоды.
                self.winner = self
                    .draws
                    .iter()
                    .max_by_key(|(_, card)| *card)
                    .map(|(name, _)| name.clone());
                self.advance(RoundPhase::Settle);
                Ok(RoundStatus::Ongoing)
            }

            RoundPhase::Settle => {
                let mut pot_awarded = Tokens::ZERO;
                if let Some(winner) = &self.winner {
                    pot_awarded = ledger.pot;
                    ledger.award_pot(winner)?;
                }
                let eliminated = ledger.remove_bankrupt();

                self.phase = RoundPhase::Complete;
                self.running = false;

                Ok(RoundStatus::Settled(RoundSummary {
                    winner: self.winner.clone(),
                    pot_awarded,
                    eliminated,
                }))
            }

            RoundPhase::Complete => Ok(RoundStatus::Ongoing),
        }
    }

    /// Карта, вытянутая игроком в этом раунде.
    pub fn draw_of(&self, name: &PlayerName) -> Option<Card> {
        self.draws
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, card)| *card)
    }

    fn advance(&mut self, next: RoundPhase) {
        self.phase = next;
        self.clock.reset();
    }
}
