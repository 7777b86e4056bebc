use serde::{Deserialize, Serialize};

use crate::engine::{RandomSource, Session};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_session_view;

/// Команда верхнего уровня.
///
/// Всё, что меняет состояние сессии. UI превращает нажатия кнопок
/// ровно в эти команды, своей игровой логики у него нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Выбрать количество игроков (2–4). Сбрасывает регистрацию.
    SelectPlayerCount(SelectPlayerCountCommand),

    /// Зарегистрировать игрока по имени.
    RegisterPlayer(RegisterPlayerCommand),

    /// Запустить первый раунд.
    RequestStart,

    /// Запустить следующий раунд после завершённого.
    RequestNextRound,

    /// Продвинуть игровое время на один тик.
    Tick,

    /// Полный сброс сессии.
    Reset,
}

/// Выбор количества игроков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectPlayerCountCommand {
    pub count: u8,
}

/// Регистрация игрока. Имя здесь «сырое», валидирует его движок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterPlayerCommand {
    pub name: String,
}

/// Применить команду к сессии.
///
/// RNG передаётся снаружи: боевой код даёт `SystemRng`,
/// тесты и реплеи — детерминированный.
pub fn apply_command<R: RandomSource>(
    session: &mut Session,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::SelectPlayerCount(cmd) => {
            session.select_player_count(cmd.count)?;
            Ok(CommandResponse::SessionState(build_session_view(session)))
        }

        Command::RegisterPlayer(cmd) => {
            session.register_player(&cmd.name)?;
            Ok(CommandResponse::SessionState(build_session_view(session)))
        }

        Command::RequestStart => {
            let accepted = session.request_start(rng);
            Ok(CommandResponse::StartAccepted(accepted))
        }

        Command::RequestNextRound => {
            let accepted = session.request_next_round(rng);
            Ok(CommandResponse::NextRoundAccepted(accepted))
        }

        Command::Tick => {
            session.tick()?;
            Ok(CommandResponse::SessionState(build_session_view(session)))
        }

        Command::Reset => {
            session.reset();
            Ok(CommandResponse::SessionState(build_session_view(session)))
        }
    }
}
