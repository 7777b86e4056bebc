// src/bin/highcard_dev_cli.rs

use highcard_engine::api::{
    apply_command, build_session_view, handle_query, ApiError, Command, CommandResponse, Query,
    QueryResponse, RegisterPlayerCommand, SelectPlayerCountCommand, SessionViewDto,
};
use highcard_engine::engine::{RoundPhase, Session, SessionConfig};
use highcard_engine::infra::SystemRng;
use highcard_engine::time_ctrl::{TimingProfile, TimingRules};

fn main() {
    println!("highcard_dev_cli: стартуем dev-CLI сессии…");

    // Мгновенные фазы, чтобы не ждать по 2 секунды на каждую.
    let mut config = SessionConfig::standard();
    config.timing = TimingRules::from_profile(TimingProfile::Instant);

    let mut session = Session::new(config);
    let mut rng = SystemRng::default();

    println!();
    println!("================ SESSION SETUP =================");

    send(
        &mut session,
        &mut rng,
        Command::SelectPlayerCount(SelectPlayerCountCommand { count: 2 }),
    );

    // Пара валидных имён + заведомо плохие, чтобы показать отказы.
    for name in ["Alice", "42", "Alice", "Bob", "Carol"] {
        println!("[CLI] Регистрируем {name:?}…");
        send(
            &mut session,
            &mut rng,
            Command::RegisterPlayer(RegisterPlayerCommand {
                name: name.to_string(),
            }),
        );
    }

    debug_print_session(&session);

    println!();
    println!("================ GAME LOOP =================");

    match apply_command(&mut session, &mut rng, Command::RequestStart) {
        Ok(CommandResponse::StartAccepted(true)) => {
            println!("[CLI] Старт принят, играем до конца игры.");
        }
        other => {
            println!("[CLI] Старт не принят: {other:?}");
            return;
        }
    }

    const MAX_ROUNDS: u32 = 50;
    let mut round_no: u32 = 1;

    loop {
        println!();
        println!("------ ROUND {round_no} ------");
        run_round(&mut session);
        debug_print_session(&session);

        if session.game_over {
            let view = build_session_view(&session);
            println!(
                "[CLI] GAME OVER! Победитель: {}",
                view.final_winner.as_deref().unwrap_or("<нет>")
            );
            break;
        }

        round_no += 1;
        if round_no > MAX_ROUNDS {
            println!("[CLI] Превышен лимит раундов ({MAX_ROUNDS}), выходим.");
            break;
        }

        match apply_command(&mut session, &mut rng, Command::RequestNextRound) {
            Ok(CommandResponse::NextRoundAccepted(true)) => {}
            other => {
                println!("[CLI] Следующий раунд не принят: {other:?}");
                break;
            }
        }
    }

    println!();
    println!("================ FINAL SNAPSHOT =================");
    match handle_query(&session, Query::GetSession) {
        QueryResponse::Session(view) => print_view_json(&view),
        other => println!("[CLI] Неожиданный ответ на GetSession: {other:?}"),
    }

    match handle_query(&session, Query::GetSeatPositions) {
        QueryResponse::SeatPositions(positions) => {
            println!("[CLI] Позиции игроков: {positions:?}");
        }
        other => println!("[CLI] Неожиданный ответ на GetSeatPositions: {other:?}"),
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

/// Отправить команду и напечатать исход (успех или отказ API).
fn send(session: &mut Session, rng: &mut SystemRng, command: Command) {
    match apply_command(session, rng, command) {
        Ok(CommandResponse::SessionState(_)) | Ok(CommandResponse::Ok) => {}
        Ok(other) => println!("[CLI]   ответ: {other:?}"),
        Err(ApiError::Registration(reason)) => {
            println!("[CLI]   отказ регистрации: {reason}");
        }
        Err(e) => println!("[CLI]   ОШИБКА API: {e:?}"),
    }
}

/// Прогнать тики до завершения раунда (с запасом по шагам).
fn run_round(session: &mut Session) {
    const MAX_TICKS: u32 = 10_000;
    let mut last_phase: Option<RoundPhase> = None;

    for _ in 0..MAX_TICKS {
        if let Err(e) = session.tick() {
            println!("[CLI] ОШИБКА в tick: {e}");
            return;
        }

        let phase = session.current_phase();
        if phase != last_phase {
            last_phase = phase;
            if let Some(p) = phase {
                println!("[CLI] фаза: {p:?} | pot={}", session.pot());
            }
        }

        if !session.is_round_running() {
            return;
        }
    }

    println!("[CLI] Превышен лимит тиков ({MAX_TICKS}), выходим.");
}

// Печать состояния сессии через API-слой (DTO).
fn debug_print_session(session: &Session) {
    let view = build_session_view(session);

    println!("================ SESSION STATE ================");
    println!(
        "target={:?} phase={:?} running={} pot={} game_over={}",
        view.target_count, view.phase, view.round_running, view.pot, view.game_over
    );
    println!("players:");
    for p in &view.players {
        println!(
            "  {} | balance={} | card={}",
            p.name,
            p.balance,
            p.card_pretty.as_deref().unwrap_or("-"),
        );
    }
    if let Some(winner) = &view.round_winner {
        println!("победитель раунда: {winner}");
    }
    if !view.last_eliminated.is_empty() {
        println!("выбыли: {}", view.last_eliminated.join(", "));
    }
    println!("===============================================");
}

fn print_view_json(view: &SessionViewDto) {
    match serde_json::to_string_pretty(view) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("[CLI] Не удалось сериализовать снапшот: {e}"),
    }
}
