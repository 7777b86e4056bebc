//! Тесты реестра игроков (domain::ledger):
//! - регистрация и порядок проверок;
//! - сбор анте с пропуском нищих;
//! - выплата банка;
//! - удаление банкротов;
//! - инвариант сохранения жетонов.

use highcard_engine::domain::{
    Ledger, LedgerError, PlayerName, RegistrationError, Tokens,
};

const STARTING: Tokens = Tokens(20);
const ANTE: Tokens = Tokens(5);

fn name(raw: &str) -> PlayerName {
    PlayerName::parse(raw).expect("test name must be valid")
}

/// Реестр на двоих: Alice и Bob со стандартным стартовым балансом.
fn make_two_player_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.register(name("Alice"), STARTING, 2).unwrap();
    ledger.register(name("Bob"), STARTING, 2).unwrap();
    ledger
}

//
// ---------- register ----------
//

#[test]
fn register_appends_in_order_with_starting_balance() {
    let ledger = make_two_player_ledger();

    assert_eq!(ledger.player_count(), 2);
    assert_eq!(ledger.players[0].name.as_str(), "Alice");
    assert_eq!(ledger.players[1].name.as_str(), "Bob");
    assert_eq!(ledger.players[0].balance, STARTING);
    assert_eq!(ledger.players[1].balance, STARTING);
    assert_eq!(ledger.pot, Tokens::ZERO);
}

#[test]
fn register_rejects_exact_duplicate() {
    let mut ledger = make_two_player_ledger();

    match ledger.register(name("Alice"), STARTING, 4) {
        Err(RegistrationError::DuplicateName) => {}
        other => panic!("Expected DuplicateName, got {other:?}"),
    }

    // сравнение дословное: другой регистр — другой игрок
    ledger
        .register(name("alice"), STARTING, 4)
        .expect("case differs, so the name is free");
}

#[test]
fn register_rejects_when_capacity_reached() {
    let mut ledger = make_two_player_ledger();

    match ledger.register(name("Carol"), STARTING, 2) {
        Err(RegistrationError::CapacityReached) => {}
        other => panic!("Expected CapacityReached, got {other:?}"),
    }
}

#[test]
fn register_failure_leaves_ledger_unchanged() {
    let mut ledger = make_two_player_ledger();
    let before = ledger.clone();

    let _ = ledger.register(name("Alice"), STARTING, 4); // дубликат
    let _ = ledger.register(name("Carol"), STARTING, 2); // нет мест

    assert_eq!(ledger, before);
}

//
// ---------- take_antes ----------
//

#[test]
fn take_antes_collects_from_everyone_who_can_pay() {
    let mut ledger = make_two_player_ledger();

    ledger.take_antes(ANTE);

    assert_eq!(ledger.pot, Tokens(10));
    assert_eq!(ledger.players[0].balance, Tokens(15));
    assert_eq!(ledger.players[1].balance, Tokens(15));
}

#[test]
fn take_antes_silently_skips_short_balances() {
    let mut ledger = make_two_player_ledger();
    ledger.players[0].balance = Tokens(3); // меньше анте

    ledger.take_antes(ANTE);

    // Alice пропущена: баланс не тронут, в банк не попало её анте
    assert_eq!(ledger.players[0].balance, Tokens(3));
    assert_eq!(ledger.players[1].balance, Tokens(15));
    assert_eq!(ledger.pot, Tokens(5));
}

#[test]
fn take_antes_with_exactly_ante_balance_goes_all_in() {
    let mut ledger = make_two_player_ledger();
    ledger.players[0].balance = ANTE;

    ledger.take_antes(ANTE);

    // ровно анте — платит и остаётся с нулём
    assert_eq!(ledger.players[0].balance, Tokens::ZERO);
    assert_eq!(ledger.pot, Tokens(10));
}

//
// ---------- award_pot ----------
//

#[test]
fn award_pot_moves_whole_pot_to_winner() {
    let mut ledger = make_two_player_ledger();
    ledger.take_antes(ANTE);

    ledger.award_pot(&name("Bob")).expect("Bob is registered");

    assert_eq!(ledger.pot, Tokens::ZERO);
    assert_eq!(ledger.balance_of(&name("Bob")), Some(Tokens(25)));
    assert_eq!(ledger.balance_of(&name("Alice")), Some(Tokens(15)));
}

#[test]
fn award_pot_to_unknown_player_is_contract_violation() {
    let mut ledger = make_two_player_ledger();
    ledger.take_antes(ANTE);

    match ledger.award_pot(&name("Mallory")) {
        Err(LedgerError::UnknownPlayer(who)) => assert_eq!(who.as_str(), "Mallory"),
        other => panic!("Expected UnknownPlayer, got {other:?}"),
    }

    // банк не тронут
    assert_eq!(ledger.pot, Tokens(10));
}

//
// ---------- remove_bankrupt ----------
//

#[test]
fn remove_bankrupt_removes_zero_balances_in_registration_order() {
    let mut ledger = Ledger::new();
    ledger.register(name("Alice"), Tokens::ZERO, 4).unwrap();
    ledger.register(name("Bob"), STARTING, 4).unwrap();
    ledger.register(name("Carol"), Tokens::ZERO, 4).unwrap();
    ledger.register(name("Dave"), STARTING, 4).unwrap();

    let removed = ledger.remove_bankrupt();

    let removed_names: Vec<&str> = removed.iter().map(|n| n.as_str()).collect();
    assert_eq!(removed_names, ["Alice", "Carol"]);

    assert_eq!(ledger.player_count(), 2);
    assert!(ledger.is_registered(&name("Bob")));
    assert!(ledger.is_registered(&name("Dave")));
    assert!(!ledger.is_registered(&name("Alice")));
}

#[test]
fn remove_bankrupt_with_no_bankrupts_is_noop() {
    let mut ledger = make_two_player_ledger();

    let removed = ledger.remove_bankrupt();

    assert!(removed.is_empty());
    assert_eq!(ledger.player_count(), 2);
}

//
// ---------- инвариант сохранения ----------
//

#[test]
fn total_tokens_conserved_over_ante_and_award() {
    let mut ledger = make_two_player_ledger();
    let total_before = ledger.total_tokens();

    ledger.take_antes(ANTE);
    assert_eq!(ledger.total_tokens(), total_before);

    ledger.award_pot(&name("Alice")).unwrap();
    assert_eq!(ledger.total_tokens(), total_before);

    // и после полного цикла банк пуст, все жетоны на руках
    assert_eq!(ledger.pot, Tokens::ZERO);
    assert_eq!(ledger.balance_of(&name("Alice")), Some(Tokens(25)));
    assert_eq!(ledger.balance_of(&name("Bob")), Some(Tokens(15)));
}
