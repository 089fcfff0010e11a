use super::*;
use crate::sessions::clock::ManualClock;
use crate::sessions::settlement::Team;
use shared::models::{MembershipType, Player, TableStatus};

const TENANT: &str = "ali@club.com";

// Mid-June 2025, well away from any day boundary
const BASE_MILLIS: i64 = 1_750_000_000_000;

fn setup() -> (SessionManager, ClubStorage, Arc<ManualClock>) {
    let storage = ClubStorage::open_in_memory().unwrap();
    let clock = Arc::new(ManualClock::starting_at(BASE_MILLIS));
    let manager = SessionManager::with_clock(storage.clone(), clock.clone());
    manager.ensure_tables_seeded(TENANT, 8).unwrap();
    (manager, storage, clock)
}

fn register_player(storage: &ClubStorage, name: &str) {
    storage
        .put_player(
            TENANT,
            &Player {
                id: format!("player-{}", name.to_lowercase()),
                name: name.to_string(),
                phone: "0300-1234567".to_string(),
                membership: MembershipType::Regular,
                total_visits: 0,
                total_paid: 0,
                last_visit: "2025-06-01".to_string(),
                join_date: "2025-06-01".to_string(),
            },
        )
        .unwrap();
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn start_hourly(manager: &SessionManager, table_id: i64, players: &[&str]) -> Table {
    manager
        .start_session(
            TENANT,
            table_id,
            &names(players),
            "Per Hour",
            RateUnit::PerHour,
            200,
        )
        .unwrap()
}

// ========================================================================
// Start transition
// ========================================================================

#[test]
fn test_start_occupies_table_and_freezes_bindings() {
    let (manager, storage, _clock) = setup();
    register_player(&storage, "Ahmed");

    let table = start_hourly(&manager, 3, &["Ahmed", "Bilal"]);
    assert_eq!(table.status, TableStatus::Occupied);

    let session = table.session.unwrap();
    assert_eq!(session.start_time, BASE_MILLIS);
    assert!(session.players[0].is_registered);
    assert_eq!(
        session.players[0].player_id.as_deref(),
        Some("player-ahmed")
    );
    assert!(!session.players[1].is_registered);
    assert!(session.players[1].player_id.is_none());
}

#[test]
fn test_start_resolves_names_case_insensitively() {
    let (manager, storage, _clock) = setup();
    register_player(&storage, "Ahmed");

    let table = start_hourly(&manager, 1, &["  ahmed  "]);
    let session = table.session.unwrap();
    // Trimmed operator input, binding resolved regardless of case
    assert_eq!(session.players[0].name, "ahmed");
    assert!(session.players[0].is_registered);
}

#[test]
fn test_second_start_is_rejected_and_leaves_first_session_intact() {
    let (manager, storage, clock) = setup();
    let first = start_hourly(&manager, 3, &["Ahmed", "Bilal"]);

    clock.advance_secs(60);
    let err = manager
        .start_session(
            TENANT,
            3,
            &names(&["Usman"]),
            "Per Hour",
            RateUnit::PerHour,
            200,
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::TableOccupied(3)));

    let stored = storage.get_table(TENANT, 3).unwrap().unwrap();
    assert_eq!(stored.session, first.session);
}

#[test]
fn test_start_validates_player_counts() {
    let (manager, _storage, _clock) = setup();

    let err = manager
        .start_session(TENANT, 1, &[], "Per Hour", RateUnit::PerHour, 200)
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidPlayerCount(0)));

    let five = names(&["A", "B", "C", "D", "E"]);
    let err = manager
        .start_session(TENANT, 1, &five, "Per Hour", RateUnit::PerHour, 200)
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidPlayerCount(5)));

    let err = manager
        .start_session(
            TENANT,
            1,
            &names(&["Ahmed", "   "]),
            "Per Hour",
            RateUnit::PerHour,
            200,
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::EmptyPlayerName));
}

#[test]
fn test_start_unknown_table() {
    let (manager, _storage, _clock) = setup();
    let err = manager
        .start_session(
            TENANT,
            99,
            &names(&["Ahmed"]),
            "Per Hour",
            RateUnit::PerHour,
            200,
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::TableNotFound(99)));
}

// ========================================================================
// Live bill (pure read)
// ========================================================================

#[test]
fn test_live_bill_tracks_clock_without_mutating() {
    let (manager, storage, clock) = setup();
    start_hourly(&manager, 2, &["Ahmed", "Bilal"]);

    clock.advance_secs(1800);
    let bill = manager.live_bill(TENANT, 2).unwrap();
    assert_eq!(bill.elapsed_secs, 1800);
    assert_eq!(bill.amount, 100);

    clock.advance_secs(1);
    let bill = manager.live_bill(TENANT, 2).unwrap();
    assert_eq!(bill.amount, 101);

    // Reads never change the stored session
    let stored = storage.get_table(TENANT, 2).unwrap().unwrap();
    assert_eq!(stored.session.unwrap().start_time, BASE_MILLIS);
}

#[test]
fn test_live_bill_requires_active_session() {
    let (manager, _storage, _clock) = setup();
    assert!(matches!(
        manager.live_bill(TENANT, 1).unwrap_err(),
        SessionError::NoActiveSession(1)
    ));
    assert!(matches!(
        manager.live_bill(TENANT, 42).unwrap_err(),
        SessionError::TableNotFound(42)
    ));
}

// ========================================================================
// End transition
// ========================================================================

#[test]
fn test_end_to_end_equal_split() {
    let (manager, storage, clock) = setup();
    start_hourly(&manager, 3, &["Ahmed", "Bilal"]);

    clock.advance_secs(5400);
    let bill = manager.live_bill(TENANT, 3).unwrap();
    assert_eq!(bill.amount, 300);

    let completed = manager
        .end_session(TENANT, 3, &Settlement::Equal, PaymentMethod::Cash)
        .unwrap();
    assert_eq!(completed.total_amount, 300);
    assert_eq!(completed.duration_secs, 5400);
    assert_eq!(completed.splits.len(), 2);
    assert_eq!(completed.splits[0].player_name, "Ahmed");
    assert_eq!(completed.splits[0].amount, 150);
    assert_eq!(completed.splits[1].player_name, "Bilal");
    assert_eq!(completed.splits[1].amount, 150);

    let table = storage.get_table(TENANT, 3).unwrap().unwrap();
    assert_eq!(table.status, TableStatus::Available);
    assert!(table.session.is_none());

    let stats = storage.get_day_stats(TENANT).unwrap().unwrap();
    assert_eq!(stats.revenue, 300);
    assert_eq!(stats.sessions, 1);

    let recent = storage.get_recent_sessions(TENANT).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, completed.id);
}

#[test]
fn test_on_credit_accumulates_debt() {
    let (manager, storage, clock) = setup();
    register_player(&storage, "Ahmed");

    // Existing balance from an earlier visit
    let txn = storage.begin_write().unwrap();
    storage.set_debt_in(&txn, TENANT, "Ahmed", 500).unwrap();
    txn.commit().unwrap();

    start_hourly(&manager, 3, &["Ahmed", "Bilal"]);
    clock.advance_secs(5400);

    let completed = manager
        .end_session(
            TENANT,
            3,
            &Settlement::Equal,
            PaymentMethod::OnCredit {
                player_name: "Ahmed".to_string(),
            },
        )
        .unwrap();
    assert_eq!(completed.total_amount, 300);
    assert_eq!(storage.get_debt(TENANT, "Ahmed").unwrap(), 800);
}

#[test]
fn test_on_credit_requires_registered_participant() {
    let (manager, storage, clock) = setup();
    start_hourly(&manager, 3, &["Ahmed", "Bilal"]);
    clock.advance_secs(60);

    // Bilal is a walk-in; credit must be refused and nothing recorded
    let err = manager
        .end_session(
            TENANT,
            3,
            &Settlement::Equal,
            PaymentMethod::OnCredit {
                player_name: "Bilal".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::CreditPlayerNotEligible(_)));

    let table = storage.get_table(TENANT, 3).unwrap().unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
    assert!(storage.list_debts(TENANT).unwrap().is_empty());
}

#[test]
fn test_rejected_end_leaves_all_ledgers_untouched() {
    let (manager, storage, clock) = setup();
    start_hourly(&manager, 3, &["Ahmed", "Bilal"]);
    clock.advance_secs(5400);

    // Custom amounts that miss the 300 total
    let err = manager
        .end_session(
            TENANT,
            3,
            &Settlement::Custom {
                amounts: vec![100, 100],
            },
            PaymentMethod::Cash,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Settlement(SettlementError::SumMismatch { .. })
    ));

    let table = storage.get_table(TENANT, 3).unwrap().unwrap();
    assert_eq!(table.status, TableStatus::Occupied);
    assert!(table.session.is_some());
    assert!(storage.get_recent_sessions(TENANT).unwrap().is_empty());
    assert!(storage.get_day_stats(TENANT).unwrap().is_none());

    // A matching breakdown then goes through
    let completed = manager
        .end_session(
            TENANT,
            3,
            &Settlement::Custom {
                amounts: vec![120, 180],
            },
            PaymentMethod::Cash,
        )
        .unwrap();
    assert_eq!(completed.splits[0].amount, 120);
    assert_eq!(completed.splits[1].amount, 180);
}

#[test]
fn test_end_rejects_one_sided_teams() {
    let (manager, _storage, clock) = setup();
    start_hourly(&manager, 3, &["Ahmed", "Bilal", "Usman"]);
    clock.advance_secs(60);

    for losing in [Team::A, Team::B] {
        let err = manager
            .end_session(
                TENANT,
                3,
                &Settlement::Teams {
                    assignments: vec![Team::A, Team::A, Team::A],
                    losing,
                },
                PaymentMethod::Cash,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Settlement(SettlementError::EmptyTeam)
        ));
    }
}

#[test]
fn test_end_requires_active_session() {
    let (manager, _storage, _clock) = setup();
    let err = manager
        .end_session(TENANT, 1, &Settlement::Equal, PaymentMethod::Cash)
        .unwrap_err();
    assert!(matches!(err, SessionError::NoActiveSession(1)));
}

#[test]
fn test_recent_history_is_capped() {
    let (manager, storage, clock) = setup();

    let mut ids = Vec::new();
    for _ in 0..101 {
        manager
            .start_session(
                TENANT,
                1,
                &names(&["Ahmed"]),
                "6 Balls",
                RateUnit::PerGame,
                60,
            )
            .unwrap();
        clock.advance_secs(300);
        let completed = manager
            .end_session(
                TENANT,
                1,
                &Settlement::SinglePayer { payer_index: 0 },
                PaymentMethod::Cash,
            )
            .unwrap();
        ids.push(completed.id);
    }

    let recent = storage.get_recent_sessions(TENANT).unwrap();
    assert_eq!(recent.len(), 100);
    // Newest first; the very first session has been evicted
    assert_eq!(recent[0].id, *ids.last().unwrap());
    assert!(recent.iter().all(|s| s.id != ids[0]));
}

#[test]
fn test_day_counters_reset_on_date_change() {
    let (manager, storage, clock) = setup();

    start_hourly(&manager, 1, &["Ahmed"]);
    clock.advance_secs(3600);
    manager
        .end_session(TENANT, 1, &Settlement::Equal, PaymentMethod::Cash)
        .unwrap();
    let stats = storage.get_day_stats(TENANT).unwrap().unwrap();
    assert_eq!(stats.revenue, 200);
    assert_eq!(stats.sessions, 1);
    let first_date = stats.date.clone();

    // Next calendar day: counters start over
    clock.advance_secs(86_400);
    start_hourly(&manager, 2, &["Bilal"]);
    clock.advance_secs(1800);
    manager
        .end_session(TENANT, 2, &Settlement::Equal, PaymentMethod::Cash)
        .unwrap();

    let stats = storage.get_day_stats(TENANT).unwrap().unwrap();
    assert_ne!(stats.date, first_date);
    assert_eq!(stats.revenue, 100);
    assert_eq!(stats.sessions, 1);
}

// ========================================================================
// Table inventory
// ========================================================================

#[test]
fn test_add_table_assigns_next_id() {
    let (manager, _storage, _clock) = setup();
    let table = manager.add_table(TENANT, None).unwrap();
    assert_eq!(table.id, 9);
    assert_eq!(table.name, "Table 9");

    let named = manager.add_table(TENANT, Some("VIP Corner".to_string())).unwrap();
    assert_eq!(named.id, 10);
    assert_eq!(named.name, "VIP Corner");
}

#[test]
fn test_remove_table_only_while_available() {
    let (manager, storage, _clock) = setup();
    start_hourly(&manager, 4, &["Ahmed"]);

    let err = manager.remove_table(TENANT, 4).unwrap_err();
    assert!(matches!(err, SessionError::TableStillOccupied(4)));
    assert!(storage.get_table(TENANT, 4).unwrap().is_some());

    manager.remove_table(TENANT, 5).unwrap();
    assert!(storage.get_table(TENANT, 5).unwrap().is_none());

    let err = manager.remove_table(TENANT, 5).unwrap_err();
    assert!(matches!(err, SessionError::TableNotFound(5)));
}

#[test]
fn test_seeding_happens_once() {
    let (manager, storage, _clock) = setup();
    assert_eq!(storage.list_tables(TENANT).unwrap().len(), 8);

    manager.remove_table(TENANT, 8).unwrap();
    manager.ensure_tables_seeded(TENANT, 8).unwrap();
    // The removed table does not resurrect
    assert_eq!(storage.list_tables(TENANT).unwrap().len(), 7);
}
