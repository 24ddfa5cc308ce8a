//! Round timeout integration tests.
//!
//! The engine never schedules anything itself; these tests play the role
//! of the periodic driver, polling `check_timeout` and closing expired
//! rooms. Short configured timeouts keep the real sleeps tiny.

use std::thread::sleep;
use std::time::Duration;

use charades_engine::{EngineConfig, EngineRng, GameEngine, GuessOutcome, PlayerId, RoomId, WordPool};

const ROOM: RoomId = RoomId::new(-1001);
const ALICE: PlayerId = PlayerId::new(1);
const BOB: PlayerId = PlayerId::new(2);

fn engine_with_timeout(timeout: Duration) -> GameEngine {
    let pool = WordPool::with_rng(vec!["volcano".to_owned()], EngineRng::new(42)).unwrap();
    GameEngine::with_config(pool, EngineConfig::default().with_round_timeout(timeout))
}

#[test]
fn test_no_timeout_before_first_round() {
    let mut engine = engine_with_timeout(Duration::from_millis(10));
    engine.start_game(ROOM);

    sleep(Duration::from_millis(30));

    // A game with no host assigned has no round clock to expire.
    assert!(!engine.check_timeout(ROOM));
    assert_eq!(engine.remaining_secs(ROOM), None);
}

#[test]
fn test_round_expires_after_timeout() {
    let mut engine = engine_with_timeout(Duration::from_millis(40));
    engine.start_game(ROOM);
    engine.set_host(ROOM, ALICE);

    assert!(!engine.check_timeout(ROOM));

    sleep(Duration::from_millis(60));

    assert!(engine.check_timeout(ROOM));
    assert_eq!(engine.remaining_secs(ROOM), Some(0));
}

#[test]
fn test_guessed_round_never_expires() {
    let mut engine = engine_with_timeout(Duration::from_millis(40));
    engine.start_game(ROOM);
    engine.set_host(ROOM, ALICE);

    assert_eq!(engine.check_guess(ROOM, BOB, "volcano"), GuessOutcome::Correct);

    sleep(Duration::from_millis(60));

    // Solved rounds stay solved regardless of elapsed time.
    assert!(!engine.check_timeout(ROOM));
}

#[test]
fn test_rehosting_restarts_the_clock() {
    let mut engine = engine_with_timeout(Duration::from_millis(200));
    engine.start_game(ROOM);
    engine.set_host(ROOM, ALICE);

    sleep(Duration::from_millis(120));
    engine.set_host(ROOM, ALICE);
    sleep(Duration::from_millis(120));

    // 240ms since the first assignment, but only 120ms since the redraw.
    assert!(!engine.check_timeout(ROOM));

    sleep(Duration::from_millis(120));
    assert!(engine.check_timeout(ROOM));
}

/// What the periodic driver does on expiry: grab the host and word for
/// the announcement, then stop the game.
#[test]
fn test_driver_flow_on_expiry() {
    let mut engine = engine_with_timeout(Duration::from_millis(20));
    engine.start_game(ROOM);
    engine.set_host(ROOM, ALICE);

    sleep(Duration::from_millis(40));

    let expired: Vec<RoomId> = engine
        .active_rooms()
        .into_iter()
        .filter(|&room| engine.check_timeout(room))
        .collect();
    assert_eq!(expired, vec![ROOM]);

    let host = engine.host(ROOM).unwrap();
    let word = engine.host_word(ROOM, host).unwrap();
    assert_eq!(host, ALICE);
    assert_eq!(word, "volcano");

    engine.stop_game(ROOM);
    assert!(!engine.is_active(ROOM));
    // Scores survive the expiry.
    assert_eq!(engine.score(ROOM, BOB), 0);
}

#[test]
fn test_remaining_secs_with_default_timeout() {
    let pool = WordPool::with_rng(vec!["volcano".to_owned()], EngineRng::new(42)).unwrap();
    let mut engine = GameEngine::new(pool);

    engine.start_game(ROOM);
    assert_eq!(engine.remaining_secs(ROOM), None);

    engine.set_host(ROOM, ALICE);
    let remaining = engine.remaining_secs(ROOM).unwrap();
    assert!(remaining <= 600);
    assert!(remaining >= 599);
    assert!(!engine.check_timeout(ROOM));
}

#[test]
fn test_stopped_room_reports_nothing() {
    let mut engine = engine_with_timeout(Duration::from_millis(10));
    engine.start_game(ROOM);
    engine.set_host(ROOM, ALICE);
    engine.stop_game(ROOM);

    sleep(Duration::from_millis(30));

    assert!(!engine.check_timeout(ROOM));
    assert_eq!(engine.remaining_secs(ROOM), None);
}
