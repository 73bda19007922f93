//! Property tests over random key sequences and message logs.

mod common;

use common::game_on;
use proptest::prelude::*;
use troll_temple::{Key, MessageLog, WHITE};

const ARENA: &[&str] = &[
    "############", //
    "#..........#",
    "#.@..!..r..#",
    "#...(...>..#",
    "#..[.......#",
    "############",
];

/// Every key except Escape, which would eventually quit.
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        (1u8..=9).prop_map(Key::Keypad),
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Enter),
        Just(Key::Space),
        Just(Key::Tab),
        prop::sample::select(vec!['.', 'g', 'i', 'd', 'b', 'l', 'w', 'a', 'b', 'c', 'y', 'n'])
            .prop_map(Key::Char),
    ]
}

#[derive(Debug, Clone)]
enum LogOp {
    Push(String),
    NewTurn,
    PopLatest,
}

fn log_op() -> impl Strategy<Value = LogOp> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(LogOp::Push),
        Just(LogOp::NewTurn),
        Just(LogOp::PopLatest),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_action_points_never_go_negative(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let mut game = game_on(ARENA);
        for key in keys {
            game.handle_key(key);
            prop_assert!(game.session.player.action_points >= 0);
            if game.top_scene().is_none() && !game.is_terminated() {
                prop_assert!(game.session.player.action_points > 0);
            }
        }
    }

    #[test]
    fn test_new_ui_turn_is_idempotent(ops in prop::collection::vec(log_op(), 0..30)) {
        let mut log = MessageLog::new();
        for op in ops {
            match op {
                LogOp::Push(text) => log.push(text, WHITE),
                LogOp::NewTurn => log.new_ui_turn(),
                LogOp::PopLatest => log.pop_latest(),
            }
        }
        let len = log.len();
        log.new_ui_turn();
        let once = log.clone();
        log.new_ui_turn();
        prop_assert_eq!(&log, &once);
        prop_assert_eq!(log.len(), len);
        prop_assert!(log.last().map_or(true, |m| !m.latest));
    }
}
