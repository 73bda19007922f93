//! Integration tests for the turn loop and its modal screens.

mod common;

use common::{game_on, press, wizard_game_on};
use troll_temple::{Item, Key, LoopPhase, Position, PromptKind, Purpose, Scene};

const ROOM: &[&str] = &[
    "#######", //
    "#.....#",
    "#..@..#",
    "#.....#",
    "#######",
];

#[test]
fn test_walking_spends_the_turn_and_advances_the_world() {
    let mut game = game_on(ROOM);
    let start = game.session.player.pos;
    assert_eq!(game.session.turns, 0);

    // North is free, so the step succeeds and uses the only action point
    press(&mut game, &[Key::Keypad(8)]);

    assert_eq!(game.session.player.pos, Position::new(start.x, start.y - 1));
    assert_eq!(game.session.turns, 1);
    // The world turn replenished the action points
    assert_eq!(game.session.player.action_points, 1);
    assert_eq!(game.phase(), LoopPhase::AwaitingPlayerInput);
    assert!(game.top_scene().is_none());
}

#[test]
fn test_bumping_a_wall_costs_nothing() {
    let mut game = game_on(&["###", "#@#", "###"]);
    press(&mut game, &[Key::Up, Key::Left]);
    assert_eq!(game.session.player.pos, Position::new(1, 1));
    assert_eq!(game.session.turns, 0);
}

#[test]
fn test_descend_off_the_stairs_only_logs_a_hint() {
    let mut game = game_on(ROOM);
    let before = game.session.messages.len();

    press(&mut game, &[Key::Char('.')]);

    assert_eq!(game.session.messages.len(), before + 1);
    assert_eq!(
        game.session.messages.last().unwrap().text,
        "Stand on a down stairway to descend."
    );
    assert_eq!(game.session.turns, 0);
    assert_eq!(game.session.level.depth, 1);
    assert_eq!(game.session.player.action_points, 1);
}

#[test]
fn test_descend_on_the_stairs_rests_and_goes_deeper() {
    let mut game = game_on(&["#####", "#@>.#", "#####"]);
    game.session.player.hp = 1;

    press(&mut game, &[Key::Keypad(6), Key::Char('.')]);

    assert_eq!(game.session.level.depth, 2);
    // Walk turn, the rest, then the world turn after descending
    assert_eq!(game.session.turns, 3);
    assert!(game.session.player.hp > 1);
    assert!(game
        .session
        .messages
        .iter()
        .any(|m| m.text.starts_with("You take a moment to rest")));
}

#[test]
fn test_unbound_key_does_nothing() {
    let mut game = game_on(ROOM);
    let frames = game.renderer.frames;
    let messages = game.session.messages.clone();

    press(&mut game, &[Key::Char('Z'), Key::Tab]);

    assert_eq!(game.renderer.frames, frames);
    assert_eq!(game.session.messages, messages);
    assert_eq!(game.session.turns, 0);
}

#[test]
fn test_quit_confirmed_terminates_without_a_world_turn() {
    let mut game = game_on(ROOM);

    press(&mut game, &[Key::Escape]);
    assert!(matches!(
        game.top_scene(),
        Some(Scene::Prompt(PromptKind::ConfirmQuit))
    ));
    assert_eq!(game.session.messages.last().unwrap().text, "Quit? (Y/N)");

    // Keys that are not answers leave the prompt up
    press(&mut game, &[Key::Enter, Key::Char('x')]);
    assert_eq!(game.scene_depth(), 1);

    // A death recorded now must not turn into a game over prompt
    game.session.player.take_damage(1000, "killed by a test");
    press(&mut game, &[Key::Char('y')]);

    assert!(game.is_terminated());
    assert_eq!(game.phase(), LoopPhase::Terminated);
    assert!(game.top_scene().is_none());
    assert_eq!(game.session.turns, 0);
}

#[test]
fn test_quit_declined_returns_to_the_map() {
    let mut game = game_on(ROOM);
    press(&mut game, &[Key::Escape, Key::Char('N')]);
    assert!(!game.is_terminated());
    assert!(game.top_scene().is_none());
    assert!(game.session.messages.iter().all(|m| !m.latest));
}

#[test]
fn test_look_mode_restores_the_log_and_spends_no_time() {
    let mut game = game_on(&["#######", "#@.r..#", "#######"]);
    let player = game.session.player.clone();
    let monsters = game.session.level.monsters.clone();
    let mut expected = game.session.messages.clone();
    expected.new_ui_turn();

    press(&mut game, &[Key::Char('l')]);
    assert!(matches!(game.top_scene(), Some(Scene::Look(_))));
    assert!(game.renderer.last.contains("Look mode"));

    press(&mut game, &[Key::Keypad(6), Key::Keypad(6)]);
    match game.top_scene() {
        Some(Scene::Look(look)) => assert_eq!(look.cursor, Position::new(3, 1)),
        other => panic!("expected look mode, got {other:?}"),
    }
    assert!(game.renderer.last.contains("Rat."));
    // Descriptions are drawn but never kept
    assert_eq!(game.session.messages.len(), 1);

    // Moving off the map is refused
    press(&mut game, &[Key::Keypad(8), Key::Keypad(8), Key::Keypad(8)]);
    match game.top_scene() {
        Some(Scene::Look(look)) => assert_eq!(look.cursor, Position::new(3, 0)),
        other => panic!("expected look mode, got {other:?}"),
    }

    // Keys without a look meaning are ignored
    press(&mut game, &[Key::Char('g'), Key::Enter]);
    assert_eq!(game.scene_depth(), 1);

    press(&mut game, &[Key::Escape]);
    assert!(game.top_scene().is_none());
    assert_eq!(game.session.messages, expected);
    assert_eq!(game.session.turns, 0);
    assert_eq!(game.session.player, player);
    assert_eq!(game.session.level.monsters, monsters);
}

#[test]
fn test_empty_lists_push_no_scene() {
    let mut game = game_on(ROOM);
    let frames = game.renderer.frames;

    press(&mut game, &[Key::Char('d')]);
    assert!(game.top_scene().is_none());
    press(&mut game, &[Key::Char('i')]);
    assert!(game.top_scene().is_none());

    // Each command still redraws the map screen
    assert_eq!(game.renderer.frames, frames + 2);
    assert_eq!(game.session.turns, 0);
}

#[test]
fn test_pick_up_with_nothing_here() {
    let mut game = game_on(ROOM);
    press(&mut game, &[Key::Char('g')]);
    assert_eq!(
        game.session.messages.last().unwrap().text,
        "There is nothing here to pick up."
    );
    assert_eq!(game.session.turns, 0);
}

#[test]
fn test_single_item_is_picked_up_directly() {
    let mut game = game_on(&["#####", "#@!.#", "#####"]);
    press(&mut game, &[Key::Right, Key::Char('g')]);

    assert!(game.top_scene().is_none());
    assert_eq!(game.session.player.items.len(), 1);
    assert_eq!(game.session.player.items[0].name, "HealthPotion");
    assert_eq!(game.session.turns, 2);
}

#[test]
fn test_multiple_items_open_the_pick_up_list() {
    let mut game = game_on(ROOM);
    let pos = game.session.player.pos;
    let tile = game.session.level.tile_at_mut(pos).unwrap();
    tile.items.push(Item::from_name("Dagger").unwrap());
    tile.items.push(Item::from_name("HealthPotion").unwrap());

    press(&mut game, &[Key::Char('g')]);
    match game.top_scene() {
        Some(Scene::ItemSelection(selection)) => assert_eq!(selection.purpose, Purpose::PickUp),
        other => panic!("expected pick up list, got {other:?}"),
    }
    assert!(game.renderer.last.contains("Select an item to pick up"));

    // Letters past the end of the list are ignored
    press(&mut game, &[Key::Char('c')]);
    assert_eq!(game.scene_depth(), 1);

    // The one action point runs out after the first pick
    press(&mut game, &[Key::Char('b')]);
    assert!(game.top_scene().is_none());
    assert_eq!(game.session.player.items.len(), 1);
    assert_eq!(game.session.player.items[0].name, "HealthPotion");
    assert_eq!(game.session.turns, 1);
}

#[test]
fn test_inventory_escape_leaves_everything_alone() {
    let mut game = game_on(ROOM);
    let potion = Item::from_name("HealthPotion").unwrap();
    game.session.player.items.push(potion);

    press(&mut game, &[Key::Char('i')]);
    assert!(game.renderer.last.contains("Select an item to use"));
    press(&mut game, &[Key::Escape]);

    assert!(game.top_scene().is_none());
    assert_eq!(game.session.player.items.len(), 1);
    assert_eq!(game.session.turns, 0);
}

#[test]
fn test_drop_puts_the_item_on_the_floor() {
    let mut game = game_on(ROOM);
    game.session
        .player
        .items
        .push(Item::from_name("Dagger").unwrap());

    press(&mut game, &[Key::Char('d'), Key::Char('a')]);

    assert!(game.session.player.items.is_empty());
    let pos = game.session.player.pos;
    assert_eq!(game.session.level.tile_at(pos).unwrap().items.len(), 1);
    assert!(game.top_scene().is_none());
}

#[test]
fn test_spellbook_requires_a_book() {
    let mut game = game_on(ROOM);
    press(&mut game, &[Key::Char('b')]);
    assert_eq!(
        game.session.messages.last().unwrap().text,
        "You don't have a spellbook!"
    );
    assert!(game.top_scene().is_none());
}

#[test]
fn test_death_in_normal_mode_ends_the_game() {
    let mut game = game_on(ROOM);
    game.session.player.take_damage(1000, "killed by a test");

    press(&mut game, &[Key::Keypad(5)]);
    assert!(matches!(
        game.top_scene(),
        Some(Scene::Prompt(PromptKind::GameOver))
    ));
    assert!(game
        .session
        .messages
        .last()
        .unwrap()
        .text
        .starts_with("Game over: killed by a test"));

    press(&mut game, &[Key::Char('y')]);
    assert!(!game.is_terminated());
    press(&mut game, &[Key::Enter]);
    assert!(game.is_terminated());
}

#[test]
fn test_wizard_can_refuse_to_die() {
    let mut game = wizard_game_on(ROOM);
    game.session.player.take_damage(1000, "killed by a test");

    press(&mut game, &[Key::Keypad(5)]);
    assert!(matches!(
        game.top_scene(),
        Some(Scene::Prompt(PromptKind::Resurrect))
    ));

    press(&mut game, &[Key::Char('n')]);
    assert!(game.top_scene().is_none());
    assert!(!game.session.is_dead());
    assert_eq!(game.session.player.deaths, 1);
    assert!(game.session.player.hp > 0);
    assert!(game.renderer.last.contains("Deaths: 1"));
}

#[test]
fn test_wizard_accepting_death_still_acknowledges() {
    let mut game = wizard_game_on(ROOM);
    game.session.player.take_damage(1000, "killed by a test");

    press(&mut game, &[Key::Keypad(5), Key::Char('y')]);
    assert!(matches!(
        game.top_scene(),
        Some(Scene::Prompt(PromptKind::GameOver))
    ));
    press(&mut game, &[Key::Enter]);
    assert!(game.is_terminated());
}

#[test]
fn test_carrying_the_idol_wins() {
    let mut game = game_on(&["#####", "#@&.#", "#####"]);

    press(&mut game, &[Key::Right, Key::Char('g')]);
    assert!(game.session.has_won());
    assert!(matches!(
        game.top_scene(),
        Some(Scene::Prompt(PromptKind::Victory))
    ));

    press(&mut game, &[Key::Enter]);
    assert!(game.is_terminated());
}

#[test]
fn test_keys_after_termination_are_ignored() {
    let mut game = game_on(ROOM);
    press(&mut game, &[Key::Escape, Key::Char('y')]);
    let frames = game.renderer.frames;

    assert_eq!(game.handle_key(Key::Up), troll_temple::Flow::Terminated);
    assert_eq!(game.renderer.frames, frames);
}

#[test]
fn test_wizard_descend_needs_wizard_mode() {
    let mut game = game_on(ROOM);
    press(&mut game, &[Key::Char('w')]);
    assert_eq!(game.session.level.depth, 1);

    let mut game = wizard_game_on(ROOM);
    press(&mut game, &[Key::Char('w')]);
    assert_eq!(game.session.level.depth, 2);
    assert_eq!(game.session.turns, 0);
}
