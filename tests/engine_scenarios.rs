//! End-to-end games through the public engine API.

use robo_connect_four::config::{AppConfig, GridConfig};
use robo_connect_four::error::{EngineError, MoveError};
use robo_connect_four::game::{Cell, Grid, Player, Winner};
use robo_connect_four::narration::Phase;
use robo_connect_four::Engine;

// =============================================================================
// Opening
// =============================================================================

#[test]
fn test_first_turn_from_empty_board() {
    let engine = Engine::default();
    let state = engine.new_game();
    assert_eq!(engine.snapshot_and_phase(&state).1, Phase::Intro);

    let mut after_human = Grid::default();
    after_human.drop(3, Player::Human).unwrap();
    let expected = engine.selector().choose_column(&after_human).unwrap();

    let next = engine.apply_human_move(&state, 3).unwrap();
    let (snapshot, phase) = engine.snapshot_and_phase(&next);

    assert_eq!(snapshot.turn_index, 2);
    assert!(!snapshot.terminal);
    assert_eq!(snapshot.winner, None);
    assert_eq!(phase, Phase::Midgame);
    assert_eq!(next.grid().get(0, 3), Cell::Human);

    let row = if expected == 3 { 1 } else { 0 };
    assert_eq!(next.grid().get(row, expected), Cell::Computer);
}

// =============================================================================
// Robot finishing and defending
// =============================================================================

#[test]
fn test_computer_completes_vertical_four() {
    let engine = Engine::default();
    let grid = Grid::from_rows(&[
        ". . . . . . .",
        ". . . . . . .",
        ". . . . . . .",
        "C . . . . . .",
        "C . . . . . .",
        "C . H . H . H",
    ])
    .unwrap();
    let state = engine.state_from_grid(grid, Player::Human);
    assert_eq!(state.turn_index(), 6);

    // The human's column 3 opens a double threat, but the robot wins first
    let next = engine.apply_human_move(&state, 3).unwrap();

    assert_eq!(next.grid().get(3, 0), Cell::Computer);
    assert_eq!(next.winner(), Some(Winner::Computer));
    assert_eq!(next.turn_index(), 8);

    let (snapshot, phase) = engine.snapshot_and_phase(&next);
    assert_eq!(phase, Phase::ComputerWins);
    assert!(snapshot.terminal);
    assert!(snapshot.differential > 0);
}

#[test]
fn test_computer_blocks_three_in_a_row() {
    let engine = Engine::default();
    let grid = Grid::from_rows(&[
        ". . . . . . .",
        ". . . . . . .",
        ". . . . . . .",
        ". . . . . . .",
        ". . . . . . .",
        "H H . . . C C",
    ])
    .unwrap();
    let state = engine.state_from_grid(grid, Player::Human);

    let next = engine.apply_human_move(&state, 2).unwrap();

    assert_eq!(next.grid().get(0, 3), Cell::Computer, "robot must block column 3");
    assert!(!next.is_terminal());
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_rejections_do_not_consume_a_turn() {
    let engine = Engine::default();
    let state = engine.apply_human_move(&engine.new_game(), 3).unwrap();

    for column in [7, 100, usize::MAX] {
        assert!(matches!(
            engine.apply_human_move(&state, column),
            Err(EngineError::Move(MoveError::ColumnOutOfRange { .. }))
        ));
    }

    // Retrying the same bad input gives the same answer
    let first = engine.apply_human_move(&state, 9);
    let second = engine.apply_human_move(&state, 9);
    assert_eq!(first, second);

    let next = engine.apply_human_move(&state, 0).unwrap();
    assert_eq!(next.turn_index(), 4);
}

// =============================================================================
// Whole games
// =============================================================================

#[test]
fn test_leftmost_human_plays_to_the_end() {
    let engine = Engine::default();
    let mut state = engine.new_game();
    let mut turns = 0;

    while !state.is_terminal() {
        let column = state.legal_columns()[0];
        state = engine.apply_human_move(&state, column).unwrap();
        assert!(state.grid().heights_consistent());
        assert_eq!(state.grid().token_count(), state.turn_index());
        turns += 1;
        assert!(turns <= 21, "a 6x7 game cannot outlast 21 human moves");
    }

    let (snapshot, phase) = engine.snapshot_and_phase(&state);
    assert!(snapshot.terminal);
    assert_ne!(phase, Phase::Midgame);
    assert!(matches!(
        engine.apply_human_move(&state, 0),
        Err(EngineError::Move(MoveError::GameAlreadyOver))
    ));

    let fresh = engine.reset();
    assert_eq!(engine.snapshot_and_phase(&fresh).1, Phase::Intro);
    assert_eq!(fresh, engine.new_game());
}

#[test]
fn test_game_on_custom_grid() {
    let config = AppConfig {
        grid: GridConfig { rows: 4, cols: 5 },
        ..AppConfig::default()
    };
    let engine = Engine::new(config).unwrap();
    let mut state = engine.new_game();
    assert_eq!(engine.view(&state).board.len(), 4);

    while !state.is_terminal() {
        let column = *state.legal_columns().last().unwrap();
        state = engine.apply_human_move(&state, column).unwrap();
    }

    let phase = engine.snapshot_and_phase(&state).1;
    match state.winner() {
        Some(Winner::Computer) => assert_eq!(phase, Phase::ComputerWins),
        Some(Winner::Human) => assert_eq!(phase, Phase::HumanWins),
        Some(Winner::Draw) => assert_eq!(phase, Phase::Draw),
        None => unreachable!("loop ends on a terminal state"),
    }
}
