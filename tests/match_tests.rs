//! Match session tests.
//!
//! These drive a `Match` through its public commands the way a
//! presentation layer would: submit a toss, pick a piece, pick a cell.

use rust_yut::board::{CellId, RouteId};
use rust_yut::core::{
    Command, GameRng, MatchConfig, PieceId, PlayerId, PlayerSpec, RulesError, TurnEvent,
};
use rust_yut::rules::{Match, TurnPhase};
use rust_yut::throw::{RandomThrower, StickToss, ThrowResult, ThrowSource};

const T: bool = true;
const F: bool = false;

fn roster(count: u32) -> Vec<PlayerSpec> {
    (0..count)
        .map(|i| PlayerSpec::new(format!("Player {i}"), i))
        .collect()
}

fn new_match(players: u32, pieces: usize) -> Match {
    Match::start(MatchConfig::new().pieces_per_player(pieces), roster(players)).unwrap()
}

fn throw(game: &mut Match, result: ThrowResult) {
    let thrown = game
        .submit_throw_observation(&StickToss::for_result(result))
        .unwrap();
    assert_eq!(thrown, result);
}

/// Throw and move `piece` to `cell` in one go.
fn play(game: &mut Match, result: ThrowResult, piece: u32, cell: CellId) {
    throw(game, result);
    game.resolve_move(PieceId(piece), cell, None).unwrap();
}

// ============================================================================
// Throw mapping
// ============================================================================

/// Test that settled tosses map to the expected results.
#[test]
fn test_throw_mapping_scenarios() {
    let cases = [
        (StickToss::new([T, T, T, T], 0), ThrowResult::Mo),
        (StickToss::new([F, F, F, F], 0), ThrowResult::Yut),
        (StickToss::new([T, T, T, F], 3), ThrowResult::Backdo),
        (StickToss::new([T, T, T, F], 0), ThrowResult::Do),
        (StickToss::new([T, F, T, F], 1), ThrowResult::Gae),
        (StickToss::new([F, F, T, F], 2), ThrowResult::Geol),
    ];
    for (toss, expected) in cases {
        assert_eq!(toss.evaluate(), Ok(expected), "{toss:?}");
    }

    // A foul is a foul whatever the sticks show.
    for face_up in [[T, T, T, T], [F, F, F, F], [T, T, T, F]] {
        let toss = StickToss::new(face_up, 3).with_foul(true);
        assert_eq!(toss.evaluate(), Ok(ThrowResult::Nak));
    }
}

/// Test that a foul keeps the same player throwing.
#[test]
fn test_nak_forfeits_throw_not_turn() {
    let mut game = new_match(2, 4);
    let toss = StickToss::new([T, T, T, T], 0).with_foul(true);

    assert_eq!(game.submit_throw_observation(&toss), Ok(ThrowResult::Nak));
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert_eq!(game.game_phase(), TurnPhase::AwaitingThrow);
    assert_eq!(game.active_throw(), None);
}

/// Test that a bad marked-stick index is rejected without changing the match.
#[test]
fn test_invalid_marked_stick_rejected() {
    let mut game = new_match(2, 4);
    let toss = StickToss::new([T; 4], 4);

    assert_eq!(
        game.submit_throw_observation(&toss),
        Err(RulesError::InvalidMarkedStick(4))
    );
    assert_eq!(game.game_phase(), TurnPhase::AwaitingThrow);
    assert!(game.history().is_empty());
}

// ============================================================================
// Route resolution through the session
// ============================================================================

/// Test that Backdo offers nothing to a piece waiting at the start.
#[test]
fn test_backdo_at_start_is_empty() {
    let mut game = new_match(2, 4);
    play(&mut game, ThrowResult::Do, 0, CellId::new(5, 6));
    play(&mut game, ThrowResult::Do, 4, CellId::new(5, 6));

    // Piece 0 was captured back to start; give player 0 a piece on the board.
    assert!(game.piece(PieceId(0)).unwrap().is_at_start());
    play(&mut game, ThrowResult::Gae, 0, CellId::new(4, 6));
    play(&mut game, ThrowResult::Do, 5, CellId::new(5, 6));

    throw(&mut game, ThrowResult::Backdo);
    assert_eq!(game.game_phase(), TurnPhase::AwaitingPieceSelection);

    for piece in [1, 2, 3] {
        assert!(game.legal_destinations(PieceId(piece)).unwrap().is_empty());
    }
    let back = game.legal_destinations(PieceId(0)).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].cell, CellId::new(5, 6));
}

/// Test that a throw nobody can use is forfeited and the turn passes.
#[test]
fn test_unusable_throw_forfeits() {
    let mut game = new_match(2, 4);
    throw(&mut game, ThrowResult::Backdo);

    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.game_phase(), TurnPhase::AwaitingThrow);

    let events: Vec<_> = game.history().iter().map(|r| r.event.clone()).collect();
    assert_eq!(
        events,
        vec![
            TurnEvent::Threw(ThrowResult::Backdo),
            TurnEvent::Forfeited(ThrowResult::Backdo),
        ]
    );
}

/// Test that resting on a corner offers the diagonal.
#[test]
fn test_corner_offers_shortcut() {
    let mut game = new_match(2, 4);
    play(&mut game, ThrowResult::Mo, 0, CellId::new(0, 6));

    // Mo grants another throw.
    assert_eq!(game.current_player(), PlayerId::new(0));
    throw(&mut game, ThrowResult::Geol);

    let options = game.select_piece(PieceId(0)).unwrap();
    let cells: Vec<_> = options.iter().map(|d| d.cell).collect();
    assert_eq!(cells, vec![CellId::new(0, 2), CellId::new(3, 3)]);
    assert_eq!(game.game_phase(), TurnPhase::AwaitingDestination);
    assert_eq!(game.selected_piece(), Some(PieceId(0)));
    assert!(game.piece(PieceId(0)).unwrap().selected);

    game.resolve_move(PieceId(0), CellId::new(3, 3), None).unwrap();
    assert_eq!(
        game.piece(PieceId(0)).unwrap().route,
        RouteId::FIRST_CORNER_DIAGONAL
    );
    assert!(!game.piece(PieceId(0)).unwrap().selected);
}

// ============================================================================
// Move resolution
// ============================================================================

/// Test that moving to an empty cell updates occupancy on both ends.
#[test]
fn test_move_round_trip_occupancy() {
    let mut game = new_match(2, 4);
    throw(&mut game, ThrowResult::Gae);

    let before = game.piece(PieceId(2)).unwrap().cell;
    let outcome = game.resolve_move(PieceId(2), CellId::new(4, 6), None).unwrap();

    assert_eq!(outcome.moved.as_slice(), &[PieceId(2)]);
    assert_eq!(game.cell_occupants(CellId::new(4, 6)).unwrap(), &[PieceId(2)]);
    assert!(!game.cell_occupants(before).unwrap().contains(&PieceId(2)));
}

/// Test that captured pieces go back to start on the outer route.
#[test]
fn test_capture_resets_pieces() {
    let mut game = new_match(2, 2);
    play(&mut game, ThrowResult::Gae, 0, CellId::new(4, 6));

    throw(&mut game, ThrowResult::Gae);
    let outcome = game.resolve_move(PieceId(2), CellId::new(4, 6), None).unwrap();

    assert!(outcome.is_capture());
    assert_eq!(outcome.captured.as_slice(), &[PieceId(0)]);

    let captured = game.piece(PieceId(0)).unwrap();
    assert_eq!(captured.cell, CellId::START);
    assert_eq!(captured.route, RouteId::OUTER_RING);
    assert!(!captured.is_grouped());
    assert_eq!(game.cell_occupants(CellId::new(4, 6)).unwrap(), &[PieceId(2)]);
}

/// Test that a capture can earn another throw when configured.
#[test]
fn test_capture_grants_throw() {
    let config = MatchConfig::new().pieces_per_player(2).capture_grants_throw(true);
    let mut game = Match::start(config, roster(2)).unwrap();
    play(&mut game, ThrowResult::Gae, 0, CellId::new(4, 6));
    play(&mut game, ThrowResult::Gae, 2, CellId::new(4, 6));

    assert_eq!(game.current_player(), PlayerId::new(1));
}

/// Test that landing on a carried group captures all of it.
#[test]
fn test_capture_takes_whole_group() {
    let mut game = new_match(2, 2);
    play(&mut game, ThrowResult::Do, 0, CellId::new(5, 6));
    play(&mut game, ThrowResult::Gae, 2, CellId::new(4, 6));

    throw(&mut game, ThrowResult::Do);
    let outcome = game
        .resolve_move(PieceId(1), CellId::new(5, 6), Some(true))
        .unwrap();
    assert!(outcome.carried);
    assert_eq!(game.group_of(PieceId(0)).unwrap(), vec![PieceId(0), PieceId(1)]);

    throw(&mut game, ThrowResult::Do);
    let outcome = game.resolve_move(PieceId(3), CellId::new(5, 6), None).unwrap();

    assert_eq!(outcome.captured.as_slice(), &[PieceId(0), PieceId(1)]);
    for piece in [PieceId(0), PieceId(1)] {
        assert!(game.piece(piece).unwrap().is_at_start());
        assert_eq!(game.group_of(piece).unwrap(), vec![piece]);
    }
}

/// Test that carried groups resolve identically for every member.
#[test]
fn test_carried_group_moves_together() {
    let mut game = new_match(2, 2);
    play(&mut game, ThrowResult::Do, 0, CellId::new(5, 6));
    play(&mut game, ThrowResult::Gae, 2, CellId::new(4, 6));

    throw(&mut game, ThrowResult::Do);
    game.resolve_move(PieceId(1), CellId::new(5, 6), Some(true))
        .unwrap();
    play(&mut game, ThrowResult::Geol, 2, CellId::new(0, 6));

    throw(&mut game, ThrowResult::Gae);
    let from_first = game.legal_destinations(PieceId(0)).unwrap();
    let from_second = game.legal_destinations(PieceId(1)).unwrap();
    assert_eq!(from_first, from_second);

    let outcome = game.resolve_move(PieceId(1), CellId::new(2, 6), None).unwrap();
    assert_eq!(outcome.moved.as_slice(), &[PieceId(0), PieceId(1)]);
    assert_eq!(
        game.cell_occupants(CellId::new(2, 6)).unwrap(),
        &[PieceId(0), PieceId(1)]
    );
    assert!(game.cell_occupants(CellId::new(5, 6)).unwrap().is_empty());
}

/// Test that declining to carry leaves two independent groups on a cell.
#[test]
fn test_stack_without_carry() {
    let config = MatchConfig::new().pieces_per_player(2).default_carry(false);
    let mut game = Match::start(config, roster(2)).unwrap();
    play(&mut game, ThrowResult::Do, 0, CellId::new(5, 6));
    play(&mut game, ThrowResult::Gae, 2, CellId::new(4, 6));
    play(&mut game, ThrowResult::Do, 1, CellId::new(5, 6));

    assert_eq!(game.group_of(PieceId(0)).unwrap(), vec![PieceId(0)]);
    assert_eq!(game.group_of(PieceId(1)).unwrap(), vec![PieceId(1)]);
    assert_eq!(game.state().groups_at(CellId::new(5, 6)).len(), 2);
}

// ============================================================================
// Turn sequencing
// ============================================================================

/// Test that a plain throw passes the turn to the next player.
#[test]
fn test_turn_advances_after_gae() {
    let mut game = new_match(3, 4);

    for expected_next in [1u8, 2, 0] {
        let before = game.current_player();
        throw(&mut game, ThrowResult::Gae);
        let piece = game.pieces_of(before).unwrap()[0].id;
        let outcome = game.resolve_move(piece, CellId::new(4, 6), None).unwrap();

        assert!(!outcome.player_won);
        assert_ne!(game.current_player(), before);
        assert_eq!(game.current_player(), PlayerId::new(expected_next));
    }
    assert_eq!(game.turn_number(), 4);
}

/// Test that Mo and Yut keep the same player.
#[test]
fn test_extra_throw_after_mo_and_yut() {
    let mut game = new_match(2, 4);
    play(&mut game, ThrowResult::Mo, 0, CellId::new(0, 6));
    assert_eq!(game.current_player(), PlayerId::new(0));

    play(&mut game, ThrowResult::Yut, 1, CellId::new(1, 6));
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert_eq!(game.turn_number(), 1);

    play(&mut game, ThrowResult::Do, 2, CellId::new(5, 6));
    assert_eq!(game.current_player(), PlayerId::new(1));
}

/// Test that commands out of phase are rejected.
#[test]
fn test_commands_rejected_out_of_phase() {
    let mut game = new_match(2, 4);

    assert_eq!(
        game.resolve_move(PieceId(0), CellId::new(5, 6), None),
        Err(RulesError::InvalidCommandForState {
            command: Command::Move,
            phase: TurnPhase::AwaitingThrow
        })
    );
    assert!(matches!(
        game.select_piece(PieceId(0)),
        Err(RulesError::InvalidCommandForState { .. })
    ));

    throw(&mut game, ThrowResult::Do);
    assert_eq!(
        game.submit_throw_observation(&StickToss::for_result(ThrowResult::Do)),
        Err(RulesError::InvalidCommandForState {
            command: Command::Throw,
            phase: TurnPhase::AwaitingPieceSelection
        })
    );
}

/// Test ownership and destination validation.
#[test]
fn test_move_validation_errors() {
    let mut game = new_match(2, 4);
    throw(&mut game, ThrowResult::Gae);

    assert_eq!(
        game.select_piece(PieceId(4)),
        Err(RulesError::NotCurrentPlayersPiece {
            piece: PieceId(4),
            owner: PlayerId::new(1),
            current: PlayerId::new(0)
        })
    );
    assert_eq!(
        game.resolve_move(PieceId(0), CellId::new(2, 6), None),
        Err(RulesError::IllegalDestination {
            piece: PieceId(0),
            cell: CellId::new(2, 6)
        })
    );
    assert_eq!(
        game.resolve_move(PieceId(0), CellId::new(3, 0), None),
        Err(RulesError::UnknownCell(CellId::new(3, 0)))
    );
    assert_eq!(
        game.select_piece(PieceId(40)),
        Err(RulesError::UnknownPiece(PieceId(40)))
    );

    // Nothing changed.
    assert_eq!(game.game_phase(), TurnPhase::AwaitingPieceSelection);
    assert_eq!(game.cell_occupants(CellId::START).unwrap().len(), 8);
}

// ============================================================================
// Winning
// ============================================================================

/// Test that finishing the last piece ends the match for good.
#[test]
fn test_win_is_terminal() {
    let mut game = new_match(2, 1);
    play(&mut game, ThrowResult::Mo, 0, CellId::new(0, 6));
    play(&mut game, ThrowResult::Geol, 0, CellId::new(3, 3));
    play(&mut game, ThrowResult::Do, 1, CellId::new(5, 6));

    throw(&mut game, ThrowResult::Geol);
    let options = game.legal_destinations(PieceId(0)).unwrap();
    assert!(options.iter().any(|d| d.cell == CellId::GOAL));

    let outcome = game.resolve_move(PieceId(0), CellId::GOAL, None).unwrap();
    assert!(outcome.reached_goal);
    assert!(outcome.player_won);

    let over = TurnPhase::GameOver {
        winner: PlayerId::new(0),
    };
    assert_eq!(game.game_phase(), over);
    assert!(game.piece(PieceId(0)).unwrap().is_finished());

    assert_eq!(
        game.submit_throw_observation(&StickToss::for_result(ThrowResult::Do)),
        Err(RulesError::InvalidCommandForState {
            command: Command::Throw,
            phase: over
        })
    );
    assert!(matches!(
        game.select_piece(PieceId(1)),
        Err(RulesError::InvalidCommandForState { .. })
    ));
    assert!(matches!(
        game.legal_destinations(PieceId(1)),
        Err(RulesError::InvalidCommandForState { .. })
    ));
    assert!(matches!(
        game.resolve_move(PieceId(1), CellId::new(4, 6), None),
        Err(RulesError::InvalidCommandForState { .. })
    ));
}

/// Test that overshooting the goal needs the option turned on.
#[test]
fn test_overshoot_option() {
    for allow in [false, true] {
        let config = MatchConfig::new().pieces_per_player(1).allow_overshoot(allow);
        let mut game = Match::start(config, roster(2)).unwrap();
        play(&mut game, ThrowResult::Mo, 0, CellId::new(0, 6));
        play(&mut game, ThrowResult::Geol, 0, CellId::new(3, 3));
        play(&mut game, ThrowResult::Do, 1, CellId::new(5, 6));

        throw(&mut game, ThrowResult::Mo);
        let reaches_goal = game
            .legal_destinations(PieceId(0))
            .unwrap()
            .iter()
            .any(|d| d.cell == CellId::GOAL);
        assert_eq!(reaches_goal, allow);
    }
}

// ============================================================================
// Full games
// ============================================================================

/// Play a random match to the end, checking board invariants as it goes.
fn play_random_match(seed: u64, players: u32, pieces: usize) -> Match {
    let mut rng = GameRng::new(seed);
    let mut thrower = RandomThrower::new(rng.fork()).with_foul_probability(0.05);
    let mut game = new_match(players, pieces);

    for _ in 0..20_000 {
        if game.game_phase().is_over() {
            break;
        }

        game.submit_throw_observation(&thrower.toss()).unwrap();
        if game.game_phase() != TurnPhase::AwaitingPieceSelection {
            continue;
        }

        let current = game.current_player();
        let movable: Vec<_> = game
            .pieces_of(current)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .filter(|&id| !game.legal_destinations(id).unwrap().is_empty())
            .collect();
        let piece = *rng.choose(&movable).unwrap();
        let options = game.select_piece(piece).unwrap();
        let destination = *rng.choose(&options).unwrap();
        let carry = rng.gen_bool(0.5);

        game.resolve_move(piece, destination.cell, Some(carry)).unwrap();
    }

    game
}

/// Test that random matches finish with a winner who has finished.
#[test]
fn test_random_matches_finish() {
    for (seed, players, pieces) in [(1, 2, 4), (2, 3, 2), (3, 4, 1), (4, 4, 4)] {
        let game = play_random_match(seed, players, pieces);

        let TurnPhase::GameOver { winner } = game.game_phase() else {
            panic!("match {seed} did not finish");
        };
        assert!(game.state().has_finished(winner));
        assert!(game
            .pieces_of(winner)
            .unwrap()
            .iter()
            .all(|p| p.is_finished()));
    }
}

/// Test that the same seed replays the same match.
#[test]
fn test_random_match_is_deterministic() {
    let first = play_random_match(77, 3, 3);
    let second = play_random_match(77, 3, 3);

    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.history(), second.history());
}

/// Test that snapshots survive a JSON round trip.
#[test]
fn test_snapshot_serialization() {
    let mut game = new_match(3, 2);
    play(&mut game, ThrowResult::Gae, 0, CellId::new(4, 6));

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: rust_yut::core::MatchSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot, restored);
    assert_eq!(restored.current_player, PlayerId::new(1));
    assert_eq!(restored.players.len(), 3);
    assert_eq!(restored.pieces[0].cell, CellId::new(4, 6));
}
