//! Integration tests for the checkers engine
//!
//! Tests the full stack: board model, move generation, search and match play

use checkers_core::{
    ai::{analyze, choose_move, minimax},
    board::{Board, Pos, Side, BLACK_MAN, RED_KING, RED_MAN},
    board_value, search_depth, GameResult, GameState, MinimaxAI, Move, MoveGenerator, Position,
    StandardRules, WIN_VALUE,
};
use checkers_match::{play_match, GameRunner, MatchConfig, PlayerType};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Generator that only ever offers a fixed list of moves
struct Scripted(Vec<Move>);

impl MoveGenerator for Scripted {
    fn legal_moves(&self, _board: &Board, _side: Side) -> Vec<Move> {
        self.0.clone()
    }
}

/// Midgame position (9 pieces) where Black's only legal move is a capture
fn midgame() -> Position {
    Position::from_text(
        "black
         .r.r....
         ........
         .....r..
         ....r...
         .....b..
         b...b...
         .b......
         ......b.",
    )
    .unwrap()
}

// ============================================================================
// ENGINE TESTS
// ============================================================================

#[test]
fn test_opening_move_for_red() {
    let board = Board::initial();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mv = choose_move(&StandardRules, &board, Side::Red, &mut rng).expect("Red can move");

    assert_eq!(board.get(mv.from()), RED_MAN);
    let next = board.apply_move(Some(&mv), Side::Red);
    assert!(next.total_pieces() <= board.total_pieces());
    assert_eq!(next.count_pieces(Side::Red), 12);
}

#[test]
fn test_chosen_move_comes_from_generator() {
    let scripted = Scripted(vec![
        Move::step(Pos::new(2, 1), Pos::new(3, 0)),
        Move::step(Pos::new(2, 7), Pos::new(3, 6)),
    ]);
    let mut ai = MinimaxAI::with_generator(&scripted, 1);
    let mv = ai.choose_move(&Board::initial(), Side::Red).unwrap();
    assert!(scripted.0.contains(&mv));

    let empty = Scripted(vec![]);
    let mut ai = MinimaxAI::with_generator(&empty, 1);
    assert!(ai.choose_move(&Board::initial(), Side::Red).is_none());
}

#[test]
fn test_midgame_search() {
    let position = midgame();
    assert_eq!(search_depth(&position.board, position.side), 5);

    let moves = StandardRules.legal_moves(&position.board, position.side);
    assert!(moves.iter().all(Move::is_capture));

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let outcome = analyze(&StandardRules, &position.board, position.side, &mut rng).unwrap();
    assert!(moves.contains(&outcome.mv));
    assert_eq!(outcome.depth, 5);
    assert_eq!(outcome.tied, 1);
    assert_eq!(outcome.mv.to(), Pos::new(2, 3));
}

#[test]
fn test_lone_piece_scores_as_win() {
    let board = Board::empty().with(Pos::new(4, 5), RED_MAN);
    assert_eq!(board_value(&board, Side::Red), 1000);
    assert_eq!(minimax(&StandardRules, &board, Side::Red, Side::Black, 4), WIN_VALUE);
}

#[test]
fn test_engine_finishes_with_double_jump() {
    let board = Board::empty()
        .with(Pos::new(2, 1), RED_MAN)
        .with(Pos::new(3, 2), BLACK_MAN)
        .with(Pos::new(5, 4), BLACK_MAN);
    let mut ai = MinimaxAI::with_seed(17);
    let (final_state, history) = ai.play_game(GameState::new(board, Side::Red, 40));

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].hops(), &[Pos::new(2, 1), Pos::new(4, 3), Pos::new(6, 5)]);
    assert_eq!(final_state.result(), GameResult::RedWins);
    assert_eq!(final_state.board().count_pieces(Side::Black), 0);
}

// ============================================================================
// POSITION FILE TESTS
// ============================================================================

#[test]
fn test_position_file_round_trip() {
    let position = midgame();
    let path = std::env::temp_dir().join(format!("checkers-midgame-{}.json", std::process::id()));
    std::fs::write(&path, position.to_json().unwrap()).unwrap();

    let loaded = Position::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.board, position.board);
    assert_eq!(loaded.side, Side::Black);
}

// ============================================================================
// MATCH TESTS
// ============================================================================

#[test]
fn test_random_match() {
    let config = MatchConfig::new(PlayerType::Random, PlayerType::Random)
        .with_games(6)
        .with_max_plies(120)
        .with_seed(3)
        .with_parallel(true);
    let result = play_match(&config);

    assert_eq!(result.games_played, 6);
    assert_eq!(result.first_wins + result.second_wins + result.draws, 6);
    assert_eq!(result.red_wins + result.black_wins + result.draws, 6);
    assert!(result.games.iter().all(|g| g.outcome.result != GameResult::Ongoing));
}

#[test]
fn test_minimax_game_from_endgame_position() {
    let board = Board::empty()
        .with(Pos::new(2, 3), RED_KING)
        .with(Pos::new(6, 1), BLACK_MAN)
        .with(Pos::new(6, 5), BLACK_MAN);
    let mut runner = GameRunner::new(PlayerType::Minimax, PlayerType::Random, 30, 11);
    let outcome = runner.play_from(board, Side::Red);

    assert_ne!(outcome.result, GameResult::Ongoing);
    assert!(outcome.plies <= 30);
}
