//! Minimax search and move selection

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Side};
use crate::depth::search_depth;
use crate::eval::{board_value, WIN_VALUE};
use crate::game::GameState;
use crate::moves::{Move, MoveGenerator, StandardRules};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Nodes scoring at or below this for the searching side are cut off and score exactly this
const PRUNE_FLOOR: i32 = -4;

/// Returned by a maximizing node without legal moves
pub const NO_MOVES_MAX: i32 = -100_000;

/// Returned by a minimizing node without legal moves
pub const NO_MOVES_MIN: i32 = 100_000;

/// Seed used by [`MinimaxAI::new`]
const DEFAULT_SEED: u64 = 42;

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Result of a root search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The selected move
    pub mv: Move,
    /// Minimax score of the selected move
    pub score: i32,
    /// Depth the root moves were searched to
    pub depth: u32,
    /// Number of root moves sharing the best score
    pub tied: usize,
}

/// Minimax player with a seeded tie-breaking source
pub struct MinimaxAI<G = StandardRules> {
    generator: G,
    rng: ChaCha8Rng,
}

impl MinimaxAI<StandardRules> {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(StandardRules, seed)
    }
}

impl Default for MinimaxAI<StandardRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator> MinimaxAI<G> {
    pub fn with_generator(generator: G, seed: u64) -> Self {
        Self {
            generator,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Pick a move for `side`, `None` if it cannot move
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        choose_move(&self.generator, board, side, &mut self.rng)
    }

    /// Like [`choose_move`](Self::choose_move) but also reports score and depth
    pub fn analyze(&mut self, board: &Board, side: Side) -> Option<SearchOutcome> {
        analyze(&self.generator, board, side, &mut self.rng)
    }

    /// Evaluate a position
    pub fn evaluate(&self, board: &Board, side: Side) -> i32 {
        board_value(board, side)
    }

    /// Play both sides until the game ends
    pub fn play_game(&mut self, initial: GameState) -> (GameState, Vec<Move>) {
        let mut state = initial;
        let mut history = Vec::new();

        while !state.is_over() {
            match self.choose_move(state.board(), state.side_to_move()) {
                Some(mv) => {
                    state.apply_move(&mv);
                    history.push(mv);
                }
                None => state.concede(),
            }
        }

        (state, history)
    }
}

// ============================================================================
// MOVE SELECTION
// ============================================================================

/// Score every legal root move with [`minimax`] and pick uniformly among the best
pub fn choose_move<G, R>(generator: &G, board: &Board, side: Side, rng: &mut R) -> Option<Move>
where
    G: MoveGenerator + ?Sized,
    R: Rng + ?Sized,
{
    analyze(generator, board, side, rng).map(|outcome| outcome.mv)
}

/// Root search behind [`choose_move`]
pub fn analyze<G, R>(generator: &G, board: &Board, side: Side, rng: &mut R) -> Option<SearchOutcome>
where
    G: MoveGenerator + ?Sized,
    R: Rng + ?Sized,
{
    let moves = generator.legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }

    // Depth comes from the position before any root move is played
    let depth = search_depth(board, side);

    let scores: Vec<i32> = moves
        .iter()
        .map(|mv| {
            let child = board.apply_move(Some(mv), side);
            minimax(generator, &child, side, side.opponent(), depth)
        })
        .collect();

    let best = scores.iter().copied().max()?;
    let best_moves: Vec<&Move> = moves
        .iter()
        .zip(&scores)
        .filter(|&(_, &score)| score == best)
        .map(|(mv, _)| mv)
        .collect();

    let mv = (*best_moves.choose(rng)?).clone();

    tracing::debug!(
        "{} to move: {} candidates, depth {}, best score {} shared by {}",
        side,
        moves.len(),
        depth,
        best,
        best_moves.len()
    );

    Some(SearchOutcome {
        mv,
        score: best,
        depth,
        tied: best_moves.len(),
    })
}

// ============================================================================
// MINIMAX
// ============================================================================

/// Score `board` for `my_side` with `to_move` about to play and `depth` plies left.
///
/// At depth zero the side to move still plays its best one-ply reply before
/// the static evaluation. Interior nodes stop early when `my_side` is already
/// at or below [`PRUNE_FLOOR`] or has no opponent left, whichever side is to
/// move. A node whose side has no legal moves returns [`NO_MOVES_MAX`] or
/// [`NO_MOVES_MIN`] rather than a loss score.
pub fn minimax<G>(generator: &G, board: &Board, my_side: Side, to_move: Side, depth: u32) -> i32
where
    G: MoveGenerator + ?Sized,
{
    if depth == 0 {
        let reply = if to_move == my_side {
            get_max_move(generator, board, my_side)
        } else {
            get_min_move(generator, board, my_side)
        };
        let next = board.apply_move(reply.as_ref(), to_move);
        return board_value(&next, my_side);
    }

    let value = board_value(board, my_side);
    if value <= PRUNE_FLOOR {
        return PRUNE_FLOOR;
    }
    if value == WIN_VALUE {
        return WIN_VALUE;
    }

    let moves = generator.legal_moves(board, to_move);
    let children = moves.iter().map(|mv| {
        let child = board.apply_move(Some(mv), to_move);
        minimax(generator, &child, my_side, to_move.opponent(), depth - 1)
    });

    if to_move == my_side {
        children.fold(NO_MOVES_MAX, i32::max)
    } else {
        children.fold(NO_MOVES_MIN, i32::min)
    }
}

/// `side`'s move with the best immediate value for `side`. Ties keep the first move.
pub fn get_max_move<G>(generator: &G, board: &Board, side: Side) -> Option<Move>
where
    G: MoveGenerator + ?Sized,
{
    let mut best: Option<(Move, i32)> = None;
    for mv in generator.legal_moves(board, side) {
        let value = board_value(&board.apply_move(Some(&mv), side), side);
        if best.as_ref().map_or(true, |&(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }
    best.map(|(mv, _)| mv)
}

/// The opponent's reply that leaves `my_side` with the lowest immediate value.
/// Ties keep the first move.
pub fn get_min_move<G>(generator: &G, board: &Board, my_side: Side) -> Option<Move>
where
    G: MoveGenerator + ?Sized,
{
    let opponent = my_side.opponent();
    let mut best: Option<(Move, i32)> = None;
    for mv in generator.legal_moves(board, opponent) {
        let value = board_value(&board.apply_move(Some(&mv), opponent), my_side);
        if best.as_ref().map_or(true, |&(_, best_value)| value < best_value) {
            best = Some((mv, value));
        }
    }
    best.map(|(mv, _)| mv)
}

// ============================================================================
// TESTS
// ============================================================================
