//! Game runner - executes single games
//!
//! Level 3 - Step-level implementation

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use checkers_core::{Board, GameResult, GameState, MinimaxAI, Move, MoveGenerator, Side, StandardRules};

use crate::config::PlayerType;

/// A seated player, owning its own random source
pub enum Player {
    Minimax(MinimaxAI),
    Random(ChaCha8Rng),
}

impl Player {
    pub fn new(player_type: PlayerType, seed: u64) -> Self {
        match player_type {
            PlayerType::Minimax => Player::Minimax(MinimaxAI::with_seed(seed)),
            PlayerType::Random => Player::Random(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Move for `side`, `None` if it has none
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        match self {
            Player::Minimax(ai) => ai.choose_move(board, side),
            Player::Random(rng) => StandardRules.legal_moves(board, side).choose(rng).cloned(),
        }
    }
}

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Final game result
    pub result: GameResult,
    /// Number of plies played
    pub plies: u32,
    /// Move history
    pub moves: Vec<Move>,
}

impl GameOutcome {
    pub fn red_wins(&self) -> bool {
        self.result == GameResult::RedWins
    }

    pub fn black_wins(&self) -> bool {
        self.result == GameResult::BlackWins
    }

    pub fn is_draw(&self) -> bool {
        self.result == GameResult::Draw
    }

    /// Get winner (None for draw)
    pub fn winner(&self) -> Option<Side> {
        self.result.winner()
    }
}

/// Play one game to completion between two seated players
pub fn play_game(initial: GameState, red: &mut Player, black: &mut Player) -> GameOutcome {
    let mut state = initial;
    let mut moves = Vec::new();

    while !state.is_over() {
        let side = state.side_to_move();
        let player = match side {
            Side::Red => &mut *red,
            Side::Black => &mut *black,
        };

        match player.choose_move(state.board(), side) {
            Some(mv) => {
                state.apply_move(&mv);
                moves.push(mv);
            }
            None => state.concede(),
        }
    }

    tracing::debug!("Game over after {} plies: {:?}", state.ply(), state.result());

    GameOutcome {
        result: state.result(),
        plies: state.ply(),
        moves,
    }
}

/// Game runner that seats fresh players for every game
pub struct GameRunner {
    red: PlayerType,
    black: PlayerType,
    max_plies: u32,
    /// Random seed counter
    seed_counter: u64,
}

impl GameRunner {
    pub fn new(red: PlayerType, black: PlayerType, max_plies: u32, seed: u64) -> Self {
        Self {
            red,
            black,
            max_plies,
            seed_counter: seed,
        }
    }

    /// Play a game from the standard opening
    pub fn play(&mut self) -> GameOutcome {
        self.play_from(Board::initial(), Side::Red)
    }

    /// Play a game from an arbitrary position
    pub fn play_from(&mut self, board: Board, side_to_move: Side) -> GameOutcome {
        let mut red = Player::new(self.red, self.next_seed());
        let mut black = Player::new(self.black, self.next_seed());
        play_game(GameState::new(board, side_to_move, self.max_plies), &mut red, &mut black)
    }

    /// Get next seed and increment counter
    fn next_seed(&mut self) -> u64 {
        let seed = self.seed_counter;
        self.seed_counter = self.seed_counter.wrapping_add(1);
        seed
    }

    /// Reset seed counter
    pub fn reset_seed(&mut self, seed: u64) {
        self.seed_counter = seed;
    }
}
