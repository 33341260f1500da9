use log::{debug, trace};
use rand::{SeedableRng as _, rngs::StdRng};

use crate::board::Board;

pub mod spawn;

/// A directional input. Stateless; the engine never stores it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Clockwise rotations that align this direction with "toward column 0",
    /// so that every move reduces to a single leftward collapse.
    ///
    /// One clockwise turn maps the bottom row onto column 0, so Down needs
    /// one rotation and Up needs three.
    pub fn rotations(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }
}

/// Outcome of one move request. A rejected move carries the untouched
/// board, score, and terminal flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveResult {
    pub accepted: bool,
    pub board: Board,
    pub score: u32,
    pub game_over: bool,
}

/// One game: a board, a score, a terminal flag, and the spawn RNG.
///
/// The session exclusively owns its state; moves mutate it in place and
/// report the outcome as a value. Randomness is confined to the owned RNG
/// so a seeded session replays deterministically.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    score: u32,
    game_over: bool,
    rng: StdRng,
}

impl GameSession {
    /// Start a session with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Start a session that replays deterministically for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let board = spawn::spawn_tile(Board::EMPTY, &mut rng);
        let board = spawn::spawn_tile(board, &mut rng);

        Self {
            board,
            score: 0,
            game_over: false,
            rng,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Discard the current game and reseed a fresh board: two tiles,
    /// score 0, not over. The RNG stream carries on.
    pub fn restart(&mut self) {
        let board = spawn::spawn_tile(Board::EMPTY, &mut self.rng);
        self.board = spawn::spawn_tile(board, &mut self.rng);
        self.score = 0;
        self.game_over = false;
        debug!("session restarted");
    }

    /// Replace the board with an externally prepared position (grid
    /// editor), resetting the score and re-deriving the terminal flag.
    pub fn load_board(&mut self, board: Board) {
        self.board = board;
        self.score = 0;
        self.game_over = board.is_terminal();
    }

    /// Apply one directional move.
    ///
    /// The board is rotated so the move points toward column 0, each row is
    /// collapsed, and the board is rotated back. The move is accepted iff
    /// any cell changed; only then does the score grow, a tile spawn, and
    /// the terminal flag get re-evaluated. A rejected move (including any
    /// move once the session is over) leaves the session untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.game_over {
            trace!("rejecting {direction:?}: session is already over");
            return self.rejected();
        }

        let forward = direction.rotations();

        let mut board = self.board;
        for _ in 0..forward {
            board = board.rotate_cw();
        }

        let (board, points, moved) = board.collapse_left();

        let mut board = board;
        for _ in 0..(4 - forward) % 4 {
            board = board.rotate_cw();
        }

        if !moved {
            trace!("{direction:?} is a no-op");
            return self.rejected();
        }

        self.score += points;
        self.board = spawn::spawn_tile(board, &mut self.rng);
        self.game_over = self.board.is_terminal();

        debug!(
            "{direction:?}: +{points}, score {}, over: {}",
            self.score, self.game_over
        );

        MoveResult {
            accepted: true,
            board: self.board,
            score: self.score,
            game_over: self.game_over,
        }
    }

    fn rejected(&self) -> MoveResult {
        MoveResult {
            accepted: false,
            board: self.board,
            score: self.score,
            game_over: self.game_over,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
