use log::trace;
use rand::{Rng, seq::IndexedRandom as _};

use crate::board::Board;

/// Chance that a spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// Place one tile on a uniformly chosen empty cell: 2 with probability
/// 0.9, 4 otherwise. A full board comes back unchanged; after an accepted
/// move there is always at least one empty cell, but the function stays
/// total.
pub fn spawn_tile<R: Rng>(board: Board, rng: &mut R) -> Board {
    let empty = board.empty_cells();

    let Some(&(row, col)) = empty.choose(rng) else {
        return board;
    };

    let value = if rng.random_bool(FOUR_TILE_PROBABILITY) {
        4
    } else {
        2
    };

    trace!("spawned {value} at ({row}, {col})");

    let mut board = board;
    board.set_cell(row, col, value);
    board
}
