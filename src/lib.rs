pub mod board;
pub mod game;
pub mod ui;

/// Slide one row toward index 0 and merge equal neighbours.
///
/// Zeros are dropped first, then a single left-to-right pass merges each
/// equal pair into a doubled tile. A tile created by a merge is consumed by
/// that merge and cannot merge again in the same pass. The result is
/// right-padded with zeros back to four cells.
///
/// Returns the collapsed row and the points earned, i.e. the sum of the
/// newly created tile values.
pub fn collapse_row(row: [u32; 4]) -> ([u32; 4], u32) {
    let mut out = [0u32; 4];
    let mut points = 0;
    let mut write = 0;

    let mut pending = None;
    for value in row.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(held) if held == value => {
                out[write] = held * 2;
                points += held * 2;
                write += 1;
                pending = None;
            }
            Some(held) => {
                out[write] = held;
                write += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    if let Some(held) = pending {
        out[write] = held;
    }

    (out, points)
}
