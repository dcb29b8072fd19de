//! Tic-tac-toe position evaluation.
//!
//! [Tic-tac-toe](https://en.wikipedia.org/wiki/Tic-tac-toe)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A mark placed on the board. Noughts are written as the digit `0`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Mark {
    /// Crosses.
    #[strum(to_string = "X", serialize = "x")]
    #[serde(rename = "X", alias = "x")]
    X,
    /// Noughts.
    #[strum(to_string = "0", serialize = "O", serialize = "o")]
    #[serde(rename = "0", alias = "O", alias = "o")]
    Nought,
}

/// The mark that fills a complete row, column or diagonal, if any.
///
/// `board` is a square grid indexed `[row][column]` with `None` for empty
/// cells; 3×3 is the usual size but any N×N board works. Lines are checked
/// row by row, then the two diagonals. An empty board, or one with missing
/// cells, has no winner on the affected lines.
///
/// ```
/// use kata_loops::{evaluate_position, Mark};
///
/// let x = Some(Mark::X);
/// let o = Some(Mark::Nought);
/// let board = vec![
///     vec![x, None, o],
///     vec![None, x, o],
///     vec![None, None, x],
/// ];
/// assert_eq!(evaluate_position(&board), Some(Mark::X));
/// ```
#[must_use]
pub fn evaluate_position(board: &[Vec<Option<Mark>>]) -> Option<Mark> {
    let cell = |(row, column): (usize, usize)| board.get(row)?.get(column).copied().flatten();

    winning_lines(board.len()).into_iter().find_map(|line| {
        let first = cell(*line.first()?)?;
        line.iter()
            .all(|&position| cell(position) == Some(first))
            .then_some(first)
    })
}

/// Every row, column and diagonal of a `side`×`side` board as `(row, column)`
/// cells. Row `y` is followed by column `y`, and the diagonals come last.
fn winning_lines(side: usize) -> Vec<Vec<(usize, usize)>> {
    if side == 0 {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(2 * side + 2);
    for y in 0..side {
        lines.push((0..side).map(|x| (y, x)).collect());
        lines.push((0..side).map(|x| (x, y)).collect());
    }
    lines.push((0..side).map(|i| (i, i)).collect());
    lines.push((0..side).map(|i| (i, side - 1 - i)).collect());
    lines
}
