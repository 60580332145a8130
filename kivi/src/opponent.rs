use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Board, Difficulty, NUM_DICE};

/// A move a computer seat has settled on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CpuMove {
    /// Which of the six dice to set aside.
    pub keep: [bool; NUM_DICE],
    pub row: usize,
    pub col: usize,
}

/// Decides the computer's move for the faces on the table, or `None` when no
/// subset of them fits any free square and the seat passes.
///
/// Subset sizes are tried from one die upwards and the search stops at the
/// first feasible size, so the computer keeps as few dice as possible. Among
/// the squares that subset opens up, [`Difficulty::Hard`] takes the first
/// highest-scoring one and [`Difficulty::Easy`] draws uniformly.
pub fn choose_move(
    values: &[u8; NUM_DICE],
    board: &Board,
    difficulty: Difficulty,
    rng: &mut StdRng,
) -> Option<CpuMove> {
    let keep = smallest_feasible_subset(values, board)?;
    let kept = kept_values(values, &keep);
    let candidates = board.legal_squares(&kept, None);

    let (row, col) = match difficulty {
        Difficulty::Easy => *candidates.choose(rng)?,
        Difficulty::Hard => {
            let mut best = *candidates.first()?;
            for &(row, col) in &candidates[1..] {
                if board.label(row, col).points() > board.label(best.0, best.1).points() {
                    best = (row, col);
                }
            }
            best
        }
    };
    Some(CpuMove { keep, row, col })
}

fn kept_values(values: &[u8; NUM_DICE], keep: &[bool; NUM_DICE]) -> Vec<u8> {
    let mut kept: Vec<u8> = values
        .iter()
        .zip(keep)
        .filter(|(_, &keep)| keep)
        .map(|(&value, _)| value)
        .collect();
    kept.sort_unstable();
    kept
}

/// The first workable subset of the smallest workable size, in include-first
/// order over the die positions.
fn smallest_feasible_subset(values: &[u8; NUM_DICE], board: &Board) -> Option<[bool; NUM_DICE]> {
    for size in 1..=NUM_DICE {
        let mut keep = [false; NUM_DICE];
        if subsets_of_size(values, board, &mut keep, 0, 0, size) {
            return Some(keep);
        }
    }
    None
}

/// Recursive include/exclude walk over the dice. Visits every subset of
/// exactly `size` dice until one fits a free square, and leaves that subset
/// in `keep`.
fn subsets_of_size(
    values: &[u8; NUM_DICE],
    board: &Board,
    keep: &mut [bool; NUM_DICE],
    index: usize,
    chosen: usize,
    size: usize,
) -> bool {
    if chosen == size {
        return board.any_legal_square(&kept_values(values, keep));
    }
    if index == NUM_DICE {
        return false;
    }
    keep[index] = true;
    if subsets_of_size(values, board, keep, index + 1, chosen + 1, size) {
        return true;
    }
    keep[index] = false;
    subsets_of_size(values, board, keep, index + 1, chosen, size)
}
