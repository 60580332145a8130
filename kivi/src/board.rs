use std::ops::Deref;

use crate::SquareLabel;

/// Side length of the board.
pub const BOARD_SIZE: usize = 7;

/// Total number of squares.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

mod layout {
    use crate::SquareLabel::{self, *};

    /// The label printout of the board sheet, one row per line. Every match
    /// is played on this same fixed sheet.
    #[rustfmt::skip]
    pub(super) const LAYOUT: [SquareLabel; super::NUM_SQUARES] = [
        TwoPairs, LargeStraight, SumAtMost12, ThreeOfAKind, OneThreeFive, TwoFourSix, ThreeOfAKind,
        TwoFourSix, FourPlusPair, ThreeOfAKind, ThreePairs, SmallStraight, TwoTriples, SumAtLeast30,
        SmallStraight, FourOfAKind, SumAtLeast30, LargeStraight, FourPlusPair, OneThreeFive, FullHouse,
        SumAtMost12, FullHouse, TwoFourSix, TwoTriples, SumAtMost12, TwoPairs, LargeStraight,
        ThreeOfAKind, LargeStraight, ThreePairs, OneThreeFive, FourOfAKind, SumAtLeast30, TwoPairs,
        OneThreeFive, TwoTriples, SmallStraight, FourPlusPair, FullHouse, ThreePairs, SumAtMost12,
        SmallStraight, SumAtLeast30, FourOfAKind, TwoPairs, OneThreeFive, FourOfAKind, FullHouse,
    ];
}

use layout::LAYOUT;

/// A stone resting on a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Seat index of the owning player.
    pub owner: usize,
}

/// One square of the board sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square {
    pub label: SquareLabel,
    pub marker: Option<Marker>,
}

/// The 7x7 playing board.
///
/// Squares are addressed by `(row, col)`, both counted from zero in the top
/// left corner. The board only tracks which stones rest where; whose turn it
/// is and what may be placed is the business of [`Game`](crate::Game).
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Square; NUM_SQUARES],
}

impl Board {
    /// An empty board with the fixed label sheet.
    pub fn new() -> Self {
        Self {
            squares: LAYOUT.map(|label| Square {
                label,
                marker: None,
            }),
        }
    }

    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        row * BOARD_SIZE + col
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// The label printed on a square.
    pub fn label(&self, row: usize, col: usize) -> SquareLabel {
        self.squares[Self::index(row, col)].label
    }

    /// The stone on a square, if any.
    pub fn marker(&self, row: usize, col: usize) -> Option<Marker> {
        self.squares[Self::index(row, col)].marker
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.marker(row, col).is_some()
    }

    /// Checks whether a stone backed by the given kept dice may rest on a
    /// square.
    ///
    /// A square holding another marker is never legal. The acting player's
    /// own tentative marker does not block, so an undecided stone may move
    /// to a different square, or stay put, within the same turn.
    pub fn can_place(
        &self,
        row: usize,
        col: usize,
        values: &[u8],
        tentative: Option<(usize, usize)>,
    ) -> bool {
        if self.is_occupied(row, col) && tentative != Some((row, col)) {
            return false;
        }
        self.label(row, col).is_satisfied(values)
    }

    /// Puts `owner`'s marker on a square, lifting their tentative marker
    /// first if one stands elsewhere.
    pub fn place(&mut self, row: usize, col: usize, owner: usize, tentative: Option<(usize, usize)>) {
        if let Some((tentative_row, tentative_col)) = tentative {
            self.squares[Self::index(tentative_row, tentative_col)].marker = None;
        }
        self.squares[Self::index(row, col)].marker = Some(Marker { owner });
    }

    /// Takes a marker back off the board.
    pub fn remove(&mut self, row: usize, col: usize) {
        self.squares[Self::index(row, col)].marker = None;
    }

    /// All squares where a stone backed by these kept dice may rest right
    /// now. This is what the UI highlights after every selection change.
    pub fn legal_squares(
        &self,
        values: &[u8],
        tentative: Option<(usize, usize)>,
    ) -> Vec<(usize, usize)> {
        let mut result = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.can_place(row, col, values, tentative) {
                    result.push((row, col));
                }
            }
        }
        result
    }

    /// Is there any free square at all that these dice would satisfy?
    pub fn any_legal_square(&self, values: &[u8]) -> bool {
        self.squares
            .iter()
            .any(|square| square.marker.is_none() && square.label.is_satisfied(values))
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| square.marker.is_some())
    }

    pub fn num_markers(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| square.marker.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Board {
    type Target = [Square];

    fn deref(&self) -> &Self::Target {
        &self.squares
    }
}
