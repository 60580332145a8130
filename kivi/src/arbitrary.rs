use crate::{Board, BOARD_SIZE, NUM_DICE};

/// A rolled hand together with a partially filled board, as seen by the
/// computer's move search.
#[derive(Clone, Debug)]
pub struct SearchInput {
    pub values: [u8; NUM_DICE],
    pub board: Board,
}

impl quickcheck::Arbitrary for SearchInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut values = [0u8; NUM_DICE];
        for value in values.iter_mut() {
            *value = u8::arbitrary(g) % 6 + 1;
        }

        // Leave only a handful of squares free, so that rolls without any
        // feasible placement come up as well
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if u8::arbitrary(g) % 8 != 0 {
                    board.place(row, col, usize::arbitrary(g) % 4, None);
                }
            }
        }

        SearchInput { values, board }
    }
}
