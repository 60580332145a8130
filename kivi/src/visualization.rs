use crate::{Board, BOARD_SIZE};

/// Renders the board sheet as text. Free squares show their label, occupied
/// squares show ● and the seat number of the stone's owner.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("     ");
    for col in 0..BOARD_SIZE {
        result += &format!(" {:<8}", col);
    }
    result += "\n    ╭";
    for _ in 0..BOARD_SIZE {
        result += "─────────";
    }
    result += "╮";
    for row in 0..BOARD_SIZE {
        result += &format!("\n{:>3} │", row);
        for col in 0..BOARD_SIZE {
            match board.marker(row, col) {
                Some(marker) => result += &format!(" ●{:<7}", marker.owner),
                None => result += &format!(" {:<8}", board.label(row, col).token()),
            }
        }
        result += "│";
    }
    result += "\n    ╰";
    for _ in 0..BOARD_SIZE {
        result += "─────────";
    }
    result += "╯";
    result
}
