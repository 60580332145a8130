use crate::SquareLabel;

/// The error type for a single placement attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { row: usize, col: usize },
    /// No dice are set aside, so there is no combination to check.
    NoDiceSelected,
    /// Another marker already rests on the square.
    SquareOccupied { row: usize, col: usize },
    /// The kept dice do not fulfil the square's label.
    InvalidCombination { label: SquareLabel },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { row, col } => {
                write!(f, "Square ({}, {}) is outside the board", row, col)
            }
            IllegalPlacement::NoDiceSelected => {
                write!(f, "No dice are set aside to form a combination")
            }
            IllegalPlacement::SquareOccupied { row, col } => {
                write!(f, "Square ({}, {}) is already occupied", row, col)
            }
            IllegalPlacement::InvalidCombination { label } => {
                write!(f, "The kept dice do not fulfil the square's demand, {}", label)
            }
        }
    }
}

/// The error type for [`Game`](crate::Game) commands.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command came from a seat that is not on turn.
    NotYourTurn { seat: usize, current: usize },
    /// There is no die with this index.
    InvalidDieIndex { index: usize },
    /// The countdown is paused and play commands are locked.
    Paused,
    /// The match has already ended.
    MatchOver,
    /// The placement itself was rejected.
    Placement(IllegalPlacement),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Placement(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotYourTurn { seat, current } => write!(
                f,
                "Seat {} issued a command, but it is seat {}'s turn",
                seat, current
            ),
            CommandError::InvalidDieIndex { index } => {
                write!(f, "There is no die with index {}", index)
            }
            CommandError::Paused => write!(f, "The game is paused"),
            CommandError::MatchOver => write!(f, "The match has already ended"),
            CommandError::Placement(_) => write!(f, "The placement was rejected"),
        }
    }
}

impl From<IllegalPlacement> for CommandError {
    fn from(err: IllegalPlacement) -> Self {
        CommandError::Placement(err)
    }
}

/// The error type for match construction: 2 to 4 seats must join.
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidPlayerCount {
    pub count: usize,
}

impl std::error::Error for InvalidPlayerCount {}

impl std::fmt::Display for InvalidPlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A match takes 2 to 4 players, not {}", self.count)
    }
}
