use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::{Color, Game, MatchEnd, SquareLabel, NUM_DICE};

/// A serializable view of a whole match at one instant: the players, the
/// board, the current turn's dice and the countdown.
///
/// This is everything a renderer needs to draw the game, and what the match
/// recordings are made of. Restoring a game from a snapshot is not supported.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<PlayerSnapshot>,
    pub current_seat: usize,
    /// All 49 squares, row-major.
    pub squares: Vec<SquareSnapshot>,
    pub dice: DiceSnapshot,
    pub remaining: Duration,
    pub paused: bool,
    pub ended: Option<MatchEnd>,
}

/// One seat's standing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub color: Color,
    pub stones: u8,
    pub score: u32,
}

/// One square of the board sheet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SquareSnapshot {
    pub label: SquareLabel,
    /// Seat index of the stone resting here, if any.
    pub owner: Option<usize>,
}

/// The six dice of the current turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiceSnapshot {
    pub values: [u8; NUM_DICE],
    pub kept: [bool; NUM_DICE],
    pub rolls: u8,
}

impl Game {
    /// Captures the current state of the match.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_at(Instant::now())
    }

    pub fn snapshot_at(&self, now: Instant) -> Snapshot {
        Snapshot {
            players: self
                .players()
                .iter()
                .map(|player| PlayerSnapshot {
                    name: player.name.clone(),
                    color: player.color,
                    stones: player.stones,
                    score: player.score,
                })
                .collect(),
            current_seat: self.current_seat(),
            squares: self
                .board()
                .iter()
                .map(|square| SquareSnapshot {
                    label: square.label,
                    owner: square.marker.map(|marker| marker.owner),
                })
                .collect(),
            dice: DiceSnapshot {
                values: self.dice().values(),
                kept: self.dice().dice().map(|die| die.kept),
                rolls: self.dice().rolls(),
            },
            remaining: self.remaining_time_at(now),
            paused: self.is_paused(),
            ended: self.ended(),
        }
    }
}
