use serde::{Deserialize, Serialize};

/// How many stones each player starts with.
pub const STARTING_STONES: u8 = 10;

/// Stone colors offered by the lobby.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Black,
}

/// How strong a computer seat plays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Plays a uniformly random legal move.
    Easy,
    /// Plays the highest-scoring legal move.
    Hard,
}

/// Who issues the commands for a seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    Human,
    Cpu(Difficulty),
}

impl Controller {
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Controller::Cpu(difficulty) => Some(difficulty),
            Controller::Human => None,
        }
    }
}

/// Seat setup handed to [`Game::new`](crate::Game::new).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Color,
    pub controller: Controller,
}

/// One seat's standing over the whole match.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub color: Color,
    pub controller: Controller,
    /// Stones not yet placed. The match ends when any seat reaches zero.
    pub stones: u8,
    /// Points collected by finalized stones.
    pub score: u32,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            name: config.name,
            color: config.color,
            controller: config.controller,
            stones: STARTING_STONES,
            score: 0,
        }
    }
}
