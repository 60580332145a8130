use serde::{Deserialize, Serialize};

use crate::{Board, InvalidPlayerCount, Player, PlayerConfig};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Why the match ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEnd {
    /// Some player placed their last stone.
    StonesExhausted,
    /// No free square is left.
    BoardFull,
}

/// The players of one match and whose turn it is.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
}

impl MatchState {
    /// Seats the players in the given order. The first seat starts.
    pub fn new(configs: Vec<PlayerConfig>) -> Result<Self, InvalidPlayerCount> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&configs.len()) {
            return Err(InvalidPlayerCount {
                count: configs.len(),
            });
        }
        Ok(Self {
            players: configs.into_iter().map(Player::new).collect(),
            current: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub(crate) fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Moves on to the next seat, wrapping around the table.
    pub(crate) fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Checks the end condition, stones before board: the match ends once
    /// some player has placed every stone, or no square is free anymore.
    pub fn end_condition(&self, board: &Board) -> Option<MatchEnd> {
        if self.players.iter().any(|player| player.stones == 0) {
            Some(MatchEnd::StonesExhausted)
        } else if board.is_full() {
            Some(MatchEnd::BoardFull)
        } else {
            None
        }
    }

    /// The seat with the highest score. Earlier seats win ties.
    pub fn winner(&self) -> usize {
        let mut winner = 0;
        for (seat, player) in self.players.iter().enumerate().skip(1) {
            if player.score > self.players[winner].score {
                winner = seat;
            }
        }
        winner
    }
}
