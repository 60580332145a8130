use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use kivi::{Color, Controller, Difficulty, PlayerConfig};
use serde::Deserialize;

/// The matchup the arena plays, over and over.
#[derive(Clone, Debug, Deserialize)]
pub struct MatchConfig {
    /// Seats in turn order. All of them must be computer players.
    pub players: Vec<PlayerConfig>,
    pub turn_seconds: u64,
}

impl MatchConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open match config '{}'", path.display()))?;
        let config: MatchConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse match config '{}'", path.display()))?;
        Ok(config)
    }

    /// The arena has nobody to push the buttons for a human seat.
    pub fn ensure_playable(&self) -> anyhow::Result<()> {
        for player in &self.players {
            if player.controller == Controller::Human {
                anyhow::bail!(
                    "The arena only seats computer players, but '{}' is human",
                    player.name
                );
            }
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    /// Hard against Easy, so the difficulty gap shows up in the results.
    fn default() -> Self {
        Self {
            players: vec![
                PlayerConfig {
                    name: String::from("Greta"),
                    color: Color::Green,
                    controller: Controller::Cpu(Difficulty::Hard),
                },
                PlayerConfig {
                    name: String::from("Ruben"),
                    color: Color::Red,
                    controller: Controller::Cpu(Difficulty::Easy),
                },
            ],
            turn_seconds: 30,
        }
    }
}
