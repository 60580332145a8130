use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use kivi::{MatchEnd, Snapshot, TurnOutcome};
use serde::Serialize;

/// Writes one JSON file per match into a directory, each holding the
/// turn-by-turn snapshots and the final result.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    turns: Vec<TurnRecord>,
}

#[derive(Serialize)]
pub struct TurnRecord {
    seat: usize,
    outcome: TurnOutcome,
    /// The match as it looks after this turn ended.
    state: Snapshot,
}

#[derive(Serialize)]
struct MatchRecording<'a> {
    end: MatchEnd,
    winner: usize,
    turns: &'a [TurnRecord],
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            turns: Vec::new(),
        })
    }

    pub fn store_turn(&mut self, seat: usize, outcome: TurnOutcome, state: Snapshot) {
        self.turns.push(TurnRecord {
            seat,
            outcome,
            state,
        });
    }

    pub fn write_match_recording(&mut self, end: MatchEnd, winner: usize) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("match_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(filepath)?);
        let recording = MatchRecording {
            end,
            winner,
            turns: &self.turns,
        };
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writer.flush()?;
        self.turns.clear();
        self.num += 1;
        Ok(())
    }
}
