use std::time::Duration;

use anyhow::Context;
use kivi::{visualize_board, Game, MatchEnd, TurnOutcome};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::config::MatchConfig;
use crate::recording::Recorder;

/// Nothing forces a Kivi match to end: seats without a feasible roll pass
/// and keep their stones. A run this long means the matchup is stuck.
const MAX_TURNS: usize = 10_000;

/// The result of one finished match.
pub struct MatchSummary {
    pub winner: usize,
    pub scores: Vec<u32>,
    pub end: MatchEnd,
    pub turns: usize,
}

/// Plays one match of computer seats to the end, through the same command
/// interface a UI would use: roll, keep the chosen dice, place, end the turn.
pub fn play_match(
    config: &MatchConfig,
    rng: StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchSummary> {
    let mut game = Game::new(
        config.players.clone(),
        Duration::from_secs(config.turn_seconds),
        rng,
    )?;

    let mut turns = 0;
    while !game.is_over() {
        turns += 1;
        if turns > MAX_TURNS {
            anyhow::bail!("Match did not end within {} turns", MAX_TURNS);
        }

        let seat = game.current_seat();
        game.roll(seat)?;
        let outcome = match game.cpu_move() {
            Some(mv) => {
                for (die, &keep) in mv.keep.iter().enumerate() {
                    if keep {
                        game.toggle_die(seat, die)?;
                    }
                }
                game.attempt_place(seat, mv.row, mv.col)?;
                game.end_turn(seat)?
            }
            // no subset of the roll fits any free square
            None => game.end_turn(seat)?,
        };
        match outcome {
            TurnOutcome::Placed { row, col, points } => {
                trace!(seat, row, col, points, "Placed a stone")
            }
            TurnOutcome::Passed => trace!(seat, "Passed"),
        }
        if let Some(rec) = recorder {
            rec.store_turn(seat, outcome, game.snapshot());
        }
    }

    debug!("Final board:\n{}", visualize_board(game.board()));
    let end = game.ended().context("Match loop left a running game")?;
    let winner = game.winner().context("Ended match has no winner")?;
    if let Some(rec) = recorder {
        rec.write_match_recording(end, winner)?;
    }

    Ok(MatchSummary {
        winner,
        scores: game.players().iter().map(|player| player.score).collect(),
        end,
        turns,
    })
}
