use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::turn::Turn;
use crate::{
    choose_move, Board, CommandError, CpuMove, DiceState, IllegalPlacement, InvalidPlayerCount,
    MatchEnd, MatchState, Player, PlayerConfig, NUM_DICE,
};

/// Summarizes the outcome of one turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The turn ended without a stone placed.
    Passed,
    /// A stone was finalized and scored.
    Placed { row: usize, col: usize, points: u8 },
}

/// The complete rules engine for one match, driven through commands.
///
/// Commands validate the acting seat and the game phase, mutate the state
/// and report what happened; queries never mutate. Timer-dependent entry
/// points come in two flavors: the plain one reads the wall clock, the `_at`
/// one takes an explicit instant.
///
/// A `Game` runs no threads of its own. Put it behind a mutex and call
/// [`Game::tick`] from a timer if the turn countdown should fire by itself.
pub struct Game {
    board: Board,
    match_state: MatchState,
    turn: Turn,
    turn_duration: Duration,
    ended: Option<MatchEnd>,
    rng: StdRng,
}

impl Game {
    /// Seats the players and starts the first turn's countdown immediately.
    pub fn new(
        configs: Vec<PlayerConfig>,
        turn_duration: Duration,
        rng: StdRng,
    ) -> Result<Self, InvalidPlayerCount> {
        let match_state = MatchState::new(configs)?;
        Ok(Self {
            board: Board::new(),
            match_state,
            turn: Turn::begin(turn_duration, Instant::now()),
            turn_duration,
            ended: None,
            rng,
        })
    }

    fn ensure_commandable(&self, seat: usize) -> Result<(), CommandError> {
        if self.ended.is_some() {
            return Err(CommandError::MatchOver);
        }
        if self.turn.clock.is_paused() {
            return Err(CommandError::Paused);
        }
        if seat != self.match_state.current() {
            return Err(CommandError::NotYourTurn {
                seat,
                current: self.match_state.current(),
            });
        }
        Ok(())
    }

    /// Rolls the dice for the seat on turn. Returns whether the dice moved:
    /// after the third roll this is a plain no-op, not an error. Rolling
    /// picks a tentative stone back up, since the combination underneath it
    /// is about to change.
    pub fn roll(&mut self, seat: usize) -> Result<bool, CommandError> {
        self.ensure_commandable(seat)?;
        if !self.turn.dice.roll(&mut self.rng) {
            return Ok(false);
        }
        self.lift_tentative();
        Ok(true)
    }

    /// Sets one die aside or picks it back up. Has no effect before the
    /// first roll.
    pub fn toggle_die(&mut self, seat: usize, die: usize) -> Result<(), CommandError> {
        self.ensure_commandable(seat)?;
        if die >= NUM_DICE {
            return Err(CommandError::InvalidDieIndex { index: die });
        }
        self.turn.dice.toggle_keep(die);
        Ok(())
    }

    /// Puts the seat's stone on a square, tentatively. The stone may still
    /// move or be taken back until the turn ends; nothing is scored yet.
    pub fn attempt_place(
        &mut self,
        seat: usize,
        row: usize,
        col: usize,
    ) -> Result<(), CommandError> {
        self.ensure_commandable(seat)?;
        if !self.board.is_in_bounds(row, col) {
            return Err(IllegalPlacement::OutOfBounds { row, col }.into());
        }
        let values = self.turn.dice.kept_values();
        if values.is_empty() {
            return Err(IllegalPlacement::NoDiceSelected.into());
        }
        if self.board.is_occupied(row, col) && self.turn.tentative != Some((row, col)) {
            return Err(IllegalPlacement::SquareOccupied { row, col }.into());
        }
        if !self.board.can_place(row, col, &values, self.turn.tentative) {
            return Err(IllegalPlacement::InvalidCombination {
                label: self.board.label(row, col),
            }
            .into());
        }
        self.board.place(row, col, seat, self.turn.tentative);
        self.turn.tentative = Some((row, col));
        Ok(())
    }

    /// Ends the turn by choice. A standing tentative stone becomes final:
    /// the square's points go to the seat's score and a stone is used up.
    /// Without one the turn is passed, which is always allowed. Either way
    /// play moves on to the next seat, or the match ends.
    pub fn end_turn(&mut self, seat: usize) -> Result<TurnOutcome, CommandError> {
        self.end_turn_at(seat, Instant::now())
    }

    pub fn end_turn_at(&mut self, seat: usize, now: Instant) -> Result<TurnOutcome, CommandError> {
        self.ensure_commandable(seat)?;
        Ok(self.finish_turn(now))
    }

    /// Pauses the countdown and locks all play commands. Idempotent.
    pub fn pause(&mut self) {
        self.pause_at(Instant::now())
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.ended.is_none() {
            self.turn.clock.pause(now);
        }
    }

    /// Continues a paused countdown where it left off. Idempotent.
    pub fn resume(&mut self) {
        self.resume_at(Instant::now())
    }

    pub fn resume_at(&mut self, now: Instant) {
        if self.ended.is_none() {
            self.turn.clock.resume(now);
        }
    }

    /// Drives the countdown. Call this periodically; once the turn time is
    /// up it ends the turn exactly like [`Game::end_turn`] would, finalizing
    /// a standing tentative stone. Returns the outcome when it fired.
    pub fn tick(&mut self) -> Option<TurnOutcome> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<TurnOutcome> {
        if self.ended.is_some() || !self.turn.clock.is_expired(now) {
            return None;
        }
        Some(self.finish_turn(now))
    }

    /// Decides a move for the seat on turn, if a computer controls it.
    /// `None` means the seat is human, nothing has been rolled yet, or no
    /// legal move exists for the faces on the table.
    pub fn cpu_move(&mut self) -> Option<CpuMove> {
        if self.ended.is_some() || self.turn.dice.rolls() == 0 {
            return None;
        }
        let difficulty = self.match_state.current_player().controller.difficulty()?;
        choose_move(
            &self.turn.dice.values(),
            &self.board,
            difficulty,
            &mut self.rng,
        )
    }

    fn lift_tentative(&mut self) {
        if let Some((row, col)) = self.turn.tentative.take() {
            self.board.remove(row, col);
        }
    }

    fn finish_turn(&mut self, now: Instant) -> TurnOutcome {
        let outcome = match self.turn.tentative.take() {
            Some((row, col)) => {
                let points = self.board.label(row, col).points();
                let player = self.match_state.current_player_mut();
                player.score += u32::from(points);
                player.stones -= 1;
                TurnOutcome::Placed { row, col, points }
            }
            None => TurnOutcome::Passed,
        };
        self.match_state.advance();
        match self.match_state.end_condition(&self.board) {
            Some(end) => self.ended = Some(end),
            None => self.turn = Turn::begin(self.turn_duration, now),
        }
        outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dice(&self) -> &DiceState {
        &self.turn.dice
    }

    pub fn players(&self) -> &[Player] {
        self.match_state.players()
    }

    /// The seat whose turn it is.
    pub fn current_seat(&self) -> usize {
        self.match_state.current()
    }

    /// Where the seat on turn has tentatively put a stone.
    pub fn tentative(&self) -> Option<(usize, usize)> {
        self.turn.tentative
    }

    /// Squares the currently kept dice would allow, for highlighting.
    pub fn legal_squares(&self) -> Vec<(usize, usize)> {
        self.board
            .legal_squares(&self.turn.dice.kept_values(), self.turn.tentative)
    }

    pub fn remaining_time(&self) -> Duration {
        self.remaining_time_at(Instant::now())
    }

    pub fn remaining_time_at(&self, now: Instant) -> Duration {
        self.turn.clock.remaining(now)
    }

    pub fn is_paused(&self) -> bool {
        self.turn.clock.is_paused()
    }

    pub fn ended(&self) -> Option<MatchEnd> {
        self.ended
    }

    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }

    /// The winning seat, once the match has ended. Earlier seats win ties.
    pub fn winner(&self) -> Option<usize> {
        self.ended.map(|_| self.match_state.winner())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::{
        Color, Controller, Difficulty, Die, Marker, SquareLabel, TurnClock, BOARD_SIZE,
        STARTING_STONES,
    };

    fn config(name: &str, color: Color) -> PlayerConfig {
        PlayerConfig {
            name: String::from(name),
            color,
            controller: Controller::Human,
        }
    }

    fn two_player_game() -> Game {
        Game::new(
            vec![config("Ada", Color::Blue), config("Ben", Color::Red)],
            Duration::from_secs(30),
            StdRng::seed_from_u64(1),
        )
        .unwrap()
    }

    /// Puts the given faces on the table as if they had just been rolled.
    fn force_dice(game: &mut Game, values: [u8; NUM_DICE]) {
        game.turn.dice = DiceState {
            dice: values.map(|value| Die { value, kept: false }),
            rolls: 1,
        };
    }

    #[test]
    fn straight_scores_two_points_and_uses_a_stone() {
        let mut game = two_player_game();
        force_dice(&mut game, [1, 2, 3, 4, 5, 6]);
        for die in 0..5 {
            game.toggle_die(0, die).unwrap();
        }
        // (0, 1) demands a large straight
        game.attempt_place(0, 0, 1).unwrap();
        assert_eq!(game.tentative(), Some((0, 1)));
        let outcome = game.end_turn(0).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Placed {
                row: 0,
                col: 1,
                points: 2
            }
        );
        assert_eq!(game.players()[0].score, 2);
        assert_eq!(game.players()[0].stones, STARTING_STONES - 1);
        assert_eq!(game.board().marker(0, 1), Some(Marker { owner: 0 }));
        assert_eq!(game.current_seat(), 1);
    }

    #[test]
    fn five_equal_dice_are_not_four_plus_pair() {
        let mut game = two_player_game();
        force_dice(&mut game, [2, 2, 2, 2, 2, 6]);
        for die in 0..5 {
            game.toggle_die(0, die).unwrap();
        }
        // (1, 1) demands four of a kind plus a pair on a separate face
        let err = game.attempt_place(0, 1, 1).unwrap_err();
        assert_eq!(
            err,
            CommandError::Placement(IllegalPlacement::InvalidCombination {
                label: SquareLabel::FourPlusPair,
            })
        );
        assert!(game.board().marker(1, 1).is_none());
    }

    #[test]
    fn filling_the_last_square_ends_the_match() {
        let mut game = two_player_game();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row, col) != (0, 3) {
                    game.board.place(row, col, 1, None);
                }
            }
        }
        force_dice(&mut game, [4, 4, 4, 1, 2, 3]);
        for die in 0..3 {
            game.toggle_die(0, die).unwrap();
        }
        game.attempt_place(0, 0, 3).unwrap();
        let outcome = game.end_turn(0).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Placed {
                row: 0,
                col: 3,
                points: 1
            }
        );
        assert_eq!(game.ended(), Some(MatchEnd::BoardFull));
        // the board filled up even though everyone still has stones
        assert!(game.players().iter().all(|player| player.stones > 0));
        assert_eq!(game.roll(1).unwrap_err(), CommandError::MatchOver);
    }

    #[test]
    fn last_stone_ends_the_match_and_the_highest_score_wins() {
        let mut game = two_player_game();
        game.match_state.players[0].stones = 1;
        game.match_state.players[0].score = 5;
        game.match_state.players[1].score = 9;
        force_dice(&mut game, [3, 3, 3, 1, 1, 2]);
        for die in 0..3 {
            game.toggle_die(0, die).unwrap();
        }
        game.attempt_place(0, 0, 3).unwrap();
        game.end_turn(0).unwrap();
        assert_eq!(game.ended(), Some(MatchEnd::StonesExhausted));
        assert_eq!(game.players()[0].stones, 0);
        // seat 1 collected more points over the match
        assert_eq!(game.winner(), Some(1));
    }

    #[test]
    fn tentative_stones_move_instead_of_piling_up() {
        let mut game = two_player_game();
        force_dice(&mut game, [2, 2, 2, 5, 5, 6]);
        for die in 0..5 {
            game.toggle_die(0, die).unwrap();
        }
        // {2, 2, 2, 5, 5} is a full house and also three of a kind
        game.attempt_place(0, 6, 6).unwrap();
        game.attempt_place(0, 0, 3).unwrap();
        assert!(game.board().marker(6, 6).is_none());
        assert_eq!(game.board().marker(0, 3), Some(Marker { owner: 0 }));
        assert_eq!(game.board().num_markers(), 1);
        assert_eq!(game.tentative(), Some((0, 3)));
    }

    #[test]
    fn rerolling_takes_the_tentative_stone_back() {
        let mut game = two_player_game();
        force_dice(&mut game, [2, 2, 2, 1, 1, 6]);
        for die in 0..3 {
            game.toggle_die(0, die).unwrap();
        }
        game.attempt_place(0, 0, 3).unwrap();
        assert!(game.roll(0).unwrap());
        assert_eq!(game.tentative(), None);
        assert!(game.board().marker(0, 3).is_none());
        // passing now neither scores nor costs a stone
        let outcome = game.end_turn(0).unwrap();
        assert_eq!(outcome, TurnOutcome::Passed);
        assert_eq!(game.players()[0].stones, STARTING_STONES);
        assert_eq!(game.players()[0].score, 0);
        assert_eq!(game.current_seat(), 1);
    }

    #[test]
    fn commands_from_the_wrong_seat_are_rejected() {
        let mut game = two_player_game();
        assert_eq!(
            game.roll(1).unwrap_err(),
            CommandError::NotYourTurn { seat: 1, current: 0 }
        );
    }

    #[test]
    fn placement_without_kept_dice_is_rejected() {
        let mut game = two_player_game();
        game.roll(0).unwrap();
        let err = game.attempt_place(0, 0, 0).unwrap_err();
        assert_eq!(
            err,
            CommandError::Placement(IllegalPlacement::NoDiceSelected)
        );
    }

    #[test]
    fn occupied_squares_are_reported_as_such() {
        let mut game = two_player_game();
        game.board.place(2, 2, 1, None);
        force_dice(&mut game, [6, 6, 6, 6, 6, 6]);
        game.toggle_die(0, 0).unwrap();
        // occupancy is checked before the combination
        let err = game.attempt_place(0, 2, 2).unwrap_err();
        assert_eq!(
            err,
            CommandError::Placement(IllegalPlacement::SquareOccupied { row: 2, col: 2 })
        );
    }

    #[test]
    fn out_of_bounds_and_bad_die_indices_are_rejected() {
        let mut game = two_player_game();
        force_dice(&mut game, [1, 1, 1, 1, 1, 1]);
        assert_eq!(
            game.toggle_die(0, 6).unwrap_err(),
            CommandError::InvalidDieIndex { index: 6 }
        );
        game.toggle_die(0, 0).unwrap();
        assert_eq!(
            game.attempt_place(0, 7, 0).unwrap_err(),
            CommandError::Placement(IllegalPlacement::OutOfBounds { row: 7, col: 0 })
        );
    }

    #[test]
    fn toggling_before_the_first_roll_does_nothing() {
        let mut game = two_player_game();
        game.toggle_die(0, 0).unwrap();
        assert!(!game.dice().any_kept());
        assert!(game.legal_squares().is_empty());
    }

    #[test]
    fn paused_games_lock_all_play_commands() {
        let mut game = two_player_game();
        game.pause();
        assert_eq!(game.roll(0).unwrap_err(), CommandError::Paused);
        assert_eq!(game.toggle_die(0, 0).unwrap_err(), CommandError::Paused);
        assert_eq!(game.end_turn(0).unwrap_err(), CommandError::Paused);
        assert_eq!(game.attempt_place(0, 0, 0).unwrap_err(), CommandError::Paused);
        game.resume();
        assert!(game.roll(0).unwrap());
    }

    #[test]
    fn running_out_of_time_ends_the_turn_like_end_turn() {
        let mut game = two_player_game();
        let start = Instant::now();
        game.turn.clock = TurnClock::start(Duration::from_secs(30), start);
        force_dice(&mut game, [3, 3, 3, 2, 2, 1]);
        for die in 0..5 {
            game.toggle_die(0, die).unwrap();
        }
        game.attempt_place(0, 6, 6).unwrap();
        assert_eq!(game.tick_at(start + Duration::from_secs(29)), None);
        let outcome = game.tick_at(start + Duration::from_secs(30));
        assert_eq!(
            outcome,
            Some(TurnOutcome::Placed {
                row: 6,
                col: 6,
                points: 1
            })
        );
        assert_eq!(game.players()[0].score, 1);
        assert_eq!(game.current_seat(), 1);
        // the fresh turn's clock starts from the expiry instant
        assert_eq!(game.tick_at(start + Duration::from_secs(30)), None);
    }

    #[test]
    fn paused_turns_do_not_time_out() {
        let mut game = two_player_game();
        let start = Instant::now();
        game.turn.clock = TurnClock::start(Duration::from_secs(30), start);
        game.pause_at(start + Duration::from_secs(10));
        assert_eq!(game.tick_at(start + Duration::from_secs(60)), None);
        game.resume_at(start + Duration::from_secs(60));
        // 20 seconds of turn time remain
        assert_eq!(game.tick_at(start + Duration::from_secs(79)), None);
        assert!(game.tick_at(start + Duration::from_secs(80)).is_some());
    }

    #[test]
    fn cpu_seats_play_legal_turns() {
        let mut game = Game::new(
            vec![
                PlayerConfig {
                    name: String::from("East"),
                    color: Color::Green,
                    controller: Controller::Cpu(Difficulty::Hard),
                },
                PlayerConfig {
                    name: String::from("West"),
                    color: Color::Purple,
                    controller: Controller::Cpu(Difficulty::Easy),
                },
            ],
            Duration::from_secs(30),
            StdRng::seed_from_u64(5),
        )
        .unwrap();

        for _ in 0..6 {
            let seat = game.current_seat();
            game.roll(seat).unwrap();
            if let Some(mv) = game.cpu_move() {
                for (die, &keep) in mv.keep.iter().enumerate() {
                    if keep {
                        game.toggle_die(seat, die).unwrap();
                    }
                }
                game.attempt_place(seat, mv.row, mv.col).unwrap();
            }
            game.end_turn(seat).unwrap();
        }
        let stones_used: usize = game
            .players()
            .iter()
            .map(|player| usize::from(STARTING_STONES - player.stones))
            .sum();
        assert_eq!(game.board().num_markers(), stones_used);
    }
}
