use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How many dice a player rolls each turn.
pub const NUM_DICE: usize = 6;

/// Hard cap on rolls per turn.
pub const MAX_ROLLS: u8 = 3;

/// A single die: its face and whether the player has set it aside.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    /// Face value in `1..=6`, or 0 before the first roll of the turn.
    pub value: u8,
    /// Kept dice survive rerolls and form the placement combination.
    pub kept: bool,
}

/// The six dice of the current turn, plus how often they have been rolled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceState {
    pub(crate) dice: [Die; NUM_DICE],
    pub(crate) rolls: u8,
}

impl DiceState {
    /// Six unrolled dice. The first roll always covers all of them, since
    /// nothing can be kept yet.
    pub fn new() -> Self {
        Self {
            dice: [Die::default(); NUM_DICE],
            rolls: 0,
        }
    }

    /// Rolls every die that is not kept. Counts against the roll budget even
    /// if all six dice are kept. Returns false once the budget is used up,
    /// in which case nothing happens.
    pub fn roll(&mut self, rng: &mut StdRng) -> bool {
        if self.rolls >= MAX_ROLLS {
            return false;
        }
        for die in &mut self.dice {
            if !die.kept {
                die.value = rng.gen_range(1..=6);
            }
        }
        self.rolls += 1;
        true
    }

    /// Sets one die aside, or picks it back up. Does nothing before the
    /// first roll, since there are no faces to keep yet.
    ///
    /// Panics if `index` is out of range.
    pub fn toggle_keep(&mut self, index: usize) {
        if self.rolls == 0 {
            return;
        }
        self.dice[index].kept = !self.dice[index].kept;
    }

    /// Returns the dice to their unrolled state for the next turn.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The faces of the kept dice, sorted ascending.
    pub fn kept_values(&self) -> Vec<u8> {
        let mut values: Vec<u8> = self
            .dice
            .iter()
            .filter(|die| die.kept)
            .map(|die| die.value)
            .collect();
        values.sort_unstable();
        values
    }

    pub fn values(&self) -> [u8; NUM_DICE] {
        self.dice.map(|die| die.value)
    }

    pub fn dice(&self) -> &[Die; NUM_DICE] {
        &self.dice
    }

    pub fn rolls(&self) -> u8 {
        self.rolls
    }

    pub fn any_kept(&self) -> bool {
        self.dice.iter().any(|die| die.kept)
    }
}

impl Default for DiceState {
    fn default() -> Self {
        Self::new()
    }
}
