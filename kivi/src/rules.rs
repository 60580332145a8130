use serde::{Deserialize, Serialize};

/// The dice combination a board square demands before a stone may rest on it.
///
/// The serde renames match the tokens printed on the board sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum SquareLabel {
    /// Pairs on two different faces.
    #[serde(rename = "AA/BB")]
    TwoPairs,
    /// Pairs on three different faces.
    #[serde(rename = "AA/BB/CC")]
    ThreePairs,
    /// Three dice showing the same face.
    #[serde(rename = "AAA")]
    ThreeOfAKind,
    /// Four dice showing the same face.
    #[serde(rename = "AAAA")]
    FourOfAKind,
    /// A triple plus a pair on a different face.
    #[serde(rename = "AAA/BB")]
    FullHouse,
    /// Four of a kind plus a pair on a different face.
    #[serde(rename = "AAAA/BB")]
    FourPlusPair,
    /// Triples on two different faces.
    #[serde(rename = "AAA/BBB")]
    TwoTriples,
    /// 1, 2, 3 and 4 all present.
    #[serde(rename = "ABCD")]
    SmallStraight,
    /// 1 through 5 all present.
    #[serde(rename = "ABCDE")]
    LargeStraight,
    /// The kept faces sum to at most 12.
    #[serde(rename = "≤12")]
    SumAtMost12,
    /// The kept faces sum to at least 30.
    #[serde(rename = "≥30")]
    SumAtLeast30,
    /// 1, 3 and 5 all present.
    #[serde(rename = "=1,3,5")]
    OneThreeFive,
    /// 2, 4 and 6 all present.
    #[serde(rename = "=2,4,6")]
    TwoFourSix,
}

pub static ALL_LABELS: [SquareLabel; 13] = [
    SquareLabel::TwoPairs,
    SquareLabel::ThreePairs,
    SquareLabel::ThreeOfAKind,
    SquareLabel::FourOfAKind,
    SquareLabel::FullHouse,
    SquareLabel::FourPlusPair,
    SquareLabel::TwoTriples,
    SquareLabel::SmallStraight,
    SquareLabel::LargeStraight,
    SquareLabel::SumAtMost12,
    SquareLabel::SumAtLeast30,
    SquareLabel::OneThreeFive,
    SquareLabel::TwoFourSix,
];

impl SquareLabel {
    /// Checks whether a set of kept dice fulfils this label.
    ///
    /// The values must be sorted ascending. An empty set fulfils nothing, so
    /// a placement attempt without kept dice is never legal.
    pub fn is_satisfied(self, values: &[u8]) -> bool {
        debug_assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        if values.is_empty() {
            return false;
        }
        let counts = face_counts(values);
        match self {
            SquareLabel::TwoPairs => faces_with_at_least(&counts, 2) >= 2,
            SquareLabel::ThreePairs => faces_with_at_least(&counts, 2) >= 3,
            SquareLabel::ThreeOfAKind => faces_with_at_least(&counts, 3) >= 1,
            SquareLabel::FourOfAKind => faces_with_at_least(&counts, 4) >= 1,
            SquareLabel::FullHouse => group_with_separate_pair(&counts, 3),
            SquareLabel::FourPlusPair => group_with_separate_pair(&counts, 4),
            SquareLabel::TwoTriples => faces_with_at_least(&counts, 3) >= 2,
            SquareLabel::SmallStraight => contains_all(&counts, &[1, 2, 3, 4]),
            SquareLabel::LargeStraight => contains_all(&counts, &[1, 2, 3, 4, 5]),
            SquareLabel::SumAtMost12 => sum(values) <= 12,
            SquareLabel::SumAtLeast30 => sum(values) >= 30,
            SquareLabel::OneThreeFive => contains_all(&counts, &[1, 3, 5]),
            SquareLabel::TwoFourSix => contains_all(&counts, &[2, 4, 6]),
        }
    }

    /// The score awarded when a stone is finalized on a square with this
    /// label. Harder combinations are worth more.
    pub fn points(self) -> u8 {
        match self {
            SquareLabel::TwoPairs
            | SquareLabel::ThreeOfAKind
            | SquareLabel::SmallStraight
            | SquareLabel::FullHouse => 1,
            SquareLabel::FourOfAKind
            | SquareLabel::LargeStraight
            | SquareLabel::SumAtMost12
            | SquareLabel::SumAtLeast30
            | SquareLabel::OneThreeFive
            | SquareLabel::TwoFourSix => 2,
            SquareLabel::ThreePairs | SquareLabel::FourPlusPair | SquareLabel::TwoTriples => 3,
        }
    }

    /// The token printed on the board sheet.
    pub fn token(self) -> &'static str {
        match self {
            SquareLabel::TwoPairs => "AA/BB",
            SquareLabel::ThreePairs => "AA/BB/CC",
            SquareLabel::ThreeOfAKind => "AAA",
            SquareLabel::FourOfAKind => "AAAA",
            SquareLabel::FullHouse => "AAA/BB",
            SquareLabel::FourPlusPair => "AAAA/BB",
            SquareLabel::TwoTriples => "AAA/BBB",
            SquareLabel::SmallStraight => "ABCD",
            SquareLabel::LargeStraight => "ABCDE",
            SquareLabel::SumAtMost12 => "≤12",
            SquareLabel::SumAtLeast30 => "≥30",
            SquareLabel::OneThreeFive => "=1,3,5",
            SquareLabel::TwoFourSix => "=2,4,6",
        }
    }
}

impl std::fmt::Display for SquareLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

fn face_counts(values: &[u8]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &value in values {
        debug_assert!((1..=6).contains(&value));
        counts[value as usize] += 1;
    }
    counts
}

fn faces_with_at_least(counts: &[u8; 7], n: u8) -> usize {
    counts.iter().filter(|&&count| count >= n).count()
}

fn contains_all(counts: &[u8; 7], faces: &[u8]) -> bool {
    faces.iter().all(|&face| counts[face as usize] > 0)
}

/// A group of `size` equal dice plus a pair on some other face. The pair may
/// not reuse the group's face, so five equal dice alone are no full house.
fn group_with_separate_pair(counts: &[u8; 7], size: u8) -> bool {
    (1..=6).any(|group_face: usize| {
        counts[group_face] >= size
            && (1..=6).any(|pair_face: usize| pair_face != group_face && counts[pair_face] >= 2)
    })
}

fn sum(values: &[u8]) -> u32 {
    values.iter().map(|&value| u32::from(value)).sum()
}
