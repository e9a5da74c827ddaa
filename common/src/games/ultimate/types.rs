use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }
}

/// A side of the game. Unlike `Mark` it can never be empty, so it is what
/// every perspective argument takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Participant {
    Human,
    Machine,
}

impl Participant {
    pub fn other(&self) -> Participant {
        match self {
            Participant::Human => Participant::Machine,
            Participant::Machine => Participant::Human,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Human => write!(f, "human"),
            Participant::Machine => write!(f, "machine"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Machine,
    Random,
}

/// Result of a sub-board evaluation, relative to the perspective player the
/// caller passed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Lose,
    Tie,
    InProgress,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::InProgress
    }
}

/// Minimax value. Variant order matches the numeric order, and `Unknown`
/// (a depth cutoff) deliberately sits between `Lose` and `Tie`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    Lose = -10,
    Unknown = -5,
    Tie = 0,
    Win = 10,
}

impl Score {
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Score::Lose => "Lose",
            Score::Unknown => "???",
            Score::Tie => "Tie",
            Score::Win => "Win",
        }
    }
}

impl From<GameOutcome> for Score {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Win => Score::Win,
            GameOutcome::Lose => Score::Lose,
            GameOutcome::Tie => Score::Tie,
            GameOutcome::InProgress => Score::Unknown,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
