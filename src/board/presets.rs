//! Named board layouts.
//!
//! The classic peg-solitaire starting configurations as parseable presets.
//! `english` is the standard opening (a full board with a vacant center);
//! `solved-center` is the matching goal (a single center peg).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::state::Board;
use crate::error::Error;

/// A named starting or goal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Cross,
    Plus,
    Fireplace,
    Up,
    Pyramid,
    Diamond,
    English,
    SolvedCenter,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Cross,
        Preset::Plus,
        Preset::Fireplace,
        Preset::Up,
        Preset::Pyramid,
        Preset::Diamond,
        Preset::English,
        Preset::SolvedCenter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Cross => "cross",
            Preset::Plus => "plus",
            Preset::Fireplace => "fireplace",
            Preset::Up => "up",
            Preset::Pyramid => "pyramid",
            Preset::Diamond => "diamond",
            Preset::English => "english",
            Preset::SolvedCenter => "solved-center",
        }
    }

    fn rows(self) -> [&'static str; 7] {
        match self {
            Preset::Cross => [
                "--000--", "--0X0--", "00XXX00", "000X000", "000X000", "--000--", "--000--",
            ],
            Preset::Plus => [
                "--000--", "--0X0--", "000X000", "0XXXXX0", "000X000", "--0X0--", "--000--",
            ],
            Preset::Fireplace => [
                "--XXX--", "--XXX--", "00XXX00", "00X0X00", "0000000", "--000--", "--000--",
            ],
            Preset::Up => [
                "--0X0--", "--XXX--", "0XXXXX0", "000X000", "000X000", "--XXX--", "--XXX--",
            ],
            Preset::Pyramid => [
                "--000--", "--0X0--", "00XXX00", "0XXXXX0", "XXXXXXX", "--000--", "--000--",
            ],
            Preset::Diamond => [
                "--0X0--", "--XXX--", "0XXXXX0", "XXX0XXX", "0XXXXX0", "--XXX--", "--0X0--",
            ],
            Preset::English => [
                "--XXX--", "--XXX--", "XXXXXXX", "XXX0XXX", "XXXXXXX", "--XXX--", "--XXX--",
            ],
            Preset::SolvedCenter => [
                "--000--", "--000--", "0000000", "000X000", "0000000", "--000--", "--000--",
            ],
        }
    }

    /// The layout as a board value.
    pub fn board(self) -> Board {
        Board::from_rows(&self.rows()).expect("preset layouts are valid")
    }

    fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::ParsePreset {
                input: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}
