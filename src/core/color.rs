//! Card colors, team colors, and per-team storage.
//!
//! ## CardColor
//!
//! The hidden assignment of a card: one of the two team colors, neutral,
//! or the single failure card.
//!
//! ## TeamColor
//!
//! The subset of `CardColor` a team may have. Using a separate type makes
//! "a team is never neutral or failure" hold by construction; conversions
//! from `CardColor` are fallible.
//!
//! ## TeamMap
//!
//! Fixed two-slot storage indexed by `TeamColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::{Display, EnumString};

use crate::error::GameError;

/// Hidden color of a board card.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Neutral,
    Failure,
}

impl CardColor {
    /// The team owning cards of this color, if any.
    #[must_use]
    pub const fn team(self) -> Option<TeamColor> {
        match self {
            CardColor::Red => Some(TeamColor::Red),
            CardColor::Blue => Some(TeamColor::Blue),
            CardColor::Neutral | CardColor::Failure => None,
        }
    }

    /// Check if this color belongs to a team.
    #[must_use]
    pub const fn is_team(self) -> bool {
        self.team().is_some()
    }
}

/// Color identifying one of the two teams.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TeamColor {
    Red,
    Blue,
}

impl TeamColor {
    /// Both teams, red first.
    pub const ALL: [TeamColor; 2] = [TeamColor::Red, TeamColor::Blue];

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TeamColor::Red => TeamColor::Blue,
            TeamColor::Blue => TeamColor::Red,
        }
    }

    /// The card color this team's words carry.
    #[must_use]
    pub const fn card_color(self) -> CardColor {
        match self {
            TeamColor::Red => CardColor::Red,
            TeamColor::Blue => CardColor::Blue,
        }
    }

    /// Parse user input such as `"Red"` or `" blue "`.
    pub fn parse(input: &str) -> Result<Self, GameError> {
        input
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidTeamColor(input.trim().to_string()))
    }
}

impl From<TeamColor> for CardColor {
    fn from(team: TeamColor) -> Self {
        team.card_color()
    }
}

impl TryFrom<CardColor> for TeamColor {
    type Error = GameError;

    fn try_from(color: CardColor) -> Result<Self, Self::Error> {
        color
            .team()
            .ok_or_else(|| GameError::InvalidTeamColor(color.to_string()))
    }
}

/// Per-team data storage.
///
/// ```
/// use word_detective::core::{TeamColor, TeamMap};
///
/// let mut remaining: TeamMap<u32> = TeamMap::new(|team| match team {
///     TeamColor::Red => 9,
///     TeamColor::Blue => 8,
/// });
///
/// remaining[TeamColor::Blue] -= 1;
/// assert_eq!(remaining[TeamColor::Red], 9);
/// assert_eq!(remaining[TeamColor::Blue], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    red: T,
    blue: T,
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(TeamColor) -> T) -> Self {
        Self {
            red: factory(TeamColor::Red),
            blue: factory(TeamColor::Blue),
        }
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamColor) -> &T {
        match team {
            TeamColor::Red => &self.red,
            TeamColor::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamColor) -> &mut T {
        match team {
            TeamColor::Red => &mut self.red,
            TeamColor::Blue => &mut self.blue,
        }
    }

    /// Iterate over (TeamColor, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (TeamColor, &T)> {
        [(TeamColor::Red, &self.red), (TeamColor::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<TeamColor> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamColor) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamColor> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamColor) -> &mut Self::Output {
        self.get_mut(team)
    }
}
