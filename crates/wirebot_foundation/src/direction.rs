//! World-relative movement directions.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::vector::Vec3;

/// A world-relative direction a `move` command can name.
///
/// `up`/`down` run along the X axis, `left`/`right` along the Z axis; the
/// character never leaves the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Positive X.
    Up,
    /// Negative X.
    Down,
    /// Negative Z.
    Left,
    /// Positive Z.
    Right,
}

impl Direction {
    /// All directions, in keyword order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the lowercase keyword for this direction.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Returns the unit-axis vector for this direction scaled by `magnitude`.
    #[must_use]
    pub const fn vector(self, magnitude: f32) -> Vec3 {
        match self {
            Self::Up => Vec3::new(magnitude, 0.0, 0.0),
            Self::Down => Vec3::new(-magnitude, 0.0, 0.0),
            Self::Left => Vec3::new(0.0, 0.0, -magnitude),
            Self::Right => Vec3::new(0.0, 0.0, magnitude),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Case-sensitive: the wire protocol keywords are lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(Error::invalid_operand(format!(
                "`{other}` is not a direction"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
