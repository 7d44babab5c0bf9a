//! Digit grouping conventions.

use crate::errors::{Error, Result};

/// How the integer part of an amount is split into separated groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum DigitGrouping {
    /// South Asian grouping: the last three digits, then pairs (`12,34,567`).
    Two,
    /// Western grouping: triples throughout (`1,234,567`).
    #[default]
    Three,
}

impl DigitGrouping {
    /// Size of the groups to the left of the right-most group.
    pub fn group_size(&self) -> usize {
        match self {
            DigitGrouping::Two => 2,
            DigitGrouping::Three => 3,
        }
    }
}

impl TryFrom<u8> for DigitGrouping {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            2 => Ok(DigitGrouping::Two),
            3 => Ok(DigitGrouping::Three),
            other => Err(Error::InvalidArgument(format!(
                "digit grouping must be 2 or 3, got {other}"
            ))),
        }
    }
}

impl From<DigitGrouping> for u8 {
    fn from(grouping: DigitGrouping) -> Self {
        grouping.group_size() as u8
    }
}

impl std::fmt::Display for DigitGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitGrouping::Two => write!(f, "Two"),
            DigitGrouping::Three => write!(f, "Three"),
        }
    }
}
