//! Classification of how an axis's samples relate to their cell boundaries.

use serde::{Deserialize, Serialize};

/// Spacing category of a 1-D coordinate axis.
///
/// The numeric codes returned by [`Spacing::code`] go over the wire and are
/// fixed; new categories must take new codes.
///
/// | code | spacing                 | values read back      |
/// |------|-------------------------|-----------------------|
/// | 0    | `Regular`               | none (start/end/n)    |
/// | 1    | `IrregularPoint`        | n points              |
/// | 2    | `ContiguousInterval`    | n + 1 edges           |
/// | 3    | `DiscontiguousInterval` | 2n interleaved bounds |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Spacing {
    /// Evenly spaced; start, end and count describe the axis.
    Regular,
    /// Arbitrary point values; edges are halfway between neighbors.
    IrregularPoint,
    /// Intervals that share edges; n + 1 edge values.
    ContiguousInterval,
    /// Disjoint intervals with possible gaps; n (lower, upper) pairs.
    DiscontiguousInterval,
}

impl Spacing {
    /// Stable wire code.
    pub const fn code(self) -> u8 {
        match self {
            Spacing::Regular => 0,
            Spacing::IrregularPoint => 1,
            Spacing::ContiguousInterval => 2,
            Spacing::DiscontiguousInterval => 3,
        }
    }

    /// Inverse of [`Spacing::code`].
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Spacing::Regular),
            1 => Some(Spacing::IrregularPoint),
            2 => Some(Spacing::ContiguousInterval),
            3 => Some(Spacing::DiscontiguousInterval),
            _ => None,
        }
    }

    /// Decide the spacing from an axis's sample characteristics.
    ///
    /// Regularity wins over interval semantics so that a regular axis keeps
    /// its compact start/end/count form.
    pub fn classify(traits: &AxisTraits) -> Self {
        if traits.regular {
            Spacing::Regular
        } else if !traits.interval {
            Spacing::IrregularPoint
        } else if traits.contiguous {
            Spacing::ContiguousInterval
        } else {
            Spacing::DiscontiguousInterval
        }
    }

    /// Number of values `read_values` yields for an axis of `n` samples.
    pub const fn value_count(self, n: usize) -> usize {
        match self {
            Spacing::Regular => 0,
            Spacing::IrregularPoint => n,
            Spacing::ContiguousInterval => n + 1,
            Spacing::DiscontiguousInterval => 2 * n,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Spacing::Regular => "regular",
            Spacing::IrregularPoint => "irregularPoint",
            Spacing::ContiguousInterval => "contiguousInterval",
            Spacing::DiscontiguousInterval => "discontiguousInterval",
        }
    }
}

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Spacing> for u8 {
    fn from(spacing: Spacing) -> Self {
        spacing.code()
    }
}

impl TryFrom<u8> for Spacing {
    type Error = UnknownSpacingCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Spacing::from_code(code).ok_or(UnknownSpacingCode(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown spacing code {0}")]
pub struct UnknownSpacingCode(pub u8);

/// Sample characteristics the classifier looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisTraits {
    /// Uniform step between samples.
    pub regular: bool,
    /// Each sample carries interval bounds.
    pub interval: bool,
    /// Each cell's upper bound is the next cell's lower bound.
    pub contiguous: bool,
}
