// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Edge weights and path distances

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Numeric edge weight usable by shortest-path and spanning-tree searches
///
/// Implemented for every primitive integer and float type. Floats are only
/// partially ordered; searches reject weights that do not compare (NaN).
pub trait Weight: Copy + fmt::Debug + PartialOrd + Add<Output = Self> {
    /// Additive identity, the distance from a node to itself
    fn zero() -> Self;

    /// Weight assumed for an edge inserted without one
    fn one() -> Self;

    /// Sum of two weights, `None` if it does not fit the type
    ///
    /// Floats never overflow here; they saturate to infinity.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Whether this weight takes part in an ordering at all
    #[must_use]
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

macro_rules! impl_weight_int {
    ($($t:ty),+) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )+
    };
}

macro_rules! impl_weight_float {
    ($($t:ty),+) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )+
    };
}

impl_weight_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight_float!(f32, f64);

/// Distance from a search source to a node
///
/// `Infinite` orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Distance<W> {
    /// Reachable with the given total weight
    Finite(W),
    /// Not reachable from the source
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// True if the node was reached
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// True if the node was not reached
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// The finite total weight, if any
    #[must_use]
    pub fn finite(&self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(*w),
            Self::Infinite => None,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Self::Infinite, Self::Finite)
    }
}

impl<W: PartialOrd> PartialOrd for Distance<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.partial_cmp(b),
            (Self::Finite(_), Self::Infinite) => Some(Ordering::Less),
            (Self::Infinite, Self::Finite(_)) => Some(Ordering::Greater),
            (Self::Infinite, Self::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(w) => fmt::Display::fmt(w, f),
            Self::Infinite => f.pad("inf"),
        }
    }
}
