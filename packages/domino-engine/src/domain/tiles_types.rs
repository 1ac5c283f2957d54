//! Core tile-related types: Tile, OrientedTile, End

use std::fmt;

use crate::domain::rules::MAX_PIPS;

/// Pip count on one face of a tile (0..=6).
pub type Pips = u8;

/// An unoriented domino tile.
///
/// Stored with `a <= b` so that equality, hashing and ordering treat `(3,5)`
/// and `(5,3)` as the same physical tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tile {
    a: Pips,
    b: Pips,
}

impl Tile {
    /// Build a tile from two faces in any order.
    ///
    /// Faces above `MAX_PIPS` are a caller bug; use [`Tile::try_new`] for
    /// untrusted input.
    pub const fn new(x: Pips, y: Pips) -> Self {
        debug_assert!(x <= MAX_PIPS && y <= MAX_PIPS);
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// Bypasses the face-range check, for tests of corrupt input.
    #[cfg(test)]
    pub(crate) const fn unchecked(a: Pips, b: Pips) -> Self {
        Self { a, b }
    }

    pub fn try_new(x: Pips, y: Pips) -> Option<Self> {
        if x > MAX_PIPS || y > MAX_PIPS {
            return None;
        }
        Some(Self::new(x, y))
    }

    /// Lower face.
    pub const fn a(&self) -> Pips {
        self.a
    }

    /// Higher face.
    pub const fn b(&self) -> Pips {
        self.b
    }

    pub const fn is_double(&self) -> bool {
        self.a == self.b
    }

    pub const fn has(&self, pips: Pips) -> bool {
        self.a == pips || self.b == pips
    }

    /// Face total; orientation never matters for scoring.
    pub const fn pips(&self) -> u16 {
        self.a as u16 + self.b as u16
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// A tile as laid in the chain: `left` faces the chain's left end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct OrientedTile {
    pub left: Pips,
    pub right: Pips,
}

impl OrientedTile {
    pub const fn new(left: Pips, right: Pips) -> Self {
        Self { left, right }
    }

    /// The physical tile, orientation dropped.
    pub const fn tile(&self) -> Tile {
        Tile::new(self.left, self.right)
    }
}

impl fmt::Display for OrientedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// One of the two open extremities of the chain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum End {
    Left,
    Right,
}

impl End {
    pub const BOTH: [End; 2] = [End::Left, End::Right];
}
