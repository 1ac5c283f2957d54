//! Chain validation and placement resolution.
//!
//! The chain is stored left to right as oriented tiles. Adjacent tiles touch
//! on equal pips: `chain[i].right == chain[i + 1].left`.

use crate::domain::rules::DOUBLE_SIX;
use crate::domain::tiles_types::{End, OrientedTile, Pips, Tile};

pub fn left_end(chain: &[OrientedTile]) -> Option<Pips> {
    chain.first().map(|t| t.left)
}

pub fn right_end(chain: &[OrientedTile]) -> Option<Pips> {
    chain.last().map(|t| t.right)
}

/// Pips showing at `end`, `None` while the chain is empty.
pub fn exposed(chain: &[OrientedTile], end: End) -> Option<Pips> {
    match end {
        End::Left => left_end(chain),
        End::Right => right_end(chain),
    }
}

/// Whether `tile` may extend `chain` at `end`.
///
/// The empty chain only accepts the double-six.
pub fn can_place(tile: Tile, end: End, chain: &[OrientedTile]) -> bool {
    match exposed(chain, end) {
        None => tile == DOUBLE_SIX,
        Some(pips) => tile.has(pips),
    }
}

/// Adjacent tiles agree on their touching pips.
pub fn is_consistent(chain: &[OrientedTile]) -> bool {
    chain.windows(2).all(|w| w[0].right == w[1].left)
}

/// Orientation `tile` takes when laid at `end`.
///
/// The face matching the exposed pips touches the chain and the other face
/// becomes the new exposed end. Callers must check [`can_place`] first.
pub fn resolve(tile: Tile, end: End, chain: &[OrientedTile]) -> OrientedTile {
    let Some(pivot) = exposed(chain, end) else {
        return OrientedTile::new(tile.a(), tile.b());
    };
    let far = if tile.a() == pivot { tile.b() } else { tile.a() };
    match end {
        End::Left => OrientedTile::new(far, pivot),
        End::Right => OrientedTile::new(pivot, far),
    }
}

/// Prepend or append an already-resolved tile.
pub fn place(chain: &mut Vec<OrientedTile>, placed: OrientedTile, end: End) {
    match end {
        End::Left => chain.insert(0, placed),
        End::Right => chain.push(placed),
    }
}
