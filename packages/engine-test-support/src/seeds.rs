//! Deterministic seeds for randomized tests.

/// A 32-byte seed that differs per `tag` and never changes between runs.
pub fn fixed_seed(tag: u8) -> [u8; 32] {
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = tag.wrapping_mul(31).wrapping_add(i as u8).rotate_left(3);
    }
    seed
}

/// `count` distinct seeds, for looping a test over several deals.
pub fn seed_series(count: u8) -> Vec<[u8; 32]> {
    (0..count).map(fixed_seed).collect()
}
