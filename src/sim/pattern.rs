//! Target pattern generation and matching

use std::collections::HashMap;

use rand::Rng;
use rand_pcg::Pcg32;

/// Tokens to light up: 3 in the lower half of a board's difficulty
/// bracket, 4 in the upper half.
pub fn pattern_size(effective_difficulty: u32) -> usize {
    if effective_difficulty < 4 { 3 } else { 4 }
}

/// Draws a pattern of distinct token indices, uniform without replacement.
///
/// Partial Fisher-Yates over the index range: never re-rolls, so the draw
/// count per round is fixed and replay under a seeded generator is exact.
pub fn generate_pattern(
    rng: &mut Pcg32,
    token_count: usize,
    effective_difficulty: u32,
) -> Vec<usize> {
    let size = pattern_size(effective_difficulty).min(token_count);
    let mut indices: Vec<usize> = (0..token_count).collect();
    for slot in 0..size {
        let pick = rng.random_range(slot..token_count);
        indices.swap(slot, pick);
    }
    indices.truncate(size);
    indices
}

/// Order-insensitive equality with multiplicity.
///
/// Count-based: a duplicated selection only matches if the counts line up
/// on both sides, so tapping the same correct token twice can never
/// complete a pattern of distinct indices. Empty lists never match.
pub fn multiset_equals(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() || a.is_empty() {
        return false;
    }
    let mut counts: HashMap<usize, i32> = HashMap::new();
    for &index in a {
        *counts.entry(index).or_insert(0) += 1;
    }
    for &index in b {
        match counts.get_mut(&index) {
            Some(count) => *count -= 1,
            None => return false,
        }
    }
    counts.values().all(|&c| c == 0)
}
