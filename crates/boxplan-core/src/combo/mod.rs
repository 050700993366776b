//! 1-D covering search along a single axis.
//!
//! Given a target length and a set of candidate lengths, finds one maximal
//! composition of candidates whose sum is as close to the target as
//! possible without exceeding it.

/// Find one composition of `candidates` summing to the greatest reachable
/// value `<= target`.
///
/// Reachability search over `0..=target`: position 0 is trivially
/// reachable, and each position `s` is reachable via the first candidate
/// `c <= s` (in the given order) such that `s - c` is reachable. That
/// candidate is recorded as the witness for `s`. The result is the witness
/// backtrack from the greatest reachable position, in removal order.
///
/// Candidate order is significant: it decides ties among equally reachable
/// compositions, so callers must pass candidates in a stable (first-seen)
/// order. Only one composition is ever produced per target, not an
/// exhaustive enumeration.
///
/// Returns an empty vec when `target` is 0 or no candidate fits.
pub fn find_combination(target: u32, candidates: &[u32]) -> Vec<u32> {
    if target == 0 {
        return Vec::new();
    }
    let target = target as usize;

    // witness[s] = the candidate that first made position s reachable.
    // Position 0 is reachable with no witness.
    let mut witness: Vec<Option<u32>> = vec![None; target + 1];
    for s in 1..=target {
        for &c in candidates {
            let c_len = c as usize;
            if c_len <= s && (s == c_len || witness[s - c_len].is_some()) {
                witness[s] = Some(c);
                break;
            }
        }
    }

    // Greatest reachable position at or below the target.
    let mut best = target;
    while best > 0 && witness[best].is_none() {
        best -= 1;
    }
    if best == 0 {
        return Vec::new();
    }

    // Backtrack, accumulating witnesses in removal order.
    let mut combination = Vec::new();
    let mut rest = best;
    while let Some(c) = witness[rest] {
        combination.push(c);
        rest -= c as usize;
        if rest == 0 {
            break;
        }
    }
    combination
}
