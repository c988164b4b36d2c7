//! Longest increasing subsequence over index sequences.

use smallvec::{SmallVec, smallvec};

/// Positions (into `sequence`) of one longest strictly increasing
/// subsequence, in ascending order.
///
/// Patience variant: `tails[k]` holds the position of the smallest tail
/// value of any increasing run of length `k + 1`; predecessors rebuild
/// the winning run. O(n log n).
pub(crate) fn longest_increasing_subsequence(sequence: &[usize]) -> Vec<usize> {
    if sequence.is_empty() {
        return Vec::new();
    }

    let mut tails: SmallVec<[usize; 16]> = SmallVec::new();
    let mut predecessors: SmallVec<[Option<usize>; 16]> = smallvec![None; sequence.len()];

    for (position, &value) in sequence.iter().enumerate() {
        let slot = tails.partition_point(|&tail| sequence[tail] < value);
        predecessors[position] = if slot == 0 { None } else { Some(tails[slot - 1]) };
        if slot == tails.len() {
            tails.push(position);
        } else {
            tails[slot] = position;
        }
    }

    let mut run = Vec::with_capacity(tails.len());
    let mut current = tails.last().copied();
    while let Some(position) = current {
        run.push(position);
        current = predecessors[position];
    }
    run.reverse();
    run
}
