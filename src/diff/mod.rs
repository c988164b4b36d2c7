//! Identity-keyed reconciliation of ordered collections
//!
//! Given an existing ordered collection of identified model objects and a
//! freshly fetched sequence of raw entries, [`diff`] computes the minimal
//! insert/remove/move index sets needed to bring the collection up to
//! date. Elements are matched by a stable identity extracted from both
//! sides; among matched elements the longest increasing subsequence of
//! old indices stays put, which makes the reported move set minimal.

mod lis;

use crate::error::{ModelMapError, Result};
use crate::model::{Identified, IdentityValue};
use crate::raw;
use lis::longest_increasing_subsequence;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

/// Index deltas needed to bring an ordered collection up to date.
///
/// Every old-collection index lands in exactly one of `removed`, the
/// move sources, or the unchanged sources; every usable new-data index
/// lands in exactly one of `inserted`, the move destinations, or the
/// unchanged destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Positions in the new data not present in the old collection
    pub inserted: Vec<usize>,
    /// Positions in the old collection no longer present, ascending
    pub removed: Vec<usize>,
    /// Matched elements whose relative order changed, as (old, new) pairs
    pub moved: Vec<(usize, usize)>,
    /// Matched elements needing no move, as (old, new) pairs
    pub unchanged: Vec<(usize, usize)>,
    /// New-data entries skipped because no identity could be extracted;
    /// these are the per-entry soft errors of the diff
    pub missing_identity: Vec<usize>,
}

impl DiffResult {
    /// True when the collection already matches the data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty() && self.moved.is_empty()
    }
}

/// Match old objects against new raw entries by identity and compute the
/// minimal-edit index sets.
///
/// Duplicate identities on either side are refused with
/// [`ModelMapError::DuplicateIdentity`]; an old object yielding no
/// identity at all is refused with [`ModelMapError::MissingIdentity`].
/// New entries without an identity are skipped and reported in
/// [`DiffResult::missing_identity`].
pub fn diff<T: Identified>(
    old: &[T],
    new_data: &[Value],
    identity_key_path: &str,
) -> Result<DiffResult> {
    let mut old_by_identity: FxHashMap<IdentityValue, usize> =
        FxHashMap::with_capacity_and_hasher(old.len(), Default::default());
    for (old_index, object) in old.iter().enumerate() {
        let identity = object
            .identity_value(identity_key_path)
            .ok_or(ModelMapError::MissingIdentity {
                entry_index: old_index,
            })?;
        if old_by_identity.insert(identity.clone(), old_index).is_some() {
            return Err(ModelMapError::DuplicateIdentity { identity });
        }
    }

    let mut result = DiffResult::default();
    let mut matched: SmallVec<[(usize, usize); 16]> = SmallVec::new();
    let mut seen: FxHashSet<IdentityValue> =
        FxHashSet::with_capacity_and_hasher(new_data.len(), Default::default());
    for (new_index, entry) in new_data.iter().enumerate() {
        let Some(identity) = raw::identity_at_path(entry, identity_key_path) else {
            result.missing_identity.push(new_index);
            continue;
        };
        if !seen.insert(identity.clone()) {
            return Err(ModelMapError::DuplicateIdentity { identity });
        }
        match old_by_identity.remove(&identity) {
            Some(old_index) => matched.push((old_index, new_index)),
            None => result.inserted.push(new_index),
        }
    }

    // Whatever was never matched is gone from the data
    result.removed = old_by_identity.into_values().collect();
    result.removed.sort_unstable();

    // Matched pairs on the longest increasing run of old indices keep
    // their relative order; everything else moves
    let old_order: Vec<usize> = matched.iter().map(|&(old_index, _)| old_index).collect();
    let keep = longest_increasing_subsequence(&old_order);
    let mut keep_positions = keep.iter().copied().peekable();
    for (position, &(old_index, new_index)) in matched.iter().enumerate() {
        if keep_positions.peek() == Some(&position) {
            keep_positions.next();
            result.unchanged.push((old_index, new_index));
        } else {
            result.moved.push((old_index, new_index));
        }
    }

    log::debug!(
        "diff over {} old / {} new: {} inserted, {} removed, {} moved, {} unchanged, {} skipped",
        old.len(),
        new_data.len(),
        result.inserted.len(),
        result.removed.len(),
        result.moved.len(),
        result.unchanged.len(),
        result.missing_identity.len()
    );
    Ok(result)
}
