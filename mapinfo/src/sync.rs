// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use crate::grid::{REGION_COUNT, RegionGrid, RegionId};

/// Rebuilds `grid` so that exactly the regions in `enabled_ids` are enabled
///
/// Every region is disabled first, so regions missing from `enabled_ids` never stay enabled.
/// Duplicates and ordering in `enabled_ids` have no effect on the result. Returns `grid` to allow
/// chaining.
///
/// Callers must only invoke this with the complete, authoritative list of enabled regions. An
/// empty list disables every region.
///
/// # Examples
///
/// ```
/// use mapinfo::RegionGrid;
///
/// let mut grid = RegionGrid::new();
/// grid.set_by_id(3_i16, true);
///
/// mapinfo::synchronize(&mut grid, [9_i16, 50, 9]);
///
/// assert!(!grid.get_by_id(3_i16));
/// assert!(grid.get_by_id(9_i16));
/// assert_eq!(grid.enabled_count(), 2);
/// ```
pub fn synchronize<I>(grid: &mut RegionGrid, enabled_ids: I) -> &mut RegionGrid
where
    I: IntoIterator,
    I::Item: Into<RegionId>,
{
    grid.disable_all();
    for id in enabled_ids {
        grid.set_by_id(id, true);
    }

    grid
}

/// A summary of how a grid changed during synchronization
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SyncSummary {
    /// Number of regions enabled before
    pub before: usize,
    /// Number of regions enabled after
    pub after: usize,
    /// Number of regions that went from disabled to enabled
    pub enabled: usize,
    /// Number of regions that went from enabled to disabled
    pub disabled: usize,
}

impl SyncSummary {
    /// Returns `true` if no region changed state.
    pub fn is_unchanged(&self) -> bool {
        self.enabled == 0 && self.disabled == 0
    }
}

/// Compares two grids and counts the regions whose state differs
pub fn summarize(before: &RegionGrid, after: &RegionGrid) -> SyncSummary {
    let (old, new) = (before.cells(), after.cells());
    debug_assert_eq!(old.len(), REGION_COUNT);

    let mut summary = SyncSummary::default();
    for (&was, &is) in old.iter().zip(new) {
        summary.before += usize::from(was);
        summary.after += usize::from(is);
        match (was, is) {
            (false, true) => summary.enabled += 1,
            (true, false) => summary.disabled += 1,
            _ => {}
        }
    }

    summary
}
