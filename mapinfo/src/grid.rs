// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Debug, Formatter};

/// Number of regions along each axis of the world map
pub const GRID_SIDE: usize = 256;
/// Total number of regions in a [`RegionGrid`]
pub const REGION_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// A packed region identifier
///
/// The low byte is the region's X coordinate and the high byte is its Y coordinate. Databases
/// usually store these as signed 16-bit integers, so `RegionId` converts from and to `i16` by
/// reinterpreting the bit pattern. Every `i16` is therefore a valid identifier.
///
/// # Examples
///
/// ```
/// use mapinfo::RegionId;
///
/// let id = RegionId::from(0x0105_i16);
/// assert_eq!((id.x(), id.y()), (0x05, 0x01));
///
/// // Identifiers with Y >= 128 appear negative when signed
/// let id = RegionId::from(-1_i16);
/// assert_eq!((id.x(), id.y()), (0xff, 0xff));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RegionId(u16);

impl RegionId {
    /// Creates the identifier of the region at (`x`, `y`).
    pub const fn from_xy(x: u8, y: u8) -> Self {
        Self(u16::from_le_bytes([x, y]))
    }

    /// Returns the X coordinate of this region.
    pub const fn x(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    /// Returns the Y coordinate of this region.
    pub const fn y(self) -> u8 {
        self.0.to_le_bytes()[1]
    }

    /// Returns the identifier as an unsigned value in `0..=65535`.
    pub const fn get(self) -> u16 {
        self.0
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for RegionId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<i16> for RegionId {
    fn from(value: i16) -> Self {
        Self(value as u16)
    }
}

impl From<RegionId> for i16 {
    fn from(value: RegionId) -> Self {
        value.0 as i16
    }
}

impl From<RegionId> for u16 {
    fn from(value: RegionId) -> Self {
        value.0
    }
}

/// The enabled state of every region of the 256x256 world map
///
/// Regions are stored in a flat array indexed by `y * 256 + x`, which is also the order in which
/// they are serialized. A grid always holds exactly [`REGION_COUNT`] entries.
///
/// # Examples
///
/// ```
/// use mapinfo::RegionGrid;
///
/// let mut grid = RegionGrid::new();
/// grid.set(5, 1, true);
///
/// assert!(grid.get_by_id(0x0105_i16));
/// assert_eq!(grid.enabled_count(), 1);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct RegionGrid {
    cells: Box<[bool]>,
}

impl RegionGrid {
    /// Creates a grid with every region disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![false; REGION_COUNT].into_boxed_slice(),
        }
    }

    /// Returns whether the region at (`x`, `y`) is enabled.
    pub fn get(&self, x: u8, y: u8) -> bool {
        self.cells[RegionId::from_xy(x, y).index()]
    }

    /// Enables or disables the region at (`x`, `y`).
    pub fn set(&mut self, x: u8, y: u8, enabled: bool) {
        self.cells[RegionId::from_xy(x, y).index()] = enabled;
    }

    /// Returns whether the region identified by `id` is enabled.
    pub fn get_by_id(&self, id: impl Into<RegionId>) -> bool {
        self.cells[id.into().index()]
    }

    /// Enables or disables the region identified by `id`.
    pub fn set_by_id(&mut self, id: impl Into<RegionId>, enabled: bool) {
        self.cells[id.into().index()] = enabled;
    }

    /// Disables every region.
    pub fn disable_all(&mut self) {
        self.cells.fill(false);
    }

    /// Enables every region.
    pub fn enable_all(&mut self) {
        self.cells.fill(true);
    }

    /// Returns the number of enabled regions.
    pub fn enabled_count(&self) -> usize {
        self.cells.iter().filter(|&&enabled| enabled).count()
    }

    /// Returns `true` if no region is enabled.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Returns an iterator over the identifiers of all enabled regions in ascending order.
    pub fn enabled_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, enabled)| **enabled)
            // The index is always below REGION_COUNT, which fits in a u16 exactly
            .map(|(index, _)| RegionId(index as u16))
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl Default for RegionGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for RegionGrid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RegionGrid")
            .field("enabled", &self.enabled_count())
            .field("total", &REGION_COUNT)
            .finish()
    }
}
