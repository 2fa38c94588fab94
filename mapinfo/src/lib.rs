// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Reading, writing, and synchronizing world map region masks.
//!
//! A map descriptor (`JMXVMFO`) file holds a small header followed by a bitmask marking which of
//! the 256x256 regions of the world map are enabled. This crate decodes such files into a
//! [`RegionGrid`], rebuilds that grid from an authoritative list of region identifiers, and
//! encodes it back to the exact same layout.
//!
//! # Examples
//!
//! Enabling exactly the regions known to the game database:
//!
//! ```no_run
//! use std::fs::{self, File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut map = mapinfo::decode(File::open("mapinfo.ifo")?)?;
//! // Usually the result of `SELECT wRegionID FROM _RefRegion`
//! let region_ids: Vec<i16> = vec![25000, 25001, 24744];
//!
//! mapinfo::synchronize(&mut map.regions, region_ids);
//!
//! fs::write("mapinfo.ifo", map.to_bytes())?;
//! # Ok(())
//! # }
//! ```

mod codec;
mod grid;
mod header;
mod sync;

pub use codec::{FormatError, MapInfo, decode, encode};
pub use grid::{GRID_SIDE, REGION_COUNT, RegionGrid, RegionId};
pub use header::{FILE_LEN, HEADER_LEN, MapHeader, REGION_MASK_LEN, SIGNATURE};
pub use sync::{SyncSummary, summarize, synchronize};
