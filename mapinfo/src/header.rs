// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use crate::grid::REGION_COUNT;

/// The signature every map descriptor file starts with
pub const SIGNATURE: [u8; 12] = *b"JMXVMFO 1000";

/// Length of the fixed header, signature included
pub const HEADER_LEN: usize = SIGNATURE.len() + 6 * 2;
/// Length of the packed region mask following the header
pub const REGION_MASK_LEN: usize = REGION_COUNT / 8;
/// Length of a complete map descriptor file
pub const FILE_LEN: usize = HEADER_LEN + REGION_MASK_LEN;

/// The fixed fields following the signature of a map descriptor file
///
/// None of these fields are validated. They are carried through a decode/encode cycle exactly as
/// they were read.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MapHeader {
    /// Map width as stored in the file
    pub width: i16,
    /// Map height as stored in the file
    pub height: i16,
    /// Four fields with no known meaning, preserved as-is
    pub reserved: [i16; 4],
}

impl MapHeader {
    /// Creates a header with the given dimensions and zeroed reserved fields.
    pub const fn new(width: i16, height: i16) -> Self {
        Self {
            width,
            height,
            reserved: [0; 4],
        }
    }
}
