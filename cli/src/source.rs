// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, bail};
use tracing::{debug, warn};

// Column name emitted by database exports of `_RefRegion`
const HEADER_LINE: &str = "wRegionID";

/// Reads the enabled region IDs listed at `path`, or from stdin if `path` is `-`.
pub fn read_region_ids(path: &Path) -> anyhow::Result<Vec<i16>> {
    if path == Path::new("-") {
        return parse_region_ids(io::stdin().lock()).context("Failed to read region IDs from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open region list '{}'", path.display()))?;
    parse_region_ids(BufReader::new(file))
        .with_context(|| format!("Failed to read region list '{}'", path.display()))
}

/// Parses a list of region IDs, one per line.
///
/// Blank lines, `#` comments and a leading column header are skipped. Negative IDs do not belong
/// to the world map and are dropped. Any other malformed line fails the whole list.
pub fn parse_region_ids<R>(reader: R) -> anyhow::Result<Vec<i16>>
where
    R: BufRead,
{
    let mut ids = Vec::new();
    let mut skipped = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() || line.eq_ignore_ascii_case(HEADER_LINE) {
            continue;
        }

        let id: i16 = match line.parse() {
            Ok(id) => id,
            Err(e) => bail!("line {}: invalid region ID '{line}': {e}", index + 1),
        };
        if id < 0 {
            skipped += 1;
            continue;
        }

        ids.push(id);
    }

    if skipped > 0 {
        warn!("Ignored {skipped} negative region IDs");
    }
    debug!("Read {} region IDs", ids.len());

    Ok(ids)
}
