// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use std::{
    error::Error,
    fs::{self, File},
    path::Path,
};

use mapinfo::{FILE_LEN, HEADER_LEN, MapHeader, MapInfo, RegionId};

const MAP_FILE_NAME: &str = "mapinfo.ifo";

#[test]
fn synchronize_file_on_disk() -> Result<(), Box<dyn Error>> {
    let workspace_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("sync_map_file");
    fs::create_dir_all(&workspace_dir)?;
    let path = workspace_dir.join(MAP_FILE_NAME);

    let header = MapHeader {
        width: 192,
        height: 128,
        reserved: [7, 0, -1, 300],
    };

    // Write a map with a few stale regions enabled
    {
        let mut map = MapInfo::new(header);
        for id in [3_i16, 9, 200] {
            map.regions.set_by_id(id, true);
        }
        mapinfo::encode(&map, &mut File::create(&path)?)?;
    }
    assert_eq!(fs::metadata(&path)?.len(), FILE_LEN as u64);

    // Load it, synchronize against an authoritative list, and save it again
    {
        let mut map = mapinfo::decode(File::open(&path)?)?;
        assert_eq!(map.header, header);

        mapinfo::synchronize(&mut map.regions, [50_i16, 9, 9, 0x0105]);
        fs::write(&path, map.to_bytes())?;
    }

    let bytes = fs::read(&path)?;
    let map = mapinfo::decode(bytes.as_slice())?;
    let enabled: Vec<RegionId> = map.regions.enabled_ids().collect();

    assert_eq!(map.header, header);
    assert_eq!(
        enabled,
        [
            RegionId::from(9_u16),
            RegionId::from(50_u16),
            RegionId::from_xy(5, 1),
        ]
    );
    // Region 9 is the second bit of the second byte, region 50 the third bit of byte six
    assert_eq!(bytes[HEADER_LEN + 1], 0b0100_0000);
    assert_eq!(bytes[HEADER_LEN + 6], 0b0010_0000);

    Ok(())
}
