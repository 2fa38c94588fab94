// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, ErrorKind, Read, Write},
};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{
    grid::RegionGrid,
    header::{FILE_LEN, MapHeader, REGION_MASK_LEN, SIGNATURE},
};

/// A decoded map descriptor: its header and the enabled state of every region
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MapInfo {
    /// The fixed header fields
    pub header: MapHeader,
    /// The enabled state of every region
    pub regions: RegionGrid,
}

impl MapInfo {
    /// Creates a map descriptor with the given header and every region disabled.
    pub fn new(header: MapHeader) -> Self {
        Self {
            header,
            regions: RegionGrid::new(),
        }
    }

    /// Encodes this map descriptor into a newly allocated buffer.
    ///
    /// The buffer is always exactly [`FILE_LEN`] bytes long.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(FILE_LEN);
        // Writing into a Vec never fails
        let _ = encode(self, &mut buf);
        buf
    }
}

/// An error indicating that decoding a map descriptor failed.
///
/// No partially decoded data is ever returned alongside this error.
///
/// # Examples
///
/// ```
/// use mapinfo::FormatError;
///
/// // Garbage data
/// let data = b"NOTAMAPINFO!";
/// let result = mapinfo::decode(data.as_slice());
///
/// assert!(matches!(result, Err(FormatError::BadSignature(_))));
/// ```
#[derive(Debug)]
pub enum FormatError {
    /// An I/O error other than reaching the end of the stream occurred
    Io(io::Error),
    /// The stream does not begin with [`SIGNATURE`]
    BadSignature([u8; SIGNATURE.len()]),
    /// The stream ended before a fixed-size field could be read completely
    Truncated,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FormatError::Io(e) => write!(f, "I/O error: {e}"),
            FormatError::BadSignature(signature) => write!(
                f,
                "bad signature: expected \"{}\", found \"{}\"",
                SIGNATURE.escape_ascii(),
                signature.escape_ascii(),
            ),
            FormatError::Truncated => {
                write!(f, "truncated: expected {FILE_LEN} bytes of map data")
            }
        }
    }
}

impl Error for FormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FormatError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(value: io::Error) -> Self {
        match value.kind() {
            ErrorKind::UnexpectedEof => FormatError::Truncated,
            _ => FormatError::Io(value),
        }
    }
}

/// Decodes a map descriptor from `reader`
///
/// Exactly [`FILE_LEN`] bytes are consumed on success. Anything following the region mask is left
/// unread.
///
/// # Errors
///
/// Returns [`FormatError::BadSignature`] if the stream doesn't start with [`SIGNATURE`],
/// [`FormatError::Truncated`] if the stream ends early, and [`FormatError::Io`] if reading fails
/// for any other reason.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("mapinfo.ifo")?;
/// let map = mapinfo::decode(file)?;
///
/// println!("{} regions enabled", map.regions.enabled_count());
/// # Ok(())
/// # }
/// ```
pub fn decode<R>(mut reader: R) -> Result<MapInfo, FormatError>
where
    R: Read,
{
    let mut signature = [0; SIGNATURE.len()];
    reader.read_exact(&mut signature)?;
    if signature != SIGNATURE {
        return Err(FormatError::BadSignature(signature));
    }

    let width = reader.read_i16::<LittleEndian>()?;
    let height = reader.read_i16::<LittleEndian>()?;
    let mut reserved = [0; 4];
    reader.read_i16_into::<LittleEndian>(&mut reserved)?;

    let mut mask = vec![0; REGION_MASK_LEN];
    reader.read_exact(&mut mask)?;

    let mut regions = RegionGrid::new();
    unpack(&mask, regions.cells_mut());

    Ok(MapInfo {
        header: MapHeader {
            width,
            height,
            reserved,
        },
        regions,
    })
}

/// Encodes `map` into `writer`
///
/// Exactly [`FILE_LEN`] bytes are written. Header fields are written as-is without validation.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
///
/// # Examples
///
/// ```
/// use mapinfo::{MapHeader, MapInfo};
///
/// # fn main() -> std::io::Result<()> {
/// let mut map = MapInfo::new(MapHeader::new(192, 128));
/// map.regions.set(0, 0, true);
///
/// let mut out = Vec::new();
/// mapinfo::encode(&map, &mut out)?;
///
/// assert_eq!(out.len(), mapinfo::FILE_LEN);
/// assert_eq!(out[mapinfo::HEADER_LEN], 0b1000_0000);
/// # Ok(())
/// # }
/// ```
pub fn encode<W>(map: &MapInfo, writer: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writer.write_all(&SIGNATURE)?;

    let header = &map.header;
    writer.write_i16::<LittleEndian>(header.width)?;
    writer.write_i16::<LittleEndian>(header.height)?;
    for field in header.reserved {
        writer.write_i16::<LittleEndian>(field)?;
    }

    let mut mask = vec![0; REGION_MASK_LEN];
    pack(map.regions.cells(), &mut mask);
    writer.write_all(&mask)?;

    Ok(())
}

// Cells are packed eight to a byte, the first cell in the most significant bit
fn unpack(mask: &[u8], cells: &mut [bool]) {
    for (&byte, chunk) in mask.iter().zip(cells.chunks_exact_mut(8)) {
        for (i, cell) in chunk.iter_mut().enumerate() {
            *cell = (byte >> (7 - i)) & 1 == 1;
        }
    }
}

fn pack(cells: &[bool], mask: &mut [u8]) {
    for (byte, chunk) in mask.iter_mut().zip(cells.chunks_exact(8)) {
        *byte = chunk
            .iter()
            .enumerate()
            .filter(|(_, enabled)| **enabled)
            .fold(0, |acc, (i, _)| acc | (1_u8 << (7 - i)));
    }
}
