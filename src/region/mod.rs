//! Module for creating, reading, and modifying region files.
//!
//! Region files have an 8KiB header that contains two tables, each
//! table with 1024 32-bit big-endian elements. The first table holds
//! packed sector locations: a 3-byte sector offset and a 1-byte sector
//! count, laid out as |offset(3)|count(1)|. The second table holds Unix
//! timestamps. The 1024 slots cover a 32x32 grid of chunks, row-major
//! by `lx + lz*32`; a zero location means the slot is vacant.
//!
//! Everything after the header is chunk payloads, one per occupied
//! slot, each starting on a 4KiB boundary: a 32-bit big-endian length,
//! one compression-scheme byte, then (length - 1) bytes of compressed
//! NBT. The remainder of the final sector is padding. The file size is
//! always a multiple of 4096.

pub mod coord;
pub use coord::{RegionCoord, region_coords};
pub mod sector;
pub use sector::RegionSector;
pub mod timestamp;
pub use timestamp::Timestamp;
pub mod header;
pub use header::{RegionHeader, SectorTable, TimestampTable};
pub mod compression;
pub use compression::CompressionScheme;
pub mod regionfile;
pub use regionfile::RegionFile;

/// Tests if a value is a multiple of 4096.
pub const fn is_multiple_of_4096(n: u64) -> bool {
	(n & 4095) == 0
}

/// Counts the number of 4KiB sectors required to accomodate `size` bytes.
pub const fn required_sectors(size: u32) -> u32 {
	let whole = size.overflowing_shr(12).0;
	let partial = ((size & 4095) != 0) as u32;
	whole + partial
}

/// Returns the 4KiB pad size for the given size.
/// The pad size is the number of bytes required
/// to add to the size in order to make it a
/// multiple of 4096.
pub const fn pad_size(size: u64) -> u64 {
	(4096 - (size & 4095)) & 4095
}
