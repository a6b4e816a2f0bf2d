use std::io::SeekFrom;
use std::path::Path;

use crate::{McError, McResult};
use crate::for_each_int_type;

/// A region file contains up to 1024 chunks, which is 32x32 chunks.
/// This struct represents a chunk coordinate within a region file.
/// The coordinate can be an absolute coordinate and it will be
/// normalized to relative coordinates.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct RegionCoord(u16);

impl RegionCoord {
	/// Create a new RegionCoord.
	/// The x and z will be mathematically transformed into relative coordinates.
	/// So if the coordinate given to `new()` is `(32, 32)`, the result will be
	/// `(0, 0)`.
	pub fn new(x: u16, z: u16) -> Self {
		let xmod = x & 31;
		let zmod = z & 31;
		Self(xmod | zmod.overflowing_shl(5).0)
	}

	/// The row-major slot index (`lx + lz*32`) in the header tables.
	pub fn index(&self) -> usize {
		self.0 as usize
	}

	pub fn x(&self) -> i32 {
		(self.0 & 31) as i32
	}

	pub fn z(&self) -> i32 {
		(self.0.overflowing_shr(5).0 & 31) as i32
	}

	pub fn tuple<T>(self) -> (T, T)
	where
	(T, T): From<Self> {
		self.into()
	}

	/// Get a [SeekFrom] value that can be used to seek to the location where
	/// this chunk's sector offset is stored in the sector offset table.
	pub fn sector_table_offset(&self) -> SeekFrom {
		SeekFrom::Start(self.0 as u64 * 4)
	}

	/// Get a [SeekFrom] value that can be used to seek to the location where
	/// this chunk's timestamp is stored in the timestamp table.
	pub fn timestamp_table_offset(&self) -> SeekFrom {
		SeekFrom::Start(self.0 as u64 * 4 + 4096)
	}
}

macro_rules! __regioncoord_impl {
	($type:ty) => {

		impl From<($type, $type)> for RegionCoord {
			fn from(value: ($type, $type)) -> Self {
				Self::new(value.0 as u16, value.1 as u16)
			}
		}

		impl From<$type> for RegionCoord {
			fn from(value: $type) -> Self {
				Self(value as u16)
			}
		}

		impl From<RegionCoord> for ($type, $type) {
			fn from(value: RegionCoord) -> Self {
				(value.x() as $type, value.z() as $type)
			}
		}

		impl From<RegionCoord> for $type {
			fn from(value: RegionCoord) -> Self {
				value.0 as $type
			}
		}
	};
}

for_each_int_type!(__regioncoord_impl);

impl<T: Into<RegionCoord> + Copy> From<&T> for RegionCoord {
    fn from(value: &T) -> Self {
		T::into(*value)
    }
}

impl std::fmt::Display for RegionCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.z())
    }
}

/// Recovers a region's grid coordinates from its filename. The final
/// path component must look like `r.<x>.<z>.<ext>`, where x and z are
/// signed decimal numbers. The extension is ignored and may be empty
/// (both `.mca` and the legacy `.mcr` pass through here), but the dot
/// terminating the z field must be present.
pub fn region_coords<P: AsRef<Path>>(path: P) -> McResult<(i32, i32)> {
	fn bad_path(path: &Path) -> McError {
		McError::BadPath(path.display().to_string())
	}
	let path = path.as_ref();
	let name = path.file_name()
		.and_then(|name| name.to_str())
		.ok_or_else(|| bad_path(path))?;
	let mut parts = name.split('.');
	match (parts.next(), parts.next(), parts.next(), parts.next()) {
		(Some("r"), Some(x), Some(z), Some(_ext)) => {
			let x = x.parse::<i32>().map_err(|_| bad_path(path))?;
			let z = z.parse::<i32>().map_err(|_| bad_path(path))?;
			Ok((x, z))
		}
		_ => Err(bad_path(path)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coord_normalization() {
		assert_eq!(RegionCoord::new(32, 32), RegionCoord::new(0, 0));
		let coord = RegionCoord::new(5, 9);
		assert_eq!(coord.x(), 5);
		assert_eq!(coord.z(), 9);
		assert_eq!(coord.index(), 5 + 9 * 32);
		assert_eq!(RegionCoord::from((31i32, 31i32)).index(), 1023);
	}

	#[test]
	fn filename_coords() {
		assert!(region_coords("").is_err());
		assert!(region_coords("r.1.2").is_err());
		assert_eq!(region_coords("r.1.2.").unwrap(), (1, 2));
		assert_eq!(region_coords("r.1.2.mca").unwrap(), (1, 2));
		assert_eq!(region_coords("r.1.2.mcr").unwrap(), (1, 2));
		assert_eq!(region_coords("r.-1.2.mca").unwrap(), (-1, 2));
		assert_eq!(region_coords("/a/b/r.-1.2.mca").unwrap(), (-1, 2));
		assert_eq!(region_coords("a/b/r.-1.2.mca").unwrap(), (-1, 2));
		assert!(region_coords("/a/b/x.-1.2.mca").is_err());
		assert!(region_coords("r.one.2.mca").is_err());
	}
}
