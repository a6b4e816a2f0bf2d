use std::io::{Read, Write};
use std::ops::{Index, IndexMut};

use crate::McResult;
use crate::ioext::{Readable, Writable};

use super::coord::RegionCoord;
use super::sector::RegionSector;
use super::timestamp::Timestamp;

/// A table of 1024 elements that contain information related to
/// a chunk within a region file. Indexed by [RegionCoord].
#[derive(Debug, Clone)]
pub struct RegionTable<T>(Box<[T; 1024]>);

/// The location table: one [RegionSector] for each potential chunk in a
/// 32x32 chunk region file.
pub type SectorTable = RegionTable<RegionSector>;

/// The timestamp table, which tells the last modification time for
/// each chunk.
pub type TimestampTable = RegionTable<Timestamp>;

/// The 8KiB header at the beginning of every region file: the location
/// table followed by the timestamp table.
#[derive(Debug, Clone, Default)]
pub struct RegionHeader {
	pub sectors: SectorTable,
	pub timestamps: TimestampTable,
}

impl<T> RegionTable<T> {
	/// Returns an iterator of the elements in the table, in row-major
	/// slot order.
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.0.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
		self.0.iter_mut()
	}
}

impl<T: Default + Copy> Default for RegionTable<T> {
	fn default() -> Self {
		Self(Box::new([T::default(); 1024]))
	}
}

impl<C: Into<RegionCoord>, T> Index<C> for RegionTable<T> {
	type Output = T;

	fn index(&self, index: C) -> &Self::Output {
		let coord: RegionCoord = index.into();
		&self.0[coord.index()]
	}
}

impl<C: Into<RegionCoord>, T> IndexMut<C> for RegionTable<T> {
	fn index_mut(&mut self, index: C) -> &mut Self::Output {
		let coord: RegionCoord = index.into();
		&mut self.0[coord.index()]
	}
}

impl<T: Readable + Default + Copy> Readable for RegionTable<T> {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		let mut table = Self::default();
		for index in 0..1024 {
			table.0[index] = T::read_from(reader)?;
		}
		Ok(table)
	}
}

impl<T: Writable> Writable for RegionTable<T> {
	fn write_to<W: Write>(&self, writer: &mut W) -> McResult<usize> {
		let mut write_size: usize = 0;
		for index in 0..1024 {
			write_size += self.0[index].write_to(writer)?;
		}
		Ok(write_size)
	}
}

impl Readable for RegionHeader {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		Ok(Self {
			sectors: SectorTable::read_from(reader)?,
			timestamps: TimestampTable::read_from(reader)?,
		})
	}
}

impl Writable for RegionHeader {
	fn write_to<W: Write>(&self, writer: &mut W) -> McResult<usize> {
		Ok(
			self.sectors.write_to(writer)? + self.timestamps.write_to(writer)?
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_wire_size() {
		let header = RegionHeader::default();
		let mut buffer = Vec::new();
		let written = header.write_to(&mut buffer).unwrap();
		assert_eq!(written, 4096 * 2);
		assert_eq!(buffer.len(), 4096 * 2);
	}

	#[test]
	fn header_roundtrip() {
		let mut header = RegionHeader::default();
		header.sectors[(0, 0)] = RegionSector::new(2, 1);
		header.sectors[(31, 31)] = RegionSector::new(3, 2);
		header.timestamps[(0, 0)] = Timestamp(1570215508);
		let mut buffer = Vec::new();
		header.write_to(&mut buffer).unwrap();
		let read = RegionHeader::read_from(&mut buffer.as_slice()).unwrap();
		assert_eq!(read.sectors[(0, 0)], RegionSector::new(2, 1));
		assert_eq!(read.sectors[(31, 31)], RegionSector::new(3, 2));
		assert_eq!(read.sectors[(1, 0)], RegionSector::empty());
		assert_eq!(read.timestamps[(0, 0)], Timestamp(1570215508));
	}
}
