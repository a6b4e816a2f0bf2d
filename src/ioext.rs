//! Extension traits for reading and writing big-endian values.
//! Everything in the region and NBT formats is big-endian, so this is
//! the single place where byte order is decided.

use std::io::{
	self,
	Read, Write,
	Seek, SeekFrom,
};

use crate::{McError, McResult};

/// A value that can be written to a stream, returning the number of
/// bytes written.
pub trait Writable {
	fn write_to<W: Write>(&self, writer: &mut W) -> McResult<usize>;
}

/// A value that can be read from a stream.
pub trait Readable: Sized {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self>;
}

/// A value that knows where it lives in a stream.
pub trait Seekable {
	fn seeker(&self) -> SeekFrom;
}

macro_rules! __primitive_io_impls {
	($($type:ty)+) => {
		$(
			impl Readable for $type {
				fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
					let mut buffer = [0u8; std::mem::size_of::<$type>()];
					reader.read_exact(&mut buffer).map_err(McError::eof)?;
					Ok(<$type>::from_be_bytes(buffer))
				}
			}

			impl Writable for $type {
				fn write_to<W: Write>(&self, writer: &mut W) -> McResult<usize> {
					writer.write_all(&self.to_be_bytes())?;
					Ok(std::mem::size_of::<$type>())
				}
			}
		)+
	};
}

// The floats are included because from_be_bytes/to_be_bytes already do
// the bit-cast through the matching fixed-width integer.
__primitive_io_impls!(u8 u16 u32 u64 i8 i16 i32 i64 f32 f64);

pub trait ReaderExt: Read {
	fn read_value<T: Readable>(&mut self) -> McResult<T>
	where
		Self: Sized,
	{
		T::read_from(self)
	}
}

impl<R: Read> ReaderExt for R {}

pub trait WriterExt: Write {
	fn write_value<T: Writable>(&mut self, value: T) -> McResult<usize>
	where
		Self: Sized,
	{
		value.write_to(self)
	}

	/// Writes `count` zeroes to the writer.
	fn write_zeroes(&mut self, count: u64) -> io::Result<u64> {
		const ZEROES: &[u8; 4096] = &[0u8; 4096];
		let mut remainder = count;
		while remainder >= ZEROES.len() as u64 {
			self.write_all(ZEROES)?;
			remainder -= ZEROES.len() as u64;
		}
		if remainder != 0 {
			self.write_all(&ZEROES[0..remainder as usize])?;
		}
		Ok(count)
	}
}

impl<W: Write> WriterExt for W {}

pub trait SeekExt: Seek {
	/// Capture the current position as a [SeekFrom] so a caller can hop
	/// elsewhere in the stream and come back afterwards.
	fn seek_return(&mut self) -> io::Result<SeekFrom> {
		Ok(SeekFrom::Start(self.stream_position()?))
	}
}

impl<S: Seek> SeekExt for S {}

/// Copies exactly `count` bytes from a reader into a writer.
pub fn copy_bytes<R: Read, W: Write>(reader: &mut R, writer: &mut W, count: u64) -> io::Result<u64> {
	std::io::copy(&mut reader.take(count), writer)
}
