use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};

use crate::{McError, McResult};
use crate::ioext::{Readable, Writable, ReaderExt, WriterExt};

/// Compression scheme used for writing or reading chunk payloads.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionScheme {
	/// GZip compression is used.
	GZip = 1,
	/// ZLib compression is used.
	/// In practice this is the only scheme the game writes.
	#[default]
	ZLib = 2,
}

impl CompressionScheme {
	/// The scheme byte that precedes a chunk's compressed bytes.
	pub fn id(self) -> u8 {
		self as u8
	}

	pub fn from_id(id: u8) -> McResult<Self> {
		match id {
			1 => Ok(Self::GZip),
			2 => Ok(Self::ZLib),
			unexpected => Err(McError::InvalidCompressionScheme(unexpected)),
		}
	}

	pub fn compress(self, data: &[u8]) -> McResult<Vec<u8>> {
		let mut buffer = Vec::new();
		match self {
			Self::GZip => {
				let mut encoder = GzEncoder::new(&mut buffer, Compression::best());
				encoder.write_all(data)?;
				encoder.finish()?;
			}
			Self::ZLib => {
				let mut encoder = ZlibEncoder::new(&mut buffer, Compression::best());
				encoder.write_all(data)?;
				encoder.finish()?;
			}
		}
		Ok(buffer)
	}

	pub fn decompress(self, data: &[u8]) -> McResult<Vec<u8>> {
		let mut buffer = Vec::new();
		match self {
			Self::GZip => {
				GzDecoder::new(data).read_to_end(&mut buffer).map_err(McError::eof)?;
			}
			Self::ZLib => {
				ZlibDecoder::new(data).read_to_end(&mut buffer).map_err(McError::eof)?;
			}
		}
		Ok(buffer)
	}
}

impl Writable for CompressionScheme {
	fn write_to<W: Write>(&self, writer: &mut W) -> McResult<usize> {
		writer.write_value(self.id())
	}
}

impl Readable for CompressionScheme {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		Self::from_id(reader.read_value::<u8>()?)
	}
}
