use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{
	BufReader, BufWriter,
	Read, Write,
	Seek, SeekFrom,
};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{McError, McResult};
use crate::ioext::{Readable, Writable, Seekable, ReaderExt, WriterExt};
use crate::nbt;
use crate::nbt::tag::NamedTag;

use super::{required_sectors, pad_size};
use super::compression::CompressionScheme;
use super::coord::RegionCoord;
use super::header::RegionHeader;
use super::sector::RegionSector;
use super::timestamp::Timestamp;

/// A handle to one region file.
///
/// Loading reads only the 8KiB header. Chunk payloads are pulled into
/// memory as they are read or written, and every mutation stays in
/// memory until [RegionFile::save], which lays all present chunks back
/// out contiguously and rewrites the header. Nothing touches the disk
/// image before save.
///
/// A handle owns its file descriptor and is not meant to be shared;
/// two handles to the same file are two independent mutators and the
/// last save wins.
pub struct RegionFile {
	path: PathBuf,
	file: File,
	header: RegionHeader,
	/// Raw payloads (scheme byte + compressed document) for every chunk
	/// touched since load.
	chunks: HashMap<RegionCoord, Vec<u8>>,
	/// Slots mutated since the last save.
	dirty: HashSet<RegionCoord>,
}

impl RegionFile {
	/// Opens a region file, creating it if absent. A file shorter than
	/// the header is zero-filled to 8KiB, which doubles as creating an
	/// empty region. Chunk payloads are not read here.
	pub fn load<P: AsRef<Path>>(path: P) -> McResult<Self> {
		let path = path.as_ref().to_path_buf();
		let mut file = File::options()
			.read(true)
			.write(true)
			.create(true)
			.open(&path)?;
		if file.metadata()?.len() < 4096 * 2 {
			file.set_len(4096 * 2)?;
		}
		file.seek(SeekFrom::Start(0))?;
		let header = {
			let mut reader = BufReader::with_capacity(4096 * 2, &mut file);
			RegionHeader::read_from(&mut reader)?
		};
		Self::check_header(&header, file.metadata()?.len())?;
		Ok(Self {
			path,
			file,
			header,
			chunks: HashMap::new(),
			dirty: HashSet::new(),
		})
	}

	/// Rejects headers whose locations point outside the file or into
	/// each other. There is no recovery from a corrupted header; the
	/// caller decides whether to rebuild.
	fn check_header(header: &RegionHeader, file_len: u64) -> McResult<()> {
		let mut occupied: Vec<RegionSector> = header.sectors.iter()
			.filter(|sector| !sector.is_empty())
			.copied()
			.collect();
		for sector in &occupied {
			if sector.sector_offset() < 2 {
				return Err(McError::CorruptHeader(
					format!("location {} overlaps the header", sector.sector_offset())
				));
			}
			if sector.end_offset() > file_len {
				return Err(McError::CorruptHeader(
					format!("location {} extends beyond the file", sector.sector_offset())
				));
			}
		}
		occupied.sort_by_key(|sector| sector.sector_offset());
		for pair in occupied.windows(2) {
			if pair[0].intersects(pair[1]) {
				return Err(McError::CorruptHeader(
					format!("locations {} and {} overlap", pair[0].sector_offset(), pair[1].sector_offset())
				));
			}
		}
		Ok(())
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// A slot is present when it either holds an in-memory payload or
	/// the header carries both a location and a timestamp for it.
	fn is_present(&self, coord: RegionCoord) -> bool {
		self.chunks.contains_key(&coord)
		|| (!self.header.sectors[coord].is_empty() && !self.header.timestamps[coord].is_zero())
	}

	/// Row-major enumeration of the present chunks.
	pub fn chunks(&self) -> impl Iterator<Item = RegionCoord> + '_ {
		(0..1024u16)
			.map(RegionCoord::from)
			.filter(|coord| self.is_present(*coord))
	}

	/// Number of present chunks.
	pub fn chunk_len(&self) -> usize {
		self.chunks().count()
	}

	pub fn get_timestamp<C: Into<RegionCoord>>(&self, coord: C) -> Timestamp {
		self.header.timestamps[coord.into()]
	}

	/// Reads and decodes the chunk at `coord` into a record type.
	/// Returns `Ok(None)` when the slot is vacant. The raw payload is
	/// cached, so repeated reads only hit the disk once.
	pub fn read_chunk<C: Into<RegionCoord>, T: DeserializeOwned>(&mut self, coord: C) -> McResult<Option<T>> {
		match self.read_chunk_document(coord.into())? {
			Some(document) => Ok(Some(nbt::from_bytes(&document)?)),
			None => Ok(None),
		}
	}

	/// Reads the chunk at `coord` as a raw tag tree.
	pub fn read_chunk_tag<C: Into<RegionCoord>>(&mut self, coord: C) -> McResult<Option<NamedTag>> {
		match self.read_chunk_document(coord.into())? {
			Some(document) => Ok(Some(nbt::read_named_tag(&mut document.as_slice())?)),
			None => Ok(None),
		}
	}

	/// Encodes a record into the chunk at `coord`, compressing with
	/// zlib, and stamps the slot with the current wall-clock second.
	/// The write lands on disk at the next save.
	pub fn write_chunk<C: Into<RegionCoord>, T: Serialize>(&mut self, coord: C, value: &T) -> McResult<()> {
		self.write_chunk_with(coord, value, CompressionScheme::ZLib)
	}

	/// [RegionFile::write_chunk] with an explicit compression scheme.
	pub fn write_chunk_with<C: Into<RegionCoord>, T: Serialize>(
		&mut self,
		coord: C,
		value: &T,
		scheme: CompressionScheme,
	) -> McResult<()> {
		let coord = coord.into();
		let document = nbt::to_vec(value, None)?;
		let compressed = scheme.compress(&document)?;
		let mut payload = Vec::with_capacity(compressed.len() + 1);
		payload.push(scheme.id());
		payload.extend_from_slice(&compressed);
		// The length prefix adds 4 bytes and the sector count is 8 bits.
		if required_sectors((payload.len() + 4) as u32) > 255 {
			return Err(McError::ChunkTooLarge);
		}
		self.chunks.insert(coord, payload);
		self.dirty.insert(coord);
		self.header.timestamps[coord] = Timestamp::utc_now();
		Ok(())
	}

	/// Vacates the slot at `coord`. The sectors are reclaimed at the
	/// next save.
	pub fn remove_chunk<C: Into<RegionCoord>>(&mut self, coord: C) {
		let coord = coord.into();
		self.chunks.remove(&coord);
		self.dirty.insert(coord);
		self.header.sectors[coord] = RegionSector::empty();
		self.header.timestamps[coord] = Timestamp(0);
	}

	/// Serializes every accumulated mutation back to disk: all present
	/// chunks are laid out contiguously from sector 2 in row-major
	/// order, both header tables are rewritten, and each payload is
	/// zero-padded to a whole sector. The new image is written to a
	/// temp file first and then copied over the region, so in-process
	/// readers never observe a half-written file.
	pub fn save(&mut self) -> McResult<()> {
		if self.dirty.is_empty() {
			return Ok(());
		}
		// Pull every present payload into memory; untouched chunks are
		// relocated too, so their bytes are needed.
		let present: Vec<RegionCoord> = self.chunks().collect();
		for coord in &present {
			if self.chunk_payload(*coord)?.is_none() {
				// The header claimed a chunk but the sector holds a
				// zero length. Drop the slot instead of carrying the
				// dead sector forward.
				self.header.sectors[*coord] = RegionSector::empty();
				self.header.timestamps[*coord] = Timestamp(0);
			}
		}
		let present: Vec<RegionCoord> = present.into_iter()
			.filter(|coord| self.chunks.contains_key(coord))
			.collect();

		let mut header = RegionHeader::default();
		let mut next_sector = 2u32;
		for coord in &present {
			let payload = &self.chunks[coord];
			let count = required_sectors((payload.len() + 4) as u32);
			if count > 255 {
				return Err(McError::ChunkTooLarge);
			}
			if next_sector + count > 0x1000000 {
				return Err(McError::OutOfRange);
			}
			header.sectors[*coord] = RegionSector::new(next_sector, count as u8);
			header.timestamps[*coord] = self.header.timestamps[*coord];
			next_sector += count;
		}

		let mut temp = tempfile::NamedTempFile::new()?;
		{
			let mut writer = BufWriter::with_capacity(4096, temp.as_file_mut());
			header.write_to(&mut writer)?;
			for coord in &present {
				let payload = &self.chunks[coord];
				writer.write_value(payload.len() as u32)?;
				writer.write_all(payload)?;
				writer.write_zeroes(pad_size((payload.len() + 4) as u64))?;
			}
			writer.flush()?;
		}
		// fs::copy truncates the destination in place, which keeps the
		// open handle pointed at the fresh contents.
		std::fs::copy(temp.path(), &self.path)?;

		self.header = header;
		self.dirty.clear();
		Ok(())
	}

	/// The raw payload for a present chunk, reading it from disk into
	/// the cache on first touch. `Ok(None)` means the slot is vacant
	/// (including the degenerate present-but-zero-length case).
	fn chunk_payload(&mut self, coord: RegionCoord) -> McResult<Option<&Vec<u8>>> {
		if !self.is_present(coord) {
			return Ok(None);
		}
		if !self.chunks.contains_key(&coord) {
			let sector = self.header.sectors[coord];
			self.file.seek(sector.seeker())?;
			let mut reader = BufReader::with_capacity(4096, &mut self.file);
			let length: u32 = reader.read_value()?;
			if length == 0 {
				return Ok(None);
			}
			if length as u64 + 4 > sector.size() {
				return Err(McError::LengthExceedsMaximum {
					length,
					maximum: sector.size() as u32,
				});
			}
			let mut payload = vec![0u8; length as usize];
			reader.read_exact(&mut payload).map_err(McError::eof)?;
			self.chunks.insert(coord, payload);
		}
		Ok(self.chunks.get(&coord))
	}

	/// Decompressed NBT document bytes for a present chunk.
	fn read_chunk_document(&mut self, coord: RegionCoord) -> McResult<Option<Vec<u8>>> {
		let Some(payload) = self.chunk_payload(coord)? else {
			return Ok(None);
		};
		let scheme = CompressionScheme::from_id(payload[0])?;
		let document = scheme.decompress(&payload[1..])?;
		Ok(Some(document))
	}
}
