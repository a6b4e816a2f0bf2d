//! Recursive-descent reader and writer for NBT tag trees.
//!
//! A document is a single named tag: one kind byte, a length-prefixed
//! name, then the payload. All integers and floats are big-endian, and
//! string lengths are unsigned 16-bit.

use std::io::{Read, Write};

use crate::{McError, McResult};
use crate::ioext::{Readable, Writable, ReaderExt, WriterExt};
use crate::nbt::{Map, MAX_DEPTH};
use crate::nbt::tag::{Tag, TagID, ListTag, NamedTag};

/// Reads a length-prefixed UTF-8 string.
pub fn read_string<R: Read>(reader: &mut R) -> McResult<String> {
	let length: u16 = reader.read_value()?;
	let mut buffer = vec![0u8; length as usize];
	reader.read_exact(&mut buffer).map_err(McError::eof)?;
	Ok(String::from_utf8(buffer)?)
}

/// Writes a length-prefixed UTF-8 string. Strings longer than 65,535
/// bytes do not fit in the 16-bit length prefix.
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> McResult<usize> {
	if value.len() > u16::MAX as usize {
		return Err(McError::OutOfRange);
	}
	writer.write_value(value.len() as u16)?;
	writer.write_all(value.as_bytes())?;
	Ok(2 + value.len())
}

/// Array and list lengths are written as signed 32-bit values; anything
/// negative is malformed.
fn read_length<R: Read>(reader: &mut R) -> McResult<usize> {
	let length: i32 = reader.read_value()?;
	if length < 0 {
		return Err(McError::OutOfRange);
	}
	Ok(length as usize)
}

fn write_length<W: Write>(writer: &mut W, length: usize) -> McResult<usize> {
	if length > i32::MAX as usize {
		return Err(McError::OutOfRange);
	}
	writer.write_value(length as i32)
}

fn read_byte_array<R: Read>(reader: &mut R) -> McResult<Vec<i8>> {
	let length = read_length(reader)?;
	let mut buffer = vec![0u8; length];
	reader.read_exact(&mut buffer).map_err(McError::eof)?;
	Ok(buffer.into_iter().map(|byte| byte as i8).collect())
}

fn write_byte_array<W: Write>(writer: &mut W, values: &[i8]) -> McResult<usize> {
	write_length(writer, values.len())?;
	let bytes = values.iter().map(|byte| *byte as u8).collect::<Vec<u8>>();
	writer.write_all(&bytes)?;
	Ok(4 + values.len())
}

fn read_int_array<R: Read>(reader: &mut R) -> McResult<Vec<i32>> {
	let length = read_length(reader)?;
	(0..length).map(|_| reader.read_value()).collect()
}

fn write_int_array<W: Write>(writer: &mut W, values: &[i32]) -> McResult<usize> {
	let mut size = write_length(writer, values.len())?;
	for value in values {
		size += writer.write_value(*value)?;
	}
	Ok(size)
}

/// Reads the body of a Compound: named entries up to the End marker.
/// Entry order is preserved.
fn read_compound<R: Read>(reader: &mut R, depth: usize) -> McResult<Map> {
	let mut map = Map::new();
	loop {
		let id_byte: u8 = reader.read_value()?;
		if id_byte == 0 {
			break;
		}
		let id = TagID::from_id(id_byte).ok_or(McError::UnsupportedTagId(id_byte))?;
		let name = read_string(reader)?;
		let tag = Tag::read_payload(reader, id, depth)?;
		map.insert(name, tag);
	}
	Ok(map)
}

fn write_compound<W: Write>(writer: &mut W, map: &Map, depth: usize) -> McResult<usize> {
	let mut size = 0;
	for (name, tag) in map {
		size += writer.write_value(tag.id().id())?;
		size += write_string(writer, name)?;
		size += tag.write_payload(writer, depth)?;
	}
	size += writer.write_value(0u8)?;
	Ok(size)
}

impl Tag {
	/// Reads the payload for a known tag kind. `depth` is the current
	/// container nesting level.
	pub fn read_payload<R: Read>(reader: &mut R, id: TagID, depth: usize) -> McResult<Tag> {
		if depth >= MAX_DEPTH {
			return Err(McError::TagTooDeep);
		}
		Ok(match id {
			TagID::Byte => Tag::Byte(reader.read_value()?),
			TagID::Short => Tag::Short(reader.read_value()?),
			TagID::Int => Tag::Int(reader.read_value()?),
			TagID::Long => Tag::Long(reader.read_value()?),
			TagID::Float => Tag::Float(reader.read_value()?),
			TagID::Double => Tag::Double(reader.read_value()?),
			TagID::ByteArray => Tag::ByteArray(read_byte_array(reader)?),
			TagID::String => Tag::String(read_string(reader)?),
			TagID::List => Tag::List(ListTag::read_payload(reader, depth + 1)?),
			TagID::Compound => Tag::Compound(read_compound(reader, depth + 1)?),
			TagID::IntArray => Tag::IntArray(read_int_array(reader)?),
		})
	}

	/// Writes the payload (the kind byte and any name belong to the
	/// enclosing container or the document root).
	pub fn write_payload<W: Write>(&self, writer: &mut W, depth: usize) -> McResult<usize> {
		if depth >= MAX_DEPTH {
			return Err(McError::TagTooDeep);
		}
		match self {
			Tag::Byte(value) => writer.write_value(*value),
			Tag::Short(value) => writer.write_value(*value),
			Tag::Int(value) => writer.write_value(*value),
			Tag::Long(value) => writer.write_value(*value),
			Tag::Float(value) => writer.write_value(*value),
			Tag::Double(value) => writer.write_value(*value),
			Tag::ByteArray(values) => write_byte_array(writer, values),
			Tag::String(value) => write_string(writer, value),
			Tag::List(list) => list.write_payload(writer, depth + 1),
			Tag::Compound(map) => write_compound(writer, map, depth + 1),
			Tag::IntArray(values) => write_int_array(writer, values),
		}
	}
}

impl ListTag {
	/// Reads a List payload: one element-kind byte, a length, then that
	/// many unnamed payloads. A zero length is tolerated with any
	/// element-kind byte (End included) and yields the empty list.
	pub fn read_payload<R: Read>(reader: &mut R, depth: usize) -> McResult<ListTag> {
		if depth >= MAX_DEPTH {
			return Err(McError::TagTooDeep);
		}
		let id_byte: u8 = reader.read_value()?;
		let length: i32 = reader.read_value()?;
		if length < 0 {
			return Err(McError::OutOfRange);
		}
		if length == 0 {
			return Ok(ListTag::Empty);
		}
		let length = length as usize;
		let id = match TagID::from_id(id_byte) {
			Some(id) => id,
			None if id_byte == 0 => return Err(McError::EndTagMarker),
			None => return Err(McError::UnsupportedTagId(id_byte)),
		};
		Ok(match id {
			TagID::Byte => ListTag::Byte((0..length).map(|_| reader.read_value()).collect::<McResult<_>>()?),
			TagID::Short => ListTag::Short((0..length).map(|_| reader.read_value()).collect::<McResult<_>>()?),
			TagID::Int => ListTag::Int((0..length).map(|_| reader.read_value()).collect::<McResult<_>>()?),
			TagID::Long => ListTag::Long((0..length).map(|_| reader.read_value()).collect::<McResult<_>>()?),
			TagID::Float => ListTag::Float((0..length).map(|_| reader.read_value()).collect::<McResult<_>>()?),
			TagID::Double => ListTag::Double((0..length).map(|_| reader.read_value()).collect::<McResult<_>>()?),
			TagID::ByteArray => ListTag::ByteArray((0..length).map(|_| read_byte_array(reader)).collect::<McResult<_>>()?),
			TagID::String => ListTag::String((0..length).map(|_| read_string(reader)).collect::<McResult<_>>()?),
			TagID::List => ListTag::List((0..length).map(|_| ListTag::read_payload(reader, depth + 1)).collect::<McResult<_>>()?),
			TagID::Compound => ListTag::Compound((0..length).map(|_| read_compound(reader, depth + 1)).collect::<McResult<_>>()?),
			TagID::IntArray => ListTag::IntArray((0..length).map(|_| read_int_array(reader)).collect::<McResult<_>>()?),
		})
	}

	/// Writes the List payload. The empty list is always written with
	/// an End element-kind byte.
	pub fn write_payload<W: Write>(&self, writer: &mut W, depth: usize) -> McResult<usize> {
		if depth >= MAX_DEPTH {
			return Err(McError::TagTooDeep);
		}
		let mut size = match self.id() {
			Some(id) => writer.write_value(id.id())?,
			None => writer.write_value(0u8)?,
		};
		size += write_length(writer, self.len())?;
		match self {
			ListTag::Empty => (),
			ListTag::Byte(items) => for item in items {
				size += writer.write_value(*item)?;
			},
			ListTag::Short(items) => for item in items {
				size += writer.write_value(*item)?;
			},
			ListTag::Int(items) => for item in items {
				size += writer.write_value(*item)?;
			},
			ListTag::Long(items) => for item in items {
				size += writer.write_value(*item)?;
			},
			ListTag::Float(items) => for item in items {
				size += writer.write_value(*item)?;
			},
			ListTag::Double(items) => for item in items {
				size += writer.write_value(*item)?;
			},
			ListTag::ByteArray(items) => for item in items {
				size += write_byte_array(writer, item)?;
			},
			ListTag::String(items) => for item in items {
				size += write_string(writer, item)?;
			},
			ListTag::List(items) => for item in items {
				size += item.write_payload(writer, depth + 1)?;
			},
			ListTag::Compound(items) => for item in items {
				size += write_compound(writer, item, depth + 1)?;
			},
			ListTag::IntArray(items) => for item in items {
				size += write_int_array(writer, item)?;
			},
		}
		Ok(size)
	}
}

/// Reads a whole document: one named tag. A document that opens with
/// the End marker has no root and is malformed.
pub fn read_named_tag<R: Read>(reader: &mut R) -> McResult<NamedTag> {
	let id_byte: u8 = reader.read_value()?;
	if id_byte == 0 {
		return Err(McError::EndTagMarker);
	}
	let id = TagID::from_id(id_byte).ok_or(McError::UnsupportedTagId(id_byte))?;
	let name = read_string(reader)?;
	let tag = Tag::read_payload(reader, id, 0)?;
	Ok(NamedTag { name, tag })
}

/// Writes a whole document: one named tag, no trailing padding.
pub fn write_named_tag<W: Write>(writer: &mut W, named: &NamedTag) -> McResult<usize> {
	let mut size = writer.write_value(named.tag.id().id())?;
	size += write_string(writer, &named.name)?;
	size += named.tag.write_payload(writer, 0)?;
	Ok(size)
}

impl Readable for NamedTag {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		read_named_tag(reader)
	}
}

impl Writable for NamedTag {
	fn write_to<W: Write>(&self, writer: &mut W) -> McResult<usize> {
		write_named_tag(writer, self)
	}
}
