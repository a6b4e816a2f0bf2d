//! The encode half of the record binder: serde values become tag trees.
//!
//! The mapping is width-exact. Signed and unsigned integers go to the
//! tag of their width, `bool` goes to Byte 0/1, byte sequences go to
//! ByteArray, Int-width sequences go to IntArray, every other sequence
//! becomes a List of its (single) element kind, and records and
//! string-keyed maps become Compounds in declaration order. `None`
//! fields are absent from the wire.

use std::io::Write;

use serde::ser::{self, Serialize};

use crate::{McError, McResult};
use crate::nbt::Map;
use crate::nbt::io::write_named_tag;
use crate::nbt::tag::{Tag, ListTag, NamedTag};

/// Encodes a value into a tag tree.
pub fn to_tag<T: Serialize>(value: &T) -> McResult<Tag> {
	match value.serialize(TagSerializer)? {
		Some(tag) => Ok(tag),
		None => McError::custom("value did not produce an NBT tag"),
	}
}

/// Encodes a value as a complete document: a single named tag whose
/// name is `root_name` (empty when `None`).
pub fn to_writer<W: Write, T: Serialize>(
	writer: &mut W,
	value: &T,
	root_name: Option<&str>,
) -> McResult<usize> {
	let named = NamedTag::new(root_name.unwrap_or(""), to_tag(value)?);
	write_named_tag(writer, &named)
}

/// Buffer form of [to_writer].
pub fn to_vec<T: Serialize>(value: &T, root_name: Option<&str>) -> McResult<Vec<u8>> {
	let mut buffer = Vec::new();
	to_writer(&mut buffer, value, root_name)?;
	Ok(buffer)
}

/// Serializes one value to `Option<Tag>`. `None` is "writes nothing":
/// it is how optional record fields disappear from the wire.
pub struct TagSerializer;

impl ser::Serializer for TagSerializer {
	type Ok = Option<Tag>;
	type Error = McError;

	type SerializeSeq = SerializeList;
	type SerializeTuple = SerializeList;
	type SerializeTupleStruct = SerializeList;
	type SerializeTupleVariant = ser::Impossible<Option<Tag>, McError>;
	type SerializeMap = SerializeCompound;
	type SerializeStruct = SerializeCompound;
	type SerializeStructVariant = ser::Impossible<Option<Tag>, McError>;

	fn serialize_bool(self, value: bool) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Byte(value as i8)))
	}

	fn serialize_i8(self, value: i8) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Byte(value)))
	}

	fn serialize_i16(self, value: i16) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Short(value)))
	}

	fn serialize_i32(self, value: i32) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Int(value)))
	}

	fn serialize_i64(self, value: i64) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Long(value)))
	}

	fn serialize_u8(self, value: u8) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Byte(value as i8)))
	}

	fn serialize_u16(self, value: u16) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Short(value as i16)))
	}

	fn serialize_u32(self, value: u32) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Int(value as i32)))
	}

	fn serialize_u64(self, value: u64) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Long(value as i64)))
	}

	fn serialize_f32(self, value: f32) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Float(value)))
	}

	fn serialize_f64(self, value: f64) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Double(value)))
	}

	fn serialize_char(self, value: char) -> McResult<Option<Tag>> {
		Ok(Some(Tag::String(value.to_string())))
	}

	fn serialize_str(self, value: &str) -> McResult<Option<Tag>> {
		Ok(Some(Tag::String(value.to_owned())))
	}

	fn serialize_bytes(self, value: &[u8]) -> McResult<Option<Tag>> {
		Ok(Some(Tag::ByteArray(value.iter().map(|byte| *byte as i8).collect())))
	}

	fn serialize_none(self) -> McResult<Option<Tag>> {
		Ok(None)
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> McResult<Option<Tag>> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> McResult<Option<Tag>> {
		Ok(None)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> McResult<Option<Tag>> {
		Ok(None)
	}

	fn serialize_unit_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
	) -> McResult<Option<Tag>> {
		Ok(Some(Tag::String(variant.to_owned())))
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		value: &T,
	) -> McResult<Option<Tag>> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_value: &T,
	) -> McResult<Option<Tag>> {
		McError::custom(format!("cannot encode enum variants of {} as NBT", name))
	}

	fn serialize_seq(self, len: Option<usize>) -> McResult<SerializeList> {
		Ok(SerializeList {
			items: Vec::with_capacity(len.unwrap_or(0)),
		})
	}

	fn serialize_tuple(self, len: usize) -> McResult<SerializeList> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> McResult<SerializeList> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(
		self,
		name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> McResult<Self::SerializeTupleVariant> {
		McError::custom(format!("cannot encode enum variants of {} as NBT", name))
	}

	fn serialize_map(self, _len: Option<usize>) -> McResult<SerializeCompound> {
		Ok(SerializeCompound {
			map: Map::new(),
			pending_key: None,
		})
	}

	fn serialize_struct(self, _name: &'static str, _len: usize) -> McResult<SerializeCompound> {
		self.serialize_map(None)
	}

	fn serialize_struct_variant(
		self,
		name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> McResult<Self::SerializeStructVariant> {
		McError::custom(format!("cannot encode enum variants of {} as NBT", name))
	}
}

/// Collects sequence elements, then picks the wire representation once
/// the whole sequence is known: ByteArray for Byte elements, IntArray
/// for Int elements, a List otherwise.
pub struct SerializeList {
	items: Vec<Tag>,
}

impl SerializeList {
	fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> McResult<()> {
		match value.serialize(TagSerializer)? {
			Some(tag) => {
				self.items.push(tag);
				Ok(())
			}
			None => McError::custom("cannot encode an absent value inside a list"),
		}
	}

	fn finish(self) -> McResult<Option<Tag>> {
		Ok(Some(match ListTag::from_tags(self.items)? {
			ListTag::Byte(values) => Tag::ByteArray(values),
			ListTag::Int(values) => Tag::IntArray(values),
			other => Tag::List(other),
		}))
	}
}

impl ser::SerializeSeq for SerializeList {
	type Ok = Option<Tag>;
	type Error = McError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> McResult<()> {
		self.push(value)
	}

	fn end(self) -> McResult<Option<Tag>> {
		self.finish()
	}
}

impl ser::SerializeTuple for SerializeList {
	type Ok = Option<Tag>;
	type Error = McError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> McResult<()> {
		self.push(value)
	}

	fn end(self) -> McResult<Option<Tag>> {
		self.finish()
	}
}

impl ser::SerializeTupleStruct for SerializeList {
	type Ok = Option<Tag>;
	type Error = McError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> McResult<()> {
		self.push(value)
	}

	fn end(self) -> McResult<Option<Tag>> {
		self.finish()
	}
}

/// Collects named entries into a Compound, preserving field order.
/// Entries whose value serializes to nothing (a `None` field) are
/// simply not inserted.
pub struct SerializeCompound {
	map: Map,
	pending_key: Option<String>,
}

impl SerializeCompound {
	fn insert<T: Serialize + ?Sized>(&mut self, key: String, value: &T) -> McResult<()> {
		if let Some(tag) = value.serialize(TagSerializer)? {
			self.map.insert(key, tag);
		}
		Ok(())
	}
}

impl ser::SerializeMap for SerializeCompound {
	type Ok = Option<Tag>;
	type Error = McError;

	fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> McResult<()> {
		match key.serialize(TagSerializer)? {
			Some(Tag::String(key)) => {
				self.pending_key = Some(key);
				Ok(())
			}
			_ => McError::custom("compound entry names must be strings"),
		}
	}

	fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> McResult<()> {
		let key = self.pending_key.take()
			.ok_or_else(|| McError::Custom("serialize_value called before serialize_key".to_owned()))?;
		self.insert(key, value)
	}

	fn end(self) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Compound(self.map)))
	}
}

impl ser::SerializeStruct for SerializeCompound {
	type Ok = Option<Tag>;
	type Error = McError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> McResult<()> {
		self.insert(key.to_owned(), value)
	}

	fn end(self) -> McResult<Option<Tag>> {
		Ok(Some(Tag::Compound(self.map)))
	}
}
