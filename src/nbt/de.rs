//! The decode half of the record binder: tag trees become serde values.
//!
//! Binding is by entry name; wire order is irrelevant. Unknown entries
//! are ignored so that newer documents still decode into older records.
//! Coercion is width-exact: a Short only binds 16-bit fields, and a
//! mismatched kind fails with [McError::TagMismatch].

use std::io::Read;

use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};

use crate::{McError, McResult};
use crate::nbt::Map;
use crate::nbt::io::read_named_tag;
use crate::nbt::tag::{Tag, ListTag};

/// Decodes a value from a tag tree.
pub fn from_tag<T: DeserializeOwned>(tag: Tag) -> McResult<T> {
	T::deserialize(TagDeserializer::new(tag))
}

/// Decodes a document (a single named tag), returning the root name
/// alongside the bound value.
pub fn from_reader_named<R: Read, T: DeserializeOwned>(reader: &mut R) -> McResult<(String, T)> {
	let named = read_named_tag(reader)?;
	let value = from_tag(named.tag)?;
	Ok((named.name, value))
}

/// Decodes a document, discarding the root name.
pub fn from_reader<R: Read, T: DeserializeOwned>(reader: &mut R) -> McResult<T> {
	Ok(from_reader_named(reader)?.1)
}

/// Buffer form of [from_reader].
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> McResult<T> {
	let mut reader = bytes;
	from_reader(&mut reader)
}

fn mismatch(expected: &'static str, found: &Tag) -> McError {
	McError::TagMismatch {
		expected,
		found: found.id().name(),
	}
}

/// Flattens list-shaped tags into a uniform element sequence. ByteArray
/// and IntArray elements come back as Byte and Int tags, so integer
/// sequences decode the same way whether the wire used an array kind or
/// a List.
fn into_element_tags(tag: Tag) -> McResult<Vec<Tag>> {
	Ok(match tag {
		Tag::ByteArray(values) => values.into_iter().map(Tag::Byte).collect(),
		Tag::IntArray(values) => values.into_iter().map(Tag::Int).collect(),
		Tag::List(list) => match list {
			ListTag::Empty => Vec::new(),
			ListTag::Byte(items) => items.into_iter().map(Tag::Byte).collect(),
			ListTag::Short(items) => items.into_iter().map(Tag::Short).collect(),
			ListTag::Int(items) => items.into_iter().map(Tag::Int).collect(),
			ListTag::Long(items) => items.into_iter().map(Tag::Long).collect(),
			ListTag::Float(items) => items.into_iter().map(Tag::Float).collect(),
			ListTag::Double(items) => items.into_iter().map(Tag::Double).collect(),
			ListTag::ByteArray(items) => items.into_iter().map(Tag::ByteArray).collect(),
			ListTag::String(items) => items.into_iter().map(Tag::String).collect(),
			ListTag::List(items) => items.into_iter().map(Tag::List).collect(),
			ListTag::Compound(items) => items.into_iter().map(Tag::Compound).collect(),
			ListTag::IntArray(items) => items.into_iter().map(Tag::IntArray).collect(),
		},
		other => return Err(mismatch("List", &other)),
	})
}

/// Deserializes one value out of an owned tag.
pub struct TagDeserializer {
	tag: Tag,
}

impl TagDeserializer {
	pub fn new(tag: Tag) -> Self {
		Self { tag }
	}
}

impl<'de> de::Deserializer<'de> for TagDeserializer {
	type Error = McError;

	fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Byte(value) => visitor.visit_i8(value),
			Tag::Short(value) => visitor.visit_i16(value),
			Tag::Int(value) => visitor.visit_i32(value),
			Tag::Long(value) => visitor.visit_i64(value),
			Tag::Float(value) => visitor.visit_f32(value),
			Tag::Double(value) => visitor.visit_f64(value),
			Tag::String(value) => visitor.visit_string(value),
			Tag::Compound(map) => visitor.visit_map(CompoundAccess::new(map)),
			list => visitor.visit_seq(ListAccess::new(into_element_tags(list)?)),
		}
	}

	fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Byte(value) => visitor.visit_bool(value != 0),
			other => Err(mismatch("Byte", &other)),
		}
	}

	fn deserialize_i8<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Byte(value) => visitor.visit_i8(value),
			other => Err(mismatch("Byte", &other)),
		}
	}

	fn deserialize_i16<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Short(value) => visitor.visit_i16(value),
			other => Err(mismatch("Short", &other)),
		}
	}

	fn deserialize_i32<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Int(value) => visitor.visit_i32(value),
			other => Err(mismatch("Int", &other)),
		}
	}

	fn deserialize_i64<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Long(value) => visitor.visit_i64(value),
			other => Err(mismatch("Long", &other)),
		}
	}

	fn deserialize_u8<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Byte(value) => visitor.visit_u8(value as u8),
			other => Err(mismatch("Byte", &other)),
		}
	}

	fn deserialize_u16<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Short(value) => visitor.visit_u16(value as u16),
			other => Err(mismatch("Short", &other)),
		}
	}

	fn deserialize_u32<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Int(value) => visitor.visit_u32(value as u32),
			other => Err(mismatch("Int", &other)),
		}
	}

	fn deserialize_u64<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Long(value) => visitor.visit_u64(value as u64),
			other => Err(mismatch("Long", &other)),
		}
	}

	fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Float(value) => visitor.visit_f32(value),
			other => Err(mismatch("Float", &other)),
		}
	}

	fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Double(value) => visitor.visit_f64(value),
			other => Err(mismatch("Double", &other)),
		}
	}

	fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::String(value) => {
				let mut chars = value.chars();
				match (chars.next(), chars.next()) {
					(Some(ch), None) => visitor.visit_char(ch),
					_ => McError::custom("expected a single-character string"),
				}
			}
			other => Err(mismatch("String", &other)),
		}
	}

	fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		self.deserialize_string(visitor)
	}

	fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::String(value) => visitor.visit_string(value),
			other => Err(mismatch("String", &other)),
		}
	}

	fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		self.deserialize_byte_buf(visitor)
	}

	fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::ByteArray(values) => {
				visitor.visit_byte_buf(values.into_iter().map(|byte| byte as u8).collect())
			}
			other => Err(mismatch("ByteArray", &other)),
		}
	}

	fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		// Absent entries never reach the deserializer, so any tag that
		// does arrive is a present value.
		visitor.visit_some(self)
	}

	fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		visitor.visit_unit()
	}

	fn deserialize_unit_struct<V: Visitor<'de>>(
		self,
		_name: &'static str,
		visitor: V,
	) -> McResult<V::Value> {
		visitor.visit_unit()
	}

	fn deserialize_newtype_struct<V: Visitor<'de>>(
		self,
		_name: &'static str,
		visitor: V,
	) -> McResult<V::Value> {
		visitor.visit_newtype_struct(self)
	}

	fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		visitor.visit_seq(ListAccess::new(into_element_tags(self.tag)?))
	}

	fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> McResult<V::Value> {
		self.deserialize_seq(visitor)
	}

	fn deserialize_tuple_struct<V: Visitor<'de>>(
		self,
		_name: &'static str,
		_len: usize,
		visitor: V,
	) -> McResult<V::Value> {
		self.deserialize_seq(visitor)
	}

	fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		match self.tag {
			Tag::Compound(map) => visitor.visit_map(CompoundAccess::new(map)),
			other => Err(mismatch("Compound", &other)),
		}
	}

	fn deserialize_struct<V: Visitor<'de>>(
		self,
		_name: &'static str,
		_fields: &'static [&'static str],
		visitor: V,
	) -> McResult<V::Value> {
		self.deserialize_map(visitor)
	}

	fn deserialize_enum<V: Visitor<'de>>(
		self,
		_name: &'static str,
		_variants: &'static [&'static str],
		visitor: V,
	) -> McResult<V::Value> {
		match self.tag {
			Tag::String(value) => visitor.visit_enum(value.into_deserializer()),
			other => Err(mismatch("String", &other)),
		}
	}

	fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		self.deserialize_string(visitor)
	}

	fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> McResult<V::Value> {
		visitor.visit_unit()
	}
}

struct ListAccess {
	iter: std::vec::IntoIter<Tag>,
}

impl ListAccess {
	fn new(items: Vec<Tag>) -> Self {
		Self {
			iter: items.into_iter(),
		}
	}
}

impl<'de> de::SeqAccess<'de> for ListAccess {
	type Error = McError;

	fn next_element_seed<T: de::DeserializeSeed<'de>>(&mut self, seed: T) -> McResult<Option<T::Value>> {
		match self.iter.next() {
			Some(tag) => seed.deserialize(TagDeserializer::new(tag)).map(Some),
			None => Ok(None),
		}
	}

	fn size_hint(&self) -> Option<usize> {
		Some(self.iter.len())
	}
}

struct CompoundAccess {
	iter: indexmap::map::IntoIter<String, Tag>,
	value: Option<Tag>,
}

impl CompoundAccess {
	fn new(map: Map) -> Self {
		Self {
			iter: map.into_iter(),
			value: None,
		}
	}
}

impl<'de> de::MapAccess<'de> for CompoundAccess {
	type Error = McError;

	fn next_key_seed<K: de::DeserializeSeed<'de>>(&mut self, seed: K) -> McResult<Option<K::Value>> {
		match self.iter.next() {
			Some((key, value)) => {
				self.value = Some(value);
				seed.deserialize(key.into_deserializer()).map(Some)
			}
			None => Ok(None),
		}
	}

	fn next_value_seed<V: de::DeserializeSeed<'de>>(&mut self, seed: V) -> McResult<V::Value> {
		let value = self.value.take()
			.ok_or_else(|| McError::Custom("next_value called before next_key".to_owned()))?;
		seed.deserialize(TagDeserializer::new(value))
	}

	fn size_hint(&self) -> Option<usize> {
		Some(self.iter.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compound;
	use crate::nbt::ser::{to_tag, to_vec};
	use chrono::{DateTime, TimeZone, Utc};
	use flate2::read::GzDecoder;
	use serde::{Deserialize, Serialize};

	fn roundtrip<T>(value: &T) -> T
	where
	T: Serialize + DeserializeOwned + std::fmt::Debug + PartialEq {
		let bytes = to_vec(value, None).unwrap();
		from_bytes(&bytes).unwrap()
	}

	#[test]
	fn primitive_roundtrips() {
		assert_eq!(roundtrip(&123u8), 123u8);
		assert_eq!(roundtrip(&-123i8), -123i8);
		assert_eq!(roundtrip(&true), true);
		assert_eq!(roundtrip(&123u16), 123u16);
		assert_eq!(roundtrip(&-123i16), -123i16);
		assert_eq!(roundtrip(&123u32), 123u32);
		assert_eq!(roundtrip(&-123i32), -123i32);
		assert_eq!(roundtrip(&123u64), 123u64);
		assert_eq!(roundtrip(&-123i64), -123i64);
		assert_eq!(roundtrip(&1.234f32), 1.234f32);
		assert_eq!(roundtrip(&-1.234f64), -1.234f64);
		assert_eq!(roundtrip(&"test string".to_owned()), "test string");
		assert_eq!(roundtrip(&String::new()), "");
	}

	#[test]
	fn time_binds_as_long_unix_seconds() {
		#[derive(Serialize, Deserialize, Debug, PartialEq)]
		struct Stamped {
			#[serde(with = "chrono::serde::ts_seconds")]
			data: DateTime<Utc>,
		}

		let value = Stamped {
			data: Utc.timestamp_opt(1264099775, 0).unwrap(),
		};
		let tag = to_tag(&value).unwrap();
		assert_eq!(tag, compound! {
			("data", 1264099775i64),
		});
		assert_eq!(roundtrip(&value), value);
	}

	#[test]
	fn nested_compound_roundtrip() {
		#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
		struct Inner {
			a: i8,
			b: String,
		}

		#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
		struct Test {
			#[serde(rename = "A")]
			a: Inner,
		}

		let mut value = Test::default();
		value.a.a = 123;
		value.a.b = "test".to_owned();
		assert_eq!(roundtrip(&value), value);
	}

	#[test]
	fn embedded_record_inlines_its_fields() {
		#[derive(Serialize, Deserialize, Debug, PartialEq)]
		struct Base {
			a: i8,
			b: String,
		}

		#[derive(Serialize, Deserialize, Debug, PartialEq)]
		struct Test {
			#[serde(flatten)]
			base: Base,
		}

		let value = Test {
			base: Base {
				a: 123,
				b: "test".to_owned(),
			},
		};
		let tag = to_tag(&value).unwrap();
		// No intermediate compound: the embedded fields sit in the root.
		assert_eq!(tag, compound! {
			("a", 123i8),
			("b", "test"),
		});
		assert_eq!(roundtrip(&value), value);
	}

	#[test]
	fn optional_fields_absent_and_present() {
		#[derive(Serialize, Deserialize, Debug, PartialEq)]
		struct Inner {
			a: i8,
			b: String,
		}

		#[derive(Serialize, Deserialize, Debug, PartialEq)]
		struct Test {
			a: Option<Inner>,
			c: i32,
		}

		let present = Test {
			a: Some(Inner {
				a: 123,
				b: "test".to_owned(),
			}),
			c: -321,
		};
		assert_eq!(roundtrip(&present), present);

		let absent = Test {
			a: None,
			c: -321,
		};
		let tag = to_tag(&absent).unwrap();
		assert_eq!(tag, compound! {
			("c", -321i32),
		});
		assert_eq!(roundtrip(&absent), absent);
	}

	#[test]
	fn list_of_records_roundtrip() {
		#[derive(Serialize, Deserialize, Debug, PartialEq)]
		struct Data {
			a: i8,
			b: String,
			c: Vec<i32>,
		}

		let value: Vec<Data> = (1..=4).map(|index| Data {
			a: index,
			b: "test".to_owned(),
			c: vec![1, 2, 3],
		}).collect();
		assert_eq!(roundtrip(&value), value);
	}

	#[test]
	fn empty_list_roundtrip() {
		let value: Vec<f32> = Vec::new();
		assert_eq!(roundtrip(&value), value);
	}

	#[test]
	fn unknown_entries_are_ignored() {
		#[derive(Deserialize, Debug, PartialEq)]
		struct Narrow {
			kept: i32,
		}

		let tag = compound! {
			("kept", 7i32),
			("dropped", "whatever"),
			("also dropped", vec![1i32, 2, 3]),
		};
		let value: Narrow = from_tag(tag).unwrap();
		assert_eq!(value, Narrow { kept: 7 });
	}

	#[test]
	fn kind_mismatch_is_an_error() {
		let tag = compound! {
			("value", "not an int"),
		};

		#[derive(Deserialize, Debug)]
		struct Narrow {
			#[allow(unused)]
			value: i32,
		}

		assert!(matches!(
			from_tag::<Narrow>(tag),
			Err(McError::TagMismatch { .. })
		));
	}

	// The reference documents below are the canonical "bigtest" and
	// "hello world" files, gzip-wrapped.

	#[derive(Serialize, Deserialize, Debug, PartialEq)]
	struct Food {
		name: String,
		value: f32,
	}

	#[derive(Serialize, Deserialize, Debug, PartialEq)]
	struct NestedCompound {
		egg: Food,
		ham: Food,
	}

	#[derive(Serialize, Deserialize, Debug, PartialEq)]
	struct ListItem {
		name: String,
		#[serde(rename = "created-on")]
		created_on: i64,
	}

	#[derive(Serialize, Deserialize, Debug, PartialEq)]
	struct BigTest {
		#[serde(rename = "nested compound test")]
		nested_compound_test: NestedCompound,
		#[serde(rename = "listTest (compound)")]
		list_test_compound: Vec<ListItem>,
		#[serde(rename = "listTest (long)")]
		list_test_long: Vec<i64>,
		#[serde(rename = "byteArrayTest (the first 1000 values of (n*n*255+n*7)%100, starting with n=0 (0, 62, 34, 16, 8, ...))")]
		byte_array_test: Vec<u8>,
		#[serde(rename = "stringTest")]
		string_test: String,
		#[serde(rename = "longTest")]
		long_test: i64,
		#[serde(rename = "doubleTest")]
		double_test: f64,
		#[serde(rename = "floatTest")]
		float_test: f32,
		#[serde(rename = "intTest")]
		int_test: i32,
		#[serde(rename = "shortTest")]
		short_test: i16,
		#[serde(rename = "byteTest")]
		byte_test: u8,
	}

	#[derive(Serialize, Deserialize, Debug, PartialEq)]
	struct SmallTest {
		name: String,
	}

	fn gunzip(data: &[u8]) -> Vec<u8> {
		let mut document = Vec::new();
		GzDecoder::new(data).read_to_end(&mut document).unwrap();
		document
	}

	#[test]
	fn bigtest_document() {
		let document = gunzip(BIG_NBT);
		let mut reader = document.as_slice();
		let (root, value): (String, BigTest) = from_reader_named(&mut reader).unwrap();

		assert_eq!(root, "Level");
		assert_eq!(value.long_test, 9223372036854775807);
		assert_eq!(value.short_test, 32767);
		assert_eq!(value.int_test, 2147483647);
		assert_eq!(value.byte_test, 127);
		assert_eq!(value.string_test, "HELLO WORLD THIS IS A TEST STRING ÅÄÖ!");
		assert!((value.float_test - 0.49823147).abs() < 1e-7);
		assert!((value.double_test - 0.49312871321823148).abs() < 1e-15);
		assert_eq!(value.nested_compound_test.egg.name, "Eggbert");
		assert_eq!(value.nested_compound_test.egg.value, 0.5);
		assert_eq!(value.nested_compound_test.ham.name, "Hampus");
		assert_eq!(value.nested_compound_test.ham.value, 0.75);
		assert_eq!(value.list_test_long, vec![11, 12, 13, 14, 15]);
		assert_eq!(value.list_test_compound.len(), 2);
		assert_eq!(value.list_test_compound[0].name, "Compound tag #0");
		assert_eq!(value.list_test_compound[0].created_on, 1264099775885);
		assert_eq!(value.byte_array_test.len(), 1000);
		for (n, byte) in value.byte_array_test.iter().enumerate() {
			assert_eq!(*byte as usize, (n * n * 255 + n * 7) % 100);
		}

		// Re-encode and decode again; the two bound values must agree.
		let reencoded = to_vec(&value, Some("Level")).unwrap();
		let again: BigTest = from_bytes(&reencoded).unwrap();
		assert_eq!(again, value);
	}

	#[test]
	fn smalltest_document() {
		let document = gunzip(SMALL_NBT);
		let mut reader = document.as_slice();
		let (root, value): (String, SmallTest) = from_reader_named(&mut reader).unwrap();
		assert_eq!(root, "hello world");
		assert_eq!(value.name, "Bananrama");

		let reencoded = to_vec(&value, Some("hello world")).unwrap();
		let again: SmallTest = from_bytes(&reencoded).unwrap();
		assert_eq!(again, value);
	}

	static BIG_NBT: &[u8] = &[
		0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xed, 0x54,
		0xcf, 0x4f, 0x1a, 0x41, 0x14, 0x7e, 0xc2, 0x02, 0xcb, 0x96, 0x82, 0xb1,
		0xc4, 0x10, 0x63, 0xcc, 0xab, 0xb5, 0x84, 0xa5, 0xdb, 0xcd, 0x42, 0x11,
		0x89, 0xb1, 0x88, 0x16, 0x2c, 0x9a, 0x0d, 0x1a, 0xd8, 0xa8, 0x31, 0x86,
		0xb8, 0x2b, 0xc3, 0x82, 0x2e, 0xbb, 0x66, 0x77, 0xb0, 0xf1, 0xd4, 0x4b,
		0x7b, 0x6c, 0x7a, 0xeb, 0x3f, 0xd3, 0x23, 0x7f, 0x43, 0xcf, 0xbd, 0xf6,
		0xbf, 0xa0, 0xc3, 0x2f, 0x7b, 0x69, 0xcf, 0xbd, 0xf0, 0x32, 0xc9, 0xf7,
		0xe6, 0xbd, 0x6f, 0xe6, 0x7b, 0x6f, 0x26, 0x79, 0x02, 0x04, 0x54, 0x72,
		0x4f, 0x2c, 0x0e, 0x78, 0xcb, 0xb1, 0x4d, 0x8d, 0x78, 0xf4, 0xe3, 0x70,
		0x62, 0x3e, 0x08, 0x7b, 0x1d, 0xc7, 0xa5, 0x93, 0x18, 0x0f, 0x82, 0x47,
		0xdd, 0xee, 0x84, 0x02, 0x62, 0xb5, 0xa2, 0xaa, 0xc7, 0x78, 0x76, 0x5c,
		0x57, 0xcb, 0xa8, 0x55, 0x0f, 0x1b, 0xc8, 0xd6, 0x1e, 0x6a, 0x95, 0x86,
		0x86, 0x0d, 0xad, 0x7e, 0x58, 0x7b, 0x8f, 0x83, 0xcf, 0x83, 0x4f, 0x83,
		0x6f, 0xcf, 0x03, 0x10, 0x6e, 0x5b, 0x8e, 0x3e, 0xbe, 0xa5, 0x38, 0x4c,
		0x64, 0xfd, 0x10, 0xea, 0xda, 0x74, 0xa6, 0x23, 0x40, 0xdc, 0x66, 0x2e,
		0x69, 0xe1, 0xb5, 0xd3, 0xbb, 0x73, 0xfa, 0x76, 0x0b, 0x29, 0xdb, 0x0b,
		0xe0, 0xef, 0xe8, 0x3d, 0x1e, 0x38, 0x5b, 0xef, 0x11, 0x08, 0x56, 0xf5,
		0xde, 0x5d, 0xdf, 0x0b, 0x40, 0xe0, 0x5e, 0xb7, 0xfa, 0x64, 0xb7, 0x04,
		0x00, 0x8c, 0x41, 0x4c, 0x73, 0xc6, 0x08, 0x55, 0x4c, 0xd3, 0x20, 0x2e,
		0x7d, 0xa4, 0xc0, 0xc8, 0xc2, 0x10, 0xb3, 0xba, 0xde, 0x58, 0x0b, 0x53,
		0xa3, 0xee, 0x44, 0x8e, 0x45, 0x03, 0x30, 0xb1, 0x27, 0x53, 0x8c, 0x4c,
		0xf1, 0xe9, 0x14, 0xa3, 0x53, 0x8c, 0x85, 0xe1, 0xd9, 0x9f, 0xe3, 0xb3,
		0xf2, 0x44, 0x81, 0xa5, 0x7c, 0x33, 0xdd, 0xd8, 0xbb, 0xc7, 0xaa, 0x75,
		0x13, 0x5f, 0x28, 0x1c, 0x08, 0xd7, 0x2e, 0xd1, 0x59, 0x3f, 0xaf, 0x1d,
		0x1b, 0x60, 0x21, 0x59, 0xdf, 0xfa, 0xf1, 0x05, 0xfe, 0xc1, 0xce, 0xfc,
		0x9d, 0xbd, 0x00, 0xbc, 0xf1, 0x40, 0xc9, 0xf8, 0x85, 0x42, 0x40, 0x46,
		0xfe, 0x9e, 0xeb, 0xea, 0x0f, 0x93, 0x3a, 0x68, 0x87, 0x60, 0xbb, 0xeb,
		0x32, 0x37, 0xa3, 0x28, 0x0a, 0x8e, 0xbb, 0xf5, 0xd0, 0x69, 0x63, 0xca,
		0x4e, 0xdb, 0xe9, 0xec, 0xe6, 0xe6, 0x2b, 0x3b, 0xbd, 0x25, 0xbe, 0x64,
		0x49, 0x09, 0x3d, 0xaa, 0xbb, 0x94, 0xfd, 0x18, 0x7e, 0xe8, 0xd2, 0x0e,
		0xda, 0x6f, 0x15, 0x4c, 0xb1, 0x68, 0x3e, 0x2b, 0xe1, 0x9b, 0x9c, 0x84,
		0x99, 0xbc, 0x84, 0x05, 0x09, 0x65, 0x59, 0x16, 0x45, 0x00, 0xff, 0x2f,
		0x28, 0xae, 0x2f, 0xf2, 0xc2, 0xb2, 0xa4, 0x2e, 0x1d, 0x20, 0x77, 0x5a,
		0x3b, 0xb9, 0x8c, 0xca, 0xe7, 0x29, 0xdf, 0x51, 0x41, 0xc9, 0x16, 0xb5,
		0xc5, 0x6d, 0xa1, 0x2a, 0xad, 0x2c, 0xc5, 0x31, 0x7f, 0xba, 0x7a, 0x92,
		0x8e, 0x5e, 0x9d, 0x5f, 0xf8, 0x12, 0x05, 0x23, 0x1b, 0xd1, 0xf6, 0xb7,
		0x77, 0xaa, 0xcd, 0x95, 0x72, 0xbc, 0x9e, 0xdf, 0x58, 0x5d, 0x4b, 0x97,
		0xae, 0x92, 0x17, 0xb9, 0x44, 0xd0, 0x80, 0xc8, 0xfa, 0x3e, 0xbf, 0xb3,
		0xdc, 0x54, 0xcb, 0x07, 0x75, 0x6e, 0xa3, 0xb6, 0x76, 0x59, 0x92, 0x93,
		0xa9, 0xdc, 0x51, 0x50, 0x99, 0x6b, 0xcc, 0x35, 0xe6, 0x1a, 0xff, 0x57,
		0x23, 0x08, 0x42, 0xcb, 0xe9, 0x1b, 0xd6, 0x78, 0xc2, 0xec, 0xfe, 0xfc,
		0x7a, 0xfb, 0x7d, 0x78, 0xd3, 0x84, 0xdf, 0xd4, 0xf2, 0xa4, 0xfb, 0x08,
		0x06, 0x00, 0x00,
	];

	static SMALL_NBT: &[u8] = &[
		0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xe3, 0x62,
		0xe0, 0xce, 0x48, 0xcd, 0xc9, 0xc9, 0x57, 0x28, 0xcf, 0x2f, 0xca, 0x49,
		0xe1, 0x60, 0x60, 0xc9, 0x4b, 0xcc, 0x4d, 0x65, 0xe0, 0x74, 0x4a, 0xcc,
		0x4b, 0xcc, 0x2b, 0x4a, 0xcc, 0x4d, 0x64, 0x00, 0x00, 0x77, 0xda, 0x5c,
		0x3a, 0x21, 0x00, 0x00, 0x00,
	];
}
