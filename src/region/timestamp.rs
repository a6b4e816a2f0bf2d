
use std::io::{Read, Write};
use chrono::{DateTime, Utc};
use crate::{
	McResult,
	for_each_int_type,
};
use crate::ioext::{Readable, Writable, ReaderExt, WriterExt};

/// A 32-bit Unix timestamp.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Timestamp(pub u32);

impl Timestamp {
	pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
		DateTime::from_timestamp(self.0 as i64, 0)
	}

	/// Get a [Timestamp] for the current time (in Utc).
	pub fn utc_now() -> Timestamp {
		Timestamp(
			Utc::now().timestamp() as u32
		)
	}

	/// A zero timestamp marks a vacant chunk slot.
	pub fn is_zero(&self) -> bool {
		self.0 == 0
	}
}

macro_rules! __timestamp_impls {
	($type:ty) => {
		impl From<$type> for Timestamp {
			fn from(value: $type) -> Self {
				Self(value as u32)
			}
		}

		impl From<Timestamp> for $type {
			fn from(value: Timestamp) -> Self {
				value.0 as $type
			}
		}
	};
}

for_each_int_type!(__timestamp_impls);

impl<T: Into<Timestamp> + Copy> From<&T> for Timestamp {
    fn from(value: &T) -> Self {
        T::into(*value)
    }
}

impl Readable for Timestamp {
	fn read_from<R: Read>(reader: &mut R) -> McResult<Self> {
		Ok(Self(reader.read_value()?))
	}
}

impl Writable for Timestamp {
	fn write_to<W: Write>(&self, writer: &mut W) -> McResult<usize> {
		writer.write_value(self.0)
	}
}

impl From<DateTime<Utc>> for Timestamp {
	fn from(value: DateTime<Utc>) -> Self {
		Timestamp(value.timestamp() as u32)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn datetime_conversion() {
		let stamp = Timestamp(1570215508);
		let datetime = stamp.to_datetime().unwrap();
		assert_eq!(datetime.timestamp(), 1570215508);
		assert_eq!(Timestamp::from(datetime), stamp);
		assert!(Timestamp::default().is_zero());
	}
}
