

use thiserror::Error;

/// The master error type.
#[derive(Debug, Error)]
pub enum McError {
	#[error("IO Error: {0}")]
	IoError(#[from] std::io::Error),
	#[error("Input ended unexpectedly.")]
	UnexpectedEof,
	#[error("Chunk not found.")]
	ChunkNotFound,
	#[error("Invalid Compression value: {0}")]
	InvalidCompressionScheme(u8),
	#[error("Out of range error.")]
	OutOfRange,
	#[error("Failed to convert to UTF-8 string.")]
	FromUtf8Error(#[from] std::string::FromUtf8Error),
	#[error("Unsupported Tag ID: {0}")]
	UnsupportedTagId(u8),
	#[error("Encountered the End Tag ID marker.")]
	EndTagMarker,
	#[error("Tag mismatch: expected {expected}, found {found}.")]
	TagMismatch {
		expected: &'static str,
		found: &'static str,
	},
	#[error("Tag nesting exceeds the depth limit.")]
	TagTooDeep,
	#[error("Chunk does not fit in 255 sectors.")]
	ChunkTooLarge,
	#[error("Chunk length {length} exceeds its sector allocation of {maximum} bytes.")]
	LengthExceedsMaximum {
		length: u32,
		maximum: u32,
	},
	#[error("Corrupted region header: {0}")]
	CorruptHeader(String),
	#[error("Path does not match the r.<x>.<z>.<ext> pattern: {0}")]
	BadPath(String),
	#[error("{0}")]
	Custom(String),
}

pub type McResult<T> = Result<T, McError>;

impl McError {

	/// Collapses short reads into [McError::UnexpectedEof] so that a
	/// truncated tag or header is distinguishable from a real I/O failure.
	pub(crate) fn eof(error: std::io::Error) -> McError {
		if error.kind() == std::io::ErrorKind::UnexpectedEof {
			McError::UnexpectedEof
		} else {
			McError::IoError(error)
		}
	}

	pub fn custom<T, S: AsRef<str>>(msg: S) -> Result<T, McError> {
		Err(McError::Custom(msg.as_ref().to_owned()))
	}
}

impl serde::ser::Error for McError {
	fn custom<T: std::fmt::Display>(msg: T) -> Self {
		McError::Custom(msg.to_string())
	}
}

impl serde::de::Error for McError {
	fn custom<T: std::fmt::Display>(msg: T) -> Self {
		McError::Custom(msg.to_string())
	}
}
