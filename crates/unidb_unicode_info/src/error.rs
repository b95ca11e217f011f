use std::io;
use thiserror::Error;

/// Error produced while encoding or decoding a unicode database.
#[derive(Error, Debug)]
pub enum Error {
	#[error("invalid magic tag, expected \"UCD\"")]
	InvalidMagic,

	#[error("unsupported format version {0}")]
	UnsupportedVersion(u8),

	#[error("unexpected end of data")]
	UnexpectedEof,

	#[error("name of {len} bytes exceeds the maximum of {max} bytes")]
	NameTooLong { len: usize, max: usize },

	#[error("unexpected empty string")]
	EmptyString,

	#[error("invalid {kind} value {value:#X}")]
	InvalidValue { kind: &'static str, value: u32 },

	#[error("string is not valid UTF-8")]
	InvalidUtf8,

	#[error("unknown {kind} flag bits {bits:#06X}")]
	InvalidFlags { kind: &'static str, bits: u32 },

	#[error("character record for {0:#06X} is missing its bidirectional class")]
	MissingBidirectionalClass(u32),

	#[error("packed ideograph index {0:#X} does not map to a code point")]
	InvalidPackedCodePoint(u32),

	#[error("{table} table is not strictly increasing at index {index}")]
	UnorderedTable { table: &'static str, index: usize },

	#[error("unexpected trailing data after the ideograph table")]
	TrailingData,

	#[error("invalid deflate stream: {0}")]
	InvalidCompression(io::Error),

	#[error("code point {0:#X} cannot be encoded")]
	CodePointOutOfRange(u32),

	#[error("code point {0:#06X} is not in a packable ideograph range")]
	NotAnIdeograph(u32),

	#[error("too many {what}: {count} (max {max})")]
	TooMany { what: &'static str, count: usize, max: usize },

	#[error("I/O error: {0}")]
	Io(io::Error),
}

impl Error {
	/// Convert an error from inflating a database, a stream the decoder rejects is corrupt data.
	pub(crate) fn from_inflate(err: io::Error) -> Self {
		match err.kind() {
			io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => Error::InvalidCompression(err),
			_ => err.into(),
		}
	}

	/// Check if the error means the data itself is malformed, as opposed to an I/O failure or a value the writer cannot encode.
	pub fn is_corrupt_data(&self) -> bool {
		!matches!(self, Error::CodePointOutOfRange(_) | Error::NotAnIdeograph(_) | Error::TooMany { .. } | Error::Io(_))
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		// A short read is a truncated database, not an I/O failure
		if err.kind() == io::ErrorKind::UnexpectedEof {
			Error::UnexpectedEof
		} else {
			Error::Io(err)
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classification() {
		assert!(Error::InvalidMagic.is_corrupt_data());
		assert!(Error::UnexpectedEof.is_corrupt_data());
		assert!(Error::MissingBidirectionalClass(0x41).is_corrupt_data());
		assert!(!Error::CodePointOutOfRange(0x230000).is_corrupt_data());
		assert!(!Error::Io(io::Error::new(io::ErrorKind::Other, "disk")).is_corrupt_data());
	}

	#[test]
	fn short_read_is_eof() {
		let err: Error = io::Error::new(io::ErrorKind::UnexpectedEof, "short").into();
		assert!(matches!(err, Error::UnexpectedEof));
	}

	#[test]
	fn inflate_errors() {
		let err = Error::from_inflate(io::Error::new(io::ErrorKind::InvalidInput, "corrupt deflate stream"));
		assert!(matches!(err, Error::InvalidCompression(_)));
		assert!(err.is_corrupt_data());
		assert!(matches!(Error::from_inflate(io::Error::new(io::ErrorKind::UnexpectedEof, "short")), Error::UnexpectedEof));
		assert!(!Error::from_inflate(io::Error::new(io::ErrorKind::Other, "disk")).is_corrupt_data());
	}

	#[test]
	fn messages() {
		assert_eq!(Error::UnsupportedVersion(3).to_string(), "unsupported format version 3");
		assert_eq!(Error::InvalidValue { kind: "category", value: 0x40 }.to_string(), "invalid category value 0x40");
	}
}
