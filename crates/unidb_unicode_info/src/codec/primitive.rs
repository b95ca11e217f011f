//! Primitive values: variable width code points, length-prefixed strings and little-endian integers.

use crate::error::{Error, Result};

/// Largest value the variable width code point encoding can represent.
pub const MAX_ENCODED_CODE_POINT: u32 = 0x40A0 + 0x1F_FFFF;

/// Maximum number of bytes in a string length prefix.
const MAX_LENGTH_BYTES: usize = 5;

/// Cursor over an in-memory database image.
pub struct ByteReader<'a> {
	data: &'a [u8],
	pos:  usize,
}

impl<'a> ByteReader<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// Current offset into the data.
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Number of bytes left to read.
	pub fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	pub fn is_at_end(&self) -> bool {
		self.pos == self.data.len()
	}

	pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
		if self.remaining() < len {
			return Err(Error::UnexpectedEof);
		}
		let bytes = &self.data[self.pos..self.pos + len];
		self.pos += len;
		Ok(bytes)
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		let byte = *self.data.get(self.pos).ok_or(Error::UnexpectedEof)?;
		self.pos += 1;
		Ok(byte)
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut arr = [0; N];
		arr.copy_from_slice(self.read_bytes(N)?);
		Ok(arr)
	}

	pub fn read_u16(&mut self) -> Result<u16> {
		self.read_array().map(u16::from_le_bytes)
	}

	pub fn read_u24(&mut self) -> Result<u32> {
		let [b0, b1, b2] = self.read_array()?;
		Ok(u32::from_le_bytes([b0, b1, b2, 0]))
	}

	pub fn read_u32(&mut self) -> Result<u32> {
		self.read_array().map(u32::from_le_bytes)
	}

	pub fn read_i64(&mut self) -> Result<i64> {
		self.read_array().map(i64::from_le_bytes)
	}

	/// Read a code point (or count) in the 1 to 3 byte variable width encoding.
	///
	/// Every lead byte is valid, only a truncated stream fails.
	pub fn read_code_point(&mut self) -> Result<u32> {
		let b0 = self.read_u8()? as u32;
		if b0 < 0xA0 {
			Ok(b0)
		} else if b0 < 0xC0 {
			let b1 = self.read_u8()? as u32;
			Ok(0xA0 + (((b0 & 0x1F) << 8) | b1))
		} else if b0 < 0xE0 {
			let b1 = self.read_u8()? as u32;
			Ok(0x20A0 + (((b0 & 0x1F) << 8) | b1))
		} else {
			let b1 = self.read_u8()? as u32;
			let b2 = self.read_u8()? as u32;
			Ok(0x40A0 + (((((b0 & 0x1F) << 8) | b1) << 8) | b2))
		}
	}

	/// Read an unsigned LEB128 string length.
	pub fn read_length(&mut self) -> Result<usize> {
		let mut value = 0u64;
		for idx in 0..MAX_LENGTH_BYTES {
			let byte = self.read_u8()?;
			value |= ((byte & 0x7F) as u64) << (7 * idx);
			if byte & 0x80 == 0 {
				return u32::try_from(value)
					.map(|len| len as usize)
					.map_err(|_| Error::InvalidValue { kind: "string length", value: u32::MAX });
			}
		}
		Err(Error::InvalidValue { kind: "string length", value: value as u32 })
	}

	/// Read `len` bytes of UTF-8.
	pub fn read_str(&mut self, len: usize) -> Result<String> {
		let bytes = self.read_bytes(len)?;
		core::str::from_utf8(bytes).map(str::to_string).map_err(|_| Error::InvalidUtf8)
	}

	/// Read a length-prefixed, non-empty, UTF-8 string.
	pub fn read_string(&mut self) -> Result<String> {
		let len = self.read_length()?;
		if len == 0 {
			return Err(Error::EmptyString);
		}
		self.read_str(len)
	}

	/// Read a length-prefixed string of at most `max_len` bytes.
	pub fn read_string_capped(&mut self, max_len: usize) -> Result<String> {
		let len = self.read_length()?;
		if len == 0 {
			return Err(Error::EmptyString);
		}
		if len > max_len {
			return Err(Error::NameTooLong { len, max: max_len });
		}
		self.read_str(len)
	}
}

/// Growable output buffer for a database image.
#[derive(Default)]
pub struct ByteWriter {
	data: Vec<u8>,
}

impl ByteWriter {
	pub fn new() -> Self {
		Self { data: Vec::new() }
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.data
	}

	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.data.extend_from_slice(bytes);
	}

	pub fn write_u8(&mut self, val: u8) {
		self.data.push(val);
	}

	pub fn write_u16(&mut self, val: u16) {
		self.write_bytes(&val.to_le_bytes());
	}

	/// Write the low 24 bits of `val`.
	pub fn write_u24(&mut self, val: u32) {
		self.write_bytes(&val.to_le_bytes()[..3]);
	}

	pub fn write_u32(&mut self, val: u32) {
		self.write_bytes(&val.to_le_bytes());
	}

	pub fn write_i64(&mut self, val: i64) {
		self.write_bytes(&val.to_le_bytes());
	}

	/// Write a code point (or count) in the 1 to 3 byte variable width encoding.
	pub fn write_code_point(&mut self, code_point: u32) -> Result<()> {
		if code_point < 0xA0 {
			self.write_u8(code_point as u8);
		} else if code_point < 0x20A0 {
			let val = code_point - 0xA0;
			self.write_bytes(&[0xA0 | (val >> 8) as u8, val as u8]);
		} else if code_point < 0x40A0 {
			let val = code_point - 0x20A0;
			self.write_bytes(&[0xC0 | (val >> 8) as u8, val as u8]);
		} else if code_point <= MAX_ENCODED_CODE_POINT {
			let val = code_point - 0x40A0;
			self.write_bytes(&[0xE0 | (val >> 16) as u8, (val >> 8) as u8, val as u8]);
		} else {
			return Err(Error::CodePointOutOfRange(code_point));
		}
		Ok(())
	}

	/// Write an unsigned LEB128 string length.
	pub fn write_length(&mut self, mut len: usize) {
		while len >= 0x80 {
			self.write_u8((len as u8 & 0x7F) | 0x80);
			len >>= 7;
		}
		self.write_u8(len as u8);
	}

	/// Write a length-prefixed, non-empty, UTF-8 string.
	pub fn write_string(&mut self, s: &str) -> Result<()> {
		if s.is_empty() {
			return Err(Error::EmptyString);
		}
		self.write_length(s.len());
		self.write_bytes(s.as_bytes());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn encode_code_point(code_point: u32) -> Vec<u8> {
		let mut writer = ByteWriter::new();
		writer.write_code_point(code_point).unwrap();
		writer.into_inner()
	}

	#[test]
	fn code_point_widths() {
		assert_eq!(encode_code_point(0x00), [0x00]);
		assert_eq!(encode_code_point(0x9F), [0x9F]);
		assert_eq!(encode_code_point(0xA0), [0xA0, 0x00]);
		assert_eq!(encode_code_point(0x209F), [0xBF, 0xFF]);
		assert_eq!(encode_code_point(0x20A0), [0xC0, 0x00]);
		assert_eq!(encode_code_point(0x409F), [0xDF, 0xFF]);
		assert_eq!(encode_code_point(0x40A0), [0xE0, 0x00, 0x00]);
		assert_eq!(encode_code_point(MAX_ENCODED_CODE_POINT), [0xFF, 0xFF, 0xFF]);
	}

	#[test]
	fn code_point_boundaries_decode() {
		for code_point in [0, 0x41, 0x9F, 0xA0, 0x301, 0x209F, 0x20A0, 0x409F, 0x40A0, 0xFFFF, 0x10FFFF, MAX_ENCODED_CODE_POINT] {
			let bytes = encode_code_point(code_point);
			let mut reader = ByteReader::new(&bytes);
			assert_eq!(reader.read_code_point().unwrap(), code_point);
			assert!(reader.is_at_end());
		}
	}

	#[test]
	fn code_point_too_large() {
		let mut writer = ByteWriter::new();
		assert!(matches!(writer.write_code_point(MAX_ENCODED_CODE_POINT + 1), Err(Error::CodePointOutOfRange(_))));
		assert!(writer.is_empty());
	}

	#[test]
	fn code_point_truncated() {
		let mut reader = ByteReader::new(&[0xE5, 0x01]);
		assert!(matches!(reader.read_code_point(), Err(Error::UnexpectedEof)));

		let mut reader = ByteReader::new(&[0xB0]);
		assert!(matches!(reader.read_code_point(), Err(Error::UnexpectedEof)));
	}

	#[test]
	fn fixed_width() {
		let mut writer = ByteWriter::new();
		writer.write_u16(0x1234);
		writer.write_u24(0xABCDEF);
		writer.write_u32(0xDEADBEEF);
		writer.write_i64(-2);
		assert_eq!(&writer.as_bytes()[..9], &[0x34, 0x12, 0xEF, 0xCD, 0xAB, 0xEF, 0xBE, 0xAD, 0xDE]);

		let bytes = writer.into_inner();
		let mut reader = ByteReader::new(&bytes);
		assert_eq!(reader.read_u16().unwrap(), 0x1234);
		assert_eq!(reader.read_u24().unwrap(), 0xABCDEF);
		assert_eq!(reader.read_u32().unwrap(), 0xDEADBEEF);
		assert_eq!(reader.read_i64().unwrap(), -2);
		assert!(matches!(reader.read_u8(), Err(Error::UnexpectedEof)));
	}

	#[test]
	fn strings() {
		let long = "x".repeat(300);
		let mut writer = ByteWriter::new();
		writer.write_string("LATIN CAPITAL LETTER A").unwrap();
		writer.write_string(&long).unwrap();
		assert!(matches!(writer.write_string(""), Err(Error::EmptyString)));

		let bytes = writer.into_inner();
		assert_eq!(bytes[0], 22);
		assert_eq!(&bytes[23..25], &[0xAC, 0x02]);

		let mut reader = ByteReader::new(&bytes);
		assert_eq!(reader.read_string().unwrap(), "LATIN CAPITAL LETTER A");
		assert_eq!(reader.read_string().unwrap(), long);
		assert!(reader.is_at_end());
	}

	#[test]
	fn string_errors() {
		let mut reader = ByteReader::new(&[0x02, 0xC3, 0x28]);
		assert!(matches!(reader.read_string(), Err(Error::InvalidUtf8)));

		let mut reader = ByteReader::new(&[0x00]);
		assert!(matches!(reader.read_string(), Err(Error::EmptyString)));

		let mut reader = ByteReader::new(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01]);
		assert!(matches!(reader.read_string(), Err(Error::InvalidValue { .. })));

		let mut reader = ByteReader::new(&[0x05, b'a', b'b']);
		assert!(matches!(reader.read_string(), Err(Error::UnexpectedEof)));

		let mut reader = ByteReader::new(&[0x03, b'a', b'b', b'c']);
		assert!(matches!(reader.read_string_capped(2), Err(Error::NameTooLong { len: 3, max: 2 })));
	}
}
