//! Dense packing of CJK ideograph code points.
//!
//! The ideographs are spread over several blocks, the packed index space puts them back to back so most packed values fit in 2 or 3 encoded bytes.

use crate::error::{Error, Result};

struct Partition {
	/// First real code point.
	first:  u32,
	/// Real code point past the end.
	end:    u32,
	/// First packed index.
	packed: u32,
}

impl Partition {
	const fn packed_end(&self) -> u32 {
		self.packed + (self.end - self.first)
	}
}

/// Partitions, ordered by packed index.
const PARTITIONS: [Partition; 5] = [
	// CJK Unified Ideographs
	Partition { first: 0x4E00,  end: 0xA000,  packed: 0x00000 },
	// Extension A
	Partition { first: 0x3400,  end: 0x4E00,  packed: 0x05200 },
	// Extension B to F and I
	Partition { first: 0x20000, end: 0x2F800, packed: 0x06C00 },
	// CJK Compatibility Ideographs
	Partition { first: 0xF900,  end: 0xFB00,  packed: 0x1F600 },
	// Compatibility Ideographs Supplement, Extension G and H
	Partition { first: 0x2F800, end: 0x32400, packed: 0x1F800 },
];

/// Map an ideograph code point to its packed index.
pub fn pack(code_point: u32) -> Result<u32> {
	PARTITIONS.iter()
		.find(|part| part.first <= code_point && code_point < part.end)
		.map(|part| code_point - part.first + part.packed)
		.ok_or(Error::NotAnIdeograph(code_point))
}

/// Map a packed index back to its code point.
pub fn unpack(packed: u32) -> Result<u32> {
	PARTITIONS.iter()
		.find(|part| part.packed <= packed && packed < part.packed_end())
		.map(|part| packed - part.packed + part.first)
		.ok_or(Error::InvalidPackedCodePoint(packed))
}

/// Check if a code point can be stored in the ideograph table.
pub fn is_packable(code_point: u32) -> bool {
	pack(code_point).is_ok()
}
