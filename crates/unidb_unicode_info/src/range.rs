use core::{cmp::Ordering, fmt, str::FromStr};

/// Highest valid unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Inclusive range of code points, `first == last` for a single code point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePointRange {
	first: u32,
	last:  u32,
}

impl CodePointRange {
	/// Create a range covering a single code point.
	pub const fn single(code_point: u32) -> Self {
		Self { first: code_point, last: code_point }
	}

	/// Create a range from `first` to `last` (inclusive), `None` when `first > last`.
	pub const fn new(first: u32, last: u32) -> Option<Self> {
		if first <= last {
			Some(Self { first, last })
		} else {
			None
		}
	}

	pub const fn first(&self) -> u32 {
		self.first
	}

	pub const fn last(&self) -> u32 {
		self.last
	}

	/// Number of code points in the range.
	pub const fn len(&self) -> u32 {
		self.last - self.first + 1
	}

	pub const fn is_single(&self) -> bool {
		self.first == self.last
	}

	pub const fn contains(&self, code_point: u32) -> bool {
		self.first <= code_point && code_point <= self.last
	}

	/// Check if the ranges share at least one code point.
	pub const fn intersects(&self, other: &Self) -> bool {
		self.first <= other.last && other.first <= self.last
	}

	/// Compare the range against a code point.
	///
	/// `Less` when the range lies entirely before the code point, `Greater` when it lies entirely after it, and `Equal` when it contains it.
	pub fn compare_code_point(&self, code_point: u32) -> Ordering {
		if self.last < code_point {
			Ordering::Less
		} else if self.first > code_point {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}

	/// Merge 2 ranges when `other` directly follows `self`.
	pub fn merge(self, other: Self) -> Option<Self> {
		if self.last.checked_add(1) == Some(other.first) {
			Some(Self { first: self.first, last: other.last })
		} else {
			None
		}
	}

	/// Iterate over all code points in the range.
	pub fn iter(&self) -> core::ops::RangeInclusive<u32> {
		self.first..=self.last
	}
}

impl From<u32> for CodePointRange {
	fn from(code_point: u32) -> Self {
		Self::single(code_point)
	}
}

/// Error returned when a code point range could not be parsed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseRangeError(String);

impl fmt::Display for ParseRangeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid code point range '{}'", self.0)
	}
}

impl std::error::Error for ParseRangeError {}

impl FromStr for CodePointRange {
	type Err = ParseRangeError;

	/// Parse a range in the `XXXX` or `XXXX..YYYY` hex form used in the UCD files.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		let err = || ParseRangeError(s.to_string());
		let parse_hex = |hex: &str| u32::from_str_radix(hex.trim(), 16).map_err(|_| err());

		match s.split_once("..") {
			Some((first, last)) => Self::new(parse_hex(first)?, parse_hex(last)?).ok_or_else(err),
			None => parse_hex(s).map(Self::single),
		}
	}
}

impl fmt::Debug for CodePointRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_single() {
			write!(f, "CodePointRange({:04X})", self.first)
		} else {
			write!(f, "CodePointRange({:04X}..{:04X})", self.first, self.last)
		}
	}
}

impl fmt::Display for CodePointRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_single() {
			write!(f, "{:04X}", self.first)
		} else {
			write!(f, "{:04X}..{:04X}", self.first, self.last)
		}
	}
}
