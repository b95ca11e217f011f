//! Records stored in the database.

use core::{fmt, str::FromStr};

use crate::{
	properties::*,
	range::CodePointRange,
};

/// Unicode version the database was built from.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct UnicodeVersion {
	pub major: u16,
	pub minor: u8,
}

impl UnicodeVersion {
	pub const fn new(major: u16, minor: u8) -> Self {
		Self { major, minor }
	}
}

impl From<UnicodeVersion> for (u16, u8) {
	fn from(version: UnicodeVersion) -> Self {
		(version.major, version.minor)
	}
}

impl From<(u16, u8)> for UnicodeVersion {
	fn from((major, minor): (u16, u8)) -> Self {
		Self { major, minor }
	}
}

impl fmt::Display for UnicodeVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}

impl FromStr for UnicodeVersion {
	type Err = String;

	/// Parse `major.minor`, an optional update component (`15.1.0`) is ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut elems = s.trim().split('.');
		let major = elems.next().and_then(|val| val.parse().ok());
		let minor = elems.next().and_then(|val| val.parse().ok());
		match (major, minor) {
			(Some(major), Some(minor)) => Ok(Self { major, minor }),
			_ => Err(format!("invalid unicode version '{s}'")),
		}
	}
}

/// Exact numeric value of a character.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalNumber {
	numerator:   i64,
	denominator: u8,
}

impl RationalNumber {
	/// Create a rational number, `None` when the denominator is 0.
	pub const fn new(numerator: i64, denominator: u8) -> Option<Self> {
		if denominator == 0 {
			None
		} else {
			Some(Self { numerator, denominator })
		}
	}

	pub const fn numerator(&self) -> i64 {
		self.numerator
	}

	pub const fn denominator(&self) -> u8 {
		self.denominator
	}

	pub const fn is_integer(&self) -> bool {
		self.denominator == 1
	}
}

impl Default for RationalNumber {
	fn default() -> Self {
		Self { numerator: 0, denominator: 1 }
	}
}

impl fmt::Display for RationalNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.denominator == 1 {
			write!(f, "{}", self.numerator)
		} else {
			write!(f, "{}/{}", self.numerator, self.denominator)
		}
	}
}

impl FromStr for RationalNumber {
	type Err = String;

	/// Parse a value in the `UnicodeData.txt` form, i.e. `7`, `-1/2` or `1/160`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let err = || format!("invalid rational number '{s}'");
		let (numerator, denominator) = match s.split_once('/') {
			Some((num, den)) => (num, den),
			None => (s, "1"),
		};
		let numerator = numerator.trim().parse::<i64>().map_err(|_| err())?;
		let denominator = denominator.trim().parse::<u8>().map_err(|_| err())?;
		Self::new(numerator, denominator).ok_or_else(err)
	}
}

/// Formal name alias of a character.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NameAlias {
	pub name: String,
	pub kind: NameAliasKind,
}

/// Decomposition mapping, the mapping holds the decomposed characters themselves.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Decomposition {
	pub tag:     CompatibilityFormattingTag,
	pub mapping: String,
}

/// Properties of a single code point or of a range of code points sharing them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CharacterRecord {
	pub range:                     CodePointRange,
	/// Name of the character, or the base name of a range, e.g. "CJK UNIFIED IDEOGRAPH".
	pub name:                      Option<String>,
	pub name_aliases:              Vec<NameAlias>,
	pub category:                  Category,
	pub canonical_combining_class: CanonicalCombiningClass,
	pub bidirectional_class:       BidirectionalClass,
	pub decomposition:             Option<Decomposition>,
	pub numeric_type:              NumericType,
	pub numeric_value:             RationalNumber,
	pub bidirectional_mirrored:    bool,
	/// Unicode 1.0 name.
	pub old_name:                  Option<String>,
	pub simple_upper_case_mapping: Option<String>,
	pub simple_lower_case_mapping: Option<String>,
	pub simple_title_case_mapping: Option<String>,
	pub contributory_properties:   ContributoryProperties,
	pub core_properties:           CoreProperties,
	/// Related characters, from the `x` lines in `NamesList.txt`.
	pub cross_references:          Vec<u32>,
}

impl CharacterRecord {
	/// Create a record with only the mandatory bidirectional class, all other properties are defaulted.
	pub fn new(range: CodePointRange, bidirectional_class: BidirectionalClass) -> Self {
		Self {
			range,
			name: None,
			name_aliases: Vec::new(),
			category: Category::default(),
			canonical_combining_class: CanonicalCombiningClass::default(),
			bidirectional_class,
			decomposition: None,
			numeric_type: NumericType::None,
			numeric_value: RationalNumber::default(),
			bidirectional_mirrored: false,
			old_name: None,
			simple_upper_case_mapping: None,
			simple_lower_case_mapping: None,
			simple_title_case_mapping: None,
			contributory_properties: ContributoryProperties::none(),
			core_properties: CoreProperties::none(),
			cross_references: Vec::new(),
		}
	}
}

/// Properties of a CJK ideograph, from the Unihan database.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct IdeographRecord {
	pub code_point:           u32,
	pub numeric_type:         IdeographNumericType,
	pub numeric_value:        i64,
	pub definition:           Option<String>,
	pub mandarin_reading:     Option<String>,
	pub cantonese_reading:    Option<String>,
	pub japanese_kun_reading: Option<String>,
	pub japanese_on_reading:  Option<String>,
	pub korean_reading:       Option<String>,
	pub hangul_reading:       Option<String>,
	pub vietnamese_reading:   Option<String>,
	pub simplified_variant:   Option<String>,
	pub traditional_variant:  Option<String>,
}

impl IdeographRecord {
	pub fn new(code_point: u32) -> Self {
		Self { code_point, ..Default::default() }
	}
}

/// Named block of code points.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BlockRecord {
	pub range: CodePointRange,
	pub name:  String,
}
