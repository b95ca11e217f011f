//! Character, block and ideograph records.
//!
//! Every character and ideograph record starts with a flag word telling which optional fields follow.

use unidb_base::EnumFromIndexT;
use unidb_common_macros::flags;

use crate::{
	codec::{
		ideograph_index,
		primitive::{ByteReader, ByteWriter},
	},
	data::*,
	error::{Error, Result},
	properties::*,
	range::CodePointRange,
};

/// Maximum length in bytes of a character name.
pub const MAX_NAME_LEN: usize = 128;
/// Maximum number of name aliases of a single record.
pub const MAX_NAME_ALIASES: usize = 64;
/// Maximum number of cross references of a single record.
pub const MAX_CROSS_REFERENCES: usize = 256;

/// Fields present in a character record.
#[flags(u16)]
pub enum CharacterFields {
	/// The key is a range instead of a single code point.
	CodePointRange,
	Name,
	Category,
	CanonicalCombiningClass,
	BidirectionalClass,
	DecompositionMapping,
	NumericDecimal,
	NumericDigit,
	/// Both numeric bits make up the `Numeric` type.
	NumericNumeric = NumericDecimal | NumericDigit,
	BidirectionalMirrored,
	OldName,
	SimpleUpperCaseMapping,
	SimpleLowerCaseMapping,
	SimpleTitleCaseMapping,
	ContributoryProperties,
	CoreProperties,
	CrossReferences,
}

impl CharacterFields {
	const NUMERIC_SHIFT: u32 = 6;

	fn numeric_type(self) -> NumericType {
		let idx = (self.bitand(Self::NumericNumeric).bits() >> Self::NUMERIC_SHIFT) as usize;
		NumericType::from_idx_or(idx, NumericType::None)
	}

	fn from_numeric_type(numeric_type: NumericType) -> Self {
		Self::from_bits_truncate((numeric_type as u16) << Self::NUMERIC_SHIFT)
	}
}

/// Fields present in an ideograph record.
#[flags(u16)]
pub enum IdeographFields {
	PrimaryNumeric,
	AccountingNumeric,
	/// Both numeric bits make up the `Other` numeric type.
	OtherNumeric = PrimaryNumeric | AccountingNumeric,
	Definition,
	MandarinReading,
	CantoneseReading,
	JapaneseKunReading,
	JapaneseOnReading,
	KoreanReading,
	HangulReading,
	VietnameseReading,
	SimplifiedVariant,
	TraditionalVariant,
}

impl IdeographFields {
	fn numeric_type(self) -> IdeographNumericType {
		let idx = self.bitand(Self::OtherNumeric).bits() as usize;
		IdeographNumericType::from_idx_or(idx, IdeographNumericType::None)
	}
}

fn read_enum<T: EnumFromIndexT>(reader: &mut ByteReader, kind: &'static str) -> Result<T> {
	let byte = reader.read_u8()?;
	T::from_idx(byte as usize).ok_or(Error::InvalidValue { kind, value: byte as u32 })
}

fn read_opt_string(reader: &mut ByteReader, present: bool) -> Result<Option<String>> {
	if present {
		reader.read_string().map(Some)
	} else {
		Ok(None)
	}
}

fn write_opt_string(writer: &mut ByteWriter, s: &Option<String>) -> Result<()> {
	match s {
		Some(s) => writer.write_string(s),
		None => Ok(()),
	}
}

fn read_range(reader: &mut ByteReader, is_range: bool) -> Result<CodePointRange> {
	let first = reader.read_code_point()?;
	if !is_range {
		return Ok(CodePointRange::single(first));
	}
	let last = reader.read_code_point()?;
	CodePointRange::new(first, last).ok_or(Error::InvalidValue { kind: "range end", value: last })
}

fn check_name_len(name: &str) -> Result<()> {
	if name.is_empty() {
		Err(Error::EmptyString)
	} else if name.len() > MAX_NAME_LEN {
		Err(Error::NameTooLong { len: name.len(), max: MAX_NAME_LEN })
	} else {
		Ok(())
	}
}

//==============================================================
// Character records
//==============================================================

fn character_fields(record: &CharacterRecord) -> CharacterFields {
	let mut fields = CharacterFields::from_numeric_type(record.numeric_type);
	fields.set(CharacterFields::CodePointRange, !record.range.is_single());
	fields.set(CharacterFields::Name, record.name.is_some() || !record.name_aliases.is_empty());
	fields.set(CharacterFields::Category, record.category != Category::OtherNotAssigned);
	fields.set(CharacterFields::CanonicalCombiningClass, record.canonical_combining_class != CanonicalCombiningClass::NotReordered);
	fields.enable(CharacterFields::BidirectionalClass);
	fields.set(CharacterFields::DecompositionMapping, record.decomposition.is_some());
	fields.set(CharacterFields::BidirectionalMirrored, record.bidirectional_mirrored);
	fields.set(CharacterFields::OldName, record.old_name.is_some());
	fields.set(CharacterFields::SimpleUpperCaseMapping, record.simple_upper_case_mapping.is_some());
	fields.set(CharacterFields::SimpleLowerCaseMapping, record.simple_lower_case_mapping.is_some());
	fields.set(CharacterFields::SimpleTitleCaseMapping, record.simple_title_case_mapping.is_some());
	fields.set(CharacterFields::ContributoryProperties, record.contributory_properties.is_any());
	fields.set(CharacterFields::CoreProperties, record.core_properties.is_any());
	fields.set(CharacterFields::CrossReferences, !record.cross_references.is_empty());
	fields
}

fn write_name_block(writer: &mut ByteWriter, name: Option<&str>, aliases: &[NameAlias]) -> Result<()> {
	if aliases.is_empty() {
		if let Some(name) = name {
			check_name_len(name)?;
			writer.write_u8((name.len() - 1) as u8);
			writer.write_bytes(name.as_bytes());
		}
		return Ok(());
	}

	if aliases.len() > MAX_NAME_ALIASES {
		return Err(Error::TooMany { what: "name aliases", count: aliases.len(), max: MAX_NAME_ALIASES });
	}

	let mut selector = 0x80 | (aliases.len() - 1) as u8;
	if name.is_some() {
		selector |= 0x40;
	}
	writer.write_u8(selector);

	if let Some(name) = name {
		check_name_len(name)?;
		writer.write_string(name)?;
	}
	for alias in aliases {
		writer.write_string(&alias.name)?;
		writer.write_u8(alias.kind as u8);
	}
	Ok(())
}

fn read_name_block(reader: &mut ByteReader) -> Result<(Option<String>, Vec<NameAlias>)> {
	let selector = reader.read_u8()?;
	if selector < 0x80 {
		let len = (selector & 0x7F) as usize + 1;
		return Ok((Some(reader.read_str(len)?), Vec::new()));
	}

	let count = (selector & 0x3F) as usize + 1;
	let name = if selector & 0x40 != 0 {
		Some(reader.read_string_capped(MAX_NAME_LEN)?)
	} else {
		None
	};

	let mut aliases = Vec::with_capacity(count);
	for _ in 0..count {
		let name = reader.read_string()?;
		let kind = read_enum(reader, "name alias kind")?;
		aliases.push(NameAlias { name, kind });
	}
	Ok((name, aliases))
}

/// Encode a character record.
pub fn write_character(writer: &mut ByteWriter, record: &CharacterRecord) -> Result<()> {
	if record.cross_references.len() > MAX_CROSS_REFERENCES {
		return Err(Error::TooMany { what: "cross references", count: record.cross_references.len(), max: MAX_CROSS_REFERENCES });
	}

	let fields = character_fields(record);
	writer.write_u16(fields.bits());

	writer.write_code_point(record.range.first())?;
	if fields.contains(CharacterFields::CodePointRange) {
		writer.write_code_point(record.range.last())?;
	}

	if fields.contains(CharacterFields::Name) {
		write_name_block(writer, record.name.as_deref(), &record.name_aliases)?;
	}
	if fields.contains(CharacterFields::Category) {
		writer.write_u8(record.category as u8);
	}
	if fields.contains(CharacterFields::CanonicalCombiningClass) {
		writer.write_u8(record.canonical_combining_class as u8);
	}
	writer.write_u8(record.bidirectional_class as u8);

	if let Some(decomposition) = &record.decomposition {
		writer.write_u8(decomposition.tag as u8);
		writer.write_string(&decomposition.mapping)?;
	}
	if record.numeric_type != NumericType::None {
		writer.write_i64(record.numeric_value.numerator());
		writer.write_u8(record.numeric_value.denominator());
	}

	write_opt_string(writer, &record.old_name)?;
	write_opt_string(writer, &record.simple_upper_case_mapping)?;
	write_opt_string(writer, &record.simple_lower_case_mapping)?;
	write_opt_string(writer, &record.simple_title_case_mapping)?;

	if fields.contains(CharacterFields::ContributoryProperties) {
		writer.write_u32(record.contributory_properties.bits());
	}
	if fields.contains(CharacterFields::CoreProperties) {
		writer.write_u24(record.core_properties.bits() & CoreProperties::STORED_MASK);
	}
	if fields.contains(CharacterFields::CrossReferences) {
		writer.write_u8((record.cross_references.len() - 1) as u8);
		for code_point in &record.cross_references {
			writer.write_code_point(*code_point)?;
		}
	}
	Ok(())
}

/// Decode a character record.
pub fn read_character(reader: &mut ByteReader) -> Result<CharacterRecord> {
	let bits = reader.read_u16()?;
	let fields = CharacterFields::from_bits(bits).ok_or(Error::InvalidFlags { kind: "character", bits: bits as u32 })?;

	let range = read_range(reader, fields.contains(CharacterFields::CodePointRange))?;

	let (name, name_aliases) = if fields.contains(CharacterFields::Name) {
		read_name_block(reader)?
	} else {
		(None, Vec::new())
	};

	let category = if fields.contains(CharacterFields::Category) {
		read_enum(reader, "category")?
	} else {
		Category::OtherNotAssigned
	};
	let canonical_combining_class = if fields.contains(CharacterFields::CanonicalCombiningClass) {
		read_enum(reader, "canonical combining class")?
	} else {
		CanonicalCombiningClass::NotReordered
	};
	if !fields.contains(CharacterFields::BidirectionalClass) {
		return Err(Error::MissingBidirectionalClass(range.first()));
	}
	let bidirectional_class = read_enum(reader, "bidirectional class")?;

	let decomposition = if fields.contains(CharacterFields::DecompositionMapping) {
		let tag = read_enum(reader, "decomposition tag")?;
		let mapping = reader.read_string()?;
		Some(Decomposition { tag, mapping })
	} else {
		None
	};

	let numeric_type = fields.numeric_type();
	let numeric_value = if numeric_type != NumericType::None {
		let numerator = reader.read_i64()?;
		let denominator = reader.read_u8()?;
		RationalNumber::new(numerator, denominator).ok_or(Error::InvalidValue { kind: "numeric denominator", value: 0 })?
	} else {
		RationalNumber::default()
	};

	let old_name = read_opt_string(reader, fields.contains(CharacterFields::OldName))?;
	let simple_upper_case_mapping = read_opt_string(reader, fields.contains(CharacterFields::SimpleUpperCaseMapping))?;
	let simple_lower_case_mapping = read_opt_string(reader, fields.contains(CharacterFields::SimpleLowerCaseMapping))?;
	let simple_title_case_mapping = read_opt_string(reader, fields.contains(CharacterFields::SimpleTitleCaseMapping))?;

	let contributory_properties = if fields.contains(CharacterFields::ContributoryProperties) {
		let bits = reader.read_u32()?;
		ContributoryProperties::from_bits(bits).ok_or(Error::InvalidFlags { kind: "contributory property", bits })?
	} else {
		ContributoryProperties::none()
	};
	let core_properties = if fields.contains(CharacterFields::CoreProperties) {
		let bits = reader.read_u24()?;
		CoreProperties::from_bits(bits).ok_or(Error::InvalidFlags { kind: "core property", bits })?
	} else {
		CoreProperties::none()
	};

	let cross_references = if fields.contains(CharacterFields::CrossReferences) {
		let count = reader.read_u8()? as usize + 1;
		let mut cross_references = Vec::with_capacity(count);
		for _ in 0..count {
			cross_references.push(reader.read_code_point()?);
		}
		cross_references
	} else {
		Vec::new()
	};

	Ok(CharacterRecord {
		range,
		name,
		name_aliases,
		category,
		canonical_combining_class,
		bidirectional_class,
		decomposition,
		numeric_type,
		numeric_value,
		bidirectional_mirrored: fields.contains(CharacterFields::BidirectionalMirrored),
		old_name,
		simple_upper_case_mapping,
		simple_lower_case_mapping,
		simple_title_case_mapping,
		contributory_properties,
		core_properties,
		cross_references,
	})
}

//==============================================================
// Ideograph records
//==============================================================

fn ideograph_strings(record: &IdeographRecord) -> [(IdeographFields, &Option<String>); 10] {
	[
		(IdeographFields::Definition, &record.definition),
		(IdeographFields::MandarinReading, &record.mandarin_reading),
		(IdeographFields::CantoneseReading, &record.cantonese_reading),
		(IdeographFields::JapaneseKunReading, &record.japanese_kun_reading),
		(IdeographFields::JapaneseOnReading, &record.japanese_on_reading),
		(IdeographFields::KoreanReading, &record.korean_reading),
		(IdeographFields::HangulReading, &record.hangul_reading),
		(IdeographFields::VietnameseReading, &record.vietnamese_reading),
		(IdeographFields::SimplifiedVariant, &record.simplified_variant),
		(IdeographFields::TraditionalVariant, &record.traditional_variant),
	]
}

/// Encode an ideograph record.
pub fn write_ideograph(writer: &mut ByteWriter, record: &IdeographRecord) -> Result<()> {
	let packed = ideograph_index::pack(record.code_point)?;
	let strings = ideograph_strings(record);

	let mut fields = IdeographFields::from_bits_truncate(record.numeric_type as u16);
	for (field, value) in &strings {
		fields.set(*field, value.is_some());
	}

	writer.write_u16(fields.bits());
	writer.write_code_point(packed)?;
	if record.numeric_type != IdeographNumericType::None {
		writer.write_i64(record.numeric_value);
	}
	for (_, value) in &strings {
		write_opt_string(writer, value)?;
	}
	Ok(())
}

/// Decode an ideograph record.
pub fn read_ideograph(reader: &mut ByteReader) -> Result<IdeographRecord> {
	let bits = reader.read_u16()?;
	let fields = IdeographFields::from_bits(bits).ok_or(Error::InvalidFlags { kind: "ideograph", bits: bits as u32 })?;
	let code_point = ideograph_index::unpack(reader.read_code_point()?)?;

	let numeric_type = fields.numeric_type();
	let numeric_value = if numeric_type != IdeographNumericType::None {
		reader.read_i64()?
	} else {
		0
	};

	Ok(IdeographRecord {
		code_point,
		numeric_type,
		numeric_value,
		definition: read_opt_string(reader, fields.contains(IdeographFields::Definition))?,
		mandarin_reading: read_opt_string(reader, fields.contains(IdeographFields::MandarinReading))?,
		cantonese_reading: read_opt_string(reader, fields.contains(IdeographFields::CantoneseReading))?,
		japanese_kun_reading: read_opt_string(reader, fields.contains(IdeographFields::JapaneseKunReading))?,
		japanese_on_reading: read_opt_string(reader, fields.contains(IdeographFields::JapaneseOnReading))?,
		korean_reading: read_opt_string(reader, fields.contains(IdeographFields::KoreanReading))?,
		hangul_reading: read_opt_string(reader, fields.contains(IdeographFields::HangulReading))?,
		vietnamese_reading: read_opt_string(reader, fields.contains(IdeographFields::VietnameseReading))?,
		simplified_variant: read_opt_string(reader, fields.contains(IdeographFields::SimplifiedVariant))?,
		traditional_variant: read_opt_string(reader, fields.contains(IdeographFields::TraditionalVariant))?,
	})
}

//==============================================================
// Block records
//==============================================================

pub fn write_block(writer: &mut ByteWriter, block: &BlockRecord) -> Result<()> {
	writer.write_code_point(block.range.first())?;
	writer.write_code_point(block.range.last())?;
	writer.write_string(&block.name)
}

pub fn read_block(reader: &mut ByteReader) -> Result<BlockRecord> {
	let range = read_range(reader, true)?;
	let name = reader.read_string()?;
	Ok(BlockRecord { range, name })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn encode<T>(record: &T, write: fn(&mut ByteWriter, &T) -> Result<()>) -> Vec<u8> {
		let mut writer = ByteWriter::new();
		write(&mut writer, record).unwrap();
		writer.into_inner()
	}

	fn decode<T>(bytes: &[u8], read: fn(&mut ByteReader) -> Result<T>) -> T {
		let mut reader = ByteReader::new(bytes);
		let record = read(&mut reader).unwrap();
		assert!(reader.is_at_end());
		record
	}

	fn full_character() -> CharacterRecord {
		let mut record = CharacterRecord::new(CodePointRange::single(0x00BD), BidirectionalClass::OtherNeutral);
		record.name = Some("VULGAR FRACTION ONE HALF".to_string());
		record.name_aliases = vec![
			NameAlias { name: "HALF".to_string(), kind: NameAliasKind::Alternate },
			NameAlias { name: "1/2".to_string(), kind: NameAliasKind::Abbreviation },
		];
		record.category = Category::OtherNumber;
		record.canonical_combining_class = CanonicalCombiningClass::A;
		record.decomposition = Some(Decomposition { tag: CompatibilityFormattingTag::Fraction, mapping: "1\u{2044}2".to_string() });
		record.numeric_type = NumericType::Numeric;
		record.numeric_value = "1/2".parse().unwrap();
		record.bidirectional_mirrored = true;
		record.old_name = Some("FRACTION ONE HALF".to_string());
		record.simple_upper_case_mapping = Some("A".to_string());
		record.simple_lower_case_mapping = Some("a".to_string());
		record.simple_title_case_mapping = Some("\u{1C5}".to_string());
		record.contributory_properties = ContributoryProperties::Dash | ContributoryProperties::RegionalIndicator;
		record.core_properties = CoreProperties::XidContinue | CoreProperties::Lowercase;
		record.cross_references = vec![0x2044, 0x1F10B];
		record
	}

	#[test]
	fn minimal_character() {
		let record = CharacterRecord::new(CodePointRange::single(0x41), BidirectionalClass::LeftToRight);
		let bytes = encode(&record, write_character);
		assert_eq!(bytes, [0x10, 0x00, 0x41, BidirectionalClass::LeftToRight as u8]);
		assert_eq!(decode(&bytes, read_character), record);
	}

	#[test]
	fn full_character_round_trip() {
		let record = full_character();
		let bytes = encode(&record, write_character);
		assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 0xFFFE);
		assert_eq!(decode(&bytes, read_character), record);
	}

	#[test]
	fn ranged_character() {
		let mut record = CharacterRecord::new(CodePointRange::new(0x4E00, 0x9FFF).unwrap(), BidirectionalClass::LeftToRight);
		record.name = Some("CJK UNIFIED IDEOGRAPH".to_string());
		record.category = Category::OtherLetter;

		let bytes = encode(&record, write_character);
		// flags, 3 byte first, 3 byte last, plain name
		assert_eq!(bytes[0] & 0x01, 0x01);
		assert_eq!(bytes[8], 20);
		assert_eq!(decode(&bytes, read_character), record);
	}

	#[test]
	fn numeric_types() {
		for numeric_type in [NumericType::Decimal, NumericType::Digit, NumericType::Numeric] {
			let mut record = CharacterRecord::new(CodePointRange::single(0x35), BidirectionalClass::EuropeanNumber);
			record.numeric_type = numeric_type;
			record.numeric_value = RationalNumber::new(5, 1).unwrap();
			let bytes = encode(&record, write_character);
			assert_eq!(((bytes[0] >> 6) & 3), numeric_type as u8);
			assert_eq!(decode(&bytes, read_character), record);
		}
	}

	#[test]
	fn aliases_without_name() {
		let mut record = CharacterRecord::new(CodePointRange::single(0x80), BidirectionalClass::BoundaryNeutral);
		record.category = Category::Control;
		record.name_aliases = vec![NameAlias { name: "PADDING CHARACTER".to_string(), kind: NameAliasKind::Figment }];

		let bytes = encode(&record, write_character);
		assert_eq!(bytes[3], 0x80);
		assert_eq!(decode(&bytes, read_character), record);
	}

	#[test]
	fn name_limits() {
		let mut record = CharacterRecord::new(CodePointRange::single(0x41), BidirectionalClass::LeftToRight);
		record.name = Some("A".repeat(MAX_NAME_LEN));
		let bytes = encode(&record, write_character);
		assert_eq!(bytes[3], 0x7F);
		assert_eq!(decode(&bytes, read_character), record);

		record.name = Some("A".repeat(MAX_NAME_LEN + 1));
		let mut writer = ByteWriter::new();
		assert!(matches!(write_character(&mut writer, &record), Err(Error::NameTooLong { .. })));

		record.name = Some(String::new());
		let mut writer = ByteWriter::new();
		assert!(matches!(write_character(&mut writer, &record), Err(Error::EmptyString)));
	}

	#[test]
	fn long_primary_name_in_alias_mode_is_corrupt() {
		// selector: alias mode with primary name, 1 alias
		let mut bytes = vec![0x12, 0x00, 0x41, 0xC0, 0x81, 0x01];
		bytes.extend(std::iter::repeat(b'A').take(129));
		let mut reader = ByteReader::new(&bytes);
		assert!(matches!(read_character(&mut reader), Err(Error::NameTooLong { len: 129, max: 128 })));
	}

	#[test]
	fn missing_bidi_class() {
		let mut reader = ByteReader::new(&[0x04, 0x00, 0x41, Category::UppercaseLetter as u8]);
		assert!(matches!(read_character(&mut reader), Err(Error::MissingBidirectionalClass(0x41))));
	}

	#[test]
	fn invalid_enum_byte() {
		let mut reader = ByteReader::new(&[0x14, 0x00, 0x41, 0x40, 0x00]);
		assert!(matches!(read_character(&mut reader), Err(Error::InvalidValue { kind: "category", value: 0x40 })));
	}

	#[test]
	fn truncated_character() {
		let bytes = encode(&full_character(), write_character);
		for len in [0, 1, 2, 5, bytes.len() / 2, bytes.len() - 1] {
			let mut reader = ByteReader::new(&bytes[..len]);
			assert!(read_character(&mut reader).is_err());
		}
	}

	#[test]
	fn too_many_cross_references() {
		let mut record = CharacterRecord::new(CodePointRange::single(0x41), BidirectionalClass::LeftToRight);
		record.cross_references = vec![0x42; MAX_CROSS_REFERENCES + 1];
		let mut writer = ByteWriter::new();
		assert!(matches!(write_character(&mut writer, &record), Err(Error::TooMany { .. })));

		record.cross_references.pop();
		let bytes = encode(&record, write_character);
		assert_eq!(decode(&bytes, read_character).cross_references.len(), MAX_CROSS_REFERENCES);
	}

	#[test]
	fn ideograph_round_trip() {
		let minimal = IdeographRecord::new(0x3400);
		let bytes = encode(&minimal, write_ideograph);
		assert_eq!(bytes, [0x00, 0x00, 0xE0, 0x11, 0x60]);
		assert_eq!(decode(&bytes, read_ideograph), minimal);

		let full = IdeographRecord {
			code_point: 0x4E94,
			numeric_type: IdeographNumericType::Primary,
			numeric_value: 5,
			definition: Some("five; surname".to_string()),
			mandarin_reading: Some("wǔ".to_string()),
			cantonese_reading: Some("ng5".to_string()),
			japanese_kun_reading: Some("ITSUTSU".to_string()),
			japanese_on_reading: Some("GO".to_string()),
			korean_reading: Some("O".to_string()),
			hangul_reading: Some("오:0N".to_string()),
			vietnamese_reading: Some("ngũ".to_string()),
			simplified_variant: Some("\u{4E94}".to_string()),
			traditional_variant: Some("\u{4E94}".to_string()),
		};
		let bytes = encode(&full, write_ideograph);
		assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 0x0FFD);
		assert_eq!(decode(&bytes, read_ideograph), full);

		let other = IdeographRecord { code_point: 0x2F800, numeric_type: IdeographNumericType::Other, numeric_value: 1_000_000_000_000, ..Default::default() };
		let bytes = encode(&other, write_ideograph);
		assert_eq!(decode(&bytes, read_ideograph), other);
	}

	#[test]
	fn ideograph_errors() {
		let mut writer = ByteWriter::new();
		assert!(matches!(write_ideograph(&mut writer, &IdeographRecord::new(0x41)), Err(Error::NotAnIdeograph(0x41))));

		let mut reader = ByteReader::new(&[0x00, 0x10, 0x00]);
		assert!(matches!(read_ideograph(&mut reader), Err(Error::InvalidFlags { kind: "ideograph", bits: 0x1000 })));

		// packed 0x16400 lies in the gap before the compatibility ideographs
		let mut writer = ByteWriter::new();
		writer.write_u16(0);
		writer.write_code_point(0x16400).unwrap();
		let bytes = writer.into_inner();
		let mut reader = ByteReader::new(&bytes);
		assert!(matches!(read_ideograph(&mut reader), Err(Error::InvalidPackedCodePoint(0x16400))));
	}

	#[test]
	fn block_round_trip() {
		let block = BlockRecord { range: CodePointRange::new(0x0000, 0x007F).unwrap(), name: "Basic Latin".to_string() };
		let bytes = encode(&block, write_block);
		assert_eq!(&bytes[..2], &[0x00, 0x7F]);
		assert_eq!(decode(&bytes, read_block), block);

		let mut reader = ByteReader::new(&[0x10, 0x05, 0x01, b'X']);
		assert!(matches!(read_block(&mut reader), Err(Error::InvalidValue { kind: "range end", value: 0x05 })));
	}
}
