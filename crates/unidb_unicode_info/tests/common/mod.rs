#![allow(dead_code)]

use unidb_unicode_info::*;

pub fn character(first: u32, last: u32, category: Category, name: Option<&str>) -> CharacterRecord {
	let mut record = CharacterRecord::new(CodePointRange::new(first, last).unwrap(), BidirectionalClass::LeftToRight);
	record.category = category;
	record.name = name.map(str::to_string);
	record
}

/// Small database with a few well known characters, blocks and ideographs.
pub fn sample_database() -> UnicodeDatabase {
	let mut characters = (0..0x20)
		.map(|code_point| character(code_point, code_point, Category::Control, None))
		.collect::<Vec<_>>();
	characters[0x09].name_aliases.push(NameAlias { name: "CHARACTER TABULATION".to_string(), kind: NameAliasKind::Control });
	characters[0x09].old_name = Some("HORIZONTAL TABULATION (HT)".to_string());
	characters[0x09].bidirectional_class = BidirectionalClass::SegmentSeparator;

	let mut space = character(0x20, 0x20, Category::SpaceSeparator, Some("SPACE"));
	space.bidirectional_class = BidirectionalClass::WhiteSpace;
	characters.push(space);

	let mut digit = character(0x30, 0x30, Category::DecimalDigitNumber, Some("DIGIT ZERO"));
	digit.numeric_type = NumericType::Decimal;
	digit.numeric_value = RationalNumber::new(0, 1).unwrap();
	digit.bidirectional_class = BidirectionalClass::EuropeanNumber;
	characters.push(digit);

	let mut capital_a = character(0x41, 0x41, Category::UppercaseLetter, Some("LATIN CAPITAL LETTER A"));
	capital_a.simple_lower_case_mapping = Some("a".to_string());
	capital_a.core_properties = CoreProperties::Alphabetic | CoreProperties::Uppercase;
	characters.push(capital_a);

	let mut acute = character(0x301, 0x301, Category::NonSpacingMark, Some("COMBINING ACUTE ACCENT"));
	acute.bidirectional_class = BidirectionalClass::NonspacingMark;
	acute.canonical_combining_class = CanonicalCombiningClass::A;
	acute.contributory_properties = ContributoryProperties::OtherGraphemeExtend;
	characters.push(acute);

	let mut tenth = character(0x2152, 0x2152, Category::OtherNumber, Some("VULGAR FRACTION ONE TENTH"));
	tenth.numeric_type = NumericType::Numeric;
	tenth.numeric_value = RationalNumber::new(1, 10).unwrap();
	tenth.decomposition = Some(Decomposition { tag: CompatibilityFormattingTag::Fraction, mapping: "1\u{2044}10".to_string() });
	characters.push(tenth);

	characters.push(character(0x3400, 0x4DBF, Category::OtherLetter, Some("CJK UNIFIED IDEOGRAPH")));
	characters.push(character(0x4E00, 0x9FFF, Category::OtherLetter, Some("CJK UNIFIED IDEOGRAPH")));
	characters.push(character(0xAC00, 0xD7A3, Category::OtherLetter, None));
	characters.push(character(0xE000, 0xF8FF, Category::PrivateUse, None));

	let block = |first, last, name: &str| BlockRecord { range: CodePointRange::new(first, last).unwrap(), name: name.to_string() };
	let blocks = vec![
		block(0x0000, 0x007F, "Basic Latin"),
		block(0x0300, 0x036F, "Combining Diacritical Marks"),
		block(0x2150, 0x218F, "Number Forms"),
		block(0x3400, 0x4DBF, "CJK Unified Ideographs Extension A"),
		block(0x4E00, 0x9FFF, "CJK Unified Ideographs"),
		block(0xAC00, 0xD7AF, "Hangul Syllables"),
		block(0xE000, 0xF8FF, "Private Use Area"),
	];

	let mut one = IdeographRecord::new(0x4E00);
	one.numeric_type = IdeographNumericType::Primary;
	one.numeric_value = 1;
	one.definition = Some("one; a, an; alone".to_string());
	one.mandarin_reading = Some("yī".to_string());
	one.cantonese_reading = Some("jat1".to_string());

	let mut east = IdeographRecord::new(0x6771);
	east.definition = Some("east, eastern, eastward".to_string());
	east.simplified_variant = Some("\u{4E1C}".to_string());

	UnicodeDatabase::new(UnicodeVersion::new(15, 1), characters, blocks, vec![IdeographRecord::new(0x3400), one, east]).unwrap()
}
