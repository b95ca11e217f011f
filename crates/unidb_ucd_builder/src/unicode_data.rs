//! `UnicodeData.txt`: the main character properties.
//!
//! https://www.unicode.org/reports/tr44/#UnicodeData.txt

use std::io::BufRead;

use unidb_base::{EnumFromIndexT, EnumFromNameT};
use unidb_logging::{log_info, log_warning};
use unidb_unicode_info::*;

use crate::{
	builder::UnicodeInfoBuilder,
	error::{BuildError, Result},
	source::{self, Line},
	LOG_CAT,
};

pub const FILE: &str = "UnicodeData.txt";

const FIELD_COUNT: usize = 15;

/// Base names of the ranges whose code points are named `<base name>-<code point>`.
const RANGE_BASE_NAMES: [(&str, &str); 2] = [
	("CJK Ideograph", "CJK UNIFIED IDEOGRAPH"),
	("Tangut Ideograph", "TANGUT IDEOGRAPH"),
];

pub fn process<R: BufRead>(reader: R, builder: &mut UnicodeInfoBuilder) -> Result<()> {
	let mut range_start: Option<u32> = None;
	let mut count = 0;

	source::parse_lines(FILE, reader, |line| {
		let fields = line.text.split(';').collect::<Vec<_>>();
		if fields.len() != FIELD_COUNT {
			return Err(line.malformed(format!("expected {FIELD_COUNT} fields, found {}", fields.len())));
		}

		let code_point = line.code_point(fields[0])?;
		let mut range = CodePointRange::single(code_point);
		let label = fields[1];

		let name = if label.starts_with('<') && label.ends_with('>') {
			if label.ends_with(", First>") {
				if let Some(first) = range_start {
					return Err(BuildError::UnterminatedRange { file: FILE, first });
				}
				range_start = Some(code_point);
				return Ok(());
			} else if let Some(label) = label.strip_suffix(", Last>") {
				let first = range_start.take().ok_or_else(|| BuildError::UnmatchedRangeEnd { file: FILE, line: line.number })?;
				range = CodePointRange::new(first, code_point)
					.ok_or_else(|| BuildError::InvalidRange { file: FILE, line: line.number, text: format!("{first:04X}..{code_point:04X}") })?;
				range_base_name(&label[1..])
			} else if label == "<control>" {
				None
			} else {
				return Err(line.unknown("name label", label));
			}
		} else if let Some(first) = range_start {
			return Err(BuildError::UnterminatedRange { file: FILE, first });
		} else if label.is_empty() {
			None
		} else {
			Some(label.to_string())
		};

		let mut record = CharacterRecord::new(range, parse_bidirectional_class(&line, fields[4])?);
		record.name = name;
		record.category = Category::parse(fields[2]).ok_or_else(|| line.unknown("general category", fields[2]))?;
		record.canonical_combining_class = fields[3].parse::<usize>().ok()
			.and_then(CanonicalCombiningClass::from_idx)
			.ok_or_else(|| line.unknown("canonical combining class", fields[3]))?;
		record.decomposition = parse_decomposition(&line, fields[5])?;

		if let Some((numeric_type, numeric_value)) = parse_numeric(&line, fields[6], fields[7], fields[8])? {
			record.numeric_type = numeric_type;
			record.numeric_value = numeric_value;
		}

		record.bidirectional_mirrored = fields[9] == "Y";
		record.old_name = non_empty(fields[10]).map(str::to_string);
		// Field 11 (ISO comment) is always empty
		record.simple_upper_case_mapping = parse_case_mapping(&line, fields[12])?;
		record.simple_lower_case_mapping = parse_case_mapping(&line, fields[13])?;
		record.simple_title_case_mapping = parse_case_mapping(&line, fields[14])?;

		builder.insert(record)?;
		count += 1;
		Ok(())
	})?;

	if let Some(first) = range_start {
		return Err(BuildError::UnterminatedRange { file: FILE, first });
	}

	log_info!(LOG_CAT, "Parsed {count} character records from {FILE}");
	Ok(())
}

fn non_empty(s: &str) -> Option<&str> {
	if s.is_empty() { None } else { Some(s) }
}

fn range_base_name(label: &str) -> Option<String> {
	RANGE_BASE_NAMES.iter()
		.find(|(prefix, _)| label.starts_with(prefix))
		.map(|(_, base)| base.to_string())
}

fn parse_bidirectional_class(line: &Line, s: &str) -> Result<BidirectionalClass> {
	if s.is_empty() {
		return Err(line.malformed("missing bidirectional class"));
	}
	BidirectionalClass::parse(s).ok_or_else(|| line.unknown("bidirectional class", s))
}

/// Parse a decomposition like `<compat> 0020 0301` or `0041 0300`.
fn parse_decomposition(line: &Line, s: &str) -> Result<Option<Decomposition>> {
	if s.is_empty() {
		return Ok(None);
	}

	let (tag, mapping) = match s.strip_prefix('<') {
		Some(_) => {
			let (tag, mapping) = s.split_once(' ').ok_or_else(|| line.malformed(format!("decomposition without mapping '{s}'")))?;
			let tag = CompatibilityFormattingTag::parse(tag).ok_or_else(|| line.unknown("decomposition tag", tag))?;
			(tag, mapping)
		},
		None => (CompatibilityFormattingTag::Canonical, s),
	};

	Ok(Some(Decomposition { tag, mapping: source::code_points_to_string(line, mapping)? }))
}

/// Derive the numeric type and value from fields 6, 7 and 8.
///
/// A decimal digit has all 3 fields set to the same value, a digit has fields 7 and 8 set, any other number only field 8.
fn parse_numeric(line: &Line, decimal: &str, digit: &str, numeric: &str) -> Result<Option<(NumericType, RationalNumber)>> {
	if numeric.is_empty() {
		if !decimal.is_empty() || !digit.is_empty() {
			return Err(line.malformed("decimal or digit value without a numeric value"));
		}
		return Ok(None);
	}

	let numeric_type = if digit.is_empty() {
		if !decimal.is_empty() {
			return Err(line.malformed("decimal value without a digit value"));
		}
		NumericType::Numeric
	} else if digit != numeric {
		return Err(line.malformed(format!("digit value '{digit}' does not match numeric value '{numeric}'")));
	} else if decimal.is_empty() {
		NumericType::Digit
	} else if decimal != digit {
		return Err(line.malformed(format!("decimal value '{decimal}' does not match digit value '{digit}'")));
	} else {
		NumericType::Decimal
	};

	match numeric.parse::<RationalNumber>() {
		Ok(value) => Ok(Some((numeric_type, value))),
		Err(_) if is_large_fraction(numeric) => {
			log_warning!(LOG_CAT, "{FILE}:{}: numeric value '{numeric}' does not fit in a rational number, it is dropped", line.number);
			Ok(None)
		},
		Err(err) => Err(line.malformed(err)),
	}
}

/// Check for a valid fraction whose denominator does not fit in a byte, e.g. `1/320`.
fn is_large_fraction(s: &str) -> bool {
	match s.split_once('/') {
		Some((numerator, denominator)) => numerator.parse::<i64>().is_ok() && denominator.parse::<u64>().map_or(false, |den| den > u8::MAX as u64),
		None => false,
	}
}

fn parse_case_mapping(line: &Line, s: &str) -> Result<Option<String>> {
	non_empty(s).map(|s| source::code_points_to_string(line, s)).transpose()
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0009;<control>;Cc;0;S;;;;;N;CHARACTER TABULATION;;;;
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;LATIN CAPITAL LETTER A GRAVE;;;00E0;
0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING ACUTE;;;;
0F33;TIBETAN DIGIT HALF ZERO;No;0;L;;;;-1/2;N;;;;;
2150;VULGAR FRACTION ONE SEVENTH;No;0;ON;<fraction> 0031 2044 0037;;;1/7;N;;;;;
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
17000;<Tangut Ideograph, First>;Lo;0;L;;;;;N;;;;;
187F7;<Tangut Ideograph, Last>;Lo;0;L;;;;;N;;;;;
";

	fn parse(data: &str) -> Result<UnicodeInfoBuilder> {
		let mut builder = UnicodeInfoBuilder::new(UnicodeVersion::new(15, 1));
		process(data.as_bytes(), &mut builder)?;
		Ok(builder)
	}

	fn find(builder: &UnicodeInfoBuilder, code_point: u32) -> &CharacterRecord {
		builder.characters().iter().find(|record| record.range.contains(code_point)).unwrap()
	}

	#[test]
	fn controls_and_letters() {
		let builder = parse(SAMPLE).unwrap();

		let null = find(&builder, 0);
		assert_eq!(null.name, None);
		assert_eq!(null.old_name.as_deref(), Some("NULL"));
		assert_eq!(null.category, Category::Control);
		assert_eq!(null.bidirectional_class, BidirectionalClass::BoundaryNeutral);
		assert_eq!(find(&builder, 9).bidirectional_class, BidirectionalClass::SegmentSeparator);

		let a = find(&builder, 0x41);
		assert_eq!(a.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
		assert_eq!(a.simple_lower_case_mapping.as_deref(), Some("a"));
		assert_eq!(a.simple_upper_case_mapping, None);

		let small_a = find(&builder, 0x61);
		assert_eq!(small_a.simple_upper_case_mapping.as_deref(), Some("A"));
		assert_eq!(small_a.simple_title_case_mapping.as_deref(), Some("A"));

		let a_grave = find(&builder, 0xC0);
		let decomposition = a_grave.decomposition.as_ref().unwrap();
		assert_eq!(decomposition.tag, CompatibilityFormattingTag::Canonical);
		assert_eq!(decomposition.mapping, "A\u{300}");

		let acute = find(&builder, 0x301);
		assert_eq!(acute.canonical_combining_class, CanonicalCombiningClass::A);
		assert_eq!(acute.category, Category::NonSpacingMark);
	}

	#[test]
	fn numeric_fields() {
		let builder = parse(SAMPLE).unwrap();

		let zero = find(&builder, 0x30);
		assert_eq!(zero.numeric_type, NumericType::Decimal);
		assert_eq!(zero.numeric_value, RationalNumber::new(0, 1).unwrap());

		let half = find(&builder, 0xBD);
		assert_eq!(half.numeric_type, NumericType::Numeric);
		assert_eq!(half.numeric_value, RationalNumber::new(1, 2).unwrap());
		assert_eq!(half.decomposition.as_ref().unwrap().tag, CompatibilityFormattingTag::Fraction);

		assert_eq!(find(&builder, 0xF33).numeric_value, RationalNumber::new(-1, 2).unwrap());
		assert_eq!(find(&builder, 0x41).numeric_type, NumericType::None);

		let line = Line { file: FILE, number: 1, text: "" };
		assert_eq!(parse_numeric(&line, "", "1", "1").unwrap().map(|(ty, _)| ty), Some(NumericType::Digit));
		assert!(parse_numeric(&line, "", "1", "2").is_err());
		assert!(parse_numeric(&line, "1", "1", "").is_err());
		assert!(parse_numeric(&line, "2", "1", "1").is_err());
		assert!(parse_numeric(&line, "1", "", "1").is_err());
		assert_eq!(parse_numeric(&line, "", "", "1/320").unwrap(), None);
		assert!(parse_numeric(&line, "", "", "one").is_err());
	}

	#[test]
	fn ranges() {
		let builder = parse(SAMPLE).unwrap();

		let ext_a = find(&builder, 0x3500);
		assert_eq!(ext_a.range, CodePointRange::new(0x3400, 0x4DBF).unwrap());
		assert_eq!(ext_a.name.as_deref(), Some("CJK UNIFIED IDEOGRAPH"));

		let hangul = find(&builder, 0xAC00);
		assert_eq!(hangul.range, CodePointRange::new(0xAC00, 0xD7A3).unwrap());
		assert_eq!(hangul.name, None);

		assert_eq!(find(&builder, 0x17000).name.as_deref(), Some("TANGUT IDEOGRAPH"));
	}

	#[test]
	fn out_of_order() {
		let data = format!("{SAMPLE}00B9;SUPERSCRIPT ONE;No;0;EN;<super> 0031;;1;1;N;SUPERSCRIPT DIGIT ONE;;;;\n");
		assert!(matches!(parse(&data), Err(BuildError::Overlap(0xB9))));
	}

	#[test]
	fn range_errors() {
		let unterminated = "3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;\n";
		assert!(matches!(parse(unterminated), Err(BuildError::UnterminatedRange { first: 0x3400, .. })));

		let interrupted = format!("{unterminated}3500;SOMETHING;Lo;0;L;;;;;N;;;;;\n");
		assert!(matches!(parse(&interrupted), Err(BuildError::UnterminatedRange { first: 0x3400, .. })));

		let unmatched = "4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;\n";
		assert!(matches!(parse(unmatched), Err(BuildError::UnmatchedRangeEnd { line: 1, .. })));

		let label = "0000;<something>;Cc;0;BN;;;;;N;;;;;\n";
		assert!(matches!(parse(label), Err(BuildError::UnknownValue { kind: "name label", .. })));
	}

	#[test]
	fn field_errors() {
		assert!(matches!(parse("0041;A;Lu;0;L\n"), Err(BuildError::Malformed { line: 1, .. })));
		assert!(matches!(parse("0041;A;Xx;0;L;;;;;N;;;;;\n"), Err(BuildError::UnknownValue { kind: "general category", .. })));
		assert!(matches!(parse("0041;A;Lu;3;L;;;;;N;;;;;\n"), Err(BuildError::UnknownValue { kind: "canonical combining class", .. })));
		assert!(matches!(parse("0041;A;Lu;0;;;;;;N;;;;;\n"), Err(BuildError::Malformed { .. })));
		assert!(matches!(parse("0041;A;Lu;0;XX;;;;;N;;;;;\n"), Err(BuildError::UnknownValue { kind: "bidirectional class", .. })));
		assert!(matches!(parse("0041;A;Lu;0;L;<bogus> 0041;;;;N;;;;;\n"), Err(BuildError::UnknownValue { kind: "decomposition tag", .. })));
		assert!(matches!(parse("ZZZZ;A;Lu;0;L;;;;;N;;;;;\n"), Err(BuildError::Malformed { .. })));
	}
}
