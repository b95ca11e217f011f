//! Unihan database files: `Unihan_NumericValues.txt`, `Unihan_Readings.txt` and `Unihan_Variants.txt`.
//!
//! Every line is `U+XXXX<tab>kField<tab>value`, fields that are not stored are skipped.

use std::io::BufRead;

use unidb_base::EnumFromNameT;
use unidb_logging::{log_info, log_warning};
use unidb_unicode_info::{codec::ideograph_index, IdeographNumericType, IdeographRecord};

use crate::{
	builder::UnicodeInfoBuilder,
	error::Result,
	source::{self, Line},
	LOG_CAT,
};

pub const NUMERIC_VALUES_FILE: &str = "Unihan_NumericValues.txt";
pub const READINGS_FILE: &str = "Unihan_Readings.txt";
pub const VARIANTS_FILE: &str = "Unihan_Variants.txt";

/// Unihan fields stored as strings.
const STRING_FIELDS: [&str; 10] = [
	"kDefinition", "kMandarin", "kCantonese", "kJapaneseKun", "kJapaneseOn", "kKorean", "kHangul", "kVietnamese",
	"kSimplifiedVariant", "kTraditionalVariant",
];

/// Get the string slot of a record for a Unihan field.
fn string_field<'a>(record: &'a mut IdeographRecord, field: &str) -> Option<&'a mut Option<String>> {
	match field {
		"kDefinition" => Some(&mut record.definition),
		"kMandarin" => Some(&mut record.mandarin_reading),
		"kCantonese" => Some(&mut record.cantonese_reading),
		"kJapaneseKun" => Some(&mut record.japanese_kun_reading),
		"kJapaneseOn" => Some(&mut record.japanese_on_reading),
		"kKorean" => Some(&mut record.korean_reading),
		"kHangul" => Some(&mut record.hangul_reading),
		"kVietnamese" => Some(&mut record.vietnamese_reading),
		"kSimplifiedVariant" => Some(&mut record.simplified_variant),
		"kTraditionalVariant" => Some(&mut record.traditional_variant),
		_ => None,
	}
}

fn is_variant_field(field: &str) -> bool {
	matches!(field, "kSimplifiedVariant" | "kTraditionalVariant")
}

/// Render a list of variants like `U+4E1C U+200D9<kMeyerWempe` as the variant characters.
fn parse_variants(line: &Line, value: &str) -> Result<String> {
	value.split_whitespace()
		.map(|variant| {
			let hex = variant.split_once('<').map_or(variant, |(hex, _)| hex);
			let code_point = line.code_point(hex)?;
			char::from_u32(code_point).ok_or_else(|| line.malformed(format!("invalid variant '{variant}'")))
		})
		.collect()
}

/// Parse the first value of a numeric field, some characters list more than one value.
fn parse_numeric_value(line: &Line, value: &str) -> Result<i64> {
	let first = value.split_whitespace().next().unwrap_or_default();
	first.parse().map_err(|_| line.malformed(format!("invalid numeric value '{value}'")))
}

/// Process one of the Unihan files.
pub fn process<R: BufRead>(file: &'static str, reader: R, builder: &mut UnicodeInfoBuilder) -> Result<()> {
	let mut count = 0;
	let mut unpackable = 0;

	source::parse_lines(file, reader, |line| {
		let fields = line.text.split('\t').collect::<Vec<_>>();
		if fields.len() != 3 {
			return Err(line.malformed(format!("expected 3 tab separated fields, found {}", fields.len())));
		}

		let code_point = line.code_point(fields[0])?;
		let (field, value) = (fields[1], fields[2].trim());

		let numeric_type = IdeographNumericType::parse(field).filter(|ty| *ty != IdeographNumericType::None);
		if (numeric_type.is_none() && !STRING_FIELDS.contains(&field)) || value.is_empty() {
			return Ok(());
		}

		if !ideograph_index::is_packable(code_point) {
			unpackable += 1;
			return Ok(());
		}

		if let Some(numeric_type) = numeric_type {
			let numeric_value = parse_numeric_value(&line, value)?;
			let record = builder.ideograph_mut(code_point);
			record.numeric_type = numeric_type;
			record.numeric_value = numeric_value;
		} else {
			let value = if is_variant_field(field) { parse_variants(&line, value)? } else { value.to_string() };
			if let Some(slot) = string_field(builder.ideograph_mut(code_point), field) {
				*slot = Some(value);
			}
		}
		count += 1;
		Ok(())
	})?;

	if unpackable > 0 {
		log_warning!(LOG_CAT, "{file}: skipped {unpackable} entries for code points outside of the ideograph ranges");
	}
	log_info!(LOG_CAT, "Applied {count} Unihan entries from {file}");
	Ok(())
}
