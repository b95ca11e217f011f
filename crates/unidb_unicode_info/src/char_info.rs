use crate::{
	data::*,
	hangul,
	properties::*,
};

/// Get the name of a code point from the record covering it.
///
/// Hangul syllables get their algorithmic name, ranges with a base name get the code point appended, e.g. "CJK UNIFIED IDEOGRAPH-4E01".
pub(crate) fn resolve_name(code_point: u32, record: Option<&CharacterRecord>) -> Option<String> {
	if hangul::is_hangul_syllable(code_point) {
		return hangul::name_for_hangul(code_point);
	}

	let record = record?;
	if record.range.is_single() {
		record.name.clone()
	} else {
		record.name.as_ref().map(|base| format!("{base}-{code_point:04X}"))
	}
}

/// Get text that can be used to display a code point.
///
/// Control characters and the space get their control picture (U+2400 + code point), nonspacing marks are combined with a dotted circle.
/// Code points that are not valid characters are displayed as U+FFFD.
pub(crate) fn display_text(code_point: u32, category: Category) -> String {
	if code_point <= 0x20 {
		return char::from_u32(0x2400 + code_point).unwrap_or(char::REPLACEMENT_CHARACTER).to_string();
	}

	let ch = char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
	if category == Category::NonSpacingMark {
		format!("\u{25CC}{ch}")
	} else {
		ch.to_string()
	}
}

/// All information about a single code point.
#[derive(Clone, Copy, Debug)]
pub struct CharInfo<'a> {
	code_point: u32,
	character:  Option<&'a CharacterRecord>,
	ideograph:  Option<&'a IdeographRecord>,
	block:      &'a str,
}

impl<'a> CharInfo<'a> {
	pub(crate) fn new(code_point: u32, character: Option<&'a CharacterRecord>, ideograph: Option<&'a IdeographRecord>, block: &'a str) -> Self {
		Self { code_point, character, ideograph, block }
	}

	pub fn code_point(&self) -> u32 {
		self.code_point
	}

	/// Check if the database has a character record covering the code point.
	pub fn is_assigned(&self) -> bool {
		self.character.is_some()
	}

	/// Get the character record covering the code point, this may be a range record.
	pub fn record(&self) -> Option<&'a CharacterRecord> {
		self.character
	}

	/// Get the Unihan record of the code point.
	pub fn ideograph(&self) -> Option<&'a IdeographRecord> {
		self.ideograph
	}

	/// Get the name of the block the code point is in, or "No_Block".
	pub fn block(&self) -> &'a str {
		self.block
	}

	pub fn name(&self) -> Option<String> {
		resolve_name(self.code_point, self.character)
	}

	pub fn name_aliases(&self) -> &'a [NameAlias] {
		self.character.map(|record| record.name_aliases.as_slice()).unwrap_or(&[])
	}

	pub fn category(&self) -> Category {
		self.character.map_or(Category::OtherNotAssigned, |record| record.category)
	}

	pub fn canonical_combining_class(&self) -> CanonicalCombiningClass {
		self.character.map_or(CanonicalCombiningClass::NotReordered, |record| record.canonical_combining_class)
	}

	/// Get the bidirectional class, `None` for code points without a record.
	pub fn bidirectional_class(&self) -> Option<BidirectionalClass> {
		self.character.map(|record| record.bidirectional_class)
	}

	pub fn decomposition(&self) -> Option<&'a Decomposition> {
		self.character.and_then(|record| record.decomposition.as_ref())
	}

	pub fn numeric_type(&self) -> NumericType {
		self.character.map_or(NumericType::None, |record| record.numeric_type)
	}

	/// Get the numeric value, `None` when the numeric type is `None`.
	pub fn numeric_value(&self) -> Option<RationalNumber> {
		self.character
			.filter(|record| record.numeric_type != NumericType::None)
			.map(|record| record.numeric_value)
	}

	pub fn is_bidirectional_mirrored(&self) -> bool {
		self.character.map_or(false, |record| record.bidirectional_mirrored)
	}

	/// Get the Unicode 1.0 name.
	pub fn old_name(&self) -> Option<&'a str> {
		self.character.and_then(|record| record.old_name.as_deref())
	}

	pub fn simple_upper_case_mapping(&self) -> Option<&'a str> {
		self.character.and_then(|record| record.simple_upper_case_mapping.as_deref())
	}

	pub fn simple_lower_case_mapping(&self) -> Option<&'a str> {
		self.character.and_then(|record| record.simple_lower_case_mapping.as_deref())
	}

	pub fn simple_title_case_mapping(&self) -> Option<&'a str> {
		self.character.and_then(|record| record.simple_title_case_mapping.as_deref())
	}

	pub fn contributory_properties(&self) -> ContributoryProperties {
		self.character.map_or(ContributoryProperties::none(), |record| record.contributory_properties)
	}

	pub fn core_properties(&self) -> CoreProperties {
		self.character.map_or(CoreProperties::none(), |record| record.core_properties)
	}

	/// Get the code points of related characters.
	pub fn cross_references(&self) -> &'a [u32] {
		self.character.map(|record| record.cross_references.as_slice()).unwrap_or(&[])
	}

	//--------------------------------------------------------------
	// Unihan

	pub fn ideograph_numeric_type(&self) -> IdeographNumericType {
		self.ideograph.map_or(IdeographNumericType::None, |record| record.numeric_type)
	}

	/// Get the numeric value of an ideograph, `None` when it has no numeric type.
	pub fn ideograph_numeric_value(&self) -> Option<i64> {
		self.ideograph
			.filter(|record| record.numeric_type != IdeographNumericType::None)
			.map(|record| record.numeric_value)
	}

	/// Get the English definition of an ideograph.
	pub fn definition(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.definition.as_deref())
	}

	pub fn mandarin_reading(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.mandarin_reading.as_deref())
	}

	pub fn cantonese_reading(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.cantonese_reading.as_deref())
	}

	pub fn japanese_kun_reading(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.japanese_kun_reading.as_deref())
	}

	pub fn japanese_on_reading(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.japanese_on_reading.as_deref())
	}

	pub fn korean_reading(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.korean_reading.as_deref())
	}

	pub fn hangul_reading(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.hangul_reading.as_deref())
	}

	pub fn vietnamese_reading(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.vietnamese_reading.as_deref())
	}

	pub fn simplified_variant(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.simplified_variant.as_deref())
	}

	pub fn traditional_variant(&self) -> Option<&'a str> {
		self.ideograph.and_then(|record| record.traditional_variant.as_deref())
	}

	/// Get text that can be used to display the character.
	pub fn display_text(&self) -> String {
		display_text(self.code_point, self.category())
	}
}
