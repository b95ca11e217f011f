//! Enumerated and flag properties of unicode characters.
//!
//! Every enumeration is `#[repr(u8)]`, its discriminant is the byte stored in the database.
//!
//! Official info:
//! https://www.unicode.org/reports/tr44/

use unidb_common_macros::{flags, EnumCount, EnumFromIndex, EnumFromName, EnumToName};

/// Unicode general category
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, EnumCount, EnumFromIndex, EnumFromName, EnumToName)]
pub enum Category {
	/// Lu: An upper case letter.
	#[parse_name("Lu")]
	UppercaseLetter = 0,
	/// Ll: A lowercase letter.
	#[parse_name("Ll")]
	LowercaseLetter = 1,
	/// Lt: A digraph encoded as a signle character, with first part uppercase.
	#[parse_name("Lt")]
	TitlecaseLetter = 2,
	/// Lm: A modifier letter.
	#[parse_name("Lm")]
	ModifierLetter = 3,
	/// Lo: Other Letters, including syllables and ideographs.
	#[parse_name("Lo")]
	OtherLetter = 4,
	/// Mn: A nonspacing combining mark (zero advance width).
	#[parse_name("Mn")]
	NonSpacingMark = 5,
	/// Mc: A spacing combining mark (positive advance width).
	#[parse_name("Mc")]
	SpacingCombiningMark = 6,
	/// Me: An enclosing combining mark.
	#[parse_name("Me")]
	EnclosingMark = 7,
	/// Nd: A decimal digit.
	#[parse_name("Nd")]
	DecimalDigitNumber = 8,
	/// Nl: A letterlike numeric character.
	#[parse_name("Nl")]
	LetterNumber = 9,
	/// No: A numeric character of other type.
	#[parse_name("No")]
	OtherNumber = 10,
	/// Zs: A space character (of various non-zero widths).
	#[parse_name("Zs")]
	SpaceSeparator = 11,
	/// Zl: U+2028 LINE SEPARATOR only.
	#[parse_name("Zl")]
	LineSeparator = 12,
	/// Zp: U+2029 PARAGRAPH SEPARATOR only.
	#[parse_name("Zp")]
	ParagraphSeparator = 13,
	/// Cc: A C0 or C1 control code.
	#[parse_name("Cc")]
	Control = 14,
	/// Cf: A format control character.
	#[parse_name("Cf")]
	Format = 15,
	/// Cs: A surrogate code point.
	#[parse_name("Cs")]
	Surrogate = 16,
	/// Co: A private-use character.
	#[parse_name("Co")]
	PrivateUse = 17,
	/// Pc: A connecting punctuation mark, like a tie.
	#[parse_name("Pc")]
	ConnectorPunctuation = 18,
	/// Pd: A dash or hyphen punctuation mark.
	#[parse_name("Pd")]
	DashPunctuation = 19,
	/// Ps: An opening punctuation mark (of a pair).
	#[parse_name("Ps")]
	OpenPunctuation = 20,
	/// Pe: A closing punctuation mark (of a pair).
	#[parse_name("Pe")]
	ClosePunctuation = 21,
	/// Pi: An initial quotiation mark.
	#[parse_name("Pi")]
	InitialQuotePunctuation = 22,
	/// Pf: A final quotation mark.
	#[parse_name("Pf")]
	FinalQuotePunctuation = 23,
	/// Po: A punctuation mark of other type.
	#[parse_name("Po")]
	OtherPunctuation = 24,
	/// Sm: A symbol of mathematical use.
	#[parse_name("Sm")]
	MathSymbol = 25,
	/// Sc: A currency sign.
	#[parse_name("Sc")]
	CurrencySymbol = 26,
	/// Sk: A non-letterlike modifier symbol.
	#[parse_name("Sk")]
	ModifierSymbol = 27,
	/// So: A symbol of other type.
	#[parse_name("So")]
	OtherSymbol = 28,
	/// Cn: A reserved unassigned code point or a noncharacter.
	#[default]
	#[parse_name("Cn")]
	OtherNotAssigned = 29,
}

impl Category {
	/// Is the category one of the letter categories (L)?
	pub fn is_letter(self) -> bool {
		(self as u8) <= Category::OtherLetter as u8
	}

	/// Is the category one of the mark categories (M)?
	pub fn is_mark(self) -> bool {
		matches!(self, Category::NonSpacingMark | Category::SpacingCombiningMark | Category::EnclosingMark)
	}

	/// Is the category one of the number categories (N)?
	pub fn is_number(self) -> bool {
		matches!(self, Category::DecimalDigitNumber | Category::LetterNumber | Category::OtherNumber)
	}

	/// Is the category one of the punctuation categories (P)?
	pub fn is_punctuation(self) -> bool {
		(Category::ConnectorPunctuation as u8..=Category::OtherPunctuation as u8).contains(&(self as u8))
	}

	/// Is the category one of the symbol categories (S)?
	pub fn is_symbol(self) -> bool {
		(Category::MathSymbol as u8..=Category::OtherSymbol as u8).contains(&(self as u8))
	}

	/// Is the category one of the separator categories (Z)?
	pub fn is_separator(self) -> bool {
		matches!(self, Category::SpaceSeparator | Category::LineSeparator | Category::ParagraphSeparator)
	}
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, EnumFromIndex)]
pub enum CanonicalCombiningClass {
	///Spacing and enclosing marks, also many vowel and consonant signs, even if nonspacing.
	#[default]
	NotReordered = 0,
	/// Marks which overlay a base letter or symbol
	Overlay      = 1,
	/// Diacritic reading marks for CJK unified ideographs,
	HanReading   = 6,
	/// Diacritic Nukta marks in Brahmi-derived scripts.
	Nukta        = 7,
	/// Hiragana/Katakan voicing marks.
	KanaVoicing  = 8,
	/// Viramas
	Virama       = 9,
	/// Start of fixed position classes
	Ccc10        = 10,
	Ccc11        = 11,
	Ccc12        = 12,
	Ccc13        = 13,
	Ccc14        = 14,
	Ccc15        = 15,
	Ccc16        = 16,
	Ccc17        = 17,
	Ccc18        = 18,
	Ccc19        = 19,
	Ccc20        = 20,
	Ccc21        = 21,
	Ccc22        = 22,
	Ccc23        = 23,
	Ccc24        = 24,
	Ccc25        = 25,
	Ccc26        = 26,
	Ccc27        = 27,
	Ccc28        = 28,
	Ccc29        = 29,
	Ccc30        = 30,
	Ccc31        = 31,
	Ccc32        = 32,
	Ccc33        = 33,
	Ccc34        = 34,
	Ccc35        = 35,
	Ccc36        = 36,
	Ccc84        = 84,
	Ccc91        = 91,
	Ccc103       = 103,
	Ccc107       = 107,
	Ccc118       = 118,
	Ccc122       = 122,
	Ccc129       = 129,
	Ccc130       = 130,
	Ccc132       = 132,
	Ccc133       = 133, // Reserved
	/// Marks attached at the bottom Left.
	Atbl         = 200,
	/// Marks attached at the bottom.
	Atb          = 202,
	/// Marks attached directly above.
	Ata          = 214,
	/// Marks attached at the top right.
	Atar         = 216,
	/// Distinct marks at the bottom left.
	Bl           = 218,
	/// Distinct marks directly below.
	B            = 220,
	/// Distinct marks at the bottom right.
	Br           = 222,
	/// Distinct marks to the left.
	L            = 224,
	/// Distinct marks to the right
	R            = 226,
	/// Distinct marks at the top left.
	Al           = 228,
	/// Distinct marks directly above.
	A            = 230,
	/// Distinct marks at the top right.
	Ar           = 232,
	/// Distinct marks subtending two bases.
	Db           = 233,
	/// Distinct marks extending above two bases.
	Da           = 234,
	/// Greek iota subscript only
	Is           = 240,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumCount, EnumFromIndex, EnumFromName, EnumToName)]
pub enum BidirectionalClass {
	/// Any strong left-to-right characters (Strong type).
	#[parse_name("L")]
	LeftToRight,
	/// Any strong right-to-left (non-Arabic type) character (Strong type).
	#[parse_name("R")]
	RightToLeft,
	/// Any strong right-to-left (Arabic type) character (Strong type).
	#[parse_name("AL")]
	ArabicLetter,
	/// Any ASCII digit or Eastern Arabic-Indic digit (Weak type).
	#[parse_name("EN")]
	EuropeanNumber,
	/// Plus and minus signs (Weak type).
	#[parse_name("ES")]
	EuropeanSeparator,
	/// A terminator in a numeric format context, includes currency signs (Weak type).
	#[parse_name("ET")]
	EuropeanTerminator,
	/// Any Arabic-Indic digit (Weak type).
	#[parse_name("AN")]
	ArabicNumber,
	/// Commas, colons, and slashes (Weak type).
	#[parse_name("CS")]
	CommonSeparator,
	/// Any nonspacing mark (Weak type).
	#[parse_name("NSM")]
	NonspacingMark,
	/// Most format charactes, control codes, or noncharacters (Weak type).
	#[parse_name("BN")]
	BoundaryNeutral,
	/// Various newline characters (Neutral type).
	#[parse_name("B")]
	ParagraphSeparator,
	/// Various segment-related (Neutral type).
	#[parse_name("S")]
	SegmentSeparator,
	/// Spaces (Neutral type).
	#[parse_name("WS")]
	WhiteSpace,
	/// Most other symbols and punctuation marks (Neutral type).
	#[parse_name("ON")]
	OtherNeutral,
	/// U+202A: the LR embedding control (Explicit formatting types).
	#[parse_name("LRE")]
	LeftToRightEmbedding,
	/// U+202D: The LR override control (Explicit formatting types).
	#[parse_name("LRO")]
	LeftToRightOverride,
	/// U+202B: The RL embedding control (Explicit formatting types).
	#[parse_name("RLE")]
	RightToLeftEmbedding,
	/// U+202E: The RL override control (Explicit formatting types).
	#[parse_name("RLO")]
	RightToLeftOverride,
	/// U+202C: Terminates an embedding or override control (Explicit formatting types).
	#[parse_name("PDF")]
	PopDirectionalFormat,
	/// U+2066: The LR isolate control (Explicit formatting types).
	#[parse_name("LRI")]
	LeftToRightIsolate,
	/// U+2067: The RL isolate control (Explicit formatting types).
	#[parse_name("RLI")]
	RightToLeftIsolate,
	/// U+2068: The first strong isolate control (Explicit formatting types).
	#[parse_name("FSI")]
	FirstStrongIsolate,
	/// U+2069: Terminates an isolate control (Explicit formatting types).
	#[parse_name("PDI")]
	PopDirectionalIsolate,
}

/// Tag of a decomposition mapping, `Canonical` when the mapping has no `<tag>` prefix.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumCount, EnumFromIndex, EnumFromName, EnumToName)]
pub enum CompatibilityFormattingTag {
	#[default]
	#[parse_name("")]
	Canonical,
	/// Font variant (e.g. a blackletter form).
	#[parse_name("<font>")]
	Font,
	/// No-break version of a space or hyphen.
	#[parse_name("<noBreak>")]
	NoBreak,
	/// Initial presentation form (Arabic).
	#[parse_name("<initial>")]
	Initial,
	/// Medial presentation form (Arabic).
	#[parse_name("<medial>")]
	Medial,
	/// Final presentation form (Arabic).
	#[parse_name("<final>")]
	Final,
	/// Isolated presentation form (Arabic).
	#[parse_name("<isolated>")]
	Isolated,
	/// Encircled form.
	#[parse_name("<circle>")]
	Circle,
	/// Superscript form.
	#[parse_name("<super>")]
	Super,
	/// Subscript form.
	#[parse_name("<sub>")]
	Sub,
	/// Vertical layout presentation form.
	#[parse_name("<vertical>")]
	Vertical,
	/// Wide (or zenkaku) compatibility character.
	#[parse_name("<wide>")]
	Wide,
	/// Narrow (or hankaku) compatibility character.
	#[parse_name("<narrow>")]
	Narrow,
	/// Small variant form (CNS compatibility).
	#[parse_name("<small>")]
	Small,
	/// CJK squared font variant.
	#[parse_name("<square>")]
	Square,
	/// Vulgar fraction form.
	#[parse_name("<fraction>")]
	Fraction,
	/// Otherwise unspecified compatibility character.
	#[parse_name("<compat>")]
	Compat,
}

/// Numeric type of a character, derived from fields 6 to 8 of `UnicodeData.txt`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumFromIndex, EnumFromName, EnumToName)]
pub enum NumericType {
	#[default]
	None,
	Decimal,
	Digit,
	Numeric,
}

/// Numeric type of a CJK ideograph, from `Unihan_NumericValues.txt`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumFromIndex, EnumFromName, EnumToName)]
pub enum IdeographNumericType {
	#[default]
	None,
	/// kPrimaryNumeric
	#[parse_name("kPrimaryNumeric")]
	Primary,
	/// kAccountingNumeric
	#[parse_name("kAccountingNumeric")]
	Accounting,
	/// kOtherNumeric
	#[parse_name("kOtherNumeric")]
	Other,
}

/// Kind of a formal name alias, from `NameAliases.txt`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumCount, EnumFromIndex, EnumFromName, EnumToName)]
pub enum NameAliasKind {
	/// Corrections for serious problems in the character names.
	#[parse_name("correction")]
	Correction,
	/// ISO 6429 names for C0 and C1 control functions, and other commonly occurring names for control codes.
	#[parse_name("control")]
	Control,
	/// A few widely used alternate names for format characters.
	#[parse_name("alternate")]
	Alternate,
	/// Several documented labels for C1 control code points which were never actually approved in any standard.
	#[parse_name("figment")]
	Figment,
	/// Commonly occurring abbreviations (or acronyms) for control codes, format characters, spaces, and variation selectors.
	#[parse_name("abbreviation")]
	Abbreviation,
}

/// Contributory properties, from `PropList.txt`.
///
/// Only these properties are stored, any other property in the file is ignored.
#[flags(u32, parse_from_name)]
pub enum ContributoryProperties {
	/// An ASCII character commonly used for the representation fo hexadecimal character.
	#[parse_name("ASCII_Hex_Digit")]
	AsciiHexDigit,
	/// Format control characters which have specific functions in the Unicode Bidirectional Algorithm.
	#[parse_name("Bidi_Control")]
	BidiControl,
	/// Punctuation characters explicitly called out as dashes in the Unicode Standard, plus their compatibility equivalents.
	/// Most of these have the GeneralCategory value `Pd`, but some have the GeneralCategory value `SM` because of their use in mathematics.
	Dash,
	/// For a machine-readable list of deprecated charactes.
	/// No characters will ever be removed from the standard, but the usage of deprecated characters is strongly discourages.
	Deprecated,
	/// Characters that linguistically modify the meaning of another characterss to which they apply.
	/// Some diacritics are not combining characters, and some combining characters are not diacritics.
	Diacritic,
	/// Characters whose principal function is to extend the value of a preceding alphabetic character or to extend the shape of adjacent characters.
	/// Typical of these are length marks, iteration marks, and the Arabic tatweel.
	Extender,
	/// Characters commonly used for the representation of hexadecimal numbers, plus their compatiblity equivalents.
	#[parse_name("Hex_Digit")]
	HexDigit,
	/// Characters considered CJKV (Chinenese, Japanese, Korean and Vietnamese) or other sinoform (Chinese writing-related) ideographs.
	Ideographic,
	#[parse_name("IDS_Binary_Operator")]
	IdsBinaryOperator,
	#[parse_name("IDS_Trinary_Operator")]
	IdsTrinaryOperator,
	/// Format control characters which have specific functions for control of cursive joining and ligation.
	#[parse_name("Join_Control")]
	JoinControl,
	/// A small number of spacing vowel letters occuring in certain Southeast Asian scripts such as Thai and Loa, which use a visual order display model.
	#[parse_name("Logical_Order_Exception")]
	LogicalOrderException,
	/// Code points permanently reserved for internal use.
	#[parse_name("Noncharacter_Code_Point")]
	NoncharacterCodePoint,
	/// Used in deriving `Alphabetic` property.
	#[parse_name("Other_Alphabetic")]
	OtherAlphabetic,
	/// Used in dreiving the `DeafultIgnorableCodePoint` property.
	#[parse_name("Other_Default_Ignorable_Code_Point")]
	OtherDefaultIgnorableCodePoint,
	/// Used in dreiving the `GraphemeExtend` property.
	#[parse_name("Other_Grapheme_Extend")]
	OtherGraphemeExtend,
	/// Used to maintin backward compatibility of `IDContinue`.
	#[parse_name("Other_ID_Continue")]
	OtherIdContinue,
	/// Used to maintin backward compatibility of `IDStart`.
	#[parse_name("Other_ID_Start")]
	OtherIdStart,
	/// Used in dreiving the `Lowercase` property.
	#[parse_name("Other_Lowercase")]
	OtherLowercase,
	/// Used in dreiving the `Math` property.
	#[parse_name("Other_Math")]
	OtherMath,
	/// Used in dreiving the `Uppercase` property.
	#[parse_name("Other_Uppercase")]
	OtherUppercase,
	/// Used for pattern syntax.
	#[parse_name("Pattern_Syntax")]
	PatternSyntax,
	/// Used for pattern syntax.
	#[parse_name("Pattern_White_Space")]
	PatternWhiteSpace,
	/// Punctuation characters that function as quotation marks.
	#[parse_name("Quotation_Mark")]
	QuotationMark,
	/// Used in the definition of Ideographic Description Sequences.
	Radical,
	/// Charactes with a "soft dot", like `i` or `j`. An accent placed on these characters causes the dot to disappear.
	#[parse_name("Soft_Dotted")]
	SoftDotted,
	/// Punctuation characters that generally mark the end of sentences.
	#[parse_name("Sentence_Terminal")]
	SentenceTerminal,
	/// Punctuation characters that generally mark the end of textual units.
	#[parse_name("Terminal_Punctuation")]
	TerminalPunctuation,
	/// A property which specified the exact set of Unified CJK Ideographs in the standard.
	#[parse_name("Unified_Ideograph")]
	UnifiedIdeograph,
	/// Indicates characters that are Variation Selectors.
	#[parse_name("Variation_Selector")]
	VariationSelector,
	/// Spaces, separator charactes and other control characters which should be treated by programming langauges as "white space" for the purpose of parsing elements.
	#[parse_name("White_Space")]
	WhiteSpace,
	/// Property of the regional indicator characters, U+1F1E6..=U+1F1FF.
	#[parse_name("Regional_Indicator")]
	RegionalIndicator,
}

/// Derived core properties, from `DerivedCoreProperties.txt`.
///
/// Stored as a 24-bit value.
#[flags(u32, parse_from_name)]
pub enum CoreProperties {
	/// Characters with a lowercase property.
	///
	/// Generated from: `category=Ll + flag=Other_Lowercase`
	Lowercase,
	/// Charcters with an uppercase property.
	///
	/// Generated from: `category=Lu + flag=Other_Uppercase`
	Uppercase,
	/// Characters which are considered to be either uppercase, lowercase, or titlecase characters.
	///
	/// Generated from: `Lowercase + Uppercase + category=Lt`
	Cased,
	/// Characters which are ignored for casing pruposes.
	#[parse_name("Case_Ignorable")]
	CaseIgnorable,
	/// Characters whose normalized forms are not stabel under a to_lower mapping.
	#[parse_name("Changes_When_Lowercased")]
	ChangesWhenLowercased,
	/// Characters whose normalized forms are not stable under a to_upper mapping.
	#[parse_name("Changes_When_Uppercased")]
	ChangesWhenUppercased,
	/// Characters whose normalized forms are not stable under a to_title mapping.
	#[parse_name("Changes_When_Titlecased")]
	ChangesWhenTitlecased,
	/// Characters whose normalized forms are not stable under case folding.
	#[parse_name("Changes_When_Casefolded")]
	ChangesWhenCasefolded,
	/// Characters which may change when they undergo case mapping.
	#[parse_name("Changes_When_Casemapped")]
	ChangesWhenCasemapped,
	/// Characters with the Alphabetic property.
	///
	/// Generated from: `Lowercase + Uppercase + Category=[Lt + Lm + Lo + Nl] + flag=Other_Alphabetic`
	Alphabetic,
	/// For programmatic determination of default ignorable code points.
	#[parse_name("Default_Ignorable_Code_Point")]
	DefaultIgnorableCodePoint,
	/// Property used together with the definition of Standard Korean Syllabled Block to ddefine "Grapheme base".
	#[parse_name("Grapheme_Base")]
	GraphemeBase,
	/// Property used to define "Grapheme extender".
	#[parse_name("Grapheme_Extend")]
	GraphemeExtend,
	#[parse_name("Grapheme_Link")]
	GraphemeLink,
	/// Characters with the Math property.
	///
	/// Generated from: Category=Sm + flag=OtherMath
	Math,
	#[parse_name("ID_Start")]
	IdStart,
	#[parse_name("ID_Continue")]
	IdContinue,
	#[parse_name("XID_Start")]
	XidStart,
	#[parse_name("XID_Continue")]
	XidContinue,
}

impl CoreProperties {
	/// Mask of the bits that fit in the stored 24-bit value.
	pub const STORED_MASK: u32 = 0x00FF_FFFF;
}

#[cfg(test)]
mod tests {
	use unidb_base::{EnumCountT, EnumFromIndexT, EnumFromNameT, EnumToNameT};
	use super::*;

	fn check_names<T: EnumCountT + EnumFromIndexT + EnumFromNameT + EnumToNameT + PartialEq + core::fmt::Debug>() {
		for idx in 0..T::COUNT {
			let val = T::from_idx(idx).unwrap();
			assert_eq!(T::parse(val.name()), Some(val));
		}
		assert!(T::from_idx(T::COUNT).is_none());
	}

	#[test]
	fn names_round_trip() {
		check_names::<Category>();
		check_names::<BidirectionalClass>();
		check_names::<CompatibilityFormattingTag>();
		check_names::<NameAliasKind>();
	}

	#[test]
	fn category_codes() {
		assert_eq!(Category::parse("Lu"), Some(Category::UppercaseLetter));
		assert_eq!(Category::parse("Cn"), Some(Category::OtherNotAssigned));
		assert_eq!(Category::parse("LC"), None);
		assert_eq!(Category::from_idx(8), Some(Category::DecimalDigitNumber));
		assert_eq!(Category::from_idx(30), None);
		assert_eq!(Category::NonSpacingMark.name(), "Mn");
		assert_eq!(Category::default(), Category::OtherNotAssigned);
	}

	#[test]
	fn category_groups() {
		assert!(Category::ModifierLetter.is_letter());
		assert!(!Category::NonSpacingMark.is_letter());
		assert!(Category::EnclosingMark.is_mark());
		assert!(Category::FinalQuotePunctuation.is_punctuation());
		assert!(Category::OtherSymbol.is_symbol());
		assert!(!Category::OtherNotAssigned.is_symbol());
		assert!(Category::LetterNumber.is_number());
		assert!(Category::LineSeparator.is_separator());
	}

	#[test]
	fn combining_class_from_byte() {
		assert_eq!(CanonicalCombiningClass::from_idx(230), Some(CanonicalCombiningClass::A));
		assert_eq!(CanonicalCombiningClass::from_idx(7), Some(CanonicalCombiningClass::Nukta));
		assert_eq!(CanonicalCombiningClass::from_idx(2), None);
		assert_eq!(CanonicalCombiningClass::Is as u8, 240);
	}

	#[test]
	fn bidi_names() {
		assert_eq!(BidirectionalClass::parse("NSM"), Some(BidirectionalClass::NonspacingMark));
		assert_eq!(BidirectionalClass::PopDirectionalIsolate.name(), "PDI");
		assert_eq!(BidirectionalClass::from_idx(BidirectionalClass::WhiteSpace as usize), Some(BidirectionalClass::WhiteSpace));
	}

	#[test]
	fn decomposition_tags() {
		assert_eq!(CompatibilityFormattingTag::parse("<noBreak>"), Some(CompatibilityFormattingTag::NoBreak));
		assert_eq!(CompatibilityFormattingTag::Fraction.name(), "<fraction>");
		assert_eq!(CompatibilityFormattingTag::from_idx(17), None);
	}

	#[test]
	fn flag_names() {
		assert_eq!(ContributoryProperties::parse("White_Space"), Some(ContributoryProperties::WhiteSpace));
		assert_eq!(ContributoryProperties::parse("Hyphen"), None);
		assert_eq!(ContributoryProperties::RegionalIndicator.bits(), 1 << 31);
		assert_eq!(CoreProperties::parse("Grapheme_Link"), Some(CoreProperties::GraphemeLink));
		assert_eq!(CoreProperties::all().bits() & !CoreProperties::STORED_MASK, 0);
	}

	#[test]
	fn alias_kinds() {
		assert_eq!(NameAliasKind::parse("figment"), Some(NameAliasKind::Figment));
		assert_eq!(NameAliasKind::Abbreviation.name(), "abbreviation");
		assert_eq!(NameAliasKind::from_idx(5), None);
	}
}
