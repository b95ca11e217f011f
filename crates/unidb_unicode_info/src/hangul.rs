//! Algorithmic names of precomposed Hangul syllables.
//!
//! https://www.unicode.org/versions/latest/ch03.pdf#G56669

const S_BASE: u32 = 0xAC00;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = 19 * N_COUNT;

/// Jamo short names of the leading consonants.
const JAMO_L: [&str; 19] = [
	"G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P", "H",
];

/// Jamo short names of the vowels.
const JAMO_V: [&str; V_COUNT as usize] = [
	"A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE", "WI", "YU", "EU", "YI", "I",
];

/// Jamo short names of the trailing consonants, the first entry means no trailing consonant.
const JAMO_T: [&str; T_COUNT as usize] = [
	"", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M", "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// Is the code point a precomposed Hangul syllable (U+AC00..=U+D7A3)?
pub fn is_hangul_syllable(code_point: u32) -> bool {
	code_point.wrapping_sub(S_BASE) < S_COUNT
}

/// Get the name of a Hangul syllable, e.g. "HANGUL SYLLABLE GAG" for U+AC01.
pub fn name_for_hangul(code_point: u32) -> Option<String> {
	if !is_hangul_syllable(code_point) {
		return None;
	}

	let s_index = code_point - S_BASE;
	let l_index = (s_index / N_COUNT) as usize;
	let v_index = ((s_index % N_COUNT) / T_COUNT) as usize;
	let t_index = (s_index % T_COUNT) as usize;

	Some(format!("HANGUL SYLLABLE {}{}{}", JAMO_L[l_index], JAMO_V[v_index], JAMO_T[t_index]))
}
