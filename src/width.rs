//! Character display-width classes
//!
//! Every character occupies 0, 1, or 2 terminal columns. The classification
//! is a fixed table, not a full Unicode width database: the zero column
//! class covers zero-width joiners/marks and the Hebrew combining ranges;
//! the two column class covers the East-Asian-Width Wide/Fullwidth blocks.
//! Everything else — including combining marks outside the zero table, such
//! as U+0301 — counts as one column. Terminals that render with the same
//! convention will agree with these measurements; ones that do not will
//! disagree regardless of how precise we are.

use crate::ansi::strip_csi;

/// Zero-column ranges: ZWSP/ZWNJ/ZWJ, BOM, Hebrew accents and points,
/// Hebrew presentation forms.
const ZERO_WIDTH: &[(u32, u32)] = &[
    (0x0591, 0x05F4),
    (0x200B, 0x200D),
    (0xFB1D, 0xFBF4),
    (0xFEFF, 0xFEFF),
];

/// Two-column ranges: the East-Asian-Width "Wide" and "Fullwidth" blocks.
const WIDE: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // Hangul Jamo leading consonants
    (0x2329, 0x232A),   // angle brackets
    (0x2E80, 0x303E),   // CJK radicals .. CJK symbols and punctuation
    (0x3041, 0x33FF),   // hiragana .. CJK compatibility
    (0x3400, 0x4DBF),   // CJK unified ideographs extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xA000, 0xA4CF),   // Yi syllables and radicals
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE10, 0xFE19),   // vertical forms
    (0xFE30, 0xFE6F),   // CJK compatibility forms, small form variants
    (0xFF00, 0xFF60),   // fullwidth forms
    (0xFFE0, 0xFFE6),   // fullwidth signs
    (0x20000, 0x2FFFD), // CJK unified ideographs extensions B..F
    (0x30000, 0x3FFFD), // CJK unified ideographs extension G+
];

fn in_table(table: &[(u32, u32)], cp: u32) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Terminal column count of a single character: 0, 1, or 2.
pub fn char_width(c: char) -> usize {
    let cp = c as u32;
    if in_table(ZERO_WIDTH, cp) {
        0
    } else if in_table(WIDE, cp) {
        2
    } else {
        1
    }
}

/// Terminal column count of `s`, ignoring CSI style escapes.
pub fn visible_width(s: &str) -> usize {
    strip_csi(s).chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('a', 1; "ascii letter")]
    #[test_case(' ', 1; "space")]
    #[test_case('é', 1; "latin accented")]
    #[test_case('\u{0301}', 1; "combining acute counts as one")]
    #[test_case('中', 2; "cjk ideograph")]
    #[test_case('あ', 2; "hiragana")]
    #[test_case('한', 2; "hangul syllable")]
    #[test_case('Ａ', 2; "fullwidth latin")]
    #[test_case('\u{200B}', 0; "zero width space")]
    #[test_case('\u{200D}', 0; "zero width joiner")]
    #[test_case('\u{FEFF}', 0; "bom")]
    #[test_case('\u{05B0}', 0; "hebrew point sheva")]
    #[test_case('\u{20000}', 2; "extension b ideograph")]
    fn char_width_classes(c: char, expected: usize) {
        assert_eq!(char_width(c), expected);
    }

    #[test]
    fn visible_width_sums_classes() {
        assert_eq!(visible_width("ab"), 2);
        assert_eq!(visible_width("a中b"), 4);
        assert_eq!(visible_width("a\u{200D}b"), 2);
    }

    #[test]
    fn visible_width_ignores_csi() {
        assert_eq!(visible_width("\x1b[31m中\x1b[0m"), 2);
    }

    #[test]
    fn visible_width_empty() {
        assert_eq!(visible_width(""), 0);
    }
}
