//! Cursor geometry
//!
//! Maps a linear character offset in the edit buffer to the (row, column)
//! a terminal of a given width would place it at, by replaying the buffer
//! character by character: newlines reset the column, and a column that
//! exceeds the terminal width wraps to the next row.

use crate::ansi::strip_csi;
use crate::error::LayoutError;
use crate::width::char_width;

/// Zero-based terminal grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Translate a character `offset` into `input` to the grid position a
/// terminal `max_cols` wide would render it at.
///
/// `offset` indexes the raw buffer, escape sequences included. Escapes are
/// compensated with a single length delta (raw minus stripped), which
/// assumes they sit before the offset point; an offset landing inside that
/// delta saturates to the start of the line. This is a documented
/// approximation, not a character-exact mapping — span-exact tracking would
/// change observable positions for text with escapes after the cursor.
///
/// Errors with [`LayoutError::OffsetOutOfRange`] when `offset` is past the
/// end of the buffer.
pub fn offset_to_position(
    input: &str,
    offset: usize,
    max_cols: usize,
) -> Result<Position, LayoutError> {
    let raw_len = input.chars().count();
    if offset > raw_len {
        return Err(LayoutError::OffsetOutOfRange {
            offset,
            len: raw_len,
        });
    }

    let stripped = strip_csi(input);
    let delta = raw_len - stripped.chars().count();
    let effective = offset.saturating_sub(delta);

    Ok(walk(&stripped, effective, max_cols))
}

/// Number of terminal rows `input` occupies at width `max_cols`. Always
/// at least 1, including for the empty string.
pub fn line_count(input: &str, max_cols: usize) -> usize {
    let stripped = strip_csi(input);
    let len = stripped.chars().count();
    walk(&stripped, len, max_cols).row + 1
}

/// Replay the first `upto` characters of an escape-free string.
///
/// Width is added per character and the wrap check runs on the post-add
/// column: exceeding `max_cols` resets the column and advances the row.
fn walk(stripped: &str, upto: usize, max_cols: usize) -> Position {
    let mut row = 0;
    let mut col = 0;

    for c in stripped.chars().take(upto) {
        if c == '\n' {
            row += 1;
            col = 0;
            continue;
        }
        col += char_width(c);
        if col > max_cols {
            col = 0;
            row += 1;
        }
    }

    Position { row, col }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_buffer() {
        assert_eq!(
            offset_to_position("hello", 0, 80),
            Ok(Position { row: 0, col: 0 })
        );
    }

    #[test]
    fn end_of_single_line() {
        assert_eq!(
            offset_to_position("hello", 5, 80),
            Ok(Position { row: 0, col: 5 })
        );
    }

    #[test]
    fn newline_resets_column() {
        // a b \n c d — offset 4 sits after 'c' on the second row
        assert_eq!(
            offset_to_position("ab\ncd", 4, 80),
            Ok(Position { row: 1, col: 1 })
        );
    }

    #[test]
    fn wraps_past_max_cols() {
        assert_eq!(
            offset_to_position("abcde", 5, 4),
            Ok(Position { row: 1, col: 0 })
        );
    }

    #[test]
    fn wide_char_fills_to_boundary_without_wrap() {
        // a=1 b=2 then 中 brings the column to exactly 4
        assert_eq!(
            offset_to_position("ab中", 3, 4),
            Ok(Position { row: 0, col: 4 })
        );
    }

    #[test]
    fn wide_char_crossing_boundary_wraps() {
        // a b c = 3 columns, 中 would land on 5 > 4
        assert_eq!(
            offset_to_position("abc中", 4, 4),
            Ok(Position { row: 1, col: 0 })
        );
    }

    #[test]
    fn zero_width_chars_do_not_advance() {
        assert_eq!(
            offset_to_position("a\u{200D}b", 3, 80),
            Ok(Position { row: 0, col: 2 })
        );
    }

    #[test]
    fn escape_prefix_is_compensated() {
        // \x1b[31m is five raw characters of zero visual width
        let input = "\x1b[31mhi";
        assert_eq!(
            offset_to_position(input, input.chars().count(), 80),
            Ok(Position { row: 0, col: 2 })
        );
    }

    #[test]
    fn offset_inside_escape_delta_saturates() {
        assert_eq!(
            offset_to_position("\x1b[31mhi", 3, 80),
            Ok(Position { row: 0, col: 0 })
        );
    }

    #[test]
    fn offset_past_end_rejected() {
        assert_eq!(
            offset_to_position("ab", 3, 80),
            Err(LayoutError::OffsetOutOfRange { offset: 3, len: 2 })
        );
    }

    #[test]
    fn line_count_empty_is_one() {
        assert_eq!(line_count("", 80), 1);
    }

    #[test]
    fn line_count_counts_newlines() {
        assert_eq!(line_count("a\nb\nc", 80), 3);
    }

    #[test]
    fn line_count_counts_wraps() {
        assert_eq!(line_count("abcdefghij", 4), 3);
    }

    #[test]
    fn line_count_ignores_escapes() {
        assert_eq!(line_count("\x1b[1mabcd\x1b[0m", 80), 1);
    }

    #[test]
    fn line_count_agrees_with_offset_to_position() {
        let s = "echo 中文 wraps\nsecond line";
        for w in [4, 10, 40] {
            let pos = offset_to_position(s, s.chars().count(), w).unwrap();
            assert_eq!(
                pos.row + 1,
                line_count(s, w),
                "entry points disagree at width {}",
                w
            );
        }
    }
}
