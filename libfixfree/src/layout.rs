//! Fixed-column layout of RPG specification lines.
//!
//! Every field the converter reads sits at a fixed 1-based column range.
//! The ranges live in one table here, and two bounds-safe slicing helpers
//! do all the substring work, so no caller repeats its own off-by-one
//! arithmetic. Editors routinely trim source lines, so any field may be
//! cut short or missing entirely; a missing field reads as empty text.

/// A half-open range of zero-based column offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cols {
    pub start: usize,
    pub end: usize,
}

/// Specification letter, column 6.
pub const SPEC: Cols = Cols { start: 5, end: 6 };
/// Declaration name, columns 7-21.
pub const NAME: Cols = Cols { start: 6, end: 21 };
/// External-description flag, column 22.
pub const EXT_TYPE: Cols = Cols { start: 21, end: 22 };
/// Data-structure kind flag, column 23.
pub const DS_TYPE: Cols = Cols { start: 22, end: 23 };
/// Definition type, columns 24-25.
pub const DEF_TYPE: Cols = Cols { start: 23, end: 25 };
/// From position, columns 26-32.
pub const FROM_POS: Cols = Cols { start: 25, end: 32 };
/// Length or to position, columns 33-39.
pub const LEN: Cols = Cols { start: 32, end: 39 };
/// Data type letter, column 40.
pub const DATA_TYPE: Cols = Cols { start: 39, end: 40 };
/// Decimal positions, columns 41-42.
pub const DECIMALS: Cols = Cols { start: 40, end: 42 };
/// D-spec keywords, columns 44-80.
pub const KEYWORDS: Cols = Cols { start: 43, end: 80 };
/// H-spec keywords, columns 8-80.
pub const H_KEYWORDS: Cols = Cols { start: 7, end: 80 };
/// Right-hand comment, columns 81-100.
pub const RH_COMMENT: Cols = Cols { start: 80, end: 100 };

/// Width of a line in characters. Fixed-format columns count characters,
/// not bytes.
pub fn width(line: &str) -> usize {
    line.chars().count()
}

/// Slice a column range, clamping the end to the line width. Returns ""
/// when the line ends at or before the range start.
pub fn clamped(line: &str, cols: Cols) -> String {
    line.chars()
        .skip(cols.start)
        .take(cols.end - cols.start)
        .collect()
}

/// Slice a column range only when the line covers it completely. Short
/// lines yield "" rather than a partial field.
pub fn exact(line: &str, cols: Cols) -> String {
    if width(line) < cols.end {
        String::new()
    } else {
        clamped(line, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(width(""), 0);
        assert_eq!(width("     d"), 6);
    }

    #[test]
    fn test_clamped_short_line() {
        assert_eq!(clamped("", NAME), "");
        assert_eq!(clamped("     d", NAME), "");
        assert_eq!(clamped("     dab", NAME), "ab");
    }

    #[test]
    fn test_clamped_full_line() {
        let line = "     dcustomerName   ";
        assert_eq!(clamped(line, NAME), "customerName   ");
    }

    #[test]
    fn test_exact_requires_full_range() {
        // 39 columns is one short of the data type column
        let short = " ".repeat(39);
        assert_eq!(exact(&short, DATA_TYPE), "");
        let long = format!("{}p", " ".repeat(39));
        assert_eq!(exact(&long, DATA_TYPE), "p");
    }

    #[test]
    fn test_exact_decimals() {
        let line = format!("{}10", " ".repeat(40));
        assert_eq!(exact(&line, DECIMALS), "10");
        assert_eq!(exact(&line[..41], DECIMALS), "");
    }
}
