//! Parsed records for one fixed-format line.
//!
//! Two record shapes share the comment handling: `Header` for H-specs and
//! `Declaration` for D- and P-specs. A record is built fresh from an
//! immutable slice of document lines plus an index, consulted read-only,
//! and is discarded once the emitter has used it; nothing persists across
//! conversions.
//!
//! Everything except the name is monocased during extraction. Editors
//! trim trailing blanks from each line, so no column can be assumed
//! present.

use crate::classify::{self, SpecTag};
use crate::datatype;
use crate::layout;
use crate::name;

/// One parsed D- or P-spec line.
///
/// Layout of the source columns:
///
/// ```text
///  1 -  5  sequence number / text
///  6 -  6  spec letter
///  7 - 21  name (may continue from earlier lines)
/// 22 - 22  external type (' ', 'e')
/// 23 - 23  DS type (' ', 's', 'u')
/// 24 - 25  def type (' ', 'c', 's', 'b', 'e', 'ds', 'pi', 'pr')
/// 26 - 32  from position
/// 33 - 39  length / to position
/// 40 - 40  data type (a, p, s, i, u, f, *, ...)
/// 41 - 42  decimal positions
/// 44 - 80  keywords
/// 81 -100  right-hand comment
/// ```
#[derive(Debug, Clone, Default)]
pub struct Declaration {
    pub tag: SpecTag,
    /// Fully assembled name, continuation lines included. Case is kept
    /// as written.
    pub name: String,
    pub ext_type: String,
    pub ds_type: String,
    /// Columns 24-25 as written (lower-cased, untrimmed): the trailing
    /// space distinguishes the one-letter kinds from `ds`/`pi`/`pr`.
    pub def_type: String,
    pub from_pos: String,
    /// Length, to-position, or a `+N` relative adjustment.
    pub len: String,
    pub data_type: String,
    pub decimals: String,
    /// Keyword text, lower-cased and trimmed, with any relative length
    /// adjustment already spliced into the `LIKE` keyword.
    pub keywords: String,
    pub rh_comment: String,
    pub is_comment: bool,
    pub comment_text: String,
}

impl Declaration {
    /// Parse the line at `index` of an ordered line sequence. For comment
    /// lines only `comment_text` is populated. Name resolution may
    /// consult earlier lines, read-only.
    pub fn parse<S: AsRef<str>>(lines: &[S], index: usize) -> Declaration {
        let line = lines.get(index).map(AsRef::as_ref).unwrap_or("");
        if classify::is_comment(line) {
            return Declaration {
                is_comment: true,
                comment_text: classify::comment_text(line),
                ..Declaration::default()
            };
        }
        let len = lower_trim(&layout::exact(line, layout::LEN));
        let raw_keywords = lower_trim(&layout::clamped(line, layout::KEYWORDS));
        let def_type = layout::clamped(line, layout::DEF_TYPE).to_lowercase();
        Declaration {
            tag: classify::classify(line),
            name: name::resolve(lines, index, &def_type),
            ext_type: layout::exact(line, layout::EXT_TYPE).to_lowercase(),
            ds_type: layout::exact(line, layout::DS_TYPE).to_lowercase(),
            from_pos: lower_trim(&layout::exact(line, layout::FROM_POS)),
            data_type: lower_trim(&layout::exact(line, layout::DATA_TYPE)),
            decimals: lower_trim(&layout::exact(line, layout::DECIMALS)),
            keywords: datatype::adjust_like_keywords(&raw_keywords, &len),
            rh_comment: classify::rh_comment(line),
            len,
            def_type,
            is_comment: false,
            comment_text: String::new(),
        }
    }
}

/// One parsed H-spec line: a keyword run and an optional right-hand
/// comment, no name or type columns.
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub tag: SpecTag,
    pub keywords: String,
    pub rh_comment: String,
    pub is_comment: bool,
    pub comment_text: String,
}

impl Header {
    /// Parse a single H-spec line.
    pub fn parse(line: &str) -> Header {
        if classify::is_comment(line) {
            return Header {
                is_comment: true,
                comment_text: classify::comment_text(line),
                ..Header::default()
            };
        }
        Header {
            tag: classify::classify(line),
            keywords: lower_trim(&layout::clamped(line, layout::H_KEYWORDS)),
            rh_comment: classify::rh_comment(line),
            is_comment: false,
            comment_text: String::new(),
        }
    }
}

fn lower_trim(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}
