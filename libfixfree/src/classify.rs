//! Line classification for fixed-format source.
//!
//! The classifier answers three questions about one raw physical line:
//! which specification family it belongs to, whether the whole line is a
//! comment, and what trailing comment text it carries. It reads single
//! fixed columns only; whole-field extraction is the record model's job.

use crate::layout;

/// Specification family of a fixed-format line.
///
/// Closed over the families the converter understands; any other spec
/// letter is carried as `Unsupported` so dispatch stays exhaustive and a
/// new family is a compile-time-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecTag {
    /// H-spec: control options header.
    Header,
    /// D-spec: definitions.
    Declaration,
    /// P-spec: procedure begin/end.
    Procedure,
    /// A spec letter the converter does not handle (C, F, I, O, ...).
    Unsupported(char),
    /// Comment, compile-time data, or a line too short to carry a spec.
    NotASpec,
}

impl Default for SpecTag {
    fn default() -> Self {
        SpecTag::NotASpec
    }
}

impl SpecTag {
    /// True for the spec families that share the declaration column
    /// layout.
    pub fn is_declaration_family(self) -> bool {
        matches!(self, SpecTag::Declaration | SpecTag::Procedure)
    }
}

/// Classify a raw line by its specification letter in column 6.
///
/// Comments and compile-time data (`**` in columns 1-2) never classify as
/// a spec, whatever their column 6 holds. Free-form declarations need no
/// classification: they are already free.
pub fn classify(line: &str) -> SpecTag {
    if layout::width(line) <= 5 || is_comment(line) || line.starts_with("**") {
        return SpecTag::NotASpec;
    }
    let spec = layout::exact(line, layout::SPEC).to_lowercase();
    match spec.chars().next() {
        Some('h') => SpecTag::Header,
        Some('d') => SpecTag::Declaration,
        Some('p') => SpecTag::Procedure,
        Some(other) => SpecTag::Unsupported(other),
        None => SpecTag::NotASpec,
    }
}

/// True when the entire line is a comment: `*` in column 7, or `//`
/// preceded only by spaces. A `**` compile-time-data marker is not a
/// comment.
pub fn is_comment(line: &str) -> bool {
    if layout::width(line) < 8 {
        return false;
    }
    if line.chars().nth(6) == Some('*') {
        return true;
    }
    line.trim_start_matches(' ').starts_with("//")
}

/// Extract the text of a comment line. Returns "" for non-comments; that
/// is a defined no-op, not an error.
pub fn comment_text(line: &str) -> String {
    if !is_comment(line) {
        return String::new();
    }
    let stripped = line.trim_start_matches(' ');
    if let Some(rest) = stripped.strip_prefix("//") {
        return rest.to_string();
    }
    if line.chars().nth(6) == Some('*') {
        return line.chars().skip(7).collect();
    }
    String::new()
}

/// Extract the right-hand comment from columns 81-100, trimmed. Applies
/// to any spec line long enough, independent of comment status.
pub fn rh_comment(line: &str) -> String {
    if layout::width(line) <= 81 {
        return String::new();
    }
    layout::clamped(line, layout::RH_COMMENT).trim().to_string()
}
