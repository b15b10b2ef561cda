//! Free-form statement emission.
//!
//! The emitter turns one parsed declaration into a block of free-form
//! statements. Standalone fields and constants convert as a single line;
//! data structures, prototypes, and procedure interfaces open a
//! declaration, walk forward through their subfields until a structural
//! terminator, and close with an `end-*` statement. The generated block
//! is additive: the caller inserts it after the last consumed line and
//! the original fixed-format lines stay put for review.

use crate::classify::SpecTag;
use crate::datatype;
use crate::error::{ConvertError, Result};
use crate::layout;
use crate::record::{Declaration, Header};

/// Margin for top-level `dcl-*` and `end-*` statements.
const DECL_MARGIN: usize = 8;
/// Margin for structure subfields.
const FIELD_MARGIN: usize = 11;
/// Margin for `ctl-opt` statements and carried-forward comments.
const HEADER_MARGIN: usize = 7;

/// Conversion options.
#[derive(Debug, Clone)]
pub struct Options {
    /// 1-based column where free-form output starts. Column 1 leaves the
    /// standard margins untouched.
    pub start_column: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { start_column: 1 }
    }
}

impl Options {
    fn pad(&self) -> usize {
        self.start_column.saturating_sub(1)
    }
}

/// The generated free-form block and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Free-form statement lines, in order.
    pub lines: Vec<String>,
    /// Zero-based index of the last consumed source line; the block is
    /// inserted immediately after it.
    pub insert_after: usize,
}

/// Left-pad text with spaces; padding by zero is the identity.
pub fn pad_left(text: &str, pad: usize) -> String {
    format!("{}{}", " ".repeat(pad), text)
}

/// Definition types that may head a conversion. Anything else means the
/// cursor sits mid-structure.
fn convertible_def_type(def_type: &str) -> bool {
    matches!(def_type, "b" | "c" | "e" | "s" | "ds" | "pi" | "pr")
}

/// The procedure-pointer marker becomes part of the type keyword, so it
/// never survives into emitted keyword text.
fn strip_procptr(keywords: &str) -> String {
    keywords.replace("procptr", "").trim().to_string()
}

/// Convert an H-spec into a single `ctl-opt` statement.
pub fn convert_header<S: AsRef<str>>(
    lines: &[S],
    index: usize,
    options: &Options,
) -> Result<Conversion> {
    let header = Header::parse(lines.get(index).map(AsRef::as_ref).unwrap_or(""));
    let mut stmt = pad_left("ctl-opt", HEADER_MARGIN + options.pad());
    if !header.keywords.is_empty() {
        stmt.push(' ');
        stmt.push_str(&header.keywords);
    }
    stmt.push(';');
    if !header.rh_comment.is_empty() {
        stmt.push_str(" // ");
        stmt.push_str(&header.rh_comment);
    }
    Ok(Conversion {
        lines: vec![stmt],
        insert_after: index,
    })
}

/// Convert the declaration at `index`, scanning forward through its
/// subfields when it heads a structure.
///
/// Standalone fields and constants emit one statement; `ds`/`pi`/`pr`
/// emit an open statement, one statement per subfield, and a close.
/// Procedure begin (`b`) opens a `dcl-proc` with no close; procedure end
/// (`e`) emits only `end-proc;`.
pub fn convert_declaration<S: AsRef<str>>(
    lines: &[S],
    index: usize,
    options: &Options,
) -> Result<Conversion> {
    let head = Declaration::parse(lines, index);
    if !head.tag.is_declaration_family() {
        return Err(ConvertError::NotDeclaration);
    }
    let def_type = head.def_type.trim().to_string();
    if !convertible_def_type(&def_type) {
        return Err(ConvertError::MidStructure(head.def_type.clone()));
    }

    let mut out = Vec::new();
    let mut insert_after = index;

    // procedure-end specs get no opening statement at all
    if def_type != "e" {
        let lead = if def_type == "b" {
            "dcl-proc".to_string()
        } else {
            format!("dcl-{}", def_type)
        };
        let mut stmt = pad_left(&lead, DECL_MARGIN + options.pad());
        stmt.push(' ');
        stmt.push_str(&head.name);
        let type_keyword = datatype::data_type_keyword(
            &head.from_pos,
            &head.len,
            &head.data_type,
            &head.decimals,
            &head.keywords,
        );
        if !type_keyword.is_empty() {
            stmt.push(' ');
            stmt.push_str(&type_keyword);
        }
        let keywords = strip_procptr(&head.keywords);
        if !keywords.is_empty() {
            stmt.push(' ');
            stmt.push_str(&keywords);
        }
        stmt.push(';');
        if !head.rh_comment.is_empty() {
            stmt.push_str(" // ");
            stmt.push_str(&head.rh_comment);
        }
        out.push(stmt);
    }

    // walk forward through the subfields; for standalone and constant
    // definitions the very next spec terminates the "structure"
    for e in index + 1..lines.len() {
        let text = lines[e].as_ref();
        if text.is_empty() || layout::width(text) <= 5 {
            break;
        }
        let sub = Declaration::parse(lines, e);
        // comments have no fields to parse; carry them forward into the
        // converted block
        if sub.is_comment {
            out.push(pad_left(
                &format!("// {}", sub.comment_text.trim()),
                HEADER_MARGIN + options.pad(),
            ));
            continue;
        }
        // a name fragment was already absorbed by continuation resolution
        if text.ends_with("...") {
            continue;
        }
        // a non-blank def type is the next top-level spec
        if sub.tag != SpecTag::Declaration || !sub.def_type.trim().is_empty() {
            break;
        }

        let mut stmt = pad_left(&sub.name, FIELD_MARGIN + options.pad());
        let type_keyword = datatype::data_type_keyword(
            &sub.from_pos,
            &sub.len,
            &sub.data_type,
            &sub.decimals,
            &sub.keywords,
        );
        if !type_keyword.is_empty() {
            stmt.push(' ');
            stmt.push_str(&type_keyword);
        }
        let keywords = strip_procptr(&sub.keywords);
        if !keywords.is_empty() {
            stmt.push(' ');
            stmt.push_str(&keywords);
        }
        stmt.push(';');
        if !sub.rh_comment.is_empty() {
            stmt.push_str(" // ");
            stmt.push_str(sub.rh_comment.trim());
        }
        insert_after = e;
        out.push(stmt);
    }

    // standalone, constant, and procedure-begin declarations do not close
    if !matches!(def_type.as_str(), "c" | "s" | "b") {
        let close = if def_type == "e" {
            "end-proc".to_string()
        } else {
            format!("end-{}", def_type)
        };
        out.push(pad_left(
            &format!("{};", close),
            DECL_MARGIN + options.pad(),
        ));
    }

    Ok(Conversion {
        lines: out,
        insert_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dspec(name: &str, def: &str, from: &str, len: &str, dtype: &str, dec: &str, kw: &str) -> String {
        format!(
            "     d{:<15}  {:<2}{:>7}{:>7}{:<1}{:>2} {}",
            name, def, from, len, dtype, dec, kw
        )
        .trim_end()
        .to_string()
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("", 0), "");
        assert_eq!(pad_left("", 7), "       ");
        assert_eq!(pad_left("dcl-s", 0), "dcl-s");
        assert_eq!(pad_left("dcl-s", 1), " dcl-s");
        assert_eq!(
            pad_left("dcl-s aardvark char(256)", 7),
            "       dcl-s aardvark char(256)"
        );
    }

    #[test]
    fn test_mid_structure_is_rejected() {
        // a bare subfield has a blank def type and cannot head a block
        let lines = [dspec("itemNo", "", "", "5", "s", "0", "")];
        let err = convert_declaration(&lines, 0, &Options::default()).unwrap_err();
        assert_eq!(err, ConvertError::MidStructure("  ".to_string()));
    }

    #[test]
    fn test_non_declaration_is_rejected() {
        let lines = ["     h option(*srcstmt)"];
        let err = convert_declaration(&lines, 0, &Options::default()).unwrap_err();
        assert_eq!(err, ConvertError::NotDeclaration);
    }

    #[test]
    fn test_standalone_has_no_close() {
        let lines = [dspec("custNo", "s", "", "7", "p", "0", "")];
        let conv = convert_declaration(&lines, 0, &Options::default()).unwrap();
        assert_eq!(conv.lines, vec!["        dcl-s custNo packed(7: 0);"]);
        assert_eq!(conv.insert_after, 0);
    }

    #[test]
    fn test_constant_has_no_close() {
        let lines = [dspec("limit", "c", "", "", "", "", "const(99)")];
        let conv = convert_declaration(&lines, 0, &Options::default()).unwrap();
        assert_eq!(conv.lines, vec!["        dcl-c limit const(99);"]);
    }

    #[test]
    fn test_procedure_begin_opens_proc() {
        let lines = [format!("     p{:<15}  b", "doStuff")];
        let conv = convert_declaration(&lines, 0, &Options::default()).unwrap();
        assert_eq!(conv.lines, vec!["        dcl-proc doStuff;"]);
    }

    #[test]
    fn test_procedure_end_closes_proc() {
        let lines = [format!("     p{:<15}  e", "")];
        let conv = convert_declaration(&lines, 0, &Options::default()).unwrap();
        assert_eq!(conv.lines, vec!["        end-proc;"]);
        assert_eq!(conv.insert_after, 0);
    }

    #[test]
    fn test_start_column_shifts_margins() {
        let lines = [dspec("custNo", "s", "", "7", "p", "0", "")];
        let options = Options { start_column: 3 };
        let conv = convert_declaration(&lines, 0, &options).unwrap();
        assert_eq!(conv.lines, vec!["          dcl-s custNo packed(7: 0);"]);
    }

    #[test]
    fn test_procptr_never_reaches_keywords() {
        let lines = [dspec("exitProc", "s", "", "", "*", "", "procptr")];
        let conv = convert_declaration(&lines, 0, &Options::default()).unwrap();
        assert_eq!(conv.lines, vec!["        dcl-s exitProc pointer(*proc);"]);
    }

    #[test]
    fn test_header_statement() {
        let lines = ["     h option(*nodebugio) dftactgrp(*no)"];
        let conv = convert_header(&lines, 0, &Options::default()).unwrap();
        assert_eq!(
            conv.lines,
            vec!["       ctl-opt option(*nodebugio) dftactgrp(*no);"]
        );
        assert_eq!(conv.insert_after, 0);
    }

    #[test]
    fn test_header_without_keywords() {
        let lines = ["     h"];
        let conv = convert_header(&lines, 0, &Options::default()).unwrap();
        assert_eq!(conv.lines, vec!["       ctl-opt;"]);
    }
}
