//! Name continuation resolution.
//!
//! Legacy identifiers may exceed the 15-column name field, in which case
//! the name is written across several physical lines, each fragment
//! ending in a literal `...`. The resolver walks backward from the
//! declaration line, prepending continued fragments, skipping comment
//! lines, and tolerating blank continuation rows that belong to the same
//! structure header, until a line that is not a continuation ends the
//! chain. Continuation only ever applies to fixed-format input: re-parsing
//! emitted free-form text never re-triggers it.

use crate::classify;
use crate::layout;

/// Assemble the full declaration name for the line at `index`.
///
/// `def_type` is the definition type of the line being resolved; a prior
/// row with a blank name only counts as a continuation when its own
/// def-type matches the nearest examined line below it.
pub fn resolve<S: AsRef<str>>(lines: &[S], index: usize, def_type: &str) -> String {
    let line = lines.get(index).map(AsRef::as_ref).unwrap_or("");
    if layout::width(line) < 6 {
        return String::new();
    }
    let mut name = layout::clamped(line, layout::NAME).trim().to_string();
    let mut below_def_type = def_type.trim().to_string();

    for j in (0..index).rev() {
        let prior = lines[j].as_ref();
        if classify::is_comment(prior) {
            continue;
        }
        let w = layout::width(prior);
        if w <= 6 {
            continue;
        }
        if prior.ends_with("...") {
            // name fragment: everything between the spec letter and the
            // ellipsis joins the front of the accumulated name
            let fragment: String = prior
                .chars()
                .skip(layout::NAME.start)
                .take((w - 3).saturating_sub(layout::NAME.start))
                .collect();
            name.insert_str(0, fragment.trim());
            continue;
        }
        let tag = classify::classify(prior);
        let prior_name = layout::clamped(prior, layout::NAME).trim().to_string();
        let prior_def = layout::clamped(prior, layout::DEF_TYPE)
            .to_lowercase()
            .trim()
            .to_string();
        if tag.is_declaration_family() && prior_name.is_empty() && prior_def == below_def_type {
            below_def_type = prior_def;
            continue;
        }
        break;
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_name() {
        let lines = ["     dcustNo          s             10a"];
        assert_eq!(resolve(&lines, 0, "s"), "custNo");
    }

    #[test]
    fn test_continued_name() {
        let lines = [
            "     d veryLongFieldName...",
            "     dExt             s             10a",
        ];
        assert_eq!(resolve(&lines, 1, "s"), "veryLongFieldNameExt");
    }

    #[test]
    fn test_continuation_skips_comments() {
        let lines = [
            "     d veryLongFieldName...",
            "      * interleaved comment",
            "     dExt             s             10a",
        ];
        assert_eq!(resolve(&lines, 2, "s"), "veryLongFieldNameExt");
    }

    #[test]
    fn test_multiple_fragments() {
        let lines = [
            "     d first...",
            "     d second...",
            "     dThird           s             10a",
        ];
        assert_eq!(resolve(&lines, 2, "s"), "firstsecondThird");
    }

    #[test]
    fn test_non_continuation_stops_scan() {
        let lines = [
            "     dother           s             10a",
            "     dplain           s              5a",
        ];
        assert_eq!(resolve(&lines, 1, "s"), "plain");
    }

    #[test]
    fn test_short_line_is_skipped() {
        let lines = [
            "     d longName...",
            "     d",
            "     dEnd             s             10a",
        ];
        assert_eq!(resolve(&lines, 2, "s"), "longNameEnd");
    }

    #[test]
    fn test_line_too_short_for_name() {
        let lines = ["     d"];
        assert_eq!(resolve(&lines, 0, ""), "");
    }
}
