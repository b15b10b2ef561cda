//! Free-form data-type keyword synthesis.
//!
//! The legacy columns encode a declaration's type as a one-letter code
//! plus length and decimal positions, and the code may be blank: the
//! compiler supplies a default, so the converter must supply the same
//! one. Lengths written as `+N` are relative adjustments to a `LIKE`
//! reference rather than literal lengths; those produce no type keyword
//! at all and instead rewrite the `LIKE(...)` keyword text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits keyword text around the first `like(...)` reference so a
/// length adjustment can be spliced in before the closing parenthesis.
static LIKE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?like\([^)]*)(\).*)$").unwrap());

/// Build the free-form type keyword for one declaration.
///
/// A blank data type with a length present is defaulted the way the
/// compiler does it: packed when decimals are present, character
/// otherwise. Old-style from/to pairs convert to a computed length plus a
/// `pos(...)` keyword. Unrecognized type codes are kept visible in the
/// output rather than silently dropped.
pub fn data_type_keyword(
    from_pos: &str,
    len: &str,
    data_type: &str,
    decimals: &str,
    keywords: &str,
) -> String {
    let mut data_type = data_type.to_string();
    if !len.is_empty() && data_type.is_empty() {
        data_type = if decimals.is_empty() { "a" } else { "p" }.to_string();
    }

    // a relative length has no keyword of its own; the adjustment was
    // spliced into the LIKE keyword during extraction
    if len.contains('+') {
        return String::new();
    }

    let len_text = if from_pos.is_empty() {
        len.to_string()
    } else {
        match (len.parse::<i64>(), from_pos.parse::<i64>()) {
            (Ok(to), Ok(from)) => (to - from + 1).to_string(),
            // non-numeric from/to columns: keep the raw text visible
            _ => len.to_string(),
        }
    };

    let mut keyword = match data_type.as_str() {
        // data structure headers carry no type keyword
        "" => String::new(),
        "a" => format!("char({})", len_text),
        "f" => format!("float({})", len_text),
        "i" => format!("int({})", len_text),
        "p" => format!("packed({}: {})", len_text, decimals),
        "s" => format!("zoned({}: {})", len_text, decimals),
        "u" => format!("uns({})", len_text),
        "*" => {
            if keywords.contains("procptr") {
                "pointer(*proc)".to_string()
            } else {
                "pointer".to_string()
            }
        }
        other => format!("unk({}) tempLenChar({})", other, len_text),
    };

    // old-style from/to pairs tell the compiler where the subfield starts
    if !from_pos.is_empty() {
        keyword.push_str(&format!(" pos({})", from_pos));
    }

    keyword
}

/// Splice a relative length adjustment (`+N` in the length column) into
/// the first `like(...)` keyword: `like(base)` becomes `like(base: +n)`.
/// Without a `LIKE` keyword the adjustment has nowhere to go and is
/// dropped, matching the legacy conversion.
pub fn adjust_like_keywords(keywords: &str, len: &str) -> String {
    if keywords.is_empty() || !len.contains('+') {
        return keywords.to_string();
    }
    let adjustment = len.replace(' ', "");
    match LIKE_SPLIT.captures(keywords) {
        Some(caps) => format!("{}: {}{}", &caps[1], adjustment, &caps[2]),
        None => keywords.to_string(),
    }
}
