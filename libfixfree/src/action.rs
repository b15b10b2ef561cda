//! Host-facing conversion action.
//!
//! The orchestrator runs one user-triggered conversion against a document
//! collaborator supplied by the host. The core never renders UI: it reads
//! adjacent lines, inserts the generated block, repositions the cursor,
//! and reports diagnostics, all through the same narrow interface. One
//! conversion runs to completion before returning; the host serializes
//! concurrent actions.

use crate::classify::{self, SpecTag};
use crate::emit::{self, Conversion, Options};
use crate::error::{ConvertError, Result};
use crate::layout;

/// The document the host owns. The core treats it as exclusively
/// borrowed for the duration of one conversion and performs no other
/// I/O.
pub trait Document {
    fn line_count(&self) -> usize;
    fn read_line(&self, index: usize) -> String;
    fn current_line_index(&self) -> usize;
    fn read_only(&self) -> bool;
    /// Insert lines immediately after `after_index`, in order.
    fn insert_lines(&mut self, after_index: usize, lines: &[String]);
    fn set_cursor(&mut self, index: usize, column: usize);
    /// Surface a short diagnostic to the user.
    fn report(&mut self, message: &str);
}

/// Whether the conversion action may run at all for this document.
pub fn available(doc: &dyn Document) -> bool {
    doc.current_line_index() > 0 && !doc.read_only()
}

/// Convert the spec at `index` of an immutable line sequence.
///
/// This is the pure core of the action: precondition checks,
/// classification, dispatch, and emission, with no document mutation.
pub fn convert_at<S: AsRef<str>>(lines: &[S], index: usize, options: &Options) -> Result<Conversion> {
    let line = lines.get(index).map(AsRef::as_ref).unwrap_or("");
    if line.is_empty() {
        return Err(ConvertError::EmptyText);
    }
    if layout::width(line) <= 5 {
        return Err(ConvertError::LineTooShort);
    }
    match classify::classify(line) {
        SpecTag::Header => emit::convert_header(lines, index, options),
        SpecTag::Declaration | SpecTag::Procedure => {
            emit::convert_declaration(lines, index, options)
        }
        SpecTag::Unsupported(spec) => Err(ConvertError::NotConvertible(spec)),
        SpecTag::NotASpec => Err(ConvertError::NotConvertible(' ')),
    }
}

/// Run one conversion at the document's current line.
///
/// On success the generated block is inserted after the last consumed
/// line and the cursor returns to the top of the converted area; the
/// original fixed-format lines stay put for the user to review and
/// delete. On failure the diagnostic is reported through the document,
/// which is left untouched.
pub fn convert_current_line(doc: &mut dyn Document, options: &Options) -> Result<Conversion> {
    let index = doc.current_line_index();
    let lines: Vec<String> = (0..doc.line_count()).map(|i| doc.read_line(i)).collect();
    match convert_at(&lines, index, options) {
        Ok(conversion) => {
            let emitted: Vec<String> = conversion
                .lines
                .iter()
                .filter(|line| !line.is_empty())
                .cloned()
                .collect();
            doc.insert_lines(conversion.insert_after, &emitted);
            doc.set_cursor(index, 0);
            Ok(conversion)
        }
        Err(err) => {
            doc.report(&err.to_string());
            Err(err)
        }
    }
}

/// In-memory document, used by tests and the command-line host.
#[derive(Debug, Clone, Default)]
pub struct BufferDocument {
    lines: Vec<String>,
    current: usize,
    cursor: (usize, usize),
    read_only: bool,
    messages: Vec<String>,
}

impl BufferDocument {
    /// Build from source text, one document line per physical line.
    pub fn from_text(text: &str) -> Self {
        BufferDocument {
            lines: text.lines().map(String::from).collect(),
            ..BufferDocument::default()
        }
    }

    /// Move the current line (and the cursor) to `index`.
    pub fn go_to(&mut self, index: usize) {
        self.current = index;
        self.cursor = (index, 0);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Diagnostics reported so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// The document joined back into text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Document for BufferDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn read_line(&self, index: usize) -> String {
        self.lines.get(index).cloned().unwrap_or_default()
    }

    fn current_line_index(&self) -> usize {
        self.current
    }

    fn read_only(&self) -> bool {
        self.read_only
    }

    fn insert_lines(&mut self, after_index: usize, lines: &[String]) {
        for (offset, line) in lines.iter().enumerate() {
            self.lines.insert(after_index + 1 + offset, line.clone());
        }
    }

    fn set_cursor(&mut self, index: usize, column: usize) {
        self.cursor = (index, column);
    }

    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
