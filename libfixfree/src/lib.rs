//! Fixed-format RPG declaration converter.
//!
//! Converts one legacy fixed-column declaration (D-, P-, or H-spec) at a
//! time into the equivalent free-form statement text. Converting a single
//! spec per action keeps each conversion small enough to review before
//! the original lines are removed.
//!
//! # Conversion Pipeline
//!
//! 1. **Classifier**: decides which spec family the current line belongs
//!    to and whether it is a comment.
//!
//! 2. **Record model**: slices the fixed columns into a structured
//!    record, resolving names continued across earlier lines.
//!
//! 3. **Synthesizer**: turns the type/length/decimals columns into a
//!    free-form type keyword, applying the legacy defaulting rules.
//!
//! 4. **Emitter**: walks forward through the structure's subfields and
//!    builds the free-form statement block.
//!
//! 5. **Orchestrator**: inserts the block through the host's document
//!    collaborator, leaving the original lines in place for review.

mod action;
mod classify;
mod datatype;
mod emit;
mod error;
mod layout;
mod name;
mod record;

pub use action::{available, convert_at, convert_current_line, BufferDocument, Document};
pub use classify::{classify, comment_text, is_comment, rh_comment, SpecTag};
pub use datatype::{adjust_like_keywords, data_type_keyword};
pub use emit::{convert_declaration, convert_header, pad_left, Conversion, Options};
pub use error::{ConvertError, Result};
pub use record::{Declaration, Header};
