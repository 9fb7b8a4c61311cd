// src/constants.rs
//
// Application-wide names and labels shared between parsing, presentation and the CLI.

/// Field holding the note's author.
pub const AUTHOR_FIELD: &str = "author";

/// Field holding the note's date, kept verbatim (no date parsing).
pub const DATE_FIELD: &str = "date";

/// Field holding the note's body.
pub const CONTENT_FIELD: &str = "content";

/// Fields the text presenter requires, in the order they are checked.
///
/// Used in: `ports/text.rs`
pub const NOTE_FIELDS: [&str; 3] = [AUTHOR_FIELD, DATE_FIELD, CONTENT_FIELD];

/// Origin label in parse errors for notes parsed from an in-memory string.
pub const INLINE_ORIGIN: &str = "<string>";

/// Origin label in parse errors for notes parsed from an arbitrary reader.
pub const STREAM_ORIGIN: &str = "<stream>";

/// Bytes inspected for a leading `<?xml ... encoding="..."?>` declaration.
///
/// Used in: `infrastructure/encoding.rs`
pub const DECLARATION_SCAN_LIMIT: usize = 1024;
