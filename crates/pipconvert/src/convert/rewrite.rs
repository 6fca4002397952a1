//! Collapse per-package `[tool.uv.sources.<pkg>]` tables into inline entries.
//!
//! The TOML serializer writes each index pin as its own table:
//!
//! ```toml
//! [tool.uv.sources.foo]
//! index = "bar"
//! ```
//!
//! uv's documentation (and most hand-written manifests) use a single table
//! with inline entries instead:
//!
//! ```toml
//! [tool.uv.sources]
//! foo = {index = "bar"}
//! ```
//!
//! [`collapse_source_tables`] rewrites the former into the latter in a single
//! pass over the lines of the document. Every other line is passed through
//! with trailing whitespace removed, except lines inside a multi-line string,
//! which are content and are kept verbatim.

use std::borrow::Cow;

use tracing::trace;

use crate::error::ConvertError;

const SOURCES_HEADER: &str = "[tool.uv.sources]";
const SOURCES_TABLE_PREFIX: &str = "[tool.uv.sources.";

/// Where the rewriter stands relative to the run of source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    /// No `[tool.uv.sources]` header has been emitted yet.
    NotStarted,
    /// The header was emitted; blank lines seen since the last entry are held back.
    Open { blank_lines: usize },
    /// Another table followed the run.
    Closed,
}

/// The kind of multi-line string a line ends inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MultilineString {
    /// `"""`, with backslash escapes.
    Basic,
    /// `'''`, without escapes.
    Literal,
}

/// A `[tool.uv.sources.<pkg>]` header waiting for its `index` line.
struct PendingTable<'a> {
    line: usize,
    header: &'a str,
    package: &'a str,
}

/// Rewrite a serialized `pyproject.toml` so index pins use inline tables.
///
/// Each `[tool.uv.sources.<pkg>]` header must be followed directly by an
/// `index = "<value>"` line, and all such blocks must be contiguous (blank
/// lines aside) so that a single `[tool.uv.sources]` header covers them.
pub fn collapse_source_tables(draft: &str) -> Result<String, ConvertError> {
    let mut lines: Vec<Cow<'_, str>> = Vec::new();
    let mut pending: Option<PendingTable> = None;
    let mut run = Run::NotStarted;
    let mut open_string: Option<MultilineString> = None;

    for (index, raw) in draft.lines().enumerate() {
        let line_number = index + 1;

        if let Some(kind) = open_string {
            lines.push(Cow::Borrowed(raw));
            open_string = scan_strings(raw, Some(kind));
            continue;
        }

        let line = raw.trim();

        if let Some(table) = pending.take() {
            let Some(value) = parse_index_value(line) else {
                return Err(ConvertError::UnmatchedRewritePattern {
                    line: table.line,
                    header: table.header.to_owned(),
                });
            };
            trace!("Collapsing `{}` into an inline table", table.header);
            lines.push(Cow::Owned(format!(
                "{} = {{index = {value}}}",
                table.package
            )));
            continue;
        }

        if let Some(package) = parse_source_table(line) {
            match run {
                Run::NotStarted => lines.push(Cow::Borrowed(SOURCES_HEADER)),
                Run::Open { .. } => {}
                Run::Closed => {
                    return Err(ConvertError::SplitSourcesTable {
                        line: line_number,
                        header: line.to_owned(),
                    });
                }
            }
            // Blank lines between two entries of the run are dropped.
            run = Run::Open { blank_lines: 0 };
            pending = Some(PendingTable {
                line: line_number,
                header: line,
                package,
            });
            continue;
        }

        if line == SOURCES_HEADER {
            if run != Run::NotStarted {
                return Err(ConvertError::SplitSourcesTable {
                    line: line_number,
                    header: line.to_owned(),
                });
            }
            lines.push(Cow::Borrowed(SOURCES_HEADER));
            run = Run::Open { blank_lines: 0 };
            continue;
        }

        if let Run::Open { blank_lines } = run {
            if line.is_empty() {
                run = Run::Open {
                    blank_lines: blank_lines + 1,
                };
                continue;
            }
            lines.extend(std::iter::repeat_n(Cow::Borrowed(""), blank_lines));
            run = Run::Closed;
        }

        open_string = scan_strings(raw, None);
        if open_string.is_some() {
            lines.push(Cow::Borrowed(raw));
        } else {
            lines.push(Cow::Borrowed(raw.trim_end()));
        }
    }

    if let Some(table) = pending {
        return Err(ConvertError::UnmatchedRewritePattern {
            line: table.line,
            header: table.header.to_owned(),
        });
    }
    if let Run::Open { blank_lines } = run {
        lines.extend(std::iter::repeat_n(Cow::Borrowed(""), blank_lines));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    Ok(output)
}

/// Extract `<pkg>` from a `[tool.uv.sources.<pkg>]` header.
///
/// Quoted keys (e.g. `"zope.interface"`) are returned with their quotes.
fn parse_source_table(line: &str) -> Option<&str> {
    let package = line
        .strip_prefix(SOURCES_TABLE_PREFIX)?
        .strip_suffix(']')?
        .trim();
    (!package.is_empty()).then_some(package)
}

/// Extract the quoted value from an `index = "<value>"` line, quotes included.
fn parse_index_value(line: &str) -> Option<&str> {
    let value = line
        .strip_prefix("index")?
        .trim_start()
        .strip_prefix('=')?
        .trim();
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    quoted.then_some(value)
}

/// Scan one line of TOML and report whether it ends inside a multi-line string.
///
/// `open` is the string the line starts inside of, if any. Single-line strings
/// and comments are skipped so that quotes within them are not miscounted.
fn scan_strings(line: &str, mut open: Option<MultilineString>) -> Option<MultilineString> {
    let bytes = line.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let rest = &bytes[pos..];
        match open {
            Some(MultilineString::Basic) => {
                if rest[0] == b'\\' {
                    pos += 2;
                } else if rest.starts_with(b"\"\"\"") {
                    open = None;
                    pos += 3 + closing_quotes(&rest[3..], b'"');
                } else {
                    pos += 1;
                }
            }
            Some(MultilineString::Literal) => {
                if rest.starts_with(b"'''") {
                    open = None;
                    pos += 3 + closing_quotes(&rest[3..], b'\'');
                } else {
                    pos += 1;
                }
            }
            None => match rest[0] {
                b'#' => break,
                b'"' if rest.starts_with(b"\"\"\"") => {
                    open = Some(MultilineString::Basic);
                    pos += 3;
                }
                b'\'' if rest.starts_with(b"'''") => {
                    open = Some(MultilineString::Literal);
                    pos += 3;
                }
                b'"' => pos += 1 + basic_string_len(&rest[1..]),
                b'\'' => pos += 1 + literal_string_len(&rest[1..]),
                _ => pos += 1,
            },
        }
    }

    open
}

/// Up to two quotes right before a closing delimiter belong to the string.
fn closing_quotes(rest: &[u8], quote: u8) -> usize {
    rest.iter().take(2).take_while(|&&byte| byte == quote).count()
}

/// Length of a single-line basic string body plus its closing quote.
fn basic_string_len(rest: &[u8]) -> usize {
    let mut pos = 0;
    while pos < rest.len() {
        match rest[pos] {
            b'\\' => pos += 2,
            b'"' => return pos + 1,
            _ => pos += 1,
        }
    }
    rest.len()
}

/// Length of a single-line literal string body plus its closing quote.
fn literal_string_len(rest: &[u8]) -> usize {
    rest.iter()
        .position(|&byte| byte == b'\'')
        .map_or(rest.len(), |pos| pos + 1)
}
