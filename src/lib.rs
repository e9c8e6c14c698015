//! `urls2md` turns a plain list of links into Markdown.
//!
//! Each input line is one of:
//!
//! - a URL line, starting with `http` and followed by a quoted description,
//!   rendered as `- [description](url)`;
//! - a lone `#`, rendered as an empty line;
//! - anything else, copied through unchanged.
//!
//! # Example
//!
//! ```rust
//! let markdown = urls2md::transform("https://a.com \"A\"\n#\nplain text");
//! assert_eq!(markdown, "- [A](https://a.com)\n\nplain text");
//! ```

pub mod error;
pub mod transform;

pub use crate::transform::{classify_line, transform, transform_lines, Line};

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Byte order mark dropped from the start of the input.
const BOM: char = '\u{feff}';

/// Reads a URL list from disk and returns its Markdown rendering.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than treated as
/// a read failure. A leading byte order mark is discarded.
pub fn convert_file(path: &Path) -> anyhow::Result<String> {
    log::debug!("Reading URL list from {}", path.display());

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?;

    Ok(convert_bytes(&bytes))
}

/// Decodes raw input and renders it as Markdown.
pub fn convert_bytes(bytes: &[u8]) -> String {
    let content = String::from_utf8_lossy(bytes);
    let content = content.strip_prefix(BOM).unwrap_or(&*content);

    transform(content)
}
