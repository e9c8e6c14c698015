//! Line classification and rendering for URL lists.

/// Prefix that marks a line as a URL/description pair.
const URL_PREFIX: &str = "http";

/// A line consisting only of this marker becomes a blank line.
const SECTION_BREAK: &str = "#";

/// Whitespace trimmed for classification and around link parts: Unicode
/// `White_Space` plus U+FEFF, minus U+0085.
fn is_list_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{0085}' && c.is_whitespace())
}

fn trim(text: &str) -> &str {
    text.trim_matches(is_list_whitespace)
}

/// The classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A URL followed by a quoted description.
    Link { url: &'a str, description: &'a str },
    /// A lone `#`, rendered as an empty line.
    SectionBreak,
    /// Anything else, emitted verbatim.
    Passthrough(&'a str),
    /// A URL line without any quote character. It produces no output.
    Dropped,
}

impl Line<'_> {
    /// Renders the line as Markdown, or `None` if it contributes nothing.
    pub fn render(&self) -> Option<String> {
        match self {
            Line::Link { url, description } => Some(format!("- [{description}]({url})")),
            Line::SectionBreak => Some(String::new()),
            Line::Passthrough(text) => Some((*text).to_string()),
            Line::Dropped => None,
        }
    }
}

/// Classifies a raw input line.
///
/// Whitespace is trimmed only to decide which kind of line this is.
/// Passthrough lines keep their original content.
pub fn classify_line(line: &str) -> Line<'_> {
    let trimmed = trim(line);

    if trimmed.starts_with(URL_PREFIX) {
        return parse_link(line);
    }

    if trimmed == SECTION_BREAK {
        return Line::SectionBreak;
    }

    Line::Passthrough(line)
}

fn parse_link(line: &str) -> Line<'_> {
    let mut parts = line.split('"');

    // `split` always yields the text before the first quote; the second
    // part exists only if a quote was found. Text after a closing quote is ignored.
    let (Some(url), Some(description)) = (parts.next(), parts.next()) else {
        return Line::Dropped;
    };

    let description = trim(description);
    let description = description.strip_prefix('~').unwrap_or(description);

    Line::Link {
        url: trim(url),
        description,
    }
}

/// Maps each input line to zero or one output lines, preserving order.
pub fn transform_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = classify_line(raw);
            if line == Line::Dropped {
                log::warn!(
                    "Skipping line {}: URL line has no quoted description",
                    index + 1
                );
            }
            line.render()
        })
        .collect()
}

/// Converts a whole URL list into Markdown.
///
/// The content is split on `\n` only, so a trailing newline in the input
/// yields a trailing empty line in the output.
pub fn transform(content: &str) -> String {
    let input_lines = content.split('\n').count();
    let output = transform_lines(content.split('\n'));

    log::debug!(
        "Transformed {} input lines into {} output lines",
        input_lines,
        output.len()
    );

    output.join("\n")
}
