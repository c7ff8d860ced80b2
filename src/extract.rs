//! Line-oriented extraction drivers.
//!
//! The grammar operates on one unit of input at a time (conventionally one
//! line). The drivers here apply it across a whole message: lazily with
//! [`LineExtractor`], eagerly with [`extract_document`], in parallel with
//! [`extract_document_parallel`], or streaming from a reader with
//! [`extract_reader`]. Units are processed independently; a grammar
//! construct spanning a line boundary is a documented limitation of the
//! format, not something the drivers try to stitch back together.

use std::io::{BufRead, BufReader, Read};

use rayon::prelude::*;

use crate::error::Result;
use crate::parser::tokenize;
use crate::render::to_html;

/// Extract the HTML embedded in a single line of RTF.
///
/// Whitespace-only input (including the empty string) passes through
/// unchanged without invoking the grammar. Any other input is tokenized and
/// reduced; a grammar failure is returned as [`Error::Parse`].
///
/// [`Error::Parse`]: crate::Error::Parse
///
/// # Example
/// ```
/// use unrtf::extract_line;
///
/// assert_eq!(extract_line(r"\htmlrtf0 Hello World").unwrap(), "Hello World");
/// assert_eq!(extract_line("   ").unwrap(), "   ");
/// ```
pub fn extract_line(line: &str) -> Result<String> {
    if line.chars().all(char::is_whitespace) {
        return Ok(line.to_string());
    }
    let fragments = tokenize(line)?;
    Ok(to_html(&fragments))
}

/// Lazy extractor over a sequence of lines.
///
/// Yields the non-empty extraction result of each line in input order.
/// Whitespace-only lines and lines that reduce to nothing yield no item.
/// The first parse failure is yielded wrapped in [`Error::Line`] with the
/// 0-based index of the offending line, after which the iterator is fused —
/// extraction is fail-fast and produces no partial output for a failed line.
///
/// [`Error::Line`]: crate::Error::Line
pub struct LineExtractor<I> {
    lines: I,
    index: usize,
    done: bool,
}

/// Extract HTML lazily from an ordered sequence of lines.
///
/// # Example
/// ```
/// use unrtf::extract_lines;
///
/// let lines = [r"{\*\htmltag1 <p>}Hello", "", r"\htmlrtf0 World"];
/// let pieces: Vec<String> = extract_lines(lines)
///     .collect::<unrtf::Result<_>>()
///     .unwrap();
/// assert_eq!(pieces, ["<p>Hello", "World"]);
/// ```
pub fn extract_lines<I>(lines: I) -> LineExtractor<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    LineExtractor {
        lines: lines.into_iter(),
        index: 0,
        done: false,
    }
}

impl<I, S> Iterator for LineExtractor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let Some(line) = self.lines.next() else {
                self.done = true;
                return None;
            };
            let index = self.index;
            self.index += 1;

            let line = line.as_ref();
            if line.chars().all(char::is_whitespace) {
                // blank units contribute nothing to the document
                continue;
            }
            match extract_line(line) {
                Ok(html) if html.is_empty() => continue,
                Ok(html) => return Some(Ok(html)),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.at_line(index)));
                }
            }
        }
    }
}

/// Extract the full HTML document embedded in an RTF text.
///
/// Lines are processed independently and their outputs concatenated in
/// input order. The first parse failure aborts the extraction.
pub fn extract_document(text: &str) -> Result<String> {
    let mut output = String::new();
    for piece in extract_lines(text.lines()) {
        output.push_str(&piece?);
    }
    Ok(output)
}

/// Parallel variant of [`extract_document`].
///
/// Lines are extracted on the rayon thread pool. Output order equals input
/// order, and on failure the reported line index is the lowest failing one,
/// so the result is identical to the sequential path in every observable
/// way.
pub fn extract_document_parallel(text: &str) -> Result<String> {
    let lines: Vec<&str> = text.lines().collect();
    log::debug!("extracting {} lines on the rayon pool", lines.len());

    let results: Vec<Result<String>> = lines
        .par_iter()
        .map(|line| {
            if line.chars().all(char::is_whitespace) {
                Ok(String::new())
            } else {
                extract_line(line)
            }
        })
        .collect();

    let mut output = String::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(html) => output.push_str(&html),
            Err(e) => return Err(e.at_line(index)),
        }
    }
    Ok(output)
}

/// Extract the full HTML document from any line-oriented reader.
///
/// Streaming equivalent of [`extract_document`]; I/O failures surface as
/// [`Error::Io`].
///
/// [`Error::Io`]: crate::Error::Io
pub fn extract_reader<R: Read>(reader: R) -> Result<String> {
    let mut output = String::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.chars().all(char::is_whitespace) {
            continue;
        }
        let html = extract_line(&line).map_err(|e| e.at_line(index))?;
        output.push_str(&html);
    }
    Ok(output)
}
