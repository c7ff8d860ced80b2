//! # unrtf
//!
//! Extraction of HTML embedded in RTF-encoded text for Rust.
//!
//! When Microsoft Outlook sends HTML mail through TNEF, the original HTML
//! document travels wrapped in RTF control words. This library recognizes
//! that wrapping grammar, strips the RTF scaffolding, and reassembles the
//! embedded HTML in its original order.
//!
//! ## Quick Start
//!
//! ```
//! fn main() -> unrtf::Result<()> {
//!     let line = r#"{\*\htmltag1 <p>}Hello \htmlrtf0 World"#;
//!     let html = unrtf::extract_line(line)?;
//!     assert_eq!(html, "<p>Hello World");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Faithful grammar**: ordered recognizer rules matching real-world
//!   Outlook/TNEF payloads (control words, groups, hyperlink fields,
//!   HTML-content markers)
//! - **Fail-fast errors**: a single parse-failure kind with position and
//!   bounded excerpt; no silent recovery that would mask malformed input
//! - **Lazy or parallel**: line-by-line lazy iterator, or an
//!   order-preserving rayon path for large messages
//! - **Inspectable**: fragment streams serialize to JSON for debugging
//!
//! Lines are processed independently: a wrapper construct that spans a line
//! boundary is not reassembled. This mirrors the line-oriented layout of
//! Outlook-generated RTF and is a documented limitation, not a parsing gap.

pub mod detect;
pub mod error;
pub mod extract;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_rtf, RtfFormat};
pub use error::{Error, Result};
pub use extract::{
    extract_document, extract_document_parallel, extract_line, extract_lines, extract_reader,
    LineExtractor,
};
pub use parser::{tokenize, Fragment, Scanner, Token};
pub use render::{to_html, to_json, JsonFormat};

use std::fs;
use std::path::Path;

/// Extract the HTML document embedded in RTF bytes.
///
/// The input must start with the RTF magic (`{\rtf` plus a version digit);
/// anything else returns [`Error::UnknownFormat`]. Bytes outside UTF-8 are
/// replaced lossily — real Outlook payloads escape non-ASCII characters as
/// RTF hex escapes, which the grammar consumes.
///
/// # Example
/// ```
/// let data = b"{\\rtf1\\ansi\n\\htmlrtf0 Hello\n}";
/// let html = unrtf::extract_bytes(data).unwrap();
/// assert_eq!(html, "Hello");
/// ```
pub fn extract_bytes(data: &[u8]) -> Result<String> {
    detect_format_from_bytes(data)?;
    let text = String::from_utf8_lossy(data);
    extract_document(&text)
}

/// Extract the HTML document embedded in an RTF file.
///
/// # Arguments
///
/// * `path` - Path to the RTF file
///
/// # Example
///
/// ```no_run
/// use unrtf::extract_file;
///
/// let html = extract_file("message.rtf").unwrap();
/// println!("{}", html);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let data = fs::read(path)?;
    let html = extract_bytes(&data)?;
    log::debug!("extracted {} bytes of HTML", html.len());
    Ok(html)
}

/// Extract HTML from an RTF file and write it to an output file.
///
/// # Arguments
///
/// * `input` - Path to the RTF source file
/// * `output` - Path the HTML document is written to
///
/// # Example
///
/// ```no_run
/// use unrtf::convert_file;
///
/// convert_file("message.rtf", "message.html").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let html = extract_file(input)?;
    fs::write(output, &html)?;
    Ok(())
}
