//! Rendering of fragment streams.
//!
//! Extraction output is a pure, order-preserving fold over the stream; the
//! JSON form exists for inspection and debugging only.

use crate::error::{Error, Result};
use crate::parser::Fragment;

/// Fold a fragment stream into the extracted HTML text for one unit.
///
/// Tags, text runs, and synthesized newlines contribute their payload in
/// stream order; every other fragment contributes the empty string.
pub fn to_html(fragments: &[Fragment<'_>]) -> String {
    let mut output = String::with_capacity(fragments.iter().map(|f| f.token.text().len()).sum());
    for fragment in fragments {
        output.push_str(fragment.token.text());
    }
    output
}

/// JSON output format for fragment dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Human-readable, indented.
    Pretty,
    /// Single line, minimal.
    Compact,
}

/// Serialize a fragment stream to JSON for inspection.
pub fn to_json(fragments: &[Fragment<'_>], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(fragments),
        JsonFormat::Compact => serde_json::to_string(fragments),
    };
    result.map_err(|e| Error::Render(e.to_string()))
}
