//! RTF format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// RTF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtfFormat {
    /// RTF specification version (e.g. 1)
    pub version: u32,
}

impl std::fmt::Display for RtfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RTF {}", self.version)
    }
}

/// RTF magic bytes: {\rtf
const RTF_MAGIC: &[u8] = b"{\\rtf";
const RTF_MAGIC_LEN: usize = 5;

/// Detect RTF format from a file path.
///
/// # Arguments
/// * `path` - Path to the RTF file
///
/// # Returns
/// * `Ok(RtfFormat)` if the file starts with a valid RTF header
/// * `Err(Error::UnknownFormat)` if the file is not RTF
///
/// # Example
/// ```no_run
/// use unrtf::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("message.rtf").unwrap();
/// println!("RTF version: {}", format.version);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<RtfFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    let n = reader.read(&mut header)?;
    detect_format_from_bytes(&header[..n])
}

/// Detect RTF format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first bytes of the input
///
/// # Returns
/// * `Ok(RtfFormat)` if the data starts with a valid RTF header
/// * `Err(Error::UnknownFormat)` if the data is not RTF
pub fn detect_format_from_bytes(data: &[u8]) -> Result<RtfFormat> {
    if data.len() < RTF_MAGIC_LEN + 1 {
        return Err(Error::UnknownFormat);
    }

    // Check for RTF magic bytes
    if !data.starts_with(RTF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    // Extract the version digits (e.g. 1 from "{\rtf1")
    let digits: Vec<u8> = data[RTF_MAGIC_LEN..]
        .iter()
        .copied()
        .take_while(u8::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return Err(Error::UnknownFormat);
    }

    let version = String::from_utf8_lossy(&digits)
        .parse::<u32>()
        .map_err(|_| Error::UnknownFormat)?;

    Ok(RtfFormat { version })
}

/// Check if a file is RTF-encoded.
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `true` if the file starts with a valid RTF header
/// * `false` otherwise
pub fn is_rtf<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent RTF-encoded text.
///
/// # Arguments
/// * `data` - Byte slice to check
///
/// # Returns
/// * `true` if the data starts with a valid RTF header
/// * `false` otherwise
pub fn is_rtf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
