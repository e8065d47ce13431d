//! CLI utilities for varnote
//!
//! This module provides testable functions used by the CLI binary.
//! By extracting pure functions and I/O-abstracted functions to the library,
//! we enable comprehensive unit testing without requiring end-to-end CLI tests.

pub mod format;

// Re-export commonly used items
pub use format::{output_classification, output_genes, OutputFormat};

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Strip UTF-8 BOM from the beginning of a string if present.
///
/// This is common when files are exported from Windows applications or Excel.
///
/// # Examples
///
/// ```
/// use varnote::cli::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}V600E"), "V600E");
/// assert_eq!(strip_bom("V600E"), "V600E");
/// ```
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

/// Strip inline comments from an alteration line.
///
/// Comments start with `#` and extend to the end of the line.
/// Leading/trailing whitespace is also trimmed.
///
/// # Examples
///
/// ```
/// use varnote::cli::strip_inline_comment;
///
/// assert_eq!(strip_inline_comment("E746_A750del  # EGFR exon 19"), "E746_A750del");
/// assert_eq!(strip_inline_comment("E746_A750del"), "E746_A750del");
/// assert_eq!(strip_inline_comment("# full line comment"), "");
/// ```
pub fn strip_inline_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) => s[..pos].trim(),
        None => s.trim(),
    }
}

/// Process an input line: trim whitespace, strip BOM (for first line), and strip inline comments.
///
/// Returns None if the line is empty or a comment-only line.
///
/// # Arguments
///
/// * `line` - The input line to process
/// * `is_first_line` - Whether this is the first line of input (for BOM handling).
///   Note: UTF-8 BOM only appears at the beginning of a file, never on subsequent lines,
///   so we intentionally only check for it on the first line.
///
/// # Examples
///
/// ```
/// use varnote::cli::process_input_line;
///
/// // Normal line
/// assert_eq!(process_input_line("V600E", false), Some("V600E"));
///
/// // Line with inline comment
/// assert_eq!(process_input_line("V600E  # note", false), Some("V600E"));
///
/// // First line with BOM
/// assert_eq!(process_input_line("\u{feff}V600E", true), Some("V600E"));
///
/// // Empty line
/// assert_eq!(process_input_line("", false), None);
///
/// // Comment-only line
/// assert_eq!(process_input_line("# comment", false), None);
/// ```
pub fn process_input_line(line: &str, is_first_line: bool) -> Option<&str> {
    let line = line.trim();
    let line = if is_first_line { strip_bom(line) } else { line };
    let line = strip_inline_comment(line);

    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}
