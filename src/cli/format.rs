//! Output formatting utilities for CLI operations

use crate::alteration::ClassifiedAlteration;
use crate::Result;
use std::io::Write;
use std::str::FromStr;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text format (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use varnote::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert!(matches!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json));
    /// assert!(matches!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text));
    /// ```
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Write one classification to the output.
///
/// Text lines lead with the input and the assigned term; positional anchors,
/// gene tokens and a display name differing from the input follow when
/// present. JSON emits the full value, one object per line.
///
/// # Examples
///
/// ```
/// use varnote::cli::{output_classification, OutputFormat};
/// use varnote::classify;
/// use std::io::Cursor;
///
/// let alt = classify("V600E");
/// let mut buffer = Cursor::new(Vec::new());
/// output_classification(&mut buffer, &alt, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert_eq!(result, "V600E -> MISSENSE_VARIANT (MUTATION) 600-600\n");
/// ```
pub fn output_classification<W: Write>(
    writer: &mut W,
    alt: &ClassifiedAlteration,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(writer, "{}", serde_json::to_string(alt)?)?;
        }
        OutputFormat::Text => {
            let mut line = format!(
                "{} -> {} ({})",
                alt.original_text,
                alt.consequence.term(),
                alt.consequence.kind()
            );
            if let (Some(start), Some(end)) = (alt.protein_start, alt.protein_end) {
                line.push_str(&format!(" {}-{}", start, end));
            }
            if !alt.genes.is_empty() {
                let genes: Vec<&str> = alt.genes.iter().map(String::as_str).collect();
                line.push_str(&format!(" genes={}", genes.join(",")));
            }
            if alt.display_name != alt.original_text {
                line.push_str(&format!(" name=\"{}\"", alt.display_name));
            }
            writeln!(writer, "{}", line)?;
        }
    }
    Ok(())
}

/// Write extracted fusion gene tokens to the output.
///
/// # Examples
///
/// ```
/// use varnote::cli::{output_genes, OutputFormat};
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let genes = vec!["BCR".to_string(), "ABL1".to_string()];
/// output_genes(&mut buffer, "BCR::ABL1", &genes, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert_eq!(result, "BCR::ABL1 -> BCR,ABL1\n");
/// ```
pub fn output_genes<W: Write>(
    writer: &mut W,
    input: &str,
    genes: &[String],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "input": input, "genes": genes });
            writeln!(writer, "{}", value)?;
        }
        OutputFormat::Text => {
            if genes.is_empty() {
                writeln!(writer, "{} -> no fusion genes", input)?;
            } else {
                writeln!(writer, "{} -> {}", input, genes.join(","))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;
    use std::io::Cursor;

    fn render(alt: &ClassifiedAlteration, format: OutputFormat) -> String {
        let mut buffer = Cursor::new(Vec::new());
        output_classification(&mut buffer, alt, format).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_text_output_substitution() {
        let alt = classify("V600E");
        assert_eq!(
            render(&alt, OutputFormat::Text),
            "V600E -> MISSENSE_VARIANT (MUTATION) 600-600\n"
        );
    }

    #[test]
    fn test_text_output_with_display_name() {
        let alt = classify("V600");
        assert_eq!(
            render(&alt, OutputFormat::Text),
            "V600 -> NA (MUTATION) 600-600 name=\"V600 Missense Mutations\"\n"
        );
    }

    #[test]
    fn test_text_output_fusion() {
        let alt = classify("BCR::ABL1");
        assert_eq!(
            render(&alt, OutputFormat::Text),
            "BCR::ABL1 -> FUSION (STRUCTURAL_VARIANT) genes=ABL1,BCR name=\"BCR-ABL1 Fusion\"\n"
        );
    }

    #[test]
    fn test_text_output_unknown() {
        let alt = classify("not a variant");
        assert_eq!(
            render(&alt, OutputFormat::Text),
            "not a variant -> UNKNOWN (MUTATION)\n"
        );
    }

    #[test]
    fn test_json_output_is_parseable() {
        let alt = classify("E746_A750del");
        let rendered = render(&alt, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["consequence"]["term"], "INFRAME_DELETION");
        assert_eq!(value["protein_start"], 746);
        assert_eq!(value["protein_end"], 750);
    }

    #[test]
    fn test_output_genes_text() {
        let mut buffer = Cursor::new(Vec::new());
        output_genes(&mut buffer, "V600E", &[], OutputFormat::Text).unwrap();
        let result = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(result, "V600E -> no fusion genes\n");
    }

    #[test]
    fn test_output_genes_json() {
        let mut buffer = Cursor::new(Vec::new());
        let genes = vec!["EML4".to_string(), "ALK".to_string()];
        output_genes(&mut buffer, "EML4-ALK fusion", &genes, OutputFormat::Json).unwrap();
        let result = String::from_utf8(buffer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["genes"][0], "EML4");
        assert_eq!(value["genes"][1], "ALK");
    }
}
