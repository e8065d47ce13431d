//! Fusion notation detector.
//!
//! Recognizes three surface forms, tried in order:
//!
//! 1. `GENE1::GENE2`, optionally followed by the word `fusion`
//! 2. `GENE1-GENE2 fusion` — the word `fusion` is mandatory here, since a
//!    bare hyphen also appears in ordinary ranges elsewhere in the grammar
//! 3. the bare word `fusion` / `fusions`

use once_cell::sync::Lazy;
use regex::Regex;

/// Preferred two-gene separator.
pub const FUSION_SEPARATOR: &str = "::";

/// Legacy two-gene separator; requires the trailing `fusion` word.
pub const FUSION_ALT_SEPARATOR: &str = "-";

static FUSION_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)::(\w+)\s*(?i:fusion)?\s*$").unwrap());

static FUSION_PAIR_ALT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)-(\w+)\s+(?i:fusion)\s*$").unwrap());

/// A recognized fusion notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FusionMatch {
    /// Gene symbols in notation order; empty for the bare-word form.
    pub genes: Vec<String>,
    /// Human-readable name.
    pub display_name: String,
}

/// Try to recognize fusion notation in a normalized alteration string.
pub(crate) fn detect(text: &str) -> Option<FusionMatch> {
    let genes = fusion_genes(text);
    if !genes.is_empty() {
        let display_name = format!("{} Fusion", genes.join(FUSION_ALT_SEPARATOR));
        return Some(FusionMatch {
            genes,
            display_name,
        });
    }

    if text.eq_ignore_ascii_case("fusion") || text.eq_ignore_ascii_case("fusions") {
        return Some(FusionMatch {
            genes: Vec::new(),
            display_name: capitalize(text),
        });
    }

    None
}

/// Whether the string is fusion notation in any of the recognized forms.
pub fn is_fusion(text: &str) -> bool {
    detect(text.trim()).is_some()
}

/// Extract the gene symbol tokens from two-gene fusion notation.
///
/// Returns both symbols in notation order, or an empty vector when the
/// string is not explicit two-gene notation. Useful on its own for callers
/// that need gene names without a full classification.
///
/// # Example
///
/// ```
/// use varnote::fusion_genes;
///
/// assert_eq!(fusion_genes("BCR::ABL1"), vec!["BCR", "ABL1"]);
/// assert_eq!(fusion_genes("EML4-ALK fusion"), vec!["EML4", "ALK"]);
/// assert!(fusion_genes("V600E").is_empty());
/// ```
pub fn fusion_genes(text: &str) -> Vec<String> {
    let caps = FUSION_PAIR
        .captures(text)
        .or_else(|| FUSION_PAIR_ALT.captures(text));

    match caps {
        Some(caps) => vec![caps[1].to_string(), caps[2].to_string()],
        None => Vec::new(),
    }
}

fn capitalize(text: &str) -> String {
    match text.chars().next() {
        Some(first) => format!(
            "{}{}",
            first.to_uppercase(),
            text[first.len_utf8()..].to_lowercase()
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_colon_pair() {
        let m = detect("BCR::ABL1").unwrap();
        assert_eq!(m.genes, vec!["BCR", "ABL1"]);
        assert_eq!(m.display_name, "BCR-ABL1 Fusion");
    }

    #[test]
    fn test_double_colon_pair_with_fusion_word() {
        let m = detect("BCR::ABL1 fusion").unwrap();
        assert_eq!(m.genes, vec!["BCR", "ABL1"]);
    }

    #[test]
    fn test_hyphen_pair_requires_fusion_word() {
        let m = detect("EML4-ALK fusion").unwrap();
        assert_eq!(m.genes, vec!["EML4", "ALK"]);
        assert_eq!(m.display_name, "EML4-ALK Fusion");

        // Without the word this is not fusion notation.
        assert!(detect("EML4-ALK").is_none());
    }

    #[test]
    fn test_bare_word() {
        let m = detect("fusion").unwrap();
        assert!(m.genes.is_empty());
        assert_eq!(m.display_name, "Fusion");

        let m = detect("fUSIONS").unwrap();
        assert_eq!(m.display_name, "Fusions");
    }

    #[test]
    fn test_empty_gene_tokens_rejected() {
        assert!(detect("::").is_none());
        assert!(detect("BCR::").is_none());
        assert!(detect("::ABL1").is_none());
    }

    #[test]
    fn test_not_fusion() {
        assert!(detect("V600E").is_none());
        assert!(detect("Amplification").is_none());
        assert!(!is_fusion("E746_A750del"));
    }

    #[test]
    fn test_gene_extraction_standalone() {
        assert_eq!(fusion_genes("NTRK1::TPM3"), vec!["NTRK1", "TPM3"]);
        assert!(fusion_genes("fusion").is_empty());
    }
}
