//! Alteration notation classification.
//!
//! Curators describe variants in loosely HGVS-like free text: protein changes
//! (`V600E`, `E746_A750del`), fusions (`BCR::ABL1`), copy-number terms
//! (`Amplification`) and categorical phrases (`Truncating mutations`). This
//! module turns one such string into a [`ClassifiedAlteration`].
//!
//! Classification is total: any string produces a value, and anything the
//! grammar does not recognize carries an `UNKNOWN` consequence rather than an
//! error. Inputs are normalized first (`p.` prefix, bracketed annotation,
//! exclusion clause), then routed through the fusion and copy-number
//! detectors before falling through to the protein-change grammar.
//!
//! # Example
//!
//! ```
//! use varnote::{classify, ConsequenceType};
//!
//! let alt = classify("p.E746_A750del");
//! assert_eq!(alt.consequence.term(), "INFRAME_DELETION");
//! assert_eq!(alt.consequence.kind(), ConsequenceType::Mutation);
//! assert_eq!(alt.protein_start, Some(746));
//! assert_eq!(alt.protein_end, Some(750));
//! ```

mod cna;
mod fusion;
mod grammar;
mod naming;

pub use cna::is_copy_number_alteration;
pub use fusion::{fusion_genes, is_fusion, FUSION_ALT_SEPARATOR, FUSION_SEPARATOR};
pub use grammar::suggest_range_code;

use crate::consequence::{Consequence, SvTerm};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Exclusion clause wrapping a notation body: `V600{excluding V600E}`.
// Longest keyword first: ordered alternation would otherwise stop at
// `exclude` and leak `ing ` into the captured text.
static EXCLUSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*)\{\s*(excluding|exclude)(.*)\}$").unwrap());

/// One classified alteration string.
///
/// Immutable value produced by [`classify`]. Residues are present only for
/// mutation-grammar results; `genes` is non-empty only for explicit two-gene
/// fusion notation. Whenever both positions are set, `protein_start <=
/// protein_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAlteration {
    /// Input string exactly as given.
    pub original_text: String,
    /// Human-readable name, possibly suffixed (`"V600 Missense Mutations"`).
    pub display_name: String,
    /// The single consequence assigned to this alteration.
    pub consequence: Consequence,
    /// Reference residues, e.g. `"V"` in `V600E`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_residues: Option<String>,
    /// Variant residues, e.g. `"E"` in `V600E`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_residues: Option<String>,
    /// First affected protein position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_start: Option<u32>,
    /// Last affected protein position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_end: Option<u32>,
    /// Gene symbol tokens from two-gene fusion notation.
    #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
    pub genes: BTreeSet<String>,
}

/// Classify one alteration string.
///
/// Never fails: unrecognized input degrades to an `UNKNOWN` mutation
/// consequence with no positional anchor.
///
/// # Example
///
/// ```
/// use varnote::classify;
///
/// let alt = classify("BCR::ABL1");
/// assert_eq!(alt.consequence.term(), "FUSION");
/// assert!(alt.genes.contains("BCR"));
/// assert!(alt.genes.contains("ABL1"));
/// ```
pub fn classify(raw: &str) -> ClassifiedAlteration {
    let (text, excluded) = normalize(raw);

    if let Some(m) = fusion::detect(&text) {
        debug!(input = raw, "classified as fusion");
        return ClassifiedAlteration {
            original_text: raw.to_string(),
            display_name: m.display_name,
            consequence: Consequence::StructuralVariant(SvTerm::Fusion),
            ref_residues: None,
            variant_residues: None,
            protein_start: None,
            protein_end: None,
            genes: m.genes.into_iter().collect(),
        };
    }

    if let Some(term) = cna::detect(&text) {
        debug!(input = raw, term = term.as_str(), "classified as copy-number");
        return ClassifiedAlteration {
            original_text: raw.to_string(),
            display_name: term.display_name(),
            consequence: Consequence::CopyNumber(term),
            ref_residues: None,
            variant_residues: None,
            protein_start: None,
            protein_end: None,
            genes: BTreeSet::new(),
        };
    }

    let matched = grammar::classify_protein_change(&text);
    debug!(
        input = raw,
        term = matched.term.as_str(),
        "classified as protein change"
    );
    let display_name = naming::display_name(&text, &matched, excluded.as_deref());

    ClassifiedAlteration {
        original_text: raw.to_string(),
        display_name,
        consequence: Consequence::Mutation(matched.term),
        ref_residues: matched.ref_residues,
        variant_residues: matched.variant_residues,
        protein_start: matched.start,
        protein_end: matched.end,
        genes: BTreeSet::new(),
    }
}

/// Normalize a raw alteration string.
///
/// Strips a leading `p.`, truncates at the first `[` (bracketed annotation),
/// extracts the exclusion clause, and trims whitespace. Returns the string to
/// classify and the excluded text, if any.
fn normalize(raw: &str) -> (String, Option<String>) {
    let mut text = raw;

    if let Some(stripped) = text.strip_prefix("p.") {
        text = stripped;
    }

    if let Some(idx) = text.find('[') {
        text = &text[..idx];
    }

    let (body, excluded) = match EXCLUSION.captures(text) {
        Some(caps) => {
            let excluded = caps[3].trim();
            (
                caps.get(1).map_or("", |m| m.as_str()),
                (!excluded.is_empty()).then(|| excluded.to_string()),
            )
        }
        None => (text, None),
    };

    (body.trim().to_string(), excluded)
}

/// Whether the string carries an exclusion clause
/// (`V600{excluding V600E}`).
pub fn has_exclusion_criteria(text: &str) -> bool {
    EXCLUSION.is_match(text)
}

/// Strip the exclusion clause, returning the notation body.
///
/// Strings without a clause come back trimmed but otherwise unchanged.
///
/// # Example
///
/// ```
/// use varnote::remove_exclusion_criteria;
///
/// assert_eq!(remove_exclusion_criteria("V600{excluding V600E}"), "V600");
/// assert_eq!(remove_exclusion_criteria("V600E"), "V600E");
/// ```
pub fn remove_exclusion_criteria(text: &str) -> String {
    match EXCLUSION.captures(text) {
        Some(caps) => caps[1].trim().to_string(),
        None => text.trim().to_string(),
    }
}
