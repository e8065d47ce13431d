//! Classifier conformance tests using rstest parameterized tests
//!
//! Test categories:
//! - Grammar rules: each pattern rule and its term-priority branches
//! - Detectors: fusion and copy-number forms
//! - Normalization: prefix/bracket/exclusion handling observable through classify
//! - Naming: positioned suffixing and exclusion-clause behavior

use pretty_assertions::assert_eq;
use rstest::rstest;
use varnote::{classify, ConsequenceType};

// =============================================================================
// Mutation grammar: term assignment
// =============================================================================

#[rstest]
// Substitutions
#[case("V600E", "MISSENSE_VARIANT")]
#[case("T790M", "MISSENSE_VARIANT")]
#[case("G12C", "MISSENSE_VARIANT")]
// Stop gain/loss priority
#[case("V600*", "STOP_GAINED")]
#[case("*959R", "STOP_LOST")]
#[case("*757*", "STOP_LOST")]
// Synonymous before start-lost
#[case("V600V", "SYNONYMOUS_VARIANT")]
#[case("M1M", "SYNONYMOUS_VARIANT")]
// Start lost
#[case("M1I", "START_LOST")]
#[case("M1?", "START_LOST")]
// Indeterminate effect
#[case("T790?", "ANY")]
// Residue-level indels through the substitution rule
#[case("IK744K", "INFRAME_DELETION")]
#[case("K744IK", "INFRAME_INSERTION")]
#[case("VK600EL", "MISSENSE_VARIANT")]
// Positional alteration
#[case("V600", "NA")]
// Keyworded indels
#[case("E746_A750del", "INFRAME_DELETION")]
#[case("D770_N771insNPG", "INFRAME_INSERTION")]
#[case("T790ins", "INFRAME_INSERTION")]
// delins length arithmetic
#[case("E746_A750delinsQ", "INFRAME_DELETION")]
#[case("V600delinsK", "MISSENSE_VARIANT")]
#[case("V600delinsKLM", "INFRAME_INSERTION")]
#[case("E746_A747delinsQP", "MISSENSE_VARIANT")]
// Splice forms
#[case("X453_P454splice", "SPLICE_REGION_VARIANT")]
#[case("E1978_splice", "SPLICE_REGION_VARIANT")]
#[case("700splice", "SPLICE_REGION_VARIANT")]
#[case("E1978splice", "SPLICE_REGION_VARIANT")]
// Range effect codes
#[case("V600_K601mis", "MISSENSE_VARIANT")]
#[case("762_823ins", "INFRAME_INSERTION")]
#[case("V600_K601del", "INFRAME_DELETION")]
#[case("V600_K601dup", "INFRAME_INSERTION")]
#[case("459_469trunc", "FEATURE_TRUNCATION")]
#[case("V600_K601fs", "FEATURE_TRUNCATION")]
#[case("T599_V600mut", "ANY")]
// Frameshifts
#[case("V600fs", "FRAMESHIFT_VARIANT")]
#[case("V600Efs*12", "FRAMESHIFT_VARIANT")]
#[case("*757Lfs*2", "FRAMESHIFT_VARIANT")]
// Single-site keyword forms
#[case("A767dup", "INFRAME_INSERTION")]
#[case("V600del", "INFRAME_DELETION")]
// Extensions
#[case("*959Qext*14", "STOP_LOST")]
#[case("*315TextALGT*", "STOP_LOST")]
#[case("*327Aext*?", "STOP_LOST")]
#[case("M1ext-5", "INFRAME_INSERTION")]
// Synonymous / stop-retained notation
#[case("A123=", "SYNONYMOUS_VARIANT")]
#[case("X123=", "SYNONYMOUS_VARIANT")]
#[case("*757=", "STOP_RETAINED_VARIANT")]
#[case("123=", "SYNONYMOUS_VARIANT")]
// Bare positions and fallthrough
#[case("600", "UNKNOWN")]
#[case("Oncogenic Mutations", "UNKNOWN")]
#[case("exon 19", "UNKNOWN")]
#[case("", "UNKNOWN")]
// Categorical override
#[case("Truncating mutations", "FEATURE_TRUNCATION")]
#[case("truncating mutation", "FEATURE_TRUNCATION")]
#[case("TRUNCATING MUTATIONS", "FEATURE_TRUNCATION")]
fn test_mutation_terms(#[case] input: &str, #[case] term: &str) {
    let alt = classify(input);
    assert_eq!(alt.consequence.term(), term, "input: {}", input);
    assert_eq!(alt.consequence.kind(), ConsequenceType::Mutation);
}

// =============================================================================
// Mutation grammar: positional anchoring
// =============================================================================

#[rstest]
#[case("V600E", Some(600), Some(600))]
#[case("E746_A750del", Some(746), Some(750))]
#[case("D770_N771insNPG", Some(770), Some(771))]
#[case("X453_P454splice", Some(453), Some(454))]
#[case("E1978_splice", Some(1978), Some(1978))]
#[case("V600_K601mis", Some(600), Some(601))]
#[case("V600fs", Some(600), Some(600))]
#[case("A767dup", Some(767), Some(767))]
#[case("*959Qext*14", Some(959), Some(959))]
#[case("M1ext-5", Some(1), Some(1))]
#[case("A123=", Some(123), Some(123))]
#[case("600", Some(600), Some(600))]
// Multi-residue reference widens the range
#[case("IK744K", Some(744), Some(745))]
// No anchor for unrecognized text
#[case("Oncogenic Mutations", None, None)]
// Descending ranges never anchor
#[case("A750_E746del", None, None)]
fn test_positions(#[case] input: &str, #[case] start: Option<u32>, #[case] end: Option<u32>) {
    let alt = classify(input);
    assert_eq!(alt.protein_start, start, "start for {}", input);
    assert_eq!(alt.protein_end, end, "end for {}", input);
}

#[rstest]
#[case("V600E", Some("V"), Some("E"))]
#[case("V600", Some("V"), None)]
#[case("V600*", Some("V"), Some("*"))]
#[case("IK744K", Some("IK"), Some("K"))]
// Range forms record no residues
#[case("E746_A750del", None, None)]
// Single-site keyword forms keep the leading residue
#[case("V600del", Some("V"), None)]
#[case("V600fs", Some("V"), None)]
#[case("A123=", Some("A"), None)]
fn test_residues(#[case] input: &str, #[case] ref_res: Option<&str>, #[case] var_res: Option<&str>) {
    let alt = classify(input);
    assert_eq!(alt.ref_residues.as_deref(), ref_res, "ref for {}", input);
    assert_eq!(alt.variant_residues.as_deref(), var_res, "var for {}", input);
}

// =============================================================================
// Rule ordering
// =============================================================================

#[rstest]
// Lowercase keyword forms must not be swallowed by the substitution rule
#[case("V600del", "INFRAME_DELETION")]
#[case("V600fs", "FRAMESHIFT_VARIANT")]
#[case("V600ins", "INFRAME_INSERTION")]
// The indel rule owns delins before the single-site rule sees it
#[case("V600delinsK", "MISSENSE_VARIANT")]
// Splice wins over a bare range code reading
#[case("X453_P454splice", "SPLICE_REGION_VARIANT")]
fn test_rule_order(#[case] input: &str, #[case] term: &str) {
    assert_eq!(classify(input).consequence.term(), term, "input: {}", input);
}

// =============================================================================
// Fusion detector
// =============================================================================

#[rstest]
#[case("BCR::ABL1", &["ABL1", "BCR"])]
#[case("BCR::ABL1 fusion", &["ABL1", "BCR"])]
#[case("NTRK1::TPM3", &["NTRK1", "TPM3"])]
#[case("EML4-ALK fusion", &["ALK", "EML4"])]
#[case("EML4-ALK Fusion", &["ALK", "EML4"])]
fn test_two_gene_fusions(#[case] input: &str, #[case] genes: &[&str]) {
    let alt = classify(input);
    assert_eq!(alt.consequence.term(), "FUSION");
    assert_eq!(alt.consequence.kind(), ConsequenceType::StructuralVariant);
    let found: Vec<&str> = alt.genes.iter().map(String::as_str).collect();
    assert_eq!(found, genes, "genes for {}", input);
    assert_eq!(alt.protein_start, None);
    assert_eq!(alt.ref_residues, None);
}

#[rstest]
#[case("Fusion", "Fusion")]
#[case("fusion", "Fusion")]
#[case("Fusions", "Fusions")]
#[case("fUSIONS", "Fusions")]
fn test_bare_fusion_word(#[case] input: &str, #[case] name: &str) {
    let alt = classify(input);
    assert_eq!(alt.consequence.term(), "FUSION");
    assert!(alt.genes.is_empty());
    assert_eq!(alt.display_name, name);
}

#[rstest]
// A hyphen pair without the fusion word is not fusion notation
#[case("EML4-ALK")]
// Empty tokens are rejected
#[case("::")]
#[case("BCR::")]
fn test_not_fusion(#[case] input: &str) {
    assert_ne!(classify(input).consequence.term(), "FUSION", "input: {}", input);
}

// =============================================================================
// Copy-number detector
// =============================================================================

#[rstest]
#[case("Amplification", "AMPLIFICATION")]
#[case("AMPLIFICATION", "AMPLIFICATION")]
#[case("amplification", "AMPLIFICATION")]
#[case("Deletion", "DELETION")]
#[case("Gain", "GAIN")]
#[case("Loss", "LOSS")]
fn test_copy_number_terms(#[case] input: &str, #[case] term: &str) {
    let alt = classify(input);
    assert_eq!(alt.consequence.term(), term);
    assert_eq!(alt.consequence.kind(), ConsequenceType::CopyNumberAlteration);
    assert_eq!(alt.protein_start, None);
    assert_eq!(alt.ref_residues, None);
    assert!(alt.genes.is_empty());
}

#[test]
fn test_cna_display_name_is_capitalized() {
    assert_eq!(classify("AMPLIFICATION").display_name, "Amplification");
    assert_eq!(classify("loss").display_name, "Loss");
}

#[rstest]
// Near-misses fall through to the grammar instead of being malformed CNAs
#[case("Amplifications")]
#[case("copy number gain")]
fn test_cna_near_miss_falls_through(#[case] input: &str) {
    let alt = classify(input);
    assert_eq!(alt.consequence.kind(), ConsequenceType::Mutation);
    assert_eq!(alt.consequence.term(), "UNKNOWN");
}

// =============================================================================
// Normalization
// =============================================================================

#[rstest]
#[case("p.V600E", "MISSENSE_VARIANT")]
#[case("p.E746_A750del", "INFRAME_DELETION")]
#[case("V600E [hotspot]", "MISSENSE_VARIANT")]
#[case("  V600E  ", "MISSENSE_VARIANT")]
#[case("p.V600E [BRAF]", "MISSENSE_VARIANT")]
fn test_normalization(#[case] input: &str, #[case] term: &str) {
    let alt = classify(input);
    assert_eq!(alt.consequence.term(), term, "input: {}", input);
    assert_eq!(alt.original_text, input, "original text kept verbatim");
}

// =============================================================================
// Naming and exclusion policy
// =============================================================================

#[rstest]
// Positioned results gain the missense-family suffix
#[case("V600", "V600 Missense Mutations")]
#[case("R132", "R132 Missense Mutations")]
// Everything else keeps the notation text
#[case("V600E", "V600E")]
#[case("E746_A750del", "E746_A750del")]
#[case("600", "600")]
#[case("Truncating mutations", "Truncating mutations")]
fn test_display_names(#[case] input: &str, #[case] name: &str) {
    assert_eq!(classify(input).display_name, name);
}

#[test]
fn test_exclusion_clause_on_positioned_alteration() {
    let alt = classify("V600{excluding V600E}");
    assert_eq!(alt.consequence.term(), "NA");
    assert_eq!(alt.display_name, "V600 Missense Mutations, excluding V600E");
}

#[test]
fn test_exclusion_clause_dropped_on_non_positioned_alteration() {
    // The clause is stripped for classification but its text is not carried
    // into the name on this branch.
    let alt = classify("V600E{excluding V600K}");
    assert_eq!(alt.consequence.term(), "MISSENSE_VARIANT");
    assert_eq!(alt.display_name, "V600E");
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn test_classification_is_deterministic() {
    for input in [
        "V600E",
        "E746_A750del",
        "BCR::ABL1",
        "Amplification",
        "*959Qext*14",
        "Truncating mutations",
        "not a variant",
    ] {
        let first = classify(input);
        for _ in 0..3 {
            assert_eq!(classify(input), first, "input: {}", input);
        }
    }
}
