//! Display-name policy for mutation-grammar results.
//!
//! A "positioned" alteration is a single-residue result with no variant
//! residue whose effect is undetermined or missense (`V600`, `R132`); these
//! name as `"<text> Missense Mutations"`, carrying the exclusion clause when
//! one was extracted. Everything else keeps the notation text as its name;
//! exclusion text is dropped on that branch, matching the system this
//! behavior was ported from (see DESIGN.md).

use super::grammar::GrammarMatch;
use crate::consequence::MutationTerm;

/// Whether a grammar result is a positioned alteration eligible for
/// missense-family naming.
pub(crate) fn is_positioned(matched: &GrammarMatch) -> bool {
    matched.start.is_some()
        && matched.start == matched.end
        && matched
            .ref_residues
            .as_deref()
            .is_some_and(|r| r.chars().count() == 1)
        && matched.variant_residues.is_none()
        && matches!(
            matched.term,
            MutationTerm::Na | MutationTerm::MissenseVariant
        )
}

/// Build the display name for a mutation-grammar result.
pub(crate) fn display_name(text: &str, matched: &GrammarMatch, excluded: Option<&str>) -> String {
    if !is_positioned(matched) {
        return text.to_string();
    }
    match excluded {
        Some(excluded) => format!("{} Missense Mutations, excluding {}", text, excluded),
        None => format!("{} Missense Mutations", text),
    }
}
