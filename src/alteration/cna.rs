//! Copy-number alteration detector.
//!
//! Exact, whole-string, case-insensitive match against the closed
//! [`CnaTerm`] vocabulary. Strings that miss the vocabulary are not treated
//! as malformed copy-number calls; they fall through to the mutation grammar.

use crate::consequence::CnaTerm;

/// Try to match the string against the copy-number vocabulary.
pub(crate) fn detect(text: &str) -> Option<CnaTerm> {
    let upper = text.to_uppercase();
    CnaTerm::ALL
        .iter()
        .find(|term| term.as_str() == upper)
        .copied()
}

/// Whether the string is an exact copy-number vocabulary match.
pub fn is_copy_number_alteration(text: &str) -> bool {
    detect(text.trim()).is_some()
}
