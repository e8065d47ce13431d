//! Protein-change grammar.
//!
//! An ordered cascade of full-string patterns over curator-authored protein
//! notation. The rules overlap, so the order they are tried in is part of the
//! contract: the first rule whose pattern matches the whole string decides the
//! classification. The substitution rule is deliberately case-sensitive —
//! compiled case-insensitively, its permissive variant-residue class would
//! swallow keyword forms such as `V600del` that belong to later rules.
//!
//! Every input classifies to something; strings no rule recognizes degrade to
//! an `UNKNOWN` consequence with no positional anchor.

use crate::consequence::MutationTerm;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

/// Substitution-shaped notation: residues, position, replacement residues.
/// Also covers stop gain/loss, start loss, synonymous and residue-level
/// indels (`IK744K`). Case-sensitive.
static SUBSTITUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z*]+)([0-9]+)([A-Z*?]*)$").unwrap());

/// Keyworded indels, with an optional residue range: `E746_A750del`,
/// `V600delinsYM`, `T790ins`.
static INDEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([A-Z]?)([0-9]+)(?:_([A-Z]?)([0-9]+))?(delins|ins|del)([A-Z]*)$").unwrap()
});

/// Splice-site notation: `X453_P454splice`, `E1978_splice`, `700splice`.
static SPLICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z]?([0-9]+)(?:_[A-Z]?([0-9]+))?_?splice$").unwrap());

/// Residue range with a trailing effect code: `V600_K601mis`, `459_469trunc`.
static RANGE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z]?([0-9]+)_[A-Z]?([0-9]+)(mis|ins|del|fs|trunc|dup|mut)$").unwrap()
});

/// Range-shaped notation whose trailing code is not in the vocabulary;
/// used only to offer suggestions, never to classify.
static LOOSE_RANGE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([A-Z]?[0-9]+_[A-Z]?[0-9]+)([A-Z]+)$").unwrap());

/// Frameshift: `V600fs`, `V600Efs*12`, `*757Lfs`.
static FRAMESHIFT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([A-Z*])([0-9]+)[A-Z]?fs.*$").unwrap());

/// Single-site keyworded indel without inserted residues: `A767dup`.
static SINGLE_SITE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([A-Z]?)([0-9]+)(ins|del|dup)$").unwrap());

/// Stop-codon read-through: `*959Qext*14`, `*315TextALGT*`, `*327Aext*?`.
static STOP_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\*([0-9]+)[A-Z]ext[A-Z]*\*[0-9]*\??$").unwrap());

/// Initiator-codon extension: `M1ext-5`, `1ext`.
static INITIATOR_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^M?1ext(?:-[0-9]+)?$").unwrap());

/// Synonymous / stop-retained: `A123=`, `*757=`, `123=`.
static SYNONYMOUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([A-Z*])?([0-9]+)=$").unwrap());

/// A bare residue position with no effect information.
static BARE_POSITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Categorical truncating notation, overriding whatever the cascade decided.
static TRUNCATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^truncating mutations?$").unwrap());

/// Effect codes accepted after a residue range.
const RANGE_CODES: [(&str, MutationTerm); 7] = [
    ("mis", MutationTerm::MissenseVariant),
    ("ins", MutationTerm::InframeInsertion),
    ("del", MutationTerm::InframeDeletion),
    ("fs", MutationTerm::FeatureTruncation),
    ("trunc", MutationTerm::FeatureTruncation),
    ("dup", MutationTerm::InframeInsertion),
    ("mut", MutationTerm::Any),
];

/// Result of running the grammar over one protein-change string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GrammarMatch {
    pub term: MutationTerm,
    pub ref_residues: Option<String>,
    pub variant_residues: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl Default for GrammarMatch {
    fn default() -> Self {
        Self {
            term: MutationTerm::Unknown,
            ref_residues: None,
            variant_residues: None,
            start: None,
            end: None,
        }
    }
}

/// Run the ordered rule cascade over a normalized protein-change string.
pub(crate) fn classify_protein_change(text: &str) -> GrammarMatch {
    let mut matched = try_substitution(text)
        .or_else(|| try_indel(text))
        .or_else(|| try_splice(text))
        .or_else(|| try_range_code(text))
        .or_else(|| try_frameshift(text))
        .or_else(|| try_single_site(text))
        .or_else(|| try_extension(text))
        .or_else(|| try_synonymous(text))
        .or_else(|| try_bare_position(text))
        .unwrap_or_default();

    if TRUNCATING.is_match(text) {
        matched.term = MutationTerm::FeatureTruncation;
    }

    matched
}

fn parse_pos(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

fn try_substitution(text: &str) -> Option<GrammarMatch> {
    let caps = SUBSTITUTION.captures(text)?;
    let ref_res = caps.get(1)?.as_str();
    let var_res = caps.get(3)?.as_str();
    let start = parse_pos(&caps[2])?;
    let end = start.checked_add(ref_res.len() as u32 - 1)?;

    let term = if ref_res == "*" {
        MutationTerm::StopLost
    } else if var_res == "*" {
        MutationTerm::StopGained
    } else if ref_res == var_res {
        MutationTerm::SynonymousVariant
    } else if start == 1 {
        MutationTerm::StartLost
    } else if var_res == "?" {
        MutationTerm::Any
    } else if ref_res.len() > 1 || var_res.len() > 1 {
        // Residue-level indel, e.g. IK744K.
        match ref_res.len().cmp(&var_res.len()) {
            Ordering::Greater => MutationTerm::InframeDeletion,
            Ordering::Less => MutationTerm::InframeInsertion,
            Ordering::Equal => MutationTerm::MissenseVariant,
        }
    } else if var_res.len() == 1 {
        MutationTerm::MissenseVariant
    } else {
        // Single reference residue, no variant residue: a positional
        // alteration such as V600. The effect is undetermined.
        MutationTerm::Na
    };

    Some(GrammarMatch {
        term,
        ref_residues: Some(ref_res.to_string()),
        variant_residues: (!var_res.is_empty()).then(|| var_res.to_string()),
        start: Some(start),
        end: Some(end),
    })
}

fn try_indel(text: &str) -> Option<GrammarMatch> {
    let caps = INDEL.captures(text)?;
    let start = parse_pos(&caps[2])?;
    let range_end = match caps.get(4) {
        Some(m) => Some(parse_pos(m.as_str())?),
        None => None,
    };
    let end = range_end.unwrap_or(start);
    if end < start {
        return None;
    }

    // The leading residue anchors a single position; with a range it is
    // redundant and not recorded.
    let ref_residues = if range_end.is_none() {
        let r = &caps[1];
        (!r.is_empty()).then(|| r.to_uppercase())
    } else {
        None
    };

    let inserted = &caps[6];
    let term = match caps[5].to_lowercase().as_str() {
        "ins" => MutationTerm::InframeInsertion,
        "del" => MutationTerm::InframeDeletion,
        _ => {
            let deleted_len = i64::from(end) - i64::from(start) + 1;
            match (inserted.len() as i64).cmp(&deleted_len) {
                Ordering::Greater => MutationTerm::InframeInsertion,
                Ordering::Equal => MutationTerm::MissenseVariant,
                Ordering::Less => MutationTerm::InframeDeletion,
            }
        }
    };

    Some(GrammarMatch {
        term,
        ref_residues,
        variant_residues: None,
        start: Some(start),
        end: Some(end),
    })
}

fn try_splice(text: &str) -> Option<GrammarMatch> {
    let caps = SPLICE.captures(text)?;
    let start = parse_pos(&caps[1])?;
    let end = match caps.get(2) {
        Some(m) => parse_pos(m.as_str())?,
        None => start,
    };
    if end < start {
        return None;
    }

    Some(GrammarMatch {
        term: MutationTerm::SpliceRegionVariant,
        ref_residues: None,
        variant_residues: None,
        start: Some(start),
        end: Some(end),
    })
}

fn try_range_code(text: &str) -> Option<GrammarMatch> {
    let caps = RANGE_CODE.captures(text)?;
    let start = parse_pos(&caps[1])?;
    let end = parse_pos(&caps[2])?;
    if end < start {
        return None;
    }

    let code = caps[3].to_lowercase();
    let term = RANGE_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, term)| *term)?;

    Some(GrammarMatch {
        term,
        ref_residues: None,
        variant_residues: None,
        start: Some(start),
        end: Some(end),
    })
}

fn try_frameshift(text: &str) -> Option<GrammarMatch> {
    let caps = FRAMESHIFT.captures(text)?;
    let start = parse_pos(&caps[2])?;

    Some(GrammarMatch {
        term: MutationTerm::FrameshiftVariant,
        ref_residues: Some(caps[1].to_uppercase()),
        variant_residues: None,
        start: Some(start),
        end: Some(start),
    })
}

fn try_single_site(text: &str) -> Option<GrammarMatch> {
    let caps = SINGLE_SITE.captures(text)?;
    let start = parse_pos(&caps[2])?;
    let ref_res = &caps[1];

    let term = match caps[3].to_lowercase().as_str() {
        "del" => MutationTerm::InframeDeletion,
        _ => MutationTerm::InframeInsertion,
    };

    Some(GrammarMatch {
        term,
        ref_residues: (!ref_res.is_empty()).then(|| ref_res.to_uppercase()),
        variant_residues: None,
        start: Some(start),
        end: Some(start),
    })
}

fn try_extension(text: &str) -> Option<GrammarMatch> {
    if INITIATOR_EXTENSION.is_match(text) {
        return Some(GrammarMatch {
            term: MutationTerm::InframeInsertion,
            ref_residues: None,
            variant_residues: None,
            start: Some(1),
            end: Some(1),
        });
    }

    let caps = STOP_EXTENSION.captures(text)?;
    let start = parse_pos(&caps[1])?;

    Some(GrammarMatch {
        term: MutationTerm::StopLost,
        ref_residues: None,
        variant_residues: None,
        start: Some(start),
        end: Some(start),
    })
}

fn try_synonymous(text: &str) -> Option<GrammarMatch> {
    let caps = SYNONYMOUS.captures(text)?;
    let start = parse_pos(&caps[2])?;
    let ref_res = caps.get(1).map(|m| m.as_str().to_uppercase());

    let term = if ref_res.as_deref() == Some("*") {
        MutationTerm::StopRetainedVariant
    } else {
        MutationTerm::SynonymousVariant
    };

    Some(GrammarMatch {
        term,
        ref_residues: ref_res,
        variant_residues: None,
        start: Some(start),
        end: Some(start),
    })
}

fn try_bare_position(text: &str) -> Option<GrammarMatch> {
    if !BARE_POSITION.is_match(text) {
        return None;
    }
    let start = parse_pos(text)?;

    Some(GrammarMatch {
        term: MutationTerm::Unknown,
        ref_residues: None,
        variant_residues: None,
        start: Some(start),
        end: Some(start),
    })
}

/// Suggest a corrected notation for range inputs whose trailing effect code
/// is not in the vocabulary (e.g. `V600_K601insertion` → `V600_K601ins`).
///
/// Matching is prefix-based in either direction. Returns `None` when the
/// input is not range-shaped or the code is already valid.
pub fn suggest_range_code(text: &str) -> Option<String> {
    let caps = LOOSE_RANGE_CODE.captures(text.trim())?;
    let range = &caps[1];
    let code = caps[2].to_lowercase();

    if RANGE_CODES.iter().any(|(known, _)| *known == code) {
        return None;
    }
    for (known, _) in RANGE_CODES {
        if code.starts_with(known) || known.starts_with(code.as_str()) {
            return Some(format!("{}{}", range, known));
        }
    }
    None
}
