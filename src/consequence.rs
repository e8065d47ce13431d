//! Consequence vocabularies for classified alterations.
//!
//! Three closed vocabularies cover the three alteration families: protein-level
//! mutations, structural variants, and copy-number alterations. Each
//! classification carries exactly one term, wrapped in [`Consequence`] so that
//! downstream matching is exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Protein-level mutation consequence term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationTerm {
    /// Amino acid substitution.
    MissenseVariant,
    /// Codon change with the same amino acid.
    SynonymousVariant,
    /// Stop codon changed to an amino acid.
    StopLost,
    /// Premature stop codon introduced.
    StopGained,
    /// Stop codon unchanged.
    StopRetainedVariant,
    /// Initiator codon changed.
    StartLost,
    /// In-frame insertion of amino acids.
    InframeInsertion,
    /// In-frame deletion of amino acids.
    InframeDeletion,
    /// Insertion/deletion shifting the reading frame.
    FrameshiftVariant,
    /// Variant affecting a splice region.
    SpliceRegionVariant,
    /// Truncation of the protein product.
    FeatureTruncation,
    /// Effect explicitly flagged as indeterminate (e.g. `V600?`).
    Any,
    /// Consequence could not be determined from the notation.
    Na,
    /// Notation not recognized by the grammar.
    Unknown,
}

impl MutationTerm {
    /// Canonical term string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationTerm::MissenseVariant => "MISSENSE_VARIANT",
            MutationTerm::SynonymousVariant => "SYNONYMOUS_VARIANT",
            MutationTerm::StopLost => "STOP_LOST",
            MutationTerm::StopGained => "STOP_GAINED",
            MutationTerm::StopRetainedVariant => "STOP_RETAINED_VARIANT",
            MutationTerm::StartLost => "START_LOST",
            MutationTerm::InframeInsertion => "INFRAME_INSERTION",
            MutationTerm::InframeDeletion => "INFRAME_DELETION",
            MutationTerm::FrameshiftVariant => "FRAMESHIFT_VARIANT",
            MutationTerm::SpliceRegionVariant => "SPLICE_REGION_VARIANT",
            MutationTerm::FeatureTruncation => "FEATURE_TRUNCATION",
            MutationTerm::Any => "ANY",
            MutationTerm::Na => "NA",
            MutationTerm::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for MutationTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural-variant consequence term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SvTerm {
    /// Two genes joined into a fusion product.
    Fusion,
}

impl SvTerm {
    /// Canonical term string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SvTerm::Fusion => "FUSION",
        }
    }
}

impl fmt::Display for SvTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Copy-number alteration term.
///
/// Curator-controlled vocabulary; input matches against it exactly
/// (whole string, case-insensitive). Anything else is not treated as a
/// malformed copy-number call and falls through to the mutation grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CnaTerm {
    /// Copy-number amplification.
    Amplification,
    /// Whole-gene deletion.
    Deletion,
    /// Copy-number gain.
    Gain,
    /// Copy-number loss.
    Loss,
}

impl CnaTerm {
    /// All vocabulary members, for exact-match lookup.
    pub const ALL: [CnaTerm; 4] = [
        CnaTerm::Amplification,
        CnaTerm::Deletion,
        CnaTerm::Gain,
        CnaTerm::Loss,
    ];

    /// Canonical term string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CnaTerm::Amplification => "AMPLIFICATION",
            CnaTerm::Deletion => "DELETION",
            CnaTerm::Gain => "GAIN",
            CnaTerm::Loss => "LOSS",
        }
    }

    /// Human-readable name: first letter upper-cased, remainder lower-cased.
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        format!("{}{}", &name[..1], name[1..].to_lowercase())
    }
}

impl fmt::Display for CnaTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-level alteration family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsequenceType {
    /// Protein-level mutation.
    Mutation,
    /// Structural variant.
    StructuralVariant,
    /// Whole-gene dosage change.
    CopyNumberAlteration,
}

impl ConsequenceType {
    /// Canonical type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsequenceType::Mutation => "MUTATION",
            ConsequenceType::StructuralVariant => "STRUCTURAL_VARIANT",
            ConsequenceType::CopyNumberAlteration => "COPY_NUMBER_ALTERATION",
        }
    }
}

impl fmt::Display for ConsequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single consequence assigned to a classification.
///
/// Serializes as `{"term": "...", "type": "..."}` with the canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ConsequenceRepr", try_from = "ConsequenceRepr")]
pub enum Consequence {
    /// A protein-level mutation consequence.
    Mutation(MutationTerm),
    /// A structural-variant consequence.
    StructuralVariant(SvTerm),
    /// A copy-number consequence.
    CopyNumber(CnaTerm),
}

impl Consequence {
    /// The canonical term string.
    pub fn term(&self) -> &'static str {
        match self {
            Consequence::Mutation(t) => t.as_str(),
            Consequence::StructuralVariant(t) => t.as_str(),
            Consequence::CopyNumber(t) => t.as_str(),
        }
    }

    /// The alteration family this term belongs to.
    pub fn kind(&self) -> ConsequenceType {
        match self {
            Consequence::Mutation(_) => ConsequenceType::Mutation,
            Consequence::StructuralVariant(_) => ConsequenceType::StructuralVariant,
            Consequence::CopyNumber(_) => ConsequenceType::CopyNumberAlteration,
        }
    }
}

impl fmt::Display for Consequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term(), self.kind())
    }
}

/// Wire shape for [`Consequence`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConsequenceRepr {
    term: String,
    #[serde(rename = "type")]
    kind: ConsequenceType,
}

impl From<Consequence> for ConsequenceRepr {
    fn from(c: Consequence) -> Self {
        ConsequenceRepr {
            term: c.term().to_string(),
            kind: c.kind(),
        }
    }
}

impl TryFrom<ConsequenceRepr> for Consequence {
    type Error = String;

    fn try_from(repr: ConsequenceRepr) -> Result<Self, Self::Error> {
        let term = repr.term.as_str();
        let consequence = match repr.kind {
            ConsequenceType::Mutation => {
                let t = match term {
                    "MISSENSE_VARIANT" => MutationTerm::MissenseVariant,
                    "SYNONYMOUS_VARIANT" => MutationTerm::SynonymousVariant,
                    "STOP_LOST" => MutationTerm::StopLost,
                    "STOP_GAINED" => MutationTerm::StopGained,
                    "STOP_RETAINED_VARIANT" => MutationTerm::StopRetainedVariant,
                    "START_LOST" => MutationTerm::StartLost,
                    "INFRAME_INSERTION" => MutationTerm::InframeInsertion,
                    "INFRAME_DELETION" => MutationTerm::InframeDeletion,
                    "FRAMESHIFT_VARIANT" => MutationTerm::FrameshiftVariant,
                    "SPLICE_REGION_VARIANT" => MutationTerm::SpliceRegionVariant,
                    "FEATURE_TRUNCATION" => MutationTerm::FeatureTruncation,
                    "ANY" => MutationTerm::Any,
                    "NA" => MutationTerm::Na,
                    "UNKNOWN" => MutationTerm::Unknown,
                    other => return Err(format!("unknown mutation term: {}", other)),
                };
                Consequence::Mutation(t)
            }
            ConsequenceType::StructuralVariant => match term {
                "FUSION" => Consequence::StructuralVariant(SvTerm::Fusion),
                other => return Err(format!("unknown structural variant term: {}", other)),
            },
            ConsequenceType::CopyNumberAlteration => {
                let t = CnaTerm::ALL
                    .iter()
                    .find(|t| t.as_str() == term)
                    .copied()
                    .ok_or_else(|| format!("unknown copy-number term: {}", term))?;
                Consequence::CopyNumber(t)
            }
        };
        Ok(consequence)
    }
}
