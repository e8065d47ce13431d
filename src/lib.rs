// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! varnote: genomic alteration notation classifier
//!
//! Classifies curator-authored, loosely HGVS-like alteration strings into
//! typed, positionally-anchored values for variant matching and biomarker
//! association.
//!
//! # Example
//!
//! ```
//! use varnote::{classify, ConsequenceType};
//!
//! // Classify a protein change
//! let alt = classify("V600E");
//! assert_eq!(alt.consequence.term(), "MISSENSE_VARIANT");
//! assert_eq!(alt.consequence.kind(), ConsequenceType::Mutation);
//! assert_eq!(alt.protein_start, Some(600));
//!
//! // Fusions and copy-number terms are recognized before the grammar runs
//! let alt = classify("BCR::ABL1");
//! assert_eq!(alt.consequence.term(), "FUSION");
//!
//! // Classification is total: anything unrecognized degrades to UNKNOWN
//! let alt = classify("Oncogenic Mutations");
//! assert_eq!(alt.consequence.term(), "UNKNOWN");
//! ```

pub mod alteration;
pub mod cli;
pub mod consequence;
pub mod error;
pub mod gene;

// Re-export main types at crate root for convenience
pub use alteration::{
    classify, fusion_genes, has_exclusion_criteria, is_copy_number_alteration, is_fusion,
    remove_exclusion_criteria, suggest_range_code, ClassifiedAlteration,
};
pub use consequence::{CnaTerm, Consequence, ConsequenceType, MutationTerm, SvTerm};
pub use error::VarnoteError;
pub use gene::{GeneId, GeneLookup, MockGeneLookup};

/// Result type for varnote operations
pub type Result<T> = std::result::Result<T, VarnoteError>;
