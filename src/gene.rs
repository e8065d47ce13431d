//! Gene identity lookup.
//!
//! The classifier only extracts gene symbol tokens; resolving them to actual
//! gene records happens elsewhere. This module defines the seam for that
//! collaboration: a [`GeneLookup`] trait consumers implement against their
//! own gene store, and an in-memory [`MockGeneLookup`] for tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resolved gene identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneId {
    /// HUGO symbol, e.g. `BRAF`.
    pub symbol: String,
    /// Entrez gene id, when known.
    pub entrez_id: Option<u64>,
}

/// Trait for resolving a gene symbol to an identity record.
///
/// Implementations might back onto a database, an HGNC dump, or a remote
/// service; the classifier itself never resolves symbols.
pub trait GeneLookup {
    /// Look up a gene by symbol.
    fn lookup(&self, symbol: &str) -> Option<GeneId>;

    /// Check whether a symbol resolves.
    fn has_gene(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_some()
    }
}

/// In-memory gene lookup for testing.
#[derive(Debug, Clone, Default)]
pub struct MockGeneLookup {
    genes: HashMap<String, GeneId>,
}

impl MockGeneLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gene to the lookup.
    pub fn add_gene(&mut self, symbol: impl Into<String>, entrez_id: Option<u64>) {
        let symbol = symbol.into();
        self.genes.insert(
            symbol.clone(),
            GeneId {
                symbol,
                entrez_id,
            },
        );
    }

    /// Create a lookup seeded with a handful of well-known genes.
    pub fn with_test_data() -> Self {
        let mut lookup = Self::new();
        lookup.add_gene("ABL1", Some(25));
        lookup.add_gene("ALK", Some(238));
        lookup.add_gene("BCR", Some(613));
        lookup.add_gene("BRAF", Some(673));
        lookup.add_gene("EGFR", Some(1956));
        lookup.add_gene("EML4", Some(27436));
        lookup.add_gene("NTRK1", Some(4914));
        lookup.add_gene("TPM3", Some(7170));
        lookup
    }
}

impl GeneLookup for MockGeneLookup {
    fn lookup(&self, symbol: &str) -> Option<GeneId> {
        self.genes.get(symbol).cloned()
    }
}
