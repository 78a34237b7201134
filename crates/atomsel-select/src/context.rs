//! Evaluation context with lazily built caches
//!
//! A context borrows one molecule and accumulates everything expensive the
//! predicate tree needs: the spatial index, component classifications for
//! untagged molecules, and per-node result caches for the distance and
//! expansion operators. Caches are keyed by canonical predicate form, so
//! structurally equal subtrees share one computation.

use ahash::{AHashMap, AHashSet};
use atomsel_mol::{ComponentFlags, Molecule};
use bitvec::prelude::*;

use crate::spatial::SpatialIndex;
use crate::tagger;

/// Mutable evaluation state for one molecule.
pub struct EvalContext<'a> {
    mol: &'a Molecule,
    index: Option<SpatialIndex>,
    components: Option<Vec<ComponentFlags>>,
    around_masks: AHashMap<String, BitVec<u64, Lsb0>>,
    residue_sets: AHashMap<String, AHashSet<usize>>,
    chain_sets: AHashMap<String, AHashSet<char>>,
}

impl<'a> EvalContext<'a> {
    /// Create a fresh context for a molecule.
    pub fn new(mol: &'a Molecule) -> Self {
        EvalContext {
            mol,
            index: None,
            components: None,
            around_masks: AHashMap::new(),
            residue_sets: AHashMap::new(),
            chain_sets: AHashMap::new(),
        }
    }

    /// The molecule this context evaluates against.
    pub fn molecule(&self) -> &'a Molecule {
        self.mol
    }

    /// The spatial index, built on first use.
    pub fn spatial_index(&mut self) -> &SpatialIndex {
        self.index
            .get_or_insert_with(|| SpatialIndex::build(self.mol))
    }

    /// Component classification of an atom.
    ///
    /// Tagged molecules answer from their stored flags. For untagged
    /// molecules a classification side table is built lazily, so evaluation
    /// never needs mutable access to the molecule itself.
    pub fn component(&mut self, idx: usize) -> ComponentFlags {
        if idx >= self.mol.len() {
            return ComponentFlags::LIGAND;
        }
        if self.mol.is_tagged() {
            return self
                .mol
                .atom(idx)
                .component
                .unwrap_or(ComponentFlags::LIGAND);
        }
        let table = self
            .components
            .get_or_insert_with(|| {
                self.mol
                    .atoms()
                    .map(|atom| tagger::classify(&atom.resn))
                    .collect()
            });
        table[idx]
    }

    /// Look up a cached distance-operator mask.
    pub fn around_mask(&self, key: &str) -> Option<&BitVec<u64, Lsb0>> {
        self.around_masks.get(key)
    }

    /// Store a distance-operator mask.
    pub fn insert_around_mask(&mut self, key: String, mask: BitVec<u64, Lsb0>) {
        self.around_masks.insert(key, mask);
    }

    /// Look up a cached residue-expansion set of atom indices.
    pub fn residue_set(&self, key: &str) -> Option<&AHashSet<usize>> {
        self.residue_sets.get(key)
    }

    /// Store a residue-expansion set.
    pub fn insert_residue_set(&mut self, key: String, set: AHashSet<usize>) {
        self.residue_sets.insert(key, set);
    }

    /// Look up a cached chain-expansion set of chain identifiers.
    pub fn chain_set(&self, key: &str) -> Option<&AHashSet<char>> {
        self.chain_sets.get(key)
    }

    /// Store a chain-expansion set.
    pub fn insert_chain_set(&mut self, key: String, set: AHashSet<char>) {
        self.chain_sets.insert(key, set);
    }
}
