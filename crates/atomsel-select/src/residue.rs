//! Residue identifiers and residue-level filtering
//!
//! A [`ResidueId`] names one residue by residue name, sequence number,
//! insertion code, and chain. Ids have a text form `NAME:NUMBER:ICODE:CHAIN`
//! and order by position in the structure (chain, then number, then
//! insertion code).

use std::collections::BTreeSet;
use std::fmt;

use ahash::AHashSet;
use atomsel_mol::{Atom, Molecule};

use crate::context::EvalContext;
use crate::error::{ParseResult, SelectionError};
use crate::selection::Selection;

/// Identifier of a single residue within a structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueId {
    /// Residue name (e.g. "ALA")
    pub name: String,
    /// Residue sequence number
    pub number: i32,
    /// Insertion code (space if none)
    pub inscode: char,
    /// Chain identifier (space if none)
    pub chain: char,
}

impl ResidueId {
    /// The residue id of an atom.
    pub fn of_atom(atom: &Atom) -> Self {
        ResidueId {
            name: atom.resn.clone(),
            number: atom.resv,
            inscode: atom.inscode,
            chain: atom.chain,
        }
    }

    /// Parse a textual id of the form `NAME:NUMBER:ICODE:CHAIN`.
    ///
    /// The insertion code and chain fields may be empty, meaning unset.
    pub fn parse(text: &str) -> ParseResult<Self> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 4 {
            return Err(SelectionError::new(format!(
                "invalid residue id '{}': expected NAME:NUMBER:ICODE:CHAIN",
                text
            )));
        }
        let name = parts[0].trim().to_string();
        let number: i32 = parts[1].trim().parse().map_err(|_| {
            SelectionError::new(format!(
                "invalid residue number '{}' in residue id '{}'",
                parts[1], text
            ))
        })?;
        let inscode = parts[2].trim().chars().next().unwrap_or(' ');
        let chain = parts[3].trim().chars().next().unwrap_or(' ');
        Ok(ResidueId {
            name,
            number,
            inscode,
            chain,
        })
    }

    /// Whether an atom belongs to this residue.
    pub fn contains_atom(&self, atom: &Atom) -> bool {
        atom.resv == self.number
            && atom.chain == self.chain
            && atom.inscode == self.inscode
            && atom.resn == self.name
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inscode = if self.inscode == ' ' {
            String::new()
        } else {
            self.inscode.to_string()
        };
        let chain = if self.chain == ' ' {
            String::new()
        } else {
            self.chain.to_string()
        };
        write!(f, "{}:{}:{}:{}", self.name, self.number, inscode, chain)
    }
}

impl Ord for ResidueId {
    /// Order by position: chain, then number, then insertion code. The name
    /// is a final tiebreaker so distinct ids never compare equal.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.chain
            .cmp(&other.chain)
            .then(self.number.cmp(&other.number))
            .then(self.inscode.cmp(&other.inscode))
            .then(self.name.cmp(&other.name))
    }
}

impl PartialOrd for ResidueId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A set of residue ids parsed from delimited text.
///
/// Accepts ids separated by commas, semicolons, ampersands, tabs, or
/// newlines; empty entries are skipped.
#[derive(Debug, Clone, Default)]
pub struct ResidueFilter {
    ids: AHashSet<ResidueId>,
}

impl ResidueFilter {
    /// Parse a delimited list of residue ids.
    pub fn parse(text: &str) -> ParseResult<Self> {
        let mut ids = AHashSet::new();
        for entry in text.split([',', ';', '&', '\t', '\n']) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            ids.insert(ResidueId::parse(entry)?);
        }
        Ok(ResidueFilter { ids })
    }

    /// Whether the filter contains a residue id.
    pub fn contains(&self, id: &ResidueId) -> bool {
        self.ids.contains(id)
    }

    /// Whether an atom's residue is in the filter.
    pub fn matches_atom(&self, atom: &Atom) -> bool {
        self.contains(&ResidueId::of_atom(atom))
    }

    /// Number of residue ids in the filter.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the ids in structure order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &ResidueId> {
        let mut ordered: Vec<&ResidueId> = self.ids.iter().collect();
        ordered.sort();
        ordered.into_iter()
    }
}

/// All residue ids of a molecule, in structure order.
pub fn residue_ids(mol: &Molecule) -> BTreeSet<ResidueId> {
    mol.atoms().map(ResidueId::of_atom).collect()
}

/// Residue ids containing at least one atom matched by a selection.
pub fn selected_residue_ids(mol: &Molecule, selection: &Selection) -> BTreeSet<ResidueId> {
    let mut ctx = EvalContext::new(mol);
    (0..mol.len())
        .filter(|&idx| selection.matches(&mut ctx, idx))
        .map(|idx| ResidueId::of_atom(mol.atom(idx)))
        .collect()
}
