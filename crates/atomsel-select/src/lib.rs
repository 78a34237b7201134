//! Molecular Selection Language Parser and Evaluator
//!
//! This crate implements a selection query language for molecules: a
//! selection string is compiled into an immutable predicate tree that can
//! be evaluated per atom against any molecule.
//!
//! # Overview
//!
//! The selection language supports:
//! - Property selectors: `name`, `resn`, `resi`, `index`, `chain`, `elem`
//! - Component selectors: `protein`, `water`, `ligand`, `solvent`,
//!   `organic`, `backbone`, `sidechain`, `metal`
//! - Atom-type selectors: `heavy`, `hydrogen`, `polarh`, `apolarh`
//! - Secondary structure: `helix`, `sheet`, `turn`, `loop`
//! - Logical operators: `not`, `and`, `or`, `xor` (`!`, `&`, `|`, `^`)
//! - Distance operators: `around`, `xaround`, `beyond`
//! - Expansion operators: `byres`, `bychain`
//! - Slash macro notation: `//chain/resi/name`
//!
//! # Example
//!
//! ```rust,ignore
//! use atomsel_select::{select, Selection};
//! use atomsel_mol::Molecule;
//!
//! let mol: Molecule = /* build molecule */;
//!
//! // Select all C-alpha atoms in chain A
//! let indices = select(&mol, "name CA and chain A")?;
//!
//! // Select entire residues within 5 Angstroms of the ligand
//! let selection = Selection::parse("byres (around 5 ligand)")?;
//! let indices = selection.bind(&mol).indices();
//! ```

// Module declarations
mod ast;
mod context;
mod error;
mod eval;
mod keywords;
mod lexer;
mod parser;
mod pattern;
mod residue;
mod selection;
mod spatial;
mod tagger;

// Re-export main types
pub use ast::{Predicate, PredicateKind};
pub use context::EvalContext;
pub use error::{ParseResult, SelectionError};
pub use eval::evaluate;
pub use pattern::{CompareOp, IntSpec, Pattern};
pub use residue::{ResidueFilter, ResidueId, residue_ids, selected_residue_ids};
pub use selection::{Selection, Selector};
pub use spatial::SpatialIndex;
pub use tagger::{classify, tag};

/// Parse a selection string into a compiled selection
///
/// # Example
/// ```rust,ignore
/// let selection = parse("name CA and chain A")?;
/// ```
pub fn parse(input: &str) -> ParseResult<Selection> {
    Selection::parse(input)
}

/// Select atoms from a molecule using a selection string
///
/// This is the main entry point for one-shot selections: it parses the
/// string, evaluates it against every atom, and returns the indices of
/// matching atoms in ascending order.
///
/// # Example
/// ```rust,ignore
/// let indices = select(&mol, "protein and not backbone")?;
/// println!("Selected {} atoms", indices.len());
/// ```
pub fn select(mol: &atomsel_mol::Molecule, selection: &str) -> ParseResult<Vec<usize>> {
    let compiled = parse(selection)?;
    Ok(compiled.bind(mol).indices())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ast::{Predicate, PredicateKind};
    pub use crate::context::EvalContext;
    pub use crate::error::{ParseResult, SelectionError};
    pub use crate::pattern::{IntSpec, Pattern};
    pub use crate::residue::{ResidueFilter, ResidueId};
    pub use crate::selection::{Selection, Selector};
    pub use crate::{evaluate, parse, select};
}
