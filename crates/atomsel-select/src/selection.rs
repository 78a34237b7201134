//! Compiled selections and molecule-bound selectors

use std::sync::Arc;

use atomsel_mol::Molecule;

use crate::ast::{Predicate, PredicateKind};
use crate::context::EvalContext;
use crate::error::ParseResult;
use crate::eval::evaluate;
use crate::parser::parse_selection;

/// A compiled, immutable selection expression.
///
/// Parsing a selection string yields a shared predicate tree; the tree can
/// then be evaluated against any number of molecules. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Selection {
    root: Arc<Predicate>,
}

impl Selection {
    /// Compile a selection string.
    pub fn parse(input: &str) -> ParseResult<Self> {
        Ok(Selection {
            root: parse_selection(input)?,
        })
    }

    /// The root of the predicate tree.
    pub fn root(&self) -> &Arc<Predicate> {
        &self.root
    }

    /// Canonical text form of the compiled expression. Structurally equal
    /// selections share the same canonical form regardless of how they
    /// were written.
    pub fn canonical_form(&self) -> String {
        self.root.canonical_form()
    }

    /// Whether the selection is the constant-true predicate (matches
    /// everything).
    pub fn is_all(&self) -> bool {
        matches!(*self.root, Predicate::True)
    }

    /// Whether any node of the given kind appears in the tree.
    pub fn contains_kind(&self, kind: PredicateKind) -> bool {
        self.root.contains_kind(kind)
    }

    /// Test a single atom, using a caller-provided context.
    pub fn matches(&self, ctx: &mut EvalContext<'_>, atom_index: usize) -> bool {
        evaluate(&self.root, ctx, atom_index)
    }

    /// Bind this selection to a molecule, producing a selector that owns
    /// its evaluation context and caches.
    pub fn bind<'a>(&self, mol: &'a Molecule) -> Selector<'a> {
        Selector {
            root: Arc::clone(&self.root),
            ctx: EvalContext::new(mol),
        }
    }
}

impl Default for Selection {
    /// The empty selection, which matches every atom.
    fn default() -> Self {
        Selection {
            root: Arc::new(Predicate::True),
        }
    }
}

/// A selection bound to one molecule.
///
/// Keeps the evaluation context alive across calls, so the spatial index
/// and operator caches are shared by every query made through it.
pub struct Selector<'a> {
    root: Arc<Predicate>,
    ctx: EvalContext<'a>,
}

impl<'a> Selector<'a> {
    /// Test one atom.
    pub fn matches(&mut self, atom_index: usize) -> bool {
        evaluate(&self.root, &mut self.ctx, atom_index)
    }

    /// Indices of all matching atoms, in ascending order.
    pub fn indices(&mut self) -> Vec<usize> {
        let len = self.ctx.molecule().len();
        (0..len).filter(|&idx| self.matches(idx)).collect()
    }

    /// Number of matching atoms.
    pub fn count(&mut self) -> usize {
        let len = self.ctx.molecule().len();
        (0..len).filter(|&idx| self.matches(idx)).count()
    }
}
