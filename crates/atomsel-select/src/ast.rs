//! Predicate tree
//!
//! The parsed form of a selection: an immutable tree of predicate nodes.
//! Children are `Arc`-shared so selections and cache keys can reference
//! subtrees without copying. Evaluation lives in `eval`; this module owns
//! the structure, kind introspection, and canonical rendering.

use std::sync::Arc;

use atomsel_mol::element;

use crate::pattern::{IntSpec, Pattern};

/// Predicate kind, for introspection over a parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    // Logical
    And,
    Or,
    Not,
    Xor,

    // Atom properties
    Name,
    Resn,
    Resi,
    Index,
    Chain,
    Elem,

    // Components
    Protein,
    Ligand,
    Water,
    Solvent,
    Organic,
    Backbone,
    Sidechain,
    Metal,

    // Atom types
    Heavy,
    Hydrogen,
    PolarHydrogen,
    NonpolarHydrogen,

    // Secondary structure
    Helix,
    Sheet,
    Turn,
    Loop,

    // Distance
    Around,
    XAround,
    Beyond,

    // Expansion
    ByRes,
    ByChain,

    // Constants
    True,
    False,
}

/// A node in the predicate tree.
///
/// One variant per predicate kind; composite variants own their children
/// behind `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Always matches (`all`, and the empty selection)
    True,
    /// Never matches (`none`)
    False,

    /// All children match (n-ary, short-circuits left to right)
    And(Vec<Arc<Predicate>>),
    /// Any child matches (n-ary, short-circuits left to right)
    Or(Vec<Arc<Predicate>>),
    /// Exactly one child matches
    Xor(Vec<Arc<Predicate>>),
    /// Child does not match
    Not(Arc<Predicate>),

    /// Atom name matches a glob pattern
    Name(Pattern),
    /// Residue name matches a glob pattern
    Resn(Pattern),
    /// Residue number matches a value, range, or comparison
    Resi(IntSpec),
    /// Atom index matches a value, range, or comparison
    Index(IntSpec),
    /// Chain identifier equals a character
    Chain(char),
    /// Atomic number equals the one resolved from the symbol at parse time
    Elem(u8),

    /// Tagged as protein
    Protein,
    /// Tagged as ligand
    Ligand,
    /// Tagged as water
    Water,
    /// Tagged as water or named solvent
    Solvent,
    /// Carbon-containing and not protein/nucleic
    Organic,
    /// Protein backbone atom (N, CA, C, O)
    Backbone,
    /// Protein side-chain atom
    Sidechain,
    /// Biomolecular metal element
    Metal,

    /// Non-hydrogen atom
    Heavy,
    /// Hydrogen atom
    Hydrogen,
    /// Hydrogen bonded to N, O, or S
    PolarHydrogen,
    /// Hydrogen not bonded to N, O, or S
    NonpolarHydrogen,

    /// Residue assigned helix
    Helix,
    /// Residue assigned sheet
    Sheet,
    /// Residue assigned turn
    Turn,
    /// Residue not assigned helix/sheet/turn
    Loop,

    /// Atoms within `radius` of any atom matching `reference`
    Around { radius: f32, reference: Arc<Predicate> },
    /// Like `Around`, but atoms matching `reference` are excluded
    XAround { radius: f32, reference: Arc<Predicate> },
    /// Complement of the `Around` mask
    Beyond { radius: f32, reference: Arc<Predicate> },

    /// Expand a match set to whole residues
    ByRes(Arc<Predicate>),
    /// Expand a match set to whole chains
    ByChain(Arc<Predicate>),
}

impl Predicate {
    /// The kind discriminant of this node.
    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::True => PredicateKind::True,
            Predicate::False => PredicateKind::False,
            Predicate::And(_) => PredicateKind::And,
            Predicate::Or(_) => PredicateKind::Or,
            Predicate::Xor(_) => PredicateKind::Xor,
            Predicate::Not(_) => PredicateKind::Not,
            Predicate::Name(_) => PredicateKind::Name,
            Predicate::Resn(_) => PredicateKind::Resn,
            Predicate::Resi(_) => PredicateKind::Resi,
            Predicate::Index(_) => PredicateKind::Index,
            Predicate::Chain(_) => PredicateKind::Chain,
            Predicate::Elem(_) => PredicateKind::Elem,
            Predicate::Protein => PredicateKind::Protein,
            Predicate::Ligand => PredicateKind::Ligand,
            Predicate::Water => PredicateKind::Water,
            Predicate::Solvent => PredicateKind::Solvent,
            Predicate::Organic => PredicateKind::Organic,
            Predicate::Backbone => PredicateKind::Backbone,
            Predicate::Sidechain => PredicateKind::Sidechain,
            Predicate::Metal => PredicateKind::Metal,
            Predicate::Heavy => PredicateKind::Heavy,
            Predicate::Hydrogen => PredicateKind::Hydrogen,
            Predicate::PolarHydrogen => PredicateKind::PolarHydrogen,
            Predicate::NonpolarHydrogen => PredicateKind::NonpolarHydrogen,
            Predicate::Helix => PredicateKind::Helix,
            Predicate::Sheet => PredicateKind::Sheet,
            Predicate::Turn => PredicateKind::Turn,
            Predicate::Loop => PredicateKind::Loop,
            Predicate::Around { .. } => PredicateKind::Around,
            Predicate::XAround { .. } => PredicateKind::XAround,
            Predicate::Beyond { .. } => PredicateKind::Beyond,
            Predicate::ByRes(_) => PredicateKind::ByRes,
            Predicate::ByChain(_) => PredicateKind::ByChain,
        }
    }

    /// Child predicates (empty for leaves).
    pub fn children(&self) -> &[Arc<Predicate>] {
        match self {
            Predicate::And(cs) | Predicate::Or(cs) | Predicate::Xor(cs) => cs,
            Predicate::Not(c) | Predicate::ByRes(c) | Predicate::ByChain(c) => {
                std::slice::from_ref(c)
            }
            Predicate::Around { reference, .. }
            | Predicate::XAround { reference, .. }
            | Predicate::Beyond { reference, .. } => std::slice::from_ref(reference),
            _ => &[],
        }
    }

    /// Whether any node in this tree has the given kind.
    pub fn contains_kind(&self, kind: PredicateKind) -> bool {
        self.kind() == kind || self.children().iter().any(|c| c.contains_kind(kind))
    }

    /// Normalized, deterministic textual rendering of this tree.
    ///
    /// Commutative composites sort their children's canonical strings
    /// lexicographically before joining, so semantically equal trees render
    /// identically. Used both for display and as the cache-key building
    /// block.
    pub fn canonical_form(&self) -> String {
        match self {
            Predicate::True => "all".to_string(),
            Predicate::False => "none".to_string(),

            Predicate::And(cs) => join_sorted(cs, " and ", "all"),
            Predicate::Or(cs) => join_sorted(cs, " or ", "none"),
            Predicate::Xor(cs) => join_sorted(cs, " xor ", "none"),
            Predicate::Not(c) => format!("not {}", c.canonical_form()),

            Predicate::Name(p) => format!("name {}", p),
            Predicate::Resn(p) => format!("resn {}", p),
            Predicate::Resi(s) => format!("resi {}", s),
            Predicate::Index(s) => format!("index {}", s),
            Predicate::Chain(c) => format!("chain {}", c),
            Predicate::Elem(z) => format!("elem {}", element::symbol(*z)),

            Predicate::Protein => "protein".to_string(),
            Predicate::Ligand => "ligand".to_string(),
            Predicate::Water => "water".to_string(),
            Predicate::Solvent => "solvent".to_string(),
            Predicate::Organic => "organic".to_string(),
            Predicate::Backbone => "backbone".to_string(),
            Predicate::Sidechain => "sidechain".to_string(),
            Predicate::Metal => "metal".to_string(),

            Predicate::Heavy => "heavy".to_string(),
            Predicate::Hydrogen => "hydrogen".to_string(),
            Predicate::PolarHydrogen => "polar_hydrogen".to_string(),
            Predicate::NonpolarHydrogen => "nonpolar_hydrogen".to_string(),

            Predicate::Helix => "helix".to_string(),
            Predicate::Sheet => "sheet".to_string(),
            Predicate::Turn => "turn".to_string(),
            Predicate::Loop => "loop".to_string(),

            Predicate::Around { radius, reference } => {
                format!("around {} {}", format_radius(*radius), reference.canonical_form())
            }
            Predicate::XAround { radius, reference } => {
                format!("xaround {} {}", format_radius(*radius), reference.canonical_form())
            }
            Predicate::Beyond { radius, reference } => {
                format!("beyond {} {}", format_radius(*radius), reference.canonical_form())
            }

            Predicate::ByRes(c) => format!("byres {}", c.canonical_form()),
            Predicate::ByChain(c) => format!("bychain {}", c.canonical_form()),
        }
    }
}

/// Render a commutative composite: sorted children joined by `sep`,
/// parenthesized. Degenerate child counts collapse per convention.
fn join_sorted(children: &[Arc<Predicate>], sep: &str, empty: &str) -> String {
    match children.len() {
        0 => empty.to_string(),
        1 => children[0].canonical_form(),
        _ => {
            let mut parts: Vec<String> =
                children.iter().map(|c| c.canonical_form()).collect();
            parts.sort();
            format!("({})", parts.join(sep))
        }
    }
}

/// Render a radius for canonical forms and cache keys: six significant
/// digits with trailing zeros (and a bare trailing point) stripped,
/// falling back to scientific notation outside the fixed-notation range.
pub(crate) fn format_radius(radius: f32) -> String {
    if radius == 0.0 {
        return "0".to_string();
    }
    let exponent = radius.abs().log10().floor() as i32;
    if !(-4..6).contains(&exponent) {
        let sci = format!("{:.5e}", radius);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", strip_zeros(mantissa), exp),
            None => sci,
        };
    }
    let decimals = (5 - exponent).max(0) as usize;
    strip_zeros(&format!("{:.*}", decimals, radius))
}

fn strip_zeros(s: &str) -> String {
    let mut s = s.to_string();
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
