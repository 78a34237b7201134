//! Molecule container: atoms, coordinates, and bonds

use lin_alg::f32::Vec3;

use crate::atom::Atom;

/// A molecule: atoms in a stable order, one coordinate per atom, and an
/// undirected bond list with a prebuilt adjacency table.
///
/// Atom indices are zero-based and stable for the lifetime of the molecule.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
    coords: Vec<Vec3>,
    bonds: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
    tagged: bool,
}

impl Molecule {
    /// Create an empty molecule.
    pub fn new() -> Self {
        Molecule::default()
    }

    /// Add an atom with its coordinate, returning its index.
    pub fn add_atom(&mut self, atom: Atom, pos: Vec3) -> usize {
        let idx = self.atoms.len();
        self.atoms.push(atom);
        self.coords.push(pos);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an undirected bond between two existing atoms.
    ///
    /// Out-of-range or self-referential pairs are ignored.
    pub fn add_bond(&mut self, a: usize, b: usize) {
        if a == b || a >= self.atoms.len() || b >= self.atoms.len() {
            return;
        }
        self.bonds.push((a, b));
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the molecule has no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The atom at `idx`.
    ///
    /// Panics if `idx` is out of range; use [`Molecule::get`] when the index
    /// is not known to be valid.
    pub fn atom(&self, idx: usize) -> &Atom {
        &self.atoms[idx]
    }

    /// The atom at `idx`, or `None` if out of range.
    pub fn get(&self, idx: usize) -> Option<&Atom> {
        self.atoms.get(idx)
    }

    /// Mutable access to the atom at `idx`.
    pub fn atom_mut(&mut self, idx: usize) -> &mut Atom {
        &mut self.atoms[idx]
    }

    /// Iterate over atoms in index order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    /// The coordinate of the atom at `idx`.
    pub fn coord(&self, idx: usize) -> Vec3 {
        self.coords[idx]
    }

    /// All coordinates, parallel to atom indices.
    pub fn coords(&self) -> &[Vec3] {
        &self.coords
    }

    /// All bonds as (a, b) index pairs.
    pub fn bonds(&self) -> &[(usize, usize)] {
        &self.bonds
    }

    /// Indices of atoms bonded to the atom at `idx`.
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the tagger has already classified this molecule.
    pub fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// Record that the tagger has classified this molecule.
    pub fn mark_tagged(&mut self) {
        self.tagged = true;
    }
}
