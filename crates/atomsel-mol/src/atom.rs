//! Atom data structure

use crate::element;
use crate::flags::ComponentFlags;
use crate::secondary::SecondaryStructure;

/// A single atom with its residue association.
///
/// Atoms are read-only inputs for selection evaluation; the only field the
/// engine ever writes is `component`, set once by the tagger.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom name (e.g. "CA", "N", "O")
    pub name: String,

    /// Atomic number (1 = hydrogen)
    pub atomic_number: u8,

    /// Residue name (e.g. "ALA", "HOH")
    pub resn: String,

    /// Residue sequence number
    pub resv: i32,

    /// Insertion code (space if none)
    pub inscode: char,

    /// Chain identifier
    pub chain: char,

    /// Secondary structure assignment, if any
    pub ss: Option<SecondaryStructure>,

    /// Component classification written by the tagger
    pub component: Option<ComponentFlags>,
}

impl Default for Atom {
    fn default() -> Self {
        Atom {
            name: String::new(),
            atomic_number: 0,
            resn: String::new(),
            resv: 0,
            inscode: ' ',
            chain: ' ',
            ss: None,
            component: None,
        }
    }
}

impl Atom {
    /// Create a new atom with the given name and atomic number.
    pub fn new(name: impl Into<String>, atomic_number: u8) -> Self {
        Atom {
            name: name.into(),
            atomic_number,
            ..Default::default()
        }
    }

    /// Check if this atom is hydrogen.
    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        self.atomic_number == 1
    }

    /// Check if this atom is a heavy (non-hydrogen) atom.
    #[inline]
    pub fn is_heavy(&self) -> bool {
        self.atomic_number > 1
    }

    /// The (chain, residue number, insertion code) key identifying this
    /// atom's residue within its molecule.
    #[inline]
    pub fn residue_key(&self) -> (char, i32, char) {
        (self.chain, self.resv, self.inscode)
    }
}

/// Builder for creating atoms with a fluent interface
#[derive(Debug, Default)]
pub struct AtomBuilder {
    atom: Atom,
}

impl AtomBuilder {
    /// Create a new atom builder
    pub fn new() -> Self {
        AtomBuilder::default()
    }

    /// Set the atom name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.atom.name = name.into();
        self
    }

    /// Set the atomic number
    pub fn atomic_number(mut self, z: u8) -> Self {
        self.atom.atomic_number = z;
        self
    }

    /// Set the element from its symbol (unknown symbols leave it unset)
    pub fn element(mut self, symbol: &str) -> Self {
        if let Some(z) = element::atomic_number(symbol) {
            self.atom.atomic_number = z;
        }
        self
    }

    /// Set residue name
    pub fn resn(mut self, resn: impl Into<String>) -> Self {
        self.atom.resn = resn.into();
        self
    }

    /// Set residue number
    pub fn resv(mut self, resv: i32) -> Self {
        self.atom.resv = resv;
        self
    }

    /// Set insertion code
    pub fn inscode(mut self, inscode: char) -> Self {
        self.atom.inscode = inscode;
        self
    }

    /// Set chain identifier
    pub fn chain(mut self, chain: char) -> Self {
        self.atom.chain = chain;
        self
    }

    /// Set secondary structure
    pub fn ss(mut self, ss: SecondaryStructure) -> Self {
        self.atom.ss = Some(ss);
        self
    }

    /// Build the atom
    pub fn build(self) -> Atom {
        self.atom
    }
}
