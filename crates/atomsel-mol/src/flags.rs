//! Component classification flags

use bitflags::bitflags;

bitflags! {
    /// Residue component classification assigned by the tagger.
    ///
    /// Exactly one primary flag is assigned per atom, but the representation
    /// is bitwise-combinable so callers can test against unions
    /// (e.g. `WATER | SOLVENT`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentFlags: u8 {
        /// Water molecule
        const WATER = 1 << 0;
        /// Standard amino acid or protonation variant
        const PROTEIN = 1 << 1;
        /// Nucleotide
        const NUCLEIC = 1 << 2;
        /// Known cofactor
        const COFACTOR = 1 << 3;
        /// Named non-water solvent
        const SOLVENT = 1 << 4;
        /// Anything unrecognized (the default classification)
        const LIGAND = 1 << 5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_test() {
        let flags = ComponentFlags::WATER;
        assert!(flags.intersects(ComponentFlags::WATER | ComponentFlags::SOLVENT));
        assert!(!flags.intersects(ComponentFlags::PROTEIN | ComponentFlags::NUCLEIC));
    }
}
