//! Secondary structure types

/// Secondary structure assignment for a residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryStructure {
    /// Alpha helix
    Helix,
    /// Beta sheet
    Sheet,
    /// Turn
    Turn,
    /// Loop/coil
    Loop,
}
