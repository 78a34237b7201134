//! Residue-name based component classification
//!
//! Assigns each atom a [`ComponentFlags`] value from its residue name.
//! Classification is by name-set lookup with a fixed priority: water first,
//! then amino acids, nucleotides, cofactors, and solvents; anything unknown
//! is a ligand.

use atomsel_mol::{ComponentFlags, Molecule};
use phf::phf_set;

/// Crystallographic water residue names
static WATER_NAMES: phf::Set<&'static str> = phf_set! {
    "HOH", "WAT", "H2O", "DOD", "TIP", "TIP3", "SPC",
};

/// Standard amino acids, common protonation variants, and capping groups
static AMINO_NAMES: phf::Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "HID", "HIE", "HIP", "CYX", "ASH", "GLH",
    "ACE", "NME",
};

/// RNA/DNA nucleotides in one- and three-letter conventions
static NUCLEOTIDE_NAMES: phf::Set<&'static str> = phf_set! {
    "A", "G", "C", "U", "T",
    "DA", "DG", "DC", "DT", "DU",
    "ADE", "GUA", "CYT", "URA", "THY",
    "RA", "RG", "RC", "RU",
};

/// Biological cofactors, prosthetic groups, and common metal ions
static COFACTOR_NAMES: phf::Set<&'static str> = phf_set! {
    "NAD", "NAP", "NAI", "NDP", "FAD", "FMN", "FNR",
    "HEM", "HEC", "HEA",
    "ATP", "ADP", "AMP", "GTP", "GDP", "GMP",
    "COA", "ACO", "PLP", "BTN", "B12", "CBY",
    "SF4", "FES", "F3S",
    "MG", "CA", "ZN", "FE", "MN", "CU",
};

/// Non-water crystallization solvents and cryoprotectants
static SOLVENT_NAMES: phf::Set<&'static str> = phf_set! {
    "DMS", "DMF", "ACN", "MET", "EOH", "IPA", "GOL", "PEG", "EDO",
};

/// Classify a residue name into a single component flag.
///
/// The name is trimmed before lookup; the sets are checked in priority
/// order, so `MET` resolves to methionine rather than methanol.
pub fn classify(resn: &str) -> ComponentFlags {
    let resn = resn.trim();
    if WATER_NAMES.contains(resn) {
        ComponentFlags::WATER
    } else if AMINO_NAMES.contains(resn) {
        ComponentFlags::PROTEIN
    } else if NUCLEOTIDE_NAMES.contains(resn) {
        ComponentFlags::NUCLEIC
    } else if COFACTOR_NAMES.contains(resn) {
        ComponentFlags::COFACTOR
    } else if SOLVENT_NAMES.contains(resn) {
        ComponentFlags::SOLVENT
    } else {
        ComponentFlags::LIGAND
    }
}

/// Tag every atom of a molecule with its component flag.
///
/// Idempotent: a molecule already marked as tagged is left untouched, so
/// repeated calls are free.
pub fn tag(mol: &mut Molecule) {
    if mol.is_tagged() {
        return;
    }
    for idx in 0..mol.len() {
        let component = classify(&mol.atom(idx).resn);
        mol.atom_mut(idx).component = Some(component);
    }
    mol.mark_tagged();
}
