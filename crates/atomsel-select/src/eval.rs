//! Predicate evaluation against a molecule
//!
//! Evaluation is per-atom and total: every predicate answers true or false
//! for any atom index, and an index past the end of the molecule simply
//! fails to match. Distance and expansion operators compute their full
//! per-molecule result once and cache it in the [`EvalContext`] under the
//! canonical form of the operator, so repeated and structurally equal
//! subtrees pay only one pass.

use ahash::AHashSet;
use atomsel_mol::{ComponentFlags, SecondaryStructure, element};
use bitvec::prelude::*;

use crate::ast::{Predicate, format_radius};
use crate::context::EvalContext;

/// Atomic numbers of hydrogen-bond capable heavy atoms (N, O, S)
const POLAR_NEIGHBORS: [u8; 3] = [7, 8, 16];

const BACKBONE_NAMES: [&str; 4] = ["N", "CA", "C", "O"];

/// Evaluate a predicate for one atom of the context's molecule.
pub fn evaluate(pred: &Predicate, ctx: &mut EvalContext<'_>, atom_index: usize) -> bool {
    match pred {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|c| evaluate(c, ctx, atom_index)),
        Predicate::Or(children) => children.iter().any(|c| evaluate(c, ctx, atom_index)),
        Predicate::Xor(children) => {
            let mut matched = false;
            for child in children {
                if evaluate(child, ctx, atom_index) {
                    if matched {
                        return false;
                    }
                    matched = true;
                }
            }
            matched
        }
        Predicate::Not(child) => !evaluate(child, ctx, atom_index),

        Predicate::Name(pattern) => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| pattern.matches(&atom.name)),
        Predicate::Resn(pattern) => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| pattern.matches(&atom.resn)),
        Predicate::Resi(spec) => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| spec.matches(atom.resv)),
        Predicate::Index(spec) => ctx
            .molecule()
            .get(atom_index)
            .is_some() && spec.matches(atom_index as i32),
        Predicate::Chain(chain) => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| atom.chain == *chain),
        Predicate::Elem(z) => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| atom.atomic_number == *z),

        Predicate::Protein => has_component(ctx, atom_index, ComponentFlags::PROTEIN),
        Predicate::Ligand => has_component(ctx, atom_index, ComponentFlags::LIGAND),
        Predicate::Water => has_component(ctx, atom_index, ComponentFlags::WATER),
        // solvent covers water as well as named non-water solvents
        Predicate::Solvent => {
            ctx.molecule().get(atom_index).is_some()
                && ctx
                    .component(atom_index)
                    .intersects(ComponentFlags::WATER | ComponentFlags::SOLVENT)
        }

        Predicate::Organic => {
            let mol = ctx.molecule();
            match mol.get(atom_index) {
                Some(atom) => {
                    let carbon_linked = atom.atomic_number == 6
                        || mol
                            .neighbors(atom_index)
                            .iter()
                            .any(|&n| mol.atom(n).atomic_number == 6);
                    carbon_linked
                        && !ctx
                            .component(atom_index)
                            .intersects(ComponentFlags::PROTEIN | ComponentFlags::NUCLEIC)
                }
                None => false,
            }
        }

        Predicate::Backbone => {
            let mol = ctx.molecule();
            match mol.get(atom_index) {
                Some(atom) => {
                    BACKBONE_NAMES.contains(&atom.name.as_str())
                        && has_component(ctx, atom_index, ComponentFlags::PROTEIN)
                }
                None => false,
            }
        }
        Predicate::Sidechain => {
            let mol = ctx.molecule();
            match mol.get(atom_index) {
                Some(atom) => {
                    !BACKBONE_NAMES.contains(&atom.name.as_str())
                        && atom.name != "OXT"
                        && has_component(ctx, atom_index, ComponentFlags::PROTEIN)
                }
                None => false,
            }
        }

        Predicate::Metal => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| element::is_metal(atom.atomic_number)),
        Predicate::Heavy => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| atom.is_heavy()),
        Predicate::Hydrogen => ctx
            .molecule()
            .get(atom_index)
            .is_some_and(|atom| atom.is_hydrogen()),
        Predicate::PolarHydrogen => is_polar_hydrogen(ctx, atom_index),
        Predicate::NonpolarHydrogen => {
            ctx.molecule()
                .get(atom_index)
                .is_some_and(|atom| atom.is_hydrogen())
                && !is_polar_hydrogen(ctx, atom_index)
        }

        Predicate::Helix => has_ss(ctx, atom_index, SecondaryStructure::Helix),
        Predicate::Sheet => has_ss(ctx, atom_index, SecondaryStructure::Sheet),
        Predicate::Turn => has_ss(ctx, atom_index, SecondaryStructure::Turn),
        // loop also covers atoms with no assignment at all
        Predicate::Loop => ctx.molecule().get(atom_index).is_some_and(|atom| {
            !matches!(
                atom.ss,
                Some(SecondaryStructure::Helix)
                    | Some(SecondaryStructure::Sheet)
                    | Some(SecondaryStructure::Turn)
            )
        }),

        Predicate::Around { radius, reference } => {
            let key = ensure_around_mask(ctx, *radius, reference);
            mask_contains(ctx, &key, atom_index)
        }
        Predicate::XAround { radius, reference } => {
            // reference atoms are excluded, so their own match wins first
            if evaluate(reference, ctx, atom_index) {
                return false;
            }
            let key = ensure_around_mask(ctx, *radius, reference);
            mask_contains(ctx, &key, atom_index)
        }
        Predicate::Beyond { radius, reference } => {
            let key = ensure_around_mask(ctx, *radius, reference);
            !mask_contains(ctx, &key, atom_index)
        }

        Predicate::ByRes(child) => {
            let key = ensure_residue_set(ctx, child);
            ctx.residue_set(&key)
                .is_some_and(|set| set.contains(&atom_index))
        }
        Predicate::ByChain(child) => {
            let key = ensure_chain_set(ctx, child);
            match ctx.molecule().get(atom_index) {
                Some(atom) => ctx
                    .chain_set(&key)
                    .is_some_and(|set| set.contains(&atom.chain)),
                None => false,
            }
        }
    }
}

fn has_component(ctx: &mut EvalContext<'_>, atom_index: usize, flag: ComponentFlags) -> bool {
    ctx.molecule().get(atom_index).is_some() && ctx.component(atom_index).contains(flag)
}

fn has_ss(ctx: &EvalContext<'_>, atom_index: usize, ss: SecondaryStructure) -> bool {
    ctx.molecule()
        .get(atom_index)
        .is_some_and(|atom| atom.ss == Some(ss))
}

/// A hydrogen bonded to nitrogen, oxygen, or sulfur.
fn is_polar_hydrogen(ctx: &EvalContext<'_>, atom_index: usize) -> bool {
    let mol = ctx.molecule();
    match mol.get(atom_index) {
        Some(atom) if atom.is_hydrogen() => mol
            .neighbors(atom_index)
            .iter()
            .any(|&n| POLAR_NEIGHBORS.contains(&mol.atom(n).atomic_number)),
        _ => false,
    }
}

fn mask_contains(ctx: &EvalContext<'_>, key: &str, atom_index: usize) -> bool {
    ctx.around_mask(key)
        .and_then(|mask| mask.get(atom_index).map(|b| *b))
        .unwrap_or(false)
}

/// Compute (or reuse) the set of atoms within `radius` of any atom matched
/// by `reference`. `around`, `xaround`, and `beyond` with the same radius
/// and reference all share one mask.
fn ensure_around_mask(ctx: &mut EvalContext<'_>, radius: f32, reference: &Predicate) -> String {
    let key = format!(
        "around_{}_{}",
        format_radius(radius),
        reference.canonical_form()
    );
    if ctx.around_mask(&key).is_some() {
        return key;
    }

    let len = ctx.molecule().len();
    let mut reference_atoms = Vec::new();
    for idx in 0..len {
        if evaluate(reference, ctx, idx) {
            reference_atoms.push(idx);
        }
    }

    let mut mask = bitvec![u64, Lsb0; 0; len];
    for &reference_idx in &reference_atoms {
        for neighbor in ctx
            .spatial_index()
            .within_radius_of_atom(reference_idx, radius)
        {
            mask.set(neighbor, true);
        }
    }

    ctx.insert_around_mask(key.clone(), mask);
    key
}

/// Compute (or reuse) the set of atoms whose residue contains at least one
/// atom matched by `child`.
fn ensure_residue_set(ctx: &mut EvalContext<'_>, child: &Predicate) -> String {
    let key = format!("byres_{}", child.canonical_form());
    if ctx.residue_set(&key).is_some() {
        return key;
    }

    let mol = ctx.molecule();
    let len = mol.len();
    let mut matched_residues: AHashSet<(char, i32, char)> = AHashSet::new();
    for idx in 0..len {
        if evaluate(child, ctx, idx) {
            matched_residues.insert(mol.atom(idx).residue_key());
        }
    }

    let set: AHashSet<usize> = (0..len)
        .filter(|&idx| matched_residues.contains(&mol.atom(idx).residue_key()))
        .collect();

    ctx.insert_residue_set(key.clone(), set);
    key
}

/// Compute (or reuse) the set of chains containing at least one atom
/// matched by `child`.
fn ensure_chain_set(ctx: &mut EvalContext<'_>, child: &Predicate) -> String {
    let key = format!("bychain_{}", child.canonical_form());
    if ctx.chain_set(&key).is_some() {
        return key;
    }

    let mol = ctx.molecule();
    let len = mol.len();
    let mut chains: AHashSet<char> = AHashSet::new();
    for idx in 0..len {
        if evaluate(child, ctx, idx) {
            chains.insert(mol.atom(idx).chain);
        }
    }

    ctx.insert_chain_set(key.clone(), chains);
    key
}
