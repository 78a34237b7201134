//! Minimal molecule model for the atomsel selection engine
//!
//! Provides the host-collaborator types the query engine reads: atoms with
//! residue associations, a molecule container with coordinates and bonds,
//! element lookups, component classification flags, and secondary structure
//! types. No file I/O lives here; hosts build molecules programmatically.

mod atom;
pub mod element;
mod flags;
mod molecule;
mod secondary;

pub use atom::{Atom, AtomBuilder};
pub use flags::ComponentFlags;
pub use molecule::Molecule;
pub use secondary::SecondaryStructure;

// Re-export the coordinate type so downstream crates share one Vec3.
pub use lin_alg::f32::Vec3;
