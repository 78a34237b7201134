//! Keyword definitions for the selection language
//!
//! Defines all keywords and their aliases. Because the lexer consumes whole
//! identifiers before lookup, prefix pairs like `xaround`/`around` and
//! `polarh`/`h` can never mis-tokenize: `xaround` is one identifier and maps
//! to its own keyword.

use phf::phf_map;

/// Keyword category, determining how the parser consumes arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordType {
    /// Zero-argument selection (e.g. `protein`, `heavy`, `all`)
    Sel0,
    /// One-argument property selector (e.g. `name`, `resi`, `chain`)
    Sel1,
    /// Unary prefix operator over a primary (`not`, `byres`, `bychain`)
    Opr1,
    /// Binary logical operator (`and`, `or`, `xor`)
    Opr2,
    /// Distance operator taking a radius and a primary
    Dist,
}

/// A selection language keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Logical operators
    Not,
    And,
    Or,
    Xor,

    // Property selectors
    Name,
    Resn,
    Resi,
    Index,
    Chain,
    Elem,

    // Component selectors
    Protein,
    Ligand,
    Water,
    Solvent,
    Organic,
    Backbone,
    Sidechain,
    Metal,

    // Atom-type selectors
    Heavy,
    Hydrogen,
    PolarHydrogen,
    NonpolarHydrogen,

    // Secondary structure selectors
    Helix,
    Sheet,
    Turn,
    Loop,

    // Constants
    All,
    None,

    // Distance operators
    Around,
    XAround,
    Beyond,

    // Expansion operators
    ByRes,
    ByChain,
}

impl Keyword {
    /// Get the keyword category
    pub fn keyword_type(self) -> KeywordType {
        match self {
            Keyword::Not | Keyword::ByRes | Keyword::ByChain => KeywordType::Opr1,

            Keyword::And | Keyword::Or | Keyword::Xor => KeywordType::Opr2,

            Keyword::Around | Keyword::XAround | Keyword::Beyond => KeywordType::Dist,

            Keyword::Name
            | Keyword::Resn
            | Keyword::Resi
            | Keyword::Index
            | Keyword::Chain
            | Keyword::Elem => KeywordType::Sel1,

            Keyword::Protein
            | Keyword::Ligand
            | Keyword::Water
            | Keyword::Solvent
            | Keyword::Organic
            | Keyword::Backbone
            | Keyword::Sidechain
            | Keyword::Metal
            | Keyword::Heavy
            | Keyword::Hydrogen
            | Keyword::PolarHydrogen
            | Keyword::NonpolarHydrogen
            | Keyword::Helix
            | Keyword::Sheet
            | Keyword::Turn
            | Keyword::Loop
            | Keyword::All
            | Keyword::None => KeywordType::Sel0,
        }
    }
}

/// Static map of keyword strings (lowercase) to Keyword enum values,
/// including all documented aliases.
static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    // Logical operators
    "not" => Keyword::Not,
    "!" => Keyword::Not,
    "and" => Keyword::And,
    "&" => Keyword::And,
    "or" => Keyword::Or,
    "|" => Keyword::Or,
    "xor" => Keyword::Xor,
    "^" => Keyword::Xor,

    // Property selectors
    "name" => Keyword::Name,
    "resn" => Keyword::Resn,
    "resi" => Keyword::Resi,
    "index" => Keyword::Index,
    "chain" => Keyword::Chain,
    "elem" => Keyword::Elem,

    // Component selectors
    "protein" => Keyword::Protein,
    "ligand" => Keyword::Ligand,
    "water" => Keyword::Water,
    "solvent" => Keyword::Solvent,
    "organic" => Keyword::Organic,
    "backbone" => Keyword::Backbone,
    "bb" => Keyword::Backbone,
    "sidechain" => Keyword::Sidechain,
    "sc" => Keyword::Sidechain,
    "metal" => Keyword::Metal,
    "metals" => Keyword::Metal,

    // Atom-type selectors
    "heavy" => Keyword::Heavy,
    "hydrogen" => Keyword::Hydrogen,
    "h" => Keyword::Hydrogen,
    "polar_hydrogen" => Keyword::PolarHydrogen,
    "polarh" => Keyword::PolarHydrogen,
    "nonpolar_hydrogen" => Keyword::NonpolarHydrogen,
    "apolarh" => Keyword::NonpolarHydrogen,

    // Secondary structure selectors
    "helix" => Keyword::Helix,
    "sheet" => Keyword::Sheet,
    "turn" => Keyword::Turn,
    "loop" => Keyword::Loop,

    // Constants
    "all" => Keyword::All,
    "none" => Keyword::None,

    // Distance operators
    "around" => Keyword::Around,
    "xaround" => Keyword::XAround,
    "beyond" => Keyword::Beyond,

    // Expansion operators
    "byres" => Keyword::ByRes,
    "bychain" => Keyword::ByChain,
};

/// Look up a keyword by name (case-insensitive)
pub fn lookup(name: &str) -> Option<Keyword> {
    if let Some(&kw) = KEYWORDS.get(name) {
        return Some(kw);
    }
    let lower = name.to_lowercase();
    KEYWORDS.get(lower.as_str()).copied()
}
