//! Element symbol and atomic number lookups

/// Element symbols indexed by atomic number (index 0 is unused).
static SYMBOLS: [&str; 119] = [
    "", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg",
    "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr",
    "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf",
    "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po",
    "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs",
    "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Look up an atomic number from an element symbol (case-insensitive).
///
/// Returns `None` for unrecognized symbols.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return None;
    }
    SYMBOLS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(symbol) && !s.is_empty())
        .map(|z| z as u8)
}

/// Get the canonical symbol for an atomic number, or `"X"` if unknown.
pub fn symbol(atomic_number: u8) -> &'static str {
    SYMBOLS.get(atomic_number as usize).copied().filter(|s| !s.is_empty()).unwrap_or("X")
}

/// Whether an atomic number is one of the metals commonly found in
/// biomolecular structures: Li(3), Na-Al(11-13), K-Zn(19-30),
/// Rb-Cd(37-48), Cs-Hg(55-80).
pub fn is_metal(atomic_number: u8) -> bool {
    matches!(atomic_number, 3 | 11..=13 | 19..=30 | 37..=48 | 55..=80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_number() {
        assert_eq!(atomic_number("H"), Some(1));
        assert_eq!(atomic_number("C"), Some(6));
        assert_eq!(atomic_number("Fe"), Some(26));
        assert_eq!(atomic_number("FE"), Some(26));
        assert_eq!(atomic_number("fe"), Some(26));
        assert_eq!(atomic_number("Xx"), None);
        assert_eq!(atomic_number(""), None);
    }

    #[test]
    fn test_symbol() {
        assert_eq!(symbol(1), "H");
        assert_eq!(symbol(26), "Fe");
        assert_eq!(symbol(0), "X");
        assert_eq!(symbol(200), "X");
    }

    #[test]
    fn test_symbol_roundtrip() {
        for z in 1..=118u8 {
            assert_eq!(atomic_number(symbol(z)), Some(z));
        }
    }

    #[test]
    fn test_is_metal() {
        assert!(is_metal(3)); // Li
        assert!(is_metal(11)); // Na
        assert!(is_metal(12)); // Mg
        assert!(is_metal(20)); // Ca
        assert!(is_metal(26)); // Fe
        assert!(is_metal(30)); // Zn
        assert!(is_metal(80)); // Hg
        assert!(!is_metal(1)); // H
        assert!(!is_metal(6)); // C
        assert!(!is_metal(16)); // S
        assert!(!is_metal(35)); // Br
        assert!(!is_metal(81)); // Tl
    }
}
