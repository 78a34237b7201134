//! Pattern matching for selection values
//!
//! Glob patterns for atom/residue names and integer specifications for
//! residue numbers and atom indices.

use std::fmt;

/// A pattern for matching name strings.
///
/// Matching is case-sensitive; atom and residue names are stored uppercase
/// by convention and compared as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Exact string match
    Exact(String),
    /// Glob pattern using `*` (any run) and `?` (single character)
    Wildcard(String),
}

impl Pattern {
    /// Build a pattern from raw text, classifying it by wildcard content.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.contains('*') || text.contains('?') {
            Pattern::Wildcard(text)
        } else {
            Pattern::Exact(text)
        }
    }

    /// Check if a value matches this pattern.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Exact(pattern) => value == pattern,
            Pattern::Wildcard(pattern) => match_wildcard(pattern, value),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(s) | Pattern::Wildcard(s) => write!(f, "{}", s),
        }
    }
}

/// Recursive glob matcher for `*` and `?`.
fn match_wildcard(pattern: &str, value: &str) -> bool {
    let mut p_chars = pattern.chars();
    let mut v_chars = value.chars();

    while let Some(pc) = p_chars.next() {
        match pc {
            '*' => {
                // * matches zero or more characters; try the rest of the
                // pattern at every suffix of the remaining value
                let remaining_pattern: String = p_chars.collect();
                if remaining_pattern.is_empty() {
                    return true;
                }
                let remaining_value: String = v_chars.collect();
                for i in 0..=remaining_value.len() {
                    if remaining_value.is_char_boundary(i)
                        && match_wildcard(&remaining_pattern, &remaining_value[i..])
                    {
                        return true;
                    }
                }
                return false;
            }
            '?' => {
                if v_chars.next().is_none() {
                    return false;
                }
            }
            c => {
                if v_chars.next() != Some(c) {
                    return false;
                }
            }
        }
    }

    v_chars.next().is_none()
}

/// Comparison operators for numeric specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// Test `value <op> rhs`.
    pub fn test(self, value: i32, rhs: i32) -> bool {
        match self {
            CompareOp::Lt => value < rhs,
            CompareOp::Le => value <= rhs,
            CompareOp::Gt => value > rhs,
            CompareOp::Ge => value >= rhs,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        };
        write!(f, "{}", s)
    }
}

/// Specification for integer-valued properties (resi, index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntSpec {
    /// Single value (e.g. `100`)
    Single(i32),
    /// Inclusive range (e.g. `100-200`)
    Range(i32, i32),
    /// Comparison (e.g. `>= 5`)
    Cmp(CompareOp, i32),
}

impl IntSpec {
    /// Check if a value matches this specification.
    pub fn matches(&self, value: i32) -> bool {
        match self {
            IntSpec::Single(v) => value == *v,
            IntSpec::Range(start, end) => value >= *start && value <= *end,
            IntSpec::Cmp(op, rhs) => op.test(value, *rhs),
        }
    }
}

impl fmt::Display for IntSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntSpec::Single(v) => write!(f, "{}", v),
            IntSpec::Range(start, end) => write!(f, "{}-{}", start, end),
            IntSpec::Cmp(op, rhs) => write!(f, "{} {}", op, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let pattern = Pattern::from_text("CA");
        assert!(matches!(pattern, Pattern::Exact(_)));
        assert!(pattern.matches("CA"));
        assert!(!pattern.matches("CB"));
        // value matching is case-sensitive
        assert!(!pattern.matches("ca"));
    }

    #[test]
    fn test_wildcard_star() {
        let pattern = Pattern::from_text("C*");
        assert!(matches!(pattern, Pattern::Wildcard(_)));
        assert!(pattern.matches("C"));
        assert!(pattern.matches("CA"));
        assert!(pattern.matches("CD2"));
        assert!(!pattern.matches("N"));

        let pattern = Pattern::from_text("*H");
        assert!(pattern.matches("H"));
        assert!(pattern.matches("1H"));
        assert!(pattern.matches("OH"));
        assert!(!pattern.matches("HA"));

        let pattern = Pattern::from_text("*H*");
        assert!(pattern.matches("H"));
        assert!(pattern.matches("HA"));
        assert!(pattern.matches("1H2"));
        assert!(!pattern.matches("CA"));
    }

    #[test]
    fn test_wildcard_question() {
        let pattern = Pattern::from_text("C?");
        assert!(pattern.matches("CA"));
        assert!(pattern.matches("CB"));
        assert!(!pattern.matches("C"));
        assert!(!pattern.matches("CA1"));
    }

    #[test]
    fn test_int_spec_single() {
        let spec = IntSpec::Single(100);
        assert!(spec.matches(100));
        assert!(!spec.matches(101));
    }

    #[test]
    fn test_int_spec_range() {
        let spec = IntSpec::Range(100, 200);
        assert!(spec.matches(100));
        assert!(spec.matches(150));
        assert!(spec.matches(200));
        assert!(!spec.matches(99));
        assert!(!spec.matches(201));
    }

    #[test]
    fn test_int_spec_cmp() {
        assert!(IntSpec::Cmp(CompareOp::Lt, 5).matches(4));
        assert!(!IntSpec::Cmp(CompareOp::Lt, 5).matches(5));
        assert!(IntSpec::Cmp(CompareOp::Le, 5).matches(5));
        assert!(IntSpec::Cmp(CompareOp::Gt, 5).matches(6));
        assert!(!IntSpec::Cmp(CompareOp::Gt, 5).matches(5));
        assert!(IntSpec::Cmp(CompareOp::Ge, 5).matches(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pattern::from_text("C*").to_string(), "C*");
        assert_eq!(IntSpec::Single(7).to_string(), "7");
        assert_eq!(IntSpec::Range(1, 9).to_string(), "1-9");
        assert_eq!(IntSpec::Cmp(CompareOp::Ge, 5).to_string(), ">= 5");
    }
}
