//! Recursive descent parser for the selection language
//!
//! One function per precedence level, loosest first:
//! `xor` < `or` < `and` < unary `not` < primary. Each level gathers its
//! operands into a single n-ary node, so `a and b and c` becomes one AND
//! with three children while parenthesized groups stay nested.

use std::sync::Arc;

use atomsel_mol::element;

use crate::ast::Predicate;
use crate::error::{ParseResult, SelectionError};
use crate::keywords::{self, Keyword, KeywordType};
use crate::lexer::{Token, TokenStream};

/// Parse a selection string into a predicate tree.
///
/// The empty (or all-whitespace) string parses to the constant-true
/// predicate. Trailing input after a complete expression is an error.
pub fn parse_selection(input: &str) -> ParseResult<Arc<Predicate>> {
    let mut stream = TokenStream::from_input(input)?;

    if stream.is_eof() {
        return Ok(Arc::new(Predicate::True));
    }

    let expr = parse_xor(&mut stream)?;

    if !stream.is_eof() {
        return Err(SelectionError::at(
            "unexpected input after complete expression",
            stream.offset(),
        ));
    }

    Ok(expr)
}

/// Peek a binary operator without consuming it.
fn peek_binop(stream: &TokenStream) -> Option<Keyword> {
    match stream.peek() {
        Token::Ampersand => Some(Keyword::And),
        Token::Pipe => Some(Keyword::Or),
        Token::Caret => Some(Keyword::Xor),
        Token::Ident(name) => match keywords::lookup(name) {
            Some(kw) if kw.keyword_type() == KeywordType::Opr2 => Some(kw),
            _ => None,
        },
        _ => None,
    }
}

fn parse_xor(stream: &mut TokenStream) -> ParseResult<Arc<Predicate>> {
    let mut expr = parse_or(stream)?;
    if peek_binop(stream) == Some(Keyword::Xor) {
        let mut children = vec![expr];
        while peek_binop(stream) == Some(Keyword::Xor) {
            stream.next();
            children.push(parse_or(stream)?);
        }
        expr = Arc::new(Predicate::Xor(children));
    }
    Ok(expr)
}

fn parse_or(stream: &mut TokenStream) -> ParseResult<Arc<Predicate>> {
    let mut expr = parse_and(stream)?;
    if peek_binop(stream) == Some(Keyword::Or) {
        let mut children = vec![expr];
        while peek_binop(stream) == Some(Keyword::Or) {
            stream.next();
            children.push(parse_and(stream)?);
        }
        expr = Arc::new(Predicate::Or(children));
    }
    Ok(expr)
}

fn parse_and(stream: &mut TokenStream) -> ParseResult<Arc<Predicate>> {
    let mut expr = parse_unary(stream)?;
    if peek_binop(stream) == Some(Keyword::And) {
        let mut children = vec![expr];
        while peek_binop(stream) == Some(Keyword::And) {
            stream.next();
            children.push(parse_unary(stream)?);
        }
        expr = Arc::new(Predicate::And(children));
    }
    Ok(expr)
}

fn parse_unary(stream: &mut TokenStream) -> ParseResult<Arc<Predicate>> {
    let is_not = match stream.peek() {
        Token::Exclamation => true,
        Token::Ident(name) => keywords::lookup(name) == Some(Keyword::Not),
        _ => false,
    };
    if is_not {
        stream.next();
        let child = parse_unary(stream)?;
        return Ok(Arc::new(Predicate::Not(child)));
    }
    parse_primary(stream)
}

fn parse_primary(stream: &mut TokenStream) -> ParseResult<Arc<Predicate>> {
    let offset = stream.offset();
    match stream.next() {
        Token::LParen => {
            let expr = parse_xor(stream)?;
            if !matches!(stream.next(), Token::RParen) {
                return Err(SelectionError::at("unmatched parenthesis", offset));
            }
            Ok(expr)
        }

        Token::Slash => parse_macro(stream, offset),

        Token::Ident(name) => match keywords::lookup(&name) {
            Some(kw) => parse_keyword(stream, kw, &name, offset),
            None => Err(SelectionError::at(
                format!("unknown keyword: {}", name),
                offset,
            )),
        },

        tok => Err(SelectionError::at(
            format!("unexpected token: {:?}", tok),
            offset,
        )),
    }
}

/// Dispatch a keyword found in primary position.
fn parse_keyword(
    stream: &mut TokenStream,
    kw: Keyword,
    name: &str,
    offset: usize,
) -> ParseResult<Arc<Predicate>> {
    let pred = match kw {
        Keyword::All => Predicate::True,
        Keyword::None => Predicate::False,

        Keyword::Protein => Predicate::Protein,
        Keyword::Ligand => Predicate::Ligand,
        Keyword::Water => Predicate::Water,
        Keyword::Solvent => Predicate::Solvent,
        Keyword::Organic => Predicate::Organic,
        Keyword::Backbone => Predicate::Backbone,
        Keyword::Sidechain => Predicate::Sidechain,
        Keyword::Metal => Predicate::Metal,

        Keyword::Heavy => Predicate::Heavy,
        Keyword::Hydrogen => Predicate::Hydrogen,
        Keyword::PolarHydrogen => Predicate::PolarHydrogen,
        Keyword::NonpolarHydrogen => Predicate::NonpolarHydrogen,

        Keyword::Helix => Predicate::Helix,
        Keyword::Sheet => Predicate::Sheet,
        Keyword::Turn => Predicate::Turn,
        Keyword::Loop => Predicate::Loop,

        Keyword::Name => return parse_pattern_predicate(stream, Predicate::Name, "name"),
        Keyword::Resn => return parse_pattern_predicate(stream, Predicate::Resn, "resn"),

        Keyword::Resi => Predicate::Resi(parse_int_spec(stream, "resi")?),
        Keyword::Index => Predicate::Index(parse_int_spec(stream, "index")?),

        Keyword::Chain => Predicate::Chain(parse_chain_id(stream)?),
        Keyword::Elem => Predicate::Elem(parse_element(stream)?),

        Keyword::Around => {
            let radius = parse_radius(stream, "around")?;
            let reference = parse_primary(stream)?;
            Predicate::Around { radius, reference }
        }
        Keyword::XAround => {
            let radius = parse_radius(stream, "xaround")?;
            let reference = parse_primary(stream)?;
            Predicate::XAround { radius, reference }
        }
        Keyword::Beyond => {
            let radius = parse_radius(stream, "beyond")?;
            let reference = parse_primary(stream)?;
            Predicate::Beyond { radius, reference }
        }

        Keyword::ByRes => Predicate::ByRes(parse_primary(stream)?),
        Keyword::ByChain => Predicate::ByChain(parse_primary(stream)?),

        // Operators never start a primary
        Keyword::Not | Keyword::And | Keyword::Or | Keyword::Xor => {
            return Err(SelectionError::at(
                format!("unexpected operator: {}", name),
                offset,
            ));
        }
    };
    Ok(Arc::new(pred))
}

/// Whether an identifier is an operator-like keyword that terminates a
/// pattern or macro slot.
fn is_operator_keyword(name: &str) -> bool {
    matches!(
        keywords::lookup(name).map(Keyword::keyword_type),
        Some(KeywordType::Opr1 | KeywordType::Opr2 | KeywordType::Dist)
    )
}

/// Parse a `+`-separated pattern list for `name`/`resn`.
///
/// A single pattern builds one predicate; a list expands to an OR of
/// single-pattern predicates.
fn parse_pattern_predicate(
    stream: &mut TokenStream,
    make: fn(crate::pattern::Pattern) -> Predicate,
    kw: &str,
) -> ParseResult<Arc<Predicate>> {
    let mut patterns = vec![parse_single_pattern(stream, kw)?];
    while matches!(stream.peek(), Token::Plus) {
        stream.next();
        patterns.push(parse_single_pattern(stream, kw)?);
    }

    if patterns.len() == 1 {
        Ok(Arc::new(make(patterns.remove(0))))
    } else {
        let children = patterns.into_iter().map(|p| Arc::new(make(p))).collect();
        Ok(Arc::new(Predicate::Or(children)))
    }
}

/// Parse one glob pattern, gluing wildcard tokens to adjacent text so that
/// `C*`, `*H`, `*H*`, and `C?1` each form a single pattern. Gluing requires
/// byte adjacency in the input: `C* H` stays two tokens and the stray `H`
/// surfaces as a parse error downstream.
fn parse_single_pattern(
    stream: &mut TokenStream,
    kw: &str,
) -> ParseResult<crate::pattern::Pattern> {
    let offset = stream.offset();
    let mut text = match stream.next() {
        Token::Ident(t) => t,
        Token::Integer(i) => i.to_string(),
        Token::Asterisk => "*".to_string(),
        Token::Question => "?".to_string(),
        _ => {
            return Err(SelectionError::at(
                format!("expected pattern after '{}'", kw),
                offset,
            ));
        }
    };
    let mut end = offset + text.len();

    loop {
        if stream.offset() != end {
            break;
        }
        let ends_wild = text.ends_with('*') || text.ends_with('?');
        let glued = match stream.peek() {
            Token::Asterisk => Some("*".to_string()),
            Token::Question => Some("?".to_string()),
            Token::Ident(name) if ends_wild && !is_operator_keyword(name) => {
                Some(name.clone())
            }
            Token::Integer(i) if ends_wild => Some(i.to_string()),
            _ => None,
        };
        match glued {
            Some(part) => {
                stream.next();
                text.push_str(&part);
                end += part.len();
            }
            None => break,
        }
    }

    Ok(crate::pattern::Pattern::from_text(text))
}

/// Parse an integer specification: comparison, range, or single value.
fn parse_int_spec(stream: &mut TokenStream, kw: &str) -> ParseResult<crate::pattern::IntSpec> {
    use crate::pattern::{CompareOp, IntSpec};

    let offset = stream.offset();
    let op = match stream.peek() {
        Token::LessThan => Some(CompareOp::Lt),
        Token::LessOrEqual => Some(CompareOp::Le),
        Token::GreaterThan => Some(CompareOp::Gt),
        Token::GreaterOrEqual => Some(CompareOp::Ge),
        _ => None,
    };
    if let Some(op) = op {
        stream.next();
        let value = expect_integer(stream, kw)?;
        return Ok(IntSpec::Cmp(op, value));
    }

    match stream.next() {
        Token::Integer(start) => {
            if matches!(stream.peek(), Token::Minus) {
                stream.next();
                let end = expect_integer(stream, kw)?;
                Ok(IntSpec::Range(start, end))
            } else {
                Ok(IntSpec::Single(start))
            }
        }
        _ => Err(SelectionError::at(
            format!("expected number after '{}'", kw),
            offset,
        )),
    }
}

fn expect_integer(stream: &mut TokenStream, kw: &str) -> ParseResult<i32> {
    let offset = stream.offset();
    match stream.next() {
        Token::Integer(i) => Ok(i),
        _ => Err(SelectionError::at(
            format!("expected number after '{}'", kw),
            offset,
        )),
    }
}

/// Parse a single-character chain identifier.
fn parse_chain_id(stream: &mut TokenStream) -> ParseResult<char> {
    let offset = stream.offset();
    match stream.next() {
        Token::Ident(name) => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(SelectionError::at(
                    format!("chain identifier must be a single character, got '{}'", name),
                    offset,
                )),
            }
        }
        Token::Integer(i @ 0..=9) => {
            // Numeric chain ids appear in large assemblies
            Ok(char::from_digit(i as u32, 10).unwrap_or('0'))
        }
        _ => Err(SelectionError::at(
            "expected chain identifier after 'chain'",
            offset,
        )),
    }
}

/// Parse an element symbol, resolving it to an atomic number now so
/// evaluation is a plain integer comparison.
fn parse_element(stream: &mut TokenStream) -> ParseResult<u8> {
    let offset = stream.offset();
    match stream.next() {
        Token::Ident(symbol) => element::atomic_number(&symbol).ok_or_else(|| {
            SelectionError::at(format!("unknown element symbol: {}", symbol), offset)
        }),
        _ => Err(SelectionError::at(
            "expected element symbol after 'elem'",
            offset,
        )),
    }
}

/// Parse a non-negative radius for a distance operator.
fn parse_radius(stream: &mut TokenStream, kw: &str) -> ParseResult<f32> {
    let offset = stream.offset();
    match stream.next() {
        Token::Float(f) => Ok(f),
        Token::Integer(i) => Ok(i as f32),
        _ => Err(SelectionError::at(
            format!("expected radius after '{}'", kw),
            offset,
        )),
    }
}

/// Parse the hierarchical macro `//chain/resi/name`.
///
/// Empty slots act as wildcards; present slots compile to the matching
/// property predicate and are ANDed together. Missing trailing slots are
/// treated as empty.
fn parse_macro(stream: &mut TokenStream, offset: usize) -> ParseResult<Arc<Predicate>> {
    if !matches!(stream.next(), Token::Slash) {
        return Err(SelectionError::at(
            "invalid macro syntax: expected '//'",
            offset,
        ));
    }

    let mut parts: Vec<Arc<Predicate>> = Vec::new();

    // Chain slot
    let chain = match stream.peek() {
        Token::Ident(name) if !is_operator_keyword(name) => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => {
                    return Err(SelectionError::at(
                        format!("macro chain identifier must be a single character, got '{}'", name),
                        stream.offset(),
                    ));
                }
            }
        }
        Token::Integer(i) if (0..=9).contains(i) => char::from_digit(*i as u32, 10),
        _ => None,
    };
    if let Some(c) = chain {
        stream.next();
        parts.push(Arc::new(Predicate::Chain(c)));
    }

    if matches!(stream.peek(), Token::Slash) {
        stream.next();

        // Residue slot
        if matches!(stream.peek(), Token::Integer(_)) {
            let spec = parse_int_spec(stream, "macro residue slot")?;
            parts.push(Arc::new(Predicate::Resi(spec)));
        }

        if matches!(stream.peek(), Token::Slash) {
            stream.next();

            // Name slot
            let starts_pattern = match stream.peek() {
                Token::Ident(name) => !is_operator_keyword(name),
                Token::Integer(_) | Token::Asterisk | Token::Question => true,
                _ => false,
            };
            if starts_pattern {
                parts.push(parse_pattern_predicate(
                    stream,
                    Predicate::Name,
                    "macro name slot",
                )?);
            }
        }
    }

    Ok(match parts.len() {
        0 => Arc::new(Predicate::True),
        1 => parts.remove(0),
        _ => Arc::new(Predicate::And(parts)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PredicateKind;
    use crate::pattern::{CompareOp, IntSpec, Pattern};

    fn parse(input: &str) -> Arc<Predicate> {
        parse_selection(input).unwrap()
    }

    fn canonical(input: &str) -> String {
        parse(input).canonical_form()
    }

    #[test]
    fn test_empty_and_all() {
        assert!(matches!(*parse(""), Predicate::True));
        assert!(matches!(*parse("   "), Predicate::True));
        assert!(matches!(*parse("all"), Predicate::True));
        assert!(matches!(*parse("none"), Predicate::False));
        assert_eq!(canonical(""), "all");
    }

    #[test]
    fn test_case_insensitive_keywords() {
        assert!(matches!(*parse("PROTEIN"), Predicate::Protein));
        assert!(matches!(*parse("Water"), Predicate::Water));
        assert_eq!(canonical("NAME CA AND PROTEIN"), "(name CA and protein)");
    }

    #[test]
    fn test_name_pattern() {
        match &*parse("name CA") {
            Predicate::Name(Pattern::Exact(s)) => assert_eq!(s, "CA"),
            other => panic!("unexpected: {:?}", other),
        }
        match &*parse("name C*") {
            Predicate::Name(Pattern::Wildcard(s)) => assert_eq!(s, "C*"),
            other => panic!("unexpected: {:?}", other),
        }
        match &*parse("name *H*") {
            Predicate::Name(Pattern::Wildcard(s)) => assert_eq!(s, "*H*"),
            other => panic!("unexpected: {:?}", other),
        }
        match &*parse("name C?1") {
            Predicate::Name(Pattern::Wildcard(s)) => assert_eq!(s, "C?1"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_pattern_gluing_requires_adjacency() {
        match &*parse("name C*H1") {
            Predicate::Name(Pattern::Wildcard(s)) => assert_eq!(s, "C*H1"),
            other => panic!("unexpected: {:?}", other),
        }
        // whitespace-separated tokens never merge into one pattern
        assert!(parse_selection("name C* H").is_err());
        assert!(parse_selection("name C *").is_err());
        assert!(parse_selection("name * 1").is_err());
    }

    #[test]
    fn test_name_list() {
        match &*parse("name C1+C2+C3") {
            Predicate::Or(children) => {
                assert_eq!(children.len(), 3);
                assert!(children.iter().all(|c| matches!(**c, Predicate::Name(_))));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(
            canonical("name C1+C2+C3"),
            "(name C1 or name C2 or name C3)"
        );
    }

    #[test]
    fn test_resn() {
        match &*parse("resn HOH") {
            Predicate::Resn(Pattern::Exact(s)) => assert_eq!(s, "HOH"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_resi_forms() {
        assert!(matches!(*parse("resi 100"), Predicate::Resi(IntSpec::Single(100))));
        assert!(matches!(
            *parse("resi 100-200"),
            Predicate::Resi(IntSpec::Range(100, 200))
        ));
        assert!(matches!(
            *parse("resi <= 10"),
            Predicate::Resi(IntSpec::Cmp(CompareOp::Le, 10))
        ));
        assert!(matches!(
            *parse("resi >5"),
            Predicate::Resi(IntSpec::Cmp(CompareOp::Gt, 5))
        ));
        assert!(matches!(*parse("index 3"), Predicate::Index(IntSpec::Single(3))));
    }

    #[test]
    fn test_chain() {
        assert!(matches!(*parse("chain A"), Predicate::Chain('A')));
        assert!(matches!(*parse("chain 1"), Predicate::Chain('1')));
        assert!(parse_selection("chain AB").is_err());
    }

    #[test]
    fn test_elem_resolved_at_parse_time() {
        assert!(matches!(*parse("elem Fe"), Predicate::Elem(26)));
        assert!(matches!(*parse("elem FE"), Predicate::Elem(26)));
        assert!(matches!(*parse("elem C"), Predicate::Elem(6)));
        assert!(parse_selection("elem Xq").is_err());
    }

    #[test]
    fn test_component_aliases() {
        assert!(matches!(*parse("bb"), Predicate::Backbone));
        assert!(matches!(*parse("sc"), Predicate::Sidechain));
        assert!(matches!(*parse("metals"), Predicate::Metal));
        assert!(matches!(*parse("h"), Predicate::Hydrogen));
        assert!(matches!(*parse("polarh"), Predicate::PolarHydrogen));
        assert!(matches!(*parse("apolarh"), Predicate::NonpolarHydrogen));
    }

    #[test]
    fn test_precedence_and_over_or() {
        // and binds tighter than or
        match &*parse("name X* or name Y* and name *1") {
            Predicate::Or(children) => {
                assert_eq!(children.len(), 2);
                assert!(matches!(*children[0], Predicate::Name(_)));
                assert!(matches!(*children[1], Predicate::And(_)));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_precedence_not_tightest_xor_loosest() {
        match &*parse("not water and protein xor ligand") {
            Predicate::Xor(children) => {
                assert_eq!(children.len(), 2);
                match &*children[0] {
                    Predicate::And(and_children) => {
                        assert!(matches!(*and_children[0], Predicate::Not(_)));
                        assert!(matches!(*and_children[1], Predicate::Protein));
                    }
                    other => panic!("unexpected: {:?}", other),
                }
                assert!(matches!(*children[1], Predicate::Ligand));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_nary_flattening() {
        match &*parse("protein and water and ligand") {
            Predicate::And(children) => assert_eq!(children.len(), 3),
            other => panic!("unexpected: {:?}", other),
        }
        // parenthesized groups stay nested
        match &*parse("(protein and water) and ligand") {
            Predicate::And(children) => {
                assert_eq!(children.len(), 2);
                assert!(matches!(*children[0], Predicate::And(_)));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_symbol_operators() {
        assert_eq!(
            canonical("!water & protein | ligand"),
            canonical("not water and protein or ligand")
        );
        assert_eq!(canonical("water ^ ligand"), canonical("water xor ligand"));
    }

    #[test]
    fn test_parens_override() {
        match &*parse("protein and (water or ligand)") {
            Predicate::And(children) => {
                assert!(matches!(*children[1], Predicate::Or(_)));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_double_not() {
        match &*parse("not not water") {
            Predicate::Not(inner) => assert!(matches!(**inner, Predicate::Not(_))),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_distance_operators() {
        match &*parse("around 5 protein") {
            Predicate::Around { radius, reference } => {
                assert_eq!(*radius, 5.0);
                assert!(matches!(**reference, Predicate::Protein));
            }
            other => panic!("unexpected: {:?}", other),
        }
        match &*parse("xaround 3.5 name CA") {
            Predicate::XAround { radius, .. } => assert_eq!(*radius, 3.5),
            other => panic!("unexpected: {:?}", other),
        }
        match &*parse("beyond 2.5 water") {
            Predicate::Beyond { radius, .. } => assert_eq!(*radius, 2.5),
            other => panic!("unexpected: {:?}", other),
        }
        // the nested primary may be a parenthesized full expression
        match &*parse("around 4 (protein and chain A)") {
            Predicate::Around { reference, .. } => {
                assert!(matches!(**reference, Predicate::And(_)));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_xaround_never_parses_as_around() {
        let p = parse("xaround 3 name REF");
        assert_eq!(p.kind(), PredicateKind::XAround);
        assert!(!matches!(*p, Predicate::Around { .. }));
    }

    #[test]
    fn test_expansion_operators() {
        match &*parse("byres name CA") {
            Predicate::ByRes(child) => assert!(matches!(**child, Predicate::Name(_))),
            other => panic!("unexpected: {:?}", other),
        }
        match &*parse("bychain (protein or water)") {
            Predicate::ByChain(child) => assert!(matches!(**child, Predicate::Or(_))),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_distance_binds_before_binop() {
        // around consumes only the following primary
        match &*parse("around 5 name CA and protein") {
            Predicate::And(children) => {
                assert!(matches!(*children[0], Predicate::Around { .. }));
                assert!(matches!(*children[1], Predicate::Protein));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_macro_full() {
        assert_eq!(
            canonical("//A/100/CA"),
            "(chain A and name CA and resi 100)"
        );
    }

    #[test]
    fn test_macro_empty_slots() {
        assert_eq!(canonical("////CA"), "name CA");
        assert_eq!(canonical("//A//"), "chain A");
        assert_eq!(canonical("///100/"), "resi 100");
        assert!(matches!(*parse("//"), Predicate::True));
    }

    #[test]
    fn test_macro_trailing_slots_omitted() {
        assert_eq!(canonical("//A"), "chain A");
        assert_eq!(canonical("//A/100"), "(chain A and resi 100)");
    }

    #[test]
    fn test_macro_in_expression() {
        assert_eq!(
            canonical("//A//CA and protein"),
            "((chain A and name CA) and protein)"
        );
    }

    #[test]
    fn test_error_unknown_keyword() {
        let err = parse_selection("foobar").unwrap_err();
        assert!(err.message().contains("foobar"));
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn test_error_unmatched_paren() {
        let err = parse_selection("(protein").unwrap_err();
        assert!(err.message().contains("parenthesis"));
    }

    #[test]
    fn test_error_trailing_input() {
        let err = parse_selection("protein water").unwrap_err();
        assert_eq!(err.offset(), Some(8));
    }

    #[test]
    fn test_error_missing_arguments() {
        assert!(parse_selection("name").is_err());
        assert!(parse_selection("resi").is_err());
        assert!(parse_selection("resi abc").is_err());
        assert!(parse_selection("around protein").is_err());
        assert!(parse_selection("around 5").is_err());
        assert!(parse_selection("byres").is_err());
        assert!(parse_selection("elem").is_err());
    }

    #[test]
    fn test_error_operator_positions() {
        assert!(parse_selection("and protein").is_err());
        assert!(parse_selection("protein and").is_err());
        assert!(parse_selection("or").is_err());
    }
}
