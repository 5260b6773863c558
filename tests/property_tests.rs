//! Property-based tests for the emission engine
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use pygen::{CodeGenerator, INDENT, Statement};

/// Python-ish identifier
fn ident() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

/// One opaque body line: printable, no newlines, non-empty
fn body_line() -> impl Strategy<Value = String> {
    "[ -~]{1,30}"
}

/// A statement that opens a block
fn block_statement() -> impl Strategy<Value = Statement> {
    prop_oneof![
        (ident(), prop::collection::vec(ident(), 0..4), prop::collection::vec(body_line(), 0..5))
            .prop_map(|(name, args, body)| Statement::Function { name, args, body }),
        (ident(), prop::collection::vec(ident(), 0..3), prop::collection::vec(body_line(), 0..5))
            .prop_map(|(name, bases, body)| Statement::Class { name, bases, body }),
        (body_line(), prop::collection::vec(body_line(), 0..5))
            .prop_map(|(condition, body)| Statement::WhileLoop { condition, body }),
    ]
}

/// Any statement, block or single-line
fn statement() -> impl Strategy<Value = Statement> {
    prop_oneof![
        block_statement(),
        body_line().prop_map(|value| Statement::Variable { value }),
        prop::collection::vec(ident(), 1..4).prop_map(|modules| Statement::Import { modules }),
        (ident(), prop::collection::vec(ident(), 1..4))
            .prop_map(|(module, names)| Statement::ImportFrom { module, names }),
        (body_line(), "[<>=!]=?", body_line()).prop_map(|(left, operator, right)| {
            Statement::Comparison {
                left,
                operator,
                right,
            }
        }),
    ]
}

proptest! {
    /// Property: generation is deterministic for any valid input.
    #[test]
    fn generation_is_deterministic(stmts in prop::collection::vec(statement(), 0..8)) {
        let generator = CodeGenerator::new();
        let first = generator.generate(&stmts).unwrap();
        let second = generator.generate(&stmts).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: depth returns to 0 between top-level statements, so a
    /// sequence renders exactly as the concatenation of its solo renderings.
    #[test]
    fn sequence_equals_concatenation_of_solo_renderings(
        stmts in prop::collection::vec(statement(), 1..6)
    ) {
        let generator = CodeGenerator::new();
        let combined = generator.generate(&stmts).unwrap();
        let solo: Vec<String> = stmts
            .iter()
            .map(|s| generator.generate(std::slice::from_ref(s)).unwrap())
            .collect();
        prop_assert_eq!(combined, solo.join("\n"));
    }

    /// Property: every body line sits exactly one indent unit under its header.
    #[test]
    fn body_lines_get_exactly_one_indent_unit(stmt in block_statement()) {
        let body = match &stmt {
            Statement::Function { body, .. }
            | Statement::Class { body, .. }
            | Statement::WhileLoop { body, .. } => body.clone(),
            _ => unreachable!("block_statement only yields block kinds"),
        };
        let code = CodeGenerator::new().generate(std::slice::from_ref(&stmt)).unwrap();
        let lines: Vec<&str> = code.lines().collect();
        prop_assert_eq!(lines.len(), 1 + body.len());
        for (rendered, original) in lines[1..].iter().zip(body.iter()) {
            prop_assert_eq!(*rendered, format!("{INDENT}{original}"));
        }
    }

    /// Property: variable text passes through verbatim.
    #[test]
    fn variable_text_is_verbatim(value in body_line()) {
        let code = CodeGenerator::new()
            .generate(&[Statement::Variable { value: value.clone() }])
            .unwrap();
        prop_assert_eq!(code, value);
    }

    /// Property: headers never carry indentation at the top level.
    #[test]
    fn top_level_headers_start_at_column_zero(stmts in prop::collection::vec(block_statement(), 1..5)) {
        let code = CodeGenerator::new().generate(&stmts).unwrap();
        for line in code.lines() {
            let is_header = line.starts_with("def ")
                || line.starts_with("class ")
                || line.starts_with("while ");
            let is_body = line.starts_with(INDENT);
            prop_assert!(is_header || is_body, "unexpected line shape: {:?}", line);
        }
    }
}
