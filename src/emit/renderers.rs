//! Built-in statement renderers
//!
//! One renderer per statement kind. Block-carrying kinds emit their header
//! through [`PyEmitter::suite`], which indents the body one level and
//! restores the depth afterwards. Body lines are opaque text: they are
//! appended as-is beneath that one level, never re-dispatched.

use crate::emit::{PyEmitter, Render};
use crate::node::{
    KIND_CLASS, KIND_COMPARISON, KIND_CONDITIONAL, KIND_FUNCTION, KIND_FUNCTION_CALL, KIND_IMPORT,
    KIND_IMPORT_FROM, KIND_VARIABLE, KIND_WHILE_LOOP, Statement,
};

/// All built-in renderers, one per recognized kind.
pub fn builtin() -> Vec<Box<dyn Render>> {
    vec![
        Box::new(VariableRenderer),
        Box::new(FunctionRenderer),
        Box::new(ClassRenderer),
        Box::new(ImportRenderer),
        Box::new(ImportFromRenderer),
        Box::new(FunctionCallRenderer),
        Box::new(ComparisonRenderer),
        Box::new(WhileLoopRenderer),
        Box::new(ConditionalRenderer),
    ]
}

fn body_lines(out: &mut PyEmitter, lines: &[String]) {
    for line in lines {
        out.line(line);
    }
}

pub struct VariableRenderer;

impl Render for VariableRenderer {
    fn kind(&self) -> &'static str {
        KIND_VARIABLE
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::Variable { value } = stmt else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        out.line(value);
    }
}

pub struct FunctionRenderer;

impl Render for FunctionRenderer {
    fn kind(&self) -> &'static str {
        KIND_FUNCTION
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::Function { name, args, body } = stmt else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        let header = format!("def {}({}):", name, args.join(", "));
        out.suite(&header, |out| body_lines(out, body));
    }
}

pub struct ClassRenderer;

impl Render for ClassRenderer {
    fn kind(&self) -> &'static str {
        KIND_CLASS
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::Class { name, bases, body } = stmt else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        let header = format!("class {}({}):", name, bases.join(", "));
        out.suite(&header, |out| body_lines(out, body));
    }
}

pub struct ImportRenderer;

impl Render for ImportRenderer {
    fn kind(&self) -> &'static str {
        KIND_IMPORT
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::Import { modules } = stmt else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        out.line(&format!("import {}", modules.join(", ")));
    }
}

pub struct ImportFromRenderer;

impl Render for ImportFromRenderer {
    fn kind(&self) -> &'static str {
        KIND_IMPORT_FROM
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::ImportFrom { module, names } = stmt else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        out.line(&format!("from {} import {}", module, names.join(", ")));
    }
}

pub struct FunctionCallRenderer;

impl Render for FunctionCallRenderer {
    fn kind(&self) -> &'static str {
        KIND_FUNCTION_CALL
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::FunctionCall { name, args } = stmt else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        out.line(&format!("{}({})", name, args.join(", ")));
    }
}

pub struct ComparisonRenderer;

impl Render for ComparisonRenderer {
    fn kind(&self) -> &'static str {
        KIND_COMPARISON
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::Comparison {
            left,
            operator,
            right,
        } = stmt
        else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        out.line(&format!("{} {} {}", left, operator, right));
    }
}

pub struct WhileLoopRenderer;

impl Render for WhileLoopRenderer {
    fn kind(&self) -> &'static str {
        KIND_WHILE_LOOP
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::WhileLoop { condition, body } = stmt else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        out.suite(&format!("while {}:", condition), |out| {
            body_lines(out, body);
        });
    }
}

pub struct ConditionalRenderer;

impl Render for ConditionalRenderer {
    fn kind(&self) -> &'static str {
        KIND_CONDITIONAL
    }

    fn render(&self, stmt: &Statement, out: &mut PyEmitter) {
        let Statement::Conditional {
            condition,
            body,
            elif_condition,
            elif_body,
            else_body,
        } = stmt
        else {
            unreachable!("INVARIANT: registry dispatches by kind");
        };
        out.suite(&format!("if {}:", condition), |out| {
            body_lines(out, body);
        });
        if let Some(elif_condition) = elif_condition {
            out.suite(&format!("elif {}:", elif_condition), |out| {
                if let Some(elif_body) = elif_body {
                    body_lines(out, elif_body);
                }
            });
        }
        if let Some(else_body) = else_body {
            out.suite("else:", |out| body_lines(out, else_body));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_one(renderer: &dyn Render, stmt: &Statement) -> String {
        let mut out = PyEmitter::new();
        renderer.render(stmt, &mut out);
        out.finish()
    }

    #[test]
    fn function_header_and_indented_body() {
        let stmt = Statement::Function {
            name: "test".to_string(),
            args: vec!["a".to_string(), "b".to_string()],
            body: vec!["print(a)".to_string()],
        };
        assert_eq!(
            render_one(&FunctionRenderer, &stmt),
            "def test(a, b):\n    print(a)"
        );
    }

    #[test]
    fn class_with_no_bases_keeps_empty_parens() {
        let stmt = Statement::Class {
            name: "Empty".to_string(),
            bases: vec![],
            body: vec!["pass".to_string()],
        };
        assert_eq!(render_one(&ClassRenderer, &stmt), "class Empty():\n    pass");
    }

    #[test]
    fn conditional_emits_branches_in_fixed_order() {
        let stmt = Statement::Conditional {
            condition: "a < 5".to_string(),
            body: vec!["x".to_string()],
            elif_condition: Some("a == 5".to_string()),
            elif_body: Some(vec!["y".to_string()]),
            else_body: Some(vec!["z".to_string()]),
        };
        assert_eq!(
            render_one(&ConditionalRenderer, &stmt),
            "if a < 5:\n    x\nelif a == 5:\n    y\nelse:\n    z"
        );
    }

    #[test]
    fn conditional_without_optional_branches() {
        let stmt = Statement::Conditional {
            condition: "ready".to_string(),
            body: vec!["go()".to_string()],
            elif_condition: None,
            elif_body: None,
            else_body: None,
        };
        assert_eq!(render_one(&ConditionalRenderer, &stmt), "if ready:\n    go()");
    }

    #[test]
    fn body_text_is_opaque_and_gets_exactly_one_level() {
        // Pre-indented producer text passes through beneath one added level.
        let stmt = Statement::WhileLoop {
            condition: "True".to_string(),
            body: vec!["if x:".to_string(), "    break".to_string()],
        };
        assert_eq!(
            render_one(&WhileLoopRenderer, &stmt),
            "while True:\n    if x:\n        break"
        );
    }
}
