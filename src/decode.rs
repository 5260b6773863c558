//! JSON descriptor decoding
//!
//! The engine consumes typed [`Statement`] values; this module is the
//! boundary where loose, `"class"`-tagged JSON becomes typed data. Every
//! shape requirement is checked here, before any rendering is attempted,
//! and failures name the descriptor index, its kind, and the offending
//! field so the caller can correct the input and retry.
//!
//! The input format is an array of objects:
//!
//! ```json
//! [
//!     {"class": "Import", "modules": ["math", "os"]},
//!     {"class": "WhileLoop", "condition": "a < 10", "body": ["a += 1"]}
//! ]
//! ```
//!
//! Decoding walks [`serde_json::Value`] by hand rather than deriving
//! `Deserialize`: serde's generic messages cannot carry the per-descriptor
//! position and field context the error contract requires.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::node::{
    KIND_CLASS, KIND_COMPARISON, KIND_CONDITIONAL, KIND_FUNCTION, KIND_FUNCTION_CALL, KIND_IMPORT,
    KIND_IMPORT_FROM, KIND_VARIABLE, KIND_WHILE_LOOP, Statement,
};

/// Errors raised while decoding descriptor JSON.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input must be an array of statement descriptors")]
    NotAnArray,

    #[error("statement {index}: descriptor must be an object")]
    NotAnObject { index: usize },

    #[error("statement {index}: descriptor is missing its 'class' tag")]
    MissingKind { index: usize },

    #[error("statement {index}: unrecognized statement kind '{kind}'")]
    UnknownKind { index: usize, kind: String },

    #[error("statement {index} ({kind}): field '{field}' {expected}")]
    MalformedField {
        index: usize,
        kind: &'static str,
        field: &'static str,
        expected: &'static str,
    },
}

/// Decode a JSON document into a statement sequence.
///
/// ## Errors
///
/// Fails on non-JSON input, a non-array top level, or any descriptor that
/// is missing its `"class"` tag, names an unrecognized kind, or is missing
/// a required field (or carries one with the wrong shape). No partial
/// result is returned.
pub fn decode_statements(json: &str) -> Result<Vec<Statement>, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    let items = value.as_array().ok_or(DecodeError::NotAnArray)?;

    let mut statements = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or(DecodeError::NotAnObject { index })?;
        statements.push(decode_statement(index, obj)?);
    }
    Ok(statements)
}

fn decode_statement(index: usize, obj: &Map<String, Value>) -> Result<Statement, DecodeError> {
    let kind = obj
        .get("class")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingKind { index })?;

    match kind {
        KIND_VARIABLE => Ok(Statement::Variable {
            value: req_str(obj, index, KIND_VARIABLE, "value")?,
        }),
        KIND_FUNCTION => Ok(Statement::Function {
            name: req_str(obj, index, KIND_FUNCTION, "name")?,
            args: req_str_seq(obj, index, KIND_FUNCTION, "args")?,
            body: req_str_seq(obj, index, KIND_FUNCTION, "body")?,
        }),
        KIND_CLASS => Ok(Statement::Class {
            name: req_str(obj, index, KIND_CLASS, "name")?,
            bases: req_str_seq(obj, index, KIND_CLASS, "bases")?,
            body: req_str_seq(obj, index, KIND_CLASS, "body")?,
        }),
        KIND_IMPORT => Ok(Statement::Import {
            modules: req_str_seq(obj, index, KIND_IMPORT, "modules")?,
        }),
        KIND_IMPORT_FROM => Ok(Statement::ImportFrom {
            module: req_str(obj, index, KIND_IMPORT_FROM, "module")?,
            names: req_str_seq(obj, index, KIND_IMPORT_FROM, "names")?,
        }),
        KIND_FUNCTION_CALL => Ok(Statement::FunctionCall {
            name: req_str(obj, index, KIND_FUNCTION_CALL, "name")?,
            args: req_str_seq(obj, index, KIND_FUNCTION_CALL, "args")?,
        }),
        KIND_COMPARISON => Ok(Statement::Comparison {
            left: req_str(obj, index, KIND_COMPARISON, "left")?,
            operator: req_str(obj, index, KIND_COMPARISON, "operator")?,
            right: req_str(obj, index, KIND_COMPARISON, "right")?,
        }),
        KIND_WHILE_LOOP => Ok(Statement::WhileLoop {
            condition: req_str(obj, index, KIND_WHILE_LOOP, "condition")?,
            body: req_str_seq(obj, index, KIND_WHILE_LOOP, "body")?,
        }),
        KIND_CONDITIONAL => Ok(Statement::Conditional {
            condition: req_str(obj, index, KIND_CONDITIONAL, "condition")?,
            body: req_str_seq(obj, index, KIND_CONDITIONAL, "body")?,
            elif_condition: opt_str(obj, index, KIND_CONDITIONAL, "elif_condition")?,
            elif_body: opt_str_seq(obj, index, KIND_CONDITIONAL, "elif_body")?,
            else_body: opt_str_seq(obj, index, KIND_CONDITIONAL, "else_body")?,
        }),
        _ => Err(DecodeError::UnknownKind {
            index,
            kind: kind.to_string(),
        }),
    }
}

fn req_str(
    obj: &Map<String, Value>,
    index: usize,
    kind: &'static str,
    field: &'static str,
) -> Result<String, DecodeError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DecodeError::MalformedField {
            index,
            kind,
            field,
            expected: "must be a string",
        }),
        None => Err(DecodeError::MalformedField {
            index,
            kind,
            field,
            expected: "is required",
        }),
    }
}

fn req_str_seq(
    obj: &Map<String, Value>,
    index: usize,
    kind: &'static str,
    field: &'static str,
) -> Result<Vec<String>, DecodeError> {
    match obj.get(field) {
        Some(value) => str_seq(value, index, kind, field),
        None => Err(DecodeError::MalformedField {
            index,
            kind,
            field,
            expected: "is required",
        }),
    }
}

fn opt_str(
    obj: &Map<String, Value>,
    index: usize,
    kind: &'static str,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::MalformedField {
            index,
            kind,
            field,
            expected: "must be a string",
        }),
    }
}

fn opt_str_seq(
    obj: &Map<String, Value>,
    index: usize,
    kind: &'static str,
    field: &'static str,
) -> Result<Option<Vec<String>>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => str_seq(value, index, kind, field).map(Some),
    }
}

fn str_seq(
    value: &Value,
    index: usize,
    kind: &'static str,
    field: &'static str,
) -> Result<Vec<String>, DecodeError> {
    let items = value.as_array().ok_or(DecodeError::MalformedField {
        index,
        kind,
        field,
        expected: "must be a sequence of strings",
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(DecodeError::MalformedField {
                    index,
                    kind,
                    field,
                    expected: "must be a sequence of strings",
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_minimal_descriptor() {
        let stmts =
            decode_statements(r#"[{"class": "Import", "modules": ["math", "os"]}]"#).unwrap();
        assert_eq!(
            stmts,
            vec![Statement::Import {
                modules: vec!["math".to_string(), "os".to_string()],
            }]
        );
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = decode_statements(r#"[{"class": "Function", "name": "f", "args": []}]"#)
            .unwrap_err();
        match err {
            DecodeError::MalformedField { index, kind, field, .. } => {
                assert_eq!(index, 0);
                assert_eq!(kind, "Function");
                assert_eq!(field, "body");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
