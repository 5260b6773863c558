#![forbid(unsafe_code)]
//! pygen - statement-descriptor to Python source emission engine
//!
//! Given an ordered sequence of tagged statement descriptors (variables,
//! functions, classes, imports, calls, comparisons, loops, conditionals),
//! pygen renders formatted Python-style source text. Dispatch is an open
//! per-kind registry, and indentation is an explicit depth counter applied
//! as each line is appended, so nested and sibling blocks compose.
//!
//! ```
//! use pygen::{CodeGenerator, Statement};
//!
//! let generator = CodeGenerator::new();
//! let code = generator
//!     .generate(&[Statement::Import {
//!         modules: vec!["math".to_string(), "os".to_string()],
//!     }])
//!     .unwrap();
//! assert_eq!(code, "import math, os");
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents an engine bug (logic error), use `unreachable!("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod decode;
pub mod emit;
pub mod node;

pub use decode::{DecodeError, decode_statements};
pub use emit::{CodeGenerator, EmitError, INDENT, PyEmitter, Render};
pub use node::{KINDS, Statement};
