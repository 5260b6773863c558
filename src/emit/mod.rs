//! Emission engine
//!
//! Turns an ordered sequence of [`Statement`] descriptors into Python
//! source text.
//!
//! ## Module Organization
//!
//! - `mod.rs` - [`CodeGenerator`] dispatch registry and the `generate`
//!   entry point
//! - `buffer.rs` - [`PyEmitter`] indentation-managed line buffer
//! - `renderers.rs` - the built-in per-kind renderers
//!
//! ## Dispatch
//!
//! Each statement kind maps to a [`Render`] implementation in a registry
//! built at construction. Dispatch is a single map lookup; adding a kind
//! means registering another renderer, not editing a conditional chain. A
//! descriptor whose kind has no registered renderer fails the whole call
//! with [`EmitError::UnsupportedKind`] and no partial output.

pub mod buffer;
pub mod renderers;

use std::collections::HashMap;

use thiserror::Error;

use crate::node::Statement;

pub use buffer::{INDENT, PyEmitter};

/// Errors raised while emitting a statement sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// A descriptor's kind has no registered renderer. Reported at the
    /// point of dispatch; earlier buffered output is discarded.
    #[error("statement {index}: unsupported statement kind '{kind}'")]
    UnsupportedKind { index: usize, kind: String },
}

/// The capability to render one statement into the current line buffer.
///
/// Implementations are registered with [`CodeGenerator::register`] under
/// the kind name they return from [`Render::kind`]; the engine guarantees
/// `render` is only called with statements of that kind.
pub trait Render: Send + Sync {
    /// The statement kind this renderer handles.
    fn kind(&self) -> &'static str;

    /// Append this statement's lines to the buffer at the current depth.
    fn render(&self, stmt: &Statement, out: &mut PyEmitter);
}

/// The emission engine: a registry of per-kind renderers and a single
/// `generate` entry point.
///
/// `generate` takes `&self` and owns all per-call state (buffer and indent
/// depth live in a fresh [`PyEmitter`]), so one engine can serve concurrent
/// callers without coordination.
pub struct CodeGenerator {
    renderers: HashMap<&'static str, Box<dyn Render>>,
}

impl CodeGenerator {
    /// An engine with all built-in renderers registered.
    pub fn new() -> Self {
        let mut generator = Self::empty();
        for renderer in renderers::builtin() {
            generator.register(renderer);
        }
        generator
    }

    /// An engine with no renderers. Useful for building a restricted or
    /// custom dialect via [`CodeGenerator::register`].
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer under its own kind name, replacing any previous
    /// renderer for that kind.
    pub fn register(&mut self, renderer: Box<dyn Render>) {
        self.renderers.insert(renderer.kind(), renderer);
    }

    /// Whether a renderer is registered for `kind`.
    pub fn supports(&self, kind: &str) -> bool {
        self.renderers.contains_key(kind)
    }

    /// The registered kind names, sorted.
    pub fn supported_kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<&'static str> = self.renderers.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Generate Python source from a statement sequence.
    ///
    /// Statements are dispatched in order; each renderer appends its lines
    /// at the current indentation depth. The result is the newline-joined
    /// buffer. An empty input yields an empty string.
    ///
    /// ## Errors
    ///
    /// Returns [`EmitError::UnsupportedKind`] if any statement's kind has
    /// no registered renderer. The call is all-or-nothing: on error no
    /// output is returned.
    #[tracing::instrument(skip_all, fields(stmt_count = statements.len()))]
    pub fn generate(&self, statements: &[Statement]) -> Result<String, EmitError> {
        let mut out = PyEmitter::new();
        for (index, stmt) in statements.iter().enumerate() {
            let kind = stmt.kind();
            let renderer = self
                .renderers
                .get(kind)
                .ok_or_else(|| EmitError::UnsupportedKind {
                    index,
                    kind: kind.to_string(),
                })?;
            tracing::debug!(index, kind, "dispatching statement");
            renderer.render(stmt, &mut out);
        }
        Ok(out.finish())
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
