//! Statement descriptor definitions
//!
//! This module defines the vocabulary of statement descriptors the emission
//! engine understands. Each descriptor is a tagged record: the enum
//! discriminant selects the rendering rule, the fields carry the text to
//! render.
//!
//! Block-carrying descriptors (`Function`, `Class`, `WhileLoop`,
//! `Conditional`) hold their bodies as *pre-formatted text lines*, not as
//! nested descriptors. The engine applies exactly one indent level on top of
//! each body line; deeper structure must already be indented by the
//! producer. `body: Vec<String>` makes that contract visible in the type.

/// Identifier (plain string; content is never validated)
pub type Ident = String;

/// One statement to emit.
///
/// Text fields are emitted verbatim. Malformed text produces malformed
/// output, not an engine error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A literal line of text, emitted as-is at the current depth.
    Variable { value: String },
    /// `def NAME(ARGS):` followed by an indented body block.
    Function {
        name: Ident,
        args: Vec<Ident>,
        body: Vec<String>,
    },
    /// `class NAME(BASES):` followed by an indented body block.
    ///
    /// An empty base list still renders parentheses: `class Foo():`.
    Class {
        name: Ident,
        bases: Vec<Ident>,
        body: Vec<String>,
    },
    /// `import MOD1, MOD2, ...`
    Import { modules: Vec<Ident> },
    /// `from MODULE import NAME1, NAME2, ...`
    ImportFrom { module: Ident, names: Vec<Ident> },
    /// `NAME(ARG1, ARG2, ...)` as an expression statement.
    FunctionCall { name: Ident, args: Vec<String> },
    /// `LEFT OPERATOR RIGHT` as an expression statement.
    Comparison {
        left: String,
        operator: String,
        right: String,
    },
    /// `while CONDITION:` followed by an indented body block.
    WhileLoop {
        condition: String,
        body: Vec<String>,
    },
    /// `if CONDITION:` with optional `elif` and `else` branches, each an
    /// independently indented block, always in if -> elif -> else order.
    Conditional {
        condition: String,
        body: Vec<String>,
        elif_condition: Option<String>,
        elif_body: Option<Vec<String>>,
        else_body: Option<Vec<String>>,
    },
}

// Kind names double as the `"class"` tags of the JSON input format.
pub const KIND_VARIABLE: &str = "Variable";
pub const KIND_FUNCTION: &str = "Function";
pub const KIND_CLASS: &str = "Class";
pub const KIND_IMPORT: &str = "Import";
pub const KIND_IMPORT_FROM: &str = "ImportFrom";
pub const KIND_FUNCTION_CALL: &str = "FunctionCall";
pub const KIND_COMPARISON: &str = "Comparison";
pub const KIND_WHILE_LOOP: &str = "WhileLoop";
pub const KIND_CONDITIONAL: &str = "Conditional";

/// All recognized kind names, in declaration order.
pub const KINDS: [&str; 9] = [
    KIND_VARIABLE,
    KIND_FUNCTION,
    KIND_CLASS,
    KIND_IMPORT,
    KIND_IMPORT_FROM,
    KIND_FUNCTION_CALL,
    KIND_COMPARISON,
    KIND_WHILE_LOOP,
    KIND_CONDITIONAL,
];

impl Statement {
    /// The discriminant name for this descriptor.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Variable { .. } => KIND_VARIABLE,
            Statement::Function { .. } => KIND_FUNCTION,
            Statement::Class { .. } => KIND_CLASS,
            Statement::Import { .. } => KIND_IMPORT,
            Statement::ImportFrom { .. } => KIND_IMPORT_FROM,
            Statement::FunctionCall { .. } => KIND_FUNCTION_CALL,
            Statement::Comparison { .. } => KIND_COMPARISON,
            Statement::WhileLoop { .. } => KIND_WHILE_LOOP,
            Statement::Conditional { .. } => KIND_CONDITIONAL,
        }
    }

    /// Whether `kind` is one of the recognized kind names.
    pub fn is_recognized_kind(kind: &str) -> bool {
        KINDS.contains(&kind)
    }
}
