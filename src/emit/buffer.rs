//! Python source buffer with indentation management
//!
//! All output flows through [`PyEmitter::line`], which prefixes the current
//! indent depth at the moment the line is appended. Depth is an explicit
//! counter, never a placeholder entry in the buffer, so sibling and nested
//! blocks compose without touching each other's state.

/// One indentation unit: four spaces.
pub const INDENT: &str = "    ";

/// A buffer for building Python source with proper indentation.
#[derive(Debug, Default)]
pub struct PyEmitter {
    lines: Vec<String>,
    indent_level: usize,
}

impl PyEmitter {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            indent_level: 0,
        }
    }

    /// Append a line at the current indentation depth.
    ///
    /// Empty lines are appended bare, an indent prefix would only leave
    /// trailing whitespace.
    pub fn line(&mut self, s: &str) {
        if s.is_empty() {
            self.lines.push(String::new());
            return;
        }
        let mut out = String::with_capacity(self.indent_level * INDENT.len() + s.len());
        for _ in 0..self.indent_level {
            out.push_str(INDENT);
        }
        out.push_str(s);
        self.lines.push(out);
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.indent_level
    }

    /// Number of lines appended so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Emit a block suite: the header at the current depth, then the body
    /// one level deeper, then restore the depth.
    ///
    /// Renderers enter blocks only through this method, which is what keeps
    /// depth balanced across nested and sibling blocks, including blocks
    /// with empty bodies.
    pub fn suite<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(header);
        self.indent();
        f(self);
        self.dedent();
    }

    /// Newline-join the accumulated lines into the final text.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
