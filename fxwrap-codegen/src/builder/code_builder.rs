//! Indentation-aware line writer shared by every backend.

use fxwrap_core::Indent;

/// Writes source lines at a tracked nesting depth.
///
/// Blank lines carry no indentation, so output never has trailing
/// whitespace.
///
/// ```
/// use fxwrap_codegen::Indent;
/// use fxwrap_codegen::builder::CodeBuilder;
///
/// let mut b = CodeBuilder::new(Indent::Spaces(4));
/// b.push_line("public Foo()");
/// b.push_block("{", "}", |b| {
///     b.push_line("this.Bar();");
/// });
/// assert_eq!(b.build(), "public Foo()\n{\n    this.Bar();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    unit: String,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            unit: indent.unit(),
            out: String::new(),
        }
    }

    /// Write `line` at the current depth.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        self.pad();
        self.out.push_str(line);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Write a comment line: `marker` immediately followed by `text`.
    pub fn push_comment(&mut self, marker: &str, text: &str) -> &mut Self {
        self.pad();
        self.out.push_str(marker);
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write `open`, the body one level deeper, then `close`.
    ///
    /// Serves both brace languages (`{` / `}`) and keyword-terminated ones
    /// (`Get` / `End Get`).
    pub fn push_block<F>(&mut self, open: &str, close: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(open).push_indent();
        body(self);
        self.push_dedent().push_line(close)
    }

    pub fn build(self) -> String {
        self.out
    }

    fn pad(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(&self.unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
