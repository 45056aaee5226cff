use crate::constants::defaults::INDENT;
use crate::constants::syntax::EPILOG;

/// Options controlling the layout of rendered DOT text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: INDENT }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Accumulates DOT statements one per line, indenting nested scopes
pub(crate) struct SourceWriter {
    out: String,
    depth: usize,
    unit: String,
}

impl SourceWriter {
    pub(crate) fn new(options: &RenderOptions) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            unit: " ".repeat(options.indent),
        }
    }

    pub(crate) fn line(&mut self, statement: &str) {
        if statement.is_empty() {
            return;
        }
        for _ in 0..self.depth {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(statement);
        self.out.push('\n');
    }

    pub(crate) fn open(&mut self, prolog: &str) {
        self.line(prolog);
        self.depth += 1;
    }

    pub(crate) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line(EPILOG);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
