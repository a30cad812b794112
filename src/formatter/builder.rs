// Indentation-aware string builder used by the formatter

/// Accumulates output text, prefixing every non-empty line with the current
/// indentation.
#[derive(Debug)]
pub(crate) struct TextBuilder {
    out: String,
    indent_width: usize,
    level: usize,
    at_line_start: bool,
}

impl TextBuilder {
    pub(crate) fn new(indent_width: usize) -> Self {
        Self {
            out: String::new(),
            indent_width,
            level: 0,
            at_line_start: true,
        }
    }

    pub(crate) fn indent(&mut self) {
        self.level += 1;
    }

    pub(crate) fn unindent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            let width = self.level * self.indent_width;
            self.out.extend(std::iter::repeat(' ').take(width));
            self.at_line_start = false;
        }
        self.out.push_str(text);
    }

    pub(crate) fn newline(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    pub(crate) fn line(&mut self, text: &str) {
        self.push_str(text);
        self.newline();
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
