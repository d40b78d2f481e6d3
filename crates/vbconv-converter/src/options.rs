use vbconv_csharp::CSharpPrinter;

/// Knobs for one conversion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Spaces per indentation level in printed output.
    pub indent_width: usize,
    /// Leave `/* TODO ERROR didn't convert: ... */` comments where a modifier
    /// had to be dropped.
    pub emit_todo_comments: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            indent_width: 4,
            emit_todo_comments: true,
        }
    }
}

impl ConvertOptions {
    pub fn printer(&self) -> CSharpPrinter {
        CSharpPrinter::with_indent_width(self.indent_width)
    }
}
