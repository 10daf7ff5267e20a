//! Line masks marking which lines sit inside code regions.

/// Per-line flags: `true` when the line lies inside a code region and must
/// be left alone by the rewrite passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockMask {
    in_code: Vec<bool>,
}

impl CodeBlockMask {
    /// Mask for markdown source.
    ///
    /// Every line whose trimmed content starts with three backticks flips
    /// the state, starting outside. The opening fence itself counts as
    /// inside, the closing fence as outside. An unterminated fence leaves
    /// the rest of the document masked.
    pub fn for_markdown<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut inside = false;
        let in_code = lines
            .iter()
            .map(|line| {
                if line.as_ref().trim_start().starts_with("```") {
                    inside = !inside;
                }
                inside
            })
            .collect();
        Self { in_code }
    }

    /// Mask for rendered HTML, keyed on literal `<pre>` / `</pre>` markers.
    ///
    /// Marker lines are always masked. `<pre>` is checked first, so a line
    /// holding both markers opens a region that only a later `</pre>` line
    /// closes.
    pub fn for_html<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut inside = false;
        let in_code = lines
            .iter()
            .map(|line| {
                let line = line.as_ref();
                if line.contains("<pre>") {
                    inside = true;
                    true
                } else if line.contains("</pre>") {
                    inside = false;
                    true
                } else {
                    inside
                }
            })
            .collect();
        Self { in_code }
    }

    pub fn is_code(&self, index: usize) -> bool {
        self.in_code.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.in_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_code.is_empty()
    }
}
