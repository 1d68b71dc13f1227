//! Output assembly.
//!
//! Linearizes blocks into indented text and wraps them in the fixed
//! describe / beforeEach / it boilerplate.

use cygen_config::GeneratorOptions;

use crate::block::{Block, Line};

pub const DESCRIBE_HEADER: &str = "describe('test_name', function() {\n";
pub const DESCRIBE_FOOTER: &str = "})";
pub const BEFORE_EACH_HEADER: &str = "  beforeEach(() => {\n";
pub const BEFORE_EACH_FOOTER: &str = "  })";
pub const IT_HEADER: &str = "  it('what_it_does', function() {\n";
pub const IT_FOOTER: &str = "  })\n";

/// Line terminator when blank lines are joined in.
const JOINED_LINE_END: &str = "\n \n";

/// Renders block lists into test source.
pub struct Renderer<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Render the full test file.
    pub fn render(&self, blocks: &[Block], setup_blocks: &[Block]) -> String {
        let mut out = String::new();

        if self.options.wrap_describe {
            out.push_str(DESCRIBE_HEADER);
            out.push_str(self.spacer());
        }

        out.push_str(&self.render_setup(setup_blocks));

        out.push_str(IT_HEADER);
        out.push('\n');
        out.push_str(&self.render_body(blocks));
        out.push_str(IT_FOOTER);
        out.push_str(self.spacer());

        if self.options.wrap_describe {
            out.push_str(DESCRIBE_FOOTER);
            out.push_str(self.spacer());
        }

        out
    }

    /// The `beforeEach` section, empty when there is nothing to set up.
    pub fn render_setup(&self, setup_blocks: &[Block]) -> String {
        if setup_blocks.is_empty() {
            return String::new();
        }

        let mut out = String::from(BEFORE_EACH_HEADER);
        for line in setup_blocks.iter().flat_map(Block::lines) {
            self.push_line(&mut out, line, "\n");
        }
        out.push_str(BEFORE_EACH_FOOTER);
        out.push_str("\n\n");
        out
    }

    /// The test body: every line in block order.
    pub fn render_body(&self, blocks: &[Block]) -> String {
        let line_end = if self.options.uses_joined_blank_lines() && !blocks.is_empty() {
            JOINED_LINE_END
        } else {
            "\n"
        };

        let mut out = String::new();
        for line in blocks.iter().flat_map(Block::lines) {
            self.push_line(&mut out, line, line_end);
        }
        out
    }

    fn push_line(&self, out: &mut String, line: &Line, line_end: &str) {
        // Separators render as bare empty lines.
        if !line.is_structural() {
            out.push_str(self.options.indent());
        }
        out.push_str(line.text());
        out.push_str(line_end);
    }

    fn spacer(&self) -> &'static str {
        if self.options.blank_lines_between_blocks { "\n" } else { "" }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
