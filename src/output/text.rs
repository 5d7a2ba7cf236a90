//! Indented outline formatter
//!
//! One line per entry in tree order, each prefixed by the indent unit
//! repeated once per nesting level. The root entry sits at depth 0.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{FolderTree, TreeNode};

use super::config::IndentStyle;

/// Formatter for the text outline.
pub struct TextFormatter {
    indent: IndentStyle,
}

impl TextFormatter {
    pub fn new(indent: IndentStyle) -> Self {
        Self { indent }
    }

    /// Render the outline. Lines are joined by `\n` with no trailing newline.
    pub fn format(&self, tree: &FolderTree) -> String {
        let mut output = String::from(tree.key());
        self.format_children(tree.children(), 1, &mut output);
        output
    }

    fn format_children(&self, children: &[(String, TreeNode)], depth: usize, output: &mut String) {
        let prefix = self.indent.unit().repeat(depth);
        for (key, node) in children {
            output.push('\n');
            output.push_str(&prefix);
            output.push_str(key);
            if let TreeNode::Directory(grandchildren) = node {
                self.format_children(grandchildren, depth + 1, output);
            }
        }
    }

    /// Print the outline to stdout, directories in bold blue when colored.
    /// Whether to color is decided by the caller.
    pub fn print(&self, tree: &FolderTree, use_color: bool) -> io::Result<()> {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(tree, &mut stdout)
    }

    /// Write the outline line by line, ending with a newline.
    pub fn write_colored<W: WriteColor>(&self, tree: &FolderTree, out: &mut W) -> io::Result<()> {
        write_dir_line(out, "", tree.key())?;
        self.write_children(tree.children(), 1, out)
    }

    fn write_children<W: WriteColor>(
        &self,
        children: &[(String, TreeNode)],
        depth: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let prefix = self.indent.unit().repeat(depth);
        for (key, node) in children {
            match node {
                TreeNode::Directory(grandchildren) => {
                    write_dir_line(out, &prefix, key)?;
                    self.write_children(grandchildren, depth + 1, out)?;
                }
                TreeNode::File => writeln!(out, "{}{}", prefix, key)?,
            }
        }
        Ok(())
    }
}

fn write_dir_line<W: WriteColor>(out: &mut W, prefix: &str, key: &str) -> io::Result<()> {
    write!(out, "{}", prefix)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    write!(out, "{}", key)?;
    out.reset()?;
    writeln!(out)
}
