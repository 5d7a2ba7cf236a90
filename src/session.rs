//! Holds the current tree between renders
//!
//! A `Session` keeps the last successfully built tree. Display options can
//! change freely and re-render from that tree; the tree is only replaced
//! by a successful `load` of a new root.

use std::path::Path;

use tracing::warn;

use crate::error::{RenderError, ScanResult};
use crate::output::{self, IndentStyle, OutputConfig, OutputFormat};
use crate::tree::{FolderTree, Scan, TreeWalker};

#[derive(Debug, Default)]
pub struct Session {
    walker: TreeWalker,
    config: OutputConfig,
    current: Option<Scan>,
    last_failure: Option<String>,
}

impl Session {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Build a tree for `root` and make it current.
    ///
    /// On failure the previously loaded tree is kept as it was and the
    /// error is returned.
    pub fn load(&mut self, root: impl AsRef<Path>) -> ScanResult<&Scan> {
        match self.walker.walk(root.as_ref()) {
            Ok(scan) => {
                self.last_failure = None;
                Ok(&*self.current.insert(scan))
            }
            Err(err) => {
                warn!("{}", err);
                self.last_failure = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn scan(&self) -> Option<&Scan> {
        self.current.as_ref()
    }

    pub fn tree(&self) -> Option<&FolderTree> {
        self.current.as_ref().map(|scan| &scan.tree)
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    pub fn set_indent(&mut self, indent: IndentStyle) {
        self.config.indent = indent;
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.config.format = format;
    }

    /// Render the current tree with the current options. `None` until a
    /// tree has been loaded.
    pub fn render(&self) -> Result<Option<String>, RenderError> {
        self.render_as(self.config.format)
    }

    pub fn render_as(&self, format: OutputFormat) -> Result<Option<String>, RenderError> {
        let Some(tree) = self.tree() else {
            return Ok(None);
        };
        let config = OutputConfig {
            format,
            ..self.config.clone()
        };
        output::render(tree, &config).map(Some)
    }

    /// The single most recent status message: a failed load, otherwise the
    /// last warning of the current tree, otherwise its completion.
    pub fn status(&self) -> Option<String> {
        if let Some(failure) = &self.last_failure {
            return Some(format!("error: {}", failure));
        }
        let scan = self.current.as_ref()?;
        Some(match scan.last_warning() {
            Some(warning) => format!("warning: {}", warning),
            None => format!("done: {}", scan.root_path.display()),
        })
    }
}
