//! Configuration shared by every command

use std::path::PathBuf;

use crate::error::FerrisCyclesError;
use crate::graph::{CycleGraph, InputFormat, load_graph};

/// Where the graph comes from and how to read it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    /// Path of the graph file
    pub path: PathBuf,
    /// Explicit file format; `None` lets the extension decide
    pub format: Option<InputFormat>,
}

impl GraphInput {
    pub fn new(path: PathBuf, format: Option<InputFormat>) -> Self {
        Self { path, format }
    }

    /// The format that will actually be used to parse the file
    pub fn resolved_format(&self) -> InputFormat {
        self.format
            .unwrap_or_else(|| InputFormat::from_path(&self.path))
    }

    pub fn load(&self) -> Result<CycleGraph<String>, FerrisCyclesError> {
        load_graph(&self.path, Some(self.resolved_format()))
    }
}
