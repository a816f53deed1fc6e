use std::fmt;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};

use super::container::CycleGraph;
use super::types::GraphKind;
use crate::error::{FerrisCyclesError, TomlParseError};

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Json => write!(f, "json"),
            InputFormat::Toml => write!(f, "toml"),
        }
    }
}

/// On-disk description of a graph with string node names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub kind: GraphKind,
    /// Extra nodes, typically isolated ones not mentioned by any edge
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphDocument {
    /// Build the graph, listed nodes first, then edges in file order
    pub fn into_graph(self) -> CycleGraph<String> {
        let mut graph = CycleGraph::new(self.kind);
        for node in self.nodes {
            graph.add_node(node);
        }
        for (source, target) in self.edges {
            graph.add_edge(source, target);
        }
        graph
    }

    fn validate(&self, path: &Path) -> Result<(), FerrisCyclesError> {
        let blank = self
            .nodes
            .iter()
            .chain(self.edges.iter().flat_map(|(source, target)| [source, target]))
            .any(|name| name.trim().is_empty());

        if blank {
            return Err(FerrisCyclesError::InvalidGraph {
                path: path.to_path_buf(),
                message: "node names must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse a graph document from `content`; `path` is only used in diagnostics
pub fn parse_graph(
    content: &str,
    path: &Path,
    format: InputFormat,
) -> Result<GraphDocument, FerrisCyclesError> {
    let document: GraphDocument = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Toml => toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            FerrisCyclesError::TomlParseError(Box::new(TomlParseError {
                file: path.display().to_string(),
                source_code: NamedSource::new(path.display().to_string(), content.to_string()),
                span,
                source: e,
            }))
        })?,
    };

    document.validate(path)?;
    Ok(document)
}

/// Read and parse a graph file. Without an explicit `format` the file
/// extension decides.
pub fn load_graph(
    path: &Path,
    format: Option<InputFormat>,
) -> Result<CycleGraph<String>, FerrisCyclesError> {
    let content = std::fs::read_to_string(path).map_err(|e| FerrisCyclesError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    Ok(parse_graph(&content, path, format)?.into_graph())
}
