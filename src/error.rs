use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::graph::GraphKind;

/// Errors raised by the cycle algorithms themselves
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum CycleError {
    #[error("{operation} is not supported for {kind} graphs")]
    #[diagnostic(
        code(ferris_cycles::unsupported_graph_kind),
        help("Cycle bases need an undirected graph, circuit enumeration a directed one")
    )]
    UnsupportedGraphKind {
        operation: &'static str,
        kind: GraphKind,
    },

    #[error("No cycle found")]
    #[diagnostic(
        code(ferris_cycles::no_cycle_found),
        help("The part of the graph reachable from the given sources is acyclic")
    )]
    NoCycleFound,

    #[error("Node {node} is not in the graph")]
    #[diagnostic(
        code(ferris_cycles::node_not_found),
        help("Check the spelling of the root or source node")
    )]
    NodeNotFound { node: String },

    #[error("Malformed cycle path: {details}")]
    #[diagnostic(
        code(ferris_cycles::malformed_path),
        help("This is likely an internal error - please report it")
    )]
    MalformedPath { details: String },
}

impl CycleError {
    pub(crate) fn unsupported(operation: &'static str, kind: GraphKind) -> Self {
        CycleError::UnsupportedGraphKind { operation, kind }
    }

    pub(crate) fn node_not_found(node: &impl std::fmt::Debug) -> Self {
        CycleError::NodeNotFound {
            node: format!("{node:?}"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(ferris_cycles::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum FerrisCyclesError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(ferris_cycles::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON error")]
    #[diagnostic(
        code(ferris_cycles::json_error),
        help("Graph files must be valid JSON with 'kind' and 'edges' fields")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(ferris_cycles::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(ferris_cycles::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(ferris_cycles::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Invalid graph in '{path}': {message}")]
    #[diagnostic(
        code(ferris_cycles::invalid_graph),
        help("Edges must be [source, target] pairs of node names")
    )]
    InvalidGraph { path: PathBuf, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Cycle(#[from] CycleError),
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_unsupported_graph_kind_display() {
        let error = CycleError::unsupported("cycle_basis", GraphKind::DiGraph);
        assert_eq!(
            error.to_string(),
            "cycle_basis is not supported for digraph graphs"
        );
    }

    #[test]
    fn test_node_not_found_uses_debug_form() {
        let error = CycleError::node_not_found(&"ghost");
        assert_eq!(error.to_string(), "Node \"ghost\" is not in the graph");
    }

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "graph.toml".to_string(),
            source_code: NamedSource::new("graph.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'graph.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = FerrisCyclesError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_configuration_error() {
        let error = FerrisCyclesError::ConfigurationError {
            message: "Missing required field: graph".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: graph"
        );
    }

    #[test]
    fn test_cycle_error_is_transparent() {
        let error: FerrisCyclesError = CycleError::NoCycleFound.into();
        assert_eq!(error.to_string(), "No cycle found");

        use miette::Diagnostic;
        assert_eq!(
            error.code().map(|code| code.to_string()),
            Some("ferris_cycles::no_cycle_found".to_string())
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = FerrisCyclesError::FileReadError {
            path: PathBuf::from("graph.json"),
            source: io_err,
        };
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());

        let malformed = CycleError::MalformedPath {
            details: "chord (a, b) has no tree path".to_string(),
        };
        assert!(malformed.code().is_some());
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: FerrisCyclesError = json_err.into();

        match error {
            FerrisCyclesError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
