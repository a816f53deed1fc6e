//! Find command configuration

use super::GraphInput;
use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::graph::Orientation;

/// Configuration for the find command
#[derive(Debug, Clone)]
pub struct FindCycleConfig {
    pub input: GraphInput,
    pub format: OutputFormat,
    /// Nodes to start from, in order; empty means every node
    pub sources: Vec<String>,
    pub orientation: Orientation,
    pub error_on_cycles: bool,
}

impl FindCycleConfig {
    pub fn builder() -> FindCycleConfigBuilder {
        FindCycleConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct FindCycleConfigBuilder {
    input: Option<GraphInput>,
    format: Option<OutputFormat>,
    sources: Option<Vec<String>>,
    orientation: Option<Orientation>,
    error_on_cycles: Option<bool>,
}

impl FindCycleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: GraphInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for FindCycleConfigBuilder {
    type Config = FindCycleConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisCyclesError> {
        Ok(FindCycleConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            sources: self.sources.unwrap_or_default(),
            orientation: self.orientation.unwrap_or_default(),
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_orientation_defaults_to_original() {
        let config = FindCycleConfig::builder()
            .with_input(GraphInput::new(PathBuf::from("g.json"), None))
            .with_format(OutputFormat::Json)
            .with_error_on_cycles(false)
            .build()
            .unwrap();

        assert_eq!(config.orientation, Orientation::Original);
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_builder_requires_format() {
        let result = FindCycleConfig::builder()
            .with_input(GraphInput::new(PathBuf::from("g.json"), None))
            .with_error_on_cycles(false)
            .build();
        assert!(result.is_err());
    }
}
