//! Circuits command configuration

use super::GraphInput;
use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the circuits command
#[derive(Debug, Clone)]
pub struct CircuitsConfig {
    pub input: GraphInput,
    pub format: OutputFormat,
    /// Materialize every circuit at once instead of streaming
    pub recursive: bool,
    /// Stop the enumeration after this many circuits
    pub limit: Option<usize>,
    pub max_cycles: Option<usize>,
    pub error_on_cycles: bool,
}

impl CircuitsConfig {
    pub fn builder() -> CircuitsConfigBuilder {
        CircuitsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CircuitsConfigBuilder {
    input: Option<GraphInput>,
    format: Option<OutputFormat>,
    recursive: Option<bool>,
    limit: Option<Option<usize>>,
    max_cycles: Option<Option<usize>>,
    error_on_cycles: Option<bool>,
}

impl CircuitsConfigBuilder {
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

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CircuitsConfigBuilder {
    type Config = CircuitsConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisCyclesError> {
        let recursive = self.recursive.unwrap_or(false);
        let limit = self.limit.unwrap_or_default();

        if recursive && limit.is_some() {
            return Err(crate::error::FerrisCyclesError::ConfigurationError {
                message: "A circuit limit only applies to the streaming enumeration".to_string(),
            });
        }

        Ok(CircuitsConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            recursive,
            limit,
            max_cycles: self.max_cycles.unwrap_or_default(),
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

    fn builder() -> CircuitsConfigBuilder {
        CircuitsConfig::builder()
            .with_input(GraphInput::new(PathBuf::from("g.toml"), None))
            .with_format(OutputFormat::Human)
            .with_error_on_cycles(false)
    }

    #[test]
    fn test_limit_is_kept() {
        let config = builder().with_limit(Some(10)).build().unwrap();
        assert_eq!(config.limit, Some(10));
        assert!(!config.recursive);
    }

    #[test]
    fn test_recursive_rejects_limit() {
        let result = builder().with_recursive(true).with_limit(Some(1)).build();
        assert!(result.is_err());
    }
}
