//! Basis command configuration

use super::GraphInput;
use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the basis command
#[derive(Debug, Clone)]
pub struct BasisConfig {
    /// Graph to analyze
    pub input: GraphInput,
    /// Output format for the report
    pub format: OutputFormat,
    /// Node whose component is walked first
    pub root: Option<String>,
    /// Also compute the signed cycle matrix
    pub matrix: bool,
    /// Maximum number of cycles to display (None = all)
    pub max_cycles: Option<usize>,
    /// Whether to exit with error code if the basis is not empty
    pub error_on_cycles: bool,
}

impl BasisConfig {
    pub fn builder() -> BasisConfigBuilder {
        BasisConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct BasisConfigBuilder {
    input: Option<GraphInput>,
    format: Option<OutputFormat>,
    root: Option<Option<String>>,
    matrix: Option<bool>,
    max_cycles: Option<Option<usize>>,
    error_on_cycles: Option<bool>,
}

impl BasisConfigBuilder {
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

    pub fn with_root(mut self, root: Option<String>) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_matrix(mut self, matrix: bool) -> Self {
        self.matrix = Some(matrix);
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

impl crate::common::ConfigBuilder for BasisConfigBuilder {
    type Config = BasisConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisCyclesError> {
        Ok(BasisConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            root: self.root.unwrap_or_default(),
            matrix: self.matrix.unwrap_or(false),
            max_cycles: self.max_cycles.unwrap_or_default(),
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
        })
    }
}
