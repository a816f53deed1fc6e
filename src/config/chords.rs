//! Chords command configuration

use super::GraphInput;
use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the chords command
#[derive(Debug, Clone)]
pub struct ChordsConfig {
    pub input: GraphInput,
    pub format: OutputFormat,
    /// Maximum number of chords to display (None = all)
    pub max_cycles: Option<usize>,
    pub error_on_cycles: bool,
}

impl ChordsConfig {
    pub fn builder() -> ChordsConfigBuilder {
        ChordsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ChordsConfigBuilder {
    input: Option<GraphInput>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    error_on_cycles: Option<bool>,
}

impl ChordsConfigBuilder {
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

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for ChordsConfigBuilder {
    type Config = ChordsConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisCyclesError> {
        Ok(ChordsConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_cycles: self.max_cycles.unwrap_or_default(),
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
        })
    }
}
