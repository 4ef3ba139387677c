//! Parser configuration

/// How much checking the parser applies to the entries it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Accept entries as written, including out-of-bounds or repeated coordinates
    #[default]
    Permissive,
    /// Reject out-of-bounds and duplicate coordinates
    Strict,
}

/// Configuration for parsing the text format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Entry validation level
    pub validation: Validation,
    /// Drop entry lines whose value is zero instead of storing them
    pub skip_zero_values: bool,
}

impl ParseOptions {
    /// Options that reject out-of-bounds and duplicate coordinates
    pub fn strict() -> Self {
        Self::default().with_validation(Validation::Strict)
    }

    /// Set the validation level
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Set whether zero-valued entries are dropped
    pub fn with_skip_zero_values(mut self, skip: bool) -> Self {
        self.skip_zero_values = skip;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            validation: Validation::Permissive,
            skip_zero_values: true,
        }
    }
}
