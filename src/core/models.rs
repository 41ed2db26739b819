//! CSV column configuration.
//!
//! JSON and JSONL writers always emit complete records, so they can be read
//! back as [`ChatMessage`](crate::ChatMessage) values. Only the CSV writer
//! has optional columns. Which records get written at all is decided by
//! [`FilterConfig`](crate::core::FilterConfig).

/// Controls which optional CSV columns are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include an `ID` column
    pub include_ids: bool,
    /// Include `Date` and `Time` columns
    pub include_dates: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional column.
    pub fn all() -> Self {
        Self {
            include_ids: true,
            include_dates: true,
        }
    }

    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.include_ids = true;
        self
    }

    #[must_use]
    pub fn with_dates(mut self) -> Self {
        self.include_dates = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::new();
        assert!(!config.include_ids);
        assert!(!config.include_dates);
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new().with_ids().with_dates();
        assert_eq!(config, OutputConfig::all());
    }
}
