//! Configuration for the dataset loader.

/// Configuration for loading a job-market CSV file
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Whether the first line of the file is a header row
    pub has_header: bool,
    /// Number of rows per record batch when decoding the file
    pub batch_size: usize,
    /// Fail on categorical values outside their declared domain and on
    /// negative or non-finite salaries. When disabled, such values are
    /// logged and treated as missing instead.
    pub strict_values: bool,
    /// Maximum number of rows to inspect when inferring the file schema
    pub schema_inference_rows: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            batch_size: 8192,
            strict_values: true,
            schema_inference_rows: 256,
        }
    }
}

impl LoaderConfig {
    /// Create a configuration that maps unknown categorical values and
    /// invalid salaries to missing instead of failing the load
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_values: false,
            ..Self::default()
        }
    }
}
