//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::error::{JobInsightsError, Result};

/// Safely open a file with rich error information
///
/// This function attempts to open a file and provides detailed
/// error information if the operation fails.
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() || !path.is_file() {
        return Err(JobInsightsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open {} for: {purpose}", path.display()))?;
    Ok(file)
}
