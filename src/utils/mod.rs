//! Arrow utility functions for extracting typed values from record batches
//!
//! The CSV reader infers column types, so the same logical column can arrive
//! as Utf8, Int64 or Float64 depending on its contents. These helpers extract
//! individual values with null handling and the necessary conversions.

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;

/// Extract a string value from an Arrow array at the specified index, handling nulls
///
/// # Returns
/// `Some(String)` if the value exists and is not null, otherwise `None`
#[must_use]
pub fn array_value_to_string(array: &ArrayRef, index: usize) -> Option<String> {
    if array.is_null(index) {
        return None;
    }

    match array.data_type() {
        DataType::Utf8 => {
            let string_array = array.as_any().downcast_ref::<StringArray>()?;
            let value = string_array.value(index).trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        _ => None,
    }
}

/// Extract an f64 value from an Arrow array at the specified index, handling nulls
///
/// Integer and string columns are converted where possible, so a salary
/// column inferred as Int64 (all whole numbers) still reads correctly.
#[must_use]
pub fn array_value_to_f64(array: &ArrayRef, index: usize) -> Option<f64> {
    if array.is_null(index) {
        return None;
    }

    match array.data_type() {
        DataType::Float64 => {
            let float_array = array.as_any().downcast_ref::<Float64Array>()?;
            Some(float_array.value(index))
        }
        DataType::Int64 => {
            let int_array = array.as_any().downcast_ref::<Int64Array>()?;
            Some(int_array.value(index) as f64)
        }
        DataType::Utf8 => {
            let string_array = array.as_any().downcast_ref::<StringArray>()?;
            string_array.value(index).trim().parse::<f64>().ok()
        }
        _ => None,
    }
}
