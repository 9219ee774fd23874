//! Precondition checks for host-supplied datasets.
//!
//! Checks run in a fixed order and the first failure wins, so hosts see the
//! same diagnostic regardless of how malformed the payload is.

use crate::error::{Error, Result};
use crate::model::DiagramData;
use serde_json::Value;

/// Validates a raw JSON payload and deserializes it into [`DiagramData`].
///
/// Shape checks (`matrix`/`names` present and array-valued, matrix non-empty,
/// lengths equal) run against the JSON value first; cell-level problems such
/// as non-numeric entries surface as [`Error::Render`] from the
/// deserialization step.
pub fn validate_value(data: &Value) -> Result<DiagramData> {
    let matrix = data.get("matrix");
    if !matrix.is_some_and(Value::is_array) {
        return Err(Error::InvalidInput { field: "matrix" });
    }
    let names = data.get("names");
    if !names.is_some_and(Value::is_array) {
        return Err(Error::InvalidInput { field: "names" });
    }

    let matrix_len = matrix.and_then(Value::as_array).map_or(0, Vec::len);
    let names_len = names.and_then(Value::as_array).map_or(0, Vec::len);
    if matrix_len == 0 {
        return Err(Error::EmptyInput);
    }
    if matrix_len != names_len {
        return Err(Error::SizeMismatch {
            matrix_len,
            names_len,
        });
    }

    serde_json::from_value(data.clone()).map_err(|err| Error::render(err.to_string()))
}

/// Validates already-typed data (steps 2-3 of the ladder are guaranteed by
/// the type, so only emptiness and the length invariant remain).
pub fn validate_data(data: &DiagramData) -> Result<()> {
    if data.matrix.is_empty() {
        return Err(Error::EmptyInput);
    }
    if data.matrix.len() != data.names.len() {
        return Err(Error::SizeMismatch {
            matrix_len: data.matrix.len(),
            names_len: data.names.len(),
        });
    }
    Ok(())
}
