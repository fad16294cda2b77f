use log::{debug, warn};

use crate::accumulator::Value;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the value list is empty.
pub fn validate_values(values: &[Value]) -> Result<(), UtilsError> {
    debug!("Validating {} input values", values.len());

    if values.is_empty() {
        warn!("Value list is empty");
        return Err(UtilsError::EmptyValues);
    }

    Ok(())
}
