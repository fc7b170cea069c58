use super::*;

/// The `{ "value": ..., "unit": ... }` record handed to hosts that cannot
/// carry a [`Result`].
///
/// Invalid input is encoded as a `null` value with an empty unit. A valid
/// zero keeps its base unit, so `unit` alone does not tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formatted<T = f64> {
    pub value: Option<T>,
    pub unit: String,
}

impl<T> Formatted<T> {
    pub fn invalid() -> Self {
        Self {
            value: None,
            unit: String::new(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> From<Si<T>> for Formatted<T> {
    fn from(si: Si<T>) -> Self {
        Self {
            value: Some(si.value),
            unit: si.unit,
        }
    }
}

impl<T> Formatted<T> {
    /// Converts a formatter result into the wire record.
    ///
    /// Only [`Error::InvalidNumericInput`] becomes the `null` record. Any other
    /// error, such as an out-of-range digit count, is returned unchanged.
    pub fn from_result(result: Result<Si<T>>) -> Result<Self> {
        match result {
            Ok(si) => Ok(si.into()),
            Err(err) if err.is_invalid_input() => {
                debug!("reporting {err} as a null value");
                Ok(Self::invalid())
            }
            Err(err) => Err(err),
        }
    }
}
