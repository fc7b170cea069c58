use super::*;

/// A value scaled to an SI prefix together with its prefixed unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Si<T = f64> {
    pub value: T,
    pub unit: String,
}

impl<T> Si<T> {
    pub fn new(value: T, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Si<U> {
        Si {
            value: f(self.value),
            unit: self.unit,
        }
    }
}

impl Display for Si<f64> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.value)?,
            None => write!(f, "{}", self.value)?,
        }

        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }

        Ok(())
    }
}

impl Display for Si<String> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Scales `num` to the nearest SI prefix and prepends the prefix symbol to
/// `base_unit`.
///
/// A literal zero (`0`, `-0`, `"0"`, `"-0"`) is never scaled and keeps the
/// bare `base_unit`. Any other text that reads as zero goes through the
/// scaler and lands on the lowest prefix. Text that does not parse as a
/// finite number, including empty text, is rejected.
pub fn format_si<'a>(num: impl Into<Magnitude<'a>>, base_unit: &str) -> Result<Si> {
    let magnitude = num.into();

    if magnitude.is_literal_zero() {
        return Ok(Si::new(0.0, base_unit));
    }

    let num = magnitude.to_f64().inspect_err(|err| debug!("{err}"))?;

    let scaled = scale(num);

    Ok(Si::new(
        scaled.value,
        format!("{}{base_unit}", scaled.symbol()),
    ))
}
