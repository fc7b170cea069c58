use super::*;

/// A number to be formatted, given either as a float or as text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Magnitude<'a> {
    Number(f64),
    Text(&'a str),
}

impl Magnitude<'_> {
    /// True for a numeric zero of either sign and for the exact texts `"0"`
    /// and `"-0"`. Other texts that parse to zero, like `"0.000"`, are not.
    pub fn is_literal_zero(self) -> bool {
        match self {
            Self::Number(num) => num == 0.0,
            Self::Text(text) => matches!(text, "0" | "-0"),
        }
    }

    /// Coerces to a finite float.
    ///
    /// Text is trimmed before parsing and whitespace-only text reads as zero.
    /// Empty text, unparsable text, NaN and infinities are all rejected as
    /// invalid input.
    pub fn to_f64(self) -> Result<f64> {
        let num = match self {
            Self::Number(num) => num,
            Self::Text(text) => {
                ensure!(!text.is_empty(), InvalidNumericInputSnafu { input: text });

                let text = text.trim();
                if text.is_empty() {
                    return Ok(0.0);
                }

                text.parse::<f64>()
                    .ok()
                    .context(InvalidNumericInputSnafu { input: text })?
            }
        };

        ensure!(
            num.is_finite(),
            InvalidNumericInputSnafu {
                input: self.to_string()
            }
        );

        Ok(num)
    }
}

impl Display for Magnitude<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{num}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl<'a> From<&'a str> for Magnitude<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Magnitude<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Magnitude<'_> {
    fn from(num: f64) -> Self {
        Self::Number(num)
    }
}

impl From<f32> for Magnitude<'_> {
    fn from(num: f32) -> Self {
        Self::Number(num.into())
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Magnitude<'_> {
                fn from(num: $ty) -> Self {
                    Self::Number(num as f64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
