use super::*;

/// Scaled values whose magnitude exceeds this are rendered in exponential
/// notation.
pub const EXPONENTIAL_THRESHOLD: f64 = 1000.0;

pub const DEFAULT_EXPONENTIAL_FRACTION_DIGITS: u8 = 1;

const MAX_FRACTION_DIGITS: u8 = 20;
const MIN_PRECISION: u8 = 1;
const MAX_PRECISION: u8 = 21;

/// How a scaled value is rendered below the exponential threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// A fixed number of digits after the decimal point.
    Fixed { fraction_digits: u8 },
    /// A fixed number of significant digits.
    Precision { precision: u8 },
}

impl Notation {
    pub fn render(self, value: f64, exponential_fraction_digits: u8) -> Result<String> {
        if value.abs() > EXPONENTIAL_THRESHOLD {
            check_range(
                "exponential fraction digits",
                exponential_fraction_digits,
                0,
                MAX_FRACTION_DIGITS,
            )?;
            trace!("rendering {value} in exponential notation");
            return Ok(decimal::to_exponential(
                value,
                exponential_fraction_digits,
            ));
        }

        match self {
            Self::Fixed { fraction_digits } => {
                check_range("fraction digits", fraction_digits, 0, MAX_FRACTION_DIGITS)?;
                Ok(decimal::to_fixed(value, fraction_digits))
            }
            Self::Precision { precision } => {
                check_range("precision", precision, MIN_PRECISION, MAX_PRECISION)?;
                Ok(decimal::to_precision(value, precision))
            }
        }
    }

    pub fn format<'a>(
        self,
        num: impl Into<Magnitude<'a>>,
        base_unit: &str,
        exponential_fraction_digits: u8,
    ) -> Result<Si<String>> {
        let si = format_si(num, base_unit)?;

        Ok(Si::new(
            self.render(si.value, exponential_fraction_digits)?,
            si.unit,
        ))
    }
}

impl Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { fraction_digits } => write!(f, "fixed({fraction_digits})"),
            Self::Precision { precision } => write!(f, "precision({precision})"),
        }
    }
}

fn check_range(name: &'static str, digits: u8, min: u8, max: u8) -> Result {
    ensure!(
        (min..=max).contains(&digits),
        DigitsOutOfRangeSnafu {
            name,
            digits,
            min,
            max,
        }
    );

    Ok(())
}

/// Formats `num` like [`format_si`] and renders the scaled value with
/// `fraction_digits` digits after the point, or in exponential notation with
/// `exponential_fraction_digits` once it exceeds 1000.
pub fn format_fixed_si<'a>(
    num: impl Into<Magnitude<'a>>,
    base_unit: &str,
    fraction_digits: u8,
    exponential_fraction_digits: u8,
) -> Result<Si<String>> {
    Notation::Fixed { fraction_digits }.format(num, base_unit, exponential_fraction_digits)
}

/// Formats `num` like [`format_si`] and renders the scaled value with
/// `precision` significant digits, or in exponential notation with
/// `exponential_fraction_digits` once it exceeds 1000.
pub fn format_precision_si<'a>(
    num: impl Into<Magnitude<'a>>,
    base_unit: &str,
    precision: u8,
    exponential_fraction_digits: u8,
) -> Result<Si<String>> {
    Notation::Precision { precision }.format(num, base_unit, exponential_fraction_digits)
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[track_caller]
    fn case(result: Result<Si<String>>, value: &str, unit: &str) {
        assert_eq!(result.unwrap(), Si::new(value.to_string(), unit));
    }

    #[test]
    fn fixed_digits() {
        case(format_fixed_si(204, "W", 2, 1), "204.00", "W");
        case(format_fixed_si(0.3, "W", 2, 1), "300.00", "mW");
        case(format_fixed_si(161261, "W", 2, 1), "161.26", "kW");
        case(format_fixed_si(-161261, "W", 2, 1), "-161.26", "kW");
        case(format_fixed_si(0, "W", 2, 1), "0.00", "W");
    }

    #[test]
    fn precision_digits() {
        case(format_precision_si(204, "W", 4, 1), "204.0", "W");
        case(format_precision_si(0.3, "W", 2, 1), "3.0e+2", "mW");
        case(format_precision_si(161261, "W", 5, 1), "161.26", "kW");
        case(format_precision_si(-161261, "W", 10, 1), "-161.2610000", "kW");
    }

    #[test]
    fn exponential_above_threshold() {
        case(format_fixed_si("-1e+100", "W", 3, 1), "-1.0e+76", "YW");
        case(format_fixed_si("-1e+100", "W", 4, 2), "-1.00e+76", "YW");
        case(format_precision_si("-1e+100", "W", 3, 1), "-1.0e+76", "YW");
        case(format_precision_si("1e+30", "W", 3, 0), "1e+6", "YW");
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(
            Notation::Fixed { fraction_digits: 1 }.render(1000.0, 1).unwrap(),
            "1000.0"
        );
        assert_eq!(
            Notation::Fixed { fraction_digits: 1 }
                .render(-1000.5, 1)
                .unwrap(),
            "-1.0e+3"
        );
    }

    #[test]
    fn digit_ranges() {
        assert!(Notation::Fixed { fraction_digits: 20 }.render(1.0, 1).is_ok());
        assert!(Notation::Precision { precision: 21 }.render(1.0, 1).is_ok());

        assert!(matches!(
            Notation::Fixed { fraction_digits: 21 }.render(1.0, 1),
            Err(Error::DigitsOutOfRange {
                name: "fraction digits",
                digits: 21,
                ..
            })
        ));
        assert!(matches!(
            Notation::Precision { precision: 0 }.render(1.0, 1),
            Err(Error::DigitsOutOfRange {
                name: "precision",
                ..
            })
        ));
        assert!(matches!(
            Notation::Precision { precision: 22 }.render(1.0, 1),
            Err(Error::DigitsOutOfRange { .. })
        ));
        assert!(matches!(
            Notation::Fixed { fraction_digits: 2 }.render(1e4, 21),
            Err(Error::DigitsOutOfRange {
                name: "exponential fraction digits",
                ..
            })
        ));
    }

    #[test]
    fn only_the_selected_branch_is_checked() {
        assert!(Notation::Fixed { fraction_digits: 99 }.render(1e4, 1).is_ok());
        assert!(Notation::Precision { precision: 0 }.render(1e4, 1).is_ok());
        assert!(Notation::Fixed { fraction_digits: 2 }.render(5.0, 99).is_ok());
    }

    #[test]
    fn invalid_input_wins_over_digit_range() {
        assert!(
            format_fixed_si("Something", "W", 99, 99)
                .unwrap_err()
                .is_invalid_input()
        );
    }

    #[test]
    fn serde_representation() {
        assert_eq!(
            serde_json::to_string(&Notation::Fixed { fraction_digits: 3 }).unwrap(),
            r#"{"fixed":{"fraction_digits":3}}"#
        );
        assert_eq!(
            serde_json::from_str::<Notation>(r#"{"precision":{"precision":4}}"#).unwrap(),
            Notation::Precision { precision: 4 }
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Notation::Fixed { fraction_digits: 2 }.to_string(),
            "fixed(2)"
        );
        assert_eq!(
            Notation::Precision { precision: 3 }.to_string(),
            "precision(3)"
        );
    }
}
