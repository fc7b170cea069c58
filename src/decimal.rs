//! Exact decimal renderings of finite floats.
//!
//! `format!("{:.N}")` rounds exact ties to even. These renderings round the
//! exact binary value half away from zero instead, so `2.5` with no fraction
//! digits gives `3` and `-0.125` with two gives `-0.13`.

/// The exact decimal expansion of a float's magnitude.
///
/// `digits` holds no leading or trailing zeros and `point` counts the
/// digits before the decimal point, so `161.25` is `[1, 6, 1, 2, 5]` with
/// a point of 3 and `0.0025` is `[2, 5]` with a point of -2.
#[derive(Debug, Clone, PartialEq)]
struct Decimal {
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    fn new(value: f64) -> Self {
        let exact = format!("{:.*}", fractional_bits(value), value.abs());
        let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

        let mut digits = integer
            .bytes()
            .chain(fraction.bytes())
            .map(|byte| byte - b'0')
            .collect::<Vec<u8>>();
        let mut point = integer.len() as i32;

        let leading = digits.iter().take_while(|&&digit| digit == 0).count();
        digits.drain(..leading);
        point -= leading as i32;

        let mut decimal = Self { digits, point };
        decimal.trim();
        decimal
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Power of ten of the leading digit.
    fn exponent(&self) -> i32 {
        self.point - 1
    }

    fn digit(&self, power: i32) -> u8 {
        let index = self.point - 1 - power;
        if index < 0 {
            return 0;
        }
        self.digits.get(index as usize).copied().unwrap_or(0)
    }

    /// Keeps the first `keep` digits, rounding the rest half away from zero.
    fn round(&mut self, keep: i32) {
        if keep < 0 {
            self.digits.clear();
            return;
        }

        let keep = keep as usize;
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);

        if round_up {
            let mut carry = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }

            if carry {
                self.digits.insert(0, 1);
                self.point += 1;
            }
        }

        self.trim();
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    /// Digits from the leading digit downwards, zero padded to `count`.
    fn significant(&self, count: usize) -> String {
        (0..count as i32)
            .map(|offset| char::from(b'0' + self.digit(self.exponent() - offset)))
            .collect()
    }
}

/// Number of binary digits after the point in the exact value of `value`.
///
/// This is also the number of decimal digits after the point in its exact
/// decimal expansion.
fn fractional_bits(value: f64) -> usize {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let mut mantissa = bits & ((1 << 52) - 1);

    let mut exponent = if biased == 0 {
        -1074
    } else {
        mantissa |= 1 << 52;
        biased - 1075
    };

    if mantissa == 0 {
        return 0;
    }

    exponent += mantissa.trailing_zeros() as i32;

    if exponent < 0 { (-exponent) as usize } else { 0 }
}

fn sign(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}

fn exponential(value: f64, mantissa: &str, exponent: i32) -> String {
    let (lead, rest) = mantissa.split_at(1);
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    let exponent = exponent.unsigned_abs();

    if rest.is_empty() {
        format!("{}{lead}e{exponent_sign}{exponent}", sign(value))
    } else {
        format!("{}{lead}.{rest}e{exponent_sign}{exponent}", sign(value))
    }
}

/// Renders `value` with exactly `fraction_digits` digits after the point.
pub(crate) fn to_fixed(value: f64, fraction_digits: u8) -> String {
    let mut decimal = Decimal::new(value);
    decimal.round(decimal.point + i32::from(fraction_digits));

    let mut rendered = String::from(sign(value));

    for power in (0..=decimal.exponent().max(0)).rev() {
        rendered.push(char::from(b'0' + decimal.digit(power)));
    }

    if fraction_digits > 0 {
        rendered.push('.');
        for power in 1..=i32::from(fraction_digits) {
            rendered.push(char::from(b'0' + decimal.digit(-power)));
        }
    }

    rendered
}

/// Renders `value` as `d.ddde±x` with `fraction_digits` mantissa digits after
/// the point.
pub(crate) fn to_exponential(value: f64, fraction_digits: u8) -> String {
    let count = usize::from(fraction_digits) + 1;

    let mut decimal = Decimal::new(value);
    if decimal.is_zero() {
        return exponential(value, &"0".repeat(count), 0);
    }

    decimal.round(count as i32);

    exponential(value, &decimal.significant(count), decimal.exponent())
}

/// Renders `value` with exactly `precision` significant digits.
///
/// Exponents below -6 or at least `precision` use exponential form.
pub(crate) fn to_precision(value: f64, precision: u8) -> String {
    let count = usize::from(precision);

    let mut decimal = Decimal::new(value);
    if decimal.is_zero() {
        return to_fixed(value, precision.saturating_sub(1));
    }

    decimal.round(count as i32);

    let exponent = decimal.exponent();
    let mantissa = decimal.significant(count);

    if exponent < -6 || exponent >= count as i32 {
        return exponential(value, &mantissa, exponent);
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{}0.{zeros}{mantissa}", sign(value));
    }

    let (integer, fraction) = mantissa.split_at(exponent as usize + 1);

    if fraction.is_empty() {
        format!("{}{integer}", sign(value))
    } else {
        format!("{}{integer}.{fraction}", sign(value))
    }
}
