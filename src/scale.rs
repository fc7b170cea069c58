use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled {
    pub value: f64,
    pub prefix: &'static Prefix,
}

impl Scaled {
    pub fn symbol(&self) -> &'static str {
        self.prefix.symbol
    }
}

/// Divides `num` by the largest prefix threshold not exceeding its magnitude.
///
/// Magnitudes below the smallest threshold still resolve to the lowest
/// prefix, so the scaled value can drop below one (1e-51 scales to 1e-27 y).
pub fn scale(num: f64) -> Scaled {
    let prefix = PREFIXES
        .iter()
        .find(|prefix| prefix.threshold.abs() <= num.abs())
        .unwrap_or_else(|| {
            debug!("{num} is below every prefix threshold, using the lowest prefix");
            Prefix::lowest()
        });

    let scaled = Scaled {
        value: num / prefix.threshold,
        prefix,
    };

    trace!("scaled {num} to {} {}", scaled.value, prefix.symbol);

    scaled
}
