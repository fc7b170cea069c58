use super::*;

/// A decimal SI prefix and the power of ten it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prefix {
    pub threshold: f64,
    pub symbol: &'static str,
    /// Set on the smallest entry only, which absorbs every magnitude below it.
    pub lowest: bool,
}

impl Prefix {
    const fn new(threshold: f64, symbol: &'static str) -> Self {
        Self {
            threshold,
            symbol,
            lowest: false,
        }
    }

    pub fn lowest() -> &'static Prefix {
        &PREFIXES[PREFIXES.len() - 1]
    }

    pub fn from_symbol(symbol: &str) -> Option<&'static Prefix> {
        PREFIXES.iter().find(|prefix| prefix.symbol == symbol)
    }

    pub fn exponent(&self) -> i32 {
        self.threshold.log10().round() as i32
    }

    pub fn name(&self) -> &'static str {
        match self.symbol {
            "Y" => "yotta",
            "Z" => "zetta",
            "E" => "exa",
            "P" => "peta",
            "T" => "tera",
            "G" => "giga",
            "M" => "mega",
            "k" => "kilo",
            "m" => "milli",
            "µ" => "micro",
            "n" => "nano",
            "p" => "pico",
            "f" => "femto",
            "a" => "atto",
            "z" => "zepto",
            "y" => "yocto",
            _ => "",
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Ordered from the largest threshold to the smallest.
pub static PREFIXES: [Prefix; 17] = [
    Prefix::new(1e24, "Y"),
    Prefix::new(1e21, "Z"),
    Prefix::new(1e18, "E"),
    Prefix::new(1e15, "P"),
    Prefix::new(1e12, "T"),
    Prefix::new(1e9, "G"),
    Prefix::new(1e6, "M"),
    Prefix::new(1e3, "k"),
    Prefix::new(1.0, ""),
    Prefix::new(1e-3, "m"),
    Prefix::new(1e-6, "µ"),
    Prefix::new(1e-9, "n"),
    Prefix::new(1e-12, "p"),
    Prefix::new(1e-15, "f"),
    Prefix::new(1e-18, "a"),
    Prefix::new(1e-21, "z"),
    Prefix {
        threshold: 1e-24,
        symbol: "y",
        lowest: true,
    },
];
