//! Scale numbers to the nearest SI metric prefix and render them as text.
//!
//! ```
//! use siformat::{format_fixed_si, format_si};
//!
//! let si = format_si(10_000, "W").unwrap();
//! assert_eq!(si.value, 10.0);
//! assert_eq!(si.unit, "kW");
//!
//! let fixed = format_fixed_si(161_261, "W", 2, 1).unwrap();
//! assert_eq!(fixed.to_string(), "161.26 kW");
//! ```

use {
    error::{
        ConflictingNotationSnafu, DigitsOutOfRangeSnafu, InvalidNumericInputSnafu,
        ParseConfigSnafu, ParseEnvSnafu, ReadConfigSnafu,
    },
    serde::{Deserialize, Serialize},
    snafu::{OptionExt, ResultExt, Snafu, ensure},
    std::{
        collections::BTreeMap,
        fmt::{self, Display, Formatter},
        fs,
        path::{Path, PathBuf},
    },
    tracing::{debug, trace},
};

pub use {
    error::{Error, Result},
    formatted::Formatted,
    magnitude::Magnitude,
    notation::{
        DEFAULT_EXPONENTIAL_FRACTION_DIGITS, EXPONENTIAL_THRESHOLD, Notation, format_fixed_si,
        format_precision_si,
    },
    prefix::{PREFIXES, Prefix},
    scale::{Scaled, scale},
    settings::{Config, Settings},
    si::{Si, format_si},
};

mod decimal;
mod error;
mod formatted;
mod magnitude;
mod notation;
mod prefix;
mod scale;
pub mod settings;
mod si;
