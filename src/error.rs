use super::*;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("invalid numeric input `{input}`"))]
    InvalidNumericInput { input: String },

    #[snafu(display("{name} must be between {min} and {max}, got {digits}"))]
    DigitsOutOfRange {
        name: &'static str,
        digits: u8,
        min: u8,
        max: u8,
    },

    #[snafu(display("failed to read config file `{}`: {source}", path.display()))]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to deserialize config file `{}`: {source}", path.display()))]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[snafu(display("failed to parse environment variable SIFORMAT_{key} `{value}`"))]
    ParseEnv { key: String, value: String },

    #[snafu(display("fraction digits and precision are mutually exclusive"))]
    ConflictingNotation,
}

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidNumericInput { .. })
    }
}
