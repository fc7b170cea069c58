use super::*;

const ENV_PREFIX: &str = "SIFORMAT_";
const DEFAULT_FRACTION_DIGITS: u8 = 2;

/// TOML config file structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fraction_digits: Option<u8>,
    pub precision: Option<u8>,
    pub exponential_fraction_digits: Option<u8>,
    pub unit: Option<String>,
}

/// Resolved formatter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    pub fraction_digits: Option<u8>,
    pub precision: Option<u8>,
    pub exponential_fraction_digits: Option<u8>,
    pub unit: Option<String>,
}

impl Settings {
    /// Loads settings from `SIFORMAT_*` environment variables, falling back to
    /// the config file at `path` when one is given.
    ///
    /// This is the only entry point that reads the process environment. Use
    /// [`Settings::merge`] to supply the variables explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut env = BTreeMap::<String, String>::new();

        for (var, value) in std::env::vars_os() {
            let Some(var) = var.to_str() else {
                continue;
            };

            let Some(key) = var.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            let value = value.into_string().map_err(|value| Error::ParseEnv {
                key: key.into(),
                value: value.to_string_lossy().into_owned(),
            })?;

            env.insert(key.into(), value);
        }

        Self::merge(path, env)
    }

    /// Merge all configuration sources
    pub fn merge(path: Option<&Path>, env: BTreeMap<String, String>) -> Result<Self> {
        let settings = Self::from_env(&env)?;

        let config = match path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let settings = settings.or(Self::from_config(&config));

        settings.validate()?;

        debug!(
            "resolved {} with {} exponential fraction digits",
            settings.notation(),
            settings.exponential_fraction_digits()
        );

        Ok(settings)
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            fraction_digits: config.fraction_digits,
            precision: config.precision,
            exponential_fraction_digits: config.exponential_fraction_digits,
            unit: config.unit.clone(),
        }
    }

    pub fn from_env(env: &BTreeMap<String, String>) -> Result<Self> {
        let get_u8 = |key: &str| -> Result<Option<u8>> {
            env.get(key)
                .map(|value| {
                    value.trim().parse::<u8>().ok().context(ParseEnvSnafu {
                        key,
                        value: value.as_str(),
                    })
                })
                .transpose()
        };

        Ok(Self {
            fraction_digits: get_u8("FRACTION_DIGITS")?,
            precision: get_u8("PRECISION")?,
            exponential_fraction_digits: get_u8("EXPONENTIAL_FRACTION_DIGITS")?,
            unit: env.get("UNIT").cloned(),
        })
    }

    /// Merge self with another Settings, self takes priority
    ///
    /// A notation set on self replaces the other side's notation entirely, so
    /// a precision from the environment overrides fraction digits from a file.
    pub fn or(self, other: Self) -> Self {
        let (fraction_digits, precision) =
            if self.fraction_digits.is_some() || self.precision.is_some() {
                (self.fraction_digits, self.precision)
            } else {
                (other.fraction_digits, other.precision)
            };

        Self {
            fraction_digits,
            precision,
            exponential_fraction_digits: self
                .exponential_fraction_digits
                .or(other.exponential_fraction_digits),
            unit: self.unit.or(other.unit),
        }
    }

    pub fn validate(&self) -> Result {
        ensure!(
            self.fraction_digits.is_none() || self.precision.is_none(),
            ConflictingNotationSnafu
        );

        // One render per branch range checks every digit count.
        self.notation()
            .render(1.0, self.exponential_fraction_digits())?;
        self.notation()
            .render(EXPONENTIAL_THRESHOLD * 10.0, self.exponential_fraction_digits())?;

        Ok(())
    }

    // Convenience accessors
    pub fn notation(&self) -> Notation {
        match (self.precision, self.fraction_digits) {
            (Some(precision), _) => Notation::Precision { precision },
            (None, fraction_digits) => Notation::Fixed {
                fraction_digits: fraction_digits.unwrap_or(DEFAULT_FRACTION_DIGITS),
            },
        }
    }

    pub fn exponential_fraction_digits(&self) -> u8 {
        self.exponential_fraction_digits
            .unwrap_or(DEFAULT_EXPONENTIAL_FRACTION_DIGITS)
    }

    pub fn unit(&self) -> &str {
        self.unit.as_deref().unwrap_or_default()
    }

    /// Formats `num` with the configured notation and unit.
    pub fn format<'a>(&self, num: impl Into<Magnitude<'a>>) -> Result<Si<String>> {
        self.notation()
            .format(num, self.unit(), self.exponential_fraction_digits())
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).context(ReadConfigSnafu { path })?;
        toml::from_str(&contents).context(ParseConfigSnafu { path })
    }
}
