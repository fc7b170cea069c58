use {
    pretty_assertions::assert_eq as pretty_assert_eq,
    siformat::{
        Config, Error, Formatted, Magnitude, Notation, PREFIXES, Prefix, Settings, Si,
        format_fixed_si, format_precision_si, format_si, scale,
    },
    serial_test::serial,
    std::{collections::BTreeMap, env, fs},
    tempfile::TempDir,
};

mod properties;

#[track_caller]
fn assert_si(actual: Result<Si, Error>, value: f64, unit: &str) {
    pretty_assert_eq!(actual.unwrap(), Si::new(value, unit));
}

#[track_caller]
fn assert_rendered(actual: Result<Si<String>, Error>, value: &str, unit: &str) {
    pretty_assert_eq!(actual.unwrap(), Si::new(value.to_string(), unit));
}

#[track_caller]
fn assert_invalid<T: std::fmt::Debug>(actual: Result<Si<T>, Error>) {
    match actual {
        Err(Error::InvalidNumericInput { .. }) => {}
        other => panic!("expected invalid numeric input, got {other:?}"),
    }
}
