use crate::errors::{Error, Result};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Comma-separated list of every variant's canonical spelling.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse `input` into a strum enum, naming the valid spellings on failure.
pub fn parse_enum<T>(input: &str, what: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    let trimmed = input.trim();
    T::from_str(trimmed).map_err(|_| {
        Error::Parse(format!(
            "Invalid {what}: '{trimmed}'. Valid values: {}",
            valid_csv::<T>()
        ))
    })
}
