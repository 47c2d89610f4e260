//! Lenient field decoders for MFL exports
//!
//! MFL emits numbers as strings and collapses one-element lists into a bare
//! object, so both shapes have to be accepted.

use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<Option<T>>),
    One(T),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<N> {
    Number(N),
    Text(String),
}

/// Decode a list that may also be given as a single value or `null`.
///
/// `null` elements inside the list are dropped.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<OneOrMany<T>>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items.into_iter().flatten().collect(),
        Some(OneOrMany::One(item)) => vec![item],
    })
}

/// Decode a number that may be quoted. An empty string yields the default.
pub fn number<'de, D, N>(deserializer: D) -> Result<N, D::Error>
where
    D: Deserializer<'de>,
    N: Deserialize<'de> + FromStr + Default,
    N::Err: Display,
{
    match NumberOrString::<N>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(N::default());
            }
            text.parse::<N>().map_err(serde::de::Error::custom)
        }
    }
}
