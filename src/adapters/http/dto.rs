//! Payloads shared by every resource.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};

/// Body of a DELETE request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default, deserialize_with = "number_or_string")]
    pub id: Option<i64>,
}

/// Confirmation returned by DELETE endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// A numeric field as a form posts it: either a JSON number or its text.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

impl<T> NumberOrString<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// A blank string reads as absent.
    fn into_number<E: serde::de::Error>(self) -> Result<Option<T>, E> {
        match self {
            NumberOrString::Number(value) => Ok(Some(value)),
            NumberOrString::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse()
                    .map(Some)
                    .map_err(|e| E::custom(format!("invalid number \"{}\": {}", text, e)))
            }
        }
    }
}

/// Deserializes an optional number that may arrive as a numeric string.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        Some(value) => value.into_number(),
        None => Ok(None),
    }
}

/// Deserializes an optional list whose elements may be numbers or numeric strings.
pub fn numbers_or_strings<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    let Some(items) = Option::<Vec<NumberOrString<T>>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    items
        .into_iter()
        .map(|item| {
            item.into_number::<D::Error>()?
                .ok_or_else(|| D::Error::custom("list element cannot be blank"))
        })
        .collect::<Result<Vec<T>, D::Error>>()
        .map(Some)
}
