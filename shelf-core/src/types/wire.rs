//! Lenient decoding for fields whose JSON type varies between API deployments

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accept an identifier sent either as a string or a whole number
pub(crate) fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => Ok(s),
        Scalar::Integer(n) => Ok(n.to_string()),
        Scalar::Float(n) => whole(n).map(|n| n.to_string()).map_err(de::Error::custom),
    }
}

/// Accept a year sent as an integer, a whole-number float, a numeric string, or null
pub(crate) fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Integer(n)) => i32::try_from(n).map(Some).map_err(de::Error::custom),
        Some(Scalar::Float(n)) => whole(n)
            .and_then(|n| i32::try_from(n).map_err(|e| e.to_string()))
            .map(Some)
            .map_err(de::Error::custom),
        Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

fn whole(n: f64) -> Result<i64, String> {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Ok(n as i64)
    } else {
        Err(format!("expected a whole number, got {n}"))
    }
}
