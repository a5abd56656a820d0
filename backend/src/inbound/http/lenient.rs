//! Lenient integer decoding for request bodies.
//!
//! Clients send integer fields either as JSON numbers or as numeric strings
//! (`"numberofpeople": "3"`). Blank strings and `null` decode as absent so
//! the form validator reports them as missing.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerOrText {
    Integer(i64),
    Text(String),
}

/// Decode an optional integer from a number, a numeric string or `null`.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so a missing key
/// also yields `None`.
pub fn optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntegerOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntegerOrText::Integer(value)) => Ok(Some(value)),
        Some(IntegerOrText::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected an integer, found {text:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "optional_integer")]
        value: Option<i64>,
    }

    fn decode(json: &str) -> Result<Option<i64>, serde_json::Error> {
        serde_json::from_str::<Probe>(json).map(|probe| probe.value)
    }

    #[rstest]
    #[case(r#"{"value": 3}"#, Some(3))]
    #[case(r#"{"value": "3"}"#, Some(3))]
    #[case(r#"{"value": " 201 "}"#, Some(201))]
    #[case(r#"{"value": "-1"}"#, Some(-1))]
    #[case(r#"{"value": ""}"#, None)]
    #[case(r#"{"value": null}"#, None)]
    #[case(r#"{}"#, None)]
    fn accepts_numbers_and_numeric_strings(#[case] json: &str, #[case] expected: Option<i64>) {
        assert_eq!(decode(json).expect("decodes"), expected);
    }

    #[rstest]
    #[case(r#"{"value": "three"}"#)]
    #[case(r#"{"value": 2.5}"#)]
    #[case(r#"{"value": true}"#)]
    fn rejects_non_integers(#[case] json: &str) {
        assert!(decode(json).is_err());
    }
}
