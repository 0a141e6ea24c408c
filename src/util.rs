use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Optional number that may also arrive as text, the way HTML forms send
/// it. Blank text counts as absent.
pub(crate) fn lenient<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("{s:?} is not a number: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Year {
        #[serde(default, deserialize_with = "lenient")]
        year: Option<i32>,
    }

    fn year(json: &str) -> Result<Option<i32>, serde_json::Error> {
        serde_json::from_str::<Year>(json).map(|y| y.year)
    }

    #[test]
    fn numbers_and_text() {
        assert_eq!(year(r#"{"year": 1999}"#).unwrap(), Some(1999));
        assert_eq!(year(r#"{"year": " 1999 "}"#).unwrap(), Some(1999));
    }

    #[test]
    fn absent_null_and_blank() {
        assert_eq!(year("{}").unwrap(), None);
        assert_eq!(year(r#"{"year": null}"#).unwrap(), None);
        assert_eq!(year(r#"{"year": "  "}"#).unwrap(), None);
    }

    #[test]
    fn rejects_garbage() {
        let err = year(r#"{"year": "nineteen"}"#).unwrap_err();
        assert!(err.to_string().contains("is not a number"));
        assert!(year(r#"{"year": [1]}"#).is_err());
    }
}
