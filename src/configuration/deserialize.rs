/// Runner durations arrive as arbitrary JSON values.
/// Numbers and numeric strings are accepted, negative or non-finite values clamp
/// to zero, fractions are rounded. Anything else becomes zero.
pub mod millis {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(serde_derive::Deserialize)]
    #[serde(untagged)]
    enum RawMillis {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match RawMillis::deserialize(deserializer)? {
            RawMillis::Number(value) => value,
            RawMillis::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
            RawMillis::Other(_) => 0.0,
        };
        if value.is_finite() && value > 0.0 {
            Ok(value.round() as u64)
        } else {
            Ok(0)
        }
    }
}

pub mod optional_string {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

#[cfg(test)]
mod tests {
    use serde_derive::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Timed {
        #[serde(deserialize_with = "super::millis::deserialize")]
        duration: u64,
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        #[serde(default, deserialize_with = "super::optional_string::deserialize")]
        path: String,
    }

    fn duration_of(json: &str) -> u64 {
        serde_json::from_str::<Timed>(json).unwrap().duration
    }

    #[test]
    fn test_integer_duration_is_kept() {
        assert_eq!(duration_of(r#"{"duration": 1200}"#), 1200);
    }

    #[test]
    fn test_fractional_duration_is_rounded() {
        assert_eq!(duration_of(r#"{"duration": 799.6}"#), 800);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        assert_eq!(duration_of(r#"{"duration": -5}"#), 0);
    }

    #[test]
    fn test_numeric_string_duration_is_parsed() {
        assert_eq!(duration_of(r#"{"duration": "12"}"#), 12);
    }

    #[test]
    fn test_unparsable_duration_becomes_zero() {
        assert_eq!(duration_of(r#"{"duration": "fast"}"#), 0);
        assert_eq!(duration_of(r#"{"duration": null}"#), 0);
        assert_eq!(duration_of(r#"{"duration": {"ms": 5}}"#), 0);
    }

    #[test]
    fn test_null_or_missing_string_is_empty() {
        let missing: Named = serde_json::from_str("{}").unwrap();
        let null: Named = serde_json::from_str(r#"{"path": null}"#).unwrap();
        let present: Named = serde_json::from_str(r#"{"path": "shots/a.png"}"#).unwrap();

        assert_eq!(missing.path, "");
        assert_eq!(null.path, "");
        assert_eq!(present.path, "shots/a.png");
    }
}
