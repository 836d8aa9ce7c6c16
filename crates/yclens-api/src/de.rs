//! Tolerant deserializers for protobuf JSON quirks.
//!
//! The gateway serializes protobuf int64 fields as JSON strings
//! (`"size": "10737418240"`). Accept both the string and the bare
//! number form.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Int64Repr {
    Num(i64),
    Str(String),
}

pub(crate) fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Int64Repr::deserialize(deserializer)? {
        Int64Repr::Num(n) => Ok(n),
        Int64Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "super::i64_lenient")]
        size: i64,
    }

    #[test]
    fn accepts_string_and_number() {
        let from_str: Payload = serde_json::from_str(r#"{"size": "10737418240"}"#).unwrap();
        assert_eq!(from_str.size, 10_737_418_240);

        let from_num: Payload = serde_json::from_str(r#"{"size": 4096}"#).unwrap();
        assert_eq!(from_num.size, 4096);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Payload>(r#"{"size": "ten"}"#).is_err());
    }
}
