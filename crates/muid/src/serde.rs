//! Serde support for [`Id`] and [`NullId`].
//!
//! Ids serialize as a quoted string in the process-wide default codec's
//! format. Deserialization additionally accepts a bare integer (taken as
//! the raw value, bypassing text decoding but still deobfuscated) and
//! `null` (mapped to [`Id::NIL`]).

use crate::{Id, NullId, default_codec};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&default_codec().encode(*self))
    }
}

fn reveal(id: Id) -> Id {
    match default_codec().obfuscator() {
        Some(obfuscator) => obfuscator.deobfuscate(id),
        None => id,
    }
}

struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("an id string, an integer, or null")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        default_codec().decode(v).map_err(de::Error::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(reveal(Id::from_raw(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(|raw| reveal(Id::from_raw(raw)))
            .map_err(|_| de::Error::custom("id integer out of range"))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Id::NIL)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor)
    }
}

impl Serialize for NullId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            self.id.serialize(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for NullId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Id>::deserialize(deserializer).map(NullId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // The default codec in this test binary is base58 with no obfuscator.
    const SAMPLE: Id = Id::from_raw(1_234_567_890_123_456_789);

    #[test]
    fn id_serializes_as_a_quoted_string() {
        assert_eq!(
            serde_json::to_value(SAMPLE).unwrap(),
            json!("3sDK21t5nHJ")
        );
    }

    #[test]
    fn id_deserializes_from_a_string() {
        let id: Id = serde_json::from_value(json!("3sDK21t5nHJ")).unwrap();
        assert_eq!(id, SAMPLE);
    }

    #[test]
    fn id_deserializes_from_a_bare_integer() {
        let id: Id = serde_json::from_value(json!(1_234_567_890_123_456_789_i64)).unwrap();
        assert_eq!(id, SAMPLE);
    }

    #[test]
    fn id_deserializes_null_as_nil() {
        let id: Id = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(id, Id::NIL);
    }

    #[test]
    fn id_rejects_garbage() {
        assert!(serde_json::from_value::<Id>(json!("!!!")).is_err());
        assert!(serde_json::from_value::<Id>(json!("")).is_err());
        assert!(serde_json::from_value::<Id>(json!(u64::MAX)).is_err());
        assert!(serde_json::from_value::<Id>(json!({"id": 1})).is_err());
    }

    #[test]
    fn null_id_round_trips() {
        assert_eq!(
            serde_json::to_value(NullId::some(SAMPLE)).unwrap(),
            json!("3sDK21t5nHJ")
        );
        assert_eq!(serde_json::to_value(NullId::NULL).unwrap(), json!(null));

        let present: NullId = serde_json::from_value(json!("3sDK21t5nHJ")).unwrap();
        assert_eq!(present, NullId::some(SAMPLE));
        let absent: NullId = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(absent, NullId::NULL);
    }

    #[test]
    fn ids_nest_in_structs() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Row {
            id: Id,
            parent: NullId,
        }

        let row = Row {
            id: SAMPLE,
            parent: NullId::NULL,
        };
        let text = serde_json::to_string(&row).unwrap();
        assert_eq!(text, r#"{"id":"3sDK21t5nHJ","parent":null}"#);
        assert_eq!(serde_json::from_str::<Row>(&text).unwrap(), row);
    }
}
