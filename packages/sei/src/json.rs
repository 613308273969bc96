//! Serde helpers for the JSON conventions used by amino and the LCD.
//!
//! Integers wider than 53 bits travel as strings, byte arrays as standard
//! base64, and `Any` values that are not resolved through a registry keep
//! whichever shape they arrived in (see [RawAny]).

use std::{fmt::Display, marker::PhantomData, str::FromStr};

use base64::Engine;
use serde::{
    de::Visitor, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::{Map, Value};

use crate::registry::JsonEnvelope;

/// An `Any` value carried without resolving its type URL.
///
/// Protobuf sources give the encoded payload. JSON sources give the payload
/// already expanded, either in the LCD's `{"@type": url, ...fields}` form or
/// as an amino `{"type": name, "value": ...}` envelope. Expanded payloads
/// are kept as received and serialize back to the same shape.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RawAny {
    /// Encoded payload, rendered as `{"type_url": ..., "value": <base64>}`
    Binary { type_url: String, value: Vec<u8> },
    /// LCD form, `fields` excludes the `@type` key
    ProtoJson {
        type_url: String,
        fields: Map<String, Value>,
    },
    /// Amino envelope
    Amino(JsonEnvelope),
}

impl RawAny {
    /// Type URL or amino name, whichever the payload was tagged with.
    pub fn discriminator(&self) -> &str {
        match self {
            RawAny::Binary { type_url, .. } | RawAny::ProtoJson { type_url, .. } => type_url,
            RawAny::Amino(envelope) => &envelope.type_,
        }
    }

    /// The protobuf form. Only available when the payload arrived as bytes.
    pub fn to_any(&self) -> anyhow::Result<prost_types::Any> {
        match self {
            RawAny::Binary { type_url, value } => Ok(prost_types::Any {
                type_url: type_url.clone(),
                value: value.clone(),
            }),
            RawAny::ProtoJson { .. } | RawAny::Amino(_) => anyhow::bail!(
                "Cannot encode {} to protobuf, it was received as JSON",
                self.discriminator()
            ),
        }
    }
}

impl From<prost_types::Any> for RawAny {
    fn from(prost_types::Any { type_url, value }: prost_types::Any) -> Self {
        RawAny::Binary { type_url, value }
    }
}

#[derive(Serialize, Deserialize)]
struct BinaryAny {
    type_url: String,
    #[serde(default, with = "base64_bytes")]
    value: Vec<u8>,
}

impl Serialize for RawAny {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawAny::Binary { type_url, value } => BinaryAny {
                type_url: type_url.clone(),
                value: value.clone(),
            }
            .serialize(serializer),
            RawAny::ProtoJson { type_url, fields } => {
                let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
                map.serialize_entry("@type", type_url)?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            RawAny::Amino(envelope) => envelope.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RawAny {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        if let Some(type_url) = map.remove("@type") {
            let Value::String(type_url) = type_url else {
                return Err(D::Error::custom(format!("Invalid @type: {type_url}")));
            };
            return Ok(RawAny::ProtoJson {
                type_url,
                fields: map,
            });
        }
        if map.contains_key("type_url") {
            let BinaryAny { type_url, value } =
                serde_json::from_value(Value::Object(map)).map_err(D::Error::custom)?;
            return Ok(RawAny::Binary { type_url, value });
        }
        if map.len() == 2 && map.contains_key("type") && map.contains_key("value") {
            return serde_json::from_value(Value::Object(map))
                .map(RawAny::Amino)
                .map_err(D::Error::custom);
        }
        Err(D::Error::custom(format!(
            "Expected an Any with @type, type_url, or type and value, found keys {:?}",
            map.keys().collect::<Vec<_>>()
        )))
    }
}

struct IntVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for IntVisitor<T>
where
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    <T as FromStr>::Err: Display,
{
    type Value = T;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse()
            .map_err(|e| E::custom(format!("Invalid integer {v:?}: {e}")))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        T::try_from(v).map_err(|_| E::custom(format!("Integer out of range: {v}")))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        T::try_from(v).map_err(|_| E::custom(format!("Integer out of range: {v}")))
    }
}

fn deserialize_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    <T as FromStr>::Err: Display,
{
    deserializer.deserialize_any(IntVisitor(PhantomData))
}

/// `u64` as a JSON string, accepting numbers on input.
pub mod string_u64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        deserialize_int(deserializer)
    }
}

/// Optional `u64` as a JSON string, accepting numbers or `null` on input.
pub mod option_string_u64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super::string_u64")] u64);
        Option::<Wrapper>::deserialize(deserializer).map(|x| x.map(|Wrapper(x)| x))
    }
}

/// `i64` as a JSON string, accepting numbers on input.
pub mod string_i64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserialize_int(deserializer)
    }
}

/// `u128` as a JSON string, accepting numbers on input.
pub mod string_u128 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        deserialize_int(deserializer)
    }
}

/// Byte arrays as standard base64.
pub mod base64_bytes {
    use super::*;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(s)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Wide {
        #[serde(with = "string_u64")]
        small: u64,
        #[serde(with = "string_u128")]
        big: u128,
        #[serde(with = "string_i64")]
        signed: i64,
        #[serde(with = "base64_bytes")]
        bytes: Vec<u8>,
    }

    #[test]
    fn integers_render_as_strings() {
        let wide = Wide {
            small: 7,
            big: u128::MAX,
            signed: -3,
            bytes: b"sei".to_vec(),
        };
        let value = serde_json::to_value(&wide).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "small": "7",
                "big": "340282366920938463463374607431768211455",
                "signed": "-3",
                "bytes": "c2Vp",
            })
        );
        assert_eq!(serde_json::from_value::<Wide>(value).unwrap(), wide);
    }

    #[test]
    fn integers_accept_numbers() {
        let wide: Wide = serde_json::from_value(serde_json::json!({
            "small": 7,
            "big": 12,
            "signed": -3,
            "bytes": "",
        }))
        .unwrap();
        assert_eq!(wide.small, 7);
        assert_eq!(wide.big, 12);
        assert_eq!(wide.signed, -3);
        assert!(wide.bytes.is_empty());
    }

    #[test]
    fn rejects_out_of_range() {
        serde_json::from_value::<Wide>(serde_json::json!({
            "small": -1,
            "big": "1",
            "signed": "1",
            "bytes": "",
        }))
        .unwrap_err();
        serde_json::from_value::<Wide>(serde_json::json!({
            "small": "12abc",
            "big": "1",
            "signed": "1",
            "bytes": "",
        }))
        .unwrap_err();
    }

    #[test]
    fn raw_any_keeps_lcd_form() {
        let input = serde_json::json!({
            "@type": "/cosmos.authz.v1beta1.GenericAuthorization",
            "msg": "/cosmos.bank.v1beta1.MsgSend",
        });
        let any: RawAny = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(
            any.discriminator(),
            "/cosmos.authz.v1beta1.GenericAuthorization"
        );
        assert_eq!(serde_json::to_value(&any).unwrap(), input);
        let err = any.to_any().unwrap_err();
        assert!(err.to_string().contains("received as JSON"));
    }

    #[test]
    fn raw_any_keeps_amino_form() {
        let input = serde_json::json!({
            "type": "tendermint/PubKeyEd25519",
            "value": "A6z8bVUXBAoJ3L+qvwMsQN3ojVMVp3qSv2Pb+3YFddJK",
        });
        let any: RawAny = serde_json::from_value(input.clone()).unwrap();
        assert!(matches!(&any, RawAny::Amino(envelope) if envelope.type_ == "tendermint/PubKeyEd25519"));
        assert_eq!(serde_json::to_value(&any).unwrap(), input);
        any.to_any().unwrap_err();
    }

    #[test]
    fn raw_any_binary_form() {
        let any: RawAny = serde_json::from_value(serde_json::json!({
            "type_url": "/cosmos.crypto.ed25519.PubKey",
            "value": "c2Vp",
        }))
        .unwrap();
        assert_eq!(
            any.to_any().unwrap(),
            prost_types::Any {
                type_url: "/cosmos.crypto.ed25519.PubKey".to_owned(),
                value: b"sei".to_vec(),
            }
        );
        serde_json::from_value::<RawAny>(serde_json::json!({"msg": "x"})).unwrap_err();
        serde_json::from_value::<RawAny>(serde_json::json!({"@type": 5})).unwrap_err();
    }
}
