//! Authorizations: letting one account act on behalf of another.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use cosmos_sdk_proto::cosmos::authz::v1beta1 as proto;
use prost_types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    json::RawAny,
    registry::{Family, Variant},
    Codec, Msg,
};

/// Execute messages on behalf of their signers, using previously granted authorizations.
///
/// The inner messages are themselves polymorphic and are resolved through the
/// message registry of the [Codec] used to decode this one.
#[derive(Clone, PartialEq, Debug)]
pub struct MsgExec {
    pub grantee: String,
    pub msgs: Vec<Msg>,
}

#[derive(Serialize)]
struct MsgExecJson<'a> {
    grantee: &'a str,
    msgs: Vec<crate::JsonEnvelope>,
}

#[derive(Deserialize)]
struct MsgExecJsonIn {
    grantee: String,
    msgs: Vec<Value>,
}

impl Variant for MsgExec {
    const TYPE_AMINO: &'static str = "cosmos-sdk/MsgExec";
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.MsgExec";
    type Proto = proto::MsgExec;

    fn to_proto(&self) -> Result<proto::MsgExec> {
        let msgs = self
            .msgs
            .iter()
            .enumerate()
            .map(|(idx, msg)| {
                msg.pack_any()
                    .with_context(|| format!("Unable to encode inner message #{idx}"))
            })
            .collect::<Result<_>>()?;
        Ok(proto::MsgExec {
            grantee: self.grantee.clone(),
            msgs,
        })
    }

    fn from_proto(msg: proto::MsgExec, codec: &Codec) -> Result<Self> {
        let codec = codec.nested()?;
        let msgs = msg
            .msgs
            .iter()
            .enumerate()
            .map(|(idx, any)| {
                codec
                    .unpack_msg(any)
                    .with_context(|| format!("Unable to decode inner message #{idx}"))
            })
            .collect::<Result<_>>()?;
        Ok(MsgExec {
            grantee: msg.grantee,
            msgs,
        })
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(MsgExecJson {
            grantee: &self.grantee,
            msgs: self
                .msgs
                .iter()
                .map(Family::to_json_envelope)
                .collect::<serde_json::Result<_>>()?,
        })
    }

    fn from_json(value: Value, codec: &Codec) -> Result<Self> {
        let MsgExecJsonIn { grantee, msgs } = serde_json::from_value(value)?;
        let codec = codec.nested()?;
        let msgs = msgs
            .into_iter()
            .enumerate()
            .map(|(idx, msg)| {
                codec
                    .decode_msg_tagged(msg)
                    .with_context(|| format!("Unable to decode inner message #{idx}"))
            })
            .collect::<Result<_>>()?;
        Ok(MsgExec { grantee, msgs })
    }
}

/// A granted authorization and its optional expiry.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Grant {
    /// The authorization, e.g. a `GenericAuthorization`, carried undecoded
    /// in whichever form it arrived
    pub authorization: RawAny,
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
}

fn datetime_to_timestamp(x: DateTime<Utc>) -> Result<Timestamp> {
    Ok(Timestamp {
        seconds: x.timestamp(),
        nanos: x.timestamp_subsec_nanos().try_into()?,
    })
}

fn timestamp_to_datetime(Timestamp { seconds, nanos }: Timestamp) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, nanos.try_into()?)
        .single()
        .with_context(|| format!("Invalid timestamp {seconds}s {nanos}ns"))
}

/// Grant an authorization from `granter` to `grantee`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgGrant {
    pub granter: String,
    pub grantee: String,
    pub grant: Grant,
}

impl Variant for MsgGrant {
    const TYPE_AMINO: &'static str = "cosmos-sdk/MsgGrant";
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.MsgGrant";
    type Proto = proto::MsgGrant;

    fn to_proto(&self) -> Result<proto::MsgGrant> {
        Ok(proto::MsgGrant {
            granter: self.granter.clone(),
            grantee: self.grantee.clone(),
            grant: Some(proto::Grant {
                authorization: Some(self.grant.authorization.to_any()?),
                expiration: self
                    .grant
                    .expiration
                    .map(datetime_to_timestamp)
                    .transpose()?,
            }),
        })
    }

    fn from_proto(msg: proto::MsgGrant, _: &Codec) -> Result<Self> {
        let grant = msg.grant.context("Missing grant")?;
        Ok(MsgGrant {
            granter: msg.granter,
            grantee: msg.grantee,
            grant: Grant {
                authorization: grant
                    .authorization
                    .context("Missing authorization")?
                    .into(),
                expiration: grant.expiration.map(timestamp_to_datetime).transpose()?,
            },
        })
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn from_json(value: Value, _: &Codec) -> Result<Self> {
        serde_json::from_value(value).map_err(anyhow::Error::from)
    }
}

/// Revoke all authorizations for one message type.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgRevoke {
    pub granter: String,
    pub grantee: String,
    pub msg_type_url: String,
}

impl From<&MsgRevoke> for proto::MsgRevoke {
    fn from(msg: &MsgRevoke) -> Self {
        proto::MsgRevoke {
            granter: msg.granter.clone(),
            grantee: msg.grantee.clone(),
            msg_type_url: msg.msg_type_url.clone(),
        }
    }
}

impl From<proto::MsgRevoke> for MsgRevoke {
    fn from(msg: proto::MsgRevoke) -> Self {
        MsgRevoke {
            granter: msg.granter,
            grantee: msg.grantee,
            msg_type_url: msg.msg_type_url,
        }
    }
}

impl_variant!(
    MsgRevoke,
    "cosmos-sdk/MsgRevoke",
    "/cosmos.authz.v1beta1.MsgRevoke",
    proto::MsgRevoke
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{msgs::bank::MsgSend, Coin};

    fn inner_send() -> MsgSend {
        MsgSend {
            from_address: "sei1granter".to_owned(),
            to_address: "sei1recipient".to_owned(),
            amount: vec![Coin::new("usei", 42)],
        }
    }

    #[test]
    fn exec_nests_through_the_registry() {
        let codec = Codec::new().unwrap();
        let exec = MsgExec {
            grantee: "sei1grantee".to_owned(),
            msgs: vec![inner_send().into()],
        };

        let json = exec.to_json().unwrap();
        assert_eq!(json["msgs"][0]["type"], "cosmos-sdk/MsgSend");
        assert_eq!(MsgExec::from_json(json, &codec).unwrap(), exec);

        let proto = exec.to_proto().unwrap();
        assert_eq!(proto.msgs[0].type_url, "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(MsgExec::from_proto(proto, &codec).unwrap(), exec);
    }

    #[test]
    fn exec_accepts_proto_json_inner_messages() {
        let codec = Codec::new().unwrap();
        let exec = MsgExec::from_json(
            json!({
                "grantee": "sei1grantee",
                "msgs": [{
                    "@type": "/cosmos.bank.v1beta1.MsgSend",
                    "from_address": "sei1granter",
                    "to_address": "sei1recipient",
                    "amount": [{"denom": "usei", "amount": "42"}],
                }]
            }),
            &codec,
        )
        .unwrap();
        assert_eq!(exec.msgs, vec![Msg::from(inner_send())]);
    }

    #[test]
    fn exec_rejects_unknown_inner_message() {
        let codec = Codec::new().unwrap();
        MsgExec::from_json(
            json!({
                "grantee": "sei1grantee",
                "msgs": [{"type": "bogus/NotReal", "value": {}}]
            }),
            &codec,
        )
        .unwrap_err();
    }

    #[test]
    fn grant_expiration_roundtrip() {
        let codec = Codec::new().unwrap();
        let grant = MsgGrant {
            granter: "sei1granter".to_owned(),
            grantee: "sei1grantee".to_owned(),
            grant: Grant {
                authorization: RawAny::Binary {
                    type_url: "/cosmos.authz.v1beta1.GenericAuthorization".to_owned(),
                    value: vec![10, 3, 102, 111, 111],
                },
                expiration: Some("2030-01-02T03:04:05.123456789Z".parse().unwrap()),
            },
        };
        let json = grant.to_json().unwrap();
        assert_eq!(
            json["grant"]["expiration"],
            json!("2030-01-02T03:04:05.123456789Z")
        );
        assert_eq!(MsgGrant::from_json(json, &codec).unwrap(), grant);
        assert_eq!(
            MsgGrant::from_proto(grant.to_proto().unwrap(), &codec).unwrap(),
            grant
        );
    }

    #[test]
    fn lcd_grant_decodes() {
        let codec = Codec::new().unwrap();
        let msg = codec
            .decode_msg_tagged(json!({
                "@type": "/cosmos.authz.v1beta1.MsgGrant",
                "granter": "sei1granter",
                "grantee": "sei1grantee",
                "grant": {
                    "authorization": {
                        "@type": "/cosmos.authz.v1beta1.GenericAuthorization",
                        "msg": "/cosmos.bank.v1beta1.MsgSend",
                    },
                    "expiration": "2030-01-02T03:04:05Z",
                },
            }))
            .unwrap();
        let Msg::MsgGrant(grant) = &msg else {
            panic!("Unexpected message {msg:?}");
        };
        assert_eq!(
            grant.grant.authorization,
            RawAny::ProtoJson {
                type_url: "/cosmos.authz.v1beta1.GenericAuthorization".to_owned(),
                fields: json!({"msg": "/cosmos.bank.v1beta1.MsgSend"})
                    .as_object()
                    .unwrap()
                    .clone(),
            }
        );
        let envelope = codec.encode_msg(&msg).unwrap();
        assert_eq!(
            envelope.value["grant"]["authorization"]["@type"],
            "/cosmos.authz.v1beta1.GenericAuthorization"
        );
        codec.pack_msg(&msg).unwrap_err();
    }

    #[test]
    fn amino_grant_decodes() {
        let codec = Codec::new().unwrap();
        let msg = codec
            .decode_msg(json!({
                "type": "cosmos-sdk/MsgGrant",
                "value": {
                    "granter": "sei1granter",
                    "grantee": "sei1grantee",
                    "grant": {
                        "authorization": {
                            "type": "cosmos-sdk/GenericAuthorization",
                            "value": {"msg": "/cosmos.bank.v1beta1.MsgSend"},
                        },
                    },
                },
            }))
            .unwrap();
        let Msg::MsgGrant(grant) = &msg else {
            panic!("Unexpected message {msg:?}");
        };
        assert_eq!(
            grant.grant.authorization.discriminator(),
            "cosmos-sdk/GenericAuthorization"
        );
        assert_eq!(grant.grant.expiration, None);
    }

    #[test]
    fn exec_with_json_only_inner_payload_does_not_pack() {
        let codec = Codec::new().unwrap();
        let exec = MsgExec {
            grantee: "sei1grantee".to_owned(),
            msgs: vec![MsgGrant {
                granter: "sei1granter".to_owned(),
                grantee: "sei1grantee".to_owned(),
                grant: Grant {
                    authorization: serde_json::from_value(json!({
                        "@type": "/cosmos.authz.v1beta1.GenericAuthorization",
                        "msg": "/cosmos.bank.v1beta1.MsgSend",
                    }))
                    .unwrap(),
                    expiration: None,
                },
            }
            .into()],
        };
        let err = exec.to_proto().unwrap_err();
        assert!(format!("{err:#}").contains("inner message #0"));
    }

    fn nest_proto(depth: usize) -> proto::MsgExec {
        let mut exec = proto::MsgExec {
            grantee: "sei1grantee".to_owned(),
            msgs: vec![Msg::from(inner_send()).pack_any().unwrap()],
        };
        for _ in 1..depth {
            exec = proto::MsgExec {
                grantee: "sei1grantee".to_owned(),
                msgs: vec![prost_types::Any {
                    type_url: MsgExec::TYPE_URL.to_owned(),
                    value: prost::Message::encode_to_vec(&exec),
                }],
            };
        }
        exec
    }

    fn nest_json(depth: usize) -> Value {
        let mut exec = json!({"type": "cosmos-sdk/MsgSend", "value": inner_send().to_json().unwrap()});
        for _ in 0..depth {
            exec = json!({
                "type": "cosmos-sdk/MsgExec",
                "value": {"grantee": "sei1grantee", "msgs": [exec]},
            });
        }
        exec
    }

    #[test]
    fn exec_nesting_within_limit_decodes() {
        let codec = Codec::new().unwrap();
        let bytes = prost::Message::encode_to_vec(&nest_proto(Codec::MAX_NESTING));
        codec
            .decode_msg_any(MsgExec::TYPE_URL, &bytes)
            .unwrap();
        codec.decode_msg(nest_json(Codec::MAX_NESTING)).unwrap();
    }

    #[test]
    fn exec_nesting_beyond_limit_is_malformed() {
        let codec = Codec::new().unwrap();
        let bytes = prost::Message::encode_to_vec(&nest_proto(Codec::MAX_NESTING + 8));
        let err = codec.decode_msg_any(MsgExec::TYPE_URL, &bytes).unwrap_err();
        assert!(matches!(err, crate::RegistryError::MalformedPayload { .. }));
        assert!(format!("{:#}", anyhow::Error::from(err)).contains("levels deep"));

        assert!(matches!(
            codec.decode_msg(nest_json(Codec::MAX_NESTING + 1)),
            Err(crate::RegistryError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn deep_exec_does_not_overflow_the_stack() {
        let codec = Codec::new().unwrap();
        let bytes = prost::Message::encode_to_vec(&nest_proto(2_000));
        codec.decode_msg_any(MsgExec::TYPE_URL, &bytes).unwrap_err();
    }
}
