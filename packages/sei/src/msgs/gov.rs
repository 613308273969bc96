//! Governance proposals, deposits and votes.

use std::{fmt::Display, str::FromStr};

use anyhow::{Context, Result};
use cosmos_sdk_proto::cosmos::gov::v1beta1 as proto;
use serde::{de::Visitor, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    coin::{coins_from_proto, coins_to_proto},
    registry::{Family, Variant},
    Codec, Coin, Content,
};

/// Submit a governance proposal with an initial deposit.
///
/// The proposal [Content] is resolved through the content registry of the
/// [Codec] used to decode this message.
#[derive(Clone, PartialEq, Debug)]
pub struct MsgSubmitProposal {
    pub content: Content,
    pub initial_deposit: Vec<Coin>,
    pub proposer: String,
}

#[derive(Serialize)]
struct MsgSubmitProposalJson<'a> {
    content: crate::JsonEnvelope,
    initial_deposit: &'a [Coin],
    proposer: &'a str,
}

#[derive(Deserialize)]
struct MsgSubmitProposalJsonIn {
    content: Value,
    #[serde(default)]
    initial_deposit: Vec<Coin>,
    proposer: String,
}

impl Variant for MsgSubmitProposal {
    const TYPE_AMINO: &'static str = "cosmos-sdk/MsgSubmitProposal";
    const TYPE_URL: &'static str = "/cosmos.gov.v1beta1.MsgSubmitProposal";
    type Proto = proto::MsgSubmitProposal;

    fn to_proto(&self) -> Result<proto::MsgSubmitProposal> {
        Ok(proto::MsgSubmitProposal {
            content: Some(self.content.pack_any()?),
            initial_deposit: coins_to_proto(&self.initial_deposit),
            proposer: self.proposer.clone(),
        })
    }

    fn from_proto(msg: proto::MsgSubmitProposal, codec: &Codec) -> Result<Self> {
        let content = msg.content.context("Missing proposal content")?;
        Ok(MsgSubmitProposal {
            content: codec.nested()?.unpack_content(&content)?,
            initial_deposit: coins_from_proto(msg.initial_deposit)?,
            proposer: msg.proposer,
        })
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(MsgSubmitProposalJson {
            content: self.content.to_json_envelope()?,
            initial_deposit: &self.initial_deposit,
            proposer: &self.proposer,
        })
    }

    fn from_json(value: Value, codec: &Codec) -> Result<Self> {
        let MsgSubmitProposalJsonIn {
            content,
            initial_deposit,
            proposer,
        } = serde_json::from_value(value)?;
        Ok(MsgSubmitProposal {
            content: codec.nested()?.decode_content_tagged(content)?,
            initial_deposit,
            proposer,
        })
    }
}

/// Add to the deposit of a proposal.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgDeposit {
    #[serde(with = "crate::json::string_u64")]
    pub proposal_id: u64,
    pub depositor: String,
    pub amount: Vec<Coin>,
}

impl From<&MsgDeposit> for proto::MsgDeposit {
    fn from(msg: &MsgDeposit) -> Self {
        proto::MsgDeposit {
            proposal_id: msg.proposal_id,
            depositor: msg.depositor.clone(),
            amount: coins_to_proto(&msg.amount),
        }
    }
}

impl TryFrom<proto::MsgDeposit> for MsgDeposit {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgDeposit) -> Result<Self> {
        Ok(MsgDeposit {
            proposal_id: msg.proposal_id,
            depositor: msg.depositor,
            amount: coins_from_proto(msg.amount)?,
        })
    }
}

impl_variant!(
    MsgDeposit,
    "cosmos-sdk/MsgDeposit",
    "/cosmos.gov.v1beta1.MsgDeposit",
    proto::MsgDeposit
);

/// A ballot choice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum VoteOption {
    Unspecified,
    Yes,
    Abstain,
    No,
    NoWithVeto,
}

impl VoteOption {
    pub fn all() -> [VoteOption; 5] {
        [
            VoteOption::Unspecified,
            VoteOption::Yes,
            VoteOption::Abstain,
            VoteOption::No,
            VoteOption::NoWithVeto,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VoteOption::Unspecified => "VOTE_OPTION_UNSPECIFIED",
            VoteOption::Yes => "VOTE_OPTION_YES",
            VoteOption::Abstain => "VOTE_OPTION_ABSTAIN",
            VoteOption::No => "VOTE_OPTION_NO",
            VoteOption::NoWithVeto => "VOTE_OPTION_NO_WITH_VETO",
        }
    }
}

impl From<VoteOption> for i32 {
    fn from(option: VoteOption) -> Self {
        match option {
            VoteOption::Unspecified => 0,
            VoteOption::Yes => 1,
            VoteOption::Abstain => 2,
            VoteOption::No => 3,
            VoteOption::NoWithVeto => 4,
        }
    }
}

impl TryFrom<i32> for VoteOption {
    type Error = anyhow::Error;

    fn try_from(value: i32) -> Result<Self> {
        VoteOption::all()
            .into_iter()
            .find(|option| i32::from(*option) == value)
            .with_context(|| format!("Invalid vote option {value}"))
    }
}

impl Display for VoteOption {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the protobuf enum names, with or without the `VOTE_OPTION_`
/// prefix and in any case, so `yes` and `VOTE_OPTION_YES` are equivalent.
impl FromStr for VoteOption {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_ascii_uppercase();
        let name = upper.strip_prefix("VOTE_OPTION_").unwrap_or(&upper);
        VoteOption::all()
            .into_iter()
            .find(|option| option.as_str().strip_prefix("VOTE_OPTION_") == Some(name))
            .with_context(|| format!("Invalid vote option {s:?}"))
    }
}

impl Serialize for VoteOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VoteOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(VoteOptionVisitor)
    }
}

struct VoteOptionVisitor;

impl<'de> Visitor<'de> for VoteOptionVisitor {
    type Value = VoteOption;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("vote option name or number")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(|e| E::custom(e))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(v)
            .map_err(E::custom)
            .and_then(|v| VoteOption::try_from(v).map_err(|e| E::custom(e)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(v)
            .map_err(E::custom)
            .and_then(|v| VoteOption::try_from(v).map_err(|e| E::custom(e)))
    }
}

/// Cast a vote on a proposal.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgVote {
    #[serde(with = "crate::json::string_u64")]
    pub proposal_id: u64,
    pub voter: String,
    pub option: VoteOption,
}

impl From<&MsgVote> for proto::MsgVote {
    fn from(msg: &MsgVote) -> Self {
        proto::MsgVote {
            proposal_id: msg.proposal_id,
            voter: msg.voter.clone(),
            option: msg.option.into(),
        }
    }
}

impl TryFrom<proto::MsgVote> for MsgVote {
    type Error = anyhow::Error;

    fn try_from(msg: proto::MsgVote) -> Result<Self> {
        Ok(MsgVote {
            proposal_id: msg.proposal_id,
            voter: msg.voter,
            option: msg.option.try_into()?,
        })
    }
}

impl_variant!(
    MsgVote,
    "cosmos-sdk/MsgVote",
    "/cosmos.gov.v1beta1.MsgVote",
    proto::MsgVote
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::content::TextProposal;

    #[test]
    fn vote_option_forms() {
        assert_eq!("yes".parse::<VoteOption>().unwrap(), VoteOption::Yes);
        assert_eq!(
            "VOTE_OPTION_NO_WITH_VETO".parse::<VoteOption>().unwrap(),
            VoteOption::NoWithVeto
        );
        "maybe".parse::<VoteOption>().unwrap_err();
        assert_eq!(
            serde_json::from_value::<VoteOption>(json!(3)).unwrap(),
            VoteOption::No
        );
        serde_json::from_value::<VoteOption>(json!(9)).unwrap_err();
        assert_eq!(
            serde_json::to_value(VoteOption::Abstain).unwrap(),
            json!("VOTE_OPTION_ABSTAIN")
        );
    }

    #[test]
    fn vote_from_proto_rejects_unknown_option() {
        MsgVote::try_from(proto::MsgVote {
            proposal_id: 1,
            voter: "sei1voter".to_owned(),
            option: 17,
        })
        .unwrap_err();
    }

    #[test]
    fn submit_proposal_nests_content() {
        let codec = Codec::new().unwrap();
        let msg = MsgSubmitProposal {
            content: TextProposal {
                title: "Raise the gas limit".to_owned(),
                description: "Blocks are full".to_owned(),
            }
            .into(),
            initial_deposit: vec![Coin::new("usei", 10_000_000)],
            proposer: "sei1proposer".to_owned(),
        };

        let json = msg.to_json().unwrap();
        assert_eq!(json["content"]["type"], "cosmos-sdk/TextProposal");
        assert_eq!(MsgSubmitProposal::from_json(json, &codec).unwrap(), msg);

        let proto = msg.to_proto().unwrap();
        assert_eq!(
            proto.content.as_ref().unwrap().type_url,
            "/cosmos.gov.v1beta1.TextProposal"
        );
        assert_eq!(MsgSubmitProposal::from_proto(proto, &codec).unwrap(), msg);
    }

    #[test]
    fn submit_proposal_rejects_message_as_content() {
        let codec = Codec::new().unwrap();
        MsgSubmitProposal::from_json(
            json!({
                "content": {"type": "cosmos-sdk/MsgSend", "value": {}},
                "initial_deposit": [],
                "proposer": "sei1proposer",
            }),
            &codec,
        )
        .unwrap_err();
    }
}
