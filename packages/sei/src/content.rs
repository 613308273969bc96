//! Governance proposal contents, the payload of a `MsgSubmitProposal`.

use anyhow::Context;
use cosmos_sdk_proto::cosmos::{
    distribution::v1beta1 as distribution, gov::v1beta1 as gov, params::v1beta1 as params,
    upgrade::v1beta1 as upgrade,
};
use serde::{Deserialize, Serialize};

use crate::{
    coin::{coins_from_proto, coins_to_proto},
    wire, Coin,
};

/// A free-form proposal with no on-chain effect.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TextProposal {
    pub title: String,
    pub description: String,
}

impl From<&TextProposal> for gov::TextProposal {
    fn from(content: &TextProposal) -> Self {
        gov::TextProposal {
            title: content.title.clone(),
            description: content.description.clone(),
        }
    }
}

impl From<gov::TextProposal> for TextProposal {
    fn from(content: gov::TextProposal) -> Self {
        TextProposal {
            title: content.title,
            description: content.description,
        }
    }
}

impl_variant!(
    TextProposal,
    "cosmos-sdk/TextProposal",
    "/cosmos.gov.v1beta1.TextProposal",
    gov::TextProposal
);

/// Pay coins out of the community pool.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CommunityPoolSpendProposal {
    pub title: String,
    pub description: String,
    pub recipient: String,
    pub amount: Vec<Coin>,
}

impl From<&CommunityPoolSpendProposal> for distribution::CommunityPoolSpendProposal {
    fn from(content: &CommunityPoolSpendProposal) -> Self {
        distribution::CommunityPoolSpendProposal {
            title: content.title.clone(),
            description: content.description.clone(),
            recipient: content.recipient.clone(),
            amount: coins_to_proto(&content.amount),
        }
    }
}

impl TryFrom<distribution::CommunityPoolSpendProposal> for CommunityPoolSpendProposal {
    type Error = anyhow::Error;

    fn try_from(content: distribution::CommunityPoolSpendProposal) -> anyhow::Result<Self> {
        Ok(CommunityPoolSpendProposal {
            title: content.title,
            description: content.description,
            recipient: content.recipient,
            amount: coins_from_proto(content.amount)?,
        })
    }
}

impl_variant!(
    CommunityPoolSpendProposal,
    "cosmos-sdk/CommunityPoolSpendProposal",
    "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal",
    distribution::CommunityPoolSpendProposal
);

/// One module parameter to overwrite. `value` is the parameter's JSON encoding.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParamChange {
    pub subspace: String,
    pub key: String,
    pub value: String,
}

/// Change module parameters.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParameterChangeProposal {
    pub title: String,
    pub description: String,
    pub changes: Vec<ParamChange>,
}

impl From<&ParameterChangeProposal> for params::ParameterChangeProposal {
    fn from(content: &ParameterChangeProposal) -> Self {
        params::ParameterChangeProposal {
            title: content.title.clone(),
            description: content.description.clone(),
            changes: content
                .changes
                .iter()
                .map(|change| params::ParamChange {
                    subspace: change.subspace.clone(),
                    key: change.key.clone(),
                    value: change.value.clone(),
                })
                .collect(),
        }
    }
}

impl From<params::ParameterChangeProposal> for ParameterChangeProposal {
    fn from(content: params::ParameterChangeProposal) -> Self {
        ParameterChangeProposal {
            title: content.title,
            description: content.description,
            changes: content
                .changes
                .into_iter()
                .map(|change| ParamChange {
                    subspace: change.subspace,
                    key: change.key,
                    value: change.value,
                })
                .collect(),
        }
    }
}

impl_variant!(
    ParameterChangeProposal,
    "cosmos-sdk/ParameterChangeProposal",
    "/cosmos.params.v1beta1.ParameterChangeProposal",
    params::ParameterChangeProposal
);

/// When and how the chain binary is switched.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    /// Block height at which the upgrade happens
    #[serde(with = "crate::json::string_i64")]
    pub height: i64,
    /// Free-form metadata, usually download links for the new binary
    #[serde(default)]
    pub info: String,
}

/// Schedule a chain upgrade.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SoftwareUpgradeProposal {
    pub title: String,
    pub description: String,
    pub plan: Plan,
}

impl From<&SoftwareUpgradeProposal> for upgrade::SoftwareUpgradeProposal {
    fn from(content: &SoftwareUpgradeProposal) -> Self {
        upgrade::SoftwareUpgradeProposal {
            title: content.title.clone(),
            description: content.description.clone(),
            plan: Some(upgrade::Plan {
                name: content.plan.name.clone(),
                time: None,
                height: content.plan.height,
                info: content.plan.info.clone(),
                upgraded_client_state: None,
            }),
        }
    }
}

impl TryFrom<upgrade::SoftwareUpgradeProposal> for SoftwareUpgradeProposal {
    type Error = anyhow::Error;

    fn try_from(content: upgrade::SoftwareUpgradeProposal) -> anyhow::Result<Self> {
        let plan = content.plan.context("Missing upgrade plan")?;
        Ok(SoftwareUpgradeProposal {
            title: content.title,
            description: content.description,
            plan: Plan {
                name: plan.name,
                height: plan.height,
                info: plan.info,
            },
        })
    }
}

impl_variant!(
    SoftwareUpgradeProposal,
    "cosmos-sdk/SoftwareUpgradeProposal",
    "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal",
    upgrade::SoftwareUpgradeProposal
);

/// Cancel a scheduled chain upgrade.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CancelSoftwareUpgradeProposal {
    pub title: String,
    pub description: String,
}

impl From<&CancelSoftwareUpgradeProposal> for upgrade::CancelSoftwareUpgradeProposal {
    fn from(content: &CancelSoftwareUpgradeProposal) -> Self {
        upgrade::CancelSoftwareUpgradeProposal {
            title: content.title.clone(),
            description: content.description.clone(),
        }
    }
}

impl From<upgrade::CancelSoftwareUpgradeProposal> for CancelSoftwareUpgradeProposal {
    fn from(content: upgrade::CancelSoftwareUpgradeProposal) -> Self {
        CancelSoftwareUpgradeProposal {
            title: content.title,
            description: content.description,
        }
    }
}

impl_variant!(
    CancelSoftwareUpgradeProposal,
    "cosmos-sdk/CancelSoftwareUpgradeProposal",
    "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal",
    upgrade::CancelSoftwareUpgradeProposal
);

/// Replace an expired or frozen IBC light client with a substitute.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ClientUpdateProposal {
    pub title: String,
    pub description: String,
    pub subject_client_id: String,
    pub substitute_client_id: String,
}

impl From<&ClientUpdateProposal> for wire::ClientUpdateProposal {
    fn from(content: &ClientUpdateProposal) -> Self {
        wire::ClientUpdateProposal {
            title: content.title.clone(),
            description: content.description.clone(),
            subject_client_id: content.subject_client_id.clone(),
            substitute_client_id: content.substitute_client_id.clone(),
        }
    }
}

impl From<wire::ClientUpdateProposal> for ClientUpdateProposal {
    fn from(content: wire::ClientUpdateProposal) -> Self {
        ClientUpdateProposal {
            title: content.title,
            description: content.description,
            subject_client_id: content.subject_client_id,
            substitute_client_id: content.substitute_client_id,
        }
    }
}

impl_variant!(
    ClientUpdateProposal,
    "cosmos-sdk/ClientUpdateProposal",
    "/ibc.core.client.v1.ClientUpdateProposal",
    wire::ClientUpdateProposal
);

variant_family! {
    /// Any governance proposal content.
    pub enum Content ("proposal content") {
        TextProposal(TextProposal),
        CommunityPoolSpendProposal(CommunityPoolSpendProposal),
        ParameterChangeProposal(ParameterChangeProposal),
        SoftwareUpgradeProposal(SoftwareUpgradeProposal),
        CancelSoftwareUpgradeProposal(CancelSoftwareUpgradeProposal),
        ClientUpdateProposal(ClientUpdateProposal),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Codec;

    #[test]
    fn upgrade_plan_height_is_a_string() {
        let codec = Codec::new().unwrap();
        let content = codec
            .decode_content(json!({
                "type": "cosmos-sdk/SoftwareUpgradeProposal",
                "value": {
                    "title": "v3.0.0",
                    "description": "Upgrade to v3.0.0",
                    "plan": {"name": "3.0.0", "height": "12345678", "info": ""},
                }
            }))
            .unwrap();
        let Content::SoftwareUpgradeProposal(upgrade) = &content else {
            panic!("Unexpected content {content:?}");
        };
        assert_eq!(upgrade.plan.height, 12345678);
        let envelope = codec.encode_content(&content).unwrap();
        assert_eq!(envelope.value["plan"]["height"], json!("12345678"));
    }

    #[test]
    fn missing_plan_is_malformed() {
        let codec = Codec::new().unwrap();
        let wire = upgrade::SoftwareUpgradeProposal {
            title: "t".to_owned(),
            description: "d".to_owned(),
            plan: None,
        };
        let err = codec
            .decode_content_any(
                "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal",
                &prost::Message::encode_to_vec(&wire),
            )
            .unwrap_err();
        assert!(matches!(err, crate::RegistryError::MalformedPayload { .. }));
    }
}
