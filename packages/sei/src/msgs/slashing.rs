use cosmos_sdk_proto::cosmos::slashing::v1beta1 as proto;
use serde::{Deserialize, Serialize};

/// Release a jailed validator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgUnjail {
    pub validator_addr: String,
}

impl From<&MsgUnjail> for proto::MsgUnjail {
    fn from(msg: &MsgUnjail) -> Self {
        proto::MsgUnjail {
            validator_addr: msg.validator_addr.clone(),
        }
    }
}

impl From<proto::MsgUnjail> for MsgUnjail {
    fn from(msg: proto::MsgUnjail) -> Self {
        MsgUnjail {
            validator_addr: msg.validator_addr,
        }
    }
}

impl_variant!(
    MsgUnjail,
    "cosmos-sdk/MsgUnjail",
    "/cosmos.slashing.v1beta1.MsgUnjail",
    proto::MsgUnjail
);
