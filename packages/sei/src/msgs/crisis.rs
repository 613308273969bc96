use serde::{Deserialize, Serialize};

use crate::wire;

/// Ask the chain to check one of its registered invariants.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MsgVerifyInvariant {
    pub sender: String,
    pub invariant_module_name: String,
    pub invariant_route: String,
}

impl From<&MsgVerifyInvariant> for wire::MsgVerifyInvariant {
    fn from(msg: &MsgVerifyInvariant) -> Self {
        wire::MsgVerifyInvariant {
            sender: msg.sender.clone(),
            invariant_module_name: msg.invariant_module_name.clone(),
            invariant_route: msg.invariant_route.clone(),
        }
    }
}

impl From<wire::MsgVerifyInvariant> for MsgVerifyInvariant {
    fn from(msg: wire::MsgVerifyInvariant) -> Self {
        MsgVerifyInvariant {
            sender: msg.sender,
            invariant_module_name: msg.invariant_module_name,
            invariant_route: msg.invariant_route,
        }
    }
}

impl_variant!(
    MsgVerifyInvariant,
    "cosmos-sdk/MsgVerifyInvariant",
    "/cosmos.crisis.v1beta1.MsgVerifyInvariant",
    wire::MsgVerifyInvariant
);
