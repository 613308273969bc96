//! Transaction messages understood by the Sei chain.
//!
//! Each submodule holds the messages of one chain module. The [Msg] enum is
//! the closed set of all of them, and its declaration below is the single
//! list from which the message registry is built.

pub mod authz;
pub mod bank;
pub mod crisis;
pub mod distribution;
pub mod feegrant;
pub mod gov;
pub mod ibc;
pub mod ibc_transfer;
pub mod slashing;
pub mod staking;
pub mod vesting;
pub mod wasm;

variant_family! {
    /// Any transaction message.
    pub enum Msg ("message") {
        MsgCreateVestingAccount(vesting::MsgCreateVestingAccount),
        MsgCreatePeriodicVestingAccount(vesting::MsgCreatePeriodicVestingAccount),
        MsgDonateAllVestingTokens(vesting::MsgDonateAllVestingTokens),
        MsgExec(authz::MsgExec),
        MsgGrant(authz::MsgGrant),
        MsgRevoke(authz::MsgRevoke),
        MsgSend(bank::MsgSend),
        MsgMultiSend(bank::MsgMultiSend),
        MsgFundCommunityPool(distribution::MsgFundCommunityPool),
        MsgSetWithdrawAddress(distribution::MsgSetWithdrawAddress),
        MsgWithdrawDelegatorReward(distribution::MsgWithdrawDelegatorReward),
        MsgWithdrawValidatorCommission(distribution::MsgWithdrawValidatorCommission),
        MsgGrantAllowance(feegrant::MsgGrantAllowance),
        MsgRevokeAllowance(feegrant::MsgRevokeAllowance),
        MsgDeposit(gov::MsgDeposit),
        MsgSubmitProposal(gov::MsgSubmitProposal),
        MsgVote(gov::MsgVote),
        MsgUnjail(slashing::MsgUnjail),
        MsgBeginRedelegate(staking::MsgBeginRedelegate),
        MsgCreateValidator(staking::MsgCreateValidator),
        MsgDelegate(staking::MsgDelegate),
        MsgEditValidator(staking::MsgEditValidator),
        MsgUndelegate(staking::MsgUndelegate),
        MsgStoreCode(wasm::MsgStoreCode),
        MsgInstantiateContract(wasm::MsgInstantiateContract),
        MsgExecuteContract(wasm::MsgExecuteContract),
        MsgMigrateContract(wasm::MsgMigrateContract),
        MsgUpdateAdmin(wasm::MsgUpdateAdmin),
        MsgClearAdmin(wasm::MsgClearAdmin),
        MsgCreateClient(ibc::MsgCreateClient),
        MsgUpdateClient(ibc::MsgUpdateClient),
        MsgUpgradeClient(ibc::MsgUpgradeClient),
        MsgSubmitMisbehaviour(ibc::MsgSubmitMisbehaviour),
        MsgConnectionOpenInit(ibc::MsgConnectionOpenInit),
        MsgConnectionOpenTry(ibc::MsgConnectionOpenTry),
        MsgConnectionOpenAck(ibc::MsgConnectionOpenAck),
        MsgConnectionOpenConfirm(ibc::MsgConnectionOpenConfirm),
        MsgChannelOpenInit(ibc::MsgChannelOpenInit),
        MsgChannelOpenTry(ibc::MsgChannelOpenTry),
        MsgChannelOpenAck(ibc::MsgChannelOpenAck),
        MsgChannelOpenConfirm(ibc::MsgChannelOpenConfirm),
        MsgChannelCloseInit(ibc::MsgChannelCloseInit),
        MsgChannelCloseConfirm(ibc::MsgChannelCloseConfirm),
        MsgRecvPacket(ibc::MsgRecvPacket),
        MsgTimeout(ibc::MsgTimeout),
        MsgAcknowledgement(ibc::MsgAcknowledgement),
        MsgTransfer(ibc_transfer::MsgTransfer),
        MsgVerifyInvariant(crisis::MsgVerifyInvariant),
    }
}

impl std::fmt::Display for Msg {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use crate::registry::Family;
        f.write_str(self.type_url())
    }
}
