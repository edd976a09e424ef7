use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, CosmosMsg, StdResult, WasmMsg};

use crate::asset::Asset;

/// Delivered by a ledger to the receiving contract of a transfer, inside the
/// transaction that performs it. An error from the receiver reverts the
/// transfer.
#[cw_serde]
pub struct TransferNotification {
    pub from: String,
    pub to: String,
    pub quantity: Asset,
    pub memo: String,
}

#[cw_serde]
enum ReceiverExecuteMsg {
    OnTransfer(TransferNotification),
}

impl TransferNotification {
    pub fn into_cosmos_msg<T>(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg<T>> {
        Ok(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: to_json_binary(&ReceiverExecuteMsg::OnTransfer(self))?,
            funds: vec![],
        }
        .into())
    }
}
