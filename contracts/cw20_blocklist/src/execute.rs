#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{attr, ensure, DepsMut, Env, MessageInfo, Response, StdResult, Uint128};
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from,
};
use cw20_base::contract::{execute_burn, execute_mint, execute_send, execute_transfer};
use cw20_base::state::{MinterData, BALANCES, TOKEN_INFO};
use cw_utils::nonpayable;

use cw20_blocklist_package::cw20_blocklist::ExecuteMsg;

use crate::error::ContractError;
use crate::state::BLOCKED;
use crate::utils::{ensure_minter, ensure_nonzero, ensure_not_blocked, is_blocked};

/// Exposes all the execute functions available in the contract.
///
/// ## Execute messages
/// * **ExecuteMsg::AddToBlockedList { address }** Puts an address on the blocklist.
///
/// * **ExecuteMsg::RemoveFromBlockedList { address }** Takes an address off the blocklist.
///
/// * **ExecuteMsg::UpdateMinter { address }** Hands minting rights over to another address.
///
/// * **ExecuteMsg::DestroyBlockedFunds { address }** Burns the whole balance of a blocked address.
///
/// * **ExecuteMsg::Redeem { amount }** Burns tokens held by the minter.
///
/// Transfers and sends are rejected while the account they spend from is blocked.
/// Mints, redeems, transfers and sends of a zero amount are rejected.
/// Everything else is handled by cw20-base.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddToBlockedList { address } => set_blocked(deps, info, address, true),
        ExecuteMsg::RemoveFromBlockedList { address } => set_blocked(deps, info, address, false),
        ExecuteMsg::UpdateMinter { address } => update_minter(deps, info, address),
        ExecuteMsg::DestroyBlockedFunds { address } => destroy_blocked_funds(deps, info, address),
        ExecuteMsg::Redeem { amount } => {
            ensure_minter(deps.storage, &info.sender)?;
            ensure_nonzero(amount)?;
            Ok(execute_burn(deps, env, info, amount)?)
        }
        ExecuteMsg::Mint { recipient, amount } => {
            ensure_nonzero(amount)?;
            Ok(execute_mint(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Transfer { recipient, amount } => {
            ensure_not_blocked(deps.as_ref(), info.sender.as_str())?;
            ensure_nonzero(amount)?;
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => {
            ensure_not_blocked(deps.as_ref(), info.sender.as_str())?;
            ensure_nonzero(amount)?;
            Ok(execute_send(deps, env, info, contract, amount, msg)?)
        }
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => {
            ensure_not_blocked(deps.as_ref(), &owner)?;
            ensure_nonzero(amount)?;
            Ok(execute_transfer_from(
                deps, env, info, owner, recipient, amount,
            )?)
        }
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => {
            ensure_not_blocked(deps.as_ref(), &owner)?;
            ensure_nonzero(amount)?;
            Ok(execute_send_from(
                deps, env, info, owner, contract, amount, msg,
            )?)
        }
    }
}

/// Adds or removes `address` from the blocklist. Only the minter can call this.
pub fn set_blocked(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    blocked: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure_minter(deps.storage, &info.sender)?;

    let address = deps.api.addr_validate(&address)?;
    BLOCKED.save(deps.storage, &address, &blocked)?;

    let action = if blocked {
        "add_to_blocked_list"
    } else {
        "remove_from_blocked_list"
    };

    Ok(Response::new().add_attributes([
        attr("action", action),
        attr("address", address),
        attr("blocked", blocked.to_string()),
    ]))
}

/// Replaces the minter. The new minter has no cap.
pub fn update_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure_minter(deps.storage, &info.sender)?;

    let new_minter = deps.api.addr_validate(&address)?;

    TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
        token_info.mint = Some(MinterData {
            minter: new_minter.clone(),
            cap: None,
        });
        Ok(token_info)
    })?;

    Ok(Response::new().add_attributes([
        attr("action", "update_minter"),
        attr("new_minter", new_minter),
    ]))
}

/// Burns the entire balance of a blocked `address` and lowers the total supply accordingly.
pub fn destroy_blocked_funds(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure_minter(deps.storage, &info.sender)?;
    ensure!(
        is_blocked(deps.as_ref(), &address),
        ContractError::NotBlocked {}
    );

    let address = deps.api.addr_validate(&address)?;
    let amount = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();

    if !amount.is_zero() {
        BALANCES.save(deps.storage, &address, &Uint128::zero())?;
        TOKEN_INFO.update(deps.storage, |mut token_info| -> StdResult<_> {
            token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
            Ok(token_info)
        })?;
    }

    Ok(Response::new().add_attributes([
        attr("action", "destroy_blocked_funds"),
        attr("from", address),
        attr("by", info.sender),
        attr("amount", amount),
    ]))
}
