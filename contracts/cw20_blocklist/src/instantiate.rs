#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;
use cw20_base::state::{MinterData, TokenInfo, TOKEN_INFO};

use cw20_blocklist_package::cw20_blocklist::InstantiateMsg;

use crate::error::ContractError;

// Contract name and version used for migration.
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a new blocklist token with the parameters in the [`InstantiateMsg`].
/// The sender becomes the minter and the only account allowed to manage the blocklist.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    msg.validate()?;

    // Store token info using the cw20-base format
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            mint: Some(MinterData {
                minter: info.sender.clone(),
                cap: None,
            }),
        },
    )?;

    Ok(Response::new().add_attributes([
        ("action", "instantiate_cw20_blocklist"),
        ("minter", info.sender.as_str()),
    ]))
}
