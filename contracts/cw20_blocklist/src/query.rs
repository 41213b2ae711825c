#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdResult};
use cw20_base::allowances::query_allowance;
use cw20_base::contract::{query_balance, query_minter, query_token_info};
use cw20_base::enumerable::{query_all_accounts, query_owner_allowances};

use cw20_blocklist_package::cw20_blocklist::{BlockedResponse, QueryMsg};

use crate::utils::is_blocked;

/// Expose available contract queries.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsBlocked { address } => to_json_binary(&BlockedResponse {
            blocked: is_blocked(deps, &address),
        }),
        // inherited from cw20-base
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::AllAccounts { start_after, limit } => {
            to_json_binary(&query_all_accounts(deps, start_after, limit)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::AllAllowances {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_owner_allowances(deps, owner, start_after, limit)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
    }
}
