#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{ensure, DepsMut, Env, Response};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use cw20_blocklist_package::cw20_blocklist::MigrateMsg;

use crate::error::ContractError;
use crate::instantiate::{CONTRACT_NAME, CONTRACT_VERSION};

/// Name the first releases were stored under.
pub const LEGACY_CONTRACT_NAME: &str = "crates.io:cw20-blocklist";

/// Storage layout is unchanged between releases, only the cw2 version is bumped.
/// Downgrades are rejected.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let contract_version = get_contract_version(deps.storage)?;

    match contract_version.contract.as_ref() {
        CONTRACT_NAME | LEGACY_CONTRACT_NAME => Ok(()),
        _ => Err(ContractError::MigrationError {}),
    }?;

    let stored: Version = contract_version.version.parse()?;
    let current: Version = CONTRACT_VERSION.parse()?;
    ensure!(stored <= current, ContractError::MigrationError {});

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("previous_contract_name", &contract_version.contract)
        .add_attribute("previous_contract_version", &contract_version.version)
        .add_attribute("new_contract_name", CONTRACT_NAME)
        .add_attribute("new_contract_version", CONTRACT_VERSION))
}
