use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use cw_multi_test::{Contract, ContractWrapper};

pub fn cw20_blocklist_contract() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new_with_empty(
            cw20_blocklist::execute::execute,
            cw20_blocklist::instantiate::instantiate,
            cw20_blocklist::query::query,
        )
        .with_migrate(cw20_blocklist::migration::migrate),
    )
}

#[cw_serde]
pub struct StubInstantiateMsg {
    pub contract: String,
    pub version: String,
}

fn stub_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: StubInstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, msg.contract, msg.version)?;
    Ok(Response::new())
}

/// Stores an arbitrary cw2 version and nothing else. Used as a migration source.
pub fn versioned_stub_contract() -> Box<dyn Contract<Empty>> {
    let dummy_execute =
        |_: DepsMut, _: Env, _: MessageInfo, _: Empty| -> StdResult<_> { Ok(Response::new()) };

    Box::new(ContractWrapper::new_with_empty(
        dummy_execute,
        stub_instantiate,
        |_: Deps, _: Env, _: Empty| -> StdResult<Binary> { unimplemented!() },
    ))
}
