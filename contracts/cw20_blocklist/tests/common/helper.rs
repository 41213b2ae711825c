use std::collections::BTreeMap;

use anyhow::anyhow;
use cosmwasm_schema::serde::de::DeserializeOwned;
use cosmwasm_schema::serde::Serialize;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, Empty, QueryRequest, StdResult, Uint128, WasmMsg, WasmQuery,
};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{
    no_init, App, AppBuilder, AppResponse, BankKeeper, Executor, MockAddressGenerator,
    MockApiBech32, WasmKeeper,
};

use cw20_blocklist_package::cw20_blocklist::{
    BlockedResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};
use cw20_blocklist_package::{ContractClient, CW20_BLOCKLIST};

use crate::common::contracts::cw20_blocklist_contract;

const PREFIX: &str = "terra";

pub type TerraApp = App<BankKeeper, MockApiBech32>;

fn mock_app() -> TerraApp {
    AppBuilder::new()
        .with_api(MockApiBech32::new(PREFIX))
        .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
        .build(no_init)
}

pub struct Helper {
    pub app: TerraApp,
    pub owner: Addr,
    pub token: Addr,
    pub token_code_id: u64,
    /// Contract name -> deployed address
    pub refs: BTreeMap<String, Addr>,
}

impl Helper {
    pub fn new() -> Self {
        let mut app = mock_app();
        let owner = app.api().addr_make("owner");

        let token_code_id = app.store_code(cw20_blocklist_contract());
        let token = app
            .instantiate_contract(
                token_code_id,
                owner.clone(),
                &InstantiateMsg {
                    name: "Auto Gen".to_string(),
                    symbol: "AUTO".to_string(),
                    decimals: 6,
                },
                &[],
                "cw20-blocklist",
                Some(owner.to_string()),
            )
            .unwrap();

        Self {
            app,
            owner,
            token: token.clone(),
            token_code_id,
            refs: BTreeMap::from([(CW20_BLOCKLIST.to_string(), token)]),
        }
    }

    pub fn addr(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    pub fn execute_token(&mut self, sender: &Addr, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.token.clone(), msg, &[])
    }

    pub fn mint(&mut self, recipient: &Addr, amount: u128) -> AnyResult<AppResponse> {
        let owner = self.owner.clone();
        self.execute_token(
            &owner,
            &ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    pub fn block(&mut self, address: &Addr) -> AnyResult<AppResponse> {
        let owner = self.owner.clone();
        self.execute_token(
            &owner,
            &ExecuteMsg::AddToBlockedList {
                address: address.to_string(),
            },
        )
    }

    pub fn query_balance(&self, address: &Addr) -> StdResult<Uint128> {
        self.app
            .wrap()
            .query_wasm_smart::<BalanceResponse>(
                &self.token,
                &QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .map(|res| res.balance)
    }

    pub fn query_blocked(&self, address: &str) -> StdResult<bool> {
        self.app
            .wrap()
            .query_wasm_smart::<BlockedResponse>(
                &self.token,
                &QueryMsg::IsBlocked {
                    address: address.to_string(),
                },
            )
            .map(|res| res.blocked)
    }

    pub fn query_token_info(&self) -> StdResult<TokenInfoResponse> {
        self.app
            .wrap()
            .query_wasm_smart(&self.token, &QueryMsg::TokenInfo {})
    }

    fn resolve(&self, contract: &str) -> AnyResult<Addr> {
        self.refs
            .get(contract)
            .cloned()
            .ok_or_else(|| anyhow!("unknown contract {contract}"))
    }
}

/// Dispatches binding calls into the multi-test app, resolving contract names through `refs`.
impl ContractClient for Helper {
    type Signer = Addr;
    type Response = AppResponse;
    type Error = anyhow::Error;

    fn query<M, T>(&self, contract: &str, msg: &M) -> AnyResult<T>
    where
        M: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request: QueryRequest<Empty> = WasmQuery::Smart {
            contract_addr: self.resolve(contract)?.to_string(),
            msg: to_json_binary(msg)?,
        }
        .into();

        Ok(self.app.wrap().query(&request)?)
    }

    fn execute<M>(&mut self, signer: &Addr, contract: &str, msg: &M) -> AnyResult<AppResponse>
    where
        M: Serialize + ?Sized,
    {
        let wasm_msg = WasmMsg::Execute {
            contract_addr: self.resolve(contract)?.to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        };

        self.app.execute(signer.clone(), CosmosMsg::Wasm(wasm_msg))
    }
}
