use crate::error::ContractError;
use crate::handler::{
    forward_message, query_verifier, query_verifiers, query_verifiers_num, remove_verifier,
    update_verifier,
};
use crate::state::{Config, CONFIG, VERIFIERS_NUM};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use sourcereg::verifier_registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:verifier-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(
        deps.storage,
        &Config {
            capacity: msg.capacity,
        },
    )?;
    VERIFIERS_NUM.save(deps.storage, &0)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateVerifier {
            query_id,
            id,
            quorum,
            endpoints,
            name,
            marketing_url,
        } => update_verifier(
            deps,
            env,
            info,
            query_id,
            id,
            quorum,
            endpoints,
            name,
            marketing_url,
        ),
        ExecuteMsg::RemoveVerifier { query_id, id } => {
            remove_verifier(deps, env, info, query_id, id)
        }
        ExecuteMsg::ForwardMessage {
            query_id,
            description,
            signatures,
        } => forward_message(deps, env, info, query_id, description, signatures),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetVerifier { id } => to_binary(&query_verifier(deps, id)?),
        QueryMsg::GetVerifiersNum {} => to_binary(&query_verifiers_num(deps)?),
        QueryMsg::GetVerifiers {} => to_binary(&query_verifiers(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
