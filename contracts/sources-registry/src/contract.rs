use crate::error::ContractError;
use crate::handler::{
    change_admin, change_code, change_verifier_registry, deploy_source, query_admin_address,
    query_contract_code, query_deployment_costs, query_source_item_address,
    query_verifier_registry_address, set_deployment_costs, set_source_item_code,
};
use crate::state::{Config, CONFIG, CONTRACT_CODE, SOURCE_ITEM_CODE};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use sourcereg::constants::{DEFAULT_MAX_DEPLOY_FEE, DEFAULT_MIN_DEPLOY_FEE};
use sourcereg::sources_registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:sources-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.source_item_code.as_slice().is_empty() {
        return Err(ContractError::EmptyCode {});
    }

    let admin = msg.admin.unwrap_or_else(|| info.sender.to_string());
    CONFIG.save(
        deps.storage,
        &Config {
            admin: deps.api.addr_canonicalize(admin.as_str())?,
            verifier_registry: deps.api.addr_canonicalize(msg.verifier_registry.as_str())?,
            min_fee: msg
                .min_fee
                .unwrap_or_else(|| Uint128::from(DEFAULT_MIN_DEPLOY_FEE)),
            max_fee: msg
                .max_fee
                .unwrap_or_else(|| Uint128::from(DEFAULT_MAX_DEPLOY_FEE)),
        },
    )?;
    SOURCE_ITEM_CODE.save(deps.storage, &msg.source_item_code)?;
    CONTRACT_CODE.save(deps.storage, &Binary::default())?;

    Ok(Response::default()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DeploySource {
            query_id,
            verifier_id,
            content_hash,
            version,
            json_url,
        } => deploy_source(
            deps,
            env,
            info,
            query_id,
            verifier_id,
            content_hash,
            version,
            json_url,
        ),

        // Only admin
        ExecuteMsg::ChangeVerifierRegistry { address } => {
            change_verifier_registry(deps, env, info, address)
        }
        ExecuteMsg::ChangeAdmin { address } => change_admin(deps, env, info, address),
        ExecuteMsg::ChangeCode { code } => change_code(deps, env, info, code),
        ExecuteMsg::SetSourceItemCode { code } => set_source_item_code(deps, env, info, code),
        ExecuteMsg::SetDeploymentCosts { min, max } => {
            set_deployment_costs(deps, env, info, min, max)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetVerifierRegistryAddress {} => {
            to_binary(&query_verifier_registry_address(deps)?)
        }
        QueryMsg::GetAdminAddress {} => to_binary(&query_admin_address(deps)?),
        QueryMsg::GetDeploymentCosts {} => to_binary(&query_deployment_costs(deps)?),
        QueryMsg::GetSourceItemAddress {
            verifier_id,
            content_hash,
        } => to_binary(&query_source_item_address(deps, env, verifier_id, content_hash)?),
        QueryMsg::GetContractCode {} => to_binary(&query_contract_code(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
